use eyre::Result;
use rscores::{Repository, ScoreBook, Student, StudentRepository};

pub fn display_students(students: &[Student]) {
    for s in students {
        println!("  - {} (id: {}, age: {})", s.name(), s.id(), s.age());
    }
}

pub fn display_age_range(repository: &StudentRepository, min_age: u32, max_age: u32) {
    println!("Students aged {min_age} to {max_age}:");
    display_students(&repository.students_by_age(min_age, max_age));
}

/// Letter grade followed by the lowest average giving it.
fn grade_of(book: &ScoreBook, average: f64) -> String {
    let grade = book.grade(average);
    format!("{grade} from {}", grade.threshold())
}

pub fn display_stats(repository: &StudentRepository, book: &ScoreBook) -> Result<()> {
    println!("Averages:");
    for s in repository.all() {
        let average = book.average(s.id())?;
        println!(
            "  - {} (id: {}, average: {:.2}, grade: {})",
            s.name(),
            s.id(),
            average,
            grade_of(book, average)
        );
    }
    Ok(())
}

pub fn display_top(book: &ScoreBook, count: usize) {
    let top = book.top_students(count);
    if top.is_empty() {
        println!("No score recorded");
        return;
    }
    println!("Best averages:");
    for (rank, (id, average)) in top.iter().enumerate() {
        println!("  - rank {}: {} (average {:.2})", rank + 1, id, average);
    }
}

pub fn display_loaded(students: &[Student]) {
    if students.is_empty() {
        println!("No students loaded");
    } else {
        println!("Students loaded from file:");
        display_students(students);
    }
}
