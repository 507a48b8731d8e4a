use crate::error::{Error, Result};
use crate::model::Student;

pub trait Repository<T> {
    fn add(&mut self, item: T) -> Result<()>;
    fn remove(&mut self, item: &T) -> bool;
    fn all(&self) -> Vec<T>;
    fn find<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool;
}

/// Students in registration order, at most one per identifier.
#[derive(Clone, Debug, Default)]
pub struct StudentRepository {
    students: Vec<Student>,
}

impl StudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Inclusive on both ends. An inverted range matches nobody.
    pub fn students_by_age(&self, min_age: u32, max_age: u32) -> Vec<Student> {
        self.find(|s| (min_age..=max_age).contains(&s.age()))
    }
}

impl Repository<Student> for StudentRepository {
    fn add(&mut self, student: Student) -> Result<()> {
        if self.students.contains(&student) {
            return Err(Error::Duplicate(student.id().to_owned()));
        }
        self.students.push(student);
        Ok(())
    }

    fn remove(&mut self, student: &Student) -> bool {
        if let Some(pos) = self.students.iter().position(|s| s == student) {
            self.students.remove(pos);
            true
        } else {
            false
        }
    }

    fn all(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn find<F>(&self, predicate: F) -> Vec<Student>
    where
        F: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|&s| predicate(s))
            .cloned()
            .collect()
    }
}
