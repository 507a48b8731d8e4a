use crate::error::{Error, Result};
use crate::model::Student;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

const HEADER: [&str; 3] = ["StudentId", "Name", "Age"];

#[derive(Serialize)]
struct StudentRecord<'a> {
    id: &'a str,
    name: &'a str,
    age: u32,
}

impl<'a> From<&'a Student> for StudentRecord<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: student.id(),
            name: student.name(),
            age: student.age(),
        }
    }
}

/// Students stored as `StudentId,Name,Age` lines in a CSV file.
///
/// Fields are never quoted nor escaped: an identifier or a name containing
/// a comma cannot be read back.
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn write(&self, students: &[Student]) -> Result<()> {
        write_to(File::create(&self.path)?, students)?;
        info!(count = students.len(), "students saved");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<Student>> {
        let students = read_from(File::open(&self.path)?)?;
        info!(count = students.len(), "students loaded");
        Ok(students)
    }

    /// Like [`CsvStore::write`], but a failure is only logged.
    pub fn save(&self, students: &[Student]) {
        if let Err(e) = self.write(students) {
            error!(path = %self.path.display(), "cannot save students: {e}");
        }
    }

    /// Like [`CsvStore::read`], but a failure is only logged. Students read
    /// before the failure are kept.
    pub fn load(&self) -> Vec<Student> {
        let mut students = Vec::new();
        let result = File::open(&self.path)
            .map_err(Error::from)
            .and_then(|file| read_into(file, &mut students));
        match result {
            Ok(()) => info!(
                path = %self.path.display(),
                count = students.len(),
                "students loaded"
            ),
            Err(e) => error!(
                path = %self.path.display(),
                kept = students.len(),
                "cannot load students: {e}"
            ),
        }
        students
    }
}

pub fn write_to<W: Write>(writer: W, students: &[Student]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for student in students {
        wtr.serialize(StudentRecord::from(student))?;
    }
    wtr.flush()?;
    Ok(())
}

/// The first line is a header and is ignored, whatever it contains. Lines
/// which do not look like a student record are skipped, but a record whose
/// values are rejected by [`Student::new`] aborts the whole read.
pub fn read_from<R: Read>(reader: R) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    read_into(reader, &mut students)?;
    Ok(students)
}

fn read_into<R: Read>(reader: R, students: &mut Vec<Student>) -> Result<()> {
    let mut reader = BufReader::new(reader);
    let header_lines = u64::from(reader.read_until(b'\n', &mut Vec::new())? > 0);
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line) + header_lines;
        let Some((id, name, age)) = parse_record(&record) else {
            debug!(line, record = ?record, "skipping malformed record");
            continue;
        };
        let student = Student::new(id, name, age).map_err(|e| Error::Record {
            line,
            source: Box::new(e),
        })?;
        students.push(student);
    }
    Ok(())
}

fn parse_record(record: &StringRecord) -> Option<(&str, &str, i32)> {
    if record.len() != 3 {
        return None;
    }
    let (id, name) = (&record[0], &record[1]);
    if id.trim().is_empty() || name.trim().is_empty() {
        return None;
    }
    let age = record[2].trim().parse().ok()?;
    Some((id, name, age))
}
