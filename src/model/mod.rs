pub use self::score::{Grade, Score};
pub use self::student::Student;

mod score;
mod student;
