use crate::error::{Error, Result, require_text};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A registered learner. Two students are the same student when they share
/// the same identifier, whatever their name and age.
#[derive(Clone, Debug)]
pub struct Student {
    id: String,
    name: String,
    age: u32,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Result<Self> {
        let (id, name) = (id.into(), name.into());
        require_text("id", &id)?;
        require_text("name", &name)?;
        let age = u32::try_from(age).map_err(|_| Error::invalid("age", "must not be negative"))?;
        Ok(Self { id, name, age })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {}, name: {}, age: {}", self.id, self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_fields() {
        assert!(matches!(
            Student::new("", "Alice", 20),
            Err(Error::InvalidArgument { name: "id", .. })
        ));
        assert!(matches!(
            Student::new("2021001", "  \t", 20),
            Err(Error::InvalidArgument { name: "name", .. })
        ));
        assert!(matches!(
            Student::new("2021001", "Alice", -1),
            Err(Error::InvalidArgument { name: "age", .. })
        ));
        let s = Student::new("2021001", "Alice", 0).unwrap();
        assert_eq!((s.id(), s.name(), s.age()), ("2021001", "Alice", 0));
    }

    #[test]
    fn test_identity_is_the_id() {
        let a = Student::new("2021001", "Alice", 20).unwrap();
        let b = Student::new("2021001", "Bob", 31).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Student::new("2021002", "Alice", 20).unwrap());
    }

    #[test]
    fn test_ordering_follows_id() {
        let mut students = ["b", "a10", "a2", "B"]
            .iter()
            .map(|id| Student::new(*id, "x", 1).unwrap())
            .collect::<Vec<_>>();
        students.sort();
        let ids = students.iter().map(Student::id).collect::<Vec<_>>();
        assert_eq!(ids, ["B", "a10", "a2", "b"]);
        assert_eq!(students[0].cmp(&students[0].clone()), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        let s = Student::new("2021001", "张三", 20).unwrap();
        assert_eq!(s.to_string(), "id: 2021001, name: 张三, age: 20");
    }
}
