use crate::error::{Error, Result, require_text};
use std::fmt;

/// The result obtained in one subject.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    subject: String,
    points: f64,
}

impl Score {
    pub const MAX_POINTS: f64 = 100.0;

    pub fn new(subject: impl Into<String>, points: f64) -> Result<Self> {
        let subject = subject.into();
        require_text("subject", &subject)?;
        if !(0.0..=Self::MAX_POINTS).contains(&points) {
            return Err(Error::invalid(
                "points",
                format!("{points} is not between 0 and {}", Self::MAX_POINTS),
            ));
        }
        Ok(Self { subject, points })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn points(&self) -> f64 {
        self.points
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subject: {}, points: {}", self.subject, self.points)
    }
}

/// Letter grade, each variant holding the lowest points it covers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Grade {
    F = 0,
    D = 60,
    C = 70,
    B = 80,
    A = 90,
}

impl Grade {
    /// Values outside of `0..=100` are not clamped.
    pub fn from_points(points: f64) -> Self {
        if points >= 90.0 {
            Self::A
        } else if points >= 80.0 {
            Self::B
        } else if points >= 70.0 {
            Self::C
        } else if points >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn threshold(self) -> u32 {
        self as u32
    }

    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_validation() {
        assert!(Score::new("math", 0.0).is_ok());
        assert!(Score::new("math", 100.0).is_ok());
        assert!(matches!(
            Score::new("math", 100.5),
            Err(Error::InvalidArgument { name: "points", .. })
        ));
        assert!(matches!(
            Score::new("math", -0.1),
            Err(Error::InvalidArgument { name: "points", .. })
        ));
        assert!(Score::new("math", f64::NAN).is_err());
        assert!(matches!(
            Score::new(" ", 50.0),
            Err(Error::InvalidArgument { name: "subject", .. })
        ));
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_points(90.0), Grade::A);
        assert_eq!(Grade::from_points(89.999), Grade::B);
        assert_eq!(Grade::from_points(80.0), Grade::B);
        assert_eq!(Grade::from_points(70.0), Grade::C);
        assert_eq!(Grade::from_points(60.0), Grade::D);
        assert_eq!(Grade::from_points(59.999), Grade::F);
    }

    #[test]
    fn test_grade_is_not_clamped() {
        assert_eq!(Grade::from_points(-10.0), Grade::F);
        assert_eq!(Grade::from_points(150.0), Grade::A);
    }

    #[test]
    fn test_grade_threshold_and_order() {
        assert_eq!(Grade::D.threshold(), 60);
        assert_eq!(Grade::F.threshold(), 0);
        assert!(Grade::A > Grade::B && Grade::D > Grade::F);
        assert_eq!(Grade::C.to_string(), "C");
    }
}
