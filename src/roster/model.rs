//! # Domain Model: Students and Grade Bands
//!
//! This module defines the core data structures for roster: [`Student`] and [`Grade`].
//!
//! ## Field Rules
//!
//! | Field    | Rule                                   | Stored as         |
//! |----------|----------------------------------------|-------------------|
//! | `id`     | Assigned by the store, never changes   | [`StudentId`]     |
//! | `name`   | Non-empty after trimming whitespace    | Trimmed string    |
//! | `course` | Non-empty after trimming whitespace    | Trimmed string    |
//! | `marks`  | Within `[0, 100]` (NaN is rejected)    | `f64`             |
//!
//! A [`Student`] can only be obtained through [`Student::new`], which runs the
//! validators below, and its fields can only change through the validating
//! setters. A setter that fails leaves the record untouched, so a student is
//! never observable in an invalid state.
//!
//! ## Derived Values
//!
//! Grade and pass status are computed from marks on demand and never stored:
//!
//! ```text
//! marks >= 90  -> A+
//! marks >= 80  -> A
//! marks >= 70  -> B
//! marks >= 60  -> C
//! marks >= 50  -> D      (passing threshold)
//! otherwise    -> F
//! ```
//!
//! Boundary values belong to the higher band: exactly 90 is `A+`.
//!
//! ## Identity
//!
//! Two students are equal when their ids match, regardless of the other fields.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ValidationError;

/// Identifier assigned by the store. Valid ids are always positive.
pub type StudentId = i64;

/// Lowest marks that still count as passing.
pub const PASS_MARK: f64 = 50.0;

pub const MIN_MARKS: f64 = 0.0;
pub const MAX_MARKS: f64 = 100.0;

/// Validates a student name, returning the trimmed value.
///
/// # Examples
/// ```
/// use roster::model::validate_name;
///
/// assert_eq!(validate_name("  Ada Lovelace ").unwrap(), "Ada Lovelace");
/// assert!(validate_name("").is_err());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Validates a course name, returning the trimmed value.
pub fn validate_course(course: &str) -> Result<String, ValidationError> {
    let trimmed = course.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCourse);
    }
    Ok(trimmed.to_string())
}

/// Validates marks against the closed interval `[0, 100]`.
///
/// # Examples
/// ```
/// use roster::model::validate_marks;
///
/// assert!(validate_marks(0.0).is_ok());
/// assert!(validate_marks(100.0).is_ok());
/// assert!(validate_marks(-0.5).is_err());
/// assert!(validate_marks(f64::NAN).is_err());
/// ```
pub fn validate_marks(marks: f64) -> Result<f64, ValidationError> {
    if !(MIN_MARKS..=MAX_MARKS).contains(&marks) {
        return Err(ValidationError::MarksOutOfRange(marks));
    }
    Ok(marks)
}

/// Grade band, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Every band, best first. This is also the tie-break order for statistics.
    pub const ALL: [Grade; 6] = [
        Grade::APlus,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Grade::APlus
        } else if marks >= 80.0 {
            Grade::A
        } else if marks >= 70.0 {
            Grade::B
        } else if marks >= 60.0 {
            Grade::C
        } else if marks >= PASS_MARK {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers in table rows apply
        f.pad(self.label())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    /// Case-insensitive match against the closed set of labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.label() == normalized)
            .ok_or_else(|| ValidationError::UnknownGrade(s.to_string()))
    }
}

/// One student record.
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    name: String,
    course: String,
    marks: f64,
}

impl Student {
    pub fn new(
        id: StudentId,
        name: &str,
        course: &str,
        marks: f64,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let course = validate_course(course)?;
        let marks = validate_marks(marks)?;
        Ok(Self {
            id,
            name,
            course,
            marks,
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_course(&mut self, course: &str) -> Result<(), ValidationError> {
        self.course = validate_course(course)?;
        Ok(())
    }

    pub fn set_marks(&mut self, marks: f64) -> Result<(), ValidationError> {
        self.marks = validate_marks(marks)?;
        Ok(())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_marks(self.marks)
    }

    pub fn is_passing(&self) -> bool {
        self.marks >= PASS_MARK
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_passing() {
            "PASSING"
        } else {
            "FAILING"
        }
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

/// Fixed-width table row: id, name, course, marks (2 decimals), grade.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<5} | Name: {:<20} | Course: {:<15} | Marks: {:<6.2} | Grade: {}",
            self.id,
            self.name,
            self.course,
            self.marks,
            self.grade()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student::new(1001, "Alice Johnson", "Computer Science", 92.5).unwrap()
    }

    #[test]
    fn test_new_trims_strings() {
        let student = Student::new(7, "  Bob  ", "\tMaths ", 60.0).unwrap();
        assert_eq!(student.name(), "Bob");
        assert_eq!(student.course(), "Maths");
    }

    #[test]
    fn test_new_rejects_blank_fields() {
        assert_eq!(
            Student::new(1, " ", "Physics", 50.0).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            Student::new(1, "Carol", "", 50.0).unwrap_err(),
            ValidationError::EmptyCourse
        );
    }

    #[test]
    fn test_new_rejects_marks_out_of_range() {
        assert!(matches!(
            Student::new(1, "Carol", "Physics", 100.01),
            Err(ValidationError::MarksOutOfRange(_))
        ));
        assert!(matches!(
            Student::new(1, "Carol", "Physics", -1.0),
            Err(ValidationError::MarksOutOfRange(_))
        ));
        assert!(Student::new(1, "Carol", "Physics", 0.0).is_ok());
        assert!(Student::new(1, "Carol", "Physics", 100.0).is_ok());
    }

    #[test]
    fn test_failed_setters_leave_record_unchanged() {
        let mut student = sample();
        assert!(student.set_name("   ").is_err());
        assert!(student.set_course("").is_err());
        assert!(student.set_marks(150.0).is_err());
        assert!(student.set_marks(f64::NAN).is_err());

        assert_eq!(student.name(), "Alice Johnson");
        assert_eq!(student.course(), "Computer Science");
        assert_eq!(student.marks(), 92.5);
    }

    #[test]
    fn test_setters_apply_valid_values() {
        let mut student = sample();
        student.set_name(" Alice J. ").unwrap();
        student.set_course("Data Science").unwrap();
        student.set_marks(71.0).unwrap();
        assert_eq!(student.name(), "Alice J.");
        assert_eq!(student.course(), "Data Science");
        assert_eq!(student.grade(), Grade::B);
    }

    #[test]
    fn test_grade_boundaries_belong_to_higher_band() {
        assert_eq!(Grade::from_marks(90.0), Grade::APlus);
        assert_eq!(Grade::from_marks(89.999), Grade::A);
        assert_eq!(Grade::from_marks(80.0), Grade::A);
        assert_eq!(Grade::from_marks(70.0), Grade::B);
        assert_eq!(Grade::from_marks(60.0), Grade::C);
        assert_eq!(Grade::from_marks(50.0), Grade::D);
        assert_eq!(Grade::from_marks(49.999), Grade::F);
        assert_eq!(Grade::from_marks(0.0), Grade::F);
    }

    #[test]
    fn test_passing_threshold() {
        let mut student = sample();
        student.set_marks(50.0).unwrap();
        assert!(student.is_passing());
        assert_eq!(student.status_label(), "PASSING");
        student.set_marks(49.999).unwrap();
        assert!(!student.is_passing());
        assert_eq!(student.status_label(), "FAILING");
    }

    #[test]
    fn test_grade_parsing_is_case_insensitive() {
        assert_eq!("a+".parse::<Grade>().unwrap(), Grade::APlus);
        assert_eq!(" b ".parse::<Grade>().unwrap(), Grade::B);
        assert_eq!("F".parse::<Grade>().unwrap(), Grade::F);
        assert_eq!(
            "Z".parse::<Grade>().unwrap_err(),
            ValidationError::UnknownGrade("Z".to_string())
        );
        assert!("A++".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Student::new(1001, "Alice", "CS", 10.0).unwrap();
        let b = Student::new(1001, "Someone Else", "Art", 99.0).unwrap();
        let c = Student::new(1002, "Alice", "CS", 10.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_row_columns() {
        let row = sample().to_string();
        assert_eq!(
            row,
            "ID: 1001  | Name: Alice Johnson        | Course: Computer Science | Marks: 92.50  | Grade: A+"
        );
    }
}
