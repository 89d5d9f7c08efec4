//! # Command Layer
//!
//! Business logic for every roster operation, one module per group. Each
//! function takes a store (or a slice of records) plus plain Rust values and
//! returns plain Rust values: no I/O, no formatting.
//!
//! Outcomes are split in the type system:
//! - `Option::None` means "found nothing" (unknown id, no matches). It is a
//!   normal result.
//! - `Err(ValidationError)` means the requested change was invalid. The store is
//!   untouched when this happens.

pub mod create;
pub mod delete;
pub mod get;
pub mod search;
pub mod seed;
pub mod sort;
pub mod stats;
pub mod update;

/// A partial update. `None` fields mean "no change".
///
/// Blank strings are treated like `None`: they never reach the validators, so an
/// update can't be used to clear a name or course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub course: Option<String>,
    pub marks: Option<f64>,
}

impl StudentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn with_marks(mut self, marks: f64) -> Self {
        self.marks = Some(marks);
        self
    }

    /// Name to apply, skipping blank input
    pub fn effective_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Course to apply, skipping blank input
    pub fn effective_course(&self) -> Option<&str> {
        non_blank(self.course.as_deref())
    }

    pub fn is_noop(&self) -> bool {
        self.effective_name().is_none()
            && self.effective_course().is_none()
            && self.marks.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_no_change() {
        let update = StudentUpdate::new().with_name("   ").with_course("");
        assert_eq!(update.effective_name(), None);
        assert_eq!(update.effective_course(), None);
        assert!(update.is_noop());
    }

    #[test]
    fn test_marks_only_update_is_not_noop() {
        let update = StudentUpdate::new().with_marks(0.0);
        assert!(!update.is_noop());
    }
}
