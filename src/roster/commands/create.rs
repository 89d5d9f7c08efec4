use crate::error::ValidationError;
use crate::model::Student;
use crate::store::DataStore;
use tracing::debug;

/// Add a student under the next free id.
///
/// The record is validated against the id the store *would* hand out, and the
/// id is only consumed once validation has passed, so a rejected call leaves
/// no gap in the sequence.
pub fn run<S: DataStore>(
    store: &mut S,
    name: &str,
    course: &str,
    marks: f64,
) -> Result<Student, ValidationError> {
    let student = Student::new(store.peek_next_id(), name, course, marks)
        .inspect_err(|e| debug!(error = %e, "rejected new student"))?;

    store.allocate_id();
    store.save_student(student.clone());
    debug!(id = student.id(), name = student.name(), "student added");
    Ok(student)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn assigns_increasing_ids() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, "Ann", "Art", 55.0).unwrap();
        let b = run(&mut store, "Ben", "Biology", 65.0).unwrap();
        assert_eq!(a.id(), 1001);
        assert_eq!(b.id(), 1002);
        assert_eq!(store.peek_next_id(), 1003);
    }

    #[test]
    fn failed_add_does_not_consume_an_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Ann", "Art", 55.0).unwrap();

        assert_eq!(
            run(&mut store, "", "Art", 55.0).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            run(&mut store, "Ben", "  ", 55.0).unwrap_err(),
            ValidationError::EmptyCourse
        );
        assert!(run(&mut store, "Ben", "Art", 100.5).is_err());
        assert_eq!(store.peek_next_id(), 1002);
        assert_eq!(store.len(), 1);

        let next = run(&mut store, "Ben", "Art", 100.0).unwrap();
        assert_eq!(next.id(), 1002);
    }

    #[test]
    fn round_trips_trimmed_fields() {
        let mut store = InMemoryStore::new();
        let added = run(&mut store, "  Grace Hopper ", " Navy ", 88.25).unwrap();

        let found = get::by_id(&store, added.id()).unwrap();
        assert_eq!(found.id(), added.id());
        assert_eq!(found.name(), "Grace Hopper");
        assert_eq!(found.course(), "Navy");
        assert_eq!(found.marks(), 88.25);
    }
}
