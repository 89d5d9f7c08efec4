use crate::commands::create;
use crate::error::ValidationError;
use crate::model::Student;
use crate::store::DataStore;
use tracing::debug;

/// Name, course, marks.
pub const SAMPLE_STUDENTS: [(&str, &str, f64); 5] = [
    ("Alice Johnson", "Computer Science", 92.5),
    ("Bob Smith", "Mathematics", 78.0),
    ("Carol Davis", "Physics", 85.5),
    ("David Wilson", "Chemistry", 67.0),
    ("Emma Brown", "Biology", 44.5),
];

/// Insert the sample students through the regular add path.
pub fn run<S: DataStore>(store: &mut S) -> Result<Vec<Student>, ValidationError> {
    let added = SAMPLE_STUDENTS
        .iter()
        .map(|(name, course, marks)| create::run(store, name, course, *marks))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = added.len(), "seeded sample students");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_ids_1001_to_1005() {
        let mut store = InMemoryStore::new();
        let added = run(&mut store).unwrap();

        let ids: Vec<_> = added.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![1001, 1002, 1003, 1004, 1005]);
        assert_eq!(store.len(), 5);
        assert_eq!(store.peek_next_id(), 1006);
        assert_eq!(store.get_student(1005).unwrap().name(), "Emma Brown");
    }
}
