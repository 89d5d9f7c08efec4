use crate::model::{Student, StudentId};
use crate::store::DataStore;

/// Look a student up by id. Ids that can never be valid (`<= 0`) short-circuit
/// to `None` without touching the store.
pub fn by_id<S: DataStore>(store: &S, id: StudentId) -> Option<Student> {
    if id <= 0 {
        return None;
    }
    store.get_student(id)
}

/// Every student, in insertion order.
pub fn all<S: DataStore>(store: &S) -> Vec<Student> {
    store.list_students()
}

pub fn exists<S: DataStore>(store: &S, id: StudentId) -> bool {
    id > 0 && store.contains(id)
}

pub fn count<S: DataStore>(store: &S) -> usize {
    store.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_existing_ids_only() {
        let store = StoreFixture::new().with_students(2).store;
        assert_eq!(by_id(&store, 1001).unwrap().name(), "Test Student 1");
        assert!(by_id(&store, 1003).is_none());
        assert!(by_id(&store, 0).is_none());
        assert!(by_id(&store, -5).is_none());
        assert!(by_id(&store, i64::MIN).is_none());
    }

    #[test]
    fn exists_and_count() {
        let store = StoreFixture::new().with_students(3).store;
        assert!(exists(&store, 1002));
        assert!(!exists(&store, 999));
        assert!(!exists(&store, -1));
        assert_eq!(count(&store), 3);
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = StoreFixture::new()
            .with_student("Zed", "Z", 10.0)
            .with_student("Amy", "A", 90.0)
            .store;
        let names: Vec<_> = all(&store).into_iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }
}
