use crate::model::Student;
use crate::store::DataStore;

/// Highest marks first. Equal marks keep insertion order.
pub fn by_marks_descending<S: DataStore>(store: &S) -> Vec<Student> {
    let mut students = store.list_students();
    students.sort_by(|a, b| b.marks().total_cmp(&a.marks()));
    students
}

/// Alphabetical by name, ignoring case. Equal names keep insertion order.
pub fn by_name_ascending<S: DataStore>(store: &S) -> Vec<Student> {
    let mut students = store.list_students();
    students.sort_by_cached_key(|s| s.name().to_lowercase());
    students
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn ids(students: &[Student]) -> Vec<i64> {
        students.iter().map(|s| s.id()).collect()
    }

    #[test]
    fn sorts_by_marks_descending() {
        let store = StoreFixture::new().with_samples().store;
        // 92.5, 85.5, 78.0, 67.0, 44.5
        assert_eq!(
            ids(&by_marks_descending(&store)),
            vec![1001, 1003, 1002, 1004, 1005]
        );
    }

    #[test]
    fn equal_marks_keep_insertion_order() {
        let store = StoreFixture::new()
            .with_student("First", "X", 70.0)
            .with_student("Top", "X", 95.0)
            .with_student("Second", "X", 70.0)
            .store;
        assert_eq!(ids(&by_marks_descending(&store)), vec![1002, 1001, 1003]);
    }

    #[test]
    fn sorts_by_name_ignoring_case() {
        let store = StoreFixture::new()
            .with_student("charlie", "X", 1.0)
            .with_student("Bravo", "X", 2.0)
            .with_student("alpha", "X", 3.0)
            .store;
        let names: Vec<_> = by_name_ascending(&store)
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "Bravo", "charlie"]);
    }

    #[test]
    fn sorting_does_not_reorder_the_store() {
        let store = StoreFixture::new().with_samples().store;
        let _ = by_marks_descending(&store);
        let _ = by_name_ascending(&store);
        assert_eq!(
            ids(&store.list_students()),
            vec![1001, 1002, 1003, 1004, 1005]
        );
    }
}
