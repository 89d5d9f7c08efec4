use crate::model::{Grade, Student};
use crate::store::DataStore;

/// Case-insensitive substring match on names. A blank query matches nothing.
pub fn by_name<S: DataStore>(store: &S, query: &str) -> Vec<Student> {
    matching(store, query, Student::name)
}

/// Case-insensitive substring match on courses. A blank query matches nothing.
pub fn by_course<S: DataStore>(store: &S, query: &str) -> Vec<Student> {
    matching(store, query, Student::course)
}

/// Exact, case-insensitive match on a grade label. Labels outside
/// A+, A, B, C, D, F match nothing.
pub fn by_grade<S: DataStore>(store: &S, label: &str) -> Vec<Student> {
    let Ok(grade) = label.parse::<Grade>() else {
        return Vec::new();
    };
    store
        .list_students()
        .into_iter()
        .filter(|s| s.grade() == grade)
        .collect()
}

fn matching<S, F>(store: &S, query: &str, field: F) -> Vec<Student>
where
    S: DataStore,
    F: Fn(&Student) -> &str,
{
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    store
        .list_students()
        .into_iter()
        .filter(|s| field(s).to_lowercase().contains(&term))
        .collect()
}
