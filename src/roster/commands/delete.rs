use crate::model::{Student, StudentId};
use crate::store::DataStore;
use tracing::debug;

/// Remove a student, returning the removed record or `None` if the id is unknown.
pub fn run<S: DataStore>(store: &mut S, id: StudentId) -> Option<Student> {
    if id <= 0 {
        return None;
    }
    let removed = store.delete_student(id)?;
    debug!(id, name = removed.name(), "student deleted");
    Some(removed)
}
