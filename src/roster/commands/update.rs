use crate::commands::{get, StudentUpdate};
use crate::error::ValidationError;
use crate::model::{Student, StudentId};
use crate::store::DataStore;
use tracing::debug;

/// Apply a partial update to one student.
///
/// Returns `Ok(None)` when the id is unknown. Changes are staged on a copy of the
/// record and only saved once every provided field has passed validation, so a
/// bad value in any field leaves the stored record exactly as it was.
pub fn run<S: DataStore>(
    store: &mut S,
    id: StudentId,
    update: &StudentUpdate,
) -> Result<Option<Student>, ValidationError> {
    let Some(mut staged) = get::by_id(store, id) else {
        return Ok(None);
    };

    apply(&mut staged, update).inspect_err(|e| debug!(id, error = %e, "rejected update"))?;

    store.save_student(staged.clone());
    debug!(id, name = staged.name(), "student updated");
    Ok(Some(staged))
}

fn apply(student: &mut Student, update: &StudentUpdate) -> Result<(), ValidationError> {
    if let Some(name) = update.effective_name() {
        student.set_name(name)?;
    }
    if let Some(course) = update.effective_course() {
        student.set_course(course)?;
    }
    if let Some(marks) = update.marks {
        student.set_marks(marks)?;
    }
    Ok(())
}
