//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all roster operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store (nothing else holds a reference to it)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types**: records, `Option` for lookups, `Result` for
//!   validated mutations
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or files
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend. Only
//! [`InMemoryStore`] exists today, and the convenience constructors use it.
//!
//! ## Concurrency
//!
//! Every call is synchronous and completes before returning. Mutating calls take
//! `&mut self`, so a host that shares a roster across threads has to serialize
//! access itself (e.g. wrap it in a `Mutex`).

use crate::commands;
use crate::error::ValidationError;
use crate::model::{Student, StudentId};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

/// The main API facade for roster operations.
#[derive(Debug)]
pub struct RosterApi<S: DataStore> {
    store: S,
}

impl RosterApi<InMemoryStore> {
    /// An empty in-memory roster.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// An in-memory roster holding the five sample students (ids 1001–1005).
    pub fn with_sample_data() -> Result<Self, ValidationError> {
        let mut api = Self::in_memory();
        commands::seed::run(&mut api.store)?;
        Ok(api)
    }
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_record(
        &mut self,
        name: &str,
        course: &str,
        marks: f64,
    ) -> Result<Student, ValidationError> {
        commands::create::run(&mut self.store, name, course, marks)
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<Student> {
        commands::get::by_id(&self.store, id)
    }

    /// `Ok(None)` when the id is unknown.
    pub fn update_record(
        &mut self,
        id: StudentId,
        update: &StudentUpdate,
    ) -> Result<Option<Student>, ValidationError> {
        commands::update::run(&mut self.store, id, update)
    }

    /// The removed record, or `None` when the id is unknown.
    pub fn delete_record(&mut self, id: StudentId) -> Option<Student> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_by_name(&self, query: &str) -> Vec<Student> {
        commands::search::by_name(&self.store, query)
    }

    pub fn search_by_course(&self, query: &str) -> Vec<Student> {
        commands::search::by_course(&self.store, query)
    }

    pub fn search_by_grade(&self, label: &str) -> Vec<Student> {
        commands::search::by_grade(&self.store, label)
    }

    pub fn all_records(&self) -> Vec<Student> {
        commands::get::all(&self.store)
    }

    pub fn sorted_by_marks_descending(&self) -> Vec<Student> {
        commands::sort::by_marks_descending(&self.store)
    }

    pub fn sorted_by_name_ascending(&self) -> Vec<Student> {
        commands::sort::by_name_ascending(&self.store)
    }

    pub fn exists(&self, id: StudentId) -> bool {
        commands::get::exists(&self.store, id)
    }

    pub fn count(&self) -> usize {
        commands::get::count(&self.store)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn peek_next_id(&self) -> StudentId {
        self.store.peek_next_id()
    }

    pub fn statistics(&self) -> Statistics {
        commands::stats::run(&self.store)
    }
}

pub use commands::stats::{compute as compute_statistics, Statistics};
pub use commands::StudentUpdate;
