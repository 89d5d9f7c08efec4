//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The [`DataStore`] trait
//! describes raw record storage; validation and id-assignment rules live in the
//! command layer, which is generic over any store.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Records live for the life of the
//!   process and nothing is written anywhere.
//!
//! ## Ownership
//!
//! The store is the sole owner of its records. Every read hands out clones, so a
//! caller holding a [`Student`] can mutate it freely without touching stored state.
//! The only way to change a stored record is to [`DataStore::save_student`] a
//! replacement.
//!
//! ## Identifier Counter
//!
//! Each store owns its own counter, starting at [`FIRST_STUDENT_ID`]. The counter
//! only moves forward, and only when [`DataStore::allocate_id`] is called, so ids
//! are never reused within a store even after deletion, and independent stores
//! (e.g. in tests) never interfere with each other.

use crate::model::{Student, StudentId};

pub mod memory;

/// The first id handed out by a fresh store.
pub const FIRST_STUDENT_ID: StudentId = 1001;

/// Abstract interface for student storage.
pub trait DataStore {
    /// Save a student (insert, or replace the record with the same id in place)
    fn save_student(&mut self, student: Student);

    /// Get a copy of the student with the given id
    fn get_student(&self, id: StudentId) -> Option<Student>;

    /// List copies of all students in insertion order
    fn list_students(&self) -> Vec<Student>;

    /// Remove a student, returning it if it was present
    fn delete_student(&mut self, id: StudentId) -> Option<Student>;

    fn contains(&self, id: StudentId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next [`allocate_id`](DataStore::allocate_id) call will return
    fn peek_next_id(&self) -> StudentId;

    /// Consume the next id
    fn allocate_id(&mut self) -> StudentId;
}
