use super::{DataStore, FIRST_STUDENT_ID};
use crate::model::{Student, StudentId};
use std::collections::HashMap;

/// In-memory storage.
///
/// Records sit in a vector (insertion order) with an id → position map beside
/// it, so lookups by id don't scan. Removing a record shifts the positions of
/// everything after it.
#[derive(Debug)]
pub struct InMemoryStore {
    students: Vec<Student>,
    positions: HashMap<StudentId, usize>,
    next_id: StudentId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            positions: HashMap::new(),
            next_id: FIRST_STUDENT_ID,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_student(&mut self, student: Student) {
        match self.positions.get(&student.id()).copied() {
            Some(pos) => self.students[pos] = student,
            None => {
                self.positions.insert(student.id(), self.students.len());
                self.students.push(student);
            }
        }
    }

    fn get_student(&self, id: StudentId) -> Option<Student> {
        self.positions
            .get(&id)
            .map(|&pos| self.students[pos].clone())
    }

    fn list_students(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn delete_student(&mut self, id: StudentId) -> Option<Student> {
        let pos = self.positions.remove(&id)?;
        let removed = self.students.remove(pos);
        for student in &self.students[pos..] {
            if let Some(p) = self.positions.get_mut(&student.id()) {
                *p -= 1;
            }
        }
        Some(removed)
    }

    fn contains(&self, id: StudentId) -> bool {
        self.positions.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.students.len()
    }

    fn peek_next_id(&self) -> StudentId {
        self.next_id
    }

    fn allocate_id(&mut self) -> StudentId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// --- Test Fixtures ---
