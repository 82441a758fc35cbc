//! In-memory roster store.
//!
//! An append-only ordered sequence of [`Student`] records, owned by the
//! interactive session for the lifetime of the process. Insertion order is
//! also display and save order.

use crate::types::Student;

/// Ordered collection of registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the sequence.
    ///
    /// Infallible: a constructed [`Student`] already passed validation, and
    /// duplicate (name, course) pairs are allowed.
    pub fn register(&mut self, student: Student) {
        self.students.push(student);
    }

    /// All records, in registration order, read-only.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl From<Vec<Student>> for Roster {
    fn from(students: Vec<Student>) -> Self {
        Self { students }
    }
}
