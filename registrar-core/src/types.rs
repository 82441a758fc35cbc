//! Domain types for the registrar roster.
//!
//! A [`Student`] can only be built from names that passed validation, so any
//! value of the type is safe to register, display, or persist. The JSON wire
//! shape (`FirstName` / `LastName` / `CourseName` keys) lives in a private
//! wire struct; decoding goes through the same validating constructor as
//! interactive input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Name fields
// ---------------------------------------------------------------------------

/// Which of the two person-name fields a value belongs to.
///
/// Carried inside [`ValidationError`] so a rejection names the field the
/// user was typing, matching the per-field console prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => write!(f, "first"),
            NameField::Last => write!(f, "last"),
        }
    }
}

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A validated person name: non-empty, alphabetic characters only.
///
/// There is no unchecked constructor and no `Deserialize` impl; every `Name`
/// in the program went through [`Name::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Validate `value` as the given name field.
    ///
    /// Rejects the empty string and any string containing a non-alphabetic
    /// character (digits, whitespace, punctuation). Unicode letters are
    /// accepted.
    pub fn new(field: NameField, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyName { field });
        }
        if !value.chars().all(char::is_alphabetic) {
            return Err(ValidationError::NonAlphabetic { field, value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A free-form course label.
///
/// Deliberately unvalidated: any string, including the empty string, names a
/// course. The asymmetry with [`Name`] is part of the data model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseName(pub String);

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CourseName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CourseName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Registration record
// ---------------------------------------------------------------------------

/// One student-course registration.
///
/// The field types carry the invariants, so literal construction from already
/// validated parts is legal anywhere; [`Student::new`] validates raw strings
/// in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentWire", into = "StudentWire")]
pub struct Student {
    pub first_name: Name,
    pub last_name: Name,
    pub course_name: CourseName,
}

impl Student {
    /// Validate both names and build the record. The course name is accepted
    /// verbatim.
    pub fn new(
        first_name: &str,
        last_name: &str,
        course_name: impl Into<CourseName>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: Name::new(NameField::First, first_name)?,
            last_name: Name::new(NameField::Last, last_name)?,
            course_name: course_name.into(),
        })
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// On-disk JSON shape of a record.
///
/// The `FirstName` / `LastName` / `CourseName` key casing is the
/// compatibility contract with existing `Enrollments.json` files and must not
/// change. Exactly these three keys: unknown keys fail the decode.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
struct StudentWire {
    first_name: String,
    last_name: String,
    course_name: String,
}

impl TryFrom<StudentWire> for Student {
    type Error = ValidationError;

    fn try_from(wire: StudentWire) -> Result<Self, Self::Error> {
        Student::new(&wire.first_name, &wire.last_name, wire.course_name)
    }
}

impl From<Student> for StudentWire {
    fn from(student: Student) -> Self {
        Self {
            first_name: student.first_name.0,
            last_name: student.last_name.0,
            course_name: student.course_name.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
