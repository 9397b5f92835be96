//! Student record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-generated primary key of a student
pub type StudentId = i32;

/// A student row as stored in the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key, assigned by the database on insert
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all students (enforced by storage)
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl Student {
    /// First and last name separated by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields supplied by the caller when inserting a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            enrollment_date,
        }
    }

    /// Combine with the id returned by storage into a full record
    pub fn with_id(self, student_id: StudentId) -> Student {
        Student {
            student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            enrollment_date: self.enrollment_date,
        }
    }
}
