//! Row types matching the existing `students` table
//!
//! The table is created outside this crate:
//! `student_id SERIAL PRIMARY KEY, first_name TEXT, last_name TEXT,
//! email TEXT UNIQUE, enrollment_date DATE`.

use chrono::NaiveDate;
use roster_core::{Student, StudentId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `students` row, decoded by column name
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudentRow {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            student_id: row.student_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            enrollment_date: row.enrollment_date,
        }
    }
}
