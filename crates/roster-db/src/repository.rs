//! Repository seam over the student accessor

use crate::{DbResult, Outcome, StudentStore};
use roster_core::{NewStudent, Student, StudentId};

/// The four CRUD operations the demo sequence needs
#[async_trait::async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students ordered by ascending id
    async fn all_students(&self) -> DbResult<Outcome<Vec<Student>>>;

    /// Insert and return the storage-assigned id
    async fn add_student(&self, student: &NewStudent) -> DbResult<Outcome<StudentId>>;

    async fn update_student_email(
        &self,
        student_id: StudentId,
        new_email: &str,
    ) -> DbResult<Outcome<()>>;

    async fn delete_student(&self, student_id: StudentId) -> DbResult<Outcome<()>>;
}

#[async_trait::async_trait]
impl StudentRepository for StudentStore {
    async fn all_students(&self) -> DbResult<Outcome<Vec<Student>>> {
        StudentStore::all_students(self).await
    }

    async fn add_student(&self, student: &NewStudent) -> DbResult<Outcome<StudentId>> {
        StudentStore::add_student(self, student).await
    }

    async fn update_student_email(
        &self,
        student_id: StudentId,
        new_email: &str,
    ) -> DbResult<Outcome<()>> {
        StudentStore::update_student_email(self, student_id, new_email).await
    }

    async fn delete_student(&self, student_id: StudentId) -> DbResult<Outcome<()>> {
        StudentStore::delete_student(self, student_id).await
    }
}
