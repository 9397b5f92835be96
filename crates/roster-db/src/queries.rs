//! CRUD operations on the `students` table

use crate::client::close;
use crate::schema::StudentRow;
use crate::{Connector, DbResult, Outcome};
use roster_config::DbConfig;
use roster_core::{NewStudent, Student, StudentId};
use tracing::{debug, info, instrument, warn};

/// Student accessor; one connection per call, one statement per connection
#[derive(Clone)]
pub struct StudentStore {
    connector: Connector,
}

impl StudentStore {
    pub fn new(config: DbConfig) -> Self {
        Self::with_connector(Connector::new(config))
    }

    pub fn with_connector(connector: Connector) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    /// Get all students ordered by id
    #[instrument(skip(self))]
    pub async fn all_students(&self) -> DbResult<Outcome<Vec<Student>>> {
        let Some(mut conn) = self.connector.connect().await else {
            debug!("Could not connect; aborting SELECT");
            return Ok(Outcome::Unavailable);
        };

        let result = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT student_id, first_name, last_name, email, enrollment_date
            FROM students
            ORDER BY student_id ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await;
        close(conn).await;

        let rows = result?;
        debug!("Retrieved {} students", rows.len());
        Ok(Outcome::Done(rows.into_iter().map(Student::from).collect()))
    }

    /// Get one student by id
    #[instrument(skip(self))]
    pub async fn get_student(&self, student_id: StudentId) -> DbResult<Outcome<Student>> {
        let Some(mut conn) = self.connector.connect().await else {
            debug!("Could not connect; aborting SELECT");
            return Ok(Outcome::Unavailable);
        };

        let result = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT student_id, first_name, last_name, email, enrollment_date
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(&mut conn)
        .await;
        close(conn).await;

        Ok(match result? {
            Some(row) => Outcome::Done(row.into()),
            None => Outcome::NotFound,
        })
    }

    /// Insert a student and return the id assigned by the database
    #[instrument(skip(self))]
    pub async fn add_student(&self, student: &NewStudent) -> DbResult<Outcome<StudentId>> {
        let Some(mut conn) = self.connector.connect().await else {
            debug!("Could not connect; aborting INSERT");
            return Ok(Outcome::Unavailable);
        };

        let result = sqlx::query_scalar::<_, StudentId>(
            r#"
            INSERT INTO students (first_name, last_name, email, enrollment_date)
            VALUES ($1, $2, $3, $4)
            RETURNING student_id
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.enrollment_date)
        .fetch_one(&mut conn)
        .await;
        close(conn).await;

        match result {
            Ok(student_id) => {
                info!("Inserted student {} ({})", student_id, student.email);
                Ok(Outcome::Done(student_id))
            }
            Err(e) if is_unique_violation(&e) => {
                warn!("Duplicate email: {} (UNIQUE violation)", student.email);
                Ok(Outcome::Conflict {
                    email: student.email.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Change the email of one student
    #[instrument(skip(self))]
    pub async fn update_student_email(
        &self,
        student_id: StudentId,
        new_email: &str,
    ) -> DbResult<Outcome<()>> {
        let Some(mut conn) = self.connector.connect().await else {
            debug!("Could not connect; aborting UPDATE");
            return Ok(Outcome::Unavailable);
        };

        let result = sqlx::query(
            r#"
            UPDATE students
            SET email = $1
            WHERE student_id = $2
            "#,
        )
        .bind(new_email)
        .bind(student_id)
        .execute(&mut conn)
        .await;
        close(conn).await;

        match result {
            Ok(done) if done.rows_affected() == 1 => {
                info!("Updated email of student {} to {}", student_id, new_email);
                Ok(Outcome::Done(()))
            }
            Ok(done) => {
                debug!(
                    "UPDATE touched {} rows for student {}",
                    done.rows_affected(),
                    student_id
                );
                Ok(Outcome::NotFound)
            }
            Err(e) if is_unique_violation(&e) => {
                warn!("Duplicate email: {} (UNIQUE violation)", new_email);
                Ok(Outcome::Conflict {
                    email: new_email.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete one student
    #[instrument(skip(self))]
    pub async fn delete_student(&self, student_id: StudentId) -> DbResult<Outcome<()>> {
        let Some(mut conn) = self.connector.connect().await else {
            debug!("Could not connect; aborting DELETE");
            return Ok(Outcome::Unavailable);
        };

        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(student_id)
            .execute(&mut conn)
            .await;
        close(conn).await;

        let deleted = result?.rows_affected();
        if deleted == 1 {
            info!("Deleted student {}", student_id);
            Ok(Outcome::Done(()))
        } else {
            debug!("DELETE touched {} rows for student {}", deleted, student_id);
            Ok(Outcome::NotFound)
        }
    }

    /// Get count of students
    #[instrument(skip(self))]
    pub async fn count_students(&self) -> DbResult<Outcome<i64>> {
        let Some(mut conn) = self.connector.connect().await else {
            debug!("Could not connect; aborting COUNT");
            return Ok(Outcome::Unavailable);
        };

        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&mut conn)
            .await;
        close(conn).await;

        Ok(Outcome::Done(result?))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Behaviour against a live database is covered in tests/student_store.rs

    #[test]
    fn test_non_database_errors_are_not_conflicts() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}
