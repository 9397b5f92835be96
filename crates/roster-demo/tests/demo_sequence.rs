use roster_core::{NewStudent, Student, StudentId};
use roster_db::{DbResult, Outcome, StudentRepository};
use std::sync::Mutex;

/// In-memory stand-in for the `students` table
#[derive(Default)]
struct MemoryRepo {
    rows: Mutex<Vec<Student>>,
    next_id: Mutex<StudentId>,
    offline: bool,
}

impl MemoryRepo {
    fn seeded(rows: Vec<Student>) -> Self {
        let next_id = rows.iter().map(|s| s.student_id).max().unwrap_or(0);
        Self {
            rows: Mutex::new(rows),
            next_id: Mutex::new(next_id),
            offline: false,
        }
    }

    fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl StudentRepository for MemoryRepo {
    async fn all_students(&self) -> DbResult<Outcome<Vec<Student>>> {
        if self.offline {
            return Ok(Outcome::Unavailable);
        }
        Ok(Outcome::Done(self.rows.lock().unwrap().clone()))
    }

    async fn add_student(&self, student: &NewStudent) -> DbResult<Outcome<StudentId>> {
        if self.offline {
            return Ok(Outcome::Unavailable);
        }
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.email == student.email) {
            return Ok(Outcome::Conflict {
                email: student.email.clone(),
            });
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        rows.push(student.clone().with_id(*next_id));
        Ok(Outcome::Done(*next_id))
    }

    async fn update_student_email(
        &self,
        student_id: StudentId,
        new_email: &str,
    ) -> DbResult<Outcome<()>> {
        if self.offline {
            return Ok(Outcome::Unavailable);
        }
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|s| s.email == new_email && s.student_id != student_id)
        {
            return Ok(Outcome::Conflict {
                email: new_email.to_string(),
            });
        }
        match rows.iter_mut().find(|s| s.student_id == student_id) {
            Some(row) => {
                row.email = new_email.to_string();
                Ok(Outcome::Done(()))
            }
            None => Ok(Outcome::NotFound),
        }
    }

    async fn delete_student(&self, student_id: StudentId) -> DbResult<Outcome<()>> {
        if self.offline {
            return Ok(Outcome::Unavailable);
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.student_id != student_id);
        if rows.len() < before {
            Ok(Outcome::Done(()))
        } else {
            Ok(Outcome::NotFound)
        }
    }
}

fn john() -> Student {
    NewStudent::new(
        "John",
        "Doe",
        "john.doe@example.com",
        chrono::NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
    )
    .with_id(1)
}

async fn run(repo: &MemoryRepo) -> String {
    let mut out = Vec::new();
    roster_demo::run_demo(repo, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn full_sequence_prints_every_stage() {
    let repo = MemoryRepo::seeded(vec![john()]);
    let output = run(&repo).await;

    let expected = "\
=== BEFORE ===
1 | John Doe | john.doe@example.com | 2023-09-01

=== INSERT ===
Inserted id=2

=== AFTER INSERT ===
1 | John Doe | john.doe@example.com | 2023-09-01
2 | Alice Brown | alice.brown@example.com | 2023-09-03

=== UPDATE ===
Updated=true

=== AFTER UPDATE ===
1 | John Doe | john.doe@example.com | 2023-09-01
2 | Alice Brown | alice.updated@example.com | 2023-09-03

=== DELETE ===
Deleted=true

=== AFTER DELETE ===
1 | John Doe | john.doe@example.com | 2023-09-01
";
    assert_eq!(output, expected);
    assert_eq!(repo.rows.lock().unwrap().clone(), vec![john()]);
}

#[tokio::test]
async fn empty_table_prints_no_rows() {
    let repo = MemoryRepo::default();
    let output = run(&repo).await;

    assert!(output.starts_with("=== BEFORE ===\n(no rows)\n"));
    assert!(output.ends_with("=== AFTER DELETE ===\n(no rows)\n"));
}

#[tokio::test]
async fn duplicate_sample_skips_update_and_delete() {
    let existing = roster_demo::sample_student().with_id(7);
    let repo = MemoryRepo::seeded(vec![existing.clone()]);
    let output = run(&repo).await;

    assert!(output.contains("Insert did not happen: duplicate email alice.brown@example.com"));
    assert!(!output.contains("=== UPDATE ==="));
    assert!(!output.contains("=== DELETE ==="));
    assert_eq!(repo.rows.lock().unwrap().clone(), vec![existing]);
}

#[tokio::test]
async fn offline_repository_reports_connection_issue() {
    let output = run(&MemoryRepo::offline()).await;

    assert_eq!(
        output,
        "\
=== BEFORE ===
(no data - connection issue)

=== INSERT ===
Insert did not happen: database unavailable

=== AFTER INSERT ===
(no data - connection issue)
"
    );
}
