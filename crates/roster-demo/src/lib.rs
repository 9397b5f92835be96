//! Demo sequence exercising the student accessor end to end
//!
//! read-all → insert → read-all → update email → read-all → delete → read-all,
//! printing each stage. Update and delete only run when the insert
//! produced an id.

use anyhow::Result;
use chrono::NaiveDate;
use roster_core::{write_students, NewStudent};
use roster_db::{Outcome, StudentRepository};
use std::io::Write;
use tracing::info;

pub const UPDATED_EMAIL: &str = "alice.updated@example.com";

/// The fixed record the demo inserts
pub fn sample_student() -> NewStudent {
    NewStudent::new(
        "Alice",
        "Brown",
        "alice.brown@example.com",
        NaiveDate::from_ymd_opt(2023, 9, 3).expect("valid sample date"),
    )
}

async fn show<R, W>(repo: &R, out: &mut W, banner: &str) -> Result<()>
where
    R: StudentRepository + ?Sized,
    W: Write,
{
    writeln!(out, "=== {} ===", banner)?;
    let listing = repo.all_students().await?.ok();
    write_students(out, listing.as_deref())?;
    Ok(())
}

/// Run the demo sequence against `repo`, writing progress to `out`
pub async fn run_demo<R, W>(repo: &R, out: &mut W) -> Result<()>
where
    R: StudentRepository + ?Sized,
    W: Write,
{
    show(repo, out, "BEFORE").await?;

    writeln!(out, "\n=== INSERT ===")?;
    let new_id = match repo.add_student(&sample_student()).await? {
        Outcome::Done(id) => {
            writeln!(out, "Inserted id={}", id)?;
            Some(id)
        }
        other => {
            writeln!(out, "Insert did not happen: {}", other)?;
            None
        }
    };
    writeln!(out)?;
    show(repo, out, "AFTER INSERT").await?;

    let Some(id) = new_id else {
        info!("Insert failed; skipping update and delete");
        return Ok(());
    };

    writeln!(out, "\n=== UPDATE ===")?;
    let updated = repo.update_student_email(id, UPDATED_EMAIL).await?;
    writeln!(out, "Updated={}", updated.is_done())?;
    writeln!(out)?;
    show(repo, out, "AFTER UPDATE").await?;

    writeln!(out, "\n=== DELETE ===")?;
    let deleted = repo.delete_student(id).await?;
    writeln!(out, "Deleted={}", deleted.is_done())?;
    writeln!(out)?;
    show(repo, out, "AFTER DELETE").await?;

    Ok(())
}
