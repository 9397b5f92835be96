//! Console formatting of student listings

use crate::Student;
use std::io::{self, Write};

/// Printed when the listing could not be fetched at all
pub const NO_DATA_MESSAGE: &str = "(no data - connection issue)";

/// Printed when the listing was fetched but the table is empty
pub const NO_ROWS_MESSAGE: &str = "(no rows)";

/// Format one student as `id | first last | email | YYYY-MM-DD`
pub fn format_student(student: &Student) -> String {
    format!(
        "{} | {} | {} | {}",
        student.student_id,
        student.full_name(),
        student.email,
        student.enrollment_date.format("%Y-%m-%d")
    )
}

/// Render a listing into lines.
///
/// `None` means the listing is unavailable (connection issue), which is
/// reported differently from an empty table.
pub fn render_students(students: Option<&[Student]>) -> Vec<String> {
    match students {
        None => vec![NO_DATA_MESSAGE.to_string()],
        Some([]) => vec![NO_ROWS_MESSAGE.to_string()],
        Some(rows) => rows.iter().map(format_student).collect(),
    }
}

/// Write a listing to `out`, one line per record
pub fn write_students<W: Write>(out: &mut W, students: Option<&[Student]>) -> io::Result<()> {
    for line in render_students(students) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write a listing to standard output
pub fn print_students(students: Option<&[Student]>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_students(&mut lock, students)
}
