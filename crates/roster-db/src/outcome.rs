//! Result kinds of a single CRUD call

use std::fmt;

/// How a CRUD call ended when it did not fail outright.
///
/// `ok()` and `is_done()` give the plain "absent / false on failure"
/// view for callers that do not care why nothing happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The statement applied; carries its result
    Done(T),
    /// No row matched the given id
    NotFound,
    /// The email is already used by another student
    Conflict { email: String },
    /// No connection could be opened
    Unavailable,
}

impl<T> Outcome<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Conflict { email } => Outcome::Conflict { email },
            Outcome::Unavailable => Outcome::Unavailable,
        }
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done(_) => write!(f, "done"),
            Outcome::NotFound => write!(f, "no matching student"),
            Outcome::Conflict { email } => write!(f, "duplicate email {}", email),
            Outcome::Unavailable => write!(f, "database unavailable"),
        }
    }
}
