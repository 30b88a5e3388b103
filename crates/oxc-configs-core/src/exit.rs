//! Early termination outcomes and their exit codes
//!
//! Helpers never exit the process themselves. They return an [`Abort`] inside
//! the usual `anyhow::Error`, and the binary maps it to an exit code once.

use std::io;
use thiserror::Error;

/// A deliberate stop of the whole run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Abort {
    /// The user backed out of a prompt (or an install failed). Exit code 0.
    #[error("{0}")]
    Cancelled(String),

    /// Input or environment failed validation. Exit code 1.
    #[error("{0}")]
    Invalid(String),
}

impl Abort {
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Abort::Cancelled(_) => 0,
            Abort::Invalid(_) => 1,
        }
    }
}

/// Exit code for an error returned from the run
///
/// Anything that isn't an [`Abort`] is a fatal failure.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Abort>().map_or(1, Abort::exit_code)
}

/// Turns a cancelled prompt into [`Abort::Cancelled`]
///
/// cliclack reports Esc / Ctrl+C inside a prompt as `ErrorKind::Interrupted`.
pub trait CancelExt<T> {
    fn or_cancel(self, message: &str) -> anyhow::Result<T>;
}

impl<T> CancelExt<T> for io::Result<T> {
    fn or_cancel(self, message: &str) -> anyhow::Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                Err(Abort::cancelled(message).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
