// src/exit.rs
//! Standardized process exit codes for `snapgraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SnapgraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, malformed graph file, config).
    Error = 1,
    /// Request rejected (empty core set, cutoff out of range, unknown node).
    InvalidInput = 2,
}

impl SnapgraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GraphError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for SnapgraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for SnapgraphExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                Self::for_error(&e)
            }
        }
    }
}
