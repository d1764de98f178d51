//! Command implementations for filestate-cli

pub mod apply;
pub mod exec;

pub use apply::run_apply;
pub use exec::run_exec;

use std::io::Write;

use filestate_core::Outcome;

use crate::error::{CliError, Result};

/// Print the host result object as one JSON line on stdout.
///
/// A failed outcome is turned into [`CliError::Reported`] so the process
/// exits non-zero without printing the message a second time.
pub(crate) fn report_json(outcome: &Outcome) -> Result<()> {
    let line = serde_json::to_string(&outcome.to_json())?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;

    if outcome.is_success() {
        Ok(())
    } else {
        Err(CliError::Reported {
            code: outcome.exit_code(),
        })
    }
}
