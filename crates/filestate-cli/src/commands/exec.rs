//! Exec command: reconcile from a host parameter file

use std::path::Path;

use filestate_core::{Outcome, ParamsLoader};

use crate::commands::report_json;
use crate::error::Result;

/// Run the exec command
///
/// Loads parameters, reconciles, and always answers with a JSON result
/// object, including for parameter-file errors.
pub fn run_exec(params_file: &Path, force_check: bool) -> Result<()> {
    tracing::debug!(params = %params_file.display(), force_check, "Loading parameters");

    let outcome = match ParamsLoader::new().load(params_file) {
        Ok(params) => {
            let check_mode = params.check_mode || force_check;
            filestate_core::run(params.with_check_mode(check_mode))
        }
        Err(e) => Outcome::from(e),
    };

    report_json(&outcome)
}
