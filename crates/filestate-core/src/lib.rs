//! Idempotent text-file reconciliation
//!
//! Ensures a file holds exactly a desired text, reporting whether anything
//! changed. Supports a dry-run (check) mode that never touches the filesystem.
//!
//! ```rust,no_run
//! use filestate_core::{ModuleParams, reconcile};
//!
//! let request = ModuleParams::new("/tmp/test.txt", "Hello World!").validate()?;
//! let result = reconcile(&request)?;
//! assert!(!result.changed || result.content == "Hello World!");
//! # Ok::<(), filestate_core::Error>(())
//! ```

pub mod error;
pub mod io;
pub mod params;
pub mod reconcile;
pub mod request;
pub mod result;

pub use error::{Error, FailureKind, IoOperation, Result};
pub use io::FileState;
pub use params::ParamsLoader;
pub use reconcile::{Action, plan, reconcile};
pub use request::{ModuleParams, ReconcileRequest};
pub use result::{Outcome, ReconcileResult};

/// Validate host parameters and reconcile, folding every failure into an [`Outcome`].
pub fn run(params: ModuleParams) -> Outcome {
    params.validate().and_then(|request| reconcile(&request)).into()
}
