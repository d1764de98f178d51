//! Compare-then-write reconciliation of a single text file
//!
//! One inspect, at most one read, at most one write per call. Two callers
//! reconciling the same path at once race; the last writer wins.

use serde::{Deserialize, Serialize};

use crate::io::{self, FileState};
use crate::{ReconcileRequest, ReconcileResult, Result};

/// What a reconciliation does (or would do) to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The file is missing and gets created
    Create,
    /// The file exists with different content and gets replaced
    Update,
    /// The file already holds the desired content
    None,
}

impl Action {
    pub fn changes(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::None => "none",
        };
        f.write_str(verb)
    }
}

/// Decide the action for an observed state and the desired content.
pub fn plan(state: &FileState, desired: &str) -> Action {
    match state {
        FileState::Missing => Action::Create,
        FileState::Present(current) if current == desired => Action::None,
        FileState::Present(_) => Action::Update,
    }
}

/// Bring the file at the request path to the requested content.
///
/// Under dry-run nothing is written, whatever the decision.
pub fn reconcile(request: &ReconcileRequest) -> Result<ReconcileResult> {
    let path = request.path();
    let state = io::inspect(path)?;
    let action = plan(&state, request.content());

    tracing::debug!(
        path = %path.display(),
        exists = state.exists(),
        %action,
        dry_run = request.dry_run(),
        "Planned reconciliation"
    );

    if action.changes() {
        if request.dry_run() {
            tracing::info!("[dry-run] Would {} {}", action, path.display());
        } else {
            io::write_text(path, request.content())?;
            tracing::info!(%action, bytes = request.content().len(), "Wrote {}", path.display());
        }
    }

    Ok(ReconcileResult::new(
        path,
        request.content(),
        state.exists(),
        action.changes(),
    ))
}
