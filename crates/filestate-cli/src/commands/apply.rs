//! Apply command: reconcile from command-line parameters

use colored::Colorize;

use filestate_core::{ModuleParams, Outcome, ReconcileResult, reconcile};

use crate::cli::ApplyArgs;
use crate::commands::report_json;
use crate::error::Result;

/// Build host parameters from the command line.
///
/// `--content-file` is read here, so an unreadable file fails before any
/// reconciliation starts.
fn params_from_args(args: &ApplyArgs) -> filestate_core::Result<ModuleParams> {
    let content = match (&args.content, &args.content_file) {
        (Some(content), _) => Some(content.clone()),
        (None, Some(file)) => Some(filestate_core::io::read_text(file)?),
        (None, None) => None,
    };

    Ok(ModuleParams {
        path: Some(args.path.clone()),
        content,
        check_mode: args.check,
    })
}

/// Run the apply command
pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    let params = params_from_args(args);

    if args.json {
        let outcome: Outcome = params
            .and_then(ModuleParams::validate)
            .and_then(|request| reconcile(&request))
            .into();
        return report_json(&outcome);
    }

    let request = params?.validate()?;
    let result = reconcile(&request)?;
    print_result(&result, request.dry_run());
    Ok(())
}

fn print_result(result: &ReconcileResult, dry_run: bool) {
    if !result.changed {
        println!(
            "{} {} already up to date.",
            "OK".green().bold(),
            result.path.cyan()
        );
        return;
    }

    let verb = match (result.existed_before, dry_run) {
        (false, false) => "created",
        (true, false) => "updated",
        (false, true) => "would be created",
        (true, true) => "would be updated",
    };
    let label = if dry_run { "CHECK" } else { "CHANGED" };

    println!("{} {} {}.", label.yellow().bold(), result.path.cyan(), verb);
}
