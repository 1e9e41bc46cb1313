//! The plan interpreter.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::plan::{FlashPlan, FlashStep};
use crate::tool::{ExecutionResult, FlashTool};

/// Runner knobs supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory holding the image files named by the plan.
    pub images_dir: PathBuf,
    /// Suppress spinner output.
    pub quiet: bool,
}

/// One executed step and its outcome.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub step: FlashStep,
    pub result: ExecutionResult,
}

/// Ordered record of every executed step.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    pub entries: Vec<ReportEntry>,
}

impl ExecutionReport {
    /// True iff every executed step exited with status 0.
    pub fn success(&self) -> bool {
        self.entries.iter().all(|entry| entry.result.success())
    }

    pub fn first_failure(&self) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| !entry.result.success())
    }

    /// Convert into `Err(ActionFailed)` naming the first failing step.
    pub fn into_result(self) -> Result<Self> {
        if let Some(entry) = self.first_failure() {
            return Err(Error::ActionFailed {
                action: entry.step.describe(),
                code: entry.result.code,
                output: entry.result.output.trim().to_owned(),
            });
        }
        Ok(self)
    }
}

/// Execute `plan` in order, fail-fast: stop at the first step whose exit
/// status is non-zero. The returned report holds exactly the executed
/// steps, in plan order.
pub fn run_plan(
    tool: &mut dyn FlashTool,
    plan: &FlashPlan,
    opts: &RunOptions,
) -> Result<ExecutionReport> {
    let total = plan.len();
    let mut report = ExecutionReport::default();

    for (idx, step) in plan.steps.iter().enumerate() {
        let spinner = ProgressBar::new_spinner();
        if !opts.quiet {
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_style(ProgressStyle::with_template("[{prefix}] {spinner} {msg}").unwrap());
            spinner.set_prefix(format!("{}/{}", idx + 1, total));
            spinner.set_message(format!("{} ...", step.describe()));
        }

        let result = tool.invoke(&step.to_args(&opts.images_dir))?;
        let ok = result.success();
        tracing::debug!("`{}` exited with {:?}", step.describe(), result.code);

        if !opts.quiet {
            if ok {
                spinner.finish_with_message(format!("{} done", step.describe()));
            } else {
                spinner.finish_with_message(format!("{} FAILED", step.describe()));
            }
        }

        report.entries.push(ReportEntry {
            step: step.clone(),
            result,
        });
        if !ok {
            break;
        }
    }

    Ok(report)
}
