pub mod confirm;
pub mod duchamp;
pub mod error;
pub mod fake;
pub mod guard;
pub mod plan;
pub mod run;
pub mod tool;

pub use confirm::confirm;
pub use error::{Error, Result};
pub use guard::verify_device;
pub use plan::{FlashPlan, FlashStep, PlanVariant};
pub use run::{ExecutionReport, ReportEntry, RunOptions, run_plan};
pub use tool::{ExecutionResult, FlashTool, SubprocessTool};
