//! Recording fake of the flashing tool.
//!
//! Records every invocation without spawning anything, so the guard and the
//! runner can be exercised in CI without a device attached.

use std::collections::VecDeque;

use crate::error::Result;
use crate::tool::{ExecutionResult, FlashTool};

#[derive(Debug, Default)]
pub struct FakeTool {
    responses: VecDeque<ExecutionResult>,
    calls: Vec<Vec<String>>,
}

impl FakeTool {
    /// A fake whose every invocation succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a scripted result. Invocations consume the queue in order and
    /// fall back to a plain success once it is drained.
    pub fn push_response(&mut self, response: ExecutionResult) {
        self.responses.push_back(response);
    }

    /// All argument vectors invoked so far, in order.
    pub fn calls(&self) -> &[Vec<String>] {
        &self.calls
    }
}

impl FlashTool for FakeTool {
    fn invoke(&mut self, args: &[String]) -> Result<ExecutionResult> {
        self.calls.push(args.to_vec());
        Ok(self
            .responses
            .pop_front()
            .unwrap_or_else(|| ExecutionResult::ok("")))
    }
}
