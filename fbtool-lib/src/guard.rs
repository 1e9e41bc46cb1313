//! Device identity guard.

use crate::error::{Error, Result};
use crate::tool::FlashTool;

/// Variable queried from the bootloader to identify the attached device.
const PRODUCT_VAR: &str = "product";

/// Line prefix the bootloader uses when reporting the product variable.
const PRODUCT_PREFIX: &str = "product:";

/// Extract the device identity from a `getvar product` transcript.
///
/// Scans for a line beginning with `product:` and takes the first
/// whitespace-delimited token after the prefix. Yields `"unknown"` when no
/// such line (or no token) is present.
pub fn extract_product(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix(PRODUCT_PREFIX))
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_owned)
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Query the attached device and require it to report `expected`.
pub fn verify_device(tool: &mut dyn FlashTool, expected: &str) -> Result<()> {
    let result = tool.invoke(&["getvar".to_string(), PRODUCT_VAR.to_string()])?;
    let actual = extract_product(&result.output);
    tracing::debug!("device reports product `{actual}`");

    if actual == expected {
        Ok(())
    } else {
        Err(Error::DeviceMismatch {
            expected: expected.to_owned(),
            actual,
        })
    }
}
