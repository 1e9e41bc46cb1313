//! Locating the flashing tool binary and preflighting image files.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use fbtool_lib::FlashPlan;

#[cfg(windows)]
const TOOL_BINARY: &str = "fastboot.exe";
#[cfg(not(windows))]
const TOOL_BINARY: &str = "fastboot";

/// Resolve the flashing tool binary.
///
/// An explicit path is taken as-is. Otherwise the platform binary name is
/// looked up beside the current executable, in the working directory, and
/// finally on `PATH`.
///
/// # Parameters
/// * `explicit` - Path supplied via `--tool` or the config file, if any
///
/// # Returns
/// * The first candidate that exists as a file; the error lists every
///   location searched
pub fn locate_tool(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(TOOL_BINARY));
        }
    }
    candidates.push(PathBuf::from(TOOL_BINARY));
    if let Some(paths) = env::var_os("PATH") {
        candidates.extend(env::split_paths(&paths).map(|dir| dir.join(TOOL_BINARY)));
    }

    match candidates.iter().find(|candidate| candidate.is_file()) {
        Some(found) => Ok(found.clone()),
        None => {
            let searched: Vec<String> = candidates
                .iter()
                .map(|candidate| candidate.display().to_string())
                .collect();
            bail!(
                "Could not find `{}`. Searched: {}. Use --tool to point at the binary.",
                TOOL_BINARY,
                searched.join(", ")
            )
        }
    }
}

/// Require every image file named by the plan to exist under `images_dir`.
pub fn check_images(plan: &FlashPlan, images_dir: &Path) -> Result<()> {
    let mut missing: Vec<String> = plan
        .images()
        .map(|image| images_dir.join(image))
        .filter(|path| !path.is_file())
        .map(|path| path.display().to_string())
        .collect();
    missing.sort();
    missing.dedup();

    if missing.is_empty() {
        return Ok(());
    }
    bail!("Missing image files: {}", missing.join(", "))
}
