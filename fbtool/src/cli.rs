use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use fbtool_lib::PlanVariant;

use crate::config::FbToolConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "fbtool CLI", long_about = None)]
pub struct Cli {
    /// JSON configuration file path
    #[arg(long = "config", short = 'f')]
    pub config: Option<String>,

    /// Path to the external flashing tool binary (default: auto-detect)
    #[arg(short = 't', long = "tool")]
    pub tool: Option<String>,

    /// Directory holding the firmware images (default: images)
    #[arg(short = 'i', long = "images")]
    pub images: Option<String>,

    /// Which authored plan to run (default: full_wipe)
    #[arg(long = "variant", value_enum)]
    pub variant: Option<PlanVariant>,

    /// Product identifier the attached device must report (default: duchamp)
    #[arg(long = "product")]
    pub product: Option<String>,

    /// Skip the interactive confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Effective settings after merging CLI arguments over the config file.
#[derive(Debug)]
pub struct Settings {
    pub tool: Option<String>,
    pub images_dir: PathBuf,
    pub variant: PlanVariant,
    pub product: String,
    pub assume_yes: bool,
    pub quiet: bool,
}

/// Merge CLI arguments with configuration file, CLI args take precedence
pub fn merge_config(args: &Cli, config: Option<FbToolConfig>) -> Result<Settings> {
    let base = config.unwrap_or_else(FbToolConfig::with_defaults);

    let variant = match &args.variant {
        Some(variant) => *variant,
        None => base
            .parse_variant()
            .map_err(|e| anyhow!("Invalid plan variant in config: {}", e))?,
    };

    let product = args.product.clone().unwrap_or_else(|| base.product.clone());
    if product.is_empty() {
        bail!("Product identifier must not be empty");
    }

    let images = args.images.clone().unwrap_or_else(|| base.images.clone());
    let tool = args.tool.clone().or_else(|| base.tool.clone());
    let assume_yes = args.yes || base.assume_yes;

    Ok(Settings {
        tool,
        images_dir: PathBuf::from(images),
        variant,
        product,
        assume_yes,
        quiet: args.quiet,
    })
}
