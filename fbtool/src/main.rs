mod cli;
mod config;
mod locate;

use std::io;
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use fbtool_lib::{Error, RunOptions, SubprocessTool, confirm, duchamp, run_plan, verify_device};

/// Exit code for an operator declining the confirmation prompt, distinct
/// from hard failures so wrappers can tell "chose not to" from "could not".
const EXIT_DECLINED: i32 = 2;

fn main() {
    // Initialize tracing, set log level from environment variable
    // Log level can be controlled by setting the RUST_LOG environment variable, e.g.:
    // RUST_LOG=debug, RUST_LOG=fbtool_lib=trace, RUST_LOG=info
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = cli::Cli::parse();
    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(args: cli::Cli) -> Result<i32> {
    let file_config = match &args.config {
        Some(path) => {
            let config = config::FbToolConfig::from_file(path)
                .map_err(|e| anyhow!("Failed to load config file '{}': {}", path, e))?;
            config.validate().map_err(|e| anyhow!(e))?;
            Some(config)
        }
        None => None,
    };
    let settings = cli::merge_config(&args, file_config)?;

    let tool_path = locate::locate_tool(settings.tool.as_deref())?;
    let mut tool = SubprocessTool::new(&tool_path)?;

    let plan = duchamp::plan(settings.variant);
    locate::check_images(&plan, &settings.images_dir)
        .context("Image preflight failed")?;

    verify_device(&mut tool, &settings.product)?;

    let (flashes, erases) = plan.counts();
    println!(
        "{}: {} image writes, {} erases on product '{}' via {}",
        plan.name,
        flashes,
        erases,
        settings.product,
        tool_path.display()
    );

    if !settings.assume_yes {
        let confirmed = confirm(
            "This operation is irreversible. Continue? (y/N)",
            io::stdin().lock(),
            io::stdout(),
        )?;
        if !confirmed {
            eprintln!("{}", Error::UserDeclined);
            return Ok(EXIT_DECLINED);
        }
    }

    let opts = RunOptions {
        images_dir: settings.images_dir.clone(),
        quiet: settings.quiet,
    };
    let report = run_plan(&mut tool, &plan, &opts)?.into_result()?;

    println!("Done: {} steps completed.", report.entries.len());
    Ok(0)
}
