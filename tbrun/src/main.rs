mod cli;
mod commands;
mod observability;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            path,
            pattern,
            gui,
            compile,
            clean,
            debug,
            timeout_ms,
            xilinx_libs,
            intel_altera_libs,
            exclude,
            xunit_xml,
            workers,
            forward,
        } => {
            let args = commands::run::RunArgs {
                path,
                pattern,
                gui,
                compile_only: compile,
                clean,
                debug,
                timeout_ms,
                xilinx_libs,
                intel_altera_libs,
                exclude,
                xunit_xml,
                workers,
                forward,
            };
            let code = commands::run::run(args)?;
            std::process::exit(code);
        }
        Commands::Files {
            path,
            ext,
            ignore_pattern,
            exclude,
            json,
        } => {
            commands::files::list_files(&path, &ext, &ignore_pattern, &exclude, json)?;
        }
        Commands::Check { json } => {
            commands::check::check(json)?;
        }
    }
    Ok(())
}
