use clap::{Parser, Subcommand};

/// tbrun - configure and launch HDL testbench runs
#[derive(Parser, Debug)]
#[command(name = "tbrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover HDL sources, configure the simulation project, and hand off to the framework
    Run {
        /// Root of the HDL source tree to scan
        #[arg(value_name = "PATH", default_value = ".")]
        path: String,

        /// Testbench pattern passed to the framework ("**" runs everything)
        #[arg(long, default_value = "**")]
        pattern: String,

        /// Open the simulator GUI
        #[arg(long, default_value = "false")]
        gui: bool,

        /// Compile only, do not simulate
        #[arg(long, default_value = "false")]
        compile: bool,

        /// Remove previous compile artifacts before running
        #[arg(long, default_value = "false")]
        clean: bool,

        /// Run the framework at debug log level
        #[arg(long, default_value = "false")]
        debug: bool,

        /// Simulation timeout in milliseconds (top-level generic)
        #[arg(long, default_value = "0.5")]
        timeout_ms: f64,

        /// Enable Xilinx vendor simulation libraries and the glbl module
        #[arg(long, default_value = "false")]
        xilinx_libs: bool,

        /// Enable Intel/Altera vendor simulation libraries
        #[arg(long, default_value = "false")]
        intel_altera_libs: bool,

        /// File name to exclude from discovery (repeatable)
        #[arg(long, value_name = "FILE")]
        exclude: Vec<String>,

        /// Write an xUnit XML report to this path
        #[arg(long, value_name = "PATH")]
        xunit_xml: Option<String>,

        /// Worker threads forwarded to the framework
        #[arg(long, short = 'p', env = "TBRUN_WORKERS", default_value = "1")]
        workers: u32,

        /// Extra arguments forwarded verbatim to the framework (after --)
        #[arg(last = true, value_name = "ARGS")]
        forward: Vec<String>,
    },

    /// List the HDL source files discovery would pick up
    Files {
        /// Root of the HDL source tree to scan
        #[arg(value_name = "PATH", default_value = ".")]
        path: String,

        /// Accepted file extension (repeatable; default: .vhd .vhdl .v)
        #[arg(long, value_name = "EXT")]
        ext: Vec<String>,

        /// Substring marking files to skip (editor backups by default)
        #[arg(long, default_value = "~")]
        ignore_pattern: String,

        /// File name to exclude (repeatable)
        #[arg(long, value_name = "FILE")]
        exclude: Vec<String>,

        /// Emit the file list as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show the resolved toolchain: runner binary, glbl location, environment
    Check {
        /// Emit the report as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
}
