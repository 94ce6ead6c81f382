//! External runner resolution, command-line assembly, and execution.
//!
//! `build_invocation` is a pure function so the argv shape is testable
//! without spawning anything; `execute` inherits stdio and reports the
//! child's exit code back for propagation.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use crate::error::CoreError;
use crate::project::SimProject;

/// Pattern value meaning "run everything"; elided from the argv.
pub const MATCH_ALL_PATTERN: &str = "**";

/// Fully assembled external runner command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Knobs forwarded to the external framework's own argument parser.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub pattern: String,
    pub workers: u32,
    pub gui: bool,
    pub compile_only: bool,
    pub clean: bool,
    pub debug: bool,
    pub xunit_xml: Option<PathBuf>,
    /// Extra arguments forwarded verbatim, placed first.
    pub forwarded: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL_PATTERN.to_string(),
            workers: 1,
            gui: false,
            compile_only: false,
            clean: false,
            debug: false,
            xunit_xml: None,
            forwarded: Vec::new(),
        }
    }
}

/// Resolve the runner binary on PATH.
pub fn resolve_runner(runner_bin: &str) -> Result<PathBuf, CoreError> {
    which::which(runner_bin).map_err(|_| CoreError::RunnerNotFound(runner_bin.to_string()))
}

/// Assemble the external framework argv: forwarded args, worker count,
/// the pattern (only when narrower than match-all), mode flags, then the
/// project rendered as repeated configuration arguments.
pub fn build_invocation(
    program: &Path,
    opts: &RunOptions,
    project: &SimProject,
) -> RunnerInvocation {
    let mut args = opts.forwarded.clone();
    args.push("-p".to_string());
    args.push(opts.workers.to_string());
    if opts.pattern != MATCH_ALL_PATTERN {
        args.push(opts.pattern.clone());
    }
    if opts.gui {
        args.push("--gui".to_string());
    }
    if opts.compile_only {
        args.push("--compile".to_string());
    }
    if opts.clean {
        args.push("--clean".to_string());
    }
    if opts.debug {
        args.push("--log-level=debug".to_string());
    }
    if let Some(ref xml) = opts.xunit_xml {
        args.push("--xunit-xml".to_string());
        args.push(xml.display().to_string());
    }
    args.extend(project_args(project));
    RunnerInvocation {
        program: program.to_path_buf(),
        args,
    }
}

fn project_args(project: &SimProject) -> Vec<String> {
    let mut args = Vec::new();
    if project.vhdl_builtins {
        args.push("--vhdl-builtins".to_string());
    }
    if project.osvvm {
        args.push("--osvvm".to_string());
    }
    for lib in &project.libraries {
        args.push("--library".to_string());
        args.push(lib.name.clone());
        for file in &lib.source_files {
            args.push("--source".to_string());
            args.push(file.display().to_string());
        }
    }
    for (key, value) in &project.compile_options {
        args.push("--compile-option".to_string());
        args.push(format!("{}={}", key, value.render()));
    }
    for (key, value) in &project.sim_options {
        args.push("--sim-option".to_string());
        args.push(format!("{}={}", key, value.render()));
    }
    for (name, value) in &project.generics {
        args.push("--generic".to_string());
        args.push(format!("{}={}", name, value));
    }
    args
}

/// Spawn the runner with inherited stdio and return its exit code.
/// A child killed by a signal maps to 128 plus the signal number.
pub fn execute(invocation: &RunnerInvocation) -> Result<i32> {
    tracing::debug!(
        program = %invocation.program.display(),
        args = ?invocation.args,
        "spawning simulation runner"
    );
    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .with_context(|| {
            format!(
                "failed to spawn simulation runner {}",
                invocation.program.display()
            )
        })?;
    Ok(exit_code(&status))
}

fn exit_code(status: &std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    status.code().unwrap_or(1)
}
