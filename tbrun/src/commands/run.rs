//! The full run flow: discover sources, build the simulation project,
//! assemble the runner command line, hand off, and propagate the exit code.

use std::path::{Path, PathBuf};

use anyhow::Result;

use tbrun_core::config::ToolchainConfig;
use tbrun_core::discovery::{self, DEFAULT_IGNORE_PATTERN, VHDL_EXTENSIONS};
use tbrun_core::options::{self, VendorLibraries, TIMEOUT_GENERIC};
use tbrun_core::project::{OptionValue, SimProject, DEFAULT_LIBRARY};
use tbrun_core::runner::{self, RunOptions};
use tbrun_core::vendor;
use tbrun_core::CoreError;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

pub struct RunArgs {
    pub path: String,
    pub pattern: String,
    pub gui: bool,
    pub compile_only: bool,
    pub clean: bool,
    pub debug: bool,
    pub timeout_ms: f64,
    pub xilinx_libs: bool,
    pub intel_altera_libs: bool,
    pub exclude: Vec<String>,
    pub xunit_xml: Option<String>,
    pub workers: u32,
    pub forward: Vec<String>,
}

pub fn run(args: RunArgs) -> Result<i32> {
    let root = PathBuf::from(&args.path);
    if !root.is_dir() {
        return Err(CoreError::RootNotFound(root).into());
    }

    let toolchain = ToolchainConfig::from_env();
    let vendors = VendorLibraries {
        xilinx: args.xilinx_libs,
        intel_altera: args.intel_altera_libs,
    };

    let mut project = SimProject::new();
    project.enable_vhdl_builtins();
    project.enable_osvvm();

    // VHDL-only discovery: the simulators pick up Verilog support units
    // (glbl) separately below.
    let sources = discovery::discover_hdl_files(
        &root,
        VHDL_EXTENSIONS,
        DEFAULT_IGNORE_PATTERN,
        &args.exclude,
    )?;
    tracing::info!(count = sources.len(), root = %root.display(), "discovered VHDL sources");
    project
        .library_mut(DEFAULT_LIBRARY)
        .source_files
        .extend(sources);

    if vendors.xilinx {
        add_glbl(&mut project, toolchain.vivado_root.as_deref());
    }

    configure_compile_options(&mut project, &vendors);
    configure_simulation_options(&mut project, &args, &vendors, &toolchain, &root);

    let program = runner::resolve_runner(&toolchain.runner_bin)?;
    let opts = RunOptions {
        pattern: args.pattern,
        workers: args.workers,
        gui: args.gui,
        compile_only: args.compile_only,
        clean: args.clean,
        debug: args.debug,
        xunit_xml: args.xunit_xml.map(PathBuf::from),
        forwarded: args.forward,
    };
    let invocation = runner::build_invocation(&program, &opts, &project);
    let code = runner::execute(&invocation)?;
    print_summary(code);
    Ok(code)
}

/// glbl registration never aborts a run; a miss warns and continues.
fn add_glbl(project: &mut SimProject, vivado_root: Option<&str>) {
    match vendor::find_xilinx_glbl(vivado_root) {
        Some(glbl) => {
            tracing::info!(path = %glbl.display(), "adding Xilinx glbl module");
            eprintln!("Added Xilinx glbl module from: {}", glbl.display());
            project.library_mut(DEFAULT_LIBRARY).source_files.push(glbl);
        }
        None => {
            tracing::warn!("Xilinx glbl.v not found");
            eprintln!("{}Warning: Xilinx glbl.v not found!{}", YELLOW, RESET);
            eprintln!("   Ensure Xilinx Vivado is installed and/or set XILINX_VIVADO");
            eprintln!("   Or copy glbl.v into the project tree manually");
        }
    }
}

fn configure_compile_options(project: &mut SimProject, vendors: &VendorLibraries) {
    project.set_compile_option(
        "nvc.a_flags",
        OptionValue::List(options::nvc_analysis_flags()),
    );
    let global = options::nvc_global_flags(vendors);
    if !global.is_empty() {
        project.set_compile_option("nvc.global_flags", OptionValue::List(global));
    }
}

fn configure_simulation_options(
    project: &mut SimProject,
    args: &RunArgs,
    vendors: &VendorLibraries,
    toolchain: &ToolchainConfig,
    scan_root: &Path,
) {
    project.set_generic(TIMEOUT_GENERIC, &args.timeout_ms.to_string());

    let questa = options::is_questa_base(toolchain.modelsim_path.as_deref());
    project.set_sim_option(
        "modelsim.vsim_flags",
        OptionValue::List(options::modelsim_vsim_flags(vendors, questa)),
    );
    project.set_sim_option("disable_ieee_warnings", OptionValue::Flag(true));

    if args.gui {
        if let Some(wave) = options::find_wave_init_file(scan_root) {
            project.set_sim_option(
                "modelsim.init_file.gui",
                OptionValue::Text(wave.display().to_string()),
            );
        }
    }
}

fn print_summary(code: i32) {
    if code == 0 {
        eprintln!("{}testbench run: Passed{}", GREEN, RESET);
    } else {
        eprintln!("{}testbench run: Failed (exit code {}){}", RED, code, RESET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args() -> RunArgs {
        RunArgs {
            path: ".".to_string(),
            pattern: "**".to_string(),
            gui: false,
            compile_only: false,
            clean: false,
            debug: false,
            timeout_ms: 0.5,
            xilinx_libs: false,
            intel_altera_libs: false,
            exclude: Vec::new(),
            xunit_xml: None,
            workers: 1,
            forward: Vec::new(),
        }
    }

    #[test]
    fn test_compile_options_skip_empty_global_flags() {
        let mut project = SimProject::new();
        configure_compile_options(&mut project, &VendorLibraries::default());
        assert!(project.compile_options.contains_key("nvc.a_flags"));
        assert!(!project.compile_options.contains_key("nvc.global_flags"));

        let mut project = SimProject::new();
        configure_compile_options(
            &mut project,
            &VendorLibraries {
                xilinx: true,
                intel_altera: false,
            },
        );
        assert!(project.compile_options.contains_key("nvc.global_flags"));
    }

    #[test]
    fn test_simulation_options_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let mut project = SimProject::new();
        let toolchain = ToolchainConfig {
            runner_bin: "vunit".to_string(),
            modelsim_path: None,
            vivado_root: None,
        };
        configure_simulation_options(
            &mut project,
            &test_args(),
            &VendorLibraries::default(),
            &toolchain,
            tmp.path(),
        );
        assert_eq!(project.generics.get(TIMEOUT_GENERIC), Some(&"0.5".to_string()));
        assert_eq!(
            project.sim_options.get("disable_ieee_warnings"),
            Some(&OptionValue::Flag(true))
        );
        assert!(!project.sim_options.contains_key("modelsim.init_file.gui"));
    }

    #[test]
    fn test_gui_sets_wave_init_file_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let wave = tmp.path().join(options::WAVE_INIT_FILE);
        std::fs::write(&wave, "# wave\n").unwrap();

        let mut project = SimProject::new();
        let toolchain = ToolchainConfig {
            runner_bin: "vunit".to_string(),
            modelsim_path: Some("/opt/questa_base/bin".to_string()),
            vivado_root: None,
        };
        let mut args = test_args();
        args.gui = true;
        configure_simulation_options(
            &mut project,
            &args,
            &VendorLibraries::default(),
            &toolchain,
            tmp.path(),
        );
        assert_eq!(
            project.sim_options.get("modelsim.init_file.gui"),
            Some(&OptionValue::Text(wave.display().to_string()))
        );
        // questa_base install also turns on the tuning flags
        match project.sim_options.get("modelsim.vsim_flags") {
            Some(OptionValue::List(flags)) => {
                assert!(flags.iter().any(|f| f == "-qbase_tune"));
            }
            other => panic!("unexpected vsim_flags: {:?}", other),
        }
    }

    #[test]
    fn test_missing_root_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = test_args();
        args.path = tmp
            .path()
            .join("no-such-tree")
            .to_string_lossy()
            .to_string();
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("scan root"));
    }
}
