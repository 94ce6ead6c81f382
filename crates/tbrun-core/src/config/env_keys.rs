//! Environment variable key constants, grouped by domain.

/// Simulator toolchain locations.
pub mod toolchain {
    /// Vivado install root; `<root>/data/verilog/src/glbl.v` is tried first.
    pub const XILINX_VIVADO: &str = "XILINX_VIVADO";
    /// ModelSim/Questa install path; `questa_base` in the path enables
    /// Questa tuning flags.
    pub const VUNIT_MODELSIM_PATH: &str = "VUNIT_MODELSIM_PATH";
    /// External framework entry point binary (default: `vunit`).
    pub const TBRUN_RUNNER: &str = "TBRUN_RUNNER";
}

/// Logging knobs.
pub mod observability {
    pub const TBRUN_QUIET: &str = "TBRUN_QUIET";
    pub const TBRUN_LOG_LEVEL: &str = "TBRUN_LOG_LEVEL";
    pub const TBRUN_LOG_JSON: &str = "TBRUN_LOG_JSON";
}
