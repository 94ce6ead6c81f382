//! Typed configuration structs loaded from the environment.

use std::sync::OnceLock;

use super::env_keys::{observability as obs_keys, toolchain as tool_keys};
use super::loader::{env_bool, env_optional, env_or};

/// Logging configuration: quiet, level filter, JSON output.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            quiet: env_bool(obs_keys::TBRUN_QUIET, false),
            log_level: env_or(obs_keys::TBRUN_LOG_LEVEL, || {
                "tbrun=info,tbrun_core=info".to_string()
            }),
            log_json: env_bool(obs_keys::TBRUN_LOG_JSON, false),
        })
    }
}

/// Simulator toolchain locations read from the environment.
#[derive(Debug, Clone)]
pub struct ToolchainConfig {
    /// Name or path of the external framework entry point.
    pub runner_bin: String,
    /// ModelSim/Questa install path (VUNIT_MODELSIM_PATH).
    pub modelsim_path: Option<String>,
    /// Vivado install root (XILINX_VIVADO).
    pub vivado_root: Option<String>,
}

impl ToolchainConfig {
    pub fn from_env() -> Self {
        Self {
            runner_bin: env_or(tool_keys::TBRUN_RUNNER, || "vunit".to_string()),
            modelsim_path: env_optional(tool_keys::VUNIT_MODELSIM_PATH),
            vivado_root: env_optional(tool_keys::XILINX_VIVADO),
        }
    }
}
