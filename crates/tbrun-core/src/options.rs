//! Compiler and simulator flag assembly.
//!
//! Pure mappings from vendor-library selection and environment knobs to the
//! flag lists pushed into the simulation project. Flag values follow the
//! simulators' own conventions; entries like `-L unisims_ver` are single
//! arguments the framework splits downstream.

use std::path::{Path, PathBuf};

/// Vendor simulation library selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct VendorLibraries {
    pub xilinx: bool,
    pub intel_altera: bool,
}

/// Top-level generic carrying the per-test simulation timeout.
pub const TIMEOUT_GENERIC: &str = "SIMULATION_TIMEOUT_IN_MS";

/// ModelSim GUI init script looked up next to the scanned tree.
pub const WAVE_INIT_FILE: &str = "find_wave_file.do";

/// NVC analysis flags, applied unconditionally.
pub fn nvc_analysis_flags() -> Vec<String> {
    vec!["--relaxed".to_string()]
}

/// NVC library search flags for the enabled vendor libraries.
/// Empty when no vendor libraries are selected; callers skip the option then.
pub fn nvc_global_flags(vendors: &VendorLibraries) -> Vec<String> {
    let mut flags = Vec::new();
    if vendors.xilinx {
        flags.extend(
            ["-L", "unisim", "-L", "unimacro", "-L", "unifast"]
                .iter()
                .map(|s| s.to_string()),
        );
    }
    if vendors.intel_altera {
        flags.extend(["-L", "altera_mf"].iter().map(|s| s.to_string()));
    }
    flags
}

/// True when the configured ModelSim install is a Questa base edition.
pub fn is_questa_base(modelsim_path: Option<&str>) -> bool {
    modelsim_path.is_some_and(|p| p.contains("questa_base"))
}

/// ModelSim/Questa `vsim` flags: resolution and visibility base flags, the
/// enabled vendor libraries, and Questa base tuning when detected.
pub fn modelsim_vsim_flags(vendors: &VendorLibraries, questa_base: bool) -> Vec<String> {
    let mut flags = vec!["-t 1ps".to_string(), "-voptargs=+acc".to_string()];
    if vendors.intel_altera {
        flags.extend(
            ["-L altera_mf_ver", "-L altera_lnsim_ver", "-L lpm_ver"]
                .iter()
                .map(|s| s.to_string()),
        );
    }
    if vendors.xilinx {
        // glbl rides along as an extra top unit for Xilinx primitives
        flags.extend(
            ["-L unisims_ver", "-L unimacro_ver", "-L xpm", "-L secureip", "glbl"]
                .iter()
                .map(|s| s.to_string()),
        );
    }
    if questa_base {
        flags.extend(
            ["-qbase_tune", "-printsimstats", "-simstats"]
                .iter()
                .map(|s| s.to_string()),
        );
    }
    flags
}

/// Locate the GUI waveform init script: scan root first, then the current
/// directory. None when absent; the option is only set for a file that
/// exists.
pub fn find_wave_init_file(scan_root: &Path) -> Option<PathBuf> {
    let candidate = scan_root.join(WAVE_INIT_FILE);
    if candidate.is_file() {
        return Some(candidate);
    }
    let cwd = std::env::current_dir().ok()?;
    let candidate = cwd.join(WAVE_INIT_FILE);
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}
