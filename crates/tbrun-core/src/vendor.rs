//! Xilinx glbl.v lookup.
//!
//! The glbl module carries the global set/reset signals some Xilinx device
//! primitives expect; it must be compiled alongside the design whenever the
//! Xilinx vendor libraries are in use.

use std::path::{Path, PathBuf};

/// Fixed fallback install locations, tried in order.
pub const GLBL_FALLBACK_PATHS: &[&str] = &[
    "C:/Xilinx/Vivado/2023.2/data/verilog/src/glbl.v",
    "C:/Xilinx/Vivado/2023.1/data/verilog/src/glbl.v",
    "C:/Xilinx/Vivado/2024.1/data/verilog/src/glbl.v",
    "/opt/xilinx/vivado/2023.2/data/verilog/src/glbl.v",
    "/opt/xilinx/vivado/2023.1/data/verilog/src/glbl.v",
    "/opt/xilinx/vivado/2024.1/data/verilog/src/glbl.v",
    // NVC installs ship glbl under the VHDL tree
    "/opt/xilinx/vivado/data/vhdl/src/glbl.v",
];

/// Candidate paths in lookup order: the Vivado root from the environment
/// first (when set), then the fixed fallbacks.
pub fn glbl_search_paths(vivado_root: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(GLBL_FALLBACK_PATHS.len() + 1);
    if let Some(root) = vivado_root {
        paths.push(
            Path::new(root)
                .join("data")
                .join("verilog")
                .join("src")
                .join("glbl.v"),
        );
    }
    paths.extend(GLBL_FALLBACK_PATHS.iter().map(PathBuf::from));
    paths
}

/// First candidate that exists on disk, or None.
pub fn find_glbl_among(paths: &[PathBuf]) -> Option<PathBuf> {
    paths.iter().find(|p| p.is_file()).cloned()
}

/// Locate glbl.v using the environment-derived root plus fallbacks.
pub fn find_xilinx_glbl(vivado_root: Option<&str>) -> Option<PathBuf> {
    find_glbl_among(&glbl_search_paths(vivado_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_env_root_is_tried_first() {
        let paths = glbl_search_paths(Some("/tools/vivado/2023.2"));
        assert_eq!(
            paths[0],
            Path::new("/tools/vivado/2023.2")
                .join("data")
                .join("verilog")
                .join("src")
                .join("glbl.v")
        );
        assert_eq!(paths.len(), GLBL_FALLBACK_PATHS.len() + 1);
    }

    #[test]
    fn test_no_env_root_uses_fallbacks_only() {
        let paths = glbl_search_paths(None);
        assert_eq!(paths.len(), GLBL_FALLBACK_PATHS.len());
        assert_eq!(paths[0], PathBuf::from(GLBL_FALLBACK_PATHS[0]));
        assert_eq!(
            paths.last().unwrap(),
            &PathBuf::from("/opt/xilinx/vivado/data/vhdl/src/glbl.v")
        );
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing").join("glbl.v");
        let second = tmp.path().join("glbl.v");
        fs::write(&second, "module glbl; endmodule\n").unwrap();
        let third = tmp.path().join("other.v");
        fs::write(&third, "module glbl; endmodule\n").unwrap();

        let found = find_glbl_among(&[missing, second.clone(), third]);
        assert_eq!(found, Some(second));
    }

    #[test]
    fn test_nothing_exists_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a").join("glbl.v");
        let b = tmp.path().join("b").join("glbl.v");
        assert_eq!(find_glbl_among(&[a, b]), None);
    }
}
