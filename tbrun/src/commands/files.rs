//! List the HDL files discovery would hand to the framework.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use tbrun_core::discovery::{self, HDL_EXTENSIONS};

pub fn list_files(
    path: &str,
    ext: &[String],
    ignore_pattern: &str,
    exclude: &[String],
    json: bool,
) -> Result<()> {
    let root = PathBuf::from(path);
    let extensions: Vec<&str> = if ext.is_empty() {
        HDL_EXTENSIONS.to_vec()
    } else {
        ext.iter().map(String::as_str).collect()
    };

    let files = discovery::discover_hdl_files(&root, &extensions, ignore_pattern, exclude)?;

    if json {
        let listed: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        let report = json!({
            "root": root.display().to_string(),
            "count": listed.len(),
            "files": listed,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for file in &files {
            println!("{}", file.display());
        }
        tracing::info!(count = files.len(), "listed HDL sources");
    }
    Ok(())
}
