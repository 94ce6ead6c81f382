//! Toolchain check: what would a run resolve right now.

use anyhow::Result;
use serde_json::json;

use tbrun_core::config::ToolchainConfig;
use tbrun_core::options;
use tbrun_core::runner;
use tbrun_core::vendor;

pub fn check(json: bool) -> Result<()> {
    let toolchain = ToolchainConfig::from_env();
    let runner_path = runner::resolve_runner(&toolchain.runner_bin).ok();
    let glbl = vendor::find_xilinx_glbl(toolchain.vivado_root.as_deref());
    let questa_base = options::is_questa_base(toolchain.modelsim_path.as_deref());

    if json {
        let report = json!({
            "runner_bin": toolchain.runner_bin,
            "runner_path": runner_path.as_ref().map(|p| p.display().to_string()),
            "glbl": glbl.as_ref().map(|p| p.display().to_string()),
            "modelsim_path": toolchain.modelsim_path,
            "questa_base": questa_base,
            "vivado_root": toolchain.vivado_root,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("runner binary:  {}", toolchain.runner_bin);
    match runner_path {
        Some(p) => println!("runner path:    {}", p.display()),
        None => println!("runner path:    not found on PATH"),
    }
    match glbl {
        Some(p) => println!("xilinx glbl:    {}", p.display()),
        None => println!("xilinx glbl:    not found"),
    }
    println!(
        "modelsim path:  {}",
        toolchain.modelsim_path.as_deref().unwrap_or("(unset)")
    );
    println!("questa base:    {}", questa_base);
    println!(
        "vivado root:    {}",
        toolchain.vivado_root.as_deref().unwrap_or("(unset)")
    );
    Ok(())
}
