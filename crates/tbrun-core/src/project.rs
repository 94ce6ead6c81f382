//! In-memory simulation project model.
//!
//! Mirrors the configuration handed to the external framework: named
//! libraries with their source files, per-tool compile and simulation
//! options, top-level generics, and the framework's bundled verification
//! libraries. The runner module renders this into command-line form.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Library every discovered source lands in by default.
pub const DEFAULT_LIBRARY: &str = "vunit_library";

/// A named HDL library and its source files.
#[derive(Debug, Clone, Serialize)]
pub struct Library {
    pub name: String,
    pub source_files: Vec<PathBuf>,
}

/// A single option value as the framework accepts them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    /// Render for `key=value` command-line form. List items are joined
    /// with commas; the framework splits them back.
    pub fn render(&self) -> String {
        match self {
            OptionValue::Flag(b) => b.to_string(),
            OptionValue::Text(s) => s.clone(),
            OptionValue::List(items) => items.join(","),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SimProject {
    pub libraries: Vec<Library>,
    pub compile_options: BTreeMap<String, OptionValue>,
    pub sim_options: BTreeMap<String, OptionValue>,
    pub generics: BTreeMap<String, String>,
    pub vhdl_builtins: bool,
    pub osvvm: bool,
}

impl SimProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library handle by name, created on first use.
    pub fn library_mut(&mut self, name: &str) -> &mut Library {
        if let Some(idx) = self.libraries.iter().position(|l| l.name == name) {
            return &mut self.libraries[idx];
        }
        self.libraries.push(Library {
            name: name.to_string(),
            source_files: Vec::new(),
        });
        let idx = self.libraries.len() - 1;
        &mut self.libraries[idx]
    }

    pub fn set_compile_option(&mut self, key: &str, value: OptionValue) {
        self.compile_options.insert(key.to_string(), value);
    }

    pub fn set_sim_option(&mut self, key: &str, value: OptionValue) {
        self.sim_options.insert(key.to_string(), value);
    }

    pub fn set_generic(&mut self, name: &str, value: &str) {
        self.generics.insert(name.to_string(), value.to_string());
    }

    /// Enable the framework's bundled VHDL verification libraries.
    pub fn enable_vhdl_builtins(&mut self) {
        self.vhdl_builtins = true;
    }

    /// Enable the bundled OSVVM library.
    pub fn enable_osvvm(&mut self) {
        self.osvvm = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_mut_creates_once() {
        let mut project = SimProject::new();
        project
            .library_mut(DEFAULT_LIBRARY)
            .source_files
            .push(PathBuf::from("a.vhd"));
        project
            .library_mut(DEFAULT_LIBRARY)
            .source_files
            .push(PathBuf::from("b.vhd"));
        assert_eq!(project.libraries.len(), 1);
        assert_eq!(project.libraries[0].source_files.len(), 2);
    }

    #[test]
    fn test_option_value_rendering() {
        assert_eq!(OptionValue::Flag(true).render(), "true");
        assert_eq!(OptionValue::Text("path.do".to_string()).render(), "path.do");
        assert_eq!(
            OptionValue::List(vec!["-t 1ps".to_string(), "glbl".to_string()]).render(),
            "-t 1ps,glbl"
        );
    }

    #[test]
    fn test_set_option_overwrites() {
        let mut project = SimProject::new();
        project.set_sim_option("disable_ieee_warnings", OptionValue::Flag(false));
        project.set_sim_option("disable_ieee_warnings", OptionValue::Flag(true));
        assert_eq!(
            project.sim_options.get("disable_ieee_warnings"),
            Some(&OptionValue::Flag(true))
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let mut project = SimProject::new();
        project.enable_vhdl_builtins();
        project.set_generic("SIMULATION_TIMEOUT_IN_MS", "0.5");
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["vhdl_builtins"], true);
        assert_eq!(json["generics"]["SIMULATION_TIMEOUT_IN_MS"], "0.5");
    }
}
