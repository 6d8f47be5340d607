use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration forwarded to the preprocessing layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directories searched when resolving `#include` lines, after the root
    /// header's own directory
    pub include_dirs: Vec<PathBuf>,

    /// Macro substitutions applied before parsing. An empty value erases the
    /// macro token, which is the conventional way to strip export markers.
    pub defines: Vec<(String, String)>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include search directory
    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    /// Add a macro definition, `NAME` or `NAME=VALUE`
    pub fn with_define(mut self, define: &str) -> Self {
        match define.split_once('=') {
            Some((name, value)) => self.defines.push((name.to_string(), value.to_string())),
            None => self.defines.push((define.to_string(), String::new())),
        }
        self
    }
}
