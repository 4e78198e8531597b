use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::Path;

use crate::traits::FileSystem;

/// Group assignment config, loaded from a YAML file. Declares which client
/// lists should be managed with Terraform and which group owns each of them.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub contract_id: String,
    pub groups: Vec<GroupAssignment>,
}

/// One group and the client lists it owns, in declaration order
#[derive(Debug, Clone, Deserialize)]
pub struct GroupAssignment {
    pub group_id: i64,
    pub lists: Vec<String>,
}

impl Config {
    /// Load and parse the config file. Malformed or missing files are fatal.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let contents = fs.read_to_string(path)?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
