use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: Storage,
    pub report: Report,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Storage {
    pub file: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            file: PathBuf::from("students.csv"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Report {
    /// Number of students shown in the ranking.
    pub top: usize,
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            top: 1,
            min_age: 19,
            max_age: 20,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot read configuration file {}", file_name.display())
        })?;
        Self::parse(&content).wrap_err("cannot parse configuration file")
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
