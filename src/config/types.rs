//! Core configuration types
//!
//! This module defines the data structures that represent a binwheel.yml file.

use crate::runner::TaskKind;
use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Python modules to compile; a single name or a list
    #[serde(
        default,
        alias = "modules",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_modules"
    )]
    pub module: Vec<String>,

    /// Python executable used by the default compile command
    #[serde(default = "default_python")]
    pub python: String,

    /// Directory the package builder writes wheels to
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// Glob matched against file names in `dist_dir`
    #[serde(default = "default_wheel_pattern")]
    pub wheel_pattern: String,

    /// Output directory handed to the stub generator
    #[serde(default = "default_stub_dir")]
    pub stub_dir: String,

    /// Optional dotenv file whose variables are exported to every tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,

    /// Shell used to run tool commands (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Command templates for the external tools
    #[serde(default)]
    pub tools: Tools,
}

/// Command templates for the three external tools
///
/// Templates may reference `${module}`, `${modules}`, `${python}`,
/// `${dist_dir}`, `${stub_dir}` and `${wheel_pattern}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tools {
    /// Python-to-native compiler, run once per module
    #[serde(default = "default_compile_command")]
    pub compile: String,

    /// Stub generator, run once per module
    #[serde(default = "default_stubgen_command")]
    pub stubgen: String,

    /// Package builder, run once
    #[serde(default = "default_package_command")]
    pub package: String,
}

impl Config {
    /// Command template used by a task
    pub fn tool_command(&self, task: TaskKind) -> &str {
        match task {
            TaskKind::Compile => &self.tools.compile,
            TaskKind::GenerateInterfaces => &self.tools.stubgen,
            TaskKind::Build => &self.tools.package,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            module: Vec::new(),
            python: default_python(),
            dist_dir: default_dist_dir(),
            wheel_pattern: default_wheel_pattern(),
            stub_dir: default_stub_dir(),
            env_file: None,
            interpreter: None,
            tools: Tools::default(),
        }
    }
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            compile: default_compile_command(),
            stubgen: default_stubgen_command(),
            package: default_package_command(),
        }
    }
}

fn default_python() -> String {
    "python".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_wheel_pattern() -> String {
    "*.whl".to_string()
}

fn default_stub_dir() -> String {
    ".".to_string()
}

// Nuitka's own .pyi output is skipped; stubgen produces better stubs.
fn default_compile_command() -> String {
    "${python} -m nuitka ${module} --module --no-pyi-file --include-package=${module}"
        .to_string()
}

fn default_stubgen_command() -> String {
    "stubgen ${module} -o ${stub_dir}".to_string()
}

fn default_package_command() -> String {
    "poetry build -f wheel".to_string()
}

/// Custom deserializer for modules that handles both a single name and a list
fn deserialize_modules<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Sequence(seq) => {
            let mut modules = Vec::new();
            for item in seq {
                let name = String::deserialize(item).map_err(D::Error::custom)?;
                modules.push(name);
            }
            Ok(modules)
        }
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("module must be a string or array")),
    }
}
