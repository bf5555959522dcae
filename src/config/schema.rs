//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use glob::Pattern;

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.module.is_empty() {
        return Err(ConfigError::NoModules);
    }

    for module in &config.module {
        validate_module_name(module)?;
    }

    if let Err(e) = Pattern::new(&config.wheel_pattern) {
        return Err(ConfigError::Invalid(format!(
            "Invalid wheel-pattern '{}': {}",
            config.wheel_pattern, e
        )));
    }

    if let Some(interpreter) = &config.interpreter {
        if interpreter.is_empty() || interpreter[0].trim().is_empty() {
            return Err(ConfigError::Invalid(
                "interpreter must name a program".to_string(),
            ));
        }
    }

    for (tool, command) in [
        ("compile", &config.tools.compile),
        ("stubgen", &config.tools.stubgen),
        ("package", &config.tools.package),
    ] {
        if command.trim().is_empty() {
            return Err(ConfigError::EmptyToolCommand(tool.to_string()));
        }
    }

    Ok(())
}

/// Validate a dotted Python module name such as `pkg.sub`
pub fn validate_module_name(name: &str) -> ConfigResult<()> {
    let valid = !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) if first == '_' || first.is_alphabetic() => {
                    chars.all(|c| c == '_' || c.is_alphanumeric())
                }
                _ => false,
            }
        });

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidModuleName(name.to_string()))
    }
}
