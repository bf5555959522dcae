//! Variable interpolation for command templates
//!
//! This module replaces `${var}` references in tool command templates.

use crate::error::{InterpolationError, InterpolationResult};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

/// Maximum number of expansion passes before a template is considered recursive
const MAX_PASSES: usize = 32;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Interpolate variables in a string
///
/// Supports:
/// - `${var}` - variable from the given map
/// - Environment variables (when not found in the map)
///
/// Unknown variables are left untouched.
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> InterpolationResult<String> {
    let re = var_pattern();
    let mut result = s.to_string();

    for _ in 0..MAX_PASSES {
        let mut changed = false;

        result = re
            .replace_all(&result, |caps: &Captures| {
                let var_name = &caps[1];

                if let Some(value) = vars.get(var_name) {
                    changed = true;
                    return value.clone();
                }

                if let Ok(value) = env::var(var_name) {
                    changed = true;
                    return value;
                }

                caps[0].to_string()
            })
            .into_owned();

        if !changed {
            return Ok(result);
        }
    }

    Err(InterpolationError::RecursiveInterpolation)
}

/// Interpolate with strict mode - errors on undefined variables
pub fn interpolate_strict(
    s: &str,
    vars: &HashMap<String, String>,
) -> InterpolationResult<String> {
    let result = interpolate(s, vars)?;

    if let Some(caps) = var_pattern().captures(&result) {
        return Err(InterpolationError::UndefinedVariable(caps[1].to_string()));
    }

    Ok(result)
}
