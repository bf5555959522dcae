//! Command execution
//!
//! This module runs tool command templates through the configured shell.

use crate::error::{BinwheelError, ExecutionError};
use crate::runner::context::Verbosity;
use crate::runner::{interpolate_strict, Context};
use crate::ui;
use std::process::{Command as StdCommand, Stdio};

/// Execute a command template in the given context
///
/// The tool inherits stdio so its own output and errors reach the user
/// unchanged. A non-zero exit status is reported with the tool's code.
pub fn execute_command(template: &str, ctx: &Context) -> Result<(), BinwheelError> {
    let exec_str = interpolate_strict(template, &ctx.template_vars())?;

    if ctx.dry_run {
        if ctx.verbosity >= Verbosity::Quiet {
            ui::print_dry_run(&exec_str);
        }
        return Ok(());
    }

    if ctx.verbosity >= Verbosity::Normal {
        ui::print_run(&exec_str);
    }

    let (program, interpreter_args) = ctx
        .interpreter
        .split_first()
        .ok_or(ExecutionError::EmptyInterpreter)?;

    let mut command = StdCommand::new(program);
    command.args(interpreter_args);
    command.arg(&exec_str);
    command.current_dir(&ctx.working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    // Env file first so template variables win on conflict
    command.envs(&ctx.env);
    command.envs(&ctx.vars);

    let status = command.status().map_err(|e| ExecutionError::Spawn {
        command: exec_str.clone(),
        error: e.to_string(),
    })?;

    if !status.success() {
        return Err(ExecutionError::CommandFailed {
            command: exec_str,
            code: status.code(),
        }
        .into());
    }

    Ok(())
}
