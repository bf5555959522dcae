//! Task sequencing
//!
//! This module defines the three build tasks, their prerequisites, and the
//! sequencer that runs them one after another.

use crate::config::Config;
use crate::error::{BinwheelError, ConfigError, ConfigResult};
use crate::runner::{collect_wheels, copy_wheels, execute_command, Context};
use std::fmt;
use std::path::PathBuf;

/// One of the named build tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Compile the configured modules to native extension modules
    Compile,
    /// Generate `.pyi` stubs for the configured modules
    GenerateInterfaces,
    /// Build the wheel and copy it into the working directory
    Build,
}

impl TaskKind {
    /// All tasks, in the order they appear in help output
    pub const ALL: [TaskKind; 3] = [
        TaskKind::Compile,
        TaskKind::GenerateInterfaces,
        TaskKind::Build,
    ];

    /// Command-line name of the task
    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Compile => "compile",
            TaskKind::GenerateInterfaces => "generate-interfaces",
            TaskKind::Build => "build",
        }
    }

    /// Parse a task from its command-line name
    pub fn from_name(name: &str) -> ConfigResult<Self> {
        match name {
            "compile" => Ok(TaskKind::Compile),
            "generate-interfaces" | "generate_interfaces" => Ok(TaskKind::GenerateInterfaces),
            "build" => Ok(TaskKind::Build),
            _ => Err(ConfigError::TaskNotFound(name.to_string())),
        }
    }

    /// One-line description for help text
    pub fn usage(self) -> &'static str {
        match self {
            TaskKind::Compile => "Compile Python source down to a platform-specific binary",
            TaskKind::GenerateInterfaces => "Generate .pyi stub files for the compiled modules",
            TaskKind::Build => "Run compile and generate-interfaces, then build and collect the wheel",
        }
    }

    /// Tasks that must complete before this one starts
    pub fn prerequisites(self) -> &'static [TaskKind] {
        match self {
            TaskKind::Build => &[TaskKind::Compile, TaskKind::GenerateInterfaces],
            TaskKind::Compile | TaskKind::GenerateInterfaces => &[],
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the ordered list of tasks needed to run `target`
///
/// Prerequisites come first, in declaration order, and every task appears once.
pub fn plan(target: TaskKind) -> Vec<TaskKind> {
    let mut order = Vec::new();
    visit(target, &mut order);
    order
}

fn visit(task: TaskKind, order: &mut Vec<TaskKind>) {
    if order.contains(&task) {
        return;
    }
    for pre in task.prerequisites() {
        visit(*pre, order);
    }
    order.push(task);
}

/// Runs build tasks against a configuration
pub struct Sequencer {
    config: Config,
}

impl Sequencer {
    pub fn new(config: Config) -> Self {
        Sequencer { config }
    }

    /// Run `target` and its prerequisites, stopping at the first failure
    pub fn run(&self, target: TaskKind, ctx: &mut Context) -> Result<(), BinwheelError> {
        self.bind_vars(ctx);

        for task in plan(target) {
            if ctx.is_completed(task) {
                ctx.print_task_skip(task, "already completed");
                continue;
            }

            ctx.print_task_start(task);
            if let Err(e) = self.execute(task, ctx) {
                ctx.print_error(&format!("Task '{}' failed", task));
                return Err(e);
            }
            ctx.mark_completed(task);
            ctx.print_task_complete(task);
        }

        Ok(())
    }

    /// Execute a single task without its prerequisites
    pub fn execute(&self, task: TaskKind, ctx: &mut Context) -> Result<(), BinwheelError> {
        match task {
            TaskKind::Compile | TaskKind::GenerateInterfaces => self.run_per_module(task, ctx),
            TaskKind::Build => self.build(ctx),
        }
    }

    fn run_per_module(&self, task: TaskKind, ctx: &mut Context) -> Result<(), BinwheelError> {
        let template = self.config.tool_command(task);

        let bound = ctx.get_var("module").cloned();

        let mut result = Ok(());
        for module in &self.config.module {
            ctx.set_var("module", module.as_str());
            result = execute_command(template, ctx);
            if result.is_err() {
                break;
            }
        }

        // Later templates see the same `module` no matter which tasks ran
        match bound {
            Some(module) => ctx.set_var("module", module),
            None => {
                ctx.vars.remove("module");
            }
        }

        result
    }

    fn build(&self, ctx: &mut Context) -> Result<(), BinwheelError> {
        execute_command(self.config.tool_command(TaskKind::Build), ctx)?;

        if ctx.dry_run {
            ctx.print_info(&format!(
                "Would copy {} from {} into {}",
                self.config.wheel_pattern,
                self.config.dist_dir,
                ctx.working_dir.display()
            ));
            return Ok(());
        }

        let dist_dir = self.dist_dir(ctx);
        let wheels = collect_wheels(&dist_dir, &self.config.wheel_pattern)?;
        if wheels.is_empty() {
            ctx.print_warn(&format!(
                "No files matching '{}' found in {}",
                self.config.wheel_pattern,
                dist_dir.display()
            ));
            return Ok(());
        }

        for copied in copy_wheels(&wheels, &ctx.working_dir)? {
            ctx.print_info(&format!("Copied {}", copied.display()));
        }

        Ok(())
    }

    fn dist_dir(&self, ctx: &Context) -> PathBuf {
        ctx.working_dir.join(&self.config.dist_dir)
    }

    /// Expose configuration values to command templates
    fn bind_vars(&self, ctx: &mut Context) {
        let config = &self.config;
        ctx.set_var("python", config.python.as_str());
        ctx.set_var("dist_dir", config.dist_dir.as_str());
        ctx.set_var("stub_dir", config.stub_dir.as_str());
        ctx.set_var("wheel_pattern", config.wheel_pattern.as_str());
        ctx.set_var("modules", config.module.join(" "));
        if let Some(first) = config.module.first() {
            ctx.set_var("module", first.as_str());
        }
    }
}
