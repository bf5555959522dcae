//! Execution context for task running
//!
//! The context tracks all the state needed while a sequence runs.

use crate::runner::TaskKind;
use crate::ui;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Execution context that tracks state during a run
pub struct Context {
    /// Directory commands run in and wheels are copied to
    pub working_dir: PathBuf,

    /// Template variables, also exported to child processes
    pub vars: HashMap<String, String>,

    /// Extra environment loaded from the env file
    pub env: HashMap<String, String>,

    /// Shell used to run command templates (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Tasks that finished successfully, in completion order
    pub completed: Vec<TaskKind>,

    /// Print commands instead of running them
    pub dry_run: bool,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            vars: HashMap::new(),
            env: HashMap::new(),
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            completed: Vec::new(),
            dry_run: false,
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set variables
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = vars;
        self
    }

    /// Set extra environment for child processes
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Variables visible to command templates
    ///
    /// Template variables take precedence over env-file entries.
    pub fn template_vars(&self) -> HashMap<String, String> {
        let mut merged = self.env.clone();
        merged.extend(self.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Set a single variable
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Get a variable value
    pub fn get_var(&self, key: &str) -> Option<&String> {
        self.vars.get(key)
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Record a task as finished
    pub fn mark_completed(&mut self, task: TaskKind) {
        self.completed.push(task);
    }

    /// Check whether a task already finished in this run
    pub fn is_completed(&self, task: TaskKind) -> bool {
        self.completed.contains(&task)
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            ui::print_info(message);
        }
    }

    /// Print warning message
    pub fn print_warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            ui::print_warn(message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            ui::print_error(message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            ui::print_debug(message);
        }
    }

    /// Print task start message
    pub fn print_task_start(&self, task: TaskKind) {
        self.print_info(&format!("Running task: {}", task));
    }

    /// Print task complete message
    pub fn print_task_complete(&self, task: TaskKind) {
        self.print_debug(&format!("Task completed: {}", task));
    }

    /// Print task skip message
    pub fn print_task_skip(&self, task: TaskKind, reason: &str) {
        self.print_debug(&format!("Skipping task '{}': {}", task, reason));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
