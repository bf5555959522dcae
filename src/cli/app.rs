//! Main CLI application

use crate::config::{
    load_env_file, parse_config_auto, parse_config_file, validate_config, Config,
};
use crate::error::{BinwheelError, ConfigError};
use crate::runner::{Context, Sequencer, TaskKind, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the process arguments
    pub fn run(self) -> Result<(), BinwheelError> {
        self.run_from(std::env::args_os())
    }

    /// Run the application with explicit command line arguments
    pub fn run_from<I, T>(mut self, args: I) -> Result<(), BinwheelError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().get_matches_from(args);
        let verbosity = get_verbosity(&matches);

        let (name, sub_matches) = match matches.subcommand() {
            Some(found) => found,
            None => {
                // No task specified, show help
                self.command.print_help()?;
                println!();
                return Ok(());
            }
        };

        match name {
            "list" => {
                print_task_list();
                Ok(())
            }
            "completions" => {
                if let Some(shell) = sub_matches.get_one::<Shell>("shell").copied() {
                    let bin_name = self.command.get_name().to_string();
                    clap_complete::generate(shell, &mut self.command, bin_name, &mut io::stdout());
                }
                Ok(())
            }
            task_name => {
                let task = TaskKind::from_name(task_name)?;
                let (config, config_path) = load_config(&matches)?;

                let mut ctx = build_context(&config, config_path, verbosity)?
                    .with_dry_run(matches.get_flag("dry-run"));

                Sequencer::new(config).run(task, &mut ctx)
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
fn build_command() -> Command {
    let mut cmd = Command::new("binwheel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile a Python package to native code and package it as a binary wheel")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to binwheel.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("module")
                .short('m')
                .long("module")
                .value_name("MODULE")
                .help("Module to compile, replacing the configured ones (repeatable)")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the commands without running them")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output of our own")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        );

    for task in TaskKind::ALL {
        let mut task_cmd = Command::new(task.name()).about(task.usage());

        if task == TaskKind::GenerateInterfaces {
            task_cmd = task_cmd.alias("generate_interfaces");
        }

        let prerequisites = task.prerequisites();
        if !prerequisites.is_empty() {
            let names: Vec<&str> = prerequisites.iter().map(|t| t.name()).collect();
            task_cmd = task_cmd.long_about(format!(
                "{}\n\nRuns first: {}",
                task.usage(),
                names.join(", ")
            ));
        }

        cmd = cmd.subcommand(task_cmd);
    }

    cmd.subcommand(Command::new("list").about("List available tasks"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Load and validate the configuration, applying `--module` overrides
///
/// Without `--file`, the config is discovered from the current directory.
/// A missing config is only an error when no module was given on the
/// command line.
fn load_config(matches: &ArgMatches) -> Result<(Config, Option<PathBuf>), BinwheelError> {
    let modules: Vec<String> = matches
        .get_many::<String>("module")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let (mut config, config_path) = if let Some(file) = matches.get_one::<String>("file") {
        let path = PathBuf::from(file);
        (parse_config_file(&path)?, Some(path))
    } else {
        match parse_config_auto() {
            Ok((config, path)) => (config, Some(path)),
            Err(BinwheelError::Config(ConfigError::NotFound(_))) if !modules.is_empty() => {
                (Config::default(), None)
            }
            Err(e) => return Err(e),
        }
    };

    if !modules.is_empty() {
        config.module = modules;
    }

    validate_config(&config)?;
    Ok((config, config_path))
}

/// Create the execution context for a loaded configuration
fn build_context(
    config: &Config,
    config_path: Option<PathBuf>,
    verbosity: Verbosity,
) -> Result<Context, BinwheelError> {
    let mut ctx = Context::new().with_verbosity(verbosity);

    if let Some(path) = config_path {
        let working_dir = ctx.working_dir.join(config_dir(&path));
        ctx = ctx.with_working_dir(working_dir);
    }

    let env = load_env_file(config, &ctx.working_dir)?;
    ctx = ctx.with_env(env);

    if let Some(interpreter) = &config.interpreter {
        ctx = ctx.with_interpreter(interpreter.clone());
    }

    ctx.print_debug(&format!("Working directory: {}", ctx.working_dir.display()));
    Ok(ctx)
}

/// Directory holding a config file; empty parents mean the current directory
fn config_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn print_task_list() {
    for task in TaskKind::ALL {
        let prerequisites: Vec<&str> = task.prerequisites().iter().map(|t| t.name()).collect();
        if prerequisites.is_empty() {
            println!("{:<22}{}", task.name(), task.usage());
        } else {
            println!(
                "{:<22}{} (after: {})",
                task.name(),
                task.usage(),
                prerequisites.join(", ")
            );
        }
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), BinwheelError> {
    App::new().run()
}
