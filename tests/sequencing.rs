//! Integration tests for task sequencing

mod common;

use binwheel::config::{parse_config, validate_config};
use binwheel::error::{BinwheelError, ExecutionError};
use binwheel::runner::{Context, Sequencer, TaskKind, Verbosity};
use common::{create_project, entries, read_log, FAKE_TOOLS, WHEEL};
use std::fs;
use std::path::Path;

fn sequencer(yaml: &str) -> Sequencer {
    let config = parse_config(yaml).unwrap();
    validate_config(&config).unwrap();
    Sequencer::new(config)
}

fn context(dir: &Path) -> Context {
    Context::new()
        .with_working_dir(dir.to_path_buf())
        .with_verbosity(Verbosity::Silent)
}

#[test]
fn test_build_runs_prerequisites_in_order() {
    let project = create_project(FAKE_TOOLS);
    let mut ctx = context(project.path());

    sequencer(FAKE_TOOLS)
        .run(TaskKind::Build, &mut ctx)
        .unwrap();

    assert_eq!(
        read_log(project.path()),
        vec!["compile:pkg", "stubgen:pkg", "package"]
    );
    assert_eq!(
        ctx.completed,
        vec![
            TaskKind::Compile,
            TaskKind::GenerateInterfaces,
            TaskKind::Build
        ]
    );
}

#[test]
fn test_compile_failure_stops_the_sequence() {
    let yaml = FAKE_TOOLS.replace("echo compile:${module} >> order.log", "exit 3");
    let project = create_project(&yaml);
    let mut ctx = context(project.path());

    let result = sequencer(&yaml).run(TaskKind::Build, &mut ctx);

    assert!(matches!(
        result,
        Err(BinwheelError::Execution(ExecutionError::CommandFailed {
            code: Some(3),
            ..
        }))
    ));
    assert!(read_log(project.path()).is_empty());
    assert!(ctx.completed.is_empty());
    assert!(!project.path().join("dist").exists());
}

#[test]
fn test_stubgen_failure_stops_before_packaging() {
    let yaml = FAKE_TOOLS.replace("echo stubgen:${module} >> order.log", "exit 1");
    let project = create_project(&yaml);
    let mut ctx = context(project.path());

    assert!(sequencer(&yaml).run(TaskKind::Build, &mut ctx).is_err());
    assert_eq!(read_log(project.path()), vec!["compile:pkg"]);
    assert_eq!(ctx.completed, vec![TaskKind::Compile]);
}

#[test]
fn test_build_copies_wheels_byte_identical() {
    let project = create_project(FAKE_TOOLS);
    let mut ctx = context(project.path());

    sequencer(FAKE_TOOLS)
        .run(TaskKind::Build, &mut ctx)
        .unwrap();

    let built = fs::read(project.path().join("dist").join(WHEEL)).unwrap();
    let copied = fs::read(project.path().join(WHEEL)).unwrap();
    assert_eq!(built, copied);
    assert!(!project.path().join("pkg-0.1.0.tar.gz").exists());
}

#[test]
fn test_rerun_overwrites_previous_wheels() {
    let project = create_project(FAKE_TOOLS);
    fs::write(project.path().join(WHEEL), b"stale").unwrap();

    for _ in 0..2 {
        let mut ctx = context(project.path());
        sequencer(FAKE_TOOLS)
            .run(TaskKind::Build, &mut ctx)
            .unwrap();
    }

    assert_eq!(fs::read(project.path().join(WHEEL)).unwrap(), b"wheel-bytes");
    assert_eq!(read_log(project.path()).len(), 6);
}

#[test]
fn test_only_dist_and_working_dir_are_written() {
    let project = create_project(FAKE_TOOLS);
    let mut ctx = context(project.path());

    sequencer(FAKE_TOOLS)
        .run(TaskKind::Build, &mut ctx)
        .unwrap();

    assert_eq!(
        entries(project.path()),
        vec!["binwheel.yml", "dist", "order.log", WHEEL]
    );
    assert_eq!(
        entries(&project.path().join("dist")),
        vec!["pkg-0.1.0-cp311-cp311-linux_x86_64.whl", "pkg-0.1.0.tar.gz"]
    );
}

#[test]
fn test_single_task_runs_alone() {
    let project = create_project(FAKE_TOOLS);
    let mut ctx = context(project.path());

    sequencer(FAKE_TOOLS)
        .run(TaskKind::GenerateInterfaces, &mut ctx)
        .unwrap();

    assert_eq!(read_log(project.path()), vec!["stubgen:pkg"]);
}

#[test]
fn test_completed_tasks_are_not_repeated() {
    let project = create_project(FAKE_TOOLS);
    let mut ctx = context(project.path());
    let sequencer = sequencer(FAKE_TOOLS);

    sequencer.run(TaskKind::Compile, &mut ctx).unwrap();
    sequencer.run(TaskKind::Build, &mut ctx).unwrap();

    assert_eq!(
        read_log(project.path()),
        vec!["compile:pkg", "stubgen:pkg", "package"]
    );
}

#[test]
fn test_each_module_is_compiled() {
    let yaml = FAKE_TOOLS.replace("module: pkg", "modules: [first, second.sub]");
    let project = create_project(&yaml);
    let mut ctx = context(project.path());

    sequencer(&yaml).run(TaskKind::Build, &mut ctx).unwrap();

    assert_eq!(
        read_log(project.path()),
        vec![
            "compile:first",
            "compile:second.sub",
            "stubgen:first",
            "stubgen:second.sub",
            "package"
        ]
    );
}

#[test]
fn test_missing_dist_dir_is_not_an_error() {
    let yaml = r#"
module: pkg
tools:
  compile: "true"
  stubgen: "true"
  package: "true"
"#;
    let project = create_project(yaml);
    let mut ctx = context(project.path());

    sequencer(yaml).run(TaskKind::Build, &mut ctx).unwrap();
    assert_eq!(entries(project.path()), vec!["binwheel.yml"]);
}

#[test]
fn test_custom_dist_dir_and_pattern() {
    let yaml = r#"
module: pkg
dist-dir: out
wheel-pattern: "pkg-*.whl"
tools:
  compile: "true"
  stubgen: "true"
  package: "mkdir -p ${dist_dir} && touch ${dist_dir}/pkg-1.0-py3-none-any.whl ${dist_dir}/other-1.0-py3-none-any.whl"
"#;
    let project = create_project(yaml);
    let mut ctx = context(project.path());

    sequencer(yaml).run(TaskKind::Build, &mut ctx).unwrap();

    assert!(project.path().join("pkg-1.0-py3-none-any.whl").exists());
    assert!(!project.path().join("other-1.0-py3-none-any.whl").exists());
}

#[test]
fn test_dry_run_executes_nothing() {
    let project = create_project(FAKE_TOOLS);
    let mut ctx = context(project.path()).with_dry_run(true);

    sequencer(FAKE_TOOLS)
        .run(TaskKind::Build, &mut ctx)
        .unwrap();

    assert_eq!(entries(project.path()), vec!["binwheel.yml"]);
}

#[test]
fn test_package_sees_first_module_regardless_of_completed_tasks() {
    let yaml = r#"
modules: [first, second]
tools:
  compile: "echo compile:${module} >> order.log"
  stubgen: "echo stubgen:${module} >> order.log"
  package: "echo package:${module} >> order.log"
"#;
    let project = create_project(yaml);
    let mut ctx = context(project.path());
    let sequencer = sequencer(yaml);

    sequencer.run(TaskKind::Build, &mut ctx).unwrap();
    ctx.completed.retain(|task| *task != TaskKind::Build);
    sequencer.run(TaskKind::Build, &mut ctx).unwrap();

    let log = read_log(project.path());
    assert_eq!(
        log,
        vec![
            "compile:first",
            "compile:second",
            "stubgen:first",
            "stubgen:second",
            "package:first",
            "package:first"
        ]
    );
}
