mod common;
use crate::common::{init_tracing, project, single_task, ProjectConfigBuilder, TaskConfigBuilder};

use std::error::Error;

use rsyncgen::config::{PROJECT_SCHEMA, TASK_SCHEMA};
use rsyncgen::errors::RsyncGenError;
use rsyncgen::types::Direction;
use serde_json::json;

type TestResult = Result<(), Box<dyn Error>>;

fn photos() -> TaskConfigBuilder {
    TaskConfigBuilder::new("Photos", "photos/")
}

#[test]
fn minimal_project_uses_defaults() -> TestResult {
    init_tracing();

    let project = project(&single_task(photos()))?;
    let settings = project.settings();

    assert_eq!(settings.direction, Direction::Push);
    assert_eq!(settings.max_log_files, 10);
    assert_eq!(settings.rsync_bin, "rsync");
    assert!(settings.global_excludes.is_empty());
    assert!(settings.global_args.is_empty());
    assert!(!project.is_logging_enabled());
    assert!(!project.is_ssh_enabled());
    assert_eq!(project.tasks().len(), 1);
    Ok(())
}

#[test]
fn unknown_project_key_is_rejected() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .set("sauce_root", json!("/typo/"))
        .with_task(photos().build())
        .build();

    match project(&cfg) {
        Err(RsyncGenError::UnknownKey { scope, key }) => {
            assert_eq!(scope, "project config");
            assert_eq!(key, "sauce_root");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_key_is_reported_before_missing_key() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .without("direction")
        .set("bogus", json!(1))
        .with_task(photos().build())
        .build();

    assert!(matches!(
        project(&cfg),
        Err(RsyncGenError::UnknownKey { .. })
    ));
}

#[test]
fn every_required_project_key_is_enforced() {
    init_tracing();

    for key in PROJECT_SCHEMA.required {
        let mut cfg = ProjectConfigBuilder::new()
            .with_task(photos().build())
            .build();
        cfg.as_object_mut().unwrap().remove(*key);

        match project(&cfg) {
            Err(RsyncGenError::MissingKey { key: missing, .. }) => assert_eq!(missing, *key),
            other => panic!("expected MissingKey({key}), got {other:?}"),
        }
    }
}

#[test]
fn missing_key_message_names_the_key() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .without("direction")
        .with_task(photos().build())
        .build();

    let err = project(&cfg).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Required key not present in project config: direction"
    );
}

#[test]
fn invalid_direction_is_rejected() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .direction("sideways")
        .with_task(photos().build())
        .build();

    match project(&cfg) {
        Err(RsyncGenError::ConfigError(msg)) => assert!(msg.contains("sideways")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn ssh_port_bounds() -> TestResult {
    init_tracing();

    for bad in [0, -1, 65536] {
        let cfg = ProjectConfigBuilder::new()
            .ssh_port(bad)
            .with_task(photos().build())
            .build();
        match project(&cfg) {
            Err(RsyncGenError::ConfigError(msg)) => {
                assert_eq!(msg, format!("Invalid SSH port: {bad}"))
            }
            other => panic!("expected ConfigError for port {bad}, got {other:?}"),
        }
    }

    for good in [1, 22, 65535] {
        let cfg = ProjectConfigBuilder::new()
            .ssh_port(good)
            .with_task(photos().build())
            .build();
        let project = project(&cfg)?;
        assert!(project.is_ssh_enabled());
        assert_eq!(project.settings().ssh_port, Some(good as u16));
    }
    Ok(())
}

#[test]
fn null_ssh_port_is_rejected() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .set("ssh_port", json!(null))
        .with_task(photos().build())
        .build();

    assert!(matches!(project(&cfg), Err(RsyncGenError::ConfigError(_))));
}

#[test]
fn max_log_files_must_be_positive() -> TestResult {
    init_tracing();

    for bad in [json!(0), json!(-3), json!(null)] {
        let cfg = ProjectConfigBuilder::new()
            .set("max_log_files", bad.clone())
            .with_task(photos().build())
            .build();
        match project(&cfg) {
            Err(RsyncGenError::ConfigError(msg)) => assert!(msg.contains("max_log_files")),
            other => panic!("expected ConfigError for {bad}, got {other:?}"),
        }
    }

    let cfg = ProjectConfigBuilder::new()
        .set("max_log_files", json!(3))
        .with_task(photos().build())
        .build();
    assert_eq!(project(&cfg)?.settings().max_log_files, 3);
    Ok(())
}

#[test]
fn empty_task_list_is_rejected() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new().build();

    match project(&cfg) {
        Err(RsyncGenError::ConfigError(msg)) => assert_eq!(msg, "No task defined in the project."),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn unknown_task_key_is_rejected() {
    init_tracing();

    let cfg = single_task(photos().set("cmd", json!("echo")));

    match project(&cfg) {
        Err(RsyncGenError::UnknownKey { scope, key }) => {
            assert_eq!(scope, "task");
            assert_eq!(key, "cmd");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn every_required_task_key_is_enforced() {
    init_tracing();

    for key in TASK_SCHEMA.required {
        let cfg = single_task(photos().without(key));
        match project(&cfg) {
            Err(RsyncGenError::MissingKey { scope, key: missing }) => {
                assert_eq!(scope, "task");
                assert_eq!(missing, *key);
            }
            other => panic!("expected MissingKey({key}), got {other:?}"),
        }
    }
}

#[test]
fn task_must_be_an_object() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new().with_task(json!("photos")).build();

    assert!(matches!(project(&cfg), Err(RsyncGenError::ConfigError(_))));
}

#[test]
fn wrong_value_type_is_a_json_error() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .set("global_args", json!("-a"))
        .with_task(photos().build())
        .build();

    assert!(matches!(project(&cfg), Err(RsyncGenError::JsonError(_))));
}

#[test]
fn ssh_key_file_requires_port() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .set("ssh_key_file", json!("~/.ssh/backup"))
        .with_task(photos().build())
        .build();

    assert!(matches!(project(&cfg), Err(RsyncGenError::ConfigError(_))));
}

#[test]
fn colliding_slugs_are_rejected() {
    init_tracing();

    let cfg = ProjectConfigBuilder::new()
        .with_task(TaskConfigBuilder::new("My Photos", "a/").build())
        .with_task(TaskConfigBuilder::new("my-photos!", "b/").build())
        .build();

    match project(&cfg) {
        Err(RsyncGenError::ConfigError(msg)) => {
            assert!(msg.contains("My Photos"));
            assert!(msg.contains("my-photos!"));
            assert!(msg.contains("rsync_my-photos.sh"));
        }
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn name_without_word_characters_is_rejected() {
    init_tracing();

    let cfg = single_task(TaskConfigBuilder::new("!!!", "x/"));

    assert!(matches!(project(&cfg), Err(RsyncGenError::ConfigError(_))));
}

#[test]
fn schedule_validation() -> TestResult {
    init_tracing();

    for ok in ["0 3 * * *", "*/15 * * * 1-5", "@daily", "", "   "] {
        project(&single_task(photos().schedule(ok)))?;
    }

    for bad in ["0 3 * *", "@sometimes", "0 3 * * * *"] {
        match project(&single_task(photos().schedule(bad))) {
            Err(RsyncGenError::ConfigError(msg)) => assert!(msg.contains("invalid schedule")),
            other => panic!("expected ConfigError for {bad:?}, got {other:?}"),
        }
    }
    Ok(())
}
