mod common;
use crate::common::{init_tracing, project, single_task, TaskConfigBuilder};

use std::collections::BTreeMap;
use std::error::Error;

use rsyncgen::errors::RsyncGenError;
use rsyncgen::fs::mock::MockFileSystem;
use rsyncgen::template::ScriptTemplate;
use rsyncgen_test_utils::bundled_template;

type TestResult = Result<(), Box<dyn Error>>;

fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

#[test]
fn substitutes_placeholders_and_unescapes_braces() -> TestResult {
    init_tracing();

    let template = ScriptTemplate::from_source("t", "f() {{ echo {greeting} ${{HOME}}; }}");
    let out = template.render(&values(&[("greeting", "hi")]))?;

    assert_eq!(out, "f() { echo hi ${HOME}; }");
    Ok(())
}

#[test]
fn unknown_placeholder_is_an_error() {
    init_tracing();

    let template = ScriptTemplate::from_source("t", "echo {missing}");

    match template.render(&values(&[])) {
        Err(RsyncGenError::TemplateError(msg)) => assert!(msg.contains("{missing}")),
        other => panic!("expected TemplateError, got {other:?}"),
    }
}

#[test]
fn lone_brace_is_an_error() {
    init_tracing();

    for source in ["echo ${HOME}", "oops }", "{ not closed"] {
        let template = ScriptTemplate::from_source("t", source);
        assert!(
            matches!(template.render(&values(&[])), Err(RsyncGenError::TemplateError(_))),
            "expected error for {source:?}"
        );
    }
}

#[test]
fn missing_template_file_is_an_error() {
    init_tracing();

    let fs = MockFileSystem::new();

    assert!(matches!(
        ScriptTemplate::load(&fs, "/nowhere/rsync.sh.template"),
        Err(RsyncGenError::TemplateError(_))
    ));
}

#[test]
fn bundled_template_renders_a_complete_script() -> TestResult {
    init_tracing();

    let source = std::fs::read_to_string(bundled_template())?;
    let template = ScriptTemplate::from_source(bundled_template(), source);

    let cfg = rsyncgen_test_utils::builders::ProjectConfigBuilder::new()
        .log_dir_name("__logs__")
        .global_arg("-a")
        .with_task(TaskConfigBuilder::new("Photos", "photos/").build())
        .build();
    let project = project(&cfg)?;
    let script = template.render(&project.tasks()[0].template_values())?;

    assert!(script.starts_with("#!/usr/bin/env bash\n"));
    assert!(script.contains("ENABLE_LOGGING=true\n"));
    assert!(script.contains("LOG_DIR=\"/src/photos/__logs__/\"\n"));
    assert!(script.contains("MAX_LOG_FILES=10\n"));
    assert!(script.contains("run_rsync() {\n"));
    assert!(script.contains("    rsync \\\n    -a \\\n    --exclude \"__logs__/\" \\\n"));
    assert!(script.contains("\"/src/photos/\" \\\n"));
    assert!(script.contains("\"user@host:/dst/photos/\"\n"));
    assert!(!script.contains("{rsync"));
    Ok(())
}

#[test]
fn bundled_template_without_arguments_keeps_continuation() -> TestResult {
    init_tracing();

    let source = std::fs::read_to_string(bundled_template())?;
    let template = ScriptTemplate::from_source(bundled_template(), source);
    let project = project(&single_task(TaskConfigBuilder::new("Photos", "photos/")))?;
    let script = template.render(&project.tasks()[0].template_values())?;

    assert!(script.contains("    rsync \\\n     \\\n        \"/src/photos/\" \\\n"));
    assert!(script.contains("ENABLE_LOGGING=false\n"));
    assert!(script.contains("LOG_DIR=\"\"\n"));
    Ok(())
}
