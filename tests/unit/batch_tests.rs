//! Unit tests for command batch composition.

#![allow(clippy::expect_used)]

use startserver::server::{FeatureToggles, RunError, ServerConfig, compose, load_command_files};

#[test]
fn composition_order_is_embed_logging_otel_then_files() {
    let toggles = FeatureToggles {
        debug_logging: true,
        otel: true,
        ..FeatureToggles::default()
    };
    let extra = vec![
        "/subsystem=ee:write-attribute(name=spec-descriptor-property-replacement,value=true)"
            .to_string(),
        "deploy app.war".to_string(),
        ":reload".to_string(),
    ];

    let batch = compose(&toggles, ServerConfig::Standalone, &extra);

    assert_eq!(
        batch.commands(),
        [
            "embed-server --server-config=standalone.xml",
            "/subsystem=logging/console-handler=CONSOLE:write-attribute(name=level,value=DEBUG)",
            "/subsystem=logging/root-logger=ROOT:write-attribute(name=level,value=DEBUG)",
            "/extension=org.wildfly.extension.opentelemetry:add()",
            "/subsystem=opentelemetry:add()",
            "/subsystem=opentelemetry:write-attribute(name=sampler-type,value=on)",
            "/subsystem=opentelemetry:write-attribute(name=batch-delay,value=10)",
            "/subsystem=ee:write-attribute(name=spec-descriptor-property-replacement,value=true)",
            "deploy app.war",
            ":reload",
        ]
    );
}

#[test]
fn micrometer_commands_follow_otel() {
    let toggles = FeatureToggles {
        otel: true,
        micrometer: true,
        ..FeatureToggles::default()
    };
    let batch = compose(&toggles, ServerConfig::Full, &[]);
    let commands = batch.commands();

    assert_eq!(commands[0], "embed-server --server-config=standalone-full.xml");
    assert_eq!(commands[1], "/extension=org.wildfly.extension.opentelemetry:add()");
    assert_eq!(commands[5], "/extension=org.wildfly.extension.micrometer:add");
    assert_eq!(
        commands[6],
        "/subsystem=micrometer:add(endpoint=\"http://localhost:4318/v1/metrics\",step=\"1\")"
    );
    assert_eq!(
        commands[7],
        "/subsystem=undertow:write-attribute(name=statistics-enabled,value=true)"
    );
}

#[test]
fn no_toggles_composes_a_trivial_batch() {
    let batch = compose(&FeatureToggles::default(), ServerConfig::Standalone, &[]);
    assert!(batch.is_trivial());
    assert_eq!(batch.commands(), ["embed-server --server-config=standalone.xml"]);
}

#[test]
fn batch_input_is_newline_delimited() {
    let toggles = FeatureToggles {
        debug_logging: true,
        ..FeatureToggles::default()
    };
    let batch = compose(&toggles, ServerConfig::Standalone, &[]);
    let input = String::from_utf8(batch.as_input()).expect("utf8");
    assert_eq!(input.lines().count(), 3);
    assert!(input.ends_with("value=DEBUG)\n"));
}

#[test]
fn command_files_load_in_file_then_line_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.cli");
    let second = dir.path().join("second.cli");
    std::fs::write(&first, "one\ntwo\n").expect("write first");
    std::fs::write(&second, "three\n").expect("write second");

    let lines = load_command_files(&[first, second]).expect("load");
    assert_eq!(lines, ["one", "two", "three"]);
}

#[test]
fn a_missing_command_file_is_a_distinct_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.cli");
    let err = load_command_files(&[missing.clone()]).expect_err("missing file");
    match err {
        RunError::CommandFile { path, .. } => assert_eq!(path, missing),
        other => panic!("expected CommandFile, got {other:?}"),
    }
}

#[test]
fn profile_precedence_is_microprofile_full_then_ha() {
    let toggles = FeatureToggles {
        microprofile: true,
        full: true,
        ha: true,
        ..FeatureToggles::default()
    };
    assert_eq!(ServerConfig::from_toggles(&toggles), ServerConfig::Microprofile);

    let toggles = FeatureToggles {
        full: true,
        ha: true,
        ..FeatureToggles::default()
    };
    assert_eq!(ServerConfig::from_toggles(&toggles), ServerConfig::Full);

    let toggles = FeatureToggles {
        ha: true,
        ..FeatureToggles::default()
    };
    assert_eq!(ServerConfig::from_toggles(&toggles), ServerConfig::FullHa);

    assert_eq!(
        ServerConfig::from_toggles(&FeatureToggles::default()),
        ServerConfig::Standalone
    );
}
