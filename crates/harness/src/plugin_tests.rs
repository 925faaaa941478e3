// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use catchlog::{CaptureError, ROOT};
use std::panic::catch_unwind;

fn plugin_with(config: CatchLogConfig) -> (Arc<Hierarchy>, CatchLogPlugin) {
    let hierarchy = Arc::new(Hierarchy::new());
    let plugin = CatchLogPlugin::new(hierarchy.clone(), config).unwrap();
    (hierarchy, plugin)
}

fn short_format() -> CatchLogConfig {
    CatchLogConfig {
        format: "{levelname} {name}: {message}".to_string(),
        ..CatchLogConfig::default()
    }
}

#[test]
fn test_phase_section_holds_trimmed_text() {
    let (hierarchy, plugin) = plugin_with(short_format());
    let mut item = TestItem::new("t::a");

    plugin.run_phase(&mut item, Phase::Call, |caplog| {
        hierarchy.logger("app").info("hello");
        assert_eq!(caplog.records().len(), 1);
    });

    assert_eq!(item.section(Phase::Call, "log"), Some("INFO app: hello"));
    assert_eq!(item.sections()[0].title(), "Captured log call");
}

#[test]
fn test_empty_phase_adds_no_section() {
    let (_hierarchy, plugin) = plugin_with(short_format());
    let mut item = TestItem::new("t::a");

    plugin.run_phase(&mut item, Phase::Setup, |_| {});

    assert!(item.sections().is_empty());
}

#[test]
fn test_print_logs_off_adds_no_section() {
    let config = CatchLogConfig {
        print_logs: false,
        ..short_format()
    };
    let (hierarchy, plugin) = plugin_with(config);
    let mut item = TestItem::new("t::a");

    let captured = plugin.run_phase(&mut item, Phase::Call, |caplog| {
        hierarchy.logger("app").error("boom");
        caplog.text()
    });

    assert_eq!(captured, "ERROR app: boom\n");
    assert!(item.sections().is_empty());
}

#[test]
fn test_disabled_installs_nothing() {
    let config = CatchLogConfig {
        enabled: false,
        ..short_format()
    };
    let (hierarchy, plugin) = plugin_with(config);
    let mut item = TestItem::new("t::a");

    let seen = plugin.run_phase(&mut item, Phase::Call, |caplog| {
        assert_eq!(hierarchy.handler_count(ROOT), 0);
        hierarchy.logger("app").error("boom");
        caplog.records().len()
    });

    assert_eq!(seen, 0);
    assert!(item.sections().is_empty());
    assert_eq!(hierarchy.level(ROOT), Level::WARNING);
}

#[test]
fn test_handler_slot_set_only_during_phase() {
    let (hierarchy, plugin) = plugin_with(short_format());
    let mut item = TestItem::new("t::a");

    plugin.run_phase(&mut item, Phase::Call, |_| {
        assert_eq!(hierarchy.handler_count(ROOT), 1);
        assert_eq!(hierarchy.level(ROOT), Level::NOTSET);
    });

    assert!(item.handler().is_none());
    assert_eq!(hierarchy.handler_count(ROOT), 0);
    assert_eq!(hierarchy.level(ROOT), Level::WARNING);
}

#[test]
fn test_each_phase_gets_fresh_handler() {
    let (hierarchy, plugin) = plugin_with(short_format());
    let mut item = TestItem::new("t::a");

    plugin.run_item(&mut item, |phase, caplog| {
        assert!(caplog.records().is_empty());
        hierarchy.logger("app").warning(format!("in {phase}"));
    });

    assert_eq!(item.section(Phase::Setup, "log"), Some("WARNING app: in setup"));
    assert_eq!(item.section(Phase::Call, "log"), Some("WARNING app: in call"));
    assert_eq!(
        item.section(Phase::Teardown, "log"),
        Some("WARNING app: in teardown")
    );
}

#[test]
fn test_panic_detaches_and_keeps_section() {
    let (hierarchy, plugin) = plugin_with(short_format());
    let mut item = TestItem::new("t::a");

    let result = catch_unwind(AssertUnwindSafe(|| {
        plugin.run_phase(&mut item, Phase::Call, |caplog| {
            caplog.set_level(Level::DEBUG, Some("app"));
            hierarchy.logger("app").error("before failure");
            panic!("test failed");
        })
    }));

    assert!(result.is_err());
    assert_eq!(hierarchy.handler_count(ROOT), 0);
    assert_eq!(hierarchy.level(ROOT), Level::WARNING);
    assert!(item.handler().is_none());
    assert_eq!(
        item.section(Phase::Call, "log"),
        Some("ERROR app: before failure")
    );
}

#[test]
fn test_level_and_logger_from_config() {
    let config = CatchLogConfig {
        level: Some("INFO".to_string()),
        logger: Some("app".to_string()),
        ..short_format()
    };
    let (hierarchy, plugin) = plugin_with(config);
    hierarchy.set_level("app", Level::DEBUG);
    assert_eq!(plugin.level(), Level::INFO);
    let mut item = TestItem::new("t::a");

    plugin.run_phase(&mut item, Phase::Call, |caplog| {
        assert_eq!(hierarchy.handler_count("app"), 1);
        assert_eq!(hierarchy.handler_count(ROOT), 0);
        hierarchy.logger("app.db").debug("too low");
        hierarchy.logger("app.db").info("kept");
        hierarchy.logger("other").error("elsewhere");
        assert_eq!(caplog.records().len(), 1);
    });

    assert_eq!(item.section(Phase::Call, "log"), Some("INFO app.db: kept"));
    assert_eq!(hierarchy.level("app"), Level::DEBUG);
}

#[test]
fn test_legacy_calls_record_warnings_on_item() {
    let (hierarchy, plugin) = plugin_with(short_format());
    let mut item = TestItem::new("t::legacy");

    plugin.run_phase(&mut item, Phase::Call, |caplog| {
        hierarchy.logger("app").warning("w");
        #[allow(deprecated)]
        let text = caplog.text_legacy();
        assert_eq!(text, "WARNING app: w\n");
    });

    let warnings = item.warnings().warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, "L1");
    assert_eq!(warnings[0].nodeid, "t::legacy");
    assert_eq!(
        warnings[0].message,
        "'caplog.text()' syntax is deprecated, use 'caplog.text' property instead"
    );
}

#[test]
fn test_bad_level_rejected() {
    let config = CatchLogConfig {
        level: Some("LOUD".to_string()),
        ..CatchLogConfig::default()
    };
    let err = CatchLogPlugin::new(Arc::new(Hierarchy::new()), config)
        .err()
        .unwrap();
    assert!(matches!(
        err,
        HarnessError::Capture(CaptureError::UnknownLevel(name)) if name == "LOUD"
    ));
}

#[test]
fn test_bad_format_rejected() {
    let config = CatchLogConfig {
        format: "{nonsense}".to_string(),
        ..CatchLogConfig::default()
    };
    let err = CatchLogPlugin::new(Arc::new(Hierarchy::new()), config)
        .err()
        .unwrap();
    assert!(matches!(err, HarnessError::Capture(CaptureError::Format(_))));
}
