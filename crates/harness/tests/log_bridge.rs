// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Records from the `log` facade reaching a capture window through the
//! global hierarchy. Each test targets its own logger so they can run in
//! parallel against the shared hierarchy.

use catchlog::bridge::{self, TRACE};
use catchlog::{Hierarchy, Level, RecordFilter};
use catchlog_harness::{CatchLogConfig, CatchLogPlugin, Phase, TestItem};

fn plugin_for(logger: &str) -> CatchLogPlugin {
    bridge::install().unwrap();
    let config = CatchLogConfig {
        format: "{levelname} {name}: {message}".to_string(),
        logger: Some(logger.to_string()),
        ..CatchLogConfig::default()
    };
    CatchLogPlugin::new(Hierarchy::global(), config).unwrap()
}

#[test]
fn test_install_is_idempotent() {
    bridge::install().unwrap();
    bridge::install().unwrap();
    assert_eq!(Hierarchy::global().lookup_level("TRACE").unwrap(), TRACE);
}

#[test]
fn test_log_macros_are_captured() {
    let plugin = plugin_for("bridge_macros");
    Hierarchy::global().set_level("bridge_macros", Level::DEBUG);
    let mut item = TestItem::new("log_bridge.rs::test_log_macros_are_captured");

    plugin.run_phase(&mut item, Phase::Call, |caplog| {
        log::trace!(target: "bridge_macros::io", "below threshold");
        log::debug!(target: "bridge_macros::io", "read {} bytes", 512);
        log::error!(target: "bridge_macros", "failed");

        let io = caplog.filter_tuples(&RecordFilter::new().name("bridge_macros.io"));
        assert_eq!(
            io,
            vec![(
                "bridge_macros.io".to_string(),
                Level::DEBUG,
                "read 512 bytes".to_string()
            )]
        );
        let record = &caplog.records()[0];
        assert!(record.location().unwrap().file.ends_with("log_bridge.rs"));
    });

    assert_eq!(
        item.section(Phase::Call, "log"),
        Some("DEBUG bridge_macros.io: read 512 bytes\nERROR bridge_macros: failed")
    );
}

#[test]
fn test_other_targets_not_captured() {
    let plugin = plugin_for("bridge_isolated");
    let mut item = TestItem::new("log_bridge.rs::test_other_targets_not_captured");

    plugin.run_phase(&mut item, Phase::Call, |caplog| {
        log::error!(target: "bridge_elsewhere", "not ours");
        log::error!(target: "bridge_isolated::child", "ours");
        assert_eq!(caplog.records().len(), 1);
        assert_eq!(caplog.records()[0].name(), "bridge_isolated.child");
    });
}
