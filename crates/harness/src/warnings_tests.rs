// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_recorder_starts_empty() {
    let recorder = WarningRecorder::new("test_a.rs::test_one");
    assert!(recorder.is_empty());
    assert_eq!(recorder.len(), 0);
}

#[test]
fn test_warn_attributes_nodeid() {
    let recorder = WarningRecorder::new("test_a.rs::test_one");
    recorder.warn("L1", "old is deprecated, use new instead");

    assert_eq!(
        recorder.warnings(),
        vec![Warning {
            code: "L1".to_string(),
            nodeid: "test_a.rs::test_one".to_string(),
            message: "old is deprecated, use new instead".to_string(),
        }]
    );
}

#[test]
fn test_clones_share_warnings() {
    let recorder = WarningRecorder::new("n");
    let sink: Arc<dyn DeprecationSink> = Arc::new(recorder.clone());
    sink.warn("L1", "first");
    sink.warn("X9", "second");

    assert_eq!(recorder.len(), 2);
    let l1 = recorder.with_code("L1");
    assert_eq!(l1.len(), 1);
    assert_eq!(l1[0].message, "first");
}

#[test]
fn test_warning_serializes() {
    let warning = Warning {
        code: "L1".to_string(),
        nodeid: "n".to_string(),
        message: "m".to_string(),
    };
    let json = serde_json::to_value(&warning).unwrap();
    assert_eq!(json["code"], "L1");
    assert_eq!(json["nodeid"], "n");
    assert_eq!(json["message"], "m");
}
