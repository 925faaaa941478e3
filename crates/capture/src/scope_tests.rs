// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::error::CaptureError;
use crate::handler::CaptureHandler;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Registry double that remembers every write.
#[derive(Default)]
struct FakeRegistry {
    levels: Mutex<HashMap<String, Level>>,
    writes: Mutex<Vec<(String, Level)>>,
}

impl LoggerRegistry for FakeRegistry {
    fn logger_level(&self, name: &str) -> Level {
        self.levels
            .lock()
            .get(name)
            .copied()
            .unwrap_or(Level::NOTSET)
    }

    fn set_logger_level(&self, name: &str, level: Level) {
        self.levels.lock().insert(name.to_string(), level);
        self.writes.lock().push((name.to_string(), level));
    }

    fn lookup_level(&self, name: &str) -> Result<Level> {
        Err(CaptureError::UnknownLevel(name.to_string()))
    }
}

fn fake() -> Arc<FakeRegistry> {
    Arc::new(FakeRegistry::default())
}

fn named(registry: &Arc<FakeRegistry>, name: &str) -> Box<dyn LevelTarget> {
    let registry: Arc<dyn LoggerRegistry> = registry.clone();
    Box::new(NamedLogger::new(registry, name))
}

#[test]
fn test_set_level_is_permanent() {
    let handler = CaptureHandler::new();
    set_level(&handler, Level::INFO);
    assert_eq!(handler.level(), Level::INFO);

    set_level(&handler, Level::ERROR);
    assert_eq!(handler.level(), Level::ERROR);
}

#[test]
fn test_scoped_level_restores_handler() {
    let handler = CaptureHandler::new();
    handler.set_level(Level::WARNING);

    {
        let guard = scoped_level(Box::new(handler.clone()), Level::DEBUG);
        assert_eq!(guard.previous(), Level::WARNING);
        assert_eq!(handler.level(), Level::DEBUG);
    }

    assert_eq!(handler.level(), Level::WARNING);
}

#[test]
fn test_scoped_level_restores_after_many_sets_inside() {
    let registry = fake();
    registry.set_logger_level("app", Level::INFO);

    {
        let _guard = scoped_level(named(&registry, "app"), Level::DEBUG);
        registry.set_logger_level("app", Level::ERROR);
        registry.set_logger_level("app", Level::CRITICAL);
    }

    assert_eq!(registry.logger_level("app"), Level::INFO);
}

#[test]
fn test_scoped_level_restores_on_panic() {
    let registry = fake();
    registry.set_logger_level("app", Level::WARNING);

    let result = catch_unwind(AssertUnwindSafe(|| {
        with_level(named(&registry, "app"), Level::DEBUG, || {
            panic!("body failed");
        })
    }));

    assert!(result.is_err());
    assert_eq!(registry.logger_level("app"), Level::WARNING);
}

#[test]
fn test_scoped_level_restores_on_error_propagation() {
    let registry = fake();

    fn step() -> std::result::Result<(), String> {
        Err("early".to_string())
    }

    fn failing(registry: &Arc<FakeRegistry>) -> std::result::Result<(), String> {
        let _guard = scoped_level(named(registry, "app"), Level::ERROR);
        step()?;
        Ok(())
    }

    assert!(failing(&registry).is_err());
    assert_eq!(registry.logger_level("app"), Level::NOTSET);
}

#[test]
fn test_nested_same_target_restores_lifo() {
    let registry = fake();
    registry.set_logger_level("app", Level::WARNING);
    registry.writes.lock().clear();

    {
        let _outer = scoped_level(named(&registry, "app"), Level::INFO);
        {
            let _inner = scoped_level(named(&registry, "app"), Level::DEBUG);
            assert_eq!(registry.logger_level("app"), Level::DEBUG);
        }
        assert_eq!(registry.logger_level("app"), Level::INFO);
    }

    let writes: Vec<Level> = registry.writes.lock().iter().map(|(_, l)| *l).collect();
    assert_eq!(
        writes,
        vec![Level::INFO, Level::DEBUG, Level::INFO, Level::WARNING]
    );
}

#[test]
fn test_different_targets_compose() {
    let registry = fake();
    let handler = CaptureHandler::new();

    {
        let _handler_scope = scoped_level(Box::new(handler.clone()), Level::INFO);
        let _logger_scope = scoped_level(named(&registry, "app.db"), Level::CRITICAL);
        assert_eq!(handler.level(), Level::INFO);
        assert_eq!(registry.logger_level("app.db"), Level::CRITICAL);
    }

    assert_eq!(handler.level(), Level::NOTSET);
    assert_eq!(registry.logger_level("app.db"), Level::NOTSET);
}

#[test]
fn test_with_level_returns_body_value() {
    let handler = CaptureHandler::new();
    let seen = with_level(Box::new(handler.clone()), Level::ERROR, || handler.level());
    assert_eq!(seen, Level::ERROR);
    assert_eq!(handler.level(), Level::NOTSET);
}

#[test]
fn test_describe() {
    let registry = fake();
    assert_eq!(named(&registry, "app").describe(), "logger \"app\"");
    assert_eq!(CaptureHandler::new().describe(), "capture handler");
}
