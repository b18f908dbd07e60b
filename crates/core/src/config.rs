//! Runtime configuration loaded from `DONUT_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DONUT_DELTA_A` | 0.08 | rotation about axis A per frame (radians) |
//! | `DONUT_DELTA_B` | 0.04 | rotation about axis B per frame (radians) |
//! | `DONUT_DEBUG` | off | `1`/`true` shows the speed readout from the start |
//! | `DONUT_FRAME_MS` | 16 | frame interval in milliseconds |
//! | `DONUT_LOG_PATH` | unset | append tracing output to this file |
//!
//! Values that fail to parse fall back to the default. Rotation deltas are
//! clamped to the same magnitude range the speed keys use.

use std::env;

use crate::types::{RenderConfig, RotationSpeed, FRAME_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct DonutConfig {
    pub render: RenderConfig,
    pub speed: RotationSpeed,
    pub debug: bool,
    pub frame_ms: u32,
    pub log_path: Option<String>,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            speed: RotationSpeed::default(),
            debug: false,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl DonutConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let delta_a = parse_var(&var, "DONUT_DELTA_A")
            .filter(|v: &f64| v.is_finite())
            .unwrap_or(defaults.speed.delta_a);
        let delta_b = parse_var(&var, "DONUT_DELTA_B")
            .filter(|v: &f64| v.is_finite())
            .unwrap_or(defaults.speed.delta_b);

        let debug = var("DONUT_DEBUG")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(defaults.debug);

        let frame_ms = parse_var(&var, "DONUT_FRAME_MS")
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let log_path = log_path_from_vars(&var);

        Self {
            render: defaults.render,
            speed: RotationSpeed::new(delta_a, delta_b).clamped(),
            debug,
            frame_ms,
            log_path,
        }
    }
}

/// `DONUT_LOG_PATH` alone, so logging can start before the rest of the
/// config is parsed (and its warnings are captured).
pub fn log_path_from_env() -> Option<String> {
    log_path_from_vars(&|key: &str| env::var(key).ok())
}

fn log_path_from_vars(var: &impl Fn(&str) -> Option<String>) -> Option<String> {
    var("DONUT_LOG_PATH")
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable config value");
            None
        }
    }
}
