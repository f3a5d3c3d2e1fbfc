use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("ARCADE_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

/// Pixels per density-independent unit used to scale gameplay tuning.
pub fn display_density() -> f32 {
    parse_density(env::var("DISPLAY_DENSITY").ok().as_deref())
}

fn parse_density(raw: Option<&str>) -> f32 {
    let Some(raw) = raw else {
        return DEFAULT_DISPLAY_DENSITY;
    };
    match raw.trim().parse::<f32>() {
        Ok(density) if density.is_finite() && density > 0.0 => density,
        _ => {
            tracing::warn!(value = raw, "invalid DISPLAY_DENSITY; using default");
            DEFAULT_DISPLAY_DENSITY
        }
    }
}

pub const DEFAULT_DISPLAY_DENSITY: f32 = 1.0;
pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

// ~60 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
