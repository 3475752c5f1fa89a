use log::Level;

/// How often the card stack moves its last card to the top.
pub const ROTATION_PERIOD_MS: u32 = 5_000;
pub const DEFAULT_CARD_OFFSET: f64 = 10.0;
pub const DEFAULT_SCALE_FACTOR: f64 = 0.06;

pub const HERO_AUTOPLAY_MS: u32 = 5_000;
pub const TYPEWRITER_STEP_MS: u32 = 70;
pub const MARQUEE_SPEED_MS: u32 = 40_000;

pub const TOAST_DURATION_MS: u32 = 4_000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Log level for the browser console. `SOLESAVVY_LOG` is read at build time.
pub fn log_level() -> Level {
    option_env!("SOLESAVVY_LOG")
        .and_then(parse_level)
        .unwrap_or(if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        })
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::Trace),
        "debug" => Some(Level::Debug),
        "info" => Some(Level::Info),
        "warn" => Some(Level::Warn),
        "error" => Some(Level::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_level(" debug "), Some(Level::Debug));
        assert_eq!(parse_level("verbose"), None);
    }
}
