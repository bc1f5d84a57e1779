//! Runtime configuration, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// Sprite files loaded from [`Config::frames_dir`], in order.
pub const FRAME_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Order the pilot walks through the loaded frames. Repeats hold a frame on
/// screen for an extra tick.
pub const PILOT_FRAME_ORDER: [usize; 4] = [0, 0, 1, 1];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub frames_dir: PathBuf,
    pub tick: Duration,
    /// Fixed star count; `None` picks one at random.
    pub star_count: Option<u32>,
    pub seed: u32,
    /// End the run once the shot has left the grid.
    pub exit_on_shot: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from("frames"),
            tick: Duration::from_millis(TICK_MS as u64),
            star_count: None,
            seed: 1,
            exit_on_shot: true,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from `STARFIELD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let frames_dir = get("STARFIELD_FRAMES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.frames_dir);

        let tick = get("STARFIELD_TICK_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        let star_count = get("STARFIELD_STARS").and_then(|s| s.parse().ok());

        let seed = get("STARFIELD_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let exit_on_shot = get("STARFIELD_EXIT_ON_SHOT")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.exit_on_shot);

        let log_path = get("STARFIELD_LOG_PATH").map(PathBuf::from);

        Self {
            frames_dir,
            tick,
            star_count,
            seed,
            exit_on_shot,
            log_path,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("STARFIELD_FRAMES_DIR", "/tmp/art"),
            ("STARFIELD_TICK_MS", "20"),
            ("STARFIELD_STARS", "70"),
            ("STARFIELD_SEED", "1234"),
            ("STARFIELD_EXIT_ON_SHOT", "false"),
            ("STARFIELD_LOG_PATH", "/tmp/starfield.log"),
        ]);
        assert_eq!(config.frames_dir, PathBuf::from("/tmp/art"));
        assert_eq!(config.tick, Duration::from_millis(20));
        assert_eq!(config.star_count, Some(70));
        assert_eq!(config.seed, 1234);
        assert!(!config.exit_on_shot);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/starfield.log")));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("STARFIELD_TICK_MS", "fast"),
            ("STARFIELD_STARS", "-3"),
            ("STARFIELD_EXIT_ON_SHOT", "maybe"),
            ("STARFIELD_LOG_PATH", "   "),
        ]);
        let defaults = Config::default();
        assert_eq!(config.tick, defaults.tick);
        assert_eq!(config.star_count, None);
        assert!(config.exit_on_shot);
        assert_eq!(config.log_path, None);
        assert_eq!(config.frames_dir, PathBuf::from("frames"));
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn frame_order_only_names_loaded_frames() {
        assert!(PILOT_FRAME_ORDER.iter().all(|&i| i < FRAME_FILES.len()));
    }
}
