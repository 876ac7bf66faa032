use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Run settings: defaults, then `topik.toml` if present, then `TOPIK_*` env vars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vocab_path: PathBuf,
    pub scrape_output: PathBuf,
    pub delay_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vocab_path: PathBuf::from("src/assets/topik-vocab.json"),
            scrape_output: PathBuf::from("src/assets/topik2-3900-vocab.json"),
            delay_ms: 500,
            timeout_secs: 30,
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_with_env(Environment::with_prefix("TOPIK"))
    }

    fn load_with_env(env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(File::with_name("topik").required(false))
            .add_source(env)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.delay(), Duration::from_millis(500));
        assert_eq!(s.timeout(), Duration::from_secs(30));
        assert!(s.user_agent.starts_with("Mozilla/5.0"));
        assert!(s.vocab_path.ends_with("topik-vocab.json"));
    }

    #[test]
    fn partial_source_keeps_defaults() {
        let s: Settings = Config::builder()
            .set_override("delay_ms", 0_i64)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.delay_ms, 0);
        assert_eq!(s.timeout_secs, 30);
    }

    #[test]
    fn env_vars_override_defaults() {
        let vars: HashMap<String, String> = [
            ("TOPIK_DELAY_MS", "250"),
            ("TOPIK_TIMEOUT_SECS", "5"),
            ("TOPIK_SCRAPE_OUTPUT", "out/scraped.json"),
            ("OTHER_DELAY_MS", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let s = Settings::load_with_env(Environment::with_prefix("TOPIK").source(Some(vars))).unwrap();
        assert_eq!(s.delay(), Duration::from_millis(250));
        assert_eq!(s.timeout(), Duration::from_secs(5));
        assert_eq!(s.scrape_output, PathBuf::from("out/scraped.json"));
        assert_eq!(s.vocab_path, Settings::default().vocab_path);
    }
}
