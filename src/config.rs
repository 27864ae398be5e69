use crate::error::SimulatorError;
use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 1500;
pub const DEFAULT_HISTORY_CAP: usize = 5;

const DELAY_VAR: &str = "PROMPT_SIM_DELAY_MS";
const HISTORY_CAP_VAR: &str = "PROMPT_SIM_HISTORY_CAP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Artificial "thinking" pause before a prompt is evaluated.
    pub delay: Duration,
    pub history_cap: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

impl SimulatorConfig {
    /// Reads overrides from the process environment (call `dotenv()` first).
    pub fn from_env() -> Result<Self, SimulatorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SimulatorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(DELAY_VAR) {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                SimulatorError::ConfigError(format!("{DELAY_VAR} must be milliseconds, got '{raw}'"))
            })?;
            cfg.delay = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(HISTORY_CAP_VAR) {
            let cap: usize = raw.trim().parse().map_err(|_| {
                SimulatorError::ConfigError(format!("{HISTORY_CAP_VAR} must be a number, got '{raw}'"))
            })?;
            if cap == 0 {
                return Err(SimulatorError::ConfigError(format!("{HISTORY_CAP_VAR} must be at least 1")));
            }
            cfg.history_cap = cap;
        }

        Ok(cfg)
    }

    pub fn without_delay(mut self) -> Self {
        self.delay = Duration::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SimulatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, SimulatorConfig::default());
        assert_eq!(cfg.delay, Duration::from_millis(1500));
        assert_eq!(cfg.history_cap, 5);
    }

    #[test]
    fn reads_overrides() {
        let cfg = SimulatorConfig::from_lookup(lookup_from(&[
            (DELAY_VAR, " 250 "),
            (HISTORY_CAP_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.delay, Duration::from_millis(250));
        assert_eq!(cfg.history_cap, 3);
    }

    #[test]
    fn rejects_garbage_delay() {
        let err = SimulatorConfig::from_lookup(lookup_from(&[(DELAY_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, SimulatorError::ConfigError(_)));
    }

    #[test]
    fn rejects_zero_history() {
        let err = SimulatorConfig::from_lookup(lookup_from(&[(HISTORY_CAP_VAR, "0")])).unwrap_err();
        assert!(matches!(err, SimulatorError::ConfigError(_)));
    }

    #[test]
    fn without_delay_zeroes_pause() {
        assert_eq!(SimulatorConfig::default().without_delay().delay, Duration::ZERO);
    }
}
