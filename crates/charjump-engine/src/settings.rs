//! Per-navigation settings, resolved from the config once per trigger.

use std::time::Duration;

use charjump_config::CharJumpConfig;
use tracing::warn;

use crate::host::JumpMode;
use crate::labels::LabelAlphabet;

const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct NavigationSettings {
    pub alphabet: LabelAlphabet,
    /// Debounce window of the search stage.
    pub search_timeout: Duration,
    /// Idle timeout of the label stage; `None` waits for the prompt to end.
    pub label_timeout: Option<Duration>,
    pub jump_mode: JumpMode,
}

impl NavigationSettings {
    pub fn from_config(config: &CharJumpConfig) -> Self {
        let search_timeout = match config.search.timeout_ms {
            0 => {
                warn!("search.timeout_ms is 0, using {DEFAULT_SEARCH_TIMEOUT:?}");
                DEFAULT_SEARCH_TIMEOUT
            }
            ms => Duration::from_millis(u64::from(ms)),
        };
        let label_timeout = match config.labels.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(u64::from(ms))),
        };
        let jump_mode = if config.jump.extend_selection {
            JumpMode::Extend
        } else {
            JumpMode::Move
        };

        Self {
            alphabet: LabelAlphabet::from_charset(&config.labels.charset),
            search_timeout,
            label_timeout,
            jump_mode,
        }
    }
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self::from_config(&CharJumpConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let settings = NavigationSettings::default();
        assert_eq!(settings.alphabet.len(), 26);
        assert_eq!(settings.search_timeout, Duration::from_millis(800));
        assert_eq!(settings.label_timeout, None);
        assert_eq!(settings.jump_mode, JumpMode::Move);
    }

    #[test]
    fn config_values_are_applied() {
        let mut config = CharJumpConfig::default();
        config.labels.charset = " hjkl ".into();
        config.labels.timeout_ms = 1500;
        config.search.timeout_ms = 250;
        config.jump.extend_selection = true;

        let settings = NavigationSettings::from_config(&config);
        assert_eq!(settings.alphabet.symbols(), &['h', 'j', 'k', 'l']);
        assert_eq!(settings.search_timeout, Duration::from_millis(250));
        assert_eq!(settings.label_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(settings.jump_mode, JumpMode::Extend);
    }

    #[test]
    fn zero_search_timeout_uses_default() {
        let mut config = CharJumpConfig::default();
        config.search.timeout_ms = 0;
        let settings = NavigationSettings::from_config(&config);
        assert_eq!(settings.search_timeout, DEFAULT_SEARCH_TIMEOUT);
    }
}
