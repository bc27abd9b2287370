use std::path::PathBuf;

use charjump_common::ConfigError;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::schema::CharJumpConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;

/// Keeps a [`watch`] channel of [`CharJumpConfig`] in step with a file.
pub struct ReloadManager {
    path: PathBuf,
}

impl ReloadManager {
    /// Load `path` and keep reloading it in the background.
    ///
    /// A missing or unreadable file starts out as the defaults. The file is
    /// still watched, so creating it later takes effect.
    pub async fn start(path: PathBuf) -> (CharJumpConfig, watch::Receiver<CharJumpConfig>) {
        let initial = toml_loader::load_from_path(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), "{e}; starting from defaults");
            CharJumpConfig::default()
        });
        let (tx, rx) = watch::channel(initial.clone());

        let manager = ReloadManager { path };
        tokio::spawn(async move { manager.follow(tx).await });

        (initial, rx)
    }

    async fn follow(self, tx: watch::Sender<CharJumpConfig>) {
        let watcher = match ConfigWatcher::new(self.path.clone()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!("config reload disabled: {e}");
                return;
            }
        };
        let (changed_tx, mut changed) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(changed_tx).await {
                error!("{e}");
            }
        });

        loop {
            tokio::select! {
                _ = tx.closed() => {
                    debug!("no config subscribers left");
                    return;
                }
                change = changed.recv() => match change {
                    Ok(()) | Err(RecvError::Lagged(_)) => self.apply(&tx),
                    Err(RecvError::Closed) => return,
                },
            }
        }
    }

    fn apply(&self, tx: &watch::Sender<CharJumpConfig>) {
        match self.reload() {
            Ok(config) => {
                info!(path = %self.path.display(), "config reloaded");
                tx.send_replace(config);
            }
            Err(e) => warn!("ignoring config change: {e}"),
        }
    }

    /// Stricter than the first load: a file that fails validation is
    /// rejected, so saving half an edit cannot replace a working config.
    fn reload(&self) -> Result<CharJumpConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_rejects_values_that_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\ntimeout_ms = 0\n").unwrap();

        let manager = ReloadManager { path };
        assert!(matches!(
            manager.reload(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejected_reload_keeps_the_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml {{").unwrap();

        let (tx, rx) = watch::channel(CharJumpConfig::default());
        ReloadManager { path }.apply(&tx);
        assert_eq!(rx.borrow().search.timeout_ms, 800);
    }
}
