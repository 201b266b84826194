/// Persisted popup preferences (chrome.storage.sync)
use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FULLSCREEN_KEY: &str = "fullscreen";
pub const OPEN_LINKS_WITH_KEY: &str = "openLinksWith";

/// Where a streamer click should lead. Stored under `openLinksWith` as the id
/// of the selected radio control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    #[default]
    Twitch,
    Popout,
    Srl,
}

impl LinkTarget {
    pub const ALL: [LinkTarget; 3] = [LinkTarget::Twitch, LinkTarget::Popout, LinkTarget::Srl];

    pub fn id(&self) -> &'static str {
        match self {
            LinkTarget::Twitch => "twitch",
            LinkTarget::Popout => "popout",
            LinkTarget::Srl => "srl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkTarget::Twitch => "Channel page",
            LinkTarget::Popout => "Popout player",
            LinkTarget::Srl => "SpeedRunsLive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub fullscreen: bool,
    pub open_links_with: LinkTarget,
}

/// Key-value storage the preferences live in
#[allow(async_fn_in_trait)]
pub trait PreferenceBackend {
    /// `Ok(None)` when the key has never been written
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Typed access to preferences. Storage failures are logged and read back as
/// defaults; they never reach the UI.
pub struct SettingsStore<B> {
    backend: B,
}

impl<B: PreferenceBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        SettingsStore { backend }
    }

    pub async fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.try_get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("{}; using default", e);
                T::default()
            }
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let result = match serde_json::to_value(value) {
            Ok(json) => self.backend.set(key, json).await,
            Err(e) => Err(StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            }),
        };

        match result {
            Ok(()) => log::debug!("Stored preference {}", key),
            Err(e) => log::warn!("{}", e),
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(value) = self.backend.get(key).await? else {
            return Ok(None);
        };
        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Decode {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Read both preferences, as done when the popup opens
    pub async fn load(&self) -> Preferences {
        Preferences {
            fullscreen: self.get(FULLSCREEN_KEY).await,
            open_links_with: self.get(OPEN_LINKS_WITH_KEY).await,
        }
    }

    pub async fn set_fullscreen(&self, enabled: bool) {
        self.set(FULLSCREEN_KEY, &enabled).await;
    }

    pub async fn set_open_links_with(&self, target: LinkTarget) {
        self.set(OPEN_LINKS_WITH_KEY, &target).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryBackend {
        values: RefCell<HashMap<String, Value>>,
    }

    impl PreferenceBackend for MemoryBackend {
        async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
            self.values.borrow_mut().insert(key.to_string(), value);
            Ok(())
        }
    }

    struct BrokenBackend;

    impl PreferenceBackend for BrokenBackend {
        async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }

        async fn set(&self, key: &str, _value: Value) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_fullscreen_round_trip() {
        let store = SettingsStore::new(MemoryBackend::default());

        block_on(store.set(FULLSCREEN_KEY, &true));
        let fullscreen: bool = block_on(store.get(FULLSCREEN_KEY));

        assert!(fullscreen);
    }

    #[test]
    fn test_missing_keys_default() {
        let store = SettingsStore::new(MemoryBackend::default());

        let prefs = block_on(store.load());

        assert_eq!(prefs, Preferences::default());
        assert!(!prefs.fullscreen);
        assert_eq!(prefs.open_links_with, LinkTarget::Twitch);
    }

    #[test]
    fn test_load_after_updates() {
        let store = SettingsStore::new(MemoryBackend::default());

        block_on(store.set_fullscreen(true));
        block_on(store.set_open_links_with(LinkTarget::Srl));

        let prefs = block_on(store.load());
        assert!(prefs.fullscreen);
        assert_eq!(prefs.open_links_with, LinkTarget::Srl);
        assert_eq!(
            store.backend.values.borrow().get(OPEN_LINKS_WITH_KEY),
            Some(&Value::String("srl".to_string()))
        );
    }

    #[test]
    fn test_unknown_stored_value_defaults() {
        let backend = MemoryBackend::default();
        backend
            .values
            .borrow_mut()
            .insert(OPEN_LINKS_WITH_KEY.to_string(), Value::String("multitwitch".to_string()));
        backend
            .values
            .borrow_mut()
            .insert(FULLSCREEN_KEY.to_string(), Value::Null);
        let store = SettingsStore::new(backend);

        let prefs = block_on(store.load());

        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_storage_failure_is_silent() {
        let store = SettingsStore::new(BrokenBackend);

        block_on(store.set_fullscreen(true));
        let prefs = block_on(store.load());

        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_link_target_ids_match_serde() {
        for target in LinkTarget::ALL {
            assert_eq!(serde_json::to_value(target).unwrap(), Value::String(target.id().to_string()));
        }
    }
}
