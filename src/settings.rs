use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

/// Alert preferences behind the profile screen's notification entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub event_alerts: bool,
    pub booking_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            event_alerts: true,
            booking_alerts: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct UserSettings {
    notifications: NotificationSettings,
}

/// JSON-file-backed preferences store. Holds UI preferences only; domain
/// state never touches disk.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn notifications(&self) -> NotificationSettings {
        self.data.read().unwrap().notifications.clone()
    }

    pub fn update_notifications(&self, settings: NotificationSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.notifications = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
