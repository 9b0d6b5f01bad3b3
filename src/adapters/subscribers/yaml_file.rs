//! YAML File Subscriber Roster
//!
//! Reads SMS subscribers from a YAML file with a top-level `subscribers`
//! list. The file is re-read on every call so edits take effect on the
//! next digest run.
//!
//! ```yaml
//! subscribers:
//!   - user_id: u-1
//!     name: Ada
//!     phone: "+1 555 010 4477"
//!     birth_date: 1990-11-22
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::notification::SmsSubscriber;
use crate::ports::{SubscriberError, SubscriberReader};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Roster {
    #[serde(default)]
    subscribers: Vec<SmsSubscriber>,
}

#[derive(Debug, Clone)]
pub struct YamlSubscriberReader {
    path: PathBuf,
}

impl YamlSubscriberReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `subscribers` to the roster file, replacing its contents.
    pub async fn save(&self, subscribers: &[SmsSubscriber]) -> Result<(), SubscriberError> {
        let roster = Roster {
            subscribers: subscribers.to_vec(),
        };
        let yaml = serde_yaml::to_string(&roster)
            .map_err(|e| SubscriberError::ParseFailed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SubscriberError::IoError(e.to_string()))?;
        }
        fs::write(&self.path, yaml)
            .await
            .map_err(|e| SubscriberError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SubscriberReader for YamlSubscriberReader {
    async fn list_sms_subscribers(&self) -> Result<Vec<SmsSubscriber>, SubscriberError> {
        if !self.path.exists() {
            return Err(SubscriberError::NotFound(self.path.display().to_string()));
        }

        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SubscriberError::IoError(e.to_string()))?;

        let roster: Roster = if yaml.trim().is_empty() {
            Roster::default()
        } else {
            serde_yaml::from_str(&yaml).map_err(|e| SubscriberError::ParseFailed(e.to_string()))?
        };

        debug!(path = %self.path.display(), count = roster.subscribers.len(), "Loaded SMS roster");
        Ok(roster.subscribers)
    }
}
