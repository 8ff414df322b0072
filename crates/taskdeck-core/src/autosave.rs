use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::error;

pub fn storage_key(form_id: &str) -> String {
    format!("taskdeck.autosave.{form_id}")
}

// Field-name to value snapshot of an in-progress form, keyed by form
// identity in local storage. Empty values are dropped so a cleared form
// leaves no snapshot behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.fields.remove(name);
        } else {
            self.fields.insert(name.to_string(), value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn to_json(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(err) => {
                error!(error = %err, "failed encoding form snapshot");
                None
            }
        }
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                error!(error = %err, "failed parsing form snapshot from storage");
                None
            }
        }
    }
}
