use crate::error::{AppResult, ParseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the roster manifest: the source site's page name and
/// numeric id for a franchise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub site_name: String,
    pub site_id: u32,
}

/// The roster manifest enumerating which per-team files exist.
///
/// The on-disk format is a JSON object of `code -> [site name, id]`.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: BTreeMap<String, TeamEntry>,
}

impl TeamDirectory {
    /// Parse the manifest from its JSON text
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let parsed: BTreeMap<String, (String, u32)> = serde_json::from_str(raw)
            .map_err(|e| ParseError::InvalidManifest(e.to_string()))?;

        let teams = parsed
            .into_iter()
            .map(|(code, (site_name, site_id))| {
                (
                    code.to_uppercase(),
                    TeamEntry { site_name, site_id },
                )
            })
            .collect();

        Ok(Self { teams })
    }

    /// All franchise codes in the manifest, in stable order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(|s| s.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&TeamEntry> {
        self.teams.get(&code.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
