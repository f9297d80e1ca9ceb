//! Saved charts, kept as a list in `.bazi/profiles.yaml`.

use crate::config::ChartConfig;
use crate::error::{BaziError, Result};
use crate::paths;
use crate::pillar::{MovablePillars, NatalChart};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub chart: ChartConfig,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: impl Into<String>, chart: ChartConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            chart,
            updated_at: Utc::now(),
        }
    }

    pub fn hydrate(&self) -> Result<(NatalChart, MovablePillars)> {
        self.chart.hydrate()
    }
}

// ---------------------------------------------------------------------------
// ProfileStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    /// Load the store; a missing file is an empty store.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::profiles_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let store: ProfileStore = serde_yaml::from_str(&data)?;
        Ok(store)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::profiles_path(root), self)
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Profile> {
        let name = name.trim();
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn get(&self, id: &str) -> Result<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.id.to_string() == id)
            .ok_or_else(|| BaziError::ProfileNotFound(id.to_string()))
    }

    /// Save a chart under `name`. A profile with the same name is replaced
    /// in place with a fresh id and timestamp; otherwise the new profile is
    /// appended.
    pub fn upsert(
        &mut self,
        name: &str,
        chart: &NatalChart,
        movable: &MovablePillars,
    ) -> Result<&Profile> {
        let name = paths::validate_profile_name(name)?;
        let profile = Profile::new(name, ChartConfig::from_parts(chart, movable));

        let idx = match self.profiles.iter().position(|p| p.name == name) {
            Some(idx) => {
                self.profiles[idx] = profile;
                idx
            }
            None => {
                self.profiles.push(profile);
                self.profiles.len() - 1
            }
        };

        let saved = &self.profiles[idx];
        tracing::info!(id = %saved.id, name = %saved.name, "saved profile");
        Ok(saved)
    }

    pub fn delete(&mut self, id: &str) -> Result<Profile> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.id.to_string() == id)
            .ok_or_else(|| BaziError::ProfileNotFound(id.to_string()))?;
        let removed = self.profiles.remove(idx);
        tracing::info!(id = %removed.id, name = %removed.name, "deleted profile");
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
