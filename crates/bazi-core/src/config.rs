use crate::error::{BaziError, Result};
use crate::paths;
use crate::pillar::{MovablePillars, NatalChart, Pillar};
use crate::profile::ProfileStore;
use crate::symbols::{Branch, Stem};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ChartConfig
// ---------------------------------------------------------------------------

/// A chart as stored on disk: natal columns in year, month, day, hour order
/// plus the two movable pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub natal_stems: [Stem; 4],
    pub natal_branches: [Branch; 4],
    pub decade_pillar: Pillar,
    pub annual_pillar: Pillar,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            natal_stems: [Stem::Bing, Stem::Geng, Stem::Geng, Stem::Ren],
            natal_branches: [Branch::Yin, Branch::Zi, Branch::Shen, Branch::Zi],
            decade_pillar: stock_pillar(Stem::Yi, Branch::Wei),
            annual_pillar: stock_pillar(Stem::Bing, Branch::Wu),
        }
    }
}

/// A built-in pillar; both halves share polarity, so construction succeeds.
fn stock_pillar(stem: Stem, branch: Branch) -> Pillar {
    Pillar::new(stem, branch)
        .unwrap_or_else(|e| unreachable!("stock pillar {stem:?} {branch:?}: {e}"))
}

impl ChartConfig {
    pub fn from_parts(chart: &NatalChart, movable: &MovablePillars) -> Self {
        Self {
            natal_stems: chart.stems(),
            natal_branches: chart.branches(),
            decade_pillar: movable.decade,
            annual_pillar: movable.annual,
        }
    }

    /// Build the engine inputs, rejecting columns that pair stems and
    /// branches of differing polarity.
    pub fn hydrate(&self) -> Result<(NatalChart, MovablePillars)> {
        let chart = NatalChart::from_columns(self.natal_stems, self.natal_branches)?;
        Ok((chart, MovablePillars::new(self.decade_pillar, self.annual_pillar)))
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_profile: None,
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(BaziError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like `load`, but an uninitialized root yields the built-in defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(BaziError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::config_path(root), self)
    }

    /// Write the default config unless one exists. Returns true if written.
    pub fn init(root: &Path) -> Result<bool> {
        let data = Self::default().to_yaml()?;
        let created = crate::io::create_new(&paths::config_path(root), data.as_bytes())?;
        if created {
            tracing::info!(root = %root.display(), "initialized config");
        }
        Ok(created)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, profiles: &ProfileStore) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != default_version() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "unsupported config version {}, expected {}",
                    self.version,
                    default_version()
                ),
            });
        }

        if let Err(e) = self.chart.hydrate() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("chart: {e}"),
            });
        }

        if let Some(name) = &self.default_profile {
            match profiles.find_by_name(name) {
                None => warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("default_profile '{name}' does not match any saved profile"),
                }),
                Some(profile) => {
                    if let Err(e) = profile.hydrate() {
                        warnings.push(ConfigWarning {
                            level: WarnLevel::Error,
                            message: format!("profile '{name}': {e}"),
                        });
                    }
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
