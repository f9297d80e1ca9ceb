//! Chart source flags shared by every command that runs the engine.

use anyhow::Context;
use bazi_core::config::{ChartConfig, Config};
use bazi_core::pillar::{parse_columns, MovablePillars, NatalChart, Pillar};
use bazi_core::profile::ProfileStore;
use bazi_core::symbols::{Branch, Stem};
use clap::Args;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Use a saved profile instead of the configured default chart
    #[arg(long)]
    pub profile: Option<String>,

    /// Natal stems, year to hour (e.g. 丙,庚,庚,壬 or bing,geng,geng,ren)
    #[arg(long)]
    pub stems: Option<String>,

    /// Natal branches, year to hour (e.g. 寅,子,申,子)
    #[arg(long)]
    pub branches: Option<String>,

    /// Current decade pillar (e.g. 乙未)
    #[arg(long)]
    pub decade: Option<String>,

    /// Current annual pillar (e.g. 丙午)
    #[arg(long)]
    pub annual: Option<String>,
}

impl ChartArgs {
    /// The stored chart these flags start from: the named profile, else the
    /// config's default profile, else the config chart.
    fn base(&self, root: &Path) -> anyhow::Result<ChartConfig> {
        let config = Config::load_or_default(root).context("failed to load config")?;
        let name = match self.profile.as_deref().or(config.default_profile.as_deref()) {
            Some(name) => name,
            None => return Ok(config.chart),
        };
        let store = ProfileStore::load(root).context("failed to load profiles")?;
        let profile = store
            .find_by_name(name)
            .ok_or_else(|| bazi_core::BaziError::ProfileNotFound(name.to_string()))?;
        Ok(profile.chart.clone())
    }

    /// Resolve the chart with explicit flags applied on top of the base.
    pub fn resolve(&self, root: &Path) -> anyhow::Result<(NatalChart, MovablePillars)> {
        let mut chart = self.base(root)?;

        if let Some(s) = &self.stems {
            chart.natal_stems = parse_columns::<Stem>(s).context("invalid --stems")?;
        }
        if let Some(s) = &self.branches {
            chart.natal_branches = parse_columns::<Branch>(s).context("invalid --branches")?;
        }
        if let Some(s) = &self.decade {
            chart.decade_pillar = s.parse::<Pillar>().context("invalid --decade")?;
        }
        if let Some(s) = &self.annual {
            chart.annual_pillar = s.parse::<Pillar>().context("invalid --annual")?;
        }

        let resolved = chart.hydrate().context("invalid chart")?;
        tracing::debug!(chart = %resolved.0, annual = %resolved.1.annual, "resolved chart");
        Ok(resolved)
    }
}
