use crate::chart::ChartArgs;
use crate::output::{print_json, print_table};
use anyhow::Context;
use bazi_core::profile::{Profile, ProfileStore};
use bazi_core::BaziError;
use clap::Subcommand;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Save the resolved chart under a name (replaces a profile of the same name)
    Save {
        name: String,
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// List saved profiles
    List,

    /// Show one profile
    Show { name: String },

    /// Delete a profile by id
    Delete { id: String },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: ProfileSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProfileSubcommand::Save { name, chart } => save(root, &name, &chart, json),
        ProfileSubcommand::List => list(root, json),
        ProfileSubcommand::Show { name } => show(root, &name, json),
        ProfileSubcommand::Delete { id } => delete(root, &id, json),
    }
}

fn load(root: &Path) -> anyhow::Result<ProfileStore> {
    ProfileStore::load(root).context("failed to load profiles")
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

fn save(root: &Path, name: &str, chart: &ChartArgs, json: bool) -> anyhow::Result<()> {
    let (natal, movable) = chart.resolve(root)?;
    let mut store = load(root)?;
    let saved = store.upsert(name, &natal, &movable)?.clone();
    store.save(root).context("failed to write profiles.yaml")?;

    if json {
        print_json(&saved)?;
    } else {
        println!("Saved profile '{}' ({})", saved.name, saved.id);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = load(root)?;

    if json {
        return print_json(&store.list());
    }

    if store.is_empty() {
        println!("No profiles saved.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = store
        .list()
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                chart_text(p),
                p.chart.annual_pillar.to_string(),
                p.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "CHART", "ANNUAL", "UPDATED"], rows);
    Ok(())
}

fn chart_text(profile: &Profile) -> String {
    match profile.hydrate() {
        Ok((natal, _)) => natal.to_string(),
        Err(_) => "(invalid)".to_string(),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let store = load(root)?;
    let profile = store
        .find_by_name(name)
        .ok_or_else(|| BaziError::ProfileNotFound(name.to_string()))?;

    if json {
        return print_json(profile);
    }

    println!("Profile: {}", profile.name);
    println!("ID:      {}", profile.id);
    println!("Chart:   {}", chart_text(profile));
    println!("Decade:  {}", profile.chart.decade_pillar);
    println!("Annual:  {}", profile.chart.annual_pillar);
    println!("Updated: {}", profile.updated_at.to_rfc3339());
    Ok(())
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

fn delete(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let mut store = load(root)?;
    let removed = store.delete(id)?;
    store.save(root).context("failed to write profiles.yaml")?;

    if json {
        print_json(&serde_json::json!({ "deleted": removed.id, "name": removed.name }))?;
    } else {
        println!("Deleted profile '{}' ({})", removed.name, removed.id);
    }
    Ok(())
}
