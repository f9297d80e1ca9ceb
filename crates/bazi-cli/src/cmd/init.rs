use anyhow::Context;
use bazi_core::{config::Config, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing bazi in: {}", root.display());

    let created = Config::init(root)
        .with_context(|| format!("failed to write {}", paths::CONFIG_FILE))?;
    if created {
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }
    Ok(())
}
