use crate::output::print_json;
use bazi_core::calendar::{day_pillar, parse_date};

pub fn run(date: &str, json: bool) -> anyhow::Result<()> {
    let date = parse_date(date)?;
    let pillar = day_pillar(date);

    if json {
        print_json(&serde_json::json!({
            "date": date,
            "pillar": pillar.to_string(),
            "stem": pillar.stem(),
            "branch": pillar.branch(),
            "cycle_index": pillar.cycle_index(),
        }))?;
    } else {
        println!("{date}  {pillar}");
    }
    Ok(())
}
