use crate::chart::ChartArgs;
use crate::output::{print_json, print_table};
use bazi_core::calendar::parse_year_month;
use bazi_core::engine::DayRecord;
use bazi_core::projection::project_month;
use std::path::Path;

pub fn run(root: &Path, month: &str, chart: &ChartArgs, json: bool) -> anyhow::Result<()> {
    let (year, month) = parse_year_month(month)?;
    let (natal, movable) = chart.resolve(root)?;
    let projection = project_month(&natal, &movable, year, month)?;

    if json {
        return print_json(&projection);
    }

    println!(
        "{} ({} leading blank{})",
        projection.label,
        projection.leading_blanks,
        if projection.leading_blanks == 1 { "" } else { "s" }
    );
    println!();
    print_days(projection.days.iter());
    Ok(())
}

/// Render day records as the projection table.
pub fn print_days<'a>(days: impl Iterator<Item = &'a DayRecord>) {
    let rows: Vec<Vec<String>> = days
        .map(|d| {
            let tags: Vec<&str> = d.tags.iter().map(|t| t.label()).collect();
            vec![
                d.date.to_string(),
                d.pillar.to_string(),
                d.ten_god.hanzi().to_string(),
                d.wealth_score.to_string(),
                d.career_score.to_string(),
                format!("{:.2}", d.main_score),
                format!("{} {}", d.tier.hanzi(), d.tier),
                tags.join(", "),
            ]
        })
        .collect();
    print_table(
        &["DATE", "PILLAR", "TEN GOD", "WEALTH", "CAREER", "MAIN", "TIER", "TAGS"],
        rows,
    );
}
