use crate::chart::ChartArgs;
use crate::cmd::month::print_days;
use crate::output::print_json;
use bazi_core::calendar::parse_year_month;
use bazi_core::projection::{project_month, KeyDateFilter};
use std::path::Path;

pub fn run(
    root: &Path,
    month: &str,
    filter: &str,
    chart: &ChartArgs,
    json: bool,
) -> anyhow::Result<()> {
    let filter: KeyDateFilter = filter.parse()?;
    let (year, month) = parse_year_month(month)?;
    let (natal, movable) = chart.resolve(root)?;
    let projection = project_month(&natal, &movable, year, month)?;
    let days = projection.key_dates(filter);

    if json {
        return print_json(&days);
    }

    if days.is_empty() {
        println!("No {filter} days in {}.", projection.label);
        return Ok(());
    }
    println!("{}: {} {filter} day(s)", projection.label, days.len());
    println!();
    print_days(days.into_iter());
    Ok(())
}
