use crate::chart::ChartArgs;
use crate::output::print_json;
use bazi_core::calendar::parse_date;
use bazi_core::detail::day_detail;
use std::path::Path;

pub fn run(root: &Path, date: &str, chart: &ChartArgs, json: bool) -> anyhow::Result<()> {
    let date = parse_date(date)?;
    let (natal, movable) = chart.resolve(root)?;
    let detail = day_detail(&natal, &movable, date);

    if json {
        return print_json(&detail);
    }

    let r = &detail.record;
    println!("{}  {}", r.date, detail.summary);
    println!("Chart:     {natal}");
    println!("Ten God:   {}", r.ten_god);
    println!(
        "Scores:    wealth {}  career {}  main {:.2}",
        r.wealth_score, r.career_score, r.main_score
    );
    println!(
        "Tier:      {} {}  {}",
        r.tier.hanzi(),
        r.tier,
        r.tier.message()
    );
    println!(
        "Strength:  {}",
        if r.is_strong { "rooted" } else { "unrooted" }
    );
    if detail.noble_day {
        println!("Star:      Nobleman");
    }
    if detail.blade_day {
        println!("Star:      Sheep Blade");
    }

    for section in &detail.sections {
        println!();
        println!("{} [{}]", section.title, section.impact);
        println!("  {}", section.content);
    }

    let e = &detail.enhancement;
    println!();
    println!("Enhancement");
    println!("  color:     {}", e.color);
    println!("  accessory: {}", e.accessory);
    println!("  action:    {}", e.action);
    Ok(())
}
