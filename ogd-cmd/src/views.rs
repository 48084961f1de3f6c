//! The dashboard views: load the dataset once, derive statistics, render
//! charts to SVG files. An empty or failed load ends in an empty view,
//! never a crash.

use anyhow::Context;
use log::{info, warn};
use ogd_charts::area::{self, AreaChartOptions};
use ogd_charts::{to_area_series, to_chart_slices, PieChart, PieChartOptions};
use ogd_olympics::country::{Country, JSON_OBJECT};
use ogd_olympics::lookup::CountryLookup;
use ogd_olympics::store::DatasetStore;
use ogd_stats::{
    country_stats, global_stats, ranked_country_stats, total_medals, unique_games_years,
    CountryStats, GlobalStats,
};
use std::cell::RefCell;
use std::rc::Rc;

/// One-shot dataset load at startup: from a URL when given, otherwise the
/// bundled fixture. A failed fetch leaves the store at `None`; the views
/// then show their empty rendering.
async fn load_store(url: Option<&str>) -> DatasetStore {
    let mut store = DatasetStore::new();
    match url {
        Some(url) => {
            let client = reqwest::Client::new();
            if store.load_initial_data(&client, url).await.is_err() {
                warn!("continuing with an empty dashboard");
            }
        }
        None => {
            // The embedded fixture always parses.
            let _ = store.load_from_str(JSON_OBJECT);
        }
    }
    store
}

/// Rankable dataset or `None`: the stats paths divide by the country count
/// and read the head of the ranked list, so both guards live here.
fn rankable(dataset: Option<&Vec<Country>>) -> Option<&Vec<Country>> {
    dataset.filter(|d| !d.is_empty() && d.iter().any(|c| !c.participations.is_empty()))
}

pub async fn run_overview(output: &str, url: Option<&str>) -> anyhow::Result<()> {
    let store = load_store(url).await;
    let dataset = match store.current() {
        Some(dataset) if !dataset.is_empty() => dataset,
        _ => {
            println!("No Olympic data available.");
            return Ok(());
        }
    };

    println!("Countries: {}", dataset.len());
    println!("Games editions: {}", unique_games_years(dataset).len());
    for country in dataset {
        println!(
            "  [{:>2}] {:<20} {:>4} medals",
            country.id,
            country.country,
            total_medals(&country.participations)
        );
    }

    let mut chart = PieChart::new(PieChartOptions {
        tooltip_suffix: "medals".to_string(),
        ..PieChartOptions::default()
    });
    chart.set_data(&to_chart_slices(dataset));
    let mut svg = String::new();
    chart.render_svg(&mut svg);
    std::fs::write(output, &svg).with_context(|| format!("failed to write {output}"))?;
    info!("wrote pie chart to {output}");
    println!("Pie chart written to {output}; a slice click opens `detail --country <id>`.");
    Ok(())
}

pub async fn run_detail(country_arg: &str, output: &str, url: Option<&str>) -> anyhow::Result<()> {
    let store = load_store(url).await;
    let country = match country_arg.parse::<u32>() {
        Ok(id) => store.find_by_id(id),
        Err(_) => store.find_by_name(country_arg),
    };
    let Some(country) = country else {
        println!("No country matches '{country_arg}'.");
        return Ok(());
    };

    println!("{} (id {})", country.country, country.id);
    if country.participations.is_empty() {
        println!("No participations recorded.");
        return Ok(());
    }
    let stats = country_stats(country);
    println!("  Participations:    {}", stats.participation_count);
    println!("  Total medals:      {}", stats.total_medals);
    println!("  Total athletes:    {}", stats.total_athletes);
    println!("  Medals per Games:  {}", stats.avg_medals_per_games);
    println!("  Athletes per Games: {}", stats.avg_athletes_per_games);
    println!(
        "  Best year:         {} ({} medals)",
        stats.best_year, stats.best_year_medals
    );

    let options = AreaChartOptions {
        x_axis_title: "Year".to_string(),
        y_axis_title: "Medals".to_string(),
        ..AreaChartOptions::default()
    };
    let mut svg = String::new();
    area::render_svg(&to_area_series(&country.participations), &options, &mut svg);
    std::fs::write(output, &svg).with_context(|| format!("failed to write {output}"))?;
    info!("wrote area chart to {output}");
    println!("Area chart written to {output}.");
    Ok(())
}

pub async fn run_stats(json: bool, url: Option<&str>) -> anyhow::Result<()> {
    let mut store = load_store(url).await;

    // The stats view subscribes for the lifetime of the page; here the
    // replay delivers the value immediately and the subscription is torn
    // down again before the store goes away.
    let computed: Rc<RefCell<Option<(GlobalStats, Vec<CountryStats>)>>> =
        Rc::new(RefCell::new(None));
    let sink = Rc::clone(&computed);
    let subscription = store.subscribe(move |dataset| {
        *sink.borrow_mut() =
            rankable(dataset).map(|d| (global_stats(d), ranked_country_stats(d)));
    });
    store.unsubscribe(subscription);

    let computed = computed.borrow();
    let Some((global, countries)) = computed.as_ref() else {
        println!("No Olympic data available.");
        return Ok(());
    };

    if json {
        let document = serde_json::json!({
            "global": global,
            "countries": countries,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!("Countries:          {}", global.total_countries);
    println!("Games editions:     {}", global.total_games_editions);
    println!("Total medals:       {}", global.total_medals);
    println!("Total athletes:     {}", global.total_athletes);
    println!("Medals per country: {}", global.avg_medals_per_country);
    println!(
        "Top country:        {} ({} medals)",
        global.top_country_name, global.top_country_medals
    );
    println!();
    println!(
        "{:<5} {:<20} {:>7} {:>9} {:>7} {:>11} {:>10}",
        "Rank", "Country", "Medals", "Athletes", "Games", "Medals/G", "Best year"
    );
    for (index, stats) in countries.iter().enumerate() {
        println!(
            "{:<5} {:<20} {:>7} {:>9} {:>7} {:>11} {:>10}",
            index + 1,
            stats.country_name,
            stats.total_medals,
            stats.total_athletes,
            stats.participation_count,
            stats.avg_medals_per_games,
            stats.best_year
        );
    }
    Ok(())
}
