use crate::models::{CountryStats, GlobalStats};
use ogd_olympics::country::{Country, Participation};
use std::collections::BTreeSet;

/// Sum of medals over a set of participations; 0 for an empty slice.
pub fn total_medals(participations: &[Participation]) -> u32 {
    participations.iter().map(|p| p.medals_count).sum()
}

/// Sum of athletes over a set of participations; 0 for an empty slice.
pub fn total_athletes(participations: &[Participation]) -> u32 {
    participations.iter().map(|p| p.athlete_count).sum()
}

/// Distinct Games years across all participations of all countries,
/// ascending and without duplicates.
pub fn unique_games_years(dataset: &[Country]) -> Vec<i32> {
    let mut years = BTreeSet::new();
    for country in dataset {
        for participation in &country.participations {
            years.insert(participation.year);
        }
    }
    years.into_iter().collect()
}

/// Averages use round-half-away-from-zero; inputs are non-negative so this
/// coincides with round-half-up.
fn rounded_average(total: u32, count: usize) -> u32 {
    (f64::from(total) / count as f64).round() as u32
}

/// Derive a single country's statistics.
///
/// The best year is the participation with the most medals; on a tie the
/// first one in the country's stored order wins.
///
/// # Panics
///
/// Panics if the country has no participations (the averages and the best
/// year are undefined there); callers guard before entering this path.
pub fn country_stats(country: &Country) -> CountryStats {
    let participations = &country.participations;
    let medals = total_medals(participations);
    let athletes = total_athletes(participations);
    let count = participations.len();
    let best = participations
        .iter()
        .reduce(|best, p| if p.medals_count > best.medals_count { p } else { best })
        .expect("country has no participations");

    CountryStats {
        country_id: country.id,
        country_name: country.country.clone(),
        total_medals: medals,
        total_athletes: athletes,
        participation_count: count,
        avg_medals_per_games: rounded_average(medals, count),
        avg_athletes_per_games: rounded_average(athletes, count),
        best_year: best.year,
        best_year_medals: best.medals_count,
    }
}

/// Per-country statistics sorted by total medals, descending. The sort is
/// stable, so countries with equal totals keep their dataset order.
/// Countries with zero participations have no defined stats and are skipped.
pub fn ranked_country_stats(dataset: &[Country]) -> Vec<CountryStats> {
    let mut ranked: Vec<CountryStats> = dataset
        .iter()
        .filter(|country| !country.participations.is_empty())
        .map(country_stats)
        .collect();
    ranked.sort_by(|a, b| b.total_medals.cmp(&a.total_medals));
    ranked
}

/// Dataset-wide summary. The top country is the head of the ranked list.
///
/// # Panics
///
/// Panics if the dataset is empty or no country has any participation;
/// callers guard before entering this path.
pub fn global_stats(dataset: &[Country]) -> GlobalStats {
    let ranked = ranked_country_stats(dataset);
    let top = ranked.first().expect("dataset has no rankable country");
    let total_medals: u32 = ranked.iter().map(|stats| stats.total_medals).sum();
    let total_athletes: u32 = ranked.iter().map(|stats| stats.total_athletes).sum();

    GlobalStats {
        total_countries: dataset.len(),
        total_games_editions: unique_games_years(dataset).len(),
        total_medals,
        total_athletes,
        avg_medals_per_country: rounded_average(total_medals, dataset.len()),
        top_country_name: top.country_name.clone(),
        top_country_medals: top.total_medals,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        country_stats, global_stats, ranked_country_stats, total_athletes, total_medals,
        unique_games_years,
    };
    use ogd_olympics::country::{Country, Participation};

    fn participation(year: i32, athletes: u32, medals: u32) -> Participation {
        Participation {
            id: 0,
            year,
            city: String::new(),
            medals_count: medals,
            athlete_count: athletes,
        }
    }

    fn country(id: u32, name: &str, participations: Vec<Participation>) -> Country {
        Country {
            id,
            country: name.to_string(),
            participations,
        }
    }

    /// The worked example: France with 2016/2020, Italy with 2016.
    fn example_dataset() -> Vec<Country> {
        vec![
            country(
                1,
                "France",
                vec![participation(2016, 100, 10), participation(2020, 120, 14)],
            ),
            country(2, "Italy", vec![participation(2016, 90, 8)]),
        ]
    }

    #[test]
    fn test_total_medals_empty_is_zero() {
        assert_eq!(total_medals(&[]), 0);
        assert_eq!(total_athletes(&[]), 0);
    }

    #[test]
    fn test_total_medals_is_order_independent() {
        let a = participation(2012, 10, 3);
        let b = participation(2016, 20, 5);
        let c = participation(2020, 30, 7);
        assert_eq!(
            total_medals(&[a.clone(), b.clone(), c.clone()]),
            total_medals(&[c, a, b])
        );
    }

    #[test]
    fn test_unique_games_years_ascending_no_duplicates() {
        let dataset = vec![
            country(1, "A", vec![participation(2020, 1, 1), participation(2012, 1, 1)]),
            country(2, "B", vec![participation(2016, 1, 1), participation(2012, 1, 1)]),
            country(3, "C", Vec::new()),
        ];
        assert_eq!(unique_games_years(&dataset), vec![2012, 2016, 2020]);
        assert!(unique_games_years(&[]).is_empty());
    }

    #[test]
    fn test_country_stats_example() {
        let dataset = example_dataset();
        let france = country_stats(&dataset[0]);
        assert_eq!(france.total_medals, 24);
        assert_eq!(france.total_athletes, 220);
        assert_eq!(france.participation_count, 2);
        assert_eq!(france.avg_medals_per_games, 12);
        assert_eq!(france.avg_athletes_per_games, 110);
        assert_eq!(france.best_year, 2020);
        assert_eq!(france.best_year_medals, 14);
    }

    #[test]
    fn test_best_year_tie_keeps_first_occurrence() {
        let c = country(
            1,
            "A",
            vec![
                participation(2012, 10, 9),
                participation(2016, 10, 9),
                participation(2020, 10, 4),
            ],
        );
        assert_eq!(country_stats(&c).best_year, 2012);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 9 medals over 2 games -> 4.5 -> 5
        let c = country(1, "A", vec![participation(2012, 1, 4), participation(2016, 1, 5)]);
        assert_eq!(country_stats(&c).avg_medals_per_games, 5);
    }

    #[test]
    fn test_ranked_sorted_descending_and_stable() {
        let dataset = vec![
            country(1, "A", vec![participation(2012, 1, 5)]),
            country(2, "B", vec![participation(2012, 1, 9)]),
            country(3, "C", vec![participation(2012, 1, 5)]),
        ];
        let ranked = ranked_country_stats(&dataset);
        let names: Vec<&str> = ranked.iter().map(|s| s.country_name.as_str()).collect();
        // B first, then A before C (equal totals keep dataset order).
        assert_eq!(names, vec!["B", "A", "C"]);
        assert!(ranked.windows(2).all(|w| w[0].total_medals >= w[1].total_medals));
    }

    #[test]
    fn test_ranked_skips_countries_without_participations() {
        let dataset = vec![
            country(1, "A", Vec::new()),
            country(2, "B", vec![participation(2012, 1, 1)]),
        ];
        let ranked = ranked_country_stats(&dataset);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].country_name, "B");
    }

    #[test]
    fn test_global_stats_example() {
        let global = global_stats(&example_dataset());
        assert_eq!(global.total_countries, 2);
        assert_eq!(global.total_games_editions, 2);
        assert_eq!(global.total_medals, 32);
        assert_eq!(global.total_athletes, 310);
        assert_eq!(global.avg_medals_per_country, 16);
        assert_eq!(global.top_country_name, "France");
        assert_eq!(global.top_country_medals, 24);
    }

    #[test]
    fn test_global_total_matches_sum_of_country_totals() {
        let dataset = example_dataset();
        let sum: u32 = dataset.iter().map(|c| country_stats(c).total_medals).sum();
        assert_eq!(global_stats(&dataset).total_medals, sum);
    }

    #[test]
    #[should_panic]
    fn test_country_stats_panics_without_participations() {
        country_stats(&country(1, "A", Vec::new()));
    }
}
