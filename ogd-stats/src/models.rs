use serde::Serialize;

/// Statistics computed for a single country: medal/athlete totals, per-Games
/// averages and the best edition. Recomputed from scratch on every dataset
/// change, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStats {
    pub country_id: u32,
    pub country_name: String,
    pub total_medals: u32,
    pub total_athletes: u32,
    pub participation_count: usize,
    pub avg_medals_per_games: u32,
    pub avg_athletes_per_games: u32,
    pub best_year: i32,
    pub best_year_medals: u32,
}

/// Dataset-wide summary shown on the stats view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_countries: usize,
    /// Count of distinct Games years across all countries.
    pub total_games_editions: usize,
    pub total_medals: u32,
    pub total_athletes: u32,
    pub avg_medals_per_country: u32,
    pub top_country_name: String,
    pub top_country_medals: u32,
}
