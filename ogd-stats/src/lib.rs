pub mod aggregate;
pub mod models;

pub use aggregate::{
    country_stats, global_stats, ranked_country_stats, total_athletes, total_medals,
    unique_games_years,
};
pub use models::{CountryStats, GlobalStats};
