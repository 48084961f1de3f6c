use serde::{Deserialize, Serialize};

/// Embedded mock dataset, the same document the CLI serves when no URL is given.
pub static JSON_OBJECT: &str = include_str!("../fixtures/olympic.json");

/// One country's attendance of a single Olympic Games edition.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: u32,
    pub year: i32,
    /// Host city of the edition
    pub city: String,
    pub medals_count: u32,
    pub athlete_count: u32,
}

/// A country and every Games edition it attended.
///
/// The source JSON names the country field `country`, not `name`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub country: String,
    pub participations: Vec<Participation>,
}

/// The whole dataset: one entry per country, in display order.
pub type Dataset = Vec<Country>;

#[cfg(test)]
mod tests {
    use super::{Dataset, JSON_OBJECT};

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset: Dataset = serde_json::from_str(JSON_OBJECT).unwrap();
        assert_eq!(dataset.len(), 5);
        let italy = &dataset[0];
        assert_eq!(italy.id, 1);
        assert_eq!(italy.country, "Italy");
        assert_eq!(italy.participations.len(), 3);
        assert_eq!(italy.participations[0].year, 2012);
        assert_eq!(italy.participations[0].medals_count, 28);
        assert_eq!(italy.participations[0].athlete_count, 372);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = r#"[{
            "id": 7,
            "country": "Norway",
            "participations": [
                { "id": 1, "year": 2016, "city": "Rio de Janeiro",
                  "medalsCount": 4, "athleteCount": 62 }
            ]
        }]"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset[0].participations[0].medals_count, 4);
        assert_eq!(dataset[0].participations[0].athlete_count, 62);
    }
}
