use ogd_olympics::country::{Country, Participation};
use ogd_stats::total_medals;
use serde::Serialize;

/// The contract between the aggregation layer and the circular chart: the
/// renderer accepts nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    /// Country id carried through to the slice-click event; slices without
    /// one are not clickable.
    pub correlation_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaPoint {
    pub x: i32,
    pub y: f64,
}

/// A named series of (x, y) points for the area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSeries {
    pub name: String,
    pub points: Vec<AreaPoint>,
}

/// One slice per country in dataset order; the renderer lays out its arcs
/// in this order and never resorts.
pub fn to_chart_slices(dataset: &[Country]) -> Vec<ChartSlice> {
    dataset
        .iter()
        .map(|country| ChartSlice {
            label: country.country.clone(),
            value: f64::from(total_medals(&country.participations)),
            correlation_id: Some(country.id),
        })
        .collect()
}

/// A single "Medals" series of (year, medal count) points sorted ascending
/// by year. Empty input yields an empty series list, not a series with no
/// points, so the renderer suppresses drawing entirely.
pub fn to_area_series(participations: &[Participation]) -> Vec<AreaSeries> {
    if participations.is_empty() {
        return Vec::new();
    }
    let mut sorted: Vec<&Participation> = participations.iter().collect();
    sorted.sort_by_key(|p| p.year);
    vec![AreaSeries {
        name: "Medals".to_string(),
        points: sorted
            .iter()
            .map(|p| AreaPoint {
                x: p.year,
                y: f64::from(p.medals_count),
            })
            .collect(),
    }]
}

#[cfg(test)]
mod tests {
    use super::{to_area_series, to_chart_slices};
    use ogd_olympics::country::{Country, Participation};

    fn participation(year: i32, medals: u32) -> Participation {
        Participation {
            id: 0,
            year,
            city: String::new(),
            medals_count: medals,
            athlete_count: 0,
        }
    }

    #[test]
    fn test_slices_preserve_dataset_order_and_ids() {
        let dataset = vec![
            Country {
                id: 1,
                country: "France".to_string(),
                participations: vec![participation(2016, 10), participation(2020, 14)],
            },
            Country {
                id: 2,
                country: "Italy".to_string(),
                participations: vec![participation(2016, 8)],
            },
        ];
        let slices = to_chart_slices(&dataset);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "France");
        assert_eq!(slices[0].value, 24.0);
        assert_eq!(slices[0].correlation_id, Some(1));
        assert_eq!(slices[1].label, "Italy");
        assert_eq!(slices[1].value, 8.0);
        assert_eq!(slices[1].correlation_id, Some(2));
    }

    #[test]
    fn test_area_series_sorted_by_year() {
        let series = to_area_series(&[
            participation(2020, 33),
            participation(2012, 35),
            participation(2016, 42),
        ]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Medals");
        let years: Vec<i32> = series[0].points.iter().map(|p| p.x).collect();
        assert_eq!(years, vec![2012, 2016, 2020]);
        assert_eq!(series[0].points[0].y, 35.0);
    }

    #[test]
    fn test_area_series_empty_input_yields_empty_list() {
        assert!(to_area_series(&[]).is_empty());
    }
}
