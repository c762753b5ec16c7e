//! Embedded weather and rainfall datasets.
//!
//! Both CSVs ship inside the binary via `include_str!` so the WASM chart
//! app needs no extra request. Rows on disk are not in chronological
//! order; the aggregator sorts before bucketing.

use crate::series::{FieldPolicy, FieldSpec, SeriesPoint, SeriesSchema};
use agm_utils::dates;
use csv::ReaderBuilder;
use log::warn;

/// Embedded weather observations: date, temperature, humidity, wind speed, wind gust.
pub static WEATHER_CSV: &str = include_str!("../../fixtures/weather.csv");

/// Embedded rainfall observations: date, rainfall, season total, peak intensity.
pub static RAINFALL_CSV: &str = include_str!("../../fixtures/rainfall.csv");

/// Weather field table: gusts are a peak field, the rest are rates.
pub const WEATHER_SCHEMA: SeriesSchema = &[
    FieldSpec {
        name: "Temperature (°C)",
        policy: FieldPolicy::Average,
    },
    FieldSpec {
        name: "Humidity (%)",
        policy: FieldPolicy::Average,
    },
    FieldSpec {
        name: "Wind Speed (km/h)",
        policy: FieldPolicy::Average,
    },
    FieldSpec {
        name: "Wind Gust (km/h)",
        policy: FieldPolicy::Max,
    },
];

/// Rainfall field table: the season-to-date total carries the last
/// chronological value within a bucket rather than a sum.
pub const RAINFALL_SCHEMA: SeriesSchema = &[
    FieldSpec {
        name: "Rainfall (mm)",
        policy: FieldPolicy::Average,
    },
    FieldSpec {
        name: "Season Total (mm)",
        policy: FieldPolicy::Last,
    },
    FieldSpec {
        name: "Peak Intensity (mm/h)",
        policy: FieldPolicy::Max,
    },
];

/// Which climate dataset a chart displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Weather,
    Rainfall,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Weather, ChartKind::Rainfall];

    /// Selector value / display label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Weather => "Weather",
            ChartKind::Rainfall => "Rainfall",
        }
    }

    /// Parse a selector value, case-insensitively.
    pub fn parse(value: &str) -> Option<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(value.trim()))
    }

    pub fn schema(&self) -> SeriesSchema {
        match self {
            ChartKind::Weather => WEATHER_SCHEMA,
            ChartKind::Rainfall => RAINFALL_SCHEMA,
        }
    }

    /// The embedded dataset for this kind, parsed into series points.
    pub fn series(&self) -> Vec<SeriesPoint> {
        match self {
            ChartKind::Weather => parse_series_csv(WEATHER_CSV, WEATHER_SCHEMA.len()),
            ChartKind::Rainfall => parse_series_csv(RAINFALL_CSV, RAINFALL_SCHEMA.len()),
        }
    }
}

/// Parse a climate CSV (header row; date in the first column, then
/// `field_count` numeric columns) into series points. Rows that fail to
/// parse are skipped with a warning.
pub fn parse_series_csv(csv_data: &str, field_count: usize) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => continue,
        };

        let date = match record.get(0).and_then(|s| dates::parse_date(s.trim()).ok()) {
            Some(d) => d,
            None => {
                warn!("skipping climate row with unparseable date {:?}", record.get(0));
                continue;
            }
        };

        let mut values = Vec::with_capacity(field_count);
        for index in 0..field_count {
            match record.get(index + 1).and_then(|s| s.trim().parse::<f64>().ok()) {
                Some(value) => values.push(value),
                None => break,
            }
        }

        if values.len() == field_count {
            points.push(SeriesPoint { date, values });
        } else {
            warn!("skipping climate row with missing fields on {date}");
        }
    }
    points
}
