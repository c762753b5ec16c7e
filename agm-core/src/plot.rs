use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fixed divisor for converting acres to hectares.
pub const ACRES_PER_HECTARE: f64 = 2.471;

/// Fallback soil pH when the source field is null or absent.
pub const DEFAULT_SOIL_PH: f64 = 7.0;

/// Fallback organic carbon stock when the source field is null or absent.
pub const DEFAULT_ORGANIC_CARBON: f64 = 1.0;

/// Fallback crop status when the source field is absent.
pub const DEFAULT_STATUS: &str = "Growing";

/// Errors that can occur when normalizing the raw plot payload.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("payload is not a JSON object keyed by plot name")]
    PayloadShape,
    #[error("plot {name:?} has a missing or empty boundary ring")]
    MalformedGeometry { name: String },
    #[error("plot {name:?} could not be decoded: {source}")]
    BadRecord {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A mean/min/max measurement range as reported by the field API.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricRange {
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

/// Nested soil measurements.
///
/// Every field is optional so that an absent value stays distinguishable
/// from a legitimate zero reading; defaults apply only to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoilMetrics {
    #[serde(default)]
    pub organic_carbon_stock: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
    /// Area in acres as derived from the soil survey.
    #[serde(default)]
    pub area: Option<f64>,
}

/// One raw per-plot record as returned by the field API.
///
/// The boundary ring is in longitude/latitude order. A top-level `area`
/// overrides the soil-derived area when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPlotRecord {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
    #[serde(default)]
    pub soil: Option<SoilMetrics>,
    #[serde(default)]
    pub brix: Option<MetricRange>,
    #[serde(default)]
    pub sugar_yield: Option<MetricRange>,
    #[serde(default)]
    pub biomass: Option<MetricRange>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One normalized agricultural field unit with geometry and derived metrics.
///
/// Recomputed in full from the raw payload on every fetch; never mutated
/// field-by-field afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plot {
    pub id: u32,
    pub name: String,
    pub status: String,
    /// Area in acres: override area, else soil area, else zero.
    pub area_acres: f64,
    /// Area in hectares, derived from acres via the fixed 2.471 divisor.
    pub area_hectares: f64,
    /// Unweighted mean of ring vertices, latitude/longitude order.
    pub center: (f64, f64),
    /// Boundary ring in latitude/longitude order.
    pub boundary: Vec<(f64, f64)>,
    pub biomass: f64,
    pub soil_ph: f64,
    pub organic_carbon: f64,
    pub brix: f64,
    pub yield_forecast: f64,
}

impl Plot {
    /// Derive a plot from one raw record.
    ///
    /// The display name is the payload key with stray quote characters
    /// stripped. Fails only when the boundary ring is missing or empty;
    /// every other irregularity falls back to a default.
    pub fn from_raw(id: u32, key: &str, raw: &RawPlotRecord) -> Result<Plot, PlotError> {
        let name = key.trim_matches(|c| c == '"' || c == '\'').to_string();
        if raw.coordinates.is_empty() {
            return Err(PlotError::MalformedGeometry { name });
        }

        // Source vertices are lon/lat; the dashboard wants lat/lon.
        let boundary: Vec<(f64, f64)> = raw
            .coordinates
            .iter()
            .map(|&[lon, lat]| (lat, lon))
            .collect();
        let n = boundary.len() as f64;
        let center = (
            boundary.iter().map(|v| v.0).sum::<f64>() / n,
            boundary.iter().map(|v| v.1).sum::<f64>() / n,
        );

        let soil = raw.soil.unwrap_or_default();
        let area_acres = raw.area.or(soil.area).unwrap_or(0.0);

        Ok(Plot {
            id,
            name,
            status: raw
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            area_acres,
            area_hectares: area_acres / ACRES_PER_HECTARE,
            center,
            boundary,
            biomass: raw.biomass.unwrap_or_default().min,
            soil_ph: soil.ph.unwrap_or(DEFAULT_SOIL_PH),
            organic_carbon: soil.organic_carbon_stock.unwrap_or(DEFAULT_ORGANIC_CARBON),
            brix: raw.brix.unwrap_or_default().min,
            // Sugar yield arrives in a 10x unit; the forecast is rescaled.
            yield_forecast: raw.sugar_yield.unwrap_or_default().min / 10.0,
        })
    }
}

/// Normalize a raw payload (a JSON object keyed by plot name) into plots.
///
/// Records that fail to decode or that carry an empty boundary ring are
/// skipped with a warning; ids are assigned 1-based, in payload iteration
/// order, over the plots that survive.
pub fn plots_from_json(payload: &str) -> Result<Vec<Plot>, PlotError> {
    let value: Value = serde_json::from_str(payload).map_err(|_| PlotError::PayloadShape)?;
    let map = value.as_object().ok_or(PlotError::PayloadShape)?;

    let mut plots: Vec<Plot> = Vec::with_capacity(map.len());
    for (key, entry) in map {
        let raw: RawPlotRecord = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(source) => {
                warn!(
                    "{}",
                    PlotError::BadRecord {
                        name: key.clone(),
                        source,
                    }
                );
                continue;
            }
        };
        match Plot::from_raw(plots.len() as u32 + 1, key, &raw) {
            Ok(plot) => plots.push(plot),
            Err(err) => warn!("{err}"),
        }
    }
    Ok(plots)
}

#[cfg(feature = "api")]
pub use fetch::{fetch_plots, FetchError, PLOTS_ENDPOINT};

#[cfg(feature = "api")]
mod fetch {
    use super::{plots_from_json, Plot, PlotError};
    use chrono::NaiveDate;
    use log::info;
    use thiserror::Error;

    /// Field API endpoint returning the raw plot payload.
    pub const PLOTS_ENDPOINT: &str = "https://fielddata.agromonitor.io/api/v1/plots";

    /// Date format for the `end_date` query parameter.
    const END_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Errors surfaced by the one outbound plot fetch.
    #[derive(Debug, Error)]
    pub enum FetchError {
        #[error("plot request failed: {0}")]
        Http(#[from] reqwest::Error),
        #[error("plot endpoint returned status {0}")]
        BadStatus(reqwest::StatusCode),
        #[error(transparent)]
        Payload(#[from] PlotError),
    }

    /// Fetch and normalize the plot collection for the given end date.
    ///
    /// One request, no timeout, no retry: recovery from a failed fetch is
    /// the caller's full reload.
    pub async fn fetch_plots(
        client: &reqwest::Client,
        end_date: NaiveDate,
    ) -> Result<Vec<Plot>, FetchError> {
        let url = format!(
            "{}?end_date={}",
            PLOTS_ENDPOINT,
            end_date.format(END_DATE_FORMAT)
        );
        let response = client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::BadStatus(response.status()));
        }
        let body = response.text().await?;
        let plots = plots_from_json(&body)?;
        info!("fetched {} plots for end date {}", plots.len(), end_date);
        Ok(plots)
    }
}
