use crate::plot::Plot;
use serde::{Deserialize, Serialize};

/// Fallback map center when no plots survive filtering: centroid of the
/// Maharashtra sugarcane belt, latitude/longitude order.
pub const DEFAULT_MAP_CENTER: (f64, f64) = (19.7515, 75.7139);

/// One range-filter selection: everything, or a closed [min, max] interval.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RangeSelection {
    #[default]
    All,
    Range(f64, f64),
}

impl RangeSelection {
    /// Parse a dropdown value. "All" (or anything unparseable) keeps
    /// everything; "min-max" keeps the closed interval.
    pub fn parse(value: &str) -> RangeSelection {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return RangeSelection::All;
        }
        let Some((lo, hi)) = trimmed.split_once('-') else {
            return RangeSelection::All;
        };
        match (lo.trim().parse::<f64>(), hi.trim().parse::<f64>()) {
            (Ok(min), Ok(max)) => RangeSelection::Range(min, max),
            _ => RangeSelection::All,
        }
    }

    /// True when this selection narrows the collection.
    pub fn is_active(&self) -> bool {
        matches!(self, RangeSelection::Range(_, _))
    }

    /// Interval membership, inclusive on both ends.
    pub fn keeps(&self, value: f64) -> bool {
        match *self {
            RangeSelection::All => true,
            RangeSelection::Range(min, max) => min <= value && value <= max,
        }
    }
}

/// A fixed biomass-value interval used for categorical filtering.
///
/// Breakpoints at 20/30/40/50: each band is half-open below and closed
/// above, except the lowest (unbounded below) and highest (unbounded
/// above), so every value maps to exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomassBand {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl BiomassBand {
    pub const ALL: [BiomassBand; 5] = [
        BiomassBand::VeryLow,
        BiomassBand::Low,
        BiomassBand::Medium,
        BiomassBand::High,
        BiomassBand::VeryHigh,
    ];

    /// Band containing the given biomass value.
    pub fn for_value(value: f64) -> BiomassBand {
        if value <= 20.0 {
            BiomassBand::VeryLow
        } else if value <= 30.0 {
            BiomassBand::Low
        } else if value <= 40.0 {
            BiomassBand::Medium
        } else if value <= 50.0 {
            BiomassBand::High
        } else {
            BiomassBand::VeryHigh
        }
    }

    /// Display label, also used as the selection-event identifier.
    pub fn label(&self) -> &'static str {
        match self {
            BiomassBand::VeryLow => "Very Low",
            BiomassBand::Low => "Low",
            BiomassBand::Medium => "Medium",
            BiomassBand::High => "High",
            BiomassBand::VeryHigh => "Very High",
        }
    }

    /// Inverse of [`BiomassBand::label`].
    pub fn from_label(label: &str) -> Option<BiomassBand> {
        BiomassBand::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// The complete client-side filter/selection state.
///
/// Owned by the presentation layer and passed by value into the engine on
/// every recomputation; nothing here persists across sessions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub area: RangeSelection,
    pub soil_ph: RangeSelection,
    pub organic_carbon: RangeSelection,
    pub brix: RangeSelection,
    pub selected_plot: Option<String>,
    pub selected_band: Option<BiomassBand>,
}

impl FilterState {
    /// True when any of the four range filters narrows the collection.
    /// Plot and band selection are deliberately excluded.
    pub fn any_range_active(&self) -> bool {
        self.area.is_active()
            || self.soil_ph.is_active()
            || self.organic_carbon.is_active()
            || self.brix.is_active()
    }

    /// Plot selection toggle. The empty string is the external "clear"
    /// sentinel; re-selecting the current plot also clears it.
    pub fn toggle_plot(&mut self, name: &str) {
        if name.is_empty() || self.selected_plot.as_deref() == Some(name) {
            self.selected_plot = None;
        } else {
            self.selected_plot = Some(name.to_string());
        }
    }

    /// Band selection toggle: the same band clears, a different band
    /// replaces (no multi-select). Unknown labels clear.
    pub fn toggle_band(&mut self, label: &str) {
        match BiomassBand::from_label(label) {
            Some(band) if self.selected_band != Some(band) => self.selected_band = Some(band),
            _ => self.selected_band = None,
        }
    }
}

/// Aggregate statistics derived from the filtered plot collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSummary {
    pub count: usize,
    /// Total area in acres.
    pub total_area: f64,
    pub average_ph: f64,
    pub average_organic_carbon: f64,
    /// Mean of filtered centroids, latitude/longitude order.
    pub map_center: (f64, f64),
    /// Reference maximum for the area gauge.
    pub area_gauge_max: f64,
}

/// Apply the four range filters (conjunctive), then plot selection, then
/// band selection, preserving input order.
pub fn apply_filters(plots: &[Plot], state: &FilterState) -> Vec<Plot> {
    plots
        .iter()
        .filter(|p| state.area.keeps(p.area_acres))
        .filter(|p| state.soil_ph.keeps(p.soil_ph))
        .filter(|p| state.organic_carbon.keeps(p.organic_carbon))
        .filter(|p| state.brix.keeps(p.brix))
        .filter(|p| {
            state
                .selected_plot
                .as_deref()
                .map_or(true, |name| p.name == name)
        })
        .filter(|p| {
            state
                .selected_band
                .map_or(true, |band| BiomassBand::for_value(p.biomass) == band)
        })
        .cloned()
        .collect()
}

/// Derive summary statistics from a filtered collection.
///
/// `all_plots` supplies the unfiltered total area: the gauge reference
/// switches to it whenever any range filter is active, so the gauge shows
/// the filtered-vs-total proportion. With no range filter active the
/// reference equals the filtered total and the gauge reads 100%.
pub fn summarize(filtered: &[Plot], all_plots: &[Plot], state: &FilterState) -> PlotSummary {
    let count = filtered.len();
    let total_area: f64 = filtered.iter().map(|p| p.area_acres).sum();

    let (average_ph, average_organic_carbon, map_center) = if count == 0 {
        (0.0, 0.0, DEFAULT_MAP_CENTER)
    } else {
        let n = count as f64;
        (
            filtered.iter().map(|p| p.soil_ph).sum::<f64>() / n,
            filtered.iter().map(|p| p.organic_carbon).sum::<f64>() / n,
            (
                filtered.iter().map(|p| p.center.0).sum::<f64>() / n,
                filtered.iter().map(|p| p.center.1).sum::<f64>() / n,
            ),
        )
    };

    let area_gauge_max = if state.any_range_active() {
        all_plots.iter().map(|p| p.area_acres).sum()
    } else {
        total_area
    };

    PlotSummary {
        count,
        total_area,
        average_ph,
        average_organic_carbon,
        map_center,
        area_gauge_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{plots_from_json, Plot, RawPlotRecord, SoilMetrics};

    fn plot(name: &str, area: f64, ph: f64, carbon: f64, brix: f64, biomass: f64) -> Plot {
        let raw = RawPlotRecord {
            coordinates: vec![[75.0, 19.0], [75.2, 19.2]],
            soil: Some(SoilMetrics {
                organic_carbon_stock: Some(carbon),
                ph: Some(ph),
                area: Some(area),
            }),
            brix: Some(crate::plot::MetricRange {
                mean: brix,
                min: brix,
                max: brix,
            }),
            biomass: Some(crate::plot::MetricRange {
                mean: biomass,
                min: biomass,
                max: biomass,
            }),
            ..Default::default()
        };
        Plot::from_raw(1, name, &raw).unwrap()
    }

    #[test]
    fn test_range_parse() {
        assert_eq!(RangeSelection::parse("All"), RangeSelection::All);
        assert_eq!(RangeSelection::parse("all"), RangeSelection::All);
        assert_eq!(
            RangeSelection::parse("20-30"),
            RangeSelection::Range(20.0, 30.0)
        );
        assert_eq!(
            RangeSelection::parse("6.5-7.0"),
            RangeSelection::Range(6.5, 7.0)
        );
        assert_eq!(RangeSelection::parse("garbage"), RangeSelection::All);
    }

    #[test]
    fn test_range_keeps_is_inclusive() {
        let range = RangeSelection::parse("20-30");
        assert!(range.keeps(20.0));
        assert!(range.keeps(25.0));
        assert!(range.keeps(30.0));
        assert!(!range.keeps(19.999));
        assert!(!range.keeps(30.001));
        assert!(RangeSelection::All.keeps(f64::MIN));
        assert!(RangeSelection::All.keeps(f64::MAX));
    }

    #[test]
    fn test_banding_is_a_total_partition() {
        // Every value maps to exactly one band; breakpoints belong to the
        // band below them.
        assert_eq!(BiomassBand::for_value(-5.0), BiomassBand::VeryLow);
        assert_eq!(BiomassBand::for_value(20.0), BiomassBand::VeryLow);
        assert_eq!(BiomassBand::for_value(20.001), BiomassBand::Low);
        assert_eq!(BiomassBand::for_value(30.0), BiomassBand::Low);
        assert_eq!(BiomassBand::for_value(30.001), BiomassBand::Medium);
        assert_eq!(BiomassBand::for_value(40.0), BiomassBand::Medium);
        assert_eq!(BiomassBand::for_value(40.001), BiomassBand::High);
        assert_eq!(BiomassBand::for_value(50.0), BiomassBand::High);
        assert_eq!(BiomassBand::for_value(50.001), BiomassBand::VeryHigh);
    }

    #[test]
    fn test_band_labels_round_trip() {
        for band in BiomassBand::ALL {
            assert_eq!(BiomassBand::from_label(band.label()), Some(band));
        }
        assert_eq!(BiomassBand::from_label("Unknown"), None);
    }

    #[test]
    fn test_range_filters_are_conjunctive() {
        let plots = vec![
            plot("A", 40.0, 6.8, 1.2, 16.0, 35.0),
            plot("B", 90.0, 6.8, 1.2, 16.0, 35.0),
            plot("C", 40.0, 7.8, 1.2, 16.0, 35.0),
        ];
        let state = FilterState {
            area: RangeSelection::parse("0-50"),
            soil_ph: RangeSelection::parse("6.5-7.0"),
            ..Default::default()
        };
        let filtered = apply_filters(&plots, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "A");
    }

    #[test]
    fn test_ph_scenario_keeps_only_matching_plot() {
        let payload = r#"{
            "First": {
                "coordinates": [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]],
                "soil": {"ph": 6.8, "area": 10.0}
            },
            "Second": {
                "coordinates": [[10.0, 10.0], [10.0, 12.0], [12.0, 12.0], [12.0, 10.0]],
                "soil": {"area": 20.0}
            }
        }"#;
        let plots = plots_from_json(payload).unwrap();
        let state = FilterState {
            soil_ph: RangeSelection::parse("6.5-7.0"),
            ..Default::default()
        };
        let filtered = apply_filters(&plots, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "First");

        // The gauge reference is the unfiltered total of both plots
        let summary = summarize(&filtered, &plots, &state);
        assert_eq!(summary.area_gauge_max, 30.0);
        assert_eq!(summary.total_area, 10.0);
    }

    #[test]
    fn test_plot_selection_applies_after_ranges() {
        let plots = vec![
            plot("A", 40.0, 6.8, 1.2, 16.0, 35.0),
            plot("B", 45.0, 6.9, 1.3, 17.0, 36.0),
        ];
        let mut state = FilterState::default();
        state.toggle_plot("B");
        let filtered = apply_filters(&plots, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "B");
    }

    #[test]
    fn test_plot_toggle_semantics() {
        let mut state = FilterState::default();
        state.toggle_plot("A");
        assert_eq!(state.selected_plot.as_deref(), Some("A"));
        // Re-selecting clears
        state.toggle_plot("A");
        assert_eq!(state.selected_plot, None);
        // Empty string is the external clear sentinel
        state.toggle_plot("B");
        state.toggle_plot("");
        assert_eq!(state.selected_plot, None);
    }

    #[test]
    fn test_band_toggle_round_trip() {
        let plots = vec![
            plot("A", 40.0, 6.8, 1.2, 16.0, 35.0),
            plot("B", 45.0, 6.9, 1.3, 17.0, 55.0),
        ];
        let mut state = FilterState::default();

        state.toggle_band("Medium");
        let filtered = apply_filters(&plots, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "A");

        // Clicking the same band again restores the unfiltered set
        state.toggle_band("Medium");
        assert_eq!(state.selected_band, None);
        assert_eq!(apply_filters(&plots, &state).len(), 2);

        // A different band replaces rather than stacks
        state.toggle_band("Medium");
        state.toggle_band("Very High");
        assert_eq!(state.selected_band, Some(BiomassBand::VeryHigh));
        let filtered = apply_filters(&plots, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "B");
    }

    #[test]
    fn test_area_gauge_max_switches_on_range_activation() {
        let plots = vec![
            plot("A", 40.0, 6.8, 1.2, 16.0, 35.0),
            plot("B", 60.0, 7.8, 1.3, 17.0, 36.0),
        ];

        // No range filter: reference equals the filtered total (gauge at 100%)
        let state = FilterState::default();
        let filtered = apply_filters(&plots, &state);
        let summary = summarize(&filtered, &plots, &state);
        assert_eq!(summary.total_area, 100.0);
        assert_eq!(summary.area_gauge_max, 100.0);

        // The moment one range filter leaves "All", the reference becomes
        // the unfiltered total
        let state = FilterState {
            soil_ph: RangeSelection::parse("6.5-7.0"),
            ..Default::default()
        };
        let filtered = apply_filters(&plots, &state);
        let summary = summarize(&filtered, &plots, &state);
        assert_eq!(summary.total_area, 40.0);
        assert_eq!(summary.area_gauge_max, 100.0);

        // Selection filters alone do not switch the reference
        let mut state = FilterState::default();
        state.toggle_plot("A");
        let filtered = apply_filters(&plots, &state);
        let summary = summarize(&filtered, &plots, &state);
        assert_eq!(summary.total_area, 40.0);
        assert_eq!(summary.area_gauge_max, 40.0);
    }

    #[test]
    fn test_summary_averages_and_center() {
        let plots = vec![
            plot("A", 40.0, 6.0, 1.0, 16.0, 35.0),
            plot("B", 60.0, 8.0, 2.0, 17.0, 36.0),
        ];
        let state = FilterState::default();
        let summary = summarize(&plots, &plots, &state);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_ph, 7.0);
        assert_eq!(summary.average_organic_carbon, 1.5);
        // Both test plots share the same ring, so the center is theirs
        assert_eq!(summary.map_center, plots[0].center);
    }

    #[test]
    fn test_empty_filter_result_falls_back_to_default_center() {
        let plots = vec![plot("A", 40.0, 6.8, 1.2, 16.0, 35.0)];
        let state = FilterState {
            soil_ph: RangeSelection::parse("1.0-2.0"),
            ..Default::default()
        };
        let filtered = apply_filters(&plots, &state);
        assert!(filtered.is_empty());
        let summary = summarize(&filtered, &plots, &state);
        assert_eq!(summary.map_center, DEFAULT_MAP_CENTER);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_area, 0.0);
    }
}
