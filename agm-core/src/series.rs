use agm_utils::dates::{first_of_month, month_key, week_start};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// How one field is reduced within a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Arithmetic mean across bucket members (rate-like fields).
    Average,
    /// Last chronological member's value (cumulative totals; never summed).
    Last,
    /// Maximum across bucket members (peak fields).
    Max,
}

/// Binds one series field name to its reduction policy.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub policy: FieldPolicy,
}

/// Per-domain field table consulted by the generic reduction routine.
pub type SeriesSchema = &'static [FieldSpec];

/// One dated record; `values` aligns index-for-index with the schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

/// The reduced summary record for one granularity-defined time window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesBucket {
    /// Stable bucket key: exact date, week-start date, or "YYYY-MM".
    pub key: String,
    /// Display label for chart axes.
    pub label: String,
    /// Underlying date used for output ordering.
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

/// The temporal bucketing unit selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    /// Selector value / display label.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
            Granularity::Yearly => "Yearly",
        }
    }

    /// Parse a selector value, case-insensitively.
    pub fn parse(value: &str) -> Option<Granularity> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Bucket a series by granularity and reduce each bucket per the schema.
///
/// Input order is never assumed: everything except the daily
/// fewer-than-two case sorts ascending by date before bucketing, and the
/// output is ascending by underlying bucket date.
///
/// Two granularities intentionally do not bucket: daily is a "most recent
/// day vs. prior day" comparison view (exactly the last two records), and
/// yearly passes every record through unreduced. Downstream displays
/// depend on both behaviors.
pub fn aggregate(
    points: &[SeriesPoint],
    schema: SeriesSchema,
    granularity: Granularity,
) -> Vec<SeriesBucket> {
    match granularity {
        Granularity::Daily => {
            if points.len() < 2 {
                // Too little data to compare: pass through untouched.
                return points.iter().map(passthrough_bucket).collect();
            }
            let mut sorted = points.to_vec();
            sorted.sort_by_key(|p| p.date);
            sorted[sorted.len() - 2..]
                .iter()
                .map(passthrough_bucket)
                .collect()
        }
        Granularity::Yearly => {
            let mut sorted = points.to_vec();
            sorted.sort_by_key(|p| p.date);
            sorted.iter().map(passthrough_bucket).collect()
        }
        Granularity::Weekly => reduce_buckets(
            points,
            schema,
            |d| week_start(d),
            |d| d.format("%b %d").to_string(),
            |d| d.format("%Y-%m-%d").to_string(),
        ),
        Granularity::Monthly => reduce_buckets(
            points,
            schema,
            |d| first_of_month(d),
            |d| d.format("%b %Y").to_string(),
            |d| month_key(d),
        ),
    }
}

fn passthrough_bucket(point: &SeriesPoint) -> SeriesBucket {
    SeriesBucket {
        key: point.date.format("%Y-%m-%d").to_string(),
        label: point.date.format("%b %d").to_string(),
        date: point.date,
        values: point.values.clone(),
    }
}

fn reduce_buckets(
    points: &[SeriesPoint],
    schema: SeriesSchema,
    bucket_date: fn(&NaiveDate) -> NaiveDate,
    label: fn(&NaiveDate) -> String,
    key: fn(&NaiveDate) -> String,
) -> Vec<SeriesBucket> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date);

    // BTreeMap keys keep buckets ascending; members keep chronological
    // order within each bucket, so Last reads the final entry.
    let mut buckets: BTreeMap<NaiveDate, Vec<&SeriesPoint>> = BTreeMap::new();
    for point in &sorted {
        buckets.entry(bucket_date(&point.date)).or_default().push(point);
    }

    buckets
        .into_iter()
        .map(|(date, members)| {
            let values = schema
                .iter()
                .enumerate()
                .map(|(index, spec)| reduce_field(&members, index, spec.policy))
                .collect();
            SeriesBucket {
                key: key(&date),
                label: label(&date),
                date,
                values,
            }
        })
        .collect()
}

fn reduce_field(members: &[&SeriesPoint], index: usize, policy: FieldPolicy) -> f64 {
    match policy {
        FieldPolicy::Average => {
            members.iter().map(|p| p.values[index]).sum::<f64>() / members.len() as f64
        }
        FieldPolicy::Last => members.last().map_or(0.0, |p| p.values[index]),
        FieldPolicy::Max => members
            .iter()
            .map(|p| p.values[index])
            .fold(f64::MIN, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SCHEMA: SeriesSchema = &[
        FieldSpec {
            name: "rate",
            policy: FieldPolicy::Average,
        },
        FieldSpec {
            name: "cumulative",
            policy: FieldPolicy::Last,
        },
        FieldSpec {
            name: "peak",
            policy: FieldPolicy::Max,
        },
    ];

    fn point(y: i32, m: u32, d: u32, values: &[f64]) -> SeriesPoint {
        SeriesPoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_daily_with_fewer_than_two_records_passes_through() {
        let empty: Vec<SeriesPoint> = Vec::new();
        assert!(aggregate(&empty, SCHEMA, Granularity::Daily).is_empty());

        let single = vec![point(2024, 6, 3, &[1.0, 2.0, 3.0])];
        let out = aggregate(&single, SCHEMA, Granularity::Daily);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, single[0].date);
        assert_eq!(out[0].values, single[0].values);
    }

    #[test]
    fn test_daily_returns_the_two_most_recent_records() {
        // Deliberately unordered input
        let points = vec![
            point(2024, 6, 10, &[3.0, 30.0, 3.0]),
            point(2024, 6, 1, &[1.0, 10.0, 1.0]),
            point(2024, 6, 20, &[4.0, 40.0, 4.0]),
            point(2024, 6, 5, &[2.0, 20.0, 2.0]),
        ];
        let out = aggregate(&points, SCHEMA, Granularity::Daily);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(out[1].date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(out[1].values, vec![4.0, 40.0, 4.0]);
    }

    #[test]
    fn test_yearly_is_a_sorted_unreduced_permutation() {
        let points = vec![
            point(2024, 3, 15, &[2.0, 20.0, 2.0]),
            point(2023, 11, 2, &[1.0, 10.0, 1.0]),
            point(2024, 7, 9, &[3.0, 30.0, 3.0]),
        ];
        let out = aggregate(&points, SCHEMA, Granularity::Yearly);
        assert_eq!(out.len(), points.len());
        assert!(out.windows(2).all(|w| w[0].date < w[1].date));
        // No field mutated
        assert_eq!(out[0].values, vec![1.0, 10.0, 1.0]);
        assert_eq!(out[1].values, vec![2.0, 20.0, 2.0]);
        assert_eq!(out[2].values, vec![3.0, 30.0, 3.0]);
    }

    #[test]
    fn test_weekly_key_is_the_preceding_sunday() {
        // Wednesday 2024-06-12 buckets under Sunday 2024-06-09
        let points = vec![point(2024, 6, 12, &[1.0, 10.0, 1.0])];
        let out = aggregate(&points, SCHEMA, Granularity::Weekly);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key, "2024-06-09");
        assert_eq!(out[0].label, "Jun 09");
        assert_eq!(out[0].date, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    }

    #[test]
    fn test_weekly_mixed_reduction_policies() {
        // Three records in one week (Sun Jun 9 .. Sat Jun 15), unordered
        let points = vec![
            point(2024, 6, 14, &[6.0, 300.0, 2.0]),
            point(2024, 6, 10, &[2.0, 100.0, 9.0]),
            point(2024, 6, 12, &[4.0, 200.0, 5.0]),
        ];
        let out = aggregate(&points, SCHEMA, Granularity::Weekly);
        assert_eq!(out.len(), 1);
        // rate: mean of 2, 4, 6
        assert_eq!(out[0].values[0], 4.0);
        // cumulative: last chronological member (Jun 14), not a sum
        assert_eq!(out[0].values[1], 300.0);
        // peak: maximum across members
        assert_eq!(out[0].values[2], 9.0);
    }

    #[test]
    fn test_weekly_output_is_ascending_with_unique_keys() {
        let points = vec![
            point(2024, 6, 25, &[1.0, 10.0, 1.0]),
            point(2024, 6, 3, &[2.0, 20.0, 2.0]),
            point(2024, 6, 12, &[3.0, 30.0, 3.0]),
            point(2024, 6, 13, &[4.0, 40.0, 4.0]),
        ];
        let out = aggregate(&points, SCHEMA, Granularity::Weekly);
        assert_eq!(out.len(), 3);
        assert!(out.windows(2).all(|w| w[0].date < w[1].date));
        let mut keys: Vec<&str> = out.iter().map(|b| b.key.as_str()).collect();
        keys.dedup();
        assert_eq!(keys.len(), out.len());
    }

    #[test]
    fn test_monthly_key_and_label() {
        let points = vec![
            point(2024, 6, 3, &[2.0, 100.0, 1.0]),
            point(2024, 6, 28, &[4.0, 200.0, 7.0]),
            point(2024, 7, 1, &[6.0, 300.0, 2.0]),
        ];
        let out = aggregate(&points, SCHEMA, Granularity::Monthly);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].key, "2024-06");
        assert_eq!(out[0].label, "Jun 2024");
        assert_eq!(out[0].values, vec![3.0, 200.0, 7.0]);
        assert_eq!(out[1].key, "2024-07");
        assert_eq!(out[1].label, "Jul 2024");
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!(Granularity::parse("weekly"), Some(Granularity::Weekly));
        assert_eq!(Granularity::parse("Monthly"), Some(Granularity::Monthly));
        assert_eq!(Granularity::parse("DAILY"), Some(Granularity::Daily));
        assert_eq!(Granularity::parse("hourly"), None);
    }
}
