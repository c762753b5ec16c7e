//! Climate aggregation over the embedded datasets.

use agm_core::climate::ChartKind;
use agm_core::series::{aggregate, Granularity};
use log::info;

/// Bucket one embedded climate dataset by granularity and write the
/// result as CSV (key, label, then one column per schema field).
pub fn run_aggregate(kind: &str, granularity: &str, output: &str) -> anyhow::Result<()> {
    let kind = ChartKind::parse(kind)
        .ok_or_else(|| anyhow::anyhow!("unknown dataset {kind:?}; expected weather or rainfall"))?;
    let granularity = Granularity::parse(granularity).ok_or_else(|| {
        anyhow::anyhow!("unknown granularity {granularity:?}; expected daily, weekly, monthly, or yearly")
    })?;

    let schema = kind.schema();
    let points = kind.series();
    info!(
        "aggregating {} {} records at {} granularity",
        points.len(),
        kind.label(),
        granularity.label()
    );

    let buckets = aggregate(&points, schema, granularity);

    let header = {
        let mut columns = vec!["key".to_string(), "label".to_string()];
        columns.extend(schema.iter().map(|spec| spec.name.to_string()));
        columns.join(",")
    };
    let mut lines = Vec::with_capacity(buckets.len() + 1);
    lines.push(header);
    for bucket in &buckets {
        let mut columns = vec![bucket.key.clone(), bucket.label.clone()];
        columns.extend(bucket.values.iter().map(|v| format!("{v:.2}")));
        lines.push(columns.join(","));
    }
    std::fs::write(output, lines.join("\n"))?;

    info!(
        "aggregation complete. {} buckets written to {}",
        buckets.len(),
        output
    );
    Ok(())
}
