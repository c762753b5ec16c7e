//! Plot query implementation against the field API.

use agm_core::plot::fetch_plots;
use agm_utils::dates;
use chrono::Local;
use log::info;

/// Fetch and normalize the plot collection for one end date, writing a
/// per-plot CSV.
///
/// One request, no retry: a failed fetch surfaces as an error and the
/// caller re-runs the command. An empty payload is not an error; the
/// output file then holds only the header row.
pub async fn run_query(end_date: Option<&str>, output: &str) -> anyhow::Result<()> {
    let end_date = match end_date {
        Some(s) => dates::parse_date(s)?,
        None => Local::now().naive_local().date(),
    };

    let client = reqwest::Client::new();
    info!("querying plots for end date {end_date}");
    let plots = fetch_plots(&client, end_date).await?;

    if plots.is_empty() {
        info!("field API returned no plots for {end_date}");
    }

    let mut lines: Vec<String> = Vec::with_capacity(plots.len() + 1);
    lines.push(
        "id,name,status,area_acres,area_hectares,latitude,longitude,biomass,soil_ph,organic_carbon,brix,yield_forecast"
            .to_string(),
    );
    for plot in &plots {
        lines.push(format!(
            "{},{},{},{:.2},{:.2},{:.5},{:.5},{:.1},{:.1},{:.2},{:.1},{:.1}",
            plot.id,
            plot.name,
            plot.status,
            plot.area_acres,
            plot.area_hectares,
            plot.center.0,
            plot.center.1,
            plot.biomass,
            plot.soil_ph,
            plot.organic_carbon,
            plot.brix,
            plot.yield_forecast
        ));
    }
    std::fs::write(output, lines.join("\n"))?;

    info!("query complete. {} plots written to {}", plots.len(), output);
    Ok(())
}
