//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart and map renderers live in `assets/js/*.js`. Each asset assigns
//! its render function directly onto `window`, so evaluating the bundle
//! once is the whole setup; readiness of the external d3/Leaflet globals
//! is checked at render time, not at load time.

// Embed the render bundle at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static PLOT_MAP_JS: &str = include_str!("../assets/js/plot-map.js");
static GAUGE_JS: &str = include_str!("../assets/js/gauge.js");
static TREEMAP_JS: &str = include_str!("../assets/js/treemap.js");

/// Evaluate JS inside an IIFE, swallowing exceptions so a bad chart
/// call can never unwind into the WASM side.
fn eval_guarded(code: &str) {
    let wrapped =
        format!("(function() {{ try {{ {code} }} catch (e) {{ console.error('[AGM]', e); }} }})();");
    let _ = js_sys::eval(&wrapped);
}

/// Install the embedded render functions. Idempotent; each app calls it
/// from its mount effect. The bundle only defines `window.*` functions,
/// so it does not need d3 or Leaflet to have loaded yet.
pub fn init_charts() {
    let bundle = [TOOLTIP_JS, LINE_CHART_JS, PLOT_MAP_JS, GAUGE_JS, TREEMAP_JS].join("\n");
    eval_guarded(&format!(
        "if (!window.__agmChartsReady) {{\n{bundle}\nwindow.__agmChartsReady = true;\n}}"
    ));
}

/// Clear the target, then draw once the render function, the external
/// library it depends on, and the container element are all present.
/// The 100ms poll covers CDN script tags finishing after the WASM
/// module has already mounted.
fn render_when_ready(
    function_name: &str,
    library_global: &str,
    container_id: &str,
    data_json: &str,
    config_json: &str,
) {
    destroy_chart(container_id);
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    eval_guarded(&format!(
        r#"
        var poll = setInterval(function() {{
            if (window.__agmChartsReady &&
                typeof window.{function_name} === 'function' &&
                typeof {library_global} !== 'undefined' &&
                document.getElementById('{container_id}')) {{
                clearInterval(poll);
                try {{
                    window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                }} catch (e) {{ console.error('[AGM] {function_name} failed:', e); }}
            }}
        }}, 100);
        "#
    ));
}

/// Render a time-series line chart (weather, rainfall).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", "d3", container_id, data_json, config_json);
}

/// Render the plot boundary map (Leaflet polygons).
pub fn render_plot_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPlotMap", "L", container_id, data_json, config_json);
}

/// Render a radial gauge (area, pH, organic carbon).
pub fn render_gauge(container_id: &str, config_json: &str) {
    render_when_ready("renderGauge", "d3", container_id, "[]", config_json);
}

/// Render the plot treemap (area-weighted, biomass-band colored).
pub fn render_treemap(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderTreemap", "d3", container_id, data_json, config_json);
}

/// Remove whatever a previous render left in the container. Runs before
/// every render so a stale chart never lingers behind a slow poll.
pub fn destroy_chart(container_id: &str) {
    eval_guarded(&format!(
        "var el = document.getElementById('{container_id}'); if (el) el.innerHTML = '';"
    ));
}

/// Full page reload: the only recovery path after a failed fetch.
pub fn reload_page() {
    eval_guarded("window.location.reload();");
}
