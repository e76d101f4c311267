//! Plotly figure encoding.
//!
//! The page hands these objects to `Plotly.react` unchanged, so the shape must
//! follow plotly.js: `{"data": [trace, ...], "layout": {...}}`.

use serde_json::{json, Value};

use crate::api::{PieChartData, ScatterChartData};

/// Encode a pie chart as a plotly.js figure.
pub fn pie_figure(chart: &PieChartData) -> Value {
    let labels: Vec<String> = chart.slices.iter().map(|s| s.class.to_string()).collect();
    let values: Vec<usize> = chart.slices.iter().map(|s| s.count).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "sort": false,
            "hovertemplate": "class=%{label}<br>counts=%{value}<extra></extra>",
        }],
        "layout": {
            "title": { "text": chart.title },
            "legend": { "title": { "text": "class" } },
        },
    })
}

/// Encode a scatter chart as a plotly.js figure, one trace per series.
pub fn scatter_figure(chart: &ScatterChartData) -> Value {
    let traces: Vec<Value> = chart
        .series
        .iter()
        .map(|series| {
            let x: Vec<f64> = series.points.iter().map(|p| p.payload_mass.value()).collect();
            let y: Vec<u8> = series.points.iter().map(|p| p.class.value()).collect();
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": series.category,
                "legendgroup": series.category,
                "x": x,
                "y": y,
                "marker": { "color": series.color },
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": chart.title },
            "xaxis": { "title": { "text": chart.x_label } },
            "yaxis": { "title": { "text": chart.y_label } },
            "legend": { "title": { "text": chart.color_label } },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OutcomeCounts;
    use crate::models::{LaunchRecord, OutcomeClass, SiteSelection};
    use crate::services::charts::{build_pie_chart, build_scatter_chart};

    #[test]
    fn test_pie_figure_shape() {
        let mut counts = OutcomeCounts::new();
        counts.insert(OutcomeClass::Failure, 1);
        counts.insert(OutcomeClass::Success, 2);
        let figure = pie_figure(&build_pie_chart(&counts, &SiteSelection::All));

        assert_eq!(figure["data"][0]["type"], "pie");
        assert_eq!(figure["data"][0]["labels"], json!(["0", "1"]));
        assert_eq!(figure["data"][0]["values"], json!([1, 2]));
        assert_eq!(
            figure["layout"]["title"]["text"],
            "Total Success and Failure Launches for All Sites"
        );
    }

    #[test]
    fn test_scatter_figure_traces() {
        let rows = vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Failure, "v1.1"),
            LaunchRecord::new("A", 3000.0, OutcomeClass::Success, "FT"),
        ];
        let refs: Vec<&LaunchRecord> = rows.iter().collect();
        let figure = scatter_figure(&build_scatter_chart(&refs, &SiteSelection::site("A")));

        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "v1.1");
        assert_eq!(traces[0]["x"], json!([500.0]));
        assert_eq!(traces[0]["y"], json!([0]));
        assert_eq!(traces[1]["marker"]["color"], "#EF553B");
        assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
        assert_eq!(figure["layout"]["title"]["text"], "Payload vs. Outcome for A");
    }

    #[test]
    fn test_empty_figures() {
        let pie = pie_figure(&build_pie_chart(&OutcomeCounts::new(), &SiteSelection::All));
        assert_eq!(pie["data"][0]["values"], json!([]));

        let scatter = scatter_figure(&build_scatter_chart(&[], &SiteSelection::All));
        assert_eq!(scatter["data"], json!([]));
    }
}
