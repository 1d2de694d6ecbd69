//! Standalone interactive scatter documents.
//!
//! The figure is embedded as plotly JSON; the page's only external
//! reference is the hosted plotly.js bundle.

use serde_json::{Value, json};

use crate::frame::Column;

/// Hosted plotly.js bundle loaded by every document.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const DIV_ID: &str = "tabviz-scatter";
const GRID: &str = "#ebf0f8";

/// Plotly figure JSON for a marker-only scatter of `y` against `x`.
pub fn scatter_figure(x: &Column, y: &Column, title: &str, x_title: &str, y_title: &str) -> Value {
    json!({
        "data": [{
            "type": "scatter",
            "mode": "markers",
            "x": x.to_json_values(),
            "y": y.to_json_values(),
            "hovertemplate": format!("{x_title}=%{{x}}<br>{y_title}=%{{y}}<extra></extra>"),
        }],
        "layout": {
            "title": { "text": title },
            "xaxis": { "title": { "text": x_title }, "gridcolor": GRID },
            "yaxis": { "title": { "text": y_title }, "gridcolor": GRID },
            "plot_bgcolor": "#ffffff",
            "paper_bgcolor": "#ffffff",
        },
        "config": { "responsive": true },
    })
}

/// Full HTML page rendering `figure` into a single div.
pub fn document(title: &str, figure: &Value) -> String {
    // `</` inside a script block would end it early
    let payload = figure.to_string().replace("</", "<\\/");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{PLOTLY_CDN}" charset="utf-8"></script>
</head>
<body>
    <div id="{DIV_ID}" style="width: 100%; height: 100vh;"></div>
    <script>
        const figure = {payload};
        Plotly.newPlot("{DIV_ID}", figure.data, figure.layout, figure.config);
    </script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_carries_values_and_titles() {
        let fig = scatter_figure(
            &Column::Numeric(vec![1.0, f64::NAN]),
            &Column::from(vec!["a", "b"]),
            "T",
            "x",
            "y",
        );
        assert_eq!(fig["data"][0]["x"], json!([1.0, null]));
        assert_eq!(fig["data"][0]["y"], json!(["a", "b"]));
        assert_eq!(fig["layout"]["title"]["text"], "T");
        assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "x");
    }

    #[test]
    fn document_references_only_the_cdn() {
        let fig = scatter_figure(
            &Column::Numeric(vec![1.0]),
            &Column::Numeric(vec![2.0]),
            "Interactive Scatter Plot",
            "x",
            "y",
        );
        let html = document("Interactive Scatter Plot", &fig);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN));
        assert_eq!(html.matches("src=").count(), 1);
        assert!(html.contains("<title>Interactive Scatter Plot</title>"));
    }

    #[test]
    fn hostile_text_is_escaped() {
        let fig = scatter_figure(
            &Column::from(vec!["</script><b>"]),
            &Column::Numeric(vec![0.0]),
            "<T>",
            "x",
            "y",
        );
        let html = document("<T>", &fig);
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<title>&lt;T&gt;</title>"));
    }
}
