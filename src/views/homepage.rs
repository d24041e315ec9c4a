//! Homepage shell: a header and one container per chart panel.
//!
//! The panels are empty mount points. Each carries the API route that
//! feeds it in a `data-endpoint` attribute; drawing the chart is left to
//! whatever client code attaches to the mount point.

pub const TITLE: &str = "Interactive Data Visualizations";
pub const SUBTITLE: &str = "Explore and analyze data through interactive charts";

const STYLESHEET: &str = "\
body { margin: 0; font-family: sans-serif; background: #f5f7fa; color: #1f2933; }
.header { padding: 2rem; text-align: center; background: #1f4e79; color: #fff; }
.visualization-section { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 1.5rem; padding: 2rem; }
.visualization { background: #fff; border-radius: 8px; padding: 1rem; min-height: 320px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1); }";

/// The four chart panels, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPanel {
    BarChart,
    ConsBar,
    HistChart,
    LineChart,
}

impl ChartPanel {
    pub const ALL: [ChartPanel; 4] = [
        ChartPanel::BarChart,
        ChartPanel::ConsBar,
        ChartPanel::HistChart,
        ChartPanel::LineChart,
    ];

    /// DOM id of the mount point.
    pub fn mount_id(self) -> &'static str {
        match self {
            ChartPanel::BarChart => "bar-chart",
            ChartPanel::ConsBar => "constrained-bar-chart",
            ChartPanel::HistChart => "histogram-chart",
            ChartPanel::LineChart => "line-chart",
        }
    }

    /// Component name, exposed as `data-chart`.
    pub fn component(self) -> &'static str {
        match self {
            ChartPanel::BarChart => "BarChart",
            ChartPanel::ConsBar => "ConsBar",
            ChartPanel::HistChart => "HistChart",
            ChartPanel::LineChart => "LineChart",
        }
    }

    /// API route the panel reads its data from.
    pub fn endpoint(self) -> &'static str {
        match self {
            ChartPanel::BarChart => "/api/v1/charts/count-bar",
            ChartPanel::ConsBar => "/api/v1/charts/constrained-bar",
            ChartPanel::HistChart => "/api/v1/charts/grouped-histogram",
            ChartPanel::LineChart => "/api/v1/charts/count-line",
        }
    }
}

/// Render the complete homepage document.
pub fn render() -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(TITLE)));
    html.push_str(&format!("<style>\n{STYLESHEET}\n</style>\n"));
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"homepage\">\n");
    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(TITLE)));
    html.push_str(&format!("<p>{}</p>\n", escape(SUBTITLE)));
    html.push_str("</header>\n");

    html.push_str("<section class=\"visualization-section\">\n");
    for panel in ChartPanel::ALL {
        html.push_str(&format!(
            "<div class=\"visualization\"><div id=\"{}\" class=\"chart\" data-chart=\"{}\" data-endpoint=\"{}\"></div></div>\n",
            escape(panel.mount_id()),
            escape(panel.component()),
            escape(panel.endpoint()),
        ));
    }
    html.push_str("</section>\n");
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
