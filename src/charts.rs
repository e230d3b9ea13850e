//! Inline-SVG chart renderers for the prevalence and clinical-pipeline
//! datasets. The datasets are embedded JSON, parsed once at first use; the
//! rest of the page only hands them to these components.

use leptos::prelude::*;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrevalencePoint {
    pub age_band: String,
    /// Cases per 1,000 people in the age band.
    pub risk: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRow {
    pub therapy_class: String,
    pub phase1: u32,
    pub phase2: u32,
    pub phase3: u32,
}

impl PipelineRow {
    pub fn total(&self) -> u32 {
        self.phase1 + self.phase2 + self.phase3
    }

    pub fn phases(&self) -> [u32; 3] {
        [self.phase1, self.phase2, self.phase3]
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChartData {
    pub prevalence: Vec<PrevalencePoint>,
    pub pipeline: Vec<PipelineRow>,
}

impl ChartData {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

const EMBEDDED_DATA: &str = include_str!("../assets/chart_data.json");

fn chart_data() -> &'static ChartData {
    static DATA: OnceLock<ChartData> = OnceLock::new();
    DATA.get_or_init(|| {
        ChartData::parse(EMBEDDED_DATA).expect("embedded chart_data.json is malformed")
    })
}

const PHASE_LABELS: [&str; 3] = ["Fase 1", "Fase 2", "Fase 3"];
const PHASE_COLORS: [&str; 3] = ["#F2CC8F", "#81B29A", "#3D405B"];
const BAR_COLOR: &str = "#81B29A";
const AXIS_COLOR: &str = "#9ca3af";
const LABEL_COLOR: &str = "#6b7280";

/// Smallest whole-number axis ceiling that covers `max`, never zero.
fn axis_ceiling(max: f64) -> f64 {
    max.ceil().max(1.0)
}

/// Largest stacked total across rows, floored at 1 so scales stay finite
/// on an all-zero dataset.
fn pipeline_max_total(rows: &[PipelineRow]) -> u32 {
    rows.iter().map(PipelineRow::total).max().unwrap_or(0).max(1)
}

/// Horizontal (offset, width) span of each phase segment of a stacked bar,
/// scaled so `max_total` fills `plot_width`.
fn stacked_spans(row: &PipelineRow, max_total: u32, plot_width: f64) -> [(f64, f64); 3] {
    let unit = plot_width / max_total as f64;
    let mut x = 0.0;
    row.phases().map(|count| {
        let span = (x, count as f64 * unit);
        x += count as f64 * unit;
        span
    })
}

/// Vertical bar chart of prevalence by age band, with native hover tooltips.
#[component]
pub fn PrevalenceChart() -> impl IntoView {
    let points = &chart_data().prevalence;

    let width = 480.0;
    let height = 300.0;
    let (left, right, top, bottom) = (48.0, 12.0, 16.0, 40.0);
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;

    let max = axis_ceiling(points.iter().fold(0.0f64, |acc, p| acc.max(p.risk)));
    let band = plot_w / points.len() as f64;

    let gridlines = (0..=4)
        .map(|i| {
            let value = max * i as f64 / 4.0;
            let y = top + plot_h - plot_h * i as f64 / 4.0;
            view! {
                <line
                    x1=left.to_string() y1=y.to_string()
                    x2=(left + plot_w).to_string() y2=y.to_string()
                    stroke=AXIS_COLOR stroke-width="0.5" stroke-dasharray="3 3"
                />
                <text
                    x=(left - 6.0).to_string() y=(y + 3.0).to_string()
                    text-anchor="end" font-size="10" fill=LABEL_COLOR
                >
                    {format!("{value:.0}")}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let bar_w = band * 0.6;
            let bar_h = plot_h * point.risk / max;
            let x = left + band * i as f64 + (band - bar_w) / 2.0;
            let y = top + plot_h - bar_h;
            let tooltip = format!("{}: {:.1} casos por 1.000", point.age_band, point.risk);
            view! {
                <rect
                    x=x.to_string() y=y.to_string()
                    width=bar_w.to_string() height=bar_h.to_string()
                    rx="3" fill=BAR_COLOR
                >
                    <title>{tooltip}</title>
                </rect>
                <text
                    x=(x + bar_w / 2.0).to_string() y=(top + plot_h + 16.0).to_string()
                    text-anchor="middle" font-size="11" fill=LABEL_COLOR
                >
                    {point.age_band.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            viewBox=format!("0 0 {width} {height}")
            role="img"
            aria-label="Prevalencia por grupo de edad"
            class="w-full h-auto"
        >
            {gridlines}
            {bars}
            <text
                x=(left + plot_w / 2.0).to_string() y=(height - 6.0).to_string()
                text-anchor="middle" font-size="12" fill=LABEL_COLOR
            >
                "Edad (años), casos por 1.000 personas"
            </text>
        </svg>
    }
}

/// Horizontal stacked bar chart of active clinical trials per therapy class
/// and phase, with a phase legend and hover tooltips.
#[component]
pub fn PipelineChart() -> impl IntoView {
    let rows = &chart_data().pipeline;

    let width = 480.0;
    let row_h = 40.0;
    let (left, right, top) = (140.0, 16.0, 34.0);
    let plot_w = width - left - right;
    let height = top + row_h * rows.len() as f64 + 28.0;
    let max_total = pipeline_max_total(rows);

    let legend = PHASE_LABELS
        .iter()
        .zip(PHASE_COLORS)
        .enumerate()
        .map(|(i, (label, color))| {
            let x = left + i as f64 * 90.0;
            view! {
                <rect x=x.to_string() y="8" width="12" height="12" rx="2" fill=color />
                <text x=(x + 17.0).to_string() y="18" font-size="12" fill=LABEL_COLOR>
                    {*label}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let y = top + row_h * i as f64;
            let bar_h = row_h * 0.55;
            let spans = stacked_spans(row, max_total, plot_w);
            let segments = spans
                .into_iter()
                .zip(row.phases())
                .zip(PHASE_LABELS.iter().zip(PHASE_COLORS))
                .map(|(((offset, seg_w), count), (label, color))| {
                    let tooltip = format!("{}, {label}: {count} ensayos", row.therapy_class);
                    view! {
                        <rect
                            x=(left + offset).to_string() y=y.to_string()
                            width=seg_w.to_string() height=bar_h.to_string()
                            fill=color
                        >
                            <title>{tooltip}</title>
                        </rect>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <text
                    x=(left - 8.0).to_string() y=(y + bar_h / 2.0 + 4.0).to_string()
                    text-anchor="end" font-size="11" fill=LABEL_COLOR
                >
                    {row.therapy_class.clone()}
                </text>
                {segments}
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            viewBox=format!("0 0 {width} {height}")
            role="img"
            aria-label="Pipeline de ensayos clínicos"
            class="w-full h-auto"
        >
            {legend}
            {bars}
            <text
                x=(left + plot_w / 2.0).to_string() y=(height - 8.0).to_string()
                text-anchor="middle" font-size="12" fill=LABEL_COLOR
            >
                "Número de ensayos clínicos activos"
            </text>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_parses_and_is_ordered() {
        let data = ChartData::parse(EMBEDDED_DATA).unwrap();
        assert_eq!(data.prevalence.len(), 5);
        assert_eq!(data.pipeline.len(), 5);
        // Prevalence rises monotonically with age in this dataset.
        for pair in data.prevalence.windows(2) {
            assert!(pair[0].risk < pair[1].risk);
        }
        assert_eq!(data.pipeline[0].therapy_class, "Terapias Génicas");
    }

    #[test]
    fn rejects_malformed_dataset() {
        assert!(ChartData::parse(r#"{ "prevalence": [] }"#).is_err());
        assert!(ChartData::parse(r#"{ "prevalence": [{ "ageBand": "80+" }], "pipeline": [] }"#)
            .is_err());
    }

    #[test]
    fn max_total_spans_the_widest_row() {
        let data = ChartData::parse(EMBEDDED_DATA).unwrap();
        assert_eq!(pipeline_max_total(&data.pipeline), 16);
        assert_eq!(pipeline_max_total(&[]), 1);
    }

    #[test]
    fn stacked_spans_are_contiguous_and_scaled() {
        let row = PipelineRow {
            therapy_class: "x".to_string(),
            phase1: 2,
            phase2: 1,
            phase3: 1,
        };
        let spans = stacked_spans(&row, 8, 320.0);
        assert_eq!(spans[0], (0.0, 80.0));
        assert_eq!(spans[1], (80.0, 40.0));
        assert_eq!(spans[2], (120.0, 40.0));
        let covered: f64 = spans.iter().map(|(_, w)| w).sum();
        assert_eq!(covered, 320.0 * row.total() as f64 / 8.0);
    }

    #[test]
    fn axis_ceiling_never_collapses_to_zero() {
        assert_eq!(axis_ceiling(9.3), 10.0);
        assert_eq!(axis_ceiling(0.0), 1.0);
        assert_eq!(axis_ceiling(4.0), 4.0);
    }
}
