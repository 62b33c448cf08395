//! Chart Components
//!
//! Canvas-rendered charts: a vitals line chart for one patient and a grouped
//! bar chart of treatment outcomes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::store::{TreatmentAnalysis, VitalsSeries};

/// Chart colors for different series
const SERIES_COLORS: [&str; 6] = [
    "#F44336", // Red (systolic)
    "#FF9800", // Orange (heart rate)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#00BCD4", // Cyan
];

const BG_COLOR: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400
const EMPTY_COLOR: &str = "#6b7280"; // gray-500

/// Vitals line chart (systolic blood pressure and heart rate over time)
#[component]
pub fn VitalsChart(
    #[prop(into)]
    series: Signal<Option<VitalsSeries>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the series changes
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_vitals(&canvas, series.as_ref());
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-56 md:h-72 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                <LegendEntry color=SERIES_COLORS[0] label="Systolic BP (mmHg)" />
                <LegendEntry color=SERIES_COLORS[1] label="Heart rate (bpm)" />
            </div>
        </div>
    }
}

/// Grouped bar chart of outcome counts per treatment
#[component]
pub fn OutcomeChart(
    #[prop(into)]
    analysis: Signal<Option<TreatmentAnalysis>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let analysis = analysis.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_outcomes(&canvas, analysis.as_ref());
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            // Legend from the server's response categories
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    analysis.get()
                        .map(|a| a.responses)
                        .unwrap_or_default()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, response)| {
                            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                            view! { <LegendEntry color=color label=response /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// One legend swatch with its label
#[component]
fn LegendEntry(
    color: &'static str,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

/// Draw the vitals series on canvas
fn draw_vitals(canvas: &HtmlCanvasElement, series: Option<&VitalsSeries>) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&BG_COLOR.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let series = match series {
        Some(s) if !s.is_empty() => s,
        _ => {
            draw_empty_message(&ctx, width, height, "No patient selected");
            return;
        }
    };

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Shared y-axis across both series
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;

    for value in series.systolic_bp.iter().chain(series.heart_rate.iter()) {
        global_min = global_min.min(*value);
        global_max = global_max.max(*value);
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // Draw grid lines and y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Samples are positioned by index; x step spans the chart
    let steps = (series.times.len().saturating_sub(1)).max(1) as f64;

    for (idx, values) in [&series.systolic_bp, &series.heart_rate].iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in values.iter().enumerate() {
            let x = margin_left + (i as f64 / steps) * chart_width;
            let y = margin_top
                + ((global_max - value) / (global_max - global_min)) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();

        // Draw points
        ctx.set_fill_style(&color.into());
        for (i, value) in values.iter().enumerate() {
            let x = margin_left + (i as f64 / steps) * chart_width;
            let y = margin_top
                + ((global_max - value) / (global_max - global_min)) * chart_height;

            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // Draw x-axis labels from the sample clock labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");

    for (i, time) in series.times.iter().enumerate() {
        let x = margin_left + (i as f64 / steps) * chart_width;
        let _ = ctx.fill_text(time, x - 15.0, height - 10.0);
    }
}

/// Draw the treatment outcome bars on canvas
fn draw_outcomes(canvas: &HtmlCanvasElement, analysis: Option<&TreatmentAnalysis>) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&BG_COLOR.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let analysis = match analysis {
        Some(a) if !a.data.is_empty() => a,
        _ => {
            draw_empty_message(&ctx, width, height, "No analysis data");
            return;
        }
    };

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max_count = analysis
        .data
        .iter()
        .flat_map(|t| t.outcomes.iter())
        .map(|o| o.value)
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_count * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // One group of bars per treatment, one bar per outcome category
    let group_count = analysis.data.len() as f64;
    let group_width = chart_width / group_count;

    for (group_idx, treatment) in analysis.data.iter().enumerate() {
        let bar_count = treatment.outcomes.len().max(1) as f64;
        // Half a bar of padding on each side of the group
        let bar_width = group_width / (bar_count + 1.0);
        let group_left = margin_left + group_idx as f64 * group_width;

        for (bar_idx, outcome) in treatment.outcomes.iter().enumerate() {
            let color = SERIES_COLORS[bar_idx % SERIES_COLORS.len()];
            let bar_height = (outcome.value as f64 / max_count) * chart_height;
            let x = group_left + (bar_idx as f64 + 0.5) * bar_width;
            let y = margin_top + chart_height - bar_height;

            ctx.set_fill_style(&color.into());
            ctx.fill_rect(x, y, bar_width * 0.85, bar_height);
        }

        // Treatment name centered under its group
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let label_x = group_left + group_width / 2.0 - treatment.name.len() as f64 * 3.0;
        let _ = ctx.fill_text(&treatment.name, label_x, height - 15.0);
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64, message: &str) {
    ctx.set_fill_style(&EMPTY_COLOR.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(message, width / 2.0 - 80.0, height / 2.0);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}
