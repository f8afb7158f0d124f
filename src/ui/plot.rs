use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{uniform_grid_spacer, Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::format::format_number;
use crate::view::{DistrictChart, TrendChart};

const PLOT_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Shared axis helpers
// ---------------------------------------------------------------------------

/// Category label for an integer grid mark, empty between categories.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let v = mark.value;
    if v.fract().abs() > 1e-6 || v < 0.0 {
        return String::new();
    }
    labels.get(v as usize).cloned().unwrap_or_default()
}

/// Nearest category for a hovered x coordinate.
fn category_at<'a>(labels: &'a [String], x: f64) -> Option<&'a str> {
    let i = x.round();
    if i < 0.0 {
        return None;
    }
    labels.get(i as usize).map(String::as_str)
}

// ---------------------------------------------------------------------------
// 24 h pollution trend (area chart)
// ---------------------------------------------------------------------------

pub fn trend_plot(ui: &mut Ui, chart: &TrendChart) {
    ui.label(RichText::new(&chart.title).size(16.0).strong());
    ui.add_space(8.0);

    let axis_labels = chart.labels.clone();
    let hover_labels = chart.labels.clone();

    Plot::new("trend_plot")
        .height(PLOT_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_background(false)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .legend(Legend::default())
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| category_label(&axis_labels, mark))
        .label_formatter(move |name, point| {
            let time = category_at(&hover_labels, point.x).unwrap_or("");
            if name.is_empty() {
                time.to_string()
            } else {
                format!("{name}\n{time}: {}", format_number(point.y, 1))
            }
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();

                let line = Line::new(points)
                    .name(&series.name)
                    .color(Color32::from(series.color))
                    .fill(0.0)
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Per-district comparison (grouped bars)
// ---------------------------------------------------------------------------

const BAR_WIDTH: f64 = 0.35;

pub fn district_plot(ui: &mut Ui, chart: &DistrictChart) {
    ui.label(RichText::new(&chart.title).size(16.0).strong());
    ui.add_space(8.0);

    let axis_labels: Vec<String> = chart.bars.iter().map(|b| b.name.clone()).collect();

    let value_bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::new(i as f64 - BAR_WIDTH / 2.0, b.value)
                .width(BAR_WIDTH)
                .name(&b.name)
                .fill(Color32::from(chart.value_color))
        })
        .collect();
    let target_bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::new(i as f64 + BAR_WIDTH / 2.0, b.target)
                .width(BAR_WIDTH)
                .name(&b.name)
                .fill(Color32::from(chart.target_color))
        })
        .collect();

    Plot::new("district_plot")
        .height(PLOT_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_background(false)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .legend(Legend::default())
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| category_label(&axis_labels, mark))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(value_bars)
                    .name("Medición")
                    .color(Color32::from(chart.value_color)),
            );
            plot_ui.bar_chart(
                BarChart::new(target_bars)
                    .name("Meta")
                    .color(Color32::from(chart.target_color)),
            );
        });

    let over: Vec<&str> = chart.exceeding().map(|b| b.name.as_str()).collect();
    let summary = format!(
        "{} de {} comunas superan la meta",
        over.len(),
        chart.bars.len()
    );
    let tint = if over.is_empty() { color::GREEN } else { color::RED };
    ui.label(RichText::new(summary).color(Color32::from(tint)));
    if !over.is_empty() {
        ui.label(
            RichText::new(over.join(", "))
                .small()
                .color(Color32::from(color::MUTED_TEXT)),
        );
    }
}
