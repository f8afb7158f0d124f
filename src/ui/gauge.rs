use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::color;
use crate::format::{card_decimals, format_number};
use crate::view::GaugeView;

// ---------------------------------------------------------------------------
// Circular AQI gauge
// ---------------------------------------------------------------------------

const DIAMETER: f32 = 128.0;
const THICKNESS: f32 = 10.0;

/// Ring gauge with the value in the middle, then the tier label and advisory.
/// `reveal` in `0..=1` scales the arc while the section animates in.
pub fn aqi_gauge(ui: &mut Ui, gauge: &GaugeView, reveal: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(DIAMETER), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = DIAMETER / 2.0 - THICKNESS / 2.0;

        painter.circle_stroke(center, radius, Stroke::new(THICKNESS, Color32::from(gauge.track)));

        let fill = gauge.fill as f32 * reveal.clamp(0.0, 1.0);
        if fill > 0.0 {
            painter.add(Shape::line(
                arc_points(center, radius, fill),
                Stroke::new(THICKNESS, Color32::from(gauge.color)),
            ));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            format_number(gauge.value, card_decimals(gauge.value)),
            FontId::proportional(28.0),
            Color32::from(color::TEXT),
        );

        ui.add_space(12.0);
        ui.label(
            RichText::new(&gauge.label)
                .strong()
                .color(Color32::from(gauge.color)),
        );
        ui.label(
            RichText::new(&gauge.advisory)
                .small()
                .color(Color32::from(color::MUTED_TEXT)),
        );
    });
}

/// Points along a clockwise arc starting at 12 o'clock covering `fraction`
/// of the circle.
fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let sweep = TAU * fraction.clamp(0.0, 1.0);
    let steps = ((64.0 * fraction).ceil() as usize).max(2);
    (0..=steps)
        .map(|i| {
            let angle = -FRAC_PI_2 + sweep * i as f32 / steps as f32;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}
