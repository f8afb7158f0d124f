/// Presentation layer: egui widgets fed by `view::DashboardView`.
pub mod cards;
pub mod gauge;
pub mod panels;
pub mod plot;
pub mod weather;

use eframe::egui::{self, emath::TSTransform, Color32, CornerRadius, Margin, Shape, Stroke, Ui, Vec2};

use crate::anim::{Entrance, Slide};
use crate::color;

/// White rounded panel every section sits on.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, Color32::from(color::TRACK)))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20))
}

/// Render `add_contents` faded and shifted according to its entrance at
/// `elapsed` seconds after mount. The shift is applied to the painted shapes
/// only, so layout below the section never moves.
pub fn animated<R>(
    ui: &mut Ui,
    entrance: Entrance,
    elapsed: f64,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    if entrance.finished(elapsed) {
        return add_contents(ui);
    }
    let progress = entrance.progress(elapsed);

    let d = entrance.offset(progress);
    let offset = match entrance.slide {
        Slide::FromAbove => Vec2::new(0.0, -d),
        Slide::FromBelow => Vec2::new(0.0, d),
        Slide::FromLeft => Vec2::new(-d, 0.0),
        Slide::FromRight => Vec2::new(d, 0.0),
    };

    ui.scope(|ui: &mut Ui| {
        ui.multiply_opacity(progress);
        let start = ui.painter().add(Shape::Noop);
        let inner = add_contents(ui);
        let end = ui.painter().add(Shape::Noop);
        let layer = ui.layer_id();
        ui.ctx().graphics_mut(|g| {
            g.entry(layer)
                .transform_range(start, end, TSTransform::from_translation(offset));
        });
        inner
    })
    .inner
}
