use eframe::egui::{self, Color32, CornerRadius, Margin, Mesh, RichText, Shape, Ui};
use egui_extras::{Size, StripBuilder};

use crate::color::{self, Rgb};
use crate::view::WeatherTile;

// ---------------------------------------------------------------------------
// Weather widget
// ---------------------------------------------------------------------------

/// Blue gradient panel with one column per tile.
pub fn weather_widget(ui: &mut Ui, title: &str, tiles: &[WeatherTile]) {
    // Reserve a slot behind the content; filled once the rect is known.
    let background = ui.painter().add(Shape::Noop);

    let response = egui::Frame::new()
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20))
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(title).strong().color(Color32::WHITE));
            ui.add_space(12.0);
            StripBuilder::new(ui)
                .size(Size::exact(80.0))
                .vertical(|mut strip| {
                    strip.strip(|builder| {
                        builder
                            .sizes(Size::remainder(), tiles.len())
                            .horizontal(|mut strip| {
                                for tile in tiles {
                                    strip.cell(|ui: &mut Ui| weather_tile(ui, tile));
                                }
                            });
                    });
                });
        })
        .response;

    ui.painter()
        .set(background, gradient(response.rect, color::WEATHER_TOP, color::WEATHER_BOTTOM));
}

fn weather_tile(ui: &mut Ui, tile: &WeatherTile) {
    let caption = color::with_alpha(color::lighten(color::WEATHER_TOP, 0.8), 0.85);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(tile.icon.glyph()).size(26.0).color(Color32::WHITE));
        ui.label(
            RichText::new(&tile.value)
                .size(20.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(RichText::new(&tile.caption).small().color(caption));
    });
}

/// Diagonal top-left → bottom-right gradient over `rect`.
fn gradient(rect: egui::Rect, from: Rgb, to: Rgb) -> Shape {
    let middle = Color32::from(color::mix(from, to, 0.5));
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), Color32::from(from));
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), Color32::from(to));
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    Shape::mesh(mesh)
}
