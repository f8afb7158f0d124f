use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use crate::anim::Entrance;
use crate::color;
use crate::state::AppState;
use crate::ui::{animated, card_frame, cards, gauge, plot, weather};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reset to samples").clicked() {
                state.reset_to_samples();
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.source {
            Some(src) => ui.label(format!("Snapshot: {src}")),
            None => ui.label("Built-in sample data"),
        };

        ui.separator();

        if ui
            .selectable_label(state.animations, "Animations")
            .clicked()
        {
            state.animations = !state.animations;
            state.mounted_at = None;
        }

        if let Some(msg) = &state.status_message {
            let c = if state.status_is_error {
                Color32::from(color::RED)
            } else {
                Color32::from(color::AMBER)
            };
            ui.label(RichText::new(msg).color(c));
        }
    });
}

// ---------------------------------------------------------------------------
// Dashboard body (central panel)
// ---------------------------------------------------------------------------

const SIDEBAR_WIDTH: f32 = 340.0;
const SPACING: f32 = 24.0;
const MIDDLE_ROW_HEIGHT: f32 = 480.0;

pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let now = ui.input(|i| i.time);
    let elapsed = state.elapsed(now);
    let view = &state.view;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            animated(ui, Entrance::HEADER, elapsed, |ui: &mut Ui| {
                ui.label(
                    RichText::new(&view.title)
                        .size(24.0)
                        .strong()
                        .color(Color32::from(color::TEXT)),
                );
                ui.label(RichText::new(&view.subtitle).color(Color32::from(color::MUTED_TEXT)));
            });
            ui.add_space(SPACING);

            animated(ui, Entrance::CARDS, elapsed, |ui: &mut Ui| {
                cards::stat_cards(ui, &view.cards, elapsed);
            });
            ui.add_space(SPACING);

            StripBuilder::new(ui)
                .size(Size::exact(MIDDLE_ROW_HEIGHT))
                .vertical(|mut strip| {
                    strip.strip(|builder| {
                        builder
                            .size(Size::remainder())
                            .size(Size::exact(SPACING))
                            .size(Size::exact(SIDEBAR_WIDTH))
                            .horizontal(|mut strip| {
                                strip.cell(|ui: &mut Ui| {
                                    animated(ui, Entrance::TREND, elapsed, |ui: &mut Ui| {
                                        card_frame().show(ui, |ui: &mut Ui| {
                                            plot::trend_plot(ui, &view.trend);
                                        });
                                    });
                                });
                                strip.empty();
                                strip.cell(|ui: &mut Ui| {
                                    let reveal = Entrance::SIDEBAR.progress(elapsed);
                                    animated(ui, Entrance::SIDEBAR, elapsed, |ui: &mut Ui| {
                                        card_frame().show(ui, |ui: &mut Ui| {
                                            ui.set_min_width(ui.available_width());
                                            ui.label(
                                                RichText::new("Calidad del Aire Actual")
                                                    .size(16.0)
                                                    .strong(),
                                            );
                                            ui.add_space(8.0);
                                            gauge::aqi_gauge(ui, &view.gauge, reveal);
                                        });
                                        ui.add_space(SPACING);
                                        weather::weather_widget(
                                            ui,
                                            &view.weather_title,
                                            &view.weather,
                                        );
                                    });
                                });
                            });
                    });
                });
            ui.add_space(SPACING);

            animated(ui, Entrance::DISTRICTS, elapsed, |ui: &mut Ui| {
                card_frame().show(ui, |ui: &mut Ui| {
                    ui.set_min_width(ui.available_width());
                    plot::district_plot(ui, &view.districts);
                });
            });
        });

    if !crate::anim::all_finished(elapsed) {
        ui.ctx().request_repaint();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dashboard snapshot")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON snapshot", &["json"])
        .add_filter("CSV pollution series", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
