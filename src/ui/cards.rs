use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::anim::{count_up, COUNT_UP_SECS};
use crate::color;
use crate::format::format_number;
use crate::view::StatCard;

// ---------------------------------------------------------------------------
// Stat cards row
// ---------------------------------------------------------------------------

const CARD_HEIGHT: f32 = 110.0;

/// Four equal-width cards side by side.
pub fn stat_cards(ui: &mut Ui, cards: &[StatCard], elapsed: f64) {
    StripBuilder::new(ui)
        .size(Size::exact(CARD_HEIGHT))
        .vertical(|mut strip| {
            strip.strip(|builder| {
                builder
                    .sizes(Size::remainder(), cards.len())
                    .horizontal(|mut strip| {
                        for card in cards {
                            strip.cell(|ui: &mut Ui| stat_card(ui, card, elapsed));
                        }
                    });
            });
        });
}

fn stat_card(ui: &mut Ui, card: &StatCard, elapsed: f64) {
    super::card_frame()
        .inner_margin(Margin::same(16))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_size(ui.available_size());
            ui.horizontal_top(|ui: &mut Ui| {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(&card.title)
                            .small()
                            .color(Color32::from(color::AXIS)),
                    );
                    ui.horizontal(|ui: &mut Ui| {
                        let text = if elapsed >= COUNT_UP_SECS {
                            card.formatted_value()
                        } else {
                            format_number(count_up(card.value, elapsed), card.decimals)
                        };
                        ui.label(
                            RichText::new(text)
                                .size(24.0)
                                .strong()
                                .color(Color32::from(color::TEXT)),
                        );
                        if let Some(delta) = &card.delta {
                            ui.label(RichText::new(delta.format()).color(Color32::from(delta.color())));
                        }
                    });
                    ui.label(
                        RichText::new(&card.description)
                            .small()
                            .color(Color32::from(color::MUTED_TEXT)),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui: &mut Ui| {
                    egui::Frame::new()
                        .fill(Color32::from(card.accent))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(Margin::same(10))
                        .show(ui, |ui: &mut Ui| {
                            ui.label(
                                RichText::new(card.icon.glyph())
                                    .size(20.0)
                                    .color(Color32::WHITE),
                            );
                        });
                });
            });
        });
}
