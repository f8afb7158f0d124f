use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

const PAGE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xF9, 0xFA, 0xFB);

pub struct AireApp {
    pub state: AppState,
}

impl AireApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for AireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .fill(PAGE_BACKGROUND)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                panels::dashboard(ui, &mut self.state);
            });
    }
}
