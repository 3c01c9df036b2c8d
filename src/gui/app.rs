//! Dashboard Application
//! Builds the model and layout once at startup, then walks the layout tree
//! each frame. eframe owns the repaint loop and the pixels.

use crate::charts::ChartPlotter;
use crate::config::DashboardConfig;
use crate::gui::cards;
use crate::gui::layout::{self, LayoutTree, Pane};
use crate::gui::model::DashboardModel;
use egui::{Color32, RichText, ScrollArea};

const PANE_SPACING: f32 = 15.0;

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    layout: LayoutTree,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: DashboardConfig,
    ) -> anyhow::Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let model = DashboardModel::build()?;
        let layout = layout::compose(model)?;

        Ok(Self { config, layout })
    }

    fn draw_header(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.config.theme.header_color())
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(20.0, 18.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(&self.config.window.title)
                        .size(24.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new(
                        "Focused view: monthly ratings, article trends, sentiment & India map",
                    )
                    .size(12.0)
                    .color(Color32::from_rgb(219, 228, 250)),
                );
            });
    }

    fn draw_rows(&self, ui: &mut egui::Ui) {
        for row in &self.layout.rows {
            let gaps = row.slots.len().saturating_sub(1) as f32;
            let avail = ui.available_width() - PANE_SPACING * gaps;

            ui.horizontal_top(|ui| {
                for slot in &row.slots {
                    ui.vertical(|ui| {
                        ui.set_width(avail * slot.fraction);
                        self.draw_pane(ui, &slot.pane);
                    });
                    ui.add_space(PANE_SPACING);
                }
            });
            ui.add_space(PANE_SPACING);
        }
    }

    fn draw_pane(&self, ui: &mut egui::Ui, pane: &Pane) {
        match pane {
            Pane::Chart(spec) => {
                ui.label(RichText::new(&spec.title).size(15.0).strong());
                ui.add_space(4.0);
                ChartPlotter::draw(ui, spec, &self.config.theme, &self.config.map);
            }
            Pane::Cards { heading, cards: items } => {
                ui.label(RichText::new(heading).size(15.0).strong());
                ui.add_space(4.0);
                cards::draw_card_strip(ui, items, &self.config.theme);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.draw_header(ui);
                    ui.add_space(12.0);
                    self.draw_rows(ui);
                });
        });
    }
}
