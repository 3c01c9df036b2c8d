//! Headline Card Widgets
//! Renders the card strip: thumbnail, linked title, summary. Images are
//! fetched by the egui image loader; an unreachable URL leaves the loader's
//! placeholder in place.

use crate::config::ThemeConfig;
use crate::data::NewsCard;
use egui::RichText;

/// Draw one equal-width column per card, in input order.
pub fn draw_card_strip(ui: &mut egui::Ui, cards: &[NewsCard], theme: &ThemeConfig) {
    if cards.is_empty() {
        return;
    }

    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            draw_card(column, card, theme);
        }
    });
}

fn draw_card(ui: &mut egui::Ui, card: &NewsCard, theme: &ThemeConfig) {
    egui::Frame::none()
        .rounding(10.0)
        .stroke(egui::Stroke::new(1.0, theme.card_border_color()))
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.add(
                    egui::Image::from_uri(&card.image_url)
                        .max_height(theme.card_image_height)
                        .rounding(6.0)
                        .show_loading_spinner(true),
                );
                ui.add_space(6.0);
                ui.hyperlink_to(RichText::new(&card.title).strong().size(13.0), &card.url);
                ui.add_space(4.0);
                ui.label(RichText::new(&card.summary).size(12.0));
            });
        });
}
