//! Chart Plotter Module
//! Adapts bound chart descriptions to egui_plot widgets. The host runtime
//! does the actual pixel work; nothing here mutates the descriptions.

use crate::charts::{ChartKind, ChartSpec};
use crate::config::{MapViewConfig, ThemeConfig};
use egui::Color32;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

/// Intensity ramp endpoints for the map markers (0 and 100).
const RAMP_LOW: Color32 = Color32::from_rgb(254, 224, 210);
const RAMP_HIGH: Color32 = Color32::from_rgb(153, 0, 13);

/// Draws chart descriptions with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Dispatch a chart description to the matching plot routine.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec, theme: &ThemeConfig, map: &MapViewConfig) {
        match spec.kind {
            ChartKind::Line => Self::draw_line(ui, spec, theme),
            ChartKind::Bar => Self::draw_bar(ui, spec, theme),
            ChartKind::GeoScatter => Self::draw_geo(ui, spec, theme, map),
        }
    }

    /// Map an intensity in 0..=100 onto the red ramp.
    pub fn ramp_color(intensity: f64) -> Color32 {
        let t = (intensity / 100.0).clamp(0.0, 1.0) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color32::from_rgb(
            lerp(RAMP_LOW.r(), RAMP_HIGH.r()),
            lerp(RAMP_LOW.g(), RAMP_HIGH.g()),
            lerp(RAMP_LOW.b(), RAMP_HIGH.b()),
        )
    }

    fn draw_line(ui: &mut egui::Ui, spec: &ChartSpec, theme: &ThemeConfig) {
        let labels = spec.point_labels();
        let color = theme.accent_color();

        Plot::new(format!("line_{}", spec.title))
            .height(theme.chart_height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let coords: Vec<[f64; 2]> = spec.points.iter().map(|p| [p.x, p.y]).collect();

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(coords.iter().copied()))
                        .color(color)
                        .width(2.0)
                        .name(&spec.title),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(coords.iter().copied()))
                        .radius(3.0)
                        .color(color),
                );
            });
    }

    fn draw_bar(ui: &mut egui::Ui, spec: &ChartSpec, theme: &ThemeConfig) {
        let labels = spec.point_labels();
        let color = theme.accent_color();

        Plot::new(format!("bar_{}", spec.title))
            .height(theme.chart_height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = spec
                    .points
                    .iter()
                    .map(|p| Bar::new(p.x, p.y).width(0.6).name(&p.hover))
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(color.gamma_multiply(0.85))
                        .name(&spec.title),
                );
            });
    }

    /// Marker map over a fixed lon/lat viewport. One point group per region
    /// so each marker keeps its own size, ramp color, and hover name.
    fn draw_geo(ui: &mut egui::Ui, spec: &ChartSpec, theme: &ThemeConfig, map: &MapViewConfig) {
        Plot::new(format!("geo_{}", spec.title))
            .height(theme.chart_height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .include_x(map.lon_min)
            .include_x(map.lon_max)
            .include_y(map.lat_min)
            .include_y(map.lat_max)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{:.1}, {:.1}", value.x, value.y)
                } else {
                    name.to_string()
                }
            })
            .show(ui, |plot_ui| {
                for point in &spec.points {
                    let Some(marker) = point.marker else {
                        continue;
                    };
                    plot_ui.points(
                        Points::new(vec![[point.x, point.y]])
                            .radius(marker.size * 0.5)
                            .color(Self::ramp_color(marker.intensity))
                            .name(&point.hover),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_tracks_intensity_linearly() {
        assert_eq!(ChartPlotter::ramp_color(0.0), RAMP_LOW);
        assert_eq!(ChartPlotter::ramp_color(100.0), RAMP_HIGH);

        let mid = ChartPlotter::ramp_color(50.0);
        assert!(RAMP_HIGH.r() <= mid.r() && mid.r() <= RAMP_LOW.r());
        assert!(RAMP_HIGH.g() <= mid.g() && mid.g() <= RAMP_LOW.g());
    }

    #[test]
    fn ramp_clamps_out_of_band_intensity() {
        assert_eq!(ChartPlotter::ramp_color(-10.0), ChartPlotter::ramp_color(0.0));
        assert_eq!(
            ChartPlotter::ramp_color(250.0),
            ChartPlotter::ramp_color(100.0)
        );
    }
}
