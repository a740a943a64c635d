use egui::load::SizedTexture;
use egui::{ColorImage, TextureHandle, TextureOptions, ViewportBuilder, ViewportClass, ViewportId};

use crate::commands::Session;

/// Separate window showing the most recent chart until the user closes it
#[derive(Default)]
pub struct ChartViewer {
    texture: Option<TextureHandle>,
}

impl ChartViewer {
    /// Drop the uploaded texture so the next frame picks up a new chart
    pub fn reset(&mut self) {
        self.texture = None;
    }

    pub fn show(&mut self, ctx: &egui::Context, session: &mut Session) {
        let Some(chart) = &session.chart else {
            self.texture = None;
            return;
        };

        let texture = self
            .texture
            .get_or_insert_with(|| {
                let size = [chart.image.width as usize, chart.image.height as usize];
                ctx.load_texture(
                    "price_chart",
                    ColorImage::from_rgb(size, &chart.image.rgb),
                    TextureOptions::LINEAR,
                )
            })
            .clone();
        let size = [chart.image.width as f32, chart.image.height as f32];

        let closed = ctx.show_viewport_immediate(
            ViewportId::from_hash_of("price_chart"),
            ViewportBuilder::default()
                .with_title(chart.title.clone())
                .with_inner_size(size)
                .with_resizable(false),
            |ctx, class| {
                let draw = |ui: &mut egui::Ui| {
                    ui.image(SizedTexture::from_handle(&texture));
                };

                if matches!(class, ViewportClass::Embedded) {
                    // Backend without multi-window support
                    let mut open = true;
                    egui::Window::new(chart.title.clone())
                        .open(&mut open)
                        .resizable(false)
                        .show(ctx, draw);
                    !open
                } else {
                    egui::CentralPanel::default()
                        .frame(egui::Frame::none())
                        .show(ctx, draw);
                    ctx.input(|i| i.viewport().close_requested())
                }
            },
        );

        if closed {
            session.close_chart();
            self.texture = None;
        }
    }
}
