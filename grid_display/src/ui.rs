// ui.rs - eframe front end: tick clock, R to reseed, field painted as a texture

use eframe::egui;
use egui::{Color32, FontId, Rect, TextureHandle, TextureOptions};
use std::time::{Duration, Instant};

use conway::Simulator;

use crate::pixels;

const OVERLAY: &str = "press R to reset world";

pub struct GridApp {
    sim: Simulator,
    texture: Option<TextureHandle>,
    pixels: Vec<u8>,
    last_update: Instant,
    update_interval: Duration,
    reseed_requested: bool,
    dirty: bool,
}

/// A fresh press of R. Auto-repeat while the key is held does not count.
fn is_reseed_press(key: egui::Key, pressed: bool, repeat: bool) -> bool {
    key == egui::Key::R && pressed && !repeat
}

fn reseed_pressed(input: &egui::InputState) -> bool {
    input.events.iter().any(|event| match event {
        egui::Event::Key { key, pressed, repeat, .. } => is_reseed_press(*key, *pressed, *repeat),
        _ => false,
    })
}

impl GridApp {
    pub fn new(sim: Simulator, ticks_per_second: u32) -> Self {
        Self {
            sim,
            texture: None,
            pixels: Vec::new(),
            last_update: Instant::now(),
            update_interval: Duration::from_secs(1) / ticks_per_second.max(1),
            reseed_requested: false,
            dirty: true,
        }
    }

    /// Advance, then apply a pending reseed. Rendering follows in `update`.
    fn tick(&mut self) {
        self.sim.advance();

        if std::mem::take(&mut self.reseed_requested) {
            if let Err(err) = self.sim.reseed() {
                tracing::warn!(%err, "reseed rejected, keeping current world");
            }
        }
        self.dirty = true;
    }

    /// Re-uploads the field only when a tick changed it since the last frame.
    fn upload(&mut self, ctx: &egui::Context) -> egui::TextureId {
        if let Some(texture) = self.texture.as_ref().filter(|_| !self.dirty) {
            return texture.id();
        }
        self.dirty = false;

        let world = self.sim.world();
        pixels::write_pixels(world.cells(), &mut self.pixels);
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [world.width(), world.height()],
            &self.pixels,
        );

        match &mut self.texture {
            Some(texture) => {
                texture.set(image, TextureOptions::NEAREST);
                texture.id()
            }
            None => {
                let texture = ctx.load_texture("world", image, TextureOptions::NEAREST);
                let id = texture.id();
                self.texture = Some(texture);
                id
            }
        }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(reseed_pressed) {
            self.reseed_requested = true;
        }

        if self.last_update.elapsed() >= self.update_interval {
            self.tick();
            self.last_update = Instant::now();
        }

        let texture_id = self.upload(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                painter.image(
                    texture_id,
                    rect,
                    Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
                painter.text(
                    rect.min,
                    egui::Align2::LEFT_TOP,
                    OVERLAY,
                    FontId::monospace(12.0),
                    Color32::WHITE,
                );
            });

        // Keep the clock running between input events
        ctx.request_repaint_after(self.update_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_fresh_r_press_reseeds() {
        assert!(is_reseed_press(egui::Key::R, true, false));
        assert!(!is_reseed_press(egui::Key::R, true, true));
        assert!(!is_reseed_press(egui::Key::R, false, false));
        assert!(!is_reseed_press(egui::Key::Space, true, false));
    }

    #[test]
    fn tick_marks_field_for_upload() {
        let sim = Simulator::new(conway::Config::default().with_size(8, 8).with_seed(2)).unwrap();
        let mut app = GridApp::new(sim, 60);
        app.dirty = false;
        app.tick();
        assert!(app.dirty);
    }

    #[test]
    fn pending_reseed_is_consumed_by_one_tick() {
        let sim = Simulator::new(conway::Config::default().with_size(8, 8).with_seed(2)).unwrap();
        let mut app = GridApp::new(sim, 60);
        app.tick();
        app.tick();
        assert_eq!(app.sim.generation(), 2);

        app.reseed_requested = true;
        app.tick();
        assert!(!app.reseed_requested);
        assert_eq!(app.sim.generation(), 0);
    }
}
