use std::sync::{Arc, Mutex};

use eframe::epaint::textures::TextureOptions;
use egui::load::SizedTexture;
use egui::{self, ColorImage, ImageSource, TextureHandle, Ui};

use raster::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::render_thread::RenderHandle;
use crate::ui_traits::UiTool;

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Shows the last frame produced by the render thread.
pub struct GameDisplay {
    render_handle: Arc<Mutex<RenderHandle>>,
    texture: Option<TextureHandle>,
}

impl GameDisplay {
    pub(crate) const fn new(render_handle: Arc<Mutex<RenderHandle>>) -> Self {
        Self {
            render_handle,
            texture: None,
        }
    }

    fn upload_new_frame(&mut self, ui: &Ui) {
        let Ok(mut handle) = self.render_handle.lock() else {
            return;
        };
        let Some(rgb_data) = handle.take_new_frame() else {
            return;
        };

        let image = ColorImage::from_rgb([WIDTH, HEIGHT], rgb_data);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ui.ctx().load_texture(
                    "game_display",
                    image,
                    TextureOptions::NEAREST,
                ));
            }
        }
    }
}

impl UiTool for GameDisplay {
    fn name(&self) -> &'static str {
        "Game Display"
    }

    #[allow(clippy::cast_precision_loss)]
    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .open(open)
            .default_width(WIDTH as f32 / 2.0)
            .default_height(HEIGHT as f32 / 2.0)
            .default_pos(egui::pos2(10.0, 10.0))
            .collapsible(false)
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }

    #[allow(clippy::cast_precision_loss)]
    fn ui(&mut self, ui: &mut Ui) {
        self.upload_new_frame(ui);

        let Some(texture) = &self.texture else {
            ui.label("No frame yet: press ▶ or Step in Render Control.");
            return;
        };

        // Keep the 16:10 aspect ratio inside whatever space the window has.
        let available = ui.available_size();
        let scale = (available.x / WIDTH as f32).min(available.y / HEIGHT as f32);
        let size = egui::vec2(WIDTH as f32 * scale, HEIGHT as f32 * scale);

        ui.image(ImageSource::Texture(SizedTexture {
            id: texture.id(),
            size,
        }));
    }
}
