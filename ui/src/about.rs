use crate::ui_traits::UiTool;

#[derive(Default)]
pub struct About {}

impl UiTool for About {
    fn name(&self) -> &'static str {
        "About flapscan"
    }

    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .default_width(300.0)
            .default_pos(egui::pos2(450.0, 10.0))
            .open(open)
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("flapscan");
        ui.add_space(4.0);
        ui.label(format!(
            "Per-pixel layered compositor, {}×{} scan grid.\n\
             Every frame is produced one scan tick at a time:\n\
             nothing is drawn from a frame buffer.",
            raster::SCREEN_WIDTH,
            raster::SCREEN_HEIGHT,
        ));
        ui.add_space(8.0);
        ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
    }
}
