use std::sync::{Arc, Mutex};

use raster::TimingConfig;

use crate::render_thread::{RenderCommand, RenderHandle, RenderStatus};
use crate::ui_traits::UiTool;

#[derive(Clone, Copy, PartialEq, Eq)]
enum TimingPreset {
    PerFrame,
    Reference,
}

impl TimingPreset {
    fn config(self) -> TimingConfig {
        match self {
            Self::PerFrame => TimingConfig::per_frame(),
            Self::Reference => TimingConfig::default(),
        }
    }
}

/// Run/pause/step the render thread, pick the animation cadence and keep one
/// saved animation state.
pub struct RenderControl {
    render_handle: Arc<Mutex<RenderHandle>>,
    step_count: u32,
    preset: TimingPreset,
}

impl RenderControl {
    pub fn new(render_handle: Arc<Mutex<RenderHandle>>) -> Self {
        let preset = render_handle.lock().map_or(TimingPreset::PerFrame, |handle| {
            if handle.status.timing == TimingPreset::Reference.config() {
                TimingPreset::Reference
            } else {
                TimingPreset::PerFrame
            }
        });

        Self {
            render_handle,
            step_count: 1,
            preset,
        }
    }

    fn send(&self, cmd: RenderCommand) {
        if let Ok(mut handle) = self.render_handle.lock() {
            handle.send(cmd);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui, is_running: bool) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_running, egui::Button::new("▶"))
                .clicked()
            {
                self.send(RenderCommand::Run);
            }

            if ui.add_enabled(is_running, egui::Button::new("⏸")).clicked() {
                self.send(RenderCommand::Pause);
            }

            ui.add(egui::DragValue::new(&mut self.step_count).range(1..=600));
            if ui
                .add_enabled(!is_running, egui::Button::new("Step frames"))
                .clicked()
            {
                self.send(RenderCommand::Step(self.step_count));
            }
        });
    }

    fn timing(&mut self, ui: &mut egui::Ui) {
        let before = self.preset;

        ui.label("Animation cadence");
        ui.radio_value(&mut self.preset, TimingPreset::PerFrame, "Viewer (per frame)");
        ui.radio_value(&mut self.preset, TimingPreset::Reference, "Reference pixel clock");

        if self.preset != before {
            self.send(RenderCommand::SetTiming(self.preset.config()));
        }
    }

    fn save_slot(&self, ui: &mut egui::Ui, has_saved: bool) {
        ui.horizontal(|ui| {
            if ui.button("Save state").clicked() {
                self.send(RenderCommand::RequestSaveState);
            }

            if ui.add_enabled(has_saved, egui::Button::new("Load state")).clicked() {
                let saved = self
                    .render_handle
                    .lock()
                    .ok()
                    .and_then(|handle| handle.saved_state);
                if let Some(state) = saved {
                    self.send(RenderCommand::LoadState(state));
                }
            }
        });
    }
}

impl UiTool for RenderControl {
    fn name(&self) -> &'static str {
        "Render Control"
    }

    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .default_width(280.0)
            .open(open)
            .default_pos(egui::pos2(1800.0 - 280.0, 10.0))
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        let (status, has_saved) = self.render_handle.lock().map_or_else(
            |_| (RenderStatus::default(), false),
            |handle| (handle.status.clone(), handle.saved_state.is_some()),
        );

        self.controls(ui, status.is_running);
        ui.separator();

        egui::Grid::new("render_status")
            .num_columns(2)
            .spacing([40.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("Frames");
                ui.label(status.frames_rendered.to_string());
                ui.end_row();

                ui.label("Last frame");
                ui.label(format!("{:.1} ms", status.last_frame_time.as_secs_f64() * 1000.0));
                ui.end_row();

                ui.label("Cloud offset");
                ui.label(status.cloud_offset.to_string());
                ui.end_row();

                ui.label("Shake phase");
                ui.label(status.shake_phase.to_string());
                ui.end_row();
            });

        ui.separator();
        self.timing(ui);
        ui.separator();
        self.save_slot(ui, has_saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn per_frame_cadence_keeps_the_reference_ratios() {
        let reference = TimingPreset::Reference.config();
        let viewer = TimingPreset::PerFrame.config();

        assert_ne!(viewer, reference);
        assert_eq!(
            reference.effect_duration_ticks / reference.shake_step_ticks,
            viewer.effect_duration_ticks / viewer.shake_step_ticks,
        );
    }
}
