//! Snapshot Editor
//!
//! Stands in for the game-state machine: every field of the [`GameSnapshot`]
//! can be edited by hand and is pushed to the render thread on change.

use std::sync::{Arc, Mutex};

use raster::{GameSnapshot, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::render_thread::{RenderCommand, RenderHandle};
use crate::ui_traits::UiTool;

pub struct SnapshotEditor {
    render_handle: Arc<Mutex<RenderHandle>>,
    snapshot: GameSnapshot,
}

impl SnapshotEditor {
    pub fn new(render_handle: Arc<Mutex<RenderHandle>>) -> Self {
        let snapshot = render_handle
            .lock()
            .map_or_else(|_| GameSnapshot::default(), |handle| handle.snapshot.clone());

        Self {
            render_handle,
            snapshot,
        }
    }

    fn publish(&self) {
        if let Ok(mut handle) = self.render_handle.lock() {
            handle.send(RenderCommand::SetSnapshot(Box::new(self.snapshot.clone())));
        }
    }

    fn presets(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            if ui.button("Title").clicked() {
                self.snapshot.mode = raster::ModeFlags::default();
                self.snapshot.sprite = raster::SpriteFlags::default();
                changed = true;
            }
            if ui.button("Start").clicked() {
                self.snapshot.mode.started = true;
                self.snapshot.mode.over = false;
                changed = true;
            }
            if ui.button("Crash").clicked() {
                self.snapshot.mode.over = true;
                self.snapshot.mode.died_by_obstacle = true;
                self.snapshot.death_count = self.snapshot.death_count.saturating_add(1);
                changed = true;
            }
        });

        changed
    }
}

impl UiTool for SnapshotEditor {
    fn name(&self) -> &'static str {
        "Snapshot Editor"
    }

    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .default_width(260.0)
            .open(open)
            .default_pos(egui::pos2(1800.0 - 560.0, 10.0))
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        let mut changed = self.presets(ui);
        ui.separator();

        let snapshot = &mut self.snapshot;

        egui::Grid::new("snapshot_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("Character");
                ui.horizontal(|ui| {
                    let character = &mut snapshot.character;
                    let x = egui::DragValue::new(&mut character.x).range(0..=SCREEN_WIDTH);
                    changed |= ui.add(x).changed();
                    let y = egui::DragValue::new(&mut character.y).range(0..=SCREEN_HEIGHT);
                    changed |= ui.add(y).changed();
                });
                ui.end_row();

                for (index, pipe) in snapshot.pipes.iter_mut().enumerate() {
                    ui.label(format!("Pipe {index} x / gap"));
                    ui.horizontal(|ui| {
                        let x = egui::DragValue::new(&mut pipe.x).range(0..=SCREEN_WIDTH);
                        changed |= ui.add(x).changed();
                        let gap = egui::DragValue::new(&mut pipe.gap_y).range(0..=SCREEN_HEIGHT);
                        changed |= ui.add(gap).changed();
                    });
                    ui.end_row();
                }

                ui.label("Score");
                changed |= ui
                    .add(egui::Slider::new(&mut snapshot.score, 0..=99))
                    .changed();
                ui.end_row();

                ui.label("High score");
                changed |= ui
                    .add(egui::Slider::new(&mut snapshot.high_score, 0..=99))
                    .changed();
                ui.end_row();

                ui.label("Deaths");
                changed |= ui
                    .add(egui::DragValue::new(&mut snapshot.death_count).range(0..=99))
                    .changed();
                ui.end_row();
            });

        ui.separator();
        ui.label("Mode");
        changed |= ui.checkbox(&mut snapshot.mode.started, "started").changed();
        changed |= ui.checkbox(&mut snapshot.mode.over, "over").changed();
        changed |= ui
            .checkbox(&mut snapshot.mode.died_by_obstacle, "died by obstacle")
            .changed();

        ui.label("Sprite");
        changed |= ui.checkbox(&mut snapshot.sprite.wing_down, "wing down").changed();
        changed |= ui.checkbox(&mut snapshot.sprite.dead, "dead").changed();
        changed |= ui
            .checkbox(&mut snapshot.sprite.dead_reflected, "dead (reflected)")
            .changed();

        ui.separator();
        changed |= ui
            .checkbox(&mut snapshot.accessory_unlocked, "accessory unlocked")
            .changed();

        if changed {
            self.publish();
        }
    }
}
