//! # flapscan UI Application
//!
//! The main application struct: it owns the render thread handle and the
//! tool windows that talk to it.
//!
//! ## Initialization Flow
//!
//! ```text
//! App::new(assets)
//!     │
//!     ├─► Screen::new(assets, TimingConfig::per_frame())
//!     │
//!     ├─► render_thread::spawn(screen, GameSnapshot::default())
//!     │   └─► Screen moves to the render thread
//!     │
//!     ├─► Step(1): one frame so the display is not empty
//!     │
//!     └─► Create UI tools:
//!         ├─► About
//!         ├─► GameDisplay (last frame)
//!         ├─► RenderControl (run/pause/step, cadence, save slot)
//!         └─► SnapshotEditor (game state by hand)
//! ```
//!
//! ## Shared State
//!
//! The [`RenderHandle`] is wrapped in `Arc<Mutex<_>>` so every tool can send
//! commands and read the cached status. Only [`App::update`] polls it.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use raster::{AssetStore, GameSnapshot, Screen, TimingConfig};

use crate::about::About;
use crate::game_display::GameDisplay;
use crate::render_control::RenderControl;
use crate::render_thread::{self, RenderCommand, RenderHandle};
use crate::snapshot_editor::SnapshotEditor;
use crate::ui_traits::UiTool;

/// The main flapscan application.
///
/// ## Creating the Application
///
/// ```ignore
/// let app = App::new(AssetStore::placeholders());
/// eframe::run_native("flapscan", options, Box::new(|_| Ok(Box::new(app))));
/// ```
pub struct App {
    render_handle: Arc<Mutex<RenderHandle>>,
    tools: Vec<Box<dyn UiTool>>,
    open: BTreeSet<String>,
}

impl App {
    #[must_use]
    pub fn new(assets: AssetStore) -> Self {
        let screen = Screen::new(assets, TimingConfig::per_frame());
        let mut handle = render_thread::spawn(screen, GameSnapshot::default());
        handle.send(RenderCommand::Step(1));

        let render_handle = Arc::new(Mutex::new(handle));

        let tools: Vec<Box<dyn UiTool>> = vec![
            Box::<About>::default(),
            Box::new(GameDisplay::new(Arc::clone(&render_handle))),
            Box::new(RenderControl::new(Arc::clone(&render_handle))),
            Box::new(SnapshotEditor::new(Arc::clone(&render_handle))),
        ];

        Self::from_tools(render_handle, tools)
    }

    fn from_tools(render_handle: Arc<Mutex<RenderHandle>>, tools: Vec<Box<dyn UiTool>>) -> Self {
        // Everything but About starts open.
        let open = tools
            .iter()
            .skip(1)
            .map(|tool| tool.name().to_owned())
            .collect();

        Self {
            render_handle,
            tools,
            open,
        }
    }

    pub fn checkboxes(&mut self, ui: &mut egui::Ui) {
        let Self { tools, open, .. } = self;
        for tool in tools {
            let mut is_open = open.contains(tool.name());
            ui.toggle_value(&mut is_open, tool.name());
            set_open(open, tool.name(), is_open);
        }
    }

    fn windows(&mut self, ctx: &egui::Context) {
        let Self { tools, open, .. } = self;
        for tool in tools {
            let mut is_open = open.contains(tool.name());
            tool.show(ctx, &mut is_open);
            set_open(open, tool.name(), is_open);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut handle) = self.render_handle.lock() {
            handle.poll();
        }

        ctx.request_repaint();

        egui::SidePanel::right("flapscan tools")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("✒ flapscan tools");
                });

                ui.separator();

                self.checkboxes(ui);
            });

        self.windows(ctx);
    }
}

fn set_open(open: &mut BTreeSet<String>, key: &'static str, is_open: bool) {
    if is_open {
        if !open.contains(key) {
            open.insert(key.to_owned());
        }
    } else {
        open.remove(key);
    }
}
