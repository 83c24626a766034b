//! # Render Thread
//!
//! Runs the compositor on a dedicated thread. The UI thread talks to it via
//! lock-free SPSC ring buffers and never touches the [`Screen`] directly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────┐              ┌─────────────────────────────┐
//! │     Render Thread       │              │        UI Thread            │
//! │                         │              │                             │
//! │  ┌─────────────────┐    │   Commands   │    ┌─────────────────────┐  │
//! │  │     Screen      │    │ ◄─────────── │    │    RenderHandle     │  │
//! │  │  (owned here)   │    │   (SPSC)     │    │                     │  │
//! │  └────────┬────────┘    │              │    │  - send commands    │  │
//! │           │             │   Events     │    │  - poll events      │  │
//! │           ▼             │ ───────────► │    │  - read status      │  │
//! │  loop {                 │   (SPSC)     │    └─────────────────────┘  │
//! │    process commands     │              │                             │
//! │    if running:          │              │                             │
//! │      render_frame()     │              │                             │
//! │      send frame         │              │                             │
//! │  }                      │              │                             │
//! └─────────────────────────┘              └─────────────────────────────┘
//! ```
//!
//! ## Communication
//!
//! - **Commands** (UI → render): [`RenderCommand`] for control and for the
//!   game snapshot the external state machine would otherwise supply.
//! - **Events** (render → UI): [`RenderEvent`] with finished frames, status
//!   and saved animation state.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use raster::{Frame, GameSnapshot, Screen, ScreenState, TimingConfig};

/// Channel buffer sizes
const COMMAND_BUFFER_SIZE: usize = 64;
const EVENT_BUFFER_SIZE: usize = 16;

/// Commands sent from the UI thread to the render thread.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Render frames continuously until paused.
    Run,
    /// Stop after the current frame.
    Pause,
    /// Render N frames then pause.
    Step(u32),
    /// Replace the snapshot used for the next frames.
    SetSnapshot(Box<GameSnapshot>),
    /// Replace the animation cadence.
    SetTiming(TimingConfig),
    /// Ask for a copy of the timers and raster counters.
    RequestSaveState,
    /// Restore previously saved timers and raster counters.
    LoadState(ScreenState),
    /// Shutdown the render thread.
    Shutdown,
}

/// Events sent from the render thread to the UI thread.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// Status snapshot for UI display.
    Status(RenderStatus),
    /// A new frame is ready.
    Frame(FrameBuffer),
    /// Saved timers and raster counters.
    SaveStateData(ScreenState),
}

/// Snapshot of render-thread state for UI display.
#[derive(Debug, Clone, Default)]
pub struct RenderStatus {
    pub is_running: bool,
    pub frames_rendered: u64,
    /// Wall-clock time of the last full raster pass.
    pub last_frame_time: Duration,
    pub cloud_offset: u32,
    pub shake_phase: u8,
    pub timing: TimingConfig,
}

/// Frame as row-major RGB bytes, three per pixel.
pub type FrameBuffer = Vec<u8>;

/// The render thread that owns and runs the compositor.
struct RenderThread {
    screen: Screen,
    snapshot: GameSnapshot,
    frame: Frame,
    cmd_rx: rtrb::Consumer<RenderCommand>,
    event_tx: rtrb::Producer<RenderEvent>,

    running: bool,
    frames_remaining: u32,
    frames_rendered: u64,
    last_frame_time: Duration,
}

impl RenderThread {
    fn new(
        screen: Screen,
        snapshot: GameSnapshot,
        cmd_rx: rtrb::Consumer<RenderCommand>,
        event_tx: rtrb::Producer<RenderEvent>,
    ) -> Self {
        Self {
            screen,
            snapshot,
            frame: Frame::default(),
            cmd_rx,
            event_tx,
            running: false,
            frames_remaining: 0,
            frames_rendered: 0,
            last_frame_time: Duration::ZERO,
        }
    }

    fn run(mut self) {
        tracing::info!("render thread started");

        loop {
            if self.process_commands() {
                tracing::info!(frames = self.frames_rendered, "render thread stopped");
                return;
            }

            if self.running || self.frames_remaining > 0 {
                self.render();
            } else {
                // sleep briefly to avoid busy-waiting
                thread::sleep(Duration::from_millis(1));
            }
        }
    }

    /// Process all pending commands. Returns true if should shutdown.
    fn process_commands(&mut self) -> bool {
        while let Ok(cmd) = self.cmd_rx.pop() {
            match cmd {
                RenderCommand::Run => {
                    self.running = true;
                    self.frames_remaining = 0;
                    self.send_status();
                }
                RenderCommand::Pause => {
                    self.running = false;
                    self.frames_remaining = 0;
                    self.send_status();
                }
                RenderCommand::Step(count) => {
                    self.running = false;
                    self.frames_remaining = count;
                }
                RenderCommand::SetSnapshot(snapshot) => {
                    self.snapshot = *snapshot;
                }
                RenderCommand::SetTiming(timing) => {
                    tracing::debug!(?timing, "timing changed");
                    self.screen.set_timing(timing);
                    self.send_status();
                }
                RenderCommand::RequestSaveState => {
                    self.send_event(RenderEvent::SaveStateData(*self.screen.state()));
                }
                RenderCommand::LoadState(state) => {
                    self.screen.restore(state);
                    self.send_status();
                }
                RenderCommand::Shutdown => {
                    return true;
                }
            }
        }
        false
    }

    /// Run one full raster pass and hand it to the UI.
    fn render(&mut self) {
        let started = Instant::now();
        self.screen.render_frame(&self.snapshot, &mut self.frame);
        self.last_frame_time = started.elapsed();
        self.frames_rendered += 1;

        if self.frames_remaining > 0 {
            self.frames_remaining -= 1;
        }

        self.send_event(RenderEvent::Frame(self.frame.to_rgb8()));
        self.send_status();
    }

    fn status(&self) -> RenderStatus {
        let timers = &self.screen.state().timers;

        RenderStatus {
            is_running: self.running || self.frames_remaining > 0,
            frames_rendered: self.frames_rendered,
            last_frame_time: self.last_frame_time,
            cloud_offset: timers.cloud_offset(),
            shake_phase: timers.shake.phase(),
            timing: *self.screen.timing(),
        }
    }

    fn send_status(&mut self) {
        let status = self.status();
        self.send_event(RenderEvent::Status(status));
    }

    /// Send an event to the UI (non-blocking, drops if full).
    fn send_event(&mut self, event: RenderEvent) {
        let _ = self.event_tx.push(event);
    }
}

/// Handle for the UI thread to communicate with the render thread.
pub struct RenderHandle {
    cmd_tx: rtrb::Producer<RenderCommand>,
    event_rx: rtrb::Consumer<RenderEvent>,
    thread_handle: Option<JoinHandle<()>>,

    /// Latest status from the render thread.
    pub status: RenderStatus,
    /// Latest frame from the render thread.
    pub frame: Option<FrameBuffer>,
    /// Set whenever `frame` was replaced since the last [`Self::take_new_frame`].
    new_frame: bool,
    /// Last saved animation state, if any.
    pub saved_state: Option<ScreenState>,
    /// Snapshot last sent to the render thread.
    pub snapshot: GameSnapshot,
}

impl RenderHandle {
    /// Send a command to the render thread.
    pub fn send(&mut self, cmd: RenderCommand) {
        if let RenderCommand::SetSnapshot(snapshot) = &cmd {
            self.snapshot = (**snapshot).clone();
        }

        if self.cmd_tx.push(cmd).is_err() {
            tracing::warn!("render command queue full, command dropped");
        }
    }

    /// Poll for events and update cached state.
    pub fn poll(&mut self) {
        while let Ok(event) = self.event_rx.pop() {
            match event {
                RenderEvent::Status(status) => {
                    self.status = status;
                }
                RenderEvent::Frame(frame) => {
                    self.frame = Some(frame);
                    self.new_frame = true;
                }
                RenderEvent::SaveStateData(state) => {
                    tracing::info!(?state, "animation state saved");
                    self.saved_state = Some(state);
                }
            }
        }
    }

    /// The latest frame, only if it has not been handed out yet.
    pub fn take_new_frame(&mut self) -> Option<&FrameBuffer> {
        if !self.new_frame {
            return None;
        }

        self.new_frame = false;
        self.frame.as_ref()
    }
}

impl Drop for RenderHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.push(RenderCommand::Shutdown);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

/// Spawn the render thread and return a handle for communication.
///
/// The thread starts paused; send [`RenderCommand::Run`] or
/// [`RenderCommand::Step`] to produce frames.
pub fn spawn(screen: Screen, snapshot: GameSnapshot) -> RenderHandle {
    // Create command channel (UI → render)
    let (cmd_tx, cmd_rx) = rtrb::RingBuffer::new(COMMAND_BUFFER_SIZE);

    // Create event channel (render → UI)
    let (event_tx, event_rx) = rtrb::RingBuffer::new(EVENT_BUFFER_SIZE);

    let status = RenderStatus {
        timing: *screen.timing(),
        ..RenderStatus::default()
    };

    let thread_snapshot = snapshot.clone();
    let thread_handle = thread::Builder::new()
        .name("render".to_owned())
        .spawn(move || {
            RenderThread::new(screen, thread_snapshot, cmd_rx, event_tx).run();
        });

    let thread_handle = match thread_handle {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::error!("can't spawn render thread: {e}");
            None
        }
    };

    RenderHandle {
        cmd_tx,
        event_rx,
        thread_handle,
        status,
        frame: None,
        new_frame: false,
        saved_state: None,
        snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use raster::{AssetStore, SCREEN_HEIGHT, SCREEN_WIDTH};

    fn wait_for<T>(
        handle: &mut RenderHandle,
        mut check: impl FnMut(&mut RenderHandle) -> Option<T>,
    ) -> T {
        let deadline = Instant::now() + Duration::from_secs(60);
        loop {
            handle.poll();
            if let Some(value) = check(handle) {
                return value;
            }
            assert!(Instant::now() < deadline, "render thread did not answer");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn step_produces_one_frame() {
        let screen = Screen::new(AssetStore::placeholders(), TimingConfig::per_frame());
        let mut handle = spawn(screen, GameSnapshot::default());

        handle.send(RenderCommand::Step(1));
        let len = wait_for(&mut handle, |h| h.take_new_frame().map(Vec::len));

        assert_eq!(len, (SCREEN_WIDTH * SCREEN_HEIGHT * 3) as usize);
        wait_for(&mut handle, |h| (h.status.frames_rendered == 1).then_some(()));
        assert!(handle.take_new_frame().is_none());
    }

    #[test]
    fn save_and_load_state_round_trip_through_the_thread() {
        let screen = Screen::new(AssetStore::empty(), TimingConfig::per_frame());
        let mut handle = spawn(screen, GameSnapshot::default());

        handle.send(RenderCommand::RequestSaveState);
        let saved = wait_for(&mut handle, |h| h.saved_state);
        assert_eq!(saved, ScreenState::default());

        handle.send(RenderCommand::Step(1));
        wait_for(&mut handle, |h| (h.status.frames_rendered == 1).then_some(()));
        assert_ne!(handle.status.cloud_offset, 0);

        handle.send(RenderCommand::LoadState(saved));
        wait_for(&mut handle, |h| (h.status.cloud_offset == 0).then_some(()));
    }
}
