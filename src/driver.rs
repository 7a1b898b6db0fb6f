//! Session driver
//!
//! Glue between the simulation and the host: runs the ticks a frame is owed,
//! forwards queued events to the UI and hands the renderer a read-only view.

use crate::clock::FrameClock;
use crate::settings::Settings;
use crate::sim::{FrameView, GameEvent, GameOverSummary, GameState, Hud, TickInput, tick};

/// Receives the finished frame
pub trait RenderSink {
    fn present(&mut self, view: &FrameView<'_>);
}

/// Receives display values whenever they change
pub trait UiNotifier {
    fn hud_changed(&mut self, hud: &Hud);

    fn game_over(&mut self, _summary: &GameOverSummary) {}

    /// Every other event, for hosts that want sound or flashes
    fn event(&mut self, _event: &GameEvent) {}
}

/// One simulation instance plus its frame clock
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    clock: FrameClock,
    /// Start was held on the previous frame
    start_held: bool,
    /// A start press no tick has consumed yet
    start_pending: bool,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        log::info!("Session created with seed {}", settings.seed);
        Self {
            state: GameState::with_settings(settings),
            clock: FrameClock::from_settings(settings),
            start_held: false,
            start_pending: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the ticks owed at `now_ms`, notify the UI, then present
    ///
    /// `input` is what the host sees held this frame. Start only counts on
    /// the frame it goes down, so a key held through a game over does not
    /// restart the run. Returns the number of ticks run.
    pub fn frame(
        &mut self,
        now_ms: f64,
        input: &TickInput,
        notifier: &mut impl UiNotifier,
        sink: &mut impl RenderSink,
    ) -> u32 {
        self.latch_start(input.start);
        let ticks = self.clock.ticks_due(now_ms);
        for _ in 0..ticks {
            self.run_tick(input, notifier);
        }
        sink.present(&self.state.view());
        ticks
    }

    /// Run exactly one tick regardless of wall time
    pub fn step(&mut self, input: &TickInput, notifier: &mut impl UiNotifier) {
        self.latch_start(input.start);
        self.run_tick(input, notifier);
    }

    /// Forget frame timing after the host was suspended or hidden
    pub fn resume(&mut self) {
        log::debug!("Session resumed, frame clock reset");
        self.clock.reset();
    }

    fn latch_start(&mut self, held: bool) {
        if held && !self.start_held {
            self.start_pending = true;
        }
        self.start_held = held;
    }

    fn run_tick(&mut self, input: &TickInput, notifier: &mut impl UiNotifier) {
        let input = TickInput {
            start: std::mem::take(&mut self.start_pending),
            ..*input
        };
        tick(&mut self.state, &input);
        self.dispatch(notifier);
    }

    fn dispatch(&mut self, notifier: &mut impl UiNotifier) {
        for event in self.state.drain_events() {
            match &event {
                GameEvent::HudChanged(hud) => notifier.hud_changed(hud),
                GameEvent::GameOver(summary) => notifier.game_over(summary),
                other => notifier.event(other),
            }
        }
    }
}
