//! Void Striker headless runner
//!
//! Plays the simulation with a simple autopilot at a simulated 60 Hz and
//! prints a JSON summary of every run. Pass a settings JSON path as the first
//! argument to override the defaults.

use void_striker::consts::FRAME_MS;
use void_striker::sim::{
    FrameView, GameEvent, GameOverSummary, GamePhase, GameState, Hud, TickInput,
};
use void_striker::{RenderSink, Session, Settings, UiNotifier};

/// Runs to play before exiting
const RUNS: usize = 3;
/// Give up on a run after this many frames (~10 minutes)
const MAX_FRAMES_PER_RUN: u64 = 60 * 60 * 10;

/// Logs HUD changes and collects run summaries
#[derive(Default)]
struct LogNotifier {
    summaries: Vec<GameOverSummary>,
}

impl UiNotifier for LogNotifier {
    fn hud_changed(&mut self, hud: &Hud) {
        log::debug!(
            "HUD score={} hi={} level={} lives={}",
            hud.score,
            hud.high_score,
            hud.level,
            hud.lives
        );
    }

    fn game_over(&mut self, summary: &GameOverSummary) {
        log::info!("GAME OVER: {:?}", summary);
        self.summaries.push(*summary);
    }

    fn event(&mut self, event: &GameEvent) {
        if let GameEvent::LevelUp { level } = event {
            log::info!("Reached level {}", level);
        }
    }
}

/// Tracks peak entity counts instead of drawing
#[derive(Default)]
struct StatsSink {
    frames: u64,
    peak_enemies: usize,
    peak_enemy_bullets: usize,
    peak_particles: usize,
}

impl RenderSink for StatsSink {
    fn present(&mut self, view: &FrameView<'_>) {
        self.frames += 1;
        self.peak_enemies = self.peak_enemies.max(view.enemies.len());
        self.peak_enemy_bullets = self.peak_enemy_bullets.max(view.enemy_bullets.len());
        self.peak_particles = self.peak_particles.max(view.particles.len());
    }
}

/// Chase the lowest enemy horizontally, dodge incoming fire, never stop shooting
fn autopilot(state: &GameState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput {
            start: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let mut input = TickInput {
        fire: true,
        rapid: true,
        ..Default::default()
    };

    let threat = state
        .enemy_bullets
        .iter()
        .filter(|b| b.pos.y < player.pos.y && player.pos.y - b.pos.y < 60.0)
        .find(|b| (b.pos.x - player.pos.x).abs() < 20.0);

    if let Some(bullet) = threat {
        if bullet.pos.x >= player.pos.x {
            input.left = true;
        } else {
            input.right = true;
        }
        return input;
    }

    let target = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.pos.x);
    if let Some(x) = target {
        if x < player.pos.x - 2.0 {
            input.left = true;
        } else if x > player.pos.x + 2.0 {
            input.right = true;
        }
    }
    input
}

fn main() {
    env_logger::init();
    log::info!("Void Striker (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut session = Session::new(&settings);
    let mut notifier = LogNotifier::default();
    let mut sink = StatsSink::default();

    let mut now = 0.0;
    let mut run_frames = 0;
    while notifier.summaries.len() < RUNS {
        let input = autopilot(session.state());
        session.frame(now, &input, &mut notifier, &mut sink);
        now += FRAME_MS;

        run_frames += 1;
        if session.state().phase != GamePhase::Playing {
            run_frames = 0;
        } else if run_frames > MAX_FRAMES_PER_RUN {
            log::warn!("Run exceeded {} frames, stopping", MAX_FRAMES_PER_RUN);
            break;
        }
    }

    let report = serde_json::json!({
        "seed": settings.seed,
        "frames": sink.frames,
        "runs": notifier.summaries,
        "high_scores": session.state().high_scores,
        "peak": {
            "enemies": sink.peak_enemies,
            "enemy_bullets": sink.peak_enemy_bullets,
            "particles": sink.peak_particles,
        },
    });
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode report: {}", e),
    }
}
