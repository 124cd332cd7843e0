//! Fixed-rate loop driver
//!
//! One tick: drain events, sample held keys, advance the simulation,
//! compose the frame, present, pace. Single-threaded and cooperative;
//! the pace call is the only wait point. A quit request breaks the loop
//! before the next tick begins, in any phase.

use crate::consts::*;
use crate::platform::{Backend, BackendError, Event, Key};
use crate::renderer::{Assets, draw_frame};
use crate::sim::{GameState, TickInput, tick};

pub struct App<B: Backend> {
    backend: B,
    state: GameState,
    assets: Assets<B>,
}

impl<B: Backend> App<B> {
    /// Acquire the window and load every asset. Any failure here is fatal;
    /// the loop body itself cannot fail.
    pub fn new(mut backend: B, seed: u64) -> Result<Self, BackendError> {
        backend.create_window(WIDTH as u32, HEIGHT as u32, "Ocean Chase")?;
        let assets = Assets::load(&mut backend)?;
        let now = backend.now_millis();
        Ok(Self {
            backend,
            state: GameState::new(seed, now),
            assets,
        })
    }

    /// Drain this tick's events and sample held keys. `None` means a quit
    /// was requested (window close or quit key) and the loop should stop.
    fn sample_input(&mut self) -> Option<TickInput> {
        let mut input = TickInput::default();
        for event in self.backend.poll_events() {
            match event {
                Event::Quit | Event::KeyDown(Key::Quit) => return None,
                Event::KeyDown(Key::Start) => input.start = true,
                // Movement keys are level-triggered, sampled below
                Event::KeyDown(_) => {}
            }
        }
        input.up = self.backend.is_key_held(Key::Up);
        input.down = self.backend.is_key_held(Key::Down);
        input.left = self.backend.is_key_held(Key::Left);
        input.right = self.backend.is_key_held(Key::Right);
        Some(input)
    }

    /// Advance exactly one tick. Returns false once the loop should stop.
    pub fn step(&mut self) -> bool {
        let Some(input) = self.sample_input() else {
            log::info!("quit requested");
            return false;
        };
        let now = self.backend.now_millis();
        tick(&mut self.state, &input, now);
        self.assets.sync_score(&mut self.backend, self.state.score);
        draw_frame(&mut self.backend, &self.assets, &self.state);
        self.backend.present();
        self.backend.pace(TICK_HZ);
        true
    }

    /// Run until a quit request
    pub fn run(&mut self) {
        while self.step() {}
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessBackend;
    use crate::sim::GamePhase;

    fn app_with(backend: HeadlessBackend) -> App<HeadlessBackend> {
        App::new(backend, 0xC0FFEE).unwrap()
    }

    #[test]
    fn test_startup_aborts_on_missing_asset() {
        let mut backend = HeadlessBackend::new();
        backend.set_missing("images/water_background.png");
        let err = App::new(backend, 1).err().unwrap();
        assert!(err.to_string().contains("images/water_background.png"));
    }

    #[test]
    fn test_window_created_at_startup() {
        let app = app_with(HeadlessBackend::new());
        assert_eq!(app.backend().window_title.as_deref(), Some("Ocean Chase"));
    }

    #[test]
    fn test_quit_event_stops_loop_without_side_effects() {
        let mut backend = HeadlessBackend::new();
        backend.push_tick(vec![Event::KeyDown(Key::Start)], vec![]);
        backend.push_held_ticks(3, vec![Key::Right]);
        backend.push_tick(vec![Event::Quit], vec![Key::Right]);

        let mut app = app_with(backend);
        for _ in 0..4 {
            assert!(app.step());
        }
        let score = app.state().score;
        let shark = app.state().shark;
        let frames = app.backend().frames.len();

        // The quit tick stops the loop before the sim advances
        assert!(!app.step());
        assert_eq!(app.state().score, score);
        assert_eq!(app.state().shark, shark);
        assert_eq!(app.backend().frames.len(), frames);
    }

    #[test]
    fn test_quit_key_stops_in_opening() {
        let mut backend = HeadlessBackend::new();
        backend.push_tick(vec![Event::KeyDown(Key::Quit)], vec![]);
        let mut app = app_with(backend);
        assert!(!app.step());
        assert_eq!(app.state().phase, GamePhase::Opening);
    }

    #[test]
    fn test_start_key_enters_playing() {
        let mut backend = HeadlessBackend::new();
        backend.push_tick(vec![], vec![]);
        backend.push_tick(vec![Event::KeyDown(Key::Start)], vec![]);

        let mut app = app_with(backend);
        assert!(app.step());
        assert_eq!(app.state().phase, GamePhase::Opening);
        assert!(app.step());
        assert_eq!(app.state().phase, GamePhase::Playing);
        assert_eq!(app.state().score, 0);
    }

    #[test]
    fn test_held_keys_move_shark() {
        let mut backend = HeadlessBackend::new();
        backend.push_tick(vec![Event::KeyDown(Key::Start)], vec![]);
        backend.push_held_ticks(4, vec![Key::Right, Key::Up]);

        let mut app = app_with(backend);
        for _ in 0..5 {
            assert!(app.step());
        }
        let center = app.state().shark.center();
        assert_eq!(
            center,
            glam::Vec2::new(
                WIDTH / 2.0 + 4.0 * SHARK_SPEED,
                HEIGHT / 2.0 - 4.0 * SHARK_SPEED
            )
        );
    }

    #[test]
    fn test_exhausted_script_terminates_run() {
        let mut backend = HeadlessBackend::new();
        backend.push_tick(vec![Event::KeyDown(Key::Start)], vec![]);
        backend.push_held_ticks(10, vec![Key::Left]);

        let mut app = app_with(backend);
        app.run();
        // 11 scripted ticks each present one frame; the implicit quit
        // tick presents nothing
        assert_eq!(app.backend().frames.len(), 11);
    }

    #[test]
    fn test_clock_paced_at_tick_rate() {
        let mut backend = HeadlessBackend::new();
        backend.push_held_ticks(3, vec![]);
        let mut app = app_with(backend);
        app.run();
        assert_eq!(app.backend().now_millis(), 3 * u64::from(1000 / TICK_HZ));
    }
}
