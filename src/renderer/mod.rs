//! Per-state scene composition
//!
//! Thin layer over the backend: owns the pre-rendered surfaces and knows
//! the draw order contract (background first, then entities, then text).
//! Reads game state, never mutates it.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Backend, BackendError, WHITE};
use crate::sim::{GamePhase, GameState};

const BACKGROUND_PATH: &str = "images/water_background.png";
const SHARK_PATHS: [&str; SHARK_FRAMES] = ["images/shark01.png", "images/shark02.png"];
const SHRIMP_PATH: &str = "images/shrimp.png";

/// Surfaces loaded and rasterized once at startup. The score text is the
/// only one re-rendered afterwards, and only when the score changes.
pub struct Assets<B: Backend> {
    background: B::Image,
    shark_frames: Vec<B::Image>,
    shrimp: B::Image,
    text_title: B::Image,
    text_details: B::Image,
    text_game_over: B::Image,
    text_score: B::Image,
    score_shown: u32,
}

impl<B: Backend> Assets<B> {
    /// Load every asset, once. Any failure aborts startup; the error names
    /// the missing resource.
    pub fn load(backend: &mut B) -> Result<Self, BackendError> {
        let background = backend.load_image(BACKGROUND_PATH)?;
        let background = backend.scale_image(background, WIDTH, HEIGHT);

        let mut shark_frames = Vec::with_capacity(SHARK_FRAMES);
        for path in SHARK_PATHS {
            let frame = backend.load_image(path)?;
            shark_frames.push(backend.scale_image(frame, SHARK_SIZE.0, SHARK_SIZE.1));
        }

        let shrimp = backend.load_image(SHRIMP_PATH)?;
        let shrimp = backend.scale_image(shrimp, SHRIMP_SIZE.0, SHRIMP_SIZE.1);

        let text_title = backend.render_text("Press SPACE to start", 36, WHITE);
        let text_details =
            backend.render_text("WASD to move shark. Can you catch 5 shrimp?", 24, WHITE);
        let text_game_over = backend.render_text("Game Over! Press SPACE to retry.", 48, WHITE);
        let text_score = backend.render_text("Score: 0", 32, WHITE);

        Ok(Self {
            background,
            shark_frames,
            shrimp,
            text_title,
            text_details,
            text_game_over,
            text_score,
            score_shown: 0,
        })
    }

    /// Re-render the score surface if the displayed value is stale
    pub fn sync_score(&mut self, backend: &mut B, score: u32) {
        if score != self.score_shown {
            self.text_score = backend.render_text(&format!("Score: {score}"), 32, WHITE);
            self.score_shown = score;
        }
    }
}

/// Composite one frame for the active phase
pub fn draw_frame<B: Backend>(backend: &mut B, assets: &Assets<B>, state: &GameState) {
    backend.draw_image(&assets.background, Vec2::ZERO);
    match state.phase {
        GamePhase::Opening => {
            draw_centered(backend, &assets.text_title, 0.0);
            draw_centered(backend, &assets.text_details, 40.0);
        }
        GamePhase::Playing => {
            backend.draw_image(&assets.shark_frames[state.anim.frame], state.shark.pos);
            backend.draw_image(&assets.shrimp, state.shrimp.pos);
            backend.draw_image(&assets.text_score, Vec2::from(SCORE_POS));
        }
        GamePhase::GameOver => {
            draw_centered(backend, &assets.text_game_over, 0.0);
            backend.draw_image(&assets.text_score, Vec2::from(SCORE_POS));
        }
    }
}

/// Blit with the image's center at screen center, shifted down by `y_offset`
fn draw_centered<B: Backend>(backend: &mut B, image: &B::Image, y_offset: f32) {
    let size = backend.image_size(image);
    let pos = Vec2::new(
        (WIDTH - size.x) / 2.0,
        (HEIGHT - size.y) / 2.0 + y_offset,
    );
    backend.draw_image(image, pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessBackend;

    fn setup() -> (HeadlessBackend, Assets<HeadlessBackend>, GameState) {
        let mut backend = HeadlessBackend::new();
        let assets = Assets::load(&mut backend).unwrap();
        let state = GameState::new(1, 0);
        (backend, assets, state)
    }

    #[test]
    fn test_load_fails_on_missing_asset() {
        let mut backend = HeadlessBackend::new();
        backend.set_missing("images/shark02.png");
        let err = Assets::<HeadlessBackend>::load(&mut backend).err().unwrap();
        assert!(err.to_string().contains("images/shark02.png"));
    }

    #[test]
    fn test_background_always_first() {
        let (mut backend, assets, mut state) = setup();
        for phase in [GamePhase::Opening, GamePhase::Playing, GamePhase::GameOver] {
            state.phase = phase;
            draw_frame(&mut backend, &assets, &state);
            backend.present();
            assert_eq!(backend.last_frame()[0].label, BACKGROUND_PATH);
        }
    }

    #[test]
    fn test_opening_frame_contents() {
        let (mut backend, assets, state) = setup();
        draw_frame(&mut backend, &assets, &state);
        backend.present();

        let labels: Vec<&str> = backend
            .last_frame()
            .iter()
            .map(|d| d.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                BACKGROUND_PATH,
                "text:Press SPACE to start",
                "text:WASD to move shark. Can you catch 5 shrimp?",
            ]
        );
        // Detail line sits 40 px below the title line
        let frame = backend.last_frame();
        let title_center_y = frame[1].pos.y + 36.0 / 2.0;
        let details_center_y = frame[2].pos.y + 24.0 / 2.0;
        assert_eq!(details_center_y - title_center_y, 40.0);
    }

    #[test]
    fn test_playing_frame_draws_entities_then_hud() {
        let (mut backend, mut assets, mut state) = setup();
        state.start_session(0);
        state.score = 2;
        assets.sync_score(&mut backend, state.score);
        draw_frame(&mut backend, &assets, &state);
        backend.present();

        let frame = backend.last_frame();
        assert_eq!(frame[1].label, "images/shark01.png");
        assert_eq!(frame[1].pos, state.shark.pos);
        assert_eq!(frame[2].label, "images/shrimp.png");
        assert_eq!(frame[3].label, "text:Score: 2");
        assert_eq!(frame[3].pos, Vec2::from(SCORE_POS));
    }

    #[test]
    fn test_playing_uses_current_animation_frame() {
        let (mut backend, assets, mut state) = setup();
        state.start_session(0);
        state.anim.frame = 1;
        draw_frame(&mut backend, &assets, &state);
        backend.present();
        assert_eq!(backend.last_frame()[1].label, "images/shark02.png");
    }

    #[test]
    fn test_game_over_frame_keeps_final_score() {
        let (mut backend, mut assets, mut state) = setup();
        state.start_session(0);
        state.score = WIN_SCORE;
        state.phase = GamePhase::GameOver;
        assets.sync_score(&mut backend, state.score);
        draw_frame(&mut backend, &assets, &state);
        backend.present();

        let frame = backend.last_frame();
        assert_eq!(frame[1].label, "text:Game Over! Press SPACE to retry.");
        assert_eq!(frame[2].label, "text:Score: 5");
        assert_eq!(frame[2].pos, Vec2::from(SCORE_POS));
    }

    #[test]
    fn test_score_text_rendered_only_on_change() {
        let (mut backend, mut assets, _) = setup();
        let after_load = backend.text_renders;

        assets.sync_score(&mut backend, 0);
        assets.sync_score(&mut backend, 0);
        assert_eq!(backend.text_renders, after_load);

        assets.sync_score(&mut backend, 1);
        assert_eq!(backend.text_renders, after_load + 1);
        assets.sync_score(&mut backend, 1);
        assert_eq!(backend.text_renders, after_load + 1);
    }
}
