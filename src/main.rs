//! Ocean Chase entry point
//!
//! Runs a scripted session on the deterministic headless backend and logs
//! the outcome. Wiring a real windowed backend is a platform integration
//! concern; the game core is complete behind the `Backend` trait.

use ocean_chase::App;
use ocean_chase::platform::{Event, HeadlessBackend, Key};

fn main() {
    env_logger::init();
    log::info!("Ocean Chase (headless demo) starting...");

    let mut backend = HeadlessBackend::new();
    script_demo(&mut backend);

    let seed = 0xB0A7;
    let mut app = match App::new(backend, seed) {
        Ok(app) => app,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };
    app.run();

    log::info!(
        "demo finished in {:?} with score {}",
        app.state().phase,
        app.state().score
    );
}

/// A short session: look at the opening screen, start, chase the shrimp
/// up and to the right for a few seconds, then quit.
fn script_demo(backend: &mut HeadlessBackend) {
    backend.push_held_ticks(30, vec![]);
    backend.push_tick(vec![Event::KeyDown(Key::Start)], vec![]);
    backend.push_held_ticks(90, vec![Key::Right, Key::Up]);
    backend.push_held_ticks(90, vec![Key::Left, Key::Down]);
    backend.push_tick(vec![Event::Quit], vec![]);
}
