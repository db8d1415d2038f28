//! Rock Blaster entry point
//!
//! Runs a scripted headless demo round at the fixed simulation rate and
//! logs how it went. A rendering front end would drive `sim::tick` the
//! same way, once per frame.

use rock_blaster::consts::TICK_HZ;
use rock_blaster::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("Rock Blaster (headless demo) starting with seed {seed}");

    let mut state = GameState::new(seed);

    // Leave the welcome screen
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );

    // Sweep-and-shoot script: rotate steadily, fire whenever the cooldown
    // allows, nudge the throttle now and then
    let max_ticks = u64::from(TICK_HZ) * 120;
    while state.time_ticks < max_ticks {
        let input = TickInput {
            turn_left: state.time_ticks % 4 == 0,
            thrust: state.time_ticks % 90 < 6,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        // Back on the welcome screen means the run played itself out
        if state.phase == GamePhase::Starting {
            break;
        }
    }

    log::info!(
        "demo finished after {} ticks: score {}, {} lives left, {} rocks live",
        state.time_ticks,
        state.score,
        state.lives,
        state.rocks.len()
    );
    println!("score: {}", state.score);
}
