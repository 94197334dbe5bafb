/// Frame-loop driver: glues a `Backend` to the pure simulation in `compute`.

use rand::Rng;
use tracing::info;

use crate::backend::{Backend, InputEvent, MouseButton};
use crate::clock::FrameClock;
use crate::compute::{init_state, step};
use crate::config::GameConfig;
use crate::display;
use crate::entities::GameState;
use crate::error::GameError;
use crate::input::FrameInput;

/// Gather this frame's input from the backend.  Returns `None` once a quit
/// event arrives; clicks queued before it in the same batch are dropped.
pub fn collect_input<B: Backend + ?Sized>(backend: &mut B) -> Result<Option<FrameInput>, GameError> {
    let mut clicks = Vec::new();
    for event in backend.poll_events()? {
        match event {
            InputEvent::Quit => return Ok(None),
            // Bullets aim at the cursor as it is now, not where the click
            // was reported.
            InputEvent::MouseDown {
                button: MouseButton::Left,
                ..
            } => clicks.push(backend.mouse_pos()),
            InputEvent::MouseDown { .. } => {}
        }
    }
    Ok(Some(FrameInput {
        keys: backend.key_state(),
        clicks,
    }))
}

/// One full frame: input, simulation step, render.  `Ok(None)` means quit.
pub fn run_frame<B: Backend + ?Sized>(
    backend: &mut B,
    state: &GameState,
    dt: f32,
    rng: &mut impl Rng,
) -> Result<Option<GameState>, GameError> {
    let Some(input) = collect_input(backend)? else {
        return Ok(None);
    };
    let next = step(state, dt, &input, rng);
    display::render(backend, &next)?;
    Ok(Some(next))
}

/// Play until the backend reports quit.  Returns the final state.
pub fn run<B: Backend + ?Sized>(
    backend: &mut B,
    config: GameConfig,
    rng: &mut impl Rng,
) -> Result<GameState, GameError> {
    config.validate()?;
    let mut state = init_state(config, rng);
    let mut clock = FrameClock::new(config.target_fps);
    info!(
        width = config.width,
        height = config.height,
        fps = config.target_fps,
        "session started"
    );

    loop {
        let dt = clock.tick();
        match run_frame(backend, &state, dt, rng)? {
            Some(next) => state = next,
            None => break,
        }
    }

    info!(
        score = state.player.score,
        frames = state.frame,
        "session ended"
    );
    Ok(state)
}
