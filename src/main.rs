use std::io::{stdout, BufWriter};

use rand::thread_rng;

use arena_shooter::config::GameConfig;
use arena_shooter::error::GameError;
use arena_shooter::game_loop;
use arena_shooter::terminal::TerminalBackend;

// ── Entry point ───────────────────────────────────────────────────────────────

/// No tracing subscriber is installed: the terminal is in raw alternate-screen
/// mode and any log line written to it would tear the frame.
fn main() -> Result<(), GameError> {
    let config = GameConfig::default();
    config.validate()?;

    let out = BufWriter::new(stdout());
    let mut backend = TerminalBackend::open(out, config.width, config.height)?;

    let result = game_loop::run(&mut backend, config, &mut thread_rng());

    // Always restore the terminal, even when the loop failed
    let restored = backend.shutdown();
    result?;
    restored
}
