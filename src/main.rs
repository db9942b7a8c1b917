//! jigo -- a Go scoring engine implementing the GSI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the GSI (Go Scoring Interface) convention. Diagnostics go to
//! stderr through `env_logger`; set `RUST_LOG` to see them.

use std::io::{self, BufRead};

use jigo::engine::{Engine, EngineError};
use jigo::protocol::parser::{parse_command, Command};

/// Runs the main GSI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let result: Result<(), EngineError> = match cmd {
            Command::Gsi => engine.handle_gsi(&mut out).map_err(Into::into),
            Command::IsReady => engine.handle_isready(&mut out).map_err(Into::into),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::NewGame => {
                engine.new_game();
                Ok(())
            }
            Command::Position { diagram } => engine.set_position(&diagram),
            Command::PositionJson { json } => engine.set_position_json(&json),
            Command::Captures { black, white } => {
                engine.set_captures(black, white);
                Ok(())
            }
            Command::Dead { x, y } => engine.toggle_dead(x, y).map(|dead| {
                log::debug!("({}, {}) marked {}", x, y, if dead { "dead" } else { "alive" });
            }),
            Command::Classify => engine.handle_classify(&mut out),
            Command::Score => engine.handle_score(&mut out),
            Command::Quit => break,
        };

        if let Err(e) = result {
            log::error!("{}", e);
        }
    }
}
