//! GSI command parser.
//!
//! Parses incoming GSI (Go Scoring Interface) commands from raw text into
//! structured `Command` variants that the engine main loop can dispatch on.

/// A parsed client-to-engine GSI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the GSI handshake.
    Gsi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the position from a board diagram.
    Position { diagram: String },

    /// Set the position from a JSON object.
    PositionJson { json: String },

    /// Set the stones captured during play by each color.
    Captures { black: u32, white: u32 },

    /// Toggle the dead mark of the stone at `(x, y)`.
    Dead { x: usize, y: usize },

    /// Print the per-point classification.
    Classify,

    /// Print the final score.
    Score,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let (&keyword, _) = tokens.split_first()?;

    match keyword {
        "gsi" => Some(Command::Gsi),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "classify" => Some(Command::Classify),
        "score" => Some(Command::Score),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "positionjson" => parse_position_json(trimmed),
        "captures" => parse_captures(&tokens),
        "dead" => parse_dead(&tokens),

        other => {
            log::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        log::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let (name, value) = match tokens.iter().position(|&t| t == "value") {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                log::warn!("malformed setoption: empty name");
                return None;
            }
            let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <diagram>`. A diagram split over several tokens is
/// joined row by row.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        log::warn!("malformed position: expected 'position <diagram>'");
        return None;
    }
    Some(Command::Position {
        diagram: tokens[1..].join("/"),
    })
}

/// Parses `positionjson <json>`; the JSON is the rest of the line.
fn parse_position_json(line: &str) -> Option<Command> {
    let json = line.strip_prefix("positionjson").unwrap_or_default().trim();
    if json.is_empty() {
        log::warn!("malformed positionjson: expected 'positionjson <json>'");
        return None;
    }
    Some(Command::PositionJson { json: json.to_string() })
}

/// Parses `captures <black> <white>`.
fn parse_captures(tokens: &[&str]) -> Option<Command> {
    match tokens {
        [_, black, white] => match (black.parse(), white.parse()) {
            (Ok(black), Ok(white)) => Some(Command::Captures { black, white }),
            _ => {
                log::warn!("invalid capture counts: '{}' '{}'", black, white);
                None
            }
        },
        _ => {
            log::warn!("malformed captures: expected 'captures <black> <white>'");
            None
        }
    }
}

/// Parses `dead <x> <y>`.
fn parse_dead(tokens: &[&str]) -> Option<Command> {
    match tokens {
        [_, x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Some(Command::Dead { x, y }),
            _ => {
                log::warn!("invalid coordinates: '{}' '{}'", x, y);
                None
            }
        },
        _ => {
            log::warn!("malformed dead: expected 'dead <x> <y>'");
            None
        }
    }
}
