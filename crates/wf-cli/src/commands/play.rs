//! Play a map interactively on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use wf_core::{GameMap, RoomId};
use wf_fiction::{Condition, Ending, FictionSession, SessionConfig};

const PROMPT: &str = "What would you like to do? ";
const UNREADABLE: &str = "Sorry, that line could not be read.";

/// Session settings taken from the command line.
pub struct PlayOptions {
    pub start: String,
    pub seed: Option<u64>,
    pub event_chance: f64,
    pub match_threshold: f64,
    pub win_item: String,
    pub lose_room: String,
    pub guard_item: String,
    pub sandbox: bool,
}

pub fn run(map_path: &Path, options: &PlayOptions) -> Result<(), String> {
    let map = super::load_map(map_path)?;
    let mut session = build_session(map, options)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn build_session(map: GameMap, options: &PlayOptions) -> Result<FictionSession, String> {
    let mut config = SessionConfig::default()
        .with_start_room(RoomId::from(options.start.as_str()))
        .with_event_chance(options.event_chance)
        .with_match_threshold(options.match_threshold);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }

    let session =
        FictionSession::new(map, config).map_err(|e| format!("failed to start session: {e}"))?;
    if options.sandbox {
        return Ok(session);
    }

    if session.map().find_by_name(&options.lose_room).is_none() {
        tracing::warn!(room = %options.lose_room, "lose room is not in the map");
    }
    tracing::info!(
        win_item = %options.win_item,
        lose_room = %options.lose_room,
        guard_item = %options.guard_item,
        "goals set"
    );

    let win = Condition::holding(&options.win_item);
    let lose = Condition::in_room(&options.lose_room)
        .and(Condition::holding(&options.guard_item).negate());
    Ok(session.with_win(win).with_lose(lose))
}

/// Run the session loop until the game ends or input runs out.
///
/// Returns the ending, or `None` on end of input.
fn play<R: BufRead, W: Write>(
    session: &mut FictionSession,
    mut input: R,
    mut output: W,
) -> Result<Option<Ending>, String> {
    let room = session.describe_current().map_err(|e| e.to_string())?;
    writeln!(output, "{room}\n").map_err(|e| e.to_string())?;

    let mut line = String::new();
    loop {
        if let Some(event) = session.roll_event() {
            writeln!(output, "{}\n", event.italic()).map_err(|e| e.to_string())?;
        }

        write!(output, "{PROMPT}").map_err(|e| e.to_string())?;
        output.flush().map_err(|e| e.to_string())?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                // EOF
                writeln!(output).map_err(|e| e.to_string())?;
                tracing::info!(turns = session.player().turns(), "input closed");
                return Ok(None);
            }
            // The bad line is consumed, so the next read starts fresh.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(%e, "unreadable input line");
                writeln!(output, "{}\n", UNREADABLE.yellow()).map_err(|e| e.to_string())?;
                continue;
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let reply = session.process(line.trim());
        if reply.is_rejected() {
            writeln!(output, "{}\n", reply.text.yellow()).map_err(|e| e.to_string())?;
        } else {
            writeln!(output, "{}\n", reply.text).map_err(|e| e.to_string())?;
        }

        if let Some(ending) = reply.ending() {
            return Ok(Some(ending));
        }
    }
}
