//! Interactive player loop
//!
//! Reads one command per input line and advances the simulated device by
//! one second per tick, forwarding its signals into the player.

use crate::error::{CliError, Result};
use crate::output::SimulatedOutput;
use crate::render::render_status;
use podcastr_core::AudioOutput;
use podcastr_playback::{PlaybackError, Player, SessionEvent};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

pub const HELP: &str = "\
Commands:
  p            play / pause
  n            next episode
  b            previous episode
  l            toggle loop
  s            toggle shuffle
  seek <secs>  jump within the episode
  c            clear the queue
  h            show this help
  q            quit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Next,
    Previous,
    ToggleLoop,
    ToggleShuffle,
    Seek(u64),
    Clear,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Command::Status);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "p" | "play" | "pause" => Command::TogglePlay,
            "n" | "next" => Command::Next,
            "b" | "back" | "prev" | "previous" => Command::Previous,
            "l" | "loop" => Command::ToggleLoop,
            "s" | "shuffle" => Command::ToggleShuffle,
            "c" | "clear" => Command::Clear,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "seek" => {
                let seconds = parts
                    .next()
                    .and_then(|arg| arg.parse::<u64>().ok())
                    .ok_or_else(|| CliError::UnknownCommand(line.trim().to_string()))?;
                Command::Seek(seconds)
            }
            _ => return Err(CliError::UnknownCommand(line.trim().to_string())),
        };

        if parts.next().is_some() {
            return Err(CliError::UnknownCommand(line.trim().to_string()));
        }

        Ok(command)
    }
}

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command against the player
pub fn apply<O: AudioOutput>(player: &mut Player<O>, command: Command) -> Result<Flow> {
    match command {
        Command::TogglePlay => {
            player.toggle_play()?;
        }
        Command::Next => {
            player.play_next()?;
        }
        Command::Previous => {
            player.play_previous()?;
        }
        Command::ToggleLoop => {
            player.toggle_loop()?;
        }
        Command::ToggleShuffle => {
            player.toggle_shuffle()?;
        }
        Command::Seek(seconds) => {
            player.seek(seconds)?;
        }
        Command::Clear => player.clear()?,
        Command::Status | Command::Help => {}
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Take the session's queued events
///
/// Returns true when the current episode changed or the queue emptied.
fn drain_session_events<O: AudioOutput>(player: &mut Player<O>) -> bool {
    let events = player.drain_events();
    for event in &events {
        trace!(?event, "Session event");
    }
    events.iter().any(SessionEvent::changes_source)
}

fn handle_line<O: AudioOutput, W: Write>(
    player: &mut Player<O>,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(err) => {
            writeln!(out, "{}\n{}", err, HELP)?;
            return Ok(Flow::Continue);
        }
    };

    if command == Command::Help {
        write!(out, "{}", HELP)?;
        return Ok(Flow::Continue);
    }

    let outcome = apply(player, command);
    // Status is rendered below either way
    drain_session_events(player);

    match outcome {
        Ok(Flow::Quit) => return Ok(Flow::Quit),
        Ok(Flow::Continue) => {}
        // Rejected by the session; nothing changed
        Err(CliError::Playback(
            err @ (PlaybackError::EmptyQueue | PlaybackError::NotPossible(_)),
        )) => {
            warn!(?command, error = %err, "Command rejected");
            writeln!(out, "{}", err)?;
        }
        Err(err) => return Err(err),
    }

    write!(out, "{}", render_status(player))?;
    out.flush()?;
    Ok(Flow::Continue)
}

/// Drive the player until the user quits
///
/// When `input` closes the loop keeps playing and returns once playback
/// stops, so piped input can play a queue through to the end.
pub async fn run<R, W>(
    player: &mut Player<SimulatedOutput>,
    input: R,
    out: &mut W,
    tick: Duration,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut input_open = true;

    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick completes immediately
    ticker.tick().await;

    drain_session_events(player);
    write!(out, "{}", render_status(player))?;
    out.flush()?;

    loop {
        if !input_open && !player.session().is_playing() {
            debug!("Input closed and playback stopped");
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => {
                        if handle_line(player, &line, out)? == Flow::Quit {
                            break;
                        }
                    }
                    None => {
                        debug!("Input closed");
                        input_open = false;
                    }
                }
            }
            _ = ticker.tick() => {
                for event in player.output_mut().advance(1) {
                    player.handle_device_event(event)?;
                }

                if drain_session_events(player) {
                    write!(out, "{}", render_status(player))?;
                    out.flush()?;
                }
            }
        }
    }

    Ok(())
}
