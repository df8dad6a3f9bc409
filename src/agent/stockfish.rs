use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use super::MoveSuggester;
use crate::config::SessionConfig;
use crate::error::SuggestError;
use crate::game_repr::{Move, Position};
use crate::notation::parse_coordinate_move;

/// Extra time allowed past `movetime` before the engine counts as hung.
pub const REPLY_GRACE: Duration = Duration::from_secs(2);

/// Owns the engine process. Dropping it kills and reaps the engine unless
/// it already exited, so no error path leaves a zombie behind.
struct EngineProcess {
    child: Child,
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        if let Ok(Some(_)) = self.child.try_wait() {
            return;
        }
        if let Err(e) = self.child.kill() {
            debug!("could not kill engine process: {}", e);
        }
        if let Err(e) = self.child.wait() {
            warn!("could not reap engine process: {}", e);
        }
    }
}

/// Asks an external UCI engine for its best move.
///
/// A fresh process is spawned per request, so there is no engine state to
/// keep in sync with the game.
pub struct StockfishSuggester {
    path: String,
    skill: u8,
    movetime: Duration,
}

impl StockfishSuggester {
    pub fn new(path: impl Into<String>, skill: u8, movetime: Duration) -> Self {
        Self {
            path: path.into(),
            skill: skill.clamp(1, 20),
            movetime,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.stockfish_path.clone(), config.difficulty, config.movetime)
    }

    pub fn skill(&self) -> u8 {
        self.skill
    }

    pub fn set_skill(&mut self, skill: u8) {
        self.skill = skill.clamp(1, 20);
    }

    /// Raw `bestmove` token for a FEN.
    ///
    /// Gives up with [`SuggestError::Timeout`] if no answer arrives within
    /// `movetime` plus [`REPLY_GRACE`].
    pub fn best_move_text(&self, fen: &str) -> Result<String, SuggestError> {
        let mut process = EngineProcess {
            child: Command::new(&self.path)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()?,
        };

        let mut stdin = process.child.stdin.take().ok_or(SuggestError::EngineClosed)?;
        let stdout = process.child.stdout.take().ok_or(SuggestError::EngineClosed)?;

        // the reader ends at EOF, which killing the engine guarantees
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else {
                    return;
                };
                if let Some(token) = parse_bestmove(&line) {
                    // the receiver may have timed out already
                    let _ = tx.send(token.to_string());
                    return;
                }
            }
        });

        writeln!(stdin, "setoption name Skill Level value {}", self.skill)?;
        writeln!(stdin, "position fen {}", fen)?;
        writeln!(stdin, "go movetime {}", self.movetime.as_millis())?;
        stdin.flush()?;

        let limit = self.movetime + REPLY_GRACE;
        let answer = match rx.recv_timeout(limit) {
            Ok(token) => token,
            Err(RecvTimeoutError::Timeout) => {
                warn!("{} did not answer within {:?}", self.path, limit);
                return Err(SuggestError::Timeout(limit));
            }
            Err(RecvTimeoutError::Disconnected) => return Err(SuggestError::EngineClosed),
        };

        // best effort, the engine may already be gone
        if writeln!(stdin, "quit").is_err() {
            debug!("engine closed its input before quit");
        }
        drop(stdin);
        if let Err(e) = process.child.wait() {
            warn!("could not reap engine process: {}", e);
        }

        Ok(answer)
    }
}

impl Default for StockfishSuggester {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

/// The move token of a `bestmove <move> [ponder <move>]` line.
pub fn parse_bestmove(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some("bestmove"), Some(token)) => Some(token),
        _ => None,
    }
}

impl MoveSuggester for StockfishSuggester {
    fn suggest(&mut self, position: &Position) -> Result<Move, SuggestError> {
        let fen = position.to_fen();
        debug!("asking {} (skill {}) about {}", self.path, self.skill, fen);

        let reply = self.best_move_text(&fen)?;
        if reply == "(none)" {
            return Err(SuggestError::NoMove);
        }

        parse_coordinate_move(position, &reply).map_err(|source| SuggestError::BadReply { reply, source })
    }

    fn set_difficulty(&mut self, level: u8) {
        self.set_skill(level);
    }

    fn name(&self) -> &str {
        "stockfish"
    }
}
