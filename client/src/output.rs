use std::fmt::{self, Display, Formatter};
use std::io::Write;

use anyhow::Result;
use connect4::{Action, Board, GameEngine, GameOutcome, PlayerId};
use serde::Serialize;

/// A single message for the player. Everything except `Board` fits on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Command(String, String),
    Info(String),
    Board(String),
    Json(String),
}

impl Output {
    pub fn cmd(cmd: &str, msg: impl Into<String>) -> Self {
        Output::Command(cmd.to_string(), msg.into())
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Output::Info(msg.into())
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Output::Command(cmd, msg) if msg.is_empty() => write!(f, "{}", cmd),
            Output::Command(cmd, msg) => write!(f, "{} {}", cmd, msg),
            Output::Info(msg) => write!(f, "info {}", msg),
            Output::Board(board) => write!(f, "{}", board.trim_end()),
            Output::Json(json) => write!(f, "{}", json),
        }
    }
}

pub fn write_outputs<W: Write>(out: &mut W, outputs: &[Output]) -> Result<()> {
    for output in outputs {
        writeln!(out, "{}", output)?;
    }
    out.flush()?;

    Ok(())
}

/// Machine readable view of a game, emitted as one JSON line.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub current_player: PlayerId,
    pub outcome: GameOutcome,
    pub move_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_move: Option<Action>,
}

impl<'a> Snapshot<'a> {
    pub fn new(game: &'a GameEngine, last_move: Option<Action>) -> Self {
        Self {
            board: game.board(),
            current_player: game.current_player(),
            outcome: game.outcome(),
            move_number: game.move_number(),
            last_move,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
