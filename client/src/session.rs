use std::io::{BufRead, Write};

use anyhow::Result;
use connect4::{Action, GameEngine, GameOutcome, MoveError};
use engine::GameEngine as _;
use itertools::Itertools;
use log::{info, warn};

use crate::{parse_line, write_outputs, ClientOptions, Output, SessionCommand, Snapshot};

const HELP: [&str; 6] = [
    "newgame        start over with an empty board",
    "makemove <n>   drop a piece into column n (1-7), 'n' alone also works",
    "board          show the board",
    "status         show whose turn it is or how the game ended",
    "help           show this list",
    "quit           leave",
];

/// What came of a single move: the lines to print and whether the engine took it.
struct MoveReport {
    accepted: bool,
    outputs: Vec<Output>,
}

/// Owns the current game and turns commands into player-facing output.
pub struct Session {
    game: GameEngine,
    options: ClientOptions,
}

impl Session {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            game: connect4::new_game(),
            options,
        }
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    pub fn handle(&mut self, command: SessionCommand) -> Result<Vec<Output>> {
        let outputs = match command {
            SessionCommand::NewGame => {
                info!("Starting a new game");
                self.game = connect4::new_game();
                self.render(None)?
            }
            SessionCommand::MakeMove(action) => self.make_move(action)?.outputs,
            SessionCommand::Board => vec![Output::Board(self.game.to_string())],
            SessionCommand::Status => vec![self.status()],
            SessionCommand::Help => HELP.iter().map(|line| Output::info(*line)).collect(),
            SessionCommand::Quit | SessionCommand::Noop => vec![],
        };

        Ok(outputs)
    }

    fn make_move(&mut self, action: Action) -> Result<MoveReport> {
        let outputs = match self.game.take_action(&action) {
            Ok(_) => {
                return Ok(MoveReport {
                    accepted: true,
                    outputs: self.render(Some(action))?,
                });
            }
            Err(MoveError::InvalidMove { .. }) => {
                let open = self
                    .game
                    .valid_columns()
                    .into_iter()
                    .map(|column| Action::DropPiece(column).to_string())
                    .join(" ");
                vec![Output::cmd(
                    "invalid",
                    format!("column {} is full or does not exist, open columns: {}", action, open),
                )]
            }
            Err(err @ MoveError::GameOver(_)) => vec![
                Output::cmd("invalid", err.to_string()),
                Output::info("type 'newgame' to play again"),
            ],
        };

        Ok(MoveReport {
            accepted: false,
            outputs,
        })
    }

    fn render(&self, last_move: Option<Action>) -> Result<Vec<Output>> {
        if self.options.json {
            let json = Snapshot::new(&self.game, last_move).to_json()?;
            return Ok(vec![Output::Json(json)]);
        }

        let mut outputs = vec![];
        if self.options.show_board {
            outputs.push(Output::Board(self.game.to_string()));
        }
        outputs.push(self.status());

        Ok(outputs)
    }

    fn status(&self) -> Output {
        match self.game.outcome() {
            GameOutcome::InProgress => {
                Output::cmd("turn", self.options.name_of(self.game.current_player()))
            }
            GameOutcome::Win(player) => Output::cmd("winner", self.options.name_of(player)),
            GameOutcome::Tie => Output::cmd("tie", ""),
        }
    }
}

/// Reads commands line by line until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(input: R, out: &mut W, options: ClientOptions) -> Result<()> {
    let mut session = Session::new(options);

    write_outputs(out, &[Output::info("connect four, type 'help' for commands")])?;
    let outputs = session.handle(SessionCommand::NewGame)?;
    write_outputs(out, &outputs)?;

    for line in input.lines() {
        let line = line?;

        match parse_line(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => {
                let outputs = session.handle(command)?;
                write_outputs(out, &outputs)?;
            }
            Err(err) => {
                warn!("Ignoring input {:?}: {}", line, err);
                write_outputs(out, &[Output::cmd("invalid", err.to_string())])?;
            }
        }
    }

    Ok(())
}

/// Plays `moves` into a fresh game. Moves that cannot be parsed or played are reported and
/// skipped, the rest keep going.
pub fn replay<W: Write>(moves: &[String], out: &mut W, options: ClientOptions) -> Result<GameOutcome> {
    let show_each_move = options.json;
    let mut session = Session::new(options);

    for mv in moves {
        let action = match mv.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                write_outputs(out, &[Output::cmd("invalid", err.to_string())])?;
                continue;
            }
        };

        let report = session.make_move(action)?;

        if show_each_move || !report.accepted {
            write_outputs(out, &report.outputs)?;
        }
    }

    if !show_each_move {
        let outputs = session.render(None)?;
        write_outputs(out, &outputs)?;
    }

    Ok(session.game().outcome())
}
