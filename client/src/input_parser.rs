use anyhow::Result;
use connect4::Action;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    NewGame,
    MakeMove(Action),
    Board,
    Status,
    Help,
    Quit,
    Noop,
}

static MAKE_MOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^makemove\s+(\S+)$").unwrap());
static BARE_MOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

pub fn parse_line(line: &str) -> Result<SessionCommand> {
    let line = line.trim();

    match line {
        "newgame" | "reset" => Ok(SessionCommand::NewGame),
        "board" => Ok(SessionCommand::Board),
        "status" => Ok(SessionCommand::Status),
        "help" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        // makemove 4
        _ if MAKE_MOVE_RE.is_match(line) => {
            let cap = MAKE_MOVE_RE.captures(line).unwrap();
            Ok(SessionCommand::MakeMove(cap[1].parse()?))
        }
        _ if BARE_MOVE_RE.is_match(line) => Ok(SessionCommand::MakeMove(line.parse()?)),
        cmd if cmd.is_empty() => Ok(SessionCommand::Noop),
        _ => {
            anyhow::bail!("Command '{}' is unknown, type 'help' for the list", line);
        }
    }
}
