use anyhow::{bail, Context, Result};
use bot::Difficulty;
use magic_core::{parse_move, parse_square, GameMode, Move, Square};

/// One input line of the play loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New(NewGame),
    Move(Move),
    Board,
    Moves(Square),
    Resign,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewGame {
    Local,
    /// `None` means the configured default level.
    Bot(Option<Difficulty>),
    Online,
}

impl NewGame {
    pub fn mode(self, default_difficulty: Difficulty) -> GameMode {
        match self {
            NewGame::Local => GameMode::Local,
            NewGame::Online => GameMode::Online,
            NewGame::Bot(d) => GameMode::Bot {
                difficulty: d.unwrap_or(default_difficulty).level(),
            },
        }
    }
}

/// Parses one line. Blank lines give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = parts.split_first() else {
        return Ok(None);
    };

    let cmd = match (head, rest) {
        ("new", ["local"]) => Command::New(NewGame::Local),
        ("new", ["online"]) => Command::New(NewGame::Online),
        ("new", ["bot"]) => Command::New(NewGame::Bot(None)),
        ("new", ["bot", level]) => {
            let n: u8 = level
                .parse()
                .with_context(|| format!("bot level {level:?} is not a number"))?;
            Command::New(NewGame::Bot(Some(Difficulty::new(n)?)))
        }
        ("new", _) => bail!("usage: new local | bot [1-10] | online"),
        ("move" | "m", [from, to]) => {
            Command::Move(Move::new(parse_square(from)?, parse_square(to)?))
        }
        ("move" | "m", [joined]) => Command::Move(parse_move(joined)?),
        ("move" | "m", _) => bail!("usage: move <from> <to>"),
        ("board" | "b", []) => Command::Board,
        ("moves", [square]) => Command::Moves(parse_square(square)?),
        ("moves", _) => bail!("usage: moves <square>"),
        ("resign", []) => Command::Resign,
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit" | "q", _) => Command::Quit,
        _ => bail!("unknown command {line:?}, try `help`", line = line.trim()),
    };
    Ok(Some(cmd))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
