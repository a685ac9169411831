use std::io::{BufRead, Write};
use std::thread;

use anyhow::Result;
use arena::{GameRecord, GameStore, GameTally, Settings};
use bot::{BotPlayer, Difficulty};
use magic_core::{
    legal_moves_from, sq_to_coord, Color, CoreError, Game, GameEvent, GameMode, MoveReport,
    Outcome, Square,
};
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::command::{parse_command, Command};

const HELP: &str = "\
commands:
  new local | bot [1-10] | online   start a game
  move <from> <to>                  e.g. move e2 e4
  moves <square>                    legal destinations of a piece
  board                             show the board
  resign                            give up the current game
  quit                              leave";

/// The human always sits at white in bot games.
const HUMAN: Color = Color::White;

pub struct Session<S: GameStore, W: Write> {
    settings: Settings,
    store: S,
    out: W,
    rng: StdRng,
    game: Option<Game>,
    bot: Option<BotPlayer>,
    tally: GameTally,
}

impl<S: GameStore, W: Write> Session<S, W> {
    pub fn new(settings: Settings, store: S, out: W) -> Self {
        let rng = settings.rng();
        Self {
            settings,
            store,
            out,
            rng,
            game: None,
            bot: None,
            tally: GameTally::default(),
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, W) {
        (self.store, self.out)
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Bad input is reported and skipped; only output failures end the loop
    /// with an error.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(
            self.out,
            "Magic Chess, playing as {}. Type `help` for commands.",
            self.settings.username
        )?;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(cmd)) => self.handle(cmd)?,
                Err(e) => writeln!(self.out, "error: {e:#}")?,
            }
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn handle(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::New(new_game) => {
                let mode = new_game.mode(self.settings.default_difficulty);
                self.start(Game::new(mode))?;
            }
            Command::Move(mv) => self.human_move(mv)?,
            Command::Board => self.show_board()?,
            Command::Moves(from) => self.show_moves(from)?,
            Command::Resign => self.resign()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Replaces the current game. Bot games seat a bot at black.
    pub fn start(&mut self, game: Game) -> Result<()> {
        self.bot = match game.mode() {
            GameMode::Bot { difficulty } => {
                Some(BotPlayer::new(Difficulty::new(difficulty)?, HUMAN.other()))
            }
            GameMode::Local | GameMode::Online => None,
        };
        if let Err(e) = self.store.profile(&self.settings.username) {
            warn!(error = %e, "could not load profile");
        }
        self.tally = GameTally::default();

        match game.mode() {
            GameMode::Bot { difficulty } => {
                writeln!(self.out, "New game against a level {difficulty} bot.")?
            }
            GameMode::Local => writeln!(self.out, "New local game.")?,
            GameMode::Online => {
                writeln!(self.out, "Online play is not available; starting a local game.")?
            }
        }
        self.game = Some(game);
        self.show_board()
    }

    fn human_move(&mut self, mv: magic_core::Move) -> Result<()> {
        let Some(game) = self.game.as_mut() else {
            writeln!(self.out, "No game in progress, start one with `new`.")?;
            return Ok(());
        };
        if self.bot.is_some() && !game.is_over() && game.turn() != HUMAN {
            writeln!(self.out, "Not your turn; the bot moves first.")?;
            return self.bot_turn();
        }
        let report = match game.play(mv) {
            Ok(report) => report,
            Err(CoreError::IllegalMove(reason)) => {
                writeln!(self.out, "Illegal move {mv}: {reason}.")?;
                return Ok(());
            }
            Err(e) => {
                writeln!(self.out, "{e}.")?;
                return Ok(());
            }
        };
        self.after_move(&report)?;
        if report.outcome.is_some() {
            return self.finish();
        }
        if self.bot.is_some() {
            self.bot_turn()?;
        }
        Ok(())
    }

    fn bot_turn(&mut self) -> Result<()> {
        let (Some(game), Some(bot)) = (self.game.as_mut(), self.bot.as_mut()) else {
            return Ok(());
        };
        if game.turn() != bot.color() {
            return Ok(());
        }

        let delay = self.settings.bot_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        match bot.play_turn(game, &mut self.rng) {
            Ok(report) => {
                self.after_move(&report)?;
                if report.outcome.is_some() {
                    return self.finish();
                }
                Ok(())
            }
            Err(CoreError::NoLegalMove(color)) => {
                writeln!(self.out, "{color} has no legal move; the game is drawn.")?;
                game.declare_draw()?;
                self.finish()
            }
            Err(e) => {
                warn!(error = %e, "bot could not move");
                writeln!(self.out, "The bot could not move: {e}.")?;
                Ok(())
            }
        }
    }

    fn after_move(&mut self, report: &MoveReport) -> Result<()> {
        self.tally.observe(report);
        let mut events: Vec<GameEvent> = Vec::new();
        report.publish(&mut events);
        for event in &events {
            if let Some(line) = describe(event) {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn resign(&mut self) -> Result<()> {
        let Some(game) = self.game.as_mut() else {
            writeln!(self.out, "No game in progress.")?;
            return Ok(());
        };
        let color = if self.bot.is_some() { HUMAN } else { game.turn() };
        match game.resign(color) {
            Ok(_) => {
                writeln!(self.out, "{color} resigns.")?;
                self.finish()
            }
            Err(e) => {
                writeln!(self.out, "{e}.")?;
                Ok(())
            }
        }
    }

    /// Announces the result and hands the game to the store. A store
    /// failure is reported but leaves the finished game in place.
    fn finish(&mut self) -> Result<()> {
        let Some(game) = self.game.as_ref() else {
            return Ok(());
        };
        match game.outcome() {
            Some(Outcome::Win(color)) => writeln!(self.out, "Game over: {color} wins.")?,
            Some(Outcome::Draw) => writeln!(self.out, "Game over: draw.")?,
            None => return Ok(()),
        }

        let white = Some(self.settings.username.clone());
        let saved = GameRecord::from_game(game, white, None, self.tally)
            .and_then(|record| self.store.record_game(record));
        match saved {
            Ok(updates) => {
                for update in updates {
                    debug!(
                        player = %update.profile.username,
                        delta = update.rating_delta,
                        "profile updated"
                    );
                    writeln!(
                        self.out,
                        "{}: rating {} ({:+})",
                        update.profile.username, update.profile.rating, update.rating_delta
                    )?;
                    for a in update.unlocked {
                        writeln!(
                            self.out,
                            "Achievement unlocked: {} - {}",
                            a.name(),
                            a.description()
                        )?;
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "game not saved");
                writeln!(self.out, "Could not save the game: {e}.")?;
            }
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let Some(game) = self.game.as_ref() else {
            writeln!(self.out, "No game in progress.")?;
            return Ok(());
        };
        write!(self.out, "{}", game.board())?;
        if !game.is_over() {
            writeln!(self.out, "{} to move.", game.turn())?;
        }
        Ok(())
    }

    fn show_moves(&mut self, from: Square) -> Result<()> {
        let Some(game) = self.game.as_ref() else {
            writeln!(self.out, "No game in progress.")?;
            return Ok(());
        };
        let Some(piece) = game.board().piece_at(from) else {
            writeln!(self.out, "No piece on {from}.")?;
            return Ok(());
        };
        let dests: Vec<String> = legal_moves_from(game.board(), from)
            .into_iter()
            .map(|mv| sq_to_coord(mv.to))
            .collect();
        if dests.is_empty() {
            writeln!(self.out, "{piece} on {from} has no legal moves.")?;
        } else {
            writeln!(self.out, "{piece} on {from}: {}", dests.join(" "))?;
        }
        Ok(())
    }
}

/// One line per presentation event; the game-over line comes from `finish`.
fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Moved { piece, mv } => Some(format!("{piece}: {} -> {}", mv.from, mv.to)),
        GameEvent::Captured { by, victim, at } => Some(format!("  {by} captures {victim} on {at}")),
        GameEvent::Teleported { .. } => Some("  the mage teleports".to_string()),
        GameEvent::DragonFlight { .. } => Some("  the dragon takes flight".to_string()),
        GameEvent::GameOver(_) => None,
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
