//! Interactive line-oriented front end.
//!
//! Reads commands such as `new bot 5` or `move e2 e4`, plays the bot's
//! replies after a short presentation delay, and hands finished games to the
//! ledger for ratings and achievements.

mod command;
mod session;

pub use command::*;
pub use session::*;
