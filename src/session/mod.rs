//! Interactive play
//!
//! A `Session` is one puzzle in progress; `Game` is the caller-facing API that
//! starts sessions, applies moves and serves hints.

mod game;
mod hint;
mod state;

pub use game::{Game, StartRequest};
pub use hint::{Hint, HintDetail};
pub use state::{GameStatus, Session, SessionSnapshot};
