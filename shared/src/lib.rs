//! Types shared between the holdem bot core and its wire transport.
//!
//! Everything here mirrors the JSON the dojo game server speaks: cards with
//! token/glyph encodings, betting rounds, player snapshots and the per-update
//! `RoundEvent`.

pub mod cards;
pub mod event;
pub mod game;
pub mod hand;
pub mod player;

pub use cards::{Card, CardError, Rank, Suit};
pub use event::{RoundEvent, MOVE_SUFFIX, NEW_HAND_MARKER};
pub use game::{Action, Round};
pub use hand::Combination;
pub use player::{PlayerSnapshot, PlayerStatus};
