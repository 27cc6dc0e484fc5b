//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The service never tracks
//! turns, so these only answer questions about a board as given.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
