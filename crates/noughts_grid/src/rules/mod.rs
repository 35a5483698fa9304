//! Terminal-state rules.

mod draw;
mod win;

pub(crate) use draw::is_full;
pub use win::LINES;
pub(crate) use win::{check_winner, has_line};
