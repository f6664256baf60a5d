//! Win and draw rules, defined once and shared by every status and
//! validation path.

mod draw;
mod win;

pub use draw::is_board_full;
pub use win::check_winner;
