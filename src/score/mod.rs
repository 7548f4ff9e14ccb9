pub mod hole_grid;
pub mod match_key;
pub mod player_history;
pub mod preview;
pub mod ranking;
pub mod relative;
pub mod sort_utils;
pub mod symbol;

pub use hole_grid::*;
pub use match_key::*;
pub use player_history::*;
pub use preview::*;
pub use ranking::*;
pub use relative::*;
pub use sort_utils::*;
pub use symbol::*;
