pub mod leaderboard;
pub mod record;
pub mod roster;
pub mod tournament;

pub use leaderboard::*;
pub use record::*;
pub use roster::*;
pub use tournament::*;
