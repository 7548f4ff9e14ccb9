pub mod args;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;
pub mod score;
pub mod source;

pub use error::ResultsError;
pub use model::{Leaderboard, LeaderboardEntry, RoundRecord, TournamentRounds};
pub use score::{RankingEngine, match_key, rank_tournament};
