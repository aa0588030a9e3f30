pub mod leaderboard;
pub mod types;

pub use leaderboard::{Leaderboard, rank};
pub use types::{RankStatus, RankedEntry, TieBreak};
