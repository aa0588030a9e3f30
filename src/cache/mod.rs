mod leaderboard;

pub use leaderboard::LeaderboardCache;
