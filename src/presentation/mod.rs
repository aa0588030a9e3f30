mod card;
mod labels;

pub use card::{progress_bar, render_card, render_leaderboard, render_levels};
pub use labels::StatusLabels;
