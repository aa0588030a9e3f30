pub mod resolver;
pub mod types;

pub use resolver::resolve_level;
pub use types::{LevelStatus, LevelTable, LevelTier};
