pub mod levels;
pub mod settings;

pub use settings::AppConfig;
