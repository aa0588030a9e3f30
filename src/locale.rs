use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display language for captions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    #[serde(rename = "en")]
    English,
    #[value(name = "ja")]
    #[serde(rename = "ja")]
    Japanese,
}
