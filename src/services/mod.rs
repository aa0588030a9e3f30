pub mod status;

pub use status::{ImportSummary, StatusService};
