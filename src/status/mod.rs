pub mod assembler;
pub mod report;

pub use assembler::{assemble, assemble_with, progress_fraction};
pub use report::StatusReport;
