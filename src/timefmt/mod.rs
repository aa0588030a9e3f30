mod relative;

pub use relative::{Elapsed, elapsed_bucket, format_since, format_since_in};
