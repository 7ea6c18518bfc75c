pub mod skip_option;

pub use skip_option::{POPULAR_SIZE, PricedSkip, SkipOption};
