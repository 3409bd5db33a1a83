//! CLI command handling

pub mod extract;
pub mod normalize;
pub mod output;

pub use extract::*;
pub use normalize::*;
pub use output::*;
