pub mod rules;
pub mod sentence;

pub use rules::*;
pub use sentence::*;
