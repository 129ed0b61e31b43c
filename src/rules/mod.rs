pub mod condition;
pub mod rule;
pub mod ruleset;

pub use condition::*;
pub use rule::*;
pub use ruleset::*;
