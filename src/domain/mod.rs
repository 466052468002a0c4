mod cell;
mod rule;
mod tape;

pub use cell::Cell;
pub use rule::{HAT_RULE, RuleTable};
pub use tape::{PatternError, Tape};
