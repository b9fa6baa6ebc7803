//! Command implementations.

pub mod alignment;
pub mod label;
pub mod matchup;
pub mod tier;

pub use self::alignment::execute_alignment;
pub use self::label::execute_label;
pub use self::matchup::execute_matchup;
pub use self::tier::execute_tier;
