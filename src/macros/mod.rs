//! Macro names and their usage documentation.
//!
//! - `macro_type` : the closed allow-list of macro names and checker lookup.
//! - `usage`      : canonical template and worked examples per macro type.

pub mod macro_type;
pub mod usage;

pub use macro_type::MacroType;
pub use usage::Usage;
