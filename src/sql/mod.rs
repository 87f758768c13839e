//! SQL side of validation: the parser oracle and fragment helpers.
//!
//! Modules:
//! - `oracle`   : the [`SqlOracle`] seam and its `sqlparser` implementation.
//! - `pattern`  : identifier, bind variable and paging value patterns.
//! - `fragment` : synthetic statement builders and list splitting.
//!
//! Fragments taken from a macro literal are never parsed on their own. Each
//! one is wrapped in the smallest statement that gives it a valid position
//! (`SELECT * FROM dual WHERE <condition>`, `SELECT <fields> FROM dual`, ...)
//! and that statement is handed to the oracle.

pub mod fragment;
pub mod oracle;
pub mod pattern;

pub use fragment::*;
pub use oracle::{DialectKind, SqlOracle, SqlParserOracle};
pub use pattern::*;
