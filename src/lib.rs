//! Static syntax checker for bracketed SQL macro literals.
//!
//! A macro literal such as `[select][select * from t][][id = :id]` is
//! normalized, bracket-checked, split into segments and dispatched to the
//! checker for its macro type. The result is either valid (`None`) or a
//! single [`Diagnostic`] ready to be shown to a user.
//!
//! ```rust
//! use sqlmacro::validate;
//!
//! assert!(validate("[truncate][ses_sys_arg]").is_none());
//! assert!(validate("[truncate][bad-name]").is_some());
//! ```
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(diagnostic);
reexport!(literal);
reexport!(macros);
reexport!(sql);
reexport!(check);
reexport!(logic);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
