use super::Params;
use crate::*;

/// `truncate`: exactly one table name.
pub(super) fn check(p: &Params) -> Outcome {
    p.no_extra(2)?;
    p.table(1, "[table]").map(|_| ())
}
