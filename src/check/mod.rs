//! Per-macro-type parameter checkers.
//!
//! Each checker receives the extracted segments of one literal and checks
//! them against the shape of its macro type, handing synthesized statements
//! to a [`SqlOracle`]. Failures are returned as a [`Diagnostic`] carrying the
//! usage text of the macro type.
use crate::*;

mod exists;
mod insert;
mod insert_select;
mod paging;
mod params;
mod select;
mod sequence;
mod truncate;
mod update;


use params::Params;

/// The checker variants, one per family of macro types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checker {
    Exists,
    Delete,
    /// `insert`, `batchInsert`, `getSerialNo`: a field list.
    InsertFields,
    /// `batchDelete`, `getPrefetchSeq`: a single WHERE condition.
    BatchCondition,
    InsertSelect,
    /// `select`, `selectList`.
    Select,
    SelectPage,
    SelectRowNum,
    Update,
    GetSequence,
    Truncate,
}

impl Checker {
    pub fn check(
        self,
        macro_type: MacroType,
        expr: &MacroExpression,
        oracle: &dyn SqlOracle,
    ) -> Outcome {
        let params = Params::new(macro_type, expr, oracle);
        let outcome = match self {
            Checker::Exists | Checker::Delete => exists::check(&params),
            Checker::InsertFields => insert::check_fields(&params),
            Checker::BatchCondition => insert::check_condition(&params),
            Checker::InsertSelect => insert_select::check(&params),
            Checker::Select => select::check(&params),
            Checker::SelectPage => paging::check(&params, paging::Paging::Page),
            Checker::SelectRowNum => paging::check(&params, paging::Paging::RowNum),
            Checker::Update => update::check(&params),
            Checker::GetSequence => sequence::check(&params),
            Checker::Truncate => truncate::check(&params),
        };
        outcome.map_err(|diagnostic| match macro_type.usage() {
            Some(usage) => diagnostic.or_usage(usage),
            None => diagnostic,
        })
    }
}
