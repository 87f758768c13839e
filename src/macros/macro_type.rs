//! The allow-list of macro names.
//!
//! Names are matched case-insensitively via [`MacroType::from_name`]; the
//! canonical spelling is available through `as_str` / `Display`. Only some
//! names have a checker: see [`MacroType::checker`].
use crate::*;
use std::{collections::HashMap, sync::LazyLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MacroType {
    Exists,
    Insert,
    InsertSelect,
    BatchInsert,
    Delete,
    BatchDelete,
    Update,
    BatchUpdate,
    Select,
    SelectList,
    SelectRowNum,
    SelectPage,
    GetSerialNo,
    GetSequence,
    Truncate,
    GetTableColumn,
    SelectDynaSql,
    SelectDynaRowNumSql,
    SelectDynaPageSql,
    GetPrefetchSeq,
}

static BY_LOWER_NAME: LazyLock<HashMap<String, MacroType>> = LazyLock::new(|| {
    MacroType::ALL
        .iter()
        .map(|t| (t.as_str().to_ascii_lowercase(), *t))
        .collect()
});

impl MacroType {
    pub const ALL: [Self; 20] = [
        MacroType::Exists,
        MacroType::Insert,
        MacroType::InsertSelect,
        MacroType::BatchInsert,
        MacroType::Delete,
        MacroType::BatchDelete,
        MacroType::Update,
        MacroType::BatchUpdate,
        MacroType::Select,
        MacroType::SelectList,
        MacroType::SelectRowNum,
        MacroType::SelectPage,
        MacroType::GetSerialNo,
        MacroType::GetSequence,
        MacroType::Truncate,
        MacroType::GetTableColumn,
        MacroType::SelectDynaSql,
        MacroType::SelectDynaRowNumSql,
        MacroType::SelectDynaPageSql,
        MacroType::GetPrefetchSeq,
    ];

    /// Resolve a macro name, ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        BY_LOWER_NAME
            .get(&name.trim().to_ascii_lowercase())
            .copied()
    }

    /// Canonical spelling of the macro name.
    pub const fn as_str(self) -> &'static str {
        use MacroType::*;
        match self {
            Exists => "exists",
            Insert => "insert",
            InsertSelect => "insertSelect",
            BatchInsert => "batchInsert",
            Delete => "delete",
            BatchDelete => "batchDelete",
            Update => "update",
            BatchUpdate => "batchUpdate",
            Select => "select",
            SelectList => "selectList",
            SelectRowNum => "selectRowNum",
            SelectPage => "selectPage",
            GetSerialNo => "getSerialNo",
            GetSequence => "getSequence",
            Truncate => "truncate",
            GetTableColumn => "getTableColumn",
            SelectDynaSql => "selectDynaSql",
            SelectDynaRowNumSql => "selectDynaRowNumSql",
            SelectDynaPageSql => "selectDynaPageSql",
            GetPrefetchSeq => "getPrefetchSeq",
        }
    }

    /// The checker validating this macro's parameters.
    ///
    /// `None` for allow-listed names nothing validates yet; such literals
    /// pass once their brackets and name are fine.
    pub const fn checker(self) -> Option<Checker> {
        use MacroType::*;
        match self {
            Exists => Some(Checker::Exists),
            Delete => Some(Checker::Delete),
            Insert | BatchInsert | GetSerialNo => Some(Checker::InsertFields),
            BatchDelete | GetPrefetchSeq => Some(Checker::BatchCondition),
            InsertSelect => Some(Checker::InsertSelect),
            Select | SelectList => Some(Checker::Select),
            SelectPage => Some(Checker::SelectPage),
            SelectRowNum => Some(Checker::SelectRowNum),
            Update => Some(Checker::Update),
            GetSequence => Some(Checker::GetSequence),
            Truncate => Some(Checker::Truncate),
            BatchUpdate | GetTableColumn | SelectDynaSql | SelectDynaRowNumSql
            | SelectDynaPageSql => None,
        }
    }
}

impl std::fmt::Display for MacroType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
