use crate::*;
use sqlparser::{
    dialect::{
        AnsiDialect, Dialect, GenericDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
        SQLiteDialect,
    },
    parser::{Parser, ParserError},
};
use std::str::FromStr;

static GENERIC: GenericDialect = GenericDialect {};
static ANSI: AnsiDialect = AnsiDialect {};
static POSTGRES: PostgreSqlDialect = PostgreSqlDialect {};
static MYSQL: MySqlDialect = MySqlDialect {};
static MSSQL: MsSqlDialect = MsSqlDialect {};
static SQLITE: SQLiteDialect = SQLiteDialect {};

/// Syntax check for a complete SQL statement.
///
/// Implementations must be synchronous and must not panic; a rejected
/// statement is reported as an `Err` carrying a readable cause.
pub trait SqlOracle {
    fn parse(&self, sql: &str) -> Result;
}

impl<O: SqlOracle + ?Sized> SqlOracle for &O {
    fn parse(&self, sql: &str) -> Result {
        (**self).parse(sql)
    }
}

/// SQL dialects the default oracle can parse with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum DialectKind {
    #[default]
    #[display("generic")]
    Generic,
    #[display("ansi")]
    Ansi,
    #[display("postgres")]
    Postgres,
    #[display("mysql")]
    MySql,
    #[display("mssql")]
    MsSql,
    #[display("sqlite")]
    Sqlite,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Generic => &GENERIC,
            DialectKind::Ansi => &ANSI,
            DialectKind::Postgres => &POSTGRES,
            DialectKind::MySql => &MYSQL,
            DialectKind::MsSql => &MSSQL,
            DialectKind::Sqlite => &SQLITE,
        }
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "generic" => DialectKind::Generic,
            "ansi" => DialectKind::Ansi,
            "postgres" | "postgresql" => DialectKind::Postgres,
            "mysql" => DialectKind::MySql,
            "mssql" => DialectKind::MsSql,
            "sqlite" => DialectKind::Sqlite,
            other => return Err(Error::Config(format!("unknown SQL dialect '{other}'"))),
        };
        Ok(kind)
    }
}

/// Oracle backed by `sqlparser`. Accepts exactly one statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlParserOracle {
    dialect: DialectKind,
}

impl SqlParserOracle {
    pub const fn new(dialect: DialectKind) -> Self {
        Self { dialect }
    }

    pub fn from_config() -> Result<Self> {
        config().dialect().map(Self::new)
    }
}

impl SqlOracle for SqlParserOracle {
    fn parse(&self, sql: &str) -> Result {
        let statements = Parser::parse_sql(self.dialect.dialect(), sql)?;
        match statements.len() {
            1 => Ok(()),
            n => Err(ParserError::ParserError(format!(
                "expected exactly one statement, found {n}"
            ))
            .into()),
        }
    }
}
