use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// SQL dialect the oracle parses synthesized statements with.
    #[config(env = "SQLMACRO_DIALECT", default = "generic")]
    pub dialect: String,
    /// `tracing` filter directive used by the command line tool.
    #[config(env = "SQLMACRO_LOG", default = "warn")]
    pub log: String,
}

impl Config {
    pub fn dialect(&self) -> Result<DialectKind> {
        self.dialect.parse()
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dialect_resolves() {
        let config = Config {
            dialect: "postgres".into(),
            log: "debug".into(),
        };
        assert_eq!(config.dialect().ok(), Some(DialectKind::Postgres));
    }

    #[test]
    fn unknown_dialect_is_a_config_error() {
        let config = Config {
            dialect: "oracle".into(),
            log: "warn".into(),
        };
        assert!(matches!(config.dialect(), Err(Error::Config(_))));
    }
}
