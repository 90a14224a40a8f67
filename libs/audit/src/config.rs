use std::env;

const TABLE_NAME_VAR: &str = "DYNAMODB_TABLE_NAME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table that receives the audit records.
    pub table_name: String,
}

impl Config {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_NAME_VAR)
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;

        Ok(Self::new(table_name))
    }
}
