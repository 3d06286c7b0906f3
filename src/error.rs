use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangStatsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("GraphQL request failed: {0}")]
    Http(String),

    #[error("GraphQL API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

impl LangStatsError {
    /// Whether this error stems from configuration rather than the API run.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::MissingEnv(_) | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LangStatsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
