use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backend deployments the client knows how to reach.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The API behind the local web dev server.
    #[default]
    Local,
    /// The API server run directly on its own port.
    Dev,
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3001/api".to_string(),
            Environment::Dev => "http://127.0.0.1:8080/api".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            other => Err(format!(
                "unknown environment '{}', expected 'local' or 'dev'",
                other
            )),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Dev => write!(f, "Dev"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Dev));
        assert!("prod".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_points_at_local_api() {
        assert_eq!(Environment::default().api_url(), "http://localhost:3001/api");
    }
}
