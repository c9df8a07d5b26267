use std::fmt;
use std::fmt::Formatter;
use crate::config::enums::configuration_error::ConfigurationError;

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ConfigurationError::IOError(error) => write!(f, "IO error: {error}"),
            ConfigurationError::ParseError(error) => write!(f, "parse error: {error}"),
        }
    }
}

impl std::error::Error for ConfigurationError {}
