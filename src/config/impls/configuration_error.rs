use std::fmt;
use std::fmt::Formatter;
use crate::config::enums::configuration_error::ConfigurationError;

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ConfigurationError::IOError(e) => write!(f, "IO error: {}", e),
            ConfigurationError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}
