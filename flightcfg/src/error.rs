use std::io::Error as IoError;

use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No setting is registered under the requested identifier
    #[error("Missing configuration: no setting named '{0}'")]
    Missing(String),

    /// There was a error processing io
    #[error("Couldn't process the specified stream: {0}")]
    Io(#[from] IoError),

    /// The settings could not be rendered
    #[error("Couldn't render settings as json: {0}")]
    Json(#[from] JsonError),
}

impl From<Error> for String {
    fn from(e: Error) -> String {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_the_setting() {
        let e = Error::Missing("KAFKA_GROUP_ID".to_string());
        let msg: String = e.into();
        assert_eq!(msg, "Missing configuration: no setting named 'KAFKA_GROUP_ID'");
    }

    #[test]
    fn io_errors_convert() {
        let e: Error = IoError::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("port taken"));
    }
}
