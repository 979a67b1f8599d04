use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistPropError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<minijinja::Error> for HistPropError {
    fn from(err: minijinja::Error) -> Self {
        HistPropError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HistPropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: HistPropError = io.into();
        assert!(matches!(err, HistPropError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn json_errors_convert() {
        let json = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: HistPropError = json.into();
        assert!(matches!(err, HistPropError::Serialization(_)));
    }

    #[test]
    fn load_error_display() {
        let err = HistPropError::Load("dataset unreachable".into());
        assert_eq!(err.to_string(), "Load error: dataset unreachable");
    }
}
