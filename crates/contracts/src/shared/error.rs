use thiserror::Error;

/// Errors of the initial data load.
///
/// Any of these aborts initialization as a whole; there is no partial
/// dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("HTTP error {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Invalid GeoJSON in {source_name}: {error}")]
    GeoJson {
        source_name: &'static str,
        #[source]
        error: geojson::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for LoadError {
    fn from(error: anyhow::Error) -> Self {
        LoadError::Config(format!("{:#}", error))
    }
}
