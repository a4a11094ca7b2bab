use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search hit is missing its `{attr}` attribute")]
    MissingTrackInfo { attr: String },
    #[error("malformed candidate `{raw}`: {source}")]
    MalformedCandidate {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no `{name}` vocabulary for language `{lang}`")]
    MissingResource { name: String, lang: String },
    #[error("failed to read {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid candidate selector `{0}`")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
