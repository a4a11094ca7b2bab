//! Free Music Archive search provider for voice-assistant media playback.
//!
//! A spoken phrase is turned into a search on freemusicarchive.org, the
//! results page is scraped for embedded track metadata, and the hits come
//! back as [`SearchResult`]s sharing one confidence score. When a phrase
//! finds nothing, the provider retries with stopwords removed and then with
//! the first genre it recognises.

pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod http;
pub mod models;
pub mod sources;

pub use error::{Error, Result};
pub use models::{MediaType, PlaybackType, RawCandidate, SearchQuery, SearchResult};
pub use sources::fma::FreeMusicArchive;
pub use sources::MediaSearchProvider;
