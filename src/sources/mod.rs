pub mod fma;

use crate::error::Result;
use crate::models::{MediaType, SearchQuery, SearchResult};

/// A media search provider a host framework can dispatch queries to.
pub trait MediaSearchProvider {
    fn name(&self) -> &str;
    /// Media types this provider wants to be asked about.
    fn supported_media(&self) -> &[MediaType];
    fn supports(&self, media_type: MediaType) -> bool {
        self.supported_media().contains(&media_type)
    }
    /// Search for playable results. An empty list means "nothing found".
    fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>>;
}
