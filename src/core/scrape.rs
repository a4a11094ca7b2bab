use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::models::RawCandidate;

/// Pulls the JSON track payload out of every search hit on a results page.
///
/// No structural validation is done: a page without matching elements
/// simply yields no candidates.
#[derive(Debug, Clone)]
pub struct CandidateScraper {
    selector: Selector,
    attr: String,
}

impl CandidateScraper {
    pub fn new(selector: &str, attr: &str) -> Result<Self> {
        let selector =
            Selector::parse(selector).map_err(|_| Error::InvalidSelector(selector.to_string()))?;
        Ok(Self {
            selector,
            attr: attr.to_string(),
        })
    }

    /// Decode every matching element, in page order.
    pub fn scrape(&self, html: &str) -> Result<Vec<RawCandidate>> {
        let document = Html::parse_document(html);

        document
            .select(&self.selector)
            .map(|el| {
                let raw = el
                    .value()
                    .attr(&self.attr)
                    .ok_or_else(|| Error::MissingTrackInfo {
                        attr: self.attr.clone(),
                    })?;
                serde_json::from_str(raw).map_err(|source| Error::MalformedCandidate {
                    raw: raw.to_string(),
                    source,
                })
            })
            .collect()
    }
}
