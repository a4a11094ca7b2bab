use tracing::{debug, info};

use crate::config::ProviderSettings;
use crate::core::query::build_query_url;
use crate::core::score::{count_adjustment, GENRE_BONUS, MUSIC_BONUS, STOPWORD_PENALTY};
use crate::core::scrape::CandidateScraper;
use crate::core::vocab;
use crate::error::Result;
use crate::host::SkillHost;
use crate::http::PageFetcher;
use crate::models::{MediaType, RawCandidate, SearchQuery, SearchResult};
use crate::sources::MediaSearchProvider;

const SUPPORTED_MEDIA: [MediaType; 3] = [MediaType::Music, MediaType::Audio, MediaType::Generic];

/// Seconds requested from the host before each extra round-trip.
const RETRY_EXTENSION_SECS: u64 = 1;

/// Where a search is in its fallback chain. Each step is taken only when
/// the previous one found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStage {
    Initial,
    StopwordRetry,
    GenreRetry,
}

impl SearchStage {
    fn next(self) -> Option<Self> {
        match self {
            SearchStage::Initial => Some(SearchStage::StopwordRetry),
            SearchStage::StopwordRetry => Some(SearchStage::GenreRetry),
            SearchStage::GenreRetry => None,
        }
    }
}

/// Free Music Archive search scraper.
pub struct FreeMusicArchive<F, H> {
    settings: ProviderSettings,
    scraper: CandidateScraper,
    fetcher: F,
    host: H,
}

impl<F: PageFetcher, H: SkillHost> FreeMusicArchive<F, H> {
    pub fn new(settings: ProviderSettings, fetcher: F, host: H) -> Result<Self> {
        let scraper =
            CandidateScraper::new(&settings.candidate_selector, &settings.track_info_attr)?;
        Ok(Self {
            settings,
            scraper,
            fetcher,
            host,
        })
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// URL of the results page for `phrase`.
    pub fn query_url(&self, phrase: &str) -> String {
        build_query_url(&self.settings.base_url, phrase)
    }

    /// Fetch and decode the hits for a single phrase.
    pub fn search_songs(&self, phrase: &str) -> Result<Vec<RawCandidate>> {
        let html = self.fetcher.fetch(&self.query_url(phrase))?;
        let songs = self.scraper.scrape(&html)?;
        debug!("{} candidates for {:?}", songs.len(), phrase);
        Ok(songs)
    }

    /// Run one stage of the chain, adjusting `score` for the stage taken.
    fn run_stage(
        &self,
        stage: SearchStage,
        phrase: &str,
        score: &mut i32,
    ) -> Result<Vec<RawCandidate>> {
        match stage {
            SearchStage::Initial => self.search_songs(phrase),
            SearchStage::StopwordRetry => {
                self.host.extend_timeout(RETRY_EXTENSION_SECS);
                debug!("loading {} stopwords", self.host.lang());
                let stopwords = self.host.vocabulary("articles")?;
                let cleaned = vocab::strip_stopwords(phrase, &stopwords);
                info!("Trying search with articles removed: {:?}", cleaned);
                *score -= STOPWORD_PENALTY;
                self.search_songs(&cleaned)
            }
            SearchStage::GenreRetry => {
                self.host.extend_timeout(RETRY_EXTENSION_SECS);
                let genres = self.host.vocabulary("genre")?;
                match vocab::find_genre(phrase, &genres) {
                    Some(genre) => {
                        info!("Trying search by genre: {:?}", genre);
                        *score += GENRE_BONUS;
                        self.search_songs(genre)
                    }
                    None => {
                        debug!("no known genre in {:?}", phrase);
                        Ok(Vec::new())
                    }
                }
            }
        }
    }
}

impl<F: PageFetcher, H: SkillHost> MediaSearchProvider for FreeMusicArchive<F, H> {
    fn name(&self) -> &str {
        "Free Music Archive"
    }

    fn supported_media(&self) -> &[MediaType] {
        &SUPPORTED_MEDIA
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let phrase = query.phrase.as_str();
        let mut score = 0;
        if query.media_type == MediaType::Music {
            score += MUSIC_BONUS;
        }

        let mut stage = SearchStage::Initial;
        let songs = loop {
            let songs = self.run_stage(stage, phrase, &mut score)?;
            match stage.next() {
                Some(next) if songs.is_empty() => stage = next,
                _ => break songs,
            }
        };

        let score = score.saturating_add(count_adjustment(songs.len()));
        let results: Vec<SearchResult> = songs
            .into_iter()
            .map(|song| SearchResult::from_candidate(song, &self.settings.image_url, score))
            .collect();

        info!(
            "Returning {} results with confidence {} ({:?})",
            results.len(),
            score,
            stage
        );
        Ok(results)
    }
}
