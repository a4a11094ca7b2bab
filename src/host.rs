use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::config::ResourceConfig;
use crate::core::vocab;
use crate::error::{Error, Result};

/// Services a skill receives from the framework hosting it.
pub trait SkillHost {
    /// Language of the current request, e.g. `en-us`.
    fn lang(&self) -> &str;

    /// Ask for more time before the host gives up on this provider.
    /// Cooperative only; the host may ignore it.
    fn extend_timeout(&self, seconds: u64);

    /// Load the named word list (`articles`, `genre`) for [`Self::lang`].
    fn vocabulary(&self, name: &str) -> Result<Vec<String>>;
}

/// Host backed by `<dir>/<lang>/<name>.voc` files on disk.
#[derive(Debug)]
pub struct LocalHost {
    dir: PathBuf,
    lang: String,
    extended: AtomicU64,
}

impl LocalHost {
    pub fn new(config: &ResourceConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            lang: config.lang.clone(),
            extended: AtomicU64::new(0),
        }
    }

    pub fn resource_path(&self, name: &str) -> PathBuf {
        self.dir.join(&self.lang).join(format!("{name}.voc"))
    }

    /// Total seconds of extension requested so far.
    pub fn extended_secs(&self) -> u64 {
        self.extended.load(Ordering::Relaxed)
    }
}

impl SkillHost for LocalHost {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn extend_timeout(&self, seconds: u64) {
        let total = self.extended.fetch_add(seconds, Ordering::Relaxed) + seconds;
        debug!("timeout extended by {}s ({}s total)", seconds, total);
    }

    fn vocabulary(&self, name: &str) -> Result<Vec<String>> {
        let path = self.resource_path(name);
        if !path.is_file() {
            return Err(Error::MissingResource {
                name: name.to_string(),
                lang: self.lang.clone(),
            });
        }
        vocab::load_commented_file(&path)
    }
}
