use std::time::Duration;

use tracing::debug;

use crate::config::HttpConfig;
use crate::error::Result;

/// Something that can GET a page and hand back its body.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking reqwest client used against the live site.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        debug!("received {} bytes", body.len());
        Ok(body)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_applies_config() {
        let config = HttpConfig {
            timeout_secs: 3,
            user_agent: "fma-search-test".to_string(),
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[test]
    fn test_fetch_returns_body() {
        let base = test_server::serve(1, "200 OK", "<p>hello</p>");
        let fetcher = test_server::fetcher();
        let body = fetcher.fetch(&format!("{base}/search?q=x")).unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[test]
    fn test_server_error_is_http_error() {
        let base = test_server::serve(1, "503 Service Unavailable", "");
        let fetcher = test_server::fetcher();
        let result = fetcher.fetch(&format!("{base}/search?q=x"));
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[test]
    fn test_not_found_is_http_error() {
        let base = test_server::serve(1, "404 Not Found", "missing");
        let fetcher = test_server::fetcher();
        let result = fetcher.fetch(&format!("{base}/search"));
        assert!(matches!(result, Err(Error::Http(e)) if e.status().map(|s| s.as_u16()) == Some(404)));
    }
}
