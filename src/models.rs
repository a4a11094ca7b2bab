use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Media category a host request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[default]
    Generic,
    Audio,
    Music,
    Video,
    Podcast,
    Radio,
}

impl MediaType {
    pub const ALL: [MediaType; 6] = [
        MediaType::Generic,
        MediaType::Audio,
        MediaType::Music,
        MediaType::Video,
        MediaType::Podcast,
        MediaType::Radio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Generic => "generic",
            MediaType::Audio => "audio",
            MediaType::Music => "music",
            MediaType::Video => "video",
            MediaType::Podcast => "podcast",
            MediaType::Radio => "radio",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown media type: {s}"))
    }
}

/// How the host should play a returned uri.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackType {
    #[default]
    Audio,
}

/// A single search request from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub phrase: String,
    pub media_type: MediaType,
}

impl SearchQuery {
    pub fn new(phrase: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            phrase: phrase.into(),
            media_type,
        }
    }
}

/// Track metadata embedded in a search-result element of the results page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCandidate {
    pub playback_url: String,
    pub title: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_title: Option<String>,
}

/// A playable result in the shape the host expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub media_type: MediaType,
    pub playback: PlaybackType,
    pub image: String,
    pub skill_icon: String,
    pub uri: String,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    pub match_confidence: i32,
}

impl SearchResult {
    pub fn from_candidate(candidate: RawCandidate, image_url: &str, confidence: i32) -> Self {
        Self {
            media_type: MediaType::Music,
            playback: PlaybackType::Audio,
            image: image_url.to_string(),
            skill_icon: image_url.to_string(),
            uri: candidate.playback_url,
            title: candidate.title,
            artist: candidate.artist_name,
            album: candidate.album_title,
            match_confidence: confidence,
        }
    }

    pub fn summary(&self) -> String {
        match &self.album {
            Some(album) => format!("{} - {} [{}]", self.artist, self.title, album),
            None => format!("{} - {}", self.artist, self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_parse() {
        assert_eq!("music".parse::<MediaType>(), Ok(MediaType::Music));
        assert_eq!("AUDIO".parse::<MediaType>(), Ok(MediaType::Audio));
        assert!("vinyl".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_candidate_decodes_site_keys() {
        let json = r#"{"id":123,"title":"Blue","artistName":"Quartet","albumTitle":"Live",
            "playbackUrl":"https://files.example/blue.mp3","extra":true}"#;
        let c: RawCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.title, "Blue");
        assert_eq!(c.artist_name, "Quartet");
        assert_eq!(c.playback_url, "https://files.example/blue.mp3");
        assert_eq!(c.album_title.as_deref(), Some("Live"));
    }

    #[test]
    fn test_candidate_requires_playback_url() {
        let json = r#"{"title":"Blue","artistName":"Quartet"}"#;
        assert!(serde_json::from_str::<RawCandidate>(json).is_err());
    }

    #[test]
    fn test_result_from_candidate() {
        let c = RawCandidate {
            playback_url: "https://files.example/a.mp3".to_string(),
            title: "A".to_string(),
            artist_name: "B".to_string(),
            album_title: None,
        };
        let r = SearchResult::from_candidate(c, "https://img.example/icon.jpg", 65);
        assert_eq!(r.media_type, MediaType::Music);
        assert_eq!(r.playback, PlaybackType::Audio);
        assert_eq!(r.image, r.skill_icon);
        assert_eq!(r.uri, "https://files.example/a.mp3");
        assert_eq!(r.match_confidence, 65);
        assert_eq!(r.summary(), "B - A");

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["media_type"], "music");
        assert_eq!(json["playback"], "audio");
        assert!(json.get("album").is_none());
    }
}
