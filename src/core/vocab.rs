use std::path::Path;

use crate::error::{Error, Result};

/// Read a word list: one entry per line, `#` comments and blank lines dropped.
pub fn load_commented_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_commented(&content))
}

pub fn parse_commented(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| match line.find(" #") {
            Some(pos) => &line[..pos],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Drop every whitespace-delimited token that exactly matches a stopword.
pub fn strip_stopwords(phrase: &str, stopwords: &[String]) -> String {
    phrase
        .split_whitespace()
        .filter(|word| !stopwords.iter().any(|s| s == word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First genre, in list order, occurring anywhere in `phrase`.
pub fn find_genre<'a>(phrase: &str, genres: &'a [String]) -> Option<&'a str> {
    genres
        .iter()
        .map(String::as_str)
        .find(|genre| phrase.contains(genre))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commented() {
        let text = "# articles\nthe\n  a  \n\n# more\nsome # quantifier\n";
        assert_eq!(parse_commented(text), words(&["the", "a", "some"]));
    }

    #[test]
    fn test_load_commented_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# genres").unwrap();
        writeln!(file, "jazz").unwrap();
        writeln!(file, "rock").unwrap();
        let loaded = load_commented_file(file.path()).unwrap();
        assert_eq!(loaded, words(&["jazz", "rock"]));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_commented_file(&dir.path().join("nope.voc")).unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
    }

    #[test]
    fn test_strip_stopwords() {
        let stop = words(&["some", "the", "a"]);
        assert_eq!(strip_stopwords("some jazz", &stop), "jazz");
        assert_eq!(strip_stopwords("play  the   blues", &stop), "play blues");
        assert_eq!(strip_stopwords("the a some", &stop), "");
    }

    #[test]
    fn test_strip_stopwords_is_case_sensitive() {
        let stop = words(&["the"]);
        assert_eq!(strip_stopwords("The the Band", &stop), "The Band");
    }

    #[test]
    fn test_find_genre_first_in_list_wins() {
        let genres = words(&["rock", "jazz", "jazz rock"]);
        assert_eq!(find_genre("jazz rock fusion", &genres), Some("rock"));
        assert_eq!(find_genre("jazz song", &genres), Some("jazz"));
        assert_eq!(find_genre("polka", &genres), None);
    }

    #[test]
    fn test_find_genre_matches_substring() {
        let genres = words(&["pop"]);
        assert_eq!(find_genre("k-pop hits", &genres), Some("pop"));
    }
}
