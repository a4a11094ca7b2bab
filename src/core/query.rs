/// Build the search-page URL for `phrase` on top of `base_url`.
///
/// The phrase is percent-encoded (space becomes `%20`) and passed as the
/// `quicksearch` parameter. An empty phrase still yields a valid URL.
pub fn build_query_url(base_url: &str, phrase: &str) -> String {
    format!(
        "{}&quicksearch={}&&&",
        base_url,
        urlencoding::encode(phrase)
    )
}
