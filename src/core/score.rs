//! Confidence heuristic shared by every result of one search.

/// Bonus when the host explicitly asked for music.
pub const MUSIC_BONUS: i32 = 15;
/// Penalty for having to drop stopwords from the phrase.
pub const STOPWORD_PENALTY: i32 = 5;
/// Bonus for recognising a genre in the phrase.
pub const GENRE_BONUS: i32 = 5;
/// Floor of the result-count adjustment.
pub const COUNT_FLOOR: i32 = 50;

/// Adjustment added once the final candidate list is known.
///
/// This is `max(count, 50)`: any list shorter than fifty adds exactly fifty.
pub fn count_adjustment(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX).max(COUNT_FLOOR)
}
