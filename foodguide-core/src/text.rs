//! Text shaping for the summary cards.

/// Characters of description shown on a card before it is cut.
pub const CARD_EXCERPT_CHARS: usize = 60;

/// Specialty tags shown on a card; the detail modal shows all of them.
pub const CARD_SPECIALTY_LIMIT: usize = 3;

/// Cut `text` to at most `max_chars` characters, appending `…` when cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut cut = text[..byte_idx].trim_end().to_string();
            cut.push('…');
            cut
        }
        None => text.to_string(),
    }
}

#[must_use]
pub fn card_specialties(specialties: &[String]) -> &[String] {
    &specialties[..specialties.len().min(CARD_SPECIALTY_LIMIT)]
}
