const FULL_STAR: char = '★';
const HALF_STAR: char = '☆';
/// Upper bound on full stars; larger ratings still show their number.
pub const MAX_FULL_STARS: u32 = 100;

/// Star glyphs for a rating.
///
/// `floor(rating)` full stars, then one half star whenever the rating has any
/// fractional part. There is no rounding: 4.1 and 4.9 both render as four
/// full stars and a half star. Full stars are capped at [`MAX_FULL_STARS`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_glyphs(rating: f64) -> String {
    let full = if rating.is_finite() {
        rating.floor().clamp(0.0, f64::from(MAX_FULL_STARS)) as usize
    } else {
        0
    };
    let mut stars: String = std::iter::repeat_n(FULL_STAR, full).collect();
    if rating % 1.0 != 0.0 {
        stars.push(HALF_STAR);
    }
    stars
}

/// Rating number as shown next to the stars (`5`, `4.5`).
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating}")
}
