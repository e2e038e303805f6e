const FULL_STAR: char = '⭐';
const HALF_STAR: char = '✩';
const EMPTY_STAR: char = '☆';
const STAR_SLOTS: usize = 5;

/// Five-glyph star strip for a rating in `[0, 5]`.
///
/// One full star per whole point, a half star when the fractional part is at
/// least one half, empty stars for the rest. Values above 5 are not clamped.
pub fn stars(rating: f64) -> String {
    let full = rating.floor() as usize;
    let half = rating % 1.0 >= 0.5;

    let mut strip = String::with_capacity(STAR_SLOTS * 3);
    strip.extend(std::iter::repeat_n(FULL_STAR, full));
    if half {
        strip.push(HALF_STAR);
    }
    let used = full + usize::from(half);
    strip.extend(std::iter::repeat_n(EMPTY_STAR, STAR_SLOTS.saturating_sub(used)));
    strip
}
