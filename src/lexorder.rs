/// Ordered alphabet used for lexicographic encoding. 40 symbols: space,
/// digits, A-Z, underscore, dash, period. Characters outside the set map to
/// the last index so unknown symbols sort after everything known.
pub const CHARSET: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_-.";

/// Characters beyond this bound do not affect ordering; f64 precision runs
/// out long before 128 base-40 digits anyway.
const SIGNIFICANT_CHARS: usize = 128;

/// Map a payload string to a base-40 positional fraction that preserves
/// lexicographic order over CHARSET. The payload is uppercased first; the
/// empty string encodes to 0.0 and a strict prefix always encodes below its
/// extensions.
pub fn lex_fraction(payload: &str) -> f64 {
    let base = CHARSET.len();
    let mut total = 0.0f64;
    let mut scale = 1.0f64;

    for ch in payload.chars().take(SIGNIFICANT_CHARS) {
        scale *= base as f64;
        let digit = match CHARSET.find(ch.to_ascii_uppercase()) {
            Some(idx) => idx + 1,
            None => base,
        };
        total += digit as f64 / scale;
    }

    total
}
