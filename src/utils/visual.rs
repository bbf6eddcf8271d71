//! Deterministic "prism" background generator.
//!
//! Every hero and banner gets a layered gradient whose focal points are
//! derived from a seed string (usually the page slug), so a page always looks
//! the same while different pages look different.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const SALT_MULTIPLIER: u32 = 1_013_904_223;

/// Builds the CSS `background-image` value for a seed.
///
/// # Examples
///
/// ```ignore
/// let css = prism_background("about");
/// assert!(css.starts_with("radial-gradient(80% 70% at 12% 50%"));
/// assert_eq!(css, prism_background("about"));
/// ```
pub fn prism_background(seed: &str) -> String {
    let n: [f64; 6] = std::array::from_fn(|i| seeded(seed, i as u32 + 1));

    let x1 = position(10.0, n[0], 70.0);
    let y1 = position(5.0, n[1], 60.0);
    let x2 = position(20.0, n[2], 65.0);
    let y2 = position(10.0, n[3], 70.0);
    let x3 = position(15.0, n[4], 70.0);
    let y3 = position(20.0, n[5], 70.0);

    [
        format!(
            "radial-gradient(80% 70% at {x1}% {y1}%, rgb(var(--brand-2) / 0.30), transparent 62%)"
        ),
        format!(
            "radial-gradient(75% 65% at {x2}% {y2}%, rgb(var(--brand) / 0.28), transparent 60%)"
        ),
        format!(
            "radial-gradient(70% 60% at {x3}% {y3}%, rgb(var(--brand-3) / 0.22), transparent 62%)"
        ),
        "linear-gradient(180deg, rgb(var(--surface) / 0.65), rgb(var(--surface) / 0.25))"
            .to_string(),
    ]
    .join(", ")
}

fn position(base: f64, n: f64, span: f64) -> i64 {
    (base + n * span).round() as i64
}

/// Maps `(seed, salt)` to a number in `[0, 1]`.
///
/// FNV-1a over UTF-16 code units, a salt offset, then Robert Jenkins' 32-bit
/// integer mix.
fn seeded(input: &str, salt: u32) -> f64 {
    let mut hash = FNV_OFFSET_BASIS;
    for unit in input.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash = hash.wrapping_add(salt.wrapping_mul(SALT_MULTIPLIER));

    hash = hash.wrapping_add(0x7ed5_5d16).wrapping_add(hash << 12);
    hash = hash ^ 0xc761_c23c ^ (hash >> 19);
    hash = hash.wrapping_add(0x1656_67b1).wrapping_add(hash << 5);
    hash = hash.wrapping_add(0xd3a2_646c) ^ (hash << 9);
    hash = hash.wrapping_add(0xfd70_46c5).wrapping_add(hash << 3);
    hash = hash ^ 0xb55a_4f09 ^ (hash >> 16);

    f64::from(hash) / f64::from(u32::MAX)
}
