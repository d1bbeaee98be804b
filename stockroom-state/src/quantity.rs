//! Quantity coercion for raw form input.

/// Coerces a raw form value to a non-negative quantity.
///
/// Never rejects: negative numbers clamp to 0 and anything that does not
/// parse as a non-negative integer defaults to 0. Name validation is
/// strict; quantity validation deliberately is not.
#[must_use]
pub fn coerce_quantity(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}
