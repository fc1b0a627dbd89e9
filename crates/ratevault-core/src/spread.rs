//! Deterministic spread arithmetic for the derived latest-rates resource.

/// How the derived-rate strategy treats a missing or zero target quote.
///
/// Dividing by a zero quote yields a non-finite buy spread, so the choice
/// has to be explicit rather than an accident of the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroQuotePolicy {
    /// Refuse the division; the strategy fails with a degenerate-quote error.
    #[default]
    Fail,
    /// Run the arithmetic as-is. The resulting `+inf` is not representable
    /// in JSON and serializes as null.
    Propagate,
}

impl ZeroQuotePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fail" => Some(Self::Fail),
            "propagate" => Some(Self::Propagate),
            _ => None,
        }
    }
}

/// Identity-derived scalar folded into the buy-rate calculation.
///
/// Sums the code points of the lower-cased identity, takes that modulo 1000
/// and divides by 100000. Pure and deterministic: the same identity always
/// yields the same factor, with no I/O.
pub fn spread_factor(identity: &str) -> f64 {
    let total: u32 = identity
        .to_lowercase()
        .chars()
        .map(|ch| ch as u32)
        .fold(0, u32::wrapping_add);
    f64::from(total % 1000) / 100_000.0
}

/// Buy spread from a unit quote: `(1 / quote) * (1 + factor)`.
pub fn buy_spread(quote: f64, factor: f64) -> f64 {
    (1.0 / quote) * (1.0 + factor)
}
