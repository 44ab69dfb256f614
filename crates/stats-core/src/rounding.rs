//! Decimal rounding of reported statistics
//!
//! Every reported value is rounded to a fixed number of decimal places. The
//! tie decision is made on the exact decimal expansion of the stored `f64`,
//! so `0.015` (stored as `0.01499..`) rounds down and `0.005` (stored as
//! `0.00500..01`) rounds up in either mode. Only exact ties such as `0.125`
//! reach the [`RoundingMode`] rule. The result is the `f64` nearest to the
//! rounded decimal.

use serde::Serialize;

/// Largest scaled magnitude whose rounded integer is still exact in an `f64`
const MAX_FAST_SCALED: f64 = 4_503_599_627_370_496.0; // 2^52

/// Powers of ten above this are not exact in an `f64`
const MAX_FAST_DECIMALS: u32 = 15;

/// Distance from a tie, relative to the scaled value, below which the scaled
/// product is not trusted
const TIE_MARGIN: f64 = 1e-9;

/// Digits after the point in the exact expansion of any `f64`
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Tie-breaking rule for values exactly halfway between two candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Banker's rounding: ties go to the even neighbour
    #[default]
    HalfEven,
    /// Ties go away from zero
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HalfEven => "half-even",
            Self::HalfAwayFromZero => "half-away",
        }
    }
}

/// Round `value` to `decimals` places
///
/// NaN and infinities are returned unchanged.
pub fn round_to(value: f64, decimals: u32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if decimals <= MAX_FAST_DECIMALS {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        // the product is off by at most half an ulp, so it decides the
        // direction unless it lands next to a tie
        if scaled.abs() < MAX_FAST_SCALED {
            let distance = (scaled.fract().abs() - 0.5).abs();
            if distance > TIE_MARGIN * scaled.abs().max(1.0) {
                return scaled.round() / factor;
            }
        }
    }
    round_exact(value, decimals, mode)
}

/// Decimal rounding on the full expansion of `value`
fn round_exact(value: f64, decimals: u32, mode: RoundingMode) -> f64 {
    let expansion = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = expansion.split_once('.').unwrap_or((&expansion, ""));

    let keep = (decimals as usize).min(fraction.len());
    let (kept, rest) = fraction.split_at(keep);
    let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).map(|b| b - b'0').collect();

    let rest = rest.as_bytes();
    let round_up = match rest.first() {
        None => false,
        Some(&d) if d > b'5' => true,
        Some(&d) if d < b'5' => false,
        Some(_) => {
            let above_half = rest[1..].iter().any(|&d| d != b'0');
            above_half
                || match mode {
                    RoundingMode::HalfAwayFromZero => true,
                    RoundingMode::HalfEven => digits.last().is_some_and(|d| d % 2 == 1),
                }
        }
    };
    if round_up {
        increment(&mut digits);
    }

    let point = digits.len() - keep;
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == point {
            text.push('.');
        }
        text.push(char::from(b'0' + d));
    }
    text.parse().unwrap_or(value)
}

/// Add one unit in the last place of a decimal digit string
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
