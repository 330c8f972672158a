//! Raw bit-pattern codec for IEEE-754 single-precision floats.
//!
//! Every value in the verifier travels as a `u32` bit pattern; floats only
//! exist transiently while an operation executes. Conversion is pure bit
//! reinterpretation, never a numeric cast, so every pattern round-trips
//! exactly (all NaN payloads included).

/// Positive zero.
pub const ZERO: u32 = 0x0000_0000;
/// Smallest positive denormal (all-zero exponent, mantissa 1).
pub const DENORMAL_MIN: u32 = 0x0000_0001;
/// Largest denormal (all-zero exponent, all-ones mantissa).
pub const DENORMAL_MAX: u32 = 0x007F_FFFF;
/// 0.5, an exactly representable normal value.
pub const HALF: u32 = 0x3F00_0000;
/// Positive infinity.
pub const POS_INF: u32 = 0x7F80_0000;
/// Negative infinity.
pub const NEG_INF: u32 = 0xFF80_0000;

/// Reinterpret the four bytes of a float as a `u32`, preserving the exact
/// sign/exponent/mantissa layout.
#[inline]
pub fn float_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Inverse reinterpretation. Total: every `u32` is a valid input.
#[inline]
pub fn bits_to_float(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// True iff the pattern decodes to a NaN (any payload, either sign).
#[inline]
pub fn is_nan_bits(bits: u32) -> bool {
    bits_to_float(bits).is_nan()
}

/// Diagnostic rendering of a bit pattern: decoded float value, 32-character
/// zero-padded binary string, raw unsigned decimal.
pub fn verbose(bits: u32) -> String {
    format!("{} : {:032b} : {}", bits_to_float(bits), bits, bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_constants_decode_as_expected() {
        assert_eq!(bits_to_float(ZERO), 0.0);
        assert!(bits_to_float(ZERO).is_sign_positive());
        assert_eq!(bits_to_float(HALF), 0.5);
        assert_eq!(bits_to_float(POS_INF), f32::INFINITY);
        assert_eq!(bits_to_float(NEG_INF), f32::NEG_INFINITY);

        let dmin = bits_to_float(DENORMAL_MIN);
        let dmax = bits_to_float(DENORMAL_MAX);
        assert!(dmin > 0.0 && dmin < f32::MIN_POSITIVE);
        assert!(dmax > 0.0 && dmax < f32::MIN_POSITIVE);
        assert!(dmin < dmax);
    }

    #[test]
    fn negative_zero_is_distinct_from_zero() {
        let neg_zero = float_to_bits(-0.0);
        assert_ne!(neg_zero, ZERO);
        assert_eq!(bits_to_float(neg_zero), 0.0);
    }

    #[test]
    fn nan_detection_covers_payload_variants() {
        // Quiet NaN, signaling-style NaN, negative NaN.
        assert!(is_nan_bits(0x7FC0_0000));
        assert!(is_nan_bits(0x7F80_0001));
        assert!(is_nan_bits(0xFFC0_1234));
        // Infinities are not NaN.
        assert!(!is_nan_bits(POS_INF));
        assert!(!is_nan_bits(NEG_INF));
        assert!(!is_nan_bits(ZERO));
    }

    #[test]
    fn verbose_renders_all_three_forms() {
        let s = verbose(HALF);
        assert_eq!(s, "0.5 : 00111111000000000000000000000000 : 1056964608");
    }

    proptest! {
        #[test]
        fn round_trip_every_pattern(bits in any::<u32>()) {
            prop_assert_eq!(float_to_bits(bits_to_float(bits)), bits);
        }
    }
}
