//! Rescaling of floating point-cloud coordinates onto unsigned integer ranges.
//!
//! An octree built over raw survey coordinates subdivides at fractional
//! midpoints. Rescaling each axis onto `[0, 2^k - 1]` first quantizes the
//! cloud so that every subdivision lands on an integer boundary, and the
//! recorded scale factor lets positions be mapped back toward source units.
//! Each axis is scaled independently; auxiliary values are untouched.

use thiserror::Error;

/// The error produced when a source value range has zero width, which admits
/// no finite scale factor.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("cannot scale a zero-width value range")]
pub struct DegenerateRange;

/// The multiplicative factor that maps the range `[from_min, from_max]` onto
/// `[to_min, to_max]`, rounded to 4 decimal places.
///
/// Fails with `DegenerateRange` when the source range has zero width, rather
/// than dividing by zero.
pub fn scaling_factor(
    from_min: f64,
    from_max: f64,
    to_min: f64,
    to_max: f64,
) -> Result<f64, DegenerateRange> {
    if from_max == from_min {
        return Err(DegenerateRange);
    }

    Ok(round_4((to_max - to_min) / ((from_max - from_min) + to_min)))
}

/// Rescales `values` onto `[to_min, to_max]`, deriving the source range from
/// the values themselves.
///
/// Every result is truncated to an integer-valued `f64`. Returns the scaled
/// values together with the scale factor used. An empty slice has no source
/// range and fails with `DegenerateRange`, as does a slice whose values are
/// all equal.
pub fn scale_to_range(
    to_min: f64,
    to_max: f64,
    values: &[f64],
) -> Result<(Vec<f64>, f64), DegenerateRange> {
    if values.is_empty() {
        return Err(DegenerateRange);
    }

    let from_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let from_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let factor = scaling_factor(from_min, from_max, to_min, to_max)?;

    let scaled = values
        .iter()
        .map(|value| (factor * (value - from_min)).trunc())
        .collect();

    Ok((scaled, factor))
}

/// Requantizes an integer coordinate encoded at `from_bits` of precision to
/// `to_bits` by shifting out the low-order bits.
///
/// Used to compare coordinates captured at different octree depths.
#[inline]
pub fn downscale(value: u64, from_bits: u32, to_bits: u32) -> u64 {
    debug_assert!(to_bits <= from_bits);

    value >> (from_bits - to_bits)
}

#[inline]
fn round_4(value: f64) -> f64 {
    (value * 1.0e4).round() / 1.0e4
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_for_8_bit_range() {
        let factor = scaling_factor(-5.0, 5.0, 0.0, 255.0).unwrap();

        assert_eq!(factor, 25.5);
    }

    #[test]
    fn scales_onto_8_bit_range() {
        let (scaled, factor) = scale_to_range(0.0, 255.0, &[-5.0, 2.0, 3.0, 5.0]).unwrap();

        assert_eq!(factor, 25.5);
        // 2.0 maps to 178.5 and truncates to 178.
        assert_eq!(scaled, vec![0.0, 178.0, 204.0, 255.0]);
    }

    #[test]
    fn scales_onto_16_bit_range() {
        let (scaled, factor) = scale_to_range(0.0, 65535.0, &[-5.0, 2.0, 3.0, 5.0]).unwrap();

        assert_eq!(factor, 6553.5);
        assert_eq!(scaled, vec![0.0, 45874.0, 52428.0, 65535.0]);
    }

    #[test]
    fn source_minimum_scales_to_target_minimum() {
        let (scaled, _) = scale_to_range(0.0, 65535.0, &[1.52, 5.213, 2.87]).unwrap();

        assert_eq!(scaled[0], 0.0);
    }

    #[test]
    fn zero_width_ranges_are_degenerate() {
        assert_eq!(scaling_factor(7.0, 7.0, 0.0, 255.0), Err(DegenerateRange));
        assert_eq!(
            scale_to_range(0.0, 255.0, &[3.0, 3.0, 3.0]),
            Err(DegenerateRange)
        );
        assert_eq!(scale_to_range(0.0, 255.0, &[]), Err(DegenerateRange));
    }

    #[test]
    fn downscale_drops_low_order_bits() {
        assert_eq!(downscale(178, 8, 3), 5);
        assert_eq!(downscale(204, 8, 3), 6);
        assert_eq!(downscale(0, 8, 3), 0);
        assert_eq!(downscale(255, 8, 8), 255);
    }
}
