//! Normalization rules applied to raw trackbar positions before a filter
//! runs. All of these are pure so the constraints can be tested without a
//! display; the trackbar write-back happens at the call sites.

/// Kernel and block sizes have to be either 0 or an odd number. Even values
/// of 2 or more are coerced down to the nearest odd value.
pub fn odd_or_zero(size: i32) -> i32 {
    if size % 2 == 1 || size == 0 {
        return size;
    }

    size - 1
}

/// Derivative order pair for the directional gradient filters. At most one
/// axis may be selected, and (0, 0) is not a valid order, so an unset pair
/// falls back to the Y axis.
pub fn exclusive_pair(dx: i32, dy: i32) -> (i32, i32) {
    match (dx, dy) {
        (1, _) => (1, 0),
        (_, 1) => (0, 1),
        _ => (0, 1),
    }
}

/// Kernel size and sigma may not both be zero for the blur filters: a zero
/// sigma forces both kernel axes up to at least 1. Runs before the odd-size
/// correction.
pub fn kernel_floor(sigma: i32, kx: i32, ky: i32) -> (i32, i32) {
    if sigma == 0 {
        (kx.max(1), ky.max(1))
    } else {
        (kx, ky)
    }
}

/// Remaps a non-negative slider position onto a signed range centered on
/// zero, e.g. 0..512 onto -256..+256.
pub fn signed_offset(pos: i32, center: i32) -> f64 {
    f64::from(pos - center)
}

/// Remaps a slider position onto tenths, e.g. 10..30 onto 1.0..3.0.
pub fn tenths(pos: i32) -> f64 {
    f64::from(pos) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_sizes_round_down_to_odd() {
        assert_eq!(odd_or_zero(12), 11);
        assert_eq!(odd_or_zero(2), 1);
        assert_eq!(odd_or_zero(256), 255);
    }

    #[test]
    fn odd_and_zero_sizes_pass_through() {
        assert_eq!(odd_or_zero(0), 0);
        assert_eq!(odd_or_zero(1), 1);
        assert_eq!(odd_or_zero(7), 7);
        assert_eq!(odd_or_zero(31), 31);
    }

    #[test]
    fn odd_rule_is_idempotent() {
        for size in 0..64 {
            let once = odd_or_zero(size);
            assert_eq!(odd_or_zero(once), once);
        }
    }

    #[test]
    fn derivative_pair_never_both_zero() {
        assert_eq!(exclusive_pair(1, 1), (1, 0));
        assert_eq!(exclusive_pair(1, 0), (1, 0));
        assert_eq!(exclusive_pair(0, 1), (0, 1));
        assert_eq!(exclusive_pair(0, 0), (0, 1));
    }

    #[test]
    fn zero_sigma_floors_both_kernel_axes() {
        assert_eq!(kernel_floor(0, 0, 0), (1, 1));
        assert_eq!(kernel_floor(0, 0, 5), (1, 5));
        assert_eq!(kernel_floor(0, 3, 0), (3, 1));
    }

    #[test]
    fn nonzero_sigma_leaves_kernel_alone() {
        assert_eq!(kernel_floor(30, 0, 0), (0, 0));
        assert_eq!(kernel_floor(1, 4, 2), (4, 2));
    }

    #[test]
    fn signed_offset_centers_on_zero() {
        assert_eq!(signed_offset(0, 256), -256.0);
        assert_eq!(signed_offset(256, 256), 0.0);
        assert_eq!(signed_offset(512, 256), 256.0);
    }

    #[test]
    fn tenths_scale() {
        assert_eq!(tenths(10), 1.0);
        assert_eq!(tenths(12), 1.2);
        assert_eq!(tenths(30), 3.0);
        assert_eq!(tenths(0), 0.0);
    }
}
