/// Splits `total` at `part`.
///
/// Returns `(part, total - part)` when `total` reaches `part`, otherwise
/// `(total, 0)`. Both halves are non-negative, the first never exceeds `part`,
/// and together they add back up to `total`.
///
/// Inputs are expected finite and non-negative.
#[inline]
pub fn partition_once(total: f32, part: f32) -> (f32, f32) {
    if total >= part {
        (part, total - part)
    } else {
        (total, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn splits_when_total_reaches_part() {
        assert_eq!(partition_once(5.0, 2.0), (2.0, 3.0));
        assert_eq!(partition_once(PI, PI), (PI, 0.0));
    }

    #[test]
    fn short_total_stays_in_first_half() {
        assert_eq!(partition_once(1.0, 2.0), (1.0, 0.0));
        assert_eq!(partition_once(0.0, PI), (0.0, 0.0));
    }

    #[test]
    fn zero_part_moves_everything_to_second_half() {
        assert_eq!(partition_once(4.0, 0.0), (0.0, 4.0));
    }

    #[test]
    fn conserves_total() {
        let parts = [0.0, 0.5, PI, 0.875 * TAU, TAU];
        for i in 0..=64 {
            let total = TAU * i as f32 / 64.0;
            for &part in &parts {
                let (first, second) = partition_once(total, part);
                assert!(first >= 0.0 && second >= 0.0);
                assert!(first <= part);
                assert!((first + second - total).abs() <= 1e-5, "total {total} part {part}");
            }
        }
    }
}
