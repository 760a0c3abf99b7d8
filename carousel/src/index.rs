//! Wraparound index arithmetic shared by every navigation operation.

/// Normalize any signed index into `0..len`.
///
/// Returns `None` when `len == 0`, since there is no valid position.
/// Otherwise the result is `((requested mod len) + len) mod len`.
#[must_use]
pub fn wrap_index(requested: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    // A slice never holds more than isize::MAX elements, so this cannot fail.
    let len_i64 = i64::try_from(len).ok()?;
    let wrapped = requested.rem_euclid(len_i64);
    usize::try_from(wrapped).ok()
}

/// Step `current` by `delta` positions in a circular list of `len` items.
#[must_use]
pub fn step_index(current: usize, delta: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = i64::try_from(current % len).ok()?;
    wrap_index(current + delta, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_handles_empty() {
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(wrap_index(5, 0), None);
        assert_eq!(wrap_index(-5, 0), None);
    }

    #[test]
    fn wrap_index_wraps_negative_and_overflowing() {
        assert_eq!(wrap_index(-1, 7), Some(6));
        assert_eq!(wrap_index(-7, 7), Some(0));
        assert_eq!(wrap_index(-8, 7), Some(6));
        assert_eq!(wrap_index(7, 7), Some(0));
        assert_eq!(wrap_index(10, 7), Some(3));
    }

    #[test]
    fn wrap_index_survives_extremes() {
        assert_eq!(wrap_index(i64::MIN, 7), Some(i64::MIN.rem_euclid(7) as usize));
        assert_eq!(wrap_index(i64::MAX, 7), Some(i64::MAX.rem_euclid(7) as usize));
        assert_eq!(wrap_index(i64::MAX, 1), Some(0));
    }

    #[test]
    fn step_index_wraps_forward_and_backward() {
        assert_eq!(step_index(0, 1, 3), Some(1));
        assert_eq!(step_index(2, 1, 3), Some(0));
        assert_eq!(step_index(0, -1, 3), Some(2));
        assert_eq!(step_index(4, 1, 0), None);
    }
}
