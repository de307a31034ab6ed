use super::point::PointInTime;

/// Index of the entry in `sorted` closest to `query`.
///
/// `sorted` must be ascending; this is not checked. Returns `None` for an
/// empty slice and for a query later than the last entry (the lookup is not
/// clamped to the end). When `query` is equally far from both neighbours the
/// lower index wins.
///
/// Uses binary search, O(log n), to find the first entry not earlier than
/// `query` and then compares it with its predecessor.
pub fn find_closest<T>(sorted: &[T], query: impl Into<PointInTime>) -> Option<usize>
where
    T: Copy + Into<PointInTime>,
{
    find_closest_by(sorted, query, |&v| v.into())
}

/// [`find_closest`] over entries whose instant is read through `key`, so
/// callers can search rows of a table in place.
pub fn find_closest_by<T, K>(sorted: &[T], query: impl Into<PointInTime>, key: K) -> Option<usize>
where
    K: Fn(&T) -> PointInTime,
{
    let query = query.into();
    let last = key(sorted.last()?);
    if query > last {
        tracing::trace!(query = query.millis(), last = last.millis(), "query past end of sequence");
        return None;
    }

    let pos = sorted.partition_point(|v| key(v) < query);
    if pos == 0 {
        return Some(0);
    }

    let below = key(&sorted[pos - 1]);
    let above = key(&sorted[pos]);
    if query.abs_diff(below) <= query.abs_diff(above) {
        Some(pos - 1)
    } else {
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[test]
    fn test_empty_sequence() {
        let empty: [i64; 0] = [];
        assert_eq!(find_closest(&empty, 0i64), None);
    }

    #[test]
    fn test_query_past_end_is_not_clamped() {
        assert_eq!(find_closest(&[10i64, 20, 30], 31i64), None);
        assert_eq!(find_closest(&[10i64, 20, 30], 30i64), Some(2));
    }

    #[test]
    fn test_picks_closer_neighbour() {
        assert_eq!(find_closest(&[10i64, 20, 30], 24i64), Some(1));
        assert_eq!(find_closest(&[10i64, 20, 30], 26i64), Some(2));
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        assert_eq!(find_closest(&[10i64, 30], 20i64), Some(0));
    }

    #[test]
    fn test_before_first_entry() {
        assert_eq!(find_closest(&[10i64, 20, 30], -100i64), Some(0));
        assert_eq!(find_closest(&[10i64], 5i64), Some(0));
    }

    #[test]
    fn test_exact_hits_and_duplicates() {
        let seq = [10i64, 20, 20, 30, 40];
        assert_eq!(find_closest(&seq, 10i64), Some(0));
        assert_eq!(find_closest(&seq, 20i64), Some(1));
        assert_eq!(find_closest(&seq, 40i64), Some(4));
    }

    #[test]
    fn test_chrono_sequence() {
        let seq: Vec<DateTime<Utc>> = (0..24)
            .map(|h| Utc.with_ymd_and_hms(2024, 5, 15, h, 0, 0).unwrap())
            .collect();
        let query = Utc.with_ymd_and_hms(2024, 5, 15, 7, 40, 0).unwrap();
        assert_eq!(find_closest(&seq, query), Some(8));
    }

    #[test]
    fn test_keyed_search_over_rows() {
        let rows = [(10i64, 'a'), (20, 'b'), (30, 'c')];
        let key = |r: &(i64, char)| PointInTime::from_millis(r.0);
        assert_eq!(find_closest_by(&rows, 24i64, key), Some(1));
        assert_eq!(find_closest_by(&rows, 31i64, key), None);
        assert_eq!(find_closest_by(&rows[..0], 0i64, key), None);
    }

    #[test]
    fn test_unsorted_input_does_not_panic() {
        let _ = find_closest(&[30i64, 10, 20], 15i64);
    }
}
