//! Scoring module - row clear points
//!
//! A clear is scored once per [`Board::delete_full_rows`](crate::Board::delete_full_rows)
//! call, from the total number of rows that call removed. Clearing four rows
//! at once is worth 1200, not four times 40.

/// Points for clearing N rows in a single clear (index = rows).
///
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
pub const ROW_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points for one clear of `rows` rows. Counts outside 1..=4 score nothing.
pub fn rows_score(rows: u32) -> u32 {
    ROW_SCORES.get(rows as usize).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_score_table() {
        assert_eq!(rows_score(0), 0);
        assert_eq!(rows_score(1), 40);
        assert_eq!(rows_score(2), 100);
        assert_eq!(rows_score(3), 300);
        assert_eq!(rows_score(4), 1200);
    }

    #[test]
    fn test_rows_score_out_of_table() {
        assert_eq!(rows_score(5), 0);
        assert_eq!(rows_score(u32::MAX), 0);
    }
}
