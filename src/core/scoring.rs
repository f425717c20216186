//! Scoring, level progression, and gravity speed.
//!
//! Classic Nintendo line-clear scoring: a base bonus per simultaneous clear
//! count, multiplied by `level + 1`. Drops score per cell travelled.

use crate::types::{
    GRAVITY_FLOOR_MS, GRAVITY_TABLE_MS, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_DIVISOR,
};

/// Points for clearing `lines` rows at once on the given level.
///
/// Zero for zero clears; the caller never passes more than four.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Points for dropping `cells` rows: 1/cell soft, 2/cell hard.
pub fn drop_score(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * 2
    } else {
        cells
    }
}

/// Level reached after clearing `total_lines` rows.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval in milliseconds for a level; floors out for high levels.
pub fn gravity_interval_ms(level: u32) -> u32 {
    GRAVITY_TABLE_MS
        .get(level as usize)
        .copied()
        .unwrap_or(GRAVITY_FLOOR_MS)
}

/// Gravity interval while soft-dropping.
pub fn soft_drop_interval_ms(level: u32) -> u32 {
    (gravity_interval_ms(level) / SOFT_DROP_DIVISOR).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_bonuses_scale_with_level() {
        assert_eq!(line_clear_score(1, 0), 40);
        assert_eq!(line_clear_score(2, 0), 100);
        assert_eq!(line_clear_score(3, 0), 300);
        assert_eq!(line_clear_score(4, 0), 1200);

        assert_eq!(line_clear_score(1, 5), 40 * 6);
        assert_eq!(line_clear_score(4, 9), 1200 * 10);
    }

    #[test]
    fn zero_or_invalid_clear_counts_score_nothing() {
        assert_eq!(line_clear_score(0, 3), 0);
        assert_eq!(line_clear_score(5, 3), 0);
    }

    #[test]
    fn simultaneous_clears_beat_sequential_ones() {
        // A tetris outscores four singles at every level.
        for level in 0..10 {
            assert!(line_clear_score(4, level) > 4 * line_clear_score(1, level));
        }
    }

    #[test]
    fn drop_scoring_rates() {
        assert_eq!(drop_score(10, false), 10);
        assert_eq!(drop_score(10, true), 20);
        assert_eq!(drop_score(0, true), 0);
    }

    #[test]
    fn level_advances_every_ten_lines() {
        assert_eq!(level_for_lines(0), 0);
        assert_eq!(level_for_lines(9), 0);
        assert_eq!(level_for_lines(10), 1);
        assert_eq!(level_for_lines(25), 2);
        assert_eq!(level_for_lines(100), 10);
    }

    #[test]
    fn gravity_shortens_with_level_and_floors() {
        for level in 1..GRAVITY_TABLE_MS.len() as u32 {
            assert!(gravity_interval_ms(level) < gravity_interval_ms(level - 1));
        }
        assert_eq!(gravity_interval_ms(9), GRAVITY_FLOOR_MS);
        assert_eq!(gravity_interval_ms(30), GRAVITY_FLOOR_MS);
    }

    #[test]
    fn soft_drop_is_faster_and_never_zero() {
        assert_eq!(soft_drop_interval_ms(0), 100);
        for level in 0..30 {
            let soft = soft_drop_interval_ms(level);
            assert!(soft >= 1);
            assert!(soft < gravity_interval_ms(level));
        }
    }
}
