//! Staggered tile reveal
//!
//! Scoring finalizes a row at once; the flip animation only decides how
//! many of its tiles are drawn with their colors yet. Each tile shows
//! `TILE_STAGGER` after the previous one and the whole row settles after
//! `ROW_DURATION`.

use std::time::{Duration, Instant};

/// Delay between consecutive tiles
pub const TILE_STAGGER: Duration = Duration::from_millis(100);

/// Time until a revealed row stops animating
pub const ROW_DURATION: Duration = Duration::from_millis(900);

/// Animation state for the most recently revealed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    row: usize,
    tiles: usize,
    started: Instant,
}

impl RevealSchedule {
    #[must_use]
    pub const fn new(row: usize, tiles: usize, started: Instant) -> Self {
        Self {
            row,
            tiles,
            started,
        }
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Number of tiles of the row already showing their status at `now`
    ///
    /// The first tile flips immediately.
    #[must_use]
    pub fn visible_tiles(&self, now: Instant) -> usize {
        if self.is_finished(now) {
            return self.tiles;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let stagger = TILE_STAGGER.as_millis().max(1);
        let flipped = usize::try_from(elapsed.as_millis() / stagger).unwrap_or(usize::MAX);
        flipped.saturating_add(1).min(self.tiles)
    }

    /// Whether tile `index` of `row` should be drawn with its status
    #[must_use]
    pub fn is_visible(&self, row: usize, index: usize, now: Instant) -> bool {
        row != self.row || index < self.visible_tiles(now)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= ROW_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_flip_one_per_stagger() {
        let start = Instant::now();
        let schedule = RevealSchedule::new(2, 5, start);

        assert_eq!(schedule.visible_tiles(start), 1);
        assert_eq!(schedule.visible_tiles(start + Duration::from_millis(99)), 1);
        assert_eq!(schedule.visible_tiles(start + Duration::from_millis(100)), 2);
        assert_eq!(schedule.visible_tiles(start + Duration::from_millis(450)), 5);
        assert!(!schedule.is_finished(start + Duration::from_millis(899)));
        assert!(schedule.is_finished(start + ROW_DURATION));
    }

    #[test]
    fn other_rows_are_always_visible() {
        let start = Instant::now();
        let schedule = RevealSchedule::new(1, 5, start);

        assert!(schedule.is_visible(0, 4, start));
        assert!(schedule.is_visible(1, 0, start));
        assert!(!schedule.is_visible(1, 4, start));
        assert!(schedule.is_visible(1, 4, start + ROW_DURATION));
    }

    #[test]
    fn clock_before_start_shows_first_tile() {
        let start = Instant::now() + Duration::from_secs(1);
        let schedule = RevealSchedule::new(0, 5, start);
        assert_eq!(schedule.visible_tiles(Instant::now()), 1);
    }
}
