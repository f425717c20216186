//! Shared data types and tuning constants.
//!
//! Everything in here is plain data with no dependencies, so it can be used
//! from the rule engine, the input layer, and the renderer alike.

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows).
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (~60 FPS).
pub const TICK_MS: u32 = 16;

/// Soft drop divides the gravity interval by this factor.
pub const SOFT_DROP_DIVISOR: u32 = 10;

/// How long the soft-drop state persists after the last Down input.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Delay before a grounded piece locks.
pub const LOCK_DELAY_MS: u32 = 450;

/// Maximum number of lock-timer resets per piece.
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Gameplay pause after clearing lines.
pub const LINE_CLEAR_PAUSE_MS: u32 = 180;

/// Delayed Auto Shift: held-key delay before auto-repeat starts.
pub const DAS_MS: u32 = 150;

/// Auto Repeat Rate: interval between auto-repeated shifts.
pub const ARR_MS: u32 = 50;

/// Soft drop repeats immediately once held.
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop repeat interval.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// Gravity interval per level, milliseconds per row. Index 0 = level 0.
/// Levels past the end of the table use [`GRAVITY_FLOOR_MS`].
pub const GRAVITY_TABLE_MS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Minimum gravity interval for high levels.
pub const GRAVITY_FLOOR_MS: u32 = 120;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing N lines at level 0, indexed by N.
/// Points are multiplied by `level + 1`.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Number of upcoming pieces shown in the preview.
pub const PREVIEW_LEN: usize = 5;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order. One full bag.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Uppercase display letter.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states, Super Rotation System naming.
///
/// North is the spawn orientation; the clockwise cycle is
/// North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Commands the input layer can apply to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left.
    MoveLeft,
    /// Move piece one cell right.
    MoveRight,
    /// Drop one cell with soft-drop scoring.
    SoftDrop,
    /// Drop to the lowest valid position and lock.
    HardDrop,
    /// Rotate 90° clockwise.
    RotateCw,
    /// Rotate 90° counter-clockwise.
    RotateCcw,
    /// Swap the active piece with the hold slot.
    Hold,
    /// Toggle the pause state.
    Pause,
    /// Start a fresh game (new bag, same RNG stream).
    Restart,
}

/// A board cell: empty, or filled by a locked piece of the given kind.
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycle_is_closed() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.cw();
        }
        assert_eq!(r, Rotation::North);

        assert_eq!(Rotation::North.cw().ccw(), Rotation::North);
        assert_eq!(Rotation::West.cw(), Rotation::North);
        assert_eq!(Rotation::North.ccw(), Rotation::West);
    }

    #[test]
    fn all_kinds_have_distinct_indices() {
        let mut seen = [false; 7];
        for kind in PieceKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
    }

    #[test]
    fn line_scores_strictly_increase() {
        for n in 1..LINE_SCORES.len() {
            assert!(LINE_SCORES[n] > LINE_SCORES[n - 1]);
        }
    }
}
