//! The complete rule engine state.
//!
//! Ties the board, piece generator, and scoring together and owns all game
//! timing: gravity, soft drop, lock delay, and the line-clear pause. The
//! state is pure and deterministic; it advances only through [`GameState::tick`]
//! and [`GameState::apply`].

use crate::core::pieces::{self, PieceShape, SPAWN_POSITION};
use crate::core::scoring::{
    drop_score, gravity_interval_ms, level_for_lines, line_clear_score, soft_drop_interval_ms,
};
use crate::core::{Board, PieceBag};
use crate::types::{
    GameAction, PieceKind, Rotation, LINE_CLEAR_PAUSE_MS, LOCK_DELAY_MS, LOCK_RESET_LIMIT,
    PREVIEW_LEN,
};

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A new piece at the spawn position in spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// All four minos sit on open board cells.
    pub fn fits(&self, board: &Board) -> bool {
        self.shape()
            .iter()
            .all(|&(dx, dy)| board.is_open(self.x + dx, self.y + dy))
    }

    /// Resting on the stack or the floor: any mino has support below.
    pub fn is_grounded(&self, board: &Board) -> bool {
        self.shape()
            .iter()
            .any(|&(dx, dy)| !board.is_open(self.x + dx, self.y + dy + 1))
    }
}

/// Full game state: board, active piece, hold, queue, score, and timers.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    preview: [PieceKind; PREVIEW_LEN],
    bag: PieceBag,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    lock_resets: u8,
    line_clear_timer_ms: u32,
    soft_dropping: bool,
    paused: bool,
    game_over: bool,
    started: bool,
    can_hold: bool,
}

impl GameState {
    pub fn new(seed: u32) -> Self {
        let bag = PieceBag::new(seed);
        let preview = bag.preview();
        Self {
            board: Board::new(),
            active: None,
            hold: None,
            preview,
            bag,
            score: 0,
            level: 0,
            lines: 0,
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            lock_resets: 0,
            line_clear_timer_ms: 0,
            soft_dropping: false,
            paused: false,
            game_over: false,
            started: false,
            can_hold: true,
        }
    }

    /// Spawn the first piece. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn preview(&self) -> &[PieceKind; PREVIEW_LEN] {
        &self.preview
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Draw the next piece from the bag and place it at spawn.
    ///
    /// A blocked spawn area ends the game; the state then stays terminal
    /// until a restart.
    fn spawn_piece(&mut self) -> bool {
        if self.board.is_spawn_blocked() {
            self.game_over = true;
            return false;
        }

        let piece = Piece::spawn(self.bag.draw());
        if !piece.fits(&self.board) {
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.preview = self.bag.preview();
        self.can_hold = true;
        self.lock_timer_ms = 0;
        self.lock_resets = 0;
        true
    }

    /// Current gravity interval, accounting for soft drop.
    pub fn gravity_ms(&self) -> u32 {
        if self.soft_dropping {
            soft_drop_interval_ms(self.level)
        } else {
            gravity_interval_ms(self.level)
        }
    }

    /// Shift the active piece by `(dx, dy)` if the target cells are open.
    /// Illegal moves are rejected without any state change.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let open = active
            .shape()
            .iter()
            .all(|&(mx, my)| self.board.is_open(active.x + mx + dx, active.y + my + dy));
        if !open {
            return false;
        }

        self.active = Some(Piece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });

        // Shifting a grounded piece restarts the lock delay, up to a cap so
        // a piece cannot hover forever.
        if dy != 0 || (dx != 0 && self.is_grounded()) {
            self.reset_lock_timer();
        }

        true
    }

    /// Rotate the active piece, resolving collisions through the wall-kick
    /// table. Fails without side effects when every kick collides.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        // O has a single orientation.
        if active.kind == PieceKind::O {
            return false;
        }

        let board = &self.board;
        let result = pieces::try_rotate(
            active.kind,
            active.rotation,
            active.x,
            active.y,
            clockwise,
            |x, y| board.is_open(x, y),
        );

        let Some((_, rotation, (kx, ky))) = result else {
            return false;
        };

        self.active = Some(Piece {
            rotation,
            x: active.x + kx,
            y: active.y + ky,
            ..active
        });
        self.reset_lock_timer();
        true
    }

    fn reset_lock_timer(&mut self) {
        if self.lock_resets < LOCK_RESET_LIMIT {
            self.lock_timer_ms = 0;
            self.lock_resets += 1;
        }
    }

    /// Drop the active piece to its lowest legal row and lock immediately.
    /// Returns the rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active else {
            return 0;
        };

        let distance = self.drop_distance(&active);
        if distance > 0 {
            self.active = Some(Piece {
                y: active.y + distance as i8,
                ..active
            });
        }

        self.score += drop_score(distance, true);
        self.lock_active();
        distance
    }

    /// Rows the piece can still fall before resting.
    fn drop_distance(&self, piece: &Piece) -> u32 {
        let shape = piece.shape();
        let mut distance: u32 = 0;
        loop {
            let open = shape.iter().all(|&(dx, dy)| {
                self.board
                    .is_open(piece.x + dx, piece.y + dy + distance as i8 + 1)
            });
            if !open {
                return distance;
            }
            distance += 1;
        }
    }

    /// Row the active piece would land on: the shadow projection.
    /// Recomputed on demand, never stored.
    pub fn ghost_row(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.drop_distance(&active) as i8)
    }

    /// Swap the active piece with the hold slot; allowed once per piece.
    ///
    /// The first use stores the active piece and pulls the next one from
    /// the queue instead of swapping.
    pub fn hold_swap(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold.take() {
            Some(held) => {
                let replacement = Piece::spawn(held);
                self.hold = Some(active.kind);
                if !replacement.fits(&self.board) {
                    self.active = None;
                    self.game_over = true;
                    return false;
                }
                self.active = Some(replacement);
            }
            None => {
                self.hold = Some(active.kind);
                self.spawn_piece();
            }
        }

        self.can_hold = false;
        self.lock_timer_ms = 0;
        self.lock_resets = 0;
        true
    }

    /// Merge the active piece into the board, clear full rows, update
    /// score/level, and spawn the next piece. Returns the rows cleared.
    pub fn lock_active(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        let shape = active.shape();
        self.board
            .lock_piece(&shape, active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
            self.score += line_clear_score(cleared, self.level);
            self.line_clear_timer_ms = LINE_CLEAR_PAUSE_MS;
        }

        if !self.game_over {
            self.spawn_piece();
        }
        cleared as u32
    }

    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(piece) => piece.is_grounded(&self.board),
            None => false,
        }
    }

    /// Advance game time by `elapsed_ms`.
    ///
    /// `soft_drop` reports whether the soft-drop input is currently held.
    /// Returns true when the piece moved or locked this tick.
    pub fn tick(&mut self, elapsed_ms: u32, soft_drop: bool) -> bool {
        if self.paused || self.game_over || !self.started {
            return false;
        }

        // Gameplay holds still during the line-clear pause.
        if self.line_clear_timer_ms > 0 {
            self.line_clear_timer_ms = self.line_clear_timer_ms.saturating_sub(elapsed_ms);
            return false;
        }

        if self.active.is_none() {
            return false;
        }

        // Soft-drop state transitions reset the gravity timer so the new
        // rate applies immediately.
        if soft_drop != self.soft_dropping {
            self.soft_dropping = soft_drop;
            self.drop_timer_ms = 0;
        }

        if self.is_grounded() {
            self.lock_timer_ms += elapsed_ms;
            if self.lock_timer_ms >= LOCK_DELAY_MS {
                self.lock_active();
                return true;
            }
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms >= self.gravity_ms() {
            self.drop_timer_ms = 0;
            if self.try_move(0, 1) {
                if self.soft_dropping {
                    self.score += drop_score(1, false);
                }
                return true;
            }
        }

        false
    }

    /// Apply a player command.
    ///
    /// While paused only `Pause` and `Restart` are honored; after game over
    /// only `Restart`. Returns whether the action changed anything.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }
        if self.paused && !matches!(action, GameAction::Pause | GameAction::Restart) {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                let moved = self.try_move(0, 1);
                if moved {
                    self.score += drop_score(1, false);
                }
                moved
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Hold => self.hold_swap(),
            GameAction::Pause => {
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                // Continue the RNG stream so restarts do not replay the
                // same piece sequence.
                *self = Self::new(self.bag.rng_state());
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
