//! DAS/ARR key auto-repeat.
//!
//! Terminals usually do not emit key release events, so held keys are
//! inferred: a key counts as held until no press has arrived for a short
//! timeout. Repeats follow the DAS/ARR model: an initial delay, then one
//! repeat per ARR interval.

use std::time::Instant;

use arrayvec::ArrayVec;

use crossterm::event::KeyCode;

use crate::types::{GameAction, ARR_MS, DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS};

// Without release events a single tap must not turn into a sustained hold.
const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// DAS/ARR state for one repeatable key.
#[derive(Debug, Clone, Copy)]
struct Repeater {
    das_ms: u32,
    arr_ms: u32,
    held_for_ms: u32,
    arr_acc_ms: u32,
}

impl Repeater {
    fn new(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            das_ms,
            arr_ms,
            held_for_ms: 0,
            arr_acc_ms: 0,
        }
    }

    fn reset(&mut self) {
        self.held_for_ms = 0;
        self.arr_acc_ms = 0;
    }

    /// Advance by `elapsed_ms` and return how many repeats fired.
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let before = self.held_for_ms;
        self.held_for_ms += elapsed_ms;
        if self.held_for_ms < self.das_ms {
            return 0;
        }

        // Only time past the DAS threshold counts toward ARR.
        self.arr_acc_ms += if before < self.das_ms {
            self.held_for_ms - self.das_ms
        } else {
            elapsed_ms
        };

        let repeats = self.arr_acc_ms / self.arr_ms;
        self.arr_acc_ms %= self.arr_ms;
        repeats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    None,
    Left,
    Right,
}

/// Turns raw key presses into game actions with auto-repeat.
///
/// Feed every key event through [`InputHandler::key_pressed`], then call
/// [`InputHandler::poll_repeats`] once per frame for the repeat actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Held,
    soft_drop_held: bool,
    last_press: Instant,
    shift: Repeater,
    soft_drop: Repeater,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            horizontal: Held::None,
            soft_drop_held: false,
            last_press: Instant::now(),
            shift: Repeater::new(DAS_MS, ARR_MS),
            soft_drop: Repeater::new(SOFT_DROP_DAS_MS, SOFT_DROP_ARR_MS),
        }
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Record a key press. Returns the action to apply immediately; repeat
    /// presses of an already-held key are swallowed (the repeater owns the
    /// cadence).
    pub fn key_pressed(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left => {
                self.last_press = Instant::now();
                if self.horizontal == Held::Left {
                    return None;
                }
                self.horizontal = Held::Left;
                self.shift.reset();
                Some(GameAction::MoveLeft)
            }
            KeyCode::Right => {
                self.last_press = Instant::now();
                if self.horizontal == Held::Right {
                    return None;
                }
                self.horizontal = Held::Right;
                self.shift.reset();
                Some(GameAction::MoveRight)
            }
            KeyCode::Down => {
                self.last_press = Instant::now();
                if self.soft_drop_held {
                    return None;
                }
                self.soft_drop_held = true;
                self.soft_drop.reset();
                Some(GameAction::SoftDrop)
            }
            _ => None,
        }
    }

    /// Record a key release, for terminals that do report them.
    pub fn key_released(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left if self.horizontal == Held::Left => {
                self.horizontal = Held::None;
                self.shift.reset();
            }
            KeyCode::Right if self.horizontal == Held::Right => {
                self.horizontal = Held::None;
                self.shift.reset();
            }
            KeyCode::Down => {
                self.soft_drop_held = false;
                self.soft_drop.reset();
            }
            _ => {}
        }
    }

    /// Advance timers by `elapsed_ms` and collect the repeat actions due
    /// this frame.
    pub fn poll_repeats(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::new();

        if self.last_press.elapsed().as_millis() as u32 > KEY_RELEASE_TIMEOUT_MS {
            self.release_all();
        }

        let shift_action = match self.horizontal {
            Held::Left => Some(GameAction::MoveLeft),
            Held::Right => Some(GameAction::MoveRight),
            Held::None => None,
        };
        if let Some(action) = shift_action {
            for _ in 0..self.shift.advance(elapsed_ms) {
                let _ = actions.try_push(action);
            }
        }

        if self.soft_drop_held {
            for _ in 0..self.soft_drop.advance(elapsed_ms) {
                let _ = actions.try_push(GameAction::SoftDrop);
            }
        }

        actions
    }

    fn release_all(&mut self) {
        self.horizontal = Held::None;
        self.soft_drop_held = false;
        self.shift.reset();
        self.soft_drop.reset();
    }

    /// Drop all held state, e.g. on pause or restart.
    pub fn reset(&mut self) {
        self.release_all();
        self.last_press = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
