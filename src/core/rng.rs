//! 7-bag piece generation.
//!
//! Pieces are drawn from a shuffled bag containing one of each kind; the bag
//! is reshuffled only on depletion, so any 7 consecutive draws starting at a
//! bag boundary contain every kind exactly once. A seeded LCG keeps the
//! sequence deterministic.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, PREVIEW_LEN};

/// Minimal LCG (Numerical Recipes constants). Good enough for shuffling,
/// deterministic, and dependency free.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would collapse the stream.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range(i as u32 + 1) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Buffered 7-bag generator with lookahead for the preview queue.
///
/// The buffer always holds at least one full preview's worth of pieces, so
/// peeking never has to fork the RNG.
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Upcoming pieces in draw order; refilled a whole bag at a time.
    upcoming: ArrayVec<PieceKind, 14>,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            upcoming: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        bag.top_up();
        bag
    }

    /// Append a freshly shuffled bag whenever the lookahead runs short.
    fn top_up(&mut self) {
        while self.upcoming.len() <= PREVIEW_LEN {
            let mut bag = PieceKind::ALL;
            self.rng.shuffle(&mut bag);
            for kind in bag {
                self.upcoming.push(kind);
            }
        }
    }

    /// Remove and return the next piece.
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.upcoming.remove(0);
        self.top_up();
        kind
    }

    /// The next piece without consuming it.
    pub fn peek(&self) -> PieceKind {
        self.upcoming[0]
    }

    /// The upcoming pieces shown in the preview panel.
    pub fn preview(&self) -> [PieceKind; PREVIEW_LEN] {
        let mut out = [PieceKind::I; PREVIEW_LEN];
        for (slot, kind) in out.iter_mut().zip(self.upcoming.iter()) {
            *slot = *kind;
        }
        out
    }

    /// Current RNG state; feeding it back into `new` continues the stream.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
