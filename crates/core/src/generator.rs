//! Piece generation policies
//!
//! The game only asks a [`PieceGenerator`] for the next piece. The reference
//! policy is [`UniformGenerator`]: every draw is an independent uniform pick
//! from the catalog, so kinds may repeat arbitrarily often. [`BagGenerator`]
//! is the fairer 7-bag alternative and [`SequenceGenerator`] replays a fixed
//! list.

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::ShapeKind;

/// Source of new pieces, each at its spawn position for a grid `cols` wide.
pub trait PieceGenerator {
    fn create(&mut self, cols: u16) -> Piece;
}

impl<G: PieceGenerator + ?Sized> PieceGenerator for Box<G> {
    fn create(&mut self, cols: u16) -> Piece {
        (**self).create(cols)
    }
}

/// Uniform random choice with replacement.
#[derive(Debug, Clone)]
pub struct UniformGenerator {
    rng: SimpleRng,
}

impl UniformGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceGenerator for UniformGenerator {
    fn create(&mut self, cols: u16) -> Piece {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        Piece::spawn(ShapeKind::ALL[idx], cols)
    }
}

/// 7-bag generator: each bag holds every kind once, shuffled.
#[derive(Debug, Clone)]
pub struct BagGenerator {
    bag: [ShapeKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl BagGenerator {
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            bag: ShapeKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        generator.refill_bag();
        generator
    }

    fn refill_bag(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next kind, refilling the bag when it runs out.
    pub fn draw(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Kinds left in the current bag.
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag[self.bag_index..]
    }
}

impl PieceGenerator for BagGenerator {
    fn create(&mut self, cols: u16) -> Piece {
        Piece::spawn(self.draw(), cols)
    }
}

/// Cycles through a fixed, non-empty list of kinds.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    kinds: Vec<ShapeKind>,
    pos: usize,
}

impl SequenceGenerator {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "sequence generator needs at least one kind");
        Self { kinds, pos: 0 }
    }
}

impl PieceGenerator for SequenceGenerator {
    fn create(&mut self, cols: u16) -> Piece {
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos += 1;
        Piece::spawn(kind, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn uniform_is_deterministic_per_seed() {
        let mut a = UniformGenerator::new(42);
        let mut b = UniformGenerator::new(42);
        for _ in 0..50 {
            assert_eq!(a.create(10), b.create(10));
        }
    }

    #[test]
    fn uniform_covers_catalog() {
        let mut generator = UniformGenerator::new(3);
        let mut counts: HashMap<ShapeKind, u32> = HashMap::new();
        for _ in 0..7000 {
            *counts.entry(generator.create(10).kind).or_default() += 1;
        }
        assert_eq!(counts.len(), 7);
        for (kind, n) in counts {
            assert!((700..1300).contains(&n), "{kind:?} drawn {n} times");
        }
    }

    #[test]
    fn uniform_spawns_at_top_center() {
        let mut generator = UniformGenerator::new(5);
        for _ in 0..20 {
            let piece = generator.create(10);
            assert_eq!(piece.y, 0);
            assert_eq!(piece.x, 5 - piece.shape.width() / 2);
        }
    }

    #[test]
    fn bag_draws_all_seven() {
        let mut generator = BagGenerator::new(1);
        assert_eq!(generator.remaining().len(), 7);

        let mut drawn: Vec<ShapeKind> = (0..7).map(|_| generator.draw()).collect();
        drawn.sort_by_key(|k| k.index());
        assert_eq!(drawn, ShapeKind::ALL.to_vec());
        assert!(generator.remaining().is_empty());

        // Next draw starts a fresh bag.
        generator.draw();
        assert_eq!(generator.remaining().len(), 6);
    }

    #[test]
    fn sequence_cycles() {
        let mut generator = SequenceGenerator::new(vec![ShapeKind::I, ShapeKind::O]);
        let kinds: Vec<_> = (0..5).map(|_| generator.create(10).kind).collect();
        assert_eq!(
            kinds,
            vec![
                ShapeKind::I,
                ShapeKind::O,
                ShapeKind::I,
                ShapeKind::O,
                ShapeKind::I
            ]
        );
    }

    #[test]
    fn boxed_generator_delegates() {
        let mut boxed: Box<dyn PieceGenerator> = Box::new(SequenceGenerator::new([ShapeKind::T]));
        assert_eq!(boxed.create(10).kind, ShapeKind::T);
    }
}
