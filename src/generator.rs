//! Batched chaos game point generation.
//!
//! Each tick jumps the active point halfway toward a uniformly chosen vertex, `batch_size` times,
//! appending every landing point. Generation stops for good once one more batch would not fit
//! under `capacity`.

use {
  crate::{
    geometry::{Point, abs_midpoint},
    state::InteractionState
  },
  log::{info, trace},
  rand::Rng
};

pub const DEFAULT_BATCH_SIZE: usize = 300;
pub const DEFAULT_CAPACITY: usize = 100_000;
/// Upper bound on points per tick.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// Chaos game jumps from `from`, toward the given vertices. Endless, unless there are no vertices.
pub struct Jumps<'a, R> {
  rng: &'a mut R,
  targets: &'a [Point],
  current: Point
}

impl<'a, R: Rng> Jumps<'a, R> {
  pub fn new(rng: &'a mut R, targets: &'a [Point], from: Point) -> Self {
    Self { rng, targets, current: from }
  }
}

impl<R: Rng> Iterator for Jumps<'_, R> {
  type Item = Point;

  fn next(&mut self) -> Option<Point> {
    if self.targets.is_empty() {
      return None;
    }
    let vertex = self.targets[self.rng.gen_range(0..self.targets.len())];
    self.current = abs_midpoint(self.current, vertex);
    Some(self.current)
  }
}

/// Outcome of one [`PointGenerator::tick`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
  /// Not running: nothing happened.
  Skipped,
  /// A batch was appended, and the run goes on.
  Generated(usize),
  /// The run was halted by the capacity check. `generated` points were appended before halting.
  Halted { generated: usize }
}

impl Tick {
  pub fn generated(&self) -> usize {
    match *self {
      Tick::Skipped => 0,
      Tick::Generated(n) | Tick::Halted { generated: n } => n
    }
  }

  pub fn halted(&self) -> bool {
    matches!(self, Tick::Halted { .. })
  }
}

pub struct PointGenerator<R> {
  rng: R,
  batch_size: usize,
  capacity: usize,
  points: Vec<Point>
}

impl<R: Rng> PointGenerator<R> {
  /// `batch_size` is clamped to `1..=MAX_BATCH_SIZE`.
  pub fn new(rng: R, batch_size: usize, capacity: usize) -> Self {
    Self {
      rng,
      batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
      capacity,
      points: vec![]
    }
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn batch_size(&self) -> usize {
    self.batch_size
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Whether one more full batch still fits.
  pub fn has_headroom(&self) -> bool {
    self.points.len().checked_add(self.batch_size)
      .map_or(false, |n| n <= self.capacity)
  }

  pub fn clear(&mut self) {
    self.points.clear();
  }

  /// One periodic invocation. Mutates the selection (it follows the last generated point) and may
  /// halt the run.
  pub fn tick(&mut self, state: &mut InteractionState) -> Tick {
    if !state.is_running() {
      return Tick::Skipped;
    }
    let start = match state.selection() {
      Some(p) if !state.targets().is_empty() && self.has_headroom() => p,
      _ => {
        state.halt();
        info!("generation halted at {} points", self.points.len());
        return Tick::Halted { generated: 0 };
      }
    };

    let before = self.points.len();
    self.points.extend(
      Jumps::new(&mut self.rng, state.targets(), start)
        .take(self.batch_size)
    );
    if let Some(&last) = self.points[before..].last() {
      state.advance(last);
    }
    let generated = self.points.len() - before;
    trace!("tick: +{} points, {} total", generated, self.points.len());

    if self.has_headroom() {
      Tick::Generated(generated)
    } else {
      state.halt();
      info!("generation halted at {} points", self.points.len());
      Tick::Halted { generated }
    }
  }
}
