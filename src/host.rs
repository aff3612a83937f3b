//! The port between a [`Session`](crate::session::Session) and whatever owns the window and the timer.

use std::time::Duration;

/// Services a session needs from its host.
pub trait Host {
  /// Core state changed; render it eventually.
  fn request_redraw(&mut self);
  /// Start calling `on_tick` every `period` until [`Host::cancel_ticks`].
  fn schedule_ticks(&mut self, period: Duration);
  /// Stop issuing ticks. Ticks already queued may still arrive and are ignored by the session.
  fn cancel_ticks(&mut self);
}

/// A host without a window: remembers what was asked of it, so that a driver loop (or a test)
/// can deliver ticks and redraws itself.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
  tick_period: Option<Duration>,
  redraws: usize,
  pending_redraw: bool
}

impl HeadlessHost {
  pub fn new() -> Self {
    Self::default()
  }

  /// Period of the active tick schedule.
  pub fn tick_period(&self) -> Option<Duration> {
    self.tick_period
  }

  pub fn is_ticking(&self) -> bool {
    self.tick_period.is_some()
  }

  /// Redraw requests received so far.
  pub fn redraws(&self) -> usize {
    self.redraws
  }

  /// Consume the pending redraw request, if any.
  pub fn take_redraw(&mut self) -> bool {
    std::mem::take(&mut self.pending_redraw)
  }
}

impl Host for HeadlessHost {
  fn request_redraw(&mut self) {
    self.redraws += 1;
    self.pending_redraw = true;
  }

  fn schedule_ticks(&mut self, period: Duration) {
    self.tick_period = Some(period);
  }

  fn cancel_ticks(&mut self) {
    self.tick_period = None;
  }
}
