//! Interaction state: polygon vertices, the active point and the run flag.
//!
//! Every transition is total. Transitions that make no sense in the current state
//! (starting without vertices or without a selection) are absorbed as no-ops.

use {
  crate::geometry::Point,
  log::debug
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RunState {
  #[default]
  Idle,
  Running
}

/// Outcome of [`InteractionState::toggle_run`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Toggle {
  /// Idle -> Running, with the vertex count frozen for the run.
  Started { vertex_count: usize },
  /// Running -> Idle.
  Stopped,
  /// Start was requested without vertices or without a selection.
  Ignored
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
  vertices: Vec<Point>,
  selection: Option<Point>,
  run_state: RunState,
  vertex_count: usize
}

impl InteractionState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn selection(&self) -> Option<Point> {
    self.selection
  }

  pub fn run_state(&self) -> RunState {
    self.run_state
  }

  pub fn is_running(&self) -> bool {
    self.run_state == RunState::Running
  }

  /// Number of vertices the current (or last) run draws its targets from.
  pub fn vertex_count(&self) -> usize {
    self.vertex_count
  }

  /// Vertices eligible as jump targets: the prefix frozen by the last start.
  pub fn targets(&self) -> &[Point] {
    &self.vertices[..self.vertex_count.min(self.vertices.len())]
  }

  pub fn add_vertex(&mut self, p: Point) {
    self.vertices.push(p);
    debug!("vertex #{} at ({}, {})", self.vertices.len(), p.x, p.y);
  }

  pub fn set_selection(&mut self, p: Point) {
    self.selection = Some(p);
    debug!("selection at ({}, {})", p.x, p.y);
  }

  pub fn toggle_run(&mut self) -> Toggle {
    match self.run_state {
      RunState::Running => {
        self.run_state = RunState::Idle;
        debug!("run stopped");
        Toggle::Stopped
      }
      RunState::Idle if self.vertices.is_empty() || self.selection.is_none() => {
        debug!("start ignored: {} vertices, selection {:?}", self.vertices.len(), self.selection);
        Toggle::Ignored
      }
      RunState::Idle => {
        self.run_state = RunState::Running;
        self.vertex_count = self.vertices.len();
        debug!("run started over {} vertices", self.vertex_count);
        Toggle::Started { vertex_count: self.vertex_count }
      }
    }
  }

  /// Halt from the generator side, e.g. when capacity is exhausted.
  pub(crate) fn halt(&mut self) {
    self.run_state = RunState::Idle;
  }

  /// Advance the moving point. Only the generator moves it between user selections.
  pub(crate) fn advance(&mut self, p: Point) {
    self.selection = Some(p);
  }

  pub fn reset(&mut self) {
    self.run_state = RunState::Idle;
    self.vertices.clear();
    self.selection = None;
    self.vertex_count = 0;
    debug!("state reset");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn triangle() -> InteractionState {
    let mut state = InteractionState::new();
    [Point::new(0, 0), Point::new(100, 0), Point::new(50, 86)]
      .into_iter()
      .for_each(|p| state.add_vertex(p));
    state
  }

  #[test] fn vertex_count_follows_additions() {
    let mut state = InteractionState::new();
    (0..17).for_each(|i| state.add_vertex(Point::new(i, i * 2)));
    assert_eq!(state.vertices().len(), 17);
    state.reset();
    (0..3).for_each(|i| state.add_vertex(Point::new(i, 0)));
    assert_eq!(state.vertices().len(), 3);
  }

  #[test] fn start_requires_vertices_and_selection() {
    let mut state = InteractionState::new();
    assert_eq!(state.toggle_run(), Toggle::Ignored);
    state.set_selection(Point::new(10, 10));
    assert_eq!(state.toggle_run(), Toggle::Ignored);
    assert_eq!(state.run_state(), RunState::Idle);

    let mut state = triangle();
    assert_eq!(state.toggle_run(), Toggle::Ignored);
    assert_eq!(state.run_state(), RunState::Idle);
  }

  #[test] fn start_snapshots_vertex_count() {
    let mut state = triangle();
    state.set_selection(Point::new(10, 10));
    assert_eq!(state.toggle_run(), Toggle::Started { vertex_count: 3 });
    assert!(state.is_running());

    state.add_vertex(Point::new(500, 500));
    assert_eq!(state.vertex_count(), 3);
    assert_eq!(state.targets().len(), 3);
    assert_eq!(state.vertices().len(), 4);

    assert_eq!(state.toggle_run(), Toggle::Stopped);
    assert_eq!(state.toggle_run(), Toggle::Started { vertex_count: 4 });
  }

  #[test] fn selection_can_be_moved_while_running() {
    let mut state = triangle();
    state.set_selection(Point::new(10, 10));
    state.toggle_run();
    state.set_selection(Point::new(20, 30));
    assert_eq!(state.selection(), Some(Point::new(20, 30)));
    assert!(state.is_running());
  }

  #[test] fn reset_clears_everything_and_is_idempotent() {
    let mut state = triangle();
    state.set_selection(Point::new(10, 10));
    state.toggle_run();
    state.reset();
    let once = format!("{:?}", state);
    assert!(state.vertices().is_empty());
    assert_eq!(state.selection(), None);
    assert_eq!(state.run_state(), RunState::Idle);
    assert_eq!(state.vertex_count(), 0);
    state.reset();
    assert_eq!(format!("{:?}", state), once);
  }
}
