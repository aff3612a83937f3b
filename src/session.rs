//! One chaos game attempt, from window creation to window close.
//!
//! [`Session`] owns all mutable state: vertices, selection, run flag and generated points. It is
//! driven by discrete input events and by the periodic tick, all through `&mut self`, so input
//! handling and generation can never interleave. A multi-threaded host shares it behind a mutex.

use {
  crate::{
    config::Config,
    geometry::Point,
    generator::{PointGenerator, Tick},
    host::Host,
    render::{self, Marker},
    state::{InteractionState, Toggle}
  },
  anyhow::Result,
  log::{debug, info},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  serde::{Deserialize, Serialize}
};

/// Keys the session reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Key {
  /// Start or stop generation (space).
  Run,
  /// Stop and clear everything (escape).
  Cancel,
  Other
}

impl From<&str> for Key {
  fn from(name: &str) -> Self {
    match name.to_ascii_lowercase().as_str() {
      "space" | " " | "run" => Key::Run,
      "escape" | "esc" | "cancel" => Key::Cancel,
      _ => Key::Other
    }
  }
}

impl From<String> for Key {
  fn from(name: String) -> Self {
    Key::from(name.as_str())
  }
}

pub struct Session<H, R = Pcg64> {
  config: Config,
  state: InteractionState,
  generator: PointGenerator<R>,
  cursor: Option<Point>,
  host: H
}

impl<H: Host> Session<H, Pcg64> {
  /// Seeded from `config.seed`, or from OS entropy.
  pub fn new(config: Config, host: H) -> Result<Self> {
    let rng = match config.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    };
    Self::with_rng(config, rng, host)
  }
}

impl<H: Host, R: Rng> Session<H, R> {
  /// Fails when `config` does not pass [`Config::validate`].
  pub fn with_rng(config: Config, rng: R, host: H) -> Result<Self> {
    config.validate()?;
    debug!("session opened: batch {}, capacity {}", config.batch_size, config.capacity);
    Ok(Self {
      generator: PointGenerator::new(rng, config.batch_size, config.capacity),
      state: InteractionState::new(),
      cursor: None,
      config,
      host
    })
  }

  pub fn config(&self) -> &Config { &self.config }
  pub fn state(&self) -> &InteractionState { &self.state }
  pub fn points(&self) -> &[Point] { self.generator.points() }
  pub fn cursor(&self) -> Option<Point> { self.cursor }
  pub fn host(&self) -> &H { &self.host }
  pub fn host_mut(&mut self) -> &mut H { &mut self.host }

  pub fn add_vertex(&mut self, p: Point) {
    self.state.add_vertex(p);
    self.host.request_redraw();
  }

  pub fn set_selection(&mut self, p: Point) {
    self.state.set_selection(p);
    self.host.request_redraw();
  }

  pub fn toggle_run(&mut self) -> Toggle {
    let toggle = self.state.toggle_run();
    match toggle {
      Toggle::Started { .. } => self.host.schedule_ticks(self.config.tick_interval()),
      Toggle::Stopped => self.host.cancel_ticks(),
      Toggle::Ignored => ()
    }
    self.host.request_redraw();
    toggle
  }

  pub fn reset(&mut self) {
    if self.state.is_running() {
      self.host.cancel_ticks();
    }
    self.state.reset();
    self.generator.clear();
    self.host.request_redraw();
  }

  pub fn on_pointer_move(&mut self, p: Point) {
    self.cursor = Some(p);
  }

  pub fn on_primary_click(&mut self, p: Point) {
    self.cursor = Some(p);
    self.add_vertex(p);
  }

  pub fn on_secondary_click(&mut self, p: Point) {
    self.cursor = Some(p);
    self.set_selection(p);
  }

  pub fn on_key(&mut self, key: Key) {
    match key {
      Key::Run => { self.toggle_run(); }
      Key::Cancel => self.reset(),
      Key::Other => self.host.request_redraw()
    }
  }

  /// The surface belongs to the host; the core only repaints.
  pub fn on_resize(&mut self, width: u32, height: u32) {
    debug!("resized to {}x{}", width, height);
    self.host.request_redraw();
  }

  pub fn on_tick(&mut self) -> Tick {
    let tick = self.generator.tick(&mut self.state);
    if tick.halted() {
      self.host.cancel_ticks();
    }
    if tick != Tick::Skipped {
      self.host.request_redraw();
    }
    tick
  }

  /// Drawing primitives for the current state.
  pub fn render(&self) -> Vec<Marker> {
    render::render(
      self.state.vertices(),
      self.state.selection(),
      self.generator.points(),
      &self.config.style
    )
  }

  /// Tear down the session, giving the host back with its ticks cancelled.
  pub fn close(mut self) -> H {
    self.host.cancel_ticks();
    info!("session closed with {} points", self.generator.points().len());
    self.host
  }
}
