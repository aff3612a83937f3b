//! Headless playback of recorded input.
//!
//! A script is a JSON document:
//! ```json
//! {
//!   "canvas": [512, 512],
//!   "config": { "seed": 1 },
//!   "events": [
//!     { "event": "primary_click", "x": 256, "y": 16 },
//!     { "event": "secondary_click", "x": 300, "y": 300 },
//!     { "event": "key", "key": "space" },
//!     { "event": "run_until_idle" },
//!     { "event": "snapshot", "path": "out.png" }
//!   ]
//! }
//! ```
//! Ticks are only delivered while the host has them scheduled, as a real timer would.

use {
  crate::{
    config::Config,
    geometry::Point,
    host::HeadlessHost,
    session::{Key, Session}
  },
  anyhow::{Context, Result},
  log::{info, warn},
  rand::Rng,
  serde::{Deserialize, Serialize},
  std::path::{Path, PathBuf}
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum Event {
  PointerMove { x: i32, y: i32 },
  PrimaryClick { x: i32, y: i32 },
  SecondaryClick { x: i32, y: i32 },
  Key { key: Key },
  Resize { width: u32, height: u32 },
  /// Deliver up to `count` ticks, stopping early when the host cancels them.
  Tick { count: usize },
  /// Deliver ticks until the run stops, at most `max_ticks` of them.
  RunUntilIdle {
    #[serde(default = "default_max_ticks")]
    max_ticks: usize
  },
  /// Render the current frame to a PNG.
  Snapshot { path: PathBuf }
}

fn default_max_ticks() -> usize { 100_000 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
  #[serde(default = "default_canvas")]
  pub canvas: [u32; 2],
  #[serde(default)]
  pub config: Config,
  pub events: Vec<Event>
}

fn default_canvas() -> [u32; 2] { [512, 512] }

impl Script {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("reading script {}", path.display()))?;
    Self::from_json(&text)
      .with_context(|| format!("in script {}", path.display()))
  }

  pub fn from_json(text: &str) -> Result<Self> {
    let script: Self = serde_json::from_str(text)?;
    script.config.validate()?;
    Ok(script)
  }

  /// Vertices of a triangle inscribed in the canvas, a selection near one corner, then a run to
  /// capacity.
  pub fn sierpinski(canvas: [u32; 2]) -> Self {
    let [w, h] = canvas.map(|x| x as i32);
    let events = vec![
      Event::PrimaryClick { x: w / 2, y: h / 16 },
      Event::PrimaryClick { x: w / 16, y: h - h / 16 },
      Event::PrimaryClick { x: w - w / 16, y: h - h / 16 },
      Event::SecondaryClick { x: w / 4, y: h / 2 },
      Event::Key { key: Key::Run },
      Event::RunUntilIdle { max_ticks: default_max_ticks() }
    ];
    Self { canvas, config: Config::default(), events }
  }

  pub fn session(&self) -> Result<Session<HeadlessHost>> {
    Session::new(self.config.clone(), HeadlessHost::new())
  }

  /// Replay every event against `session`.
  pub fn play<R: Rng>(&self, session: &mut Session<HeadlessHost, R>) -> Result<()> {
    self.events.iter().try_for_each(|event| self.apply(session, event))
  }

  fn apply<R: Rng>(&self, session: &mut Session<HeadlessHost, R>, event: &Event) -> Result<()> {
    match *event {
      Event::PointerMove { x, y } => session.on_pointer_move(Point::new(x, y)),
      Event::PrimaryClick { x, y } => session.on_primary_click(Point::new(x, y)),
      Event::SecondaryClick { x, y } => session.on_secondary_click(Point::new(x, y)),
      Event::Key { key } => session.on_key(key),
      Event::Resize { width, height } => session.on_resize(width, height),
      Event::Tick { count } => {
        let delivered = tick_while_scheduled(session, count);
        if delivered < count {
          warn!("{} of {} ticks dropped: not running", count - delivered, count);
        }
      }
      Event::RunUntilIdle { max_ticks } => {
        let delivered = tick_while_scheduled(session, max_ticks);
        info!("{} ticks, {} points", delivered, session.points().len());
        if session.host().is_ticking() {
          warn!("still running after {} ticks", max_ticks);
        }
      }
      Event::Snapshot { ref path } => self.snapshot(session, path)?
    }
    Ok(())
  }

  #[cfg(feature = "drawing")]
  pub fn snapshot<R: Rng>(&self, session: &Session<HeadlessHost, R>, path: &Path) -> Result<()> {
    crate::drawing::save_frame(
      path,
      &session.render(),
      &session.config().style,
      self.canvas.into()
    )
  }

  #[cfg(not(feature = "drawing"))]
  pub fn snapshot<R: Rng>(&self, _: &Session<HeadlessHost, R>, path: &Path) -> Result<()> {
    anyhow::bail!("cannot write {}: built without the `drawing` feature", path.display())
  }
}

/// Deliver ticks while the host keeps them scheduled, returning how many were delivered.
fn tick_while_scheduled<R: Rng>(session: &mut Session<HeadlessHost, R>, max: usize) -> usize {
  let mut delivered = 0;
  while delivered < max && session.host().is_ticking() {
    session.on_tick();
    delivered += 1;
  }
  delivered
}

#[cfg(test)] mod tests;
