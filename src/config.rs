use {
  crate::generator::{DEFAULT_BATCH_SIZE, DEFAULT_CAPACITY, MAX_BATCH_SIZE},
  anyhow::{Context, Result, ensure},
  serde::{Deserialize, Serialize},
  std::{path::Path, time::Duration}
};

/// Tunables of a session. Every field falls back to its default when absent from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Points generated per tick.
  pub batch_size: usize,
  /// Generation halts once another batch would exceed this many points.
  pub capacity: usize,
  /// Nominal period of the generation tick, in milliseconds.
  pub tick_interval_ms: u64,
  /// Fixed RNG seed, OS entropy when `None`.
  pub seed: Option<u64>,
  pub style: Style
}

impl Default for Config {
  fn default() -> Self {
    Self {
      batch_size: DEFAULT_BATCH_SIZE,
      capacity: DEFAULT_CAPACITY,
      tick_interval_ms: 16,
      seed: None,
      style: Style::default()
    }
  }
}

/// Radii (pixels) and RGBA colors of the markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
  pub selection_radius: f32,
  pub vertex_radius: f32,
  pub point_radius: f32,
  pub selection_color: [u8; 4],
  pub vertex_color: [u8; 4],
  pub point_color: [u8; 4],
  pub background: [u8; 4]
}

impl Default for Style {
  fn default() -> Self {
    Self {
      selection_radius: 5.0,
      vertex_radius: 5.0,
      point_radius: 2.0,
      selection_color: [26, 102, 26, 255],
      vertex_color: [179, 77, 77, 255],
      point_color: [26, 26, 26, 255],
      background: [179, 204, 230, 255]
    }
  }
}

impl Config {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("reading config {}", path.display()))?;
    Self::from_json(&text)
      .with_context(|| format!("in config {}", path.display()))
  }

  pub fn from_json(text: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    ensure!(self.batch_size > 0, "batch_size must be positive");
    ensure!(self.batch_size <= MAX_BATCH_SIZE,
      "batch_size ({}) exceeds {}", self.batch_size, MAX_BATCH_SIZE);
    ensure!(self.capacity >= self.batch_size,
      "capacity ({}) is smaller than one batch ({})", self.capacity, self.batch_size);
    ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
    let s = &self.style;
    ensure!([s.selection_radius, s.vertex_radius, s.point_radius].iter().all(|r| *r > 0.0),
      "marker radii must be positive");
    Ok(())
  }

  pub fn tick_interval(&self) -> Duration {
    Duration::from_millis(self.tick_interval_ms)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn partial_json_keeps_defaults() -> Result<()> {
    let config = Config::from_json(r#"{ "capacity": 5000, "seed": 7, "style": { "point_radius": 1.5 } }"#)?;
    assert_eq!(config.capacity, 5000);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.batch_size, 300);
    assert_eq!(config.style.point_radius, 1.5);
    assert_eq!(config.style.vertex_radius, 5.0);
    assert_eq!(config.tick_interval(), Duration::from_millis(16));
    Ok(())
  }

  #[test] fn rejects_unusable_values() {
    assert!(Config::from_json(r#"{ "batch_size": 0 }"#).is_err());
    assert!(Config::from_json(r#"{ "batch_size": 300, "capacity": 299 }"#).is_err());
    assert!(Config::from_json(r#"{ "tick_interval_ms": 0 }"#).is_err());
    assert!(Config::from_json(r#"{ "style": { "vertex_radius": -1.0 } }"#).is_err());
    let huge = format!(r#"{{ "batch_size": {0}, "capacity": {0} }}"#, usize::MAX);
    assert!(Config::from_json(&huge).is_err());
    assert!(Config::from_json(r#"{ "capacity": "lots" }"#).is_err());
    assert!(Config::from_json("{").is_err());
  }

  #[test] fn missing_file_names_the_path() {
    let err = Config::load("/nonexistent/chaos.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/chaos.json"));
  }
}
