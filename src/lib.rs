//! This is a library for the chaos game in ℝ².
//!
//! The user places polygon vertices and an active point, then starts a run: on every tick the active
//! point jumps halfway toward a randomly chosen vertex, a few hundred times, and every landing spot
//! is kept. With three vertices the cloud converges to the Sierpiński triangle.
//!
//! The interactive core is [`session::Session`]. It owns the [`state::InteractionState`] and the
//! [`generator::PointGenerator`], and talks to its window through the [`host::Host`] port: redraw
//! requests and a periodic tick schedule. [`render`] turns the state into filled circle markers, and
//! [`drawing`] rasterizes them (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use chaos_game::{
//! #   error::Result,
//! #   config::Config,
//! #   geometry::Point,
//! #   host::HeadlessHost,
//! #   session::{Key, Session}
//! # };
//! # fn main() -> Result<()> {
//! let config = Config { seed: Some(0), ..Config::default() };
//! let mut session = Session::new(config, HeadlessHost::new())?;
//!
//! // left clicks place vertices, a right click places the active point
//! session.on_primary_click(Point::new(0, 0));
//! session.on_primary_click(Point::new(100, 0));
//! session.on_primary_click(Point::new(50, 86));
//! session.on_secondary_click(Point::new(10, 10));
//!
//! // space starts the run: the host is asked for a tick every 16ms
//! session.on_key(Key::Run);
//! assert!(session.host().is_ticking());
//!
//! session.on_tick();
//! assert_eq!(session.points().len(), 300);
//!
//! // escape clears everything
//! session.on_key(Key::Cancel);
//! assert!(session.points().is_empty());
//! #   Ok(())
//! # }
//! ```
//!
//! Invalid transitions, such as starting without vertices, are silently ignored, and a run stops by
//! itself once another batch would not fit under the configured capacity. The core never fails;
//! only configuration, scripts and image output return [`error::Result`].

pub mod error;
pub mod config;
pub mod geometry;
pub mod sdf;
pub mod state;
pub mod generator;
pub mod host;
pub mod session;
pub mod render;
pub mod script;
#[cfg(feature = "drawing")]
pub mod drawing;
