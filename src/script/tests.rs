use {
  super::*,
  crate::state::RunState
};

const TRIANGLE: &str = r#"{
  "canvas": [128, 128],
  "config": { "seed": 5, "capacity": 1500 },
  "events": [
    { "event": "pointer_move", "x": 1, "y": 1 },
    { "event": "primary_click", "x": 0, "y": 0 },
    { "event": "primary_click", "x": 100, "y": 0 },
    { "event": "primary_click", "x": 50, "y": 86 },
    { "event": "secondary_click", "x": 10, "y": 10 },
    { "event": "key", "key": "space" },
    { "event": "tick", "count": 2 },
    { "event": "resize", "width": 64, "height": 64 }
  ]
}"#;

#[test] fn replays_input() -> Result<()> {
  let script = Script::from_json(TRIANGLE)?;
  assert_eq!(script.canvas, [128, 128]);
  assert_eq!(script.config.batch_size, 300);

  let mut session = script.session()?;
  script.play(&mut session)?;
  assert_eq!(session.state().vertices().len(), 3);
  assert_eq!(session.points().len(), 600);
  assert!(session.state().is_running());
  assert!(session.points().iter().all(|p| p.x <= 100 && p.y <= 86));
  Ok(())
}

#[test] fn ticks_stop_with_the_run() -> Result<()> {
  let mut script = Script::from_json(TRIANGLE)?;
  script.events.push(Event::RunUntilIdle { max_ticks: 1000 });
  let mut session = script.session()?;
  script.play(&mut session)?;
  // the fifth batch lands exactly on capacity and ends the run
  assert_eq!(session.points().len(), 1500);
  assert_eq!(session.state().run_state(), RunState::Idle);
  assert!(!session.host().is_ticking());

  // nothing scheduled: ticks are dropped
  script.apply(&mut session, &Event::Tick { count: 5 })?;
  assert_eq!(session.points().len(), 1500);
  Ok(())
}

#[test] fn cancel_key_by_name() -> Result<()> {
  let mut script = Script::from_json(TRIANGLE)?;
  script.events.push(Event::Key { key: Key::from("escape") });
  let mut session = script.session()?;
  script.play(&mut session)?;
  assert!(session.state().vertices().is_empty());
  assert!(session.points().is_empty());
  Ok(())
}

#[test] fn defaults_and_validation() -> Result<()> {
  let script = Script::from_json(r#"{ "events": [ { "event": "run_until_idle" } ] }"#)?;
  assert_eq!(script.canvas, [512, 512]);
  assert!(matches!(script.events[0], Event::RunUntilIdle { max_ticks: 100_000 }));

  assert!(Script::from_json(r#"{ "config": { "batch_size": 0 }, "events": [] }"#).is_err());
  assert!(Script::from_json(r#"{ "events": [ { "event": "jump" } ] }"#).is_err());
  assert!(Script::load("/nonexistent/script.json").is_err());
  Ok(())
}

#[test] fn sierpinski_demo_runs_to_capacity() -> Result<()> {
  let mut script = Script::sierpinski([256, 256]);
  script.config.capacity = 3000;
  script.config.seed = Some(0);
  let mut session = script.session()?;
  script.play(&mut session)?;
  assert_eq!(session.points().len(), 3000);
  assert!(!session.state().is_running());
  let bounds = crate::geometry::bounds(session.state().vertices()).unwrap();
  assert!(session.points().iter().all(|p|
    p.x >= bounds.min.x && p.x <= bounds.max.x && p.y >= bounds.min.y && p.y <= bounds.max.y));
  Ok(())
}

#[cfg(feature = "drawing")]
#[test] fn snapshot_writes_png() -> Result<()> {
  let path = std::env::temp_dir().join("chaos_game_script_test.png");
  let mut script = Script::from_json(TRIANGLE)?;
  script.events.push(Event::Snapshot { path: path.clone() });
  let mut session = script.session()?;
  script.play(&mut session)?;
  assert_eq!(image::image_dimensions(&path)?, (128, 128));
  std::fs::remove_file(path)?;
  Ok(())
}
