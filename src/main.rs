use {
  chaos_game::{error, script::Script},
  anyhow::Result,
  log::info,
  std::{path::PathBuf, process::ExitCode}
};

const USAGE: &str = "usage: chaos-game [SCRIPT.json] [OUT.png]";

fn run() -> Result<()> {
  let mut args = std::env::args().skip(1);
  let script = match args.next() {
    Some(flag) if flag == "-h" || flag == "--help" => {
      println!("{}", USAGE);
      return Ok(());
    }
    Some(path) => Script::load(path)?,
    None => {
      info!("no script given, playing the Sierpinski demo");
      Script::sierpinski([1024, 1024])
    }
  };
  let out = args.next().map_or_else(|| PathBuf::from("out.png"), PathBuf::from);
  if let Some(extra) = args.next() {
    anyhow::bail!("unexpected argument `{}`\n{}", extra, USAGE);
  }

  let t0 = std::time::Instant::now();
  let mut session = script.session()?;
  script.play(&mut session)?;
  info!("{} events played in {}ms", script.events.len(), t0.elapsed().as_millis());

  script.snapshot(&session, &out)?;
  let host = session.close();
  info!("{} redraws requested", host.redraws());
  Ok(())
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}", error::display(&e));
      ExitCode::FAILURE
    }
  }
}
