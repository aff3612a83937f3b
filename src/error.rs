//! Error type shared by the fallible edges of the crate.
//!
//! The interactive core never fails: invalid transitions are no-ops and the capacity halt is a
//! normal end of a run. Errors only arise at the edges (configuration, scripts, image output)
//! and are carried by [`anyhow`].

pub use anyhow::{Error, Result};

/// Render the chain of causes, one per line, outermost first.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("\n└> {} - {}", index, error)));
  msg
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    anyhow::{anyhow, Context}
  };

  #[test] fn chain_is_listed_outermost_first() {
    let err = Err::<(), _>(anyhow!("unexpected end of input"))
      .context("in script demo.json")
      .unwrap_err();
    assert_eq!(display(&err), "Error:\n└> 0 - in script demo.json\n└> 1 - unexpected end of input");
  }
}
