//! Hand-off to the external plotting script
//!
//! The script reads the CSV trace on its own; the only argument it gets is
//! the step count, which it uses to label elapsed time.

use std::process::Command;

use log::info;

use crate::error::{Result, SimError};

/// Run `<interpreter> <script> <steps>` and wait for it to finish
pub fn run_plot_script(interpreter: &str, script: &str, steps: u64) -> Result<()> {
    info!("Running {} {} {}", interpreter, script, steps);

    let status = Command::new(interpreter)
        .arg(script)
        .arg(steps.to_string())
        .status()?;

    if !status.success() {
        return Err(SimError::PlotScript {
            script: script.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}
