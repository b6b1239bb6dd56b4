use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::simulation::trajectory::TrajectorySeries;

/// Write trajectory samples as CSV.
///
/// Columns: name, color, x, y
/// One row per sample; all rows of a body are contiguous and bodies keep
/// the order of `series`.
pub fn write_trajectories<W: Write>(writer: &mut W, series: &[TrajectorySeries]) -> io::Result<()> {
    writeln!(writer, "name,color,x,y")?;

    for s in series {
        for p in &s.samples {
            writeln!(writer, "{},{},{},{}", s.name, s.color, p.x, p.y)?;
        }
    }

    Ok(())
}

/// Write trajectories to a CSV file at the given path.
pub fn write_trajectories_file(path: impl AsRef<Path>, series: &[TrajectorySeries]) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_trajectories(&mut writer, series)?;
    writer.flush()?;
    info!("Simulation data saved to {}", path.display());
    Ok(())
}
