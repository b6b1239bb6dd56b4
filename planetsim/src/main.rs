use planetsim::{Scenario, UpdateOrder};
use planetsim::{run_plot_script, write_trajectories_file};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Simulate the Sun and its planets and export the trajectories")]
struct Args {
    /// Number of integration steps (at least 2000)
    #[arg(allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Scenario YAML file; the built-in solar system is used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// CSV file receiving the trajectory samples
    #[arg(short, long, default_value = "trajectories.csv")]
    output: PathBuf,

    /// Per-step update order: sequential or synchronous
    #[arg(long)]
    order: Option<UpdateOrder>,

    /// Step size in seconds, overrides the scenario
    #[arg(long)]
    dt: Option<f64>,

    /// Plotting script to run on the exported CSV
    #[arg(long)]
    plot: Option<String>,

    /// Interpreter used to run the plotting script
    #[arg(long, default_value = "python")]
    python: String,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.file {
        Some(path) => Scenario::from_path(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::solar_system().context("failed to build solar system scenario")?,
    };

    if let Some(order) = args.order {
        scenario.parameters.order = order;
    }
    if let Some(dt) = args.dt {
        scenario.parameters.dt = dt;
    }

    Ok(scenario)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;

    let steps = match args.steps.or(scenario.steps) {
        Some(steps) => steps,
        None => bail!("no step count given on the command line or in the scenario"),
    };

    let mut simulation = scenario.into_simulation();
    let report = simulation.run(steps).context("simulation rejected its input")?;

    info!(
        "{} samples per body, relative energy drift {:.3e}",
        report.samples_per_body,
        report.relative_energy_error(),
    );

    write_trajectories_file(&args.output, &simulation.trajectories())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if let Some(script) = &args.plot {
        if let Err(e) = run_plot_script(&args.python, script, report.steps) {
            error!("Error running plotting script: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}
