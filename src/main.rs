use anyhow::Result;
use clap::Parser;
use std::io;

use car_sim::simulation::{CarFactory, Simulation, DEFAULT_CYCLES};

#[derive(Parser)]
#[command(name = "car_sim")]
#[command(about = "Car part wear simulation")]
struct Cli {
    /// Number of drive cycles to run before the health report
    #[arg(long, default_value_t = DEFAULT_CYCLES)]
    cycles: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut simulation = Simulation::new(CarFactory::create_car());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulation.run(cli.cycles, &mut out)
}
