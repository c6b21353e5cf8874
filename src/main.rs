use clap::Parser;
use langtons_ant::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = SimConfig::from_args(&args);

    let mut engine = match args.direction {
        Some(direction) => SimulationEngine::new(config, direction)?,
        None => {
            let mut rng = if let Some(seed) = args.seed {
                fastrand::Rng::with_seed(seed)
            } else {
                fastrand::Rng::new()
            };
            SimulationEngine::with_rng(config, &mut rng)?
        }
    };

    if args.headless {
        let mut display = HeadlessDisplay::new();
        let summary = engine.run(&mut display)?;
        engine.print_summary(&summary);
    } else {
        // terminal is restored when `display` drops, before any error is printed
        let result = {
            let mut display = TerminalDisplay::enter()?;
            engine.run(&mut display)
        };
        match result {
            Ok(_) => {}
            Err(SimError::Interrupted) => {
                log::info!("interrupted after {} steps", engine.iteration());
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
