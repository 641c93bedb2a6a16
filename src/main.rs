use cafe_core::{CafeConfig, application::CoffeeShop, telemetry};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match CafeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let shop = CoffeeShop::new(config);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match shop.run(&mut input, &mut output) {
        Ok(report) => {
            info!(
                session = %report.session.id(),
                style = %report.style(),
                served = report.identifiers.len(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "session failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
