use ipv4_info::config::Config;
use ipv4_info::input::read_input;
use ipv4_info::logging::{init_logging, LOG_CONFIG_FILE};
use ipv4_info::run;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging(LOG_CONFIG_FILE)?;
    log::info!("#Start main()");

    let config = Config::from_env();
    let input = match read_input(std::env::args().nth(1), io::stdin().lock(), io::stdout()) {
        Ok(input) => input,
        Err(e) => {
            log::warn!("Unable to read input: {e}");
            println!("Was unable to verify the IP address");
            return Ok(());
        }
    };

    println!("{}", run(&input, &config)?);
    log::info!("#End main()");
    Ok(())
}
