// src/main.rs

use tme::errors::{LauncherError, Result};
use tme::{cli, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(LauncherError::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("tme error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32> {
    let args = cli::try_parse_from(std::env::args_os())?;
    logging::init_logging(args.log_level)?;
    run(args).await
}
