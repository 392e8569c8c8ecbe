#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::Write;

use clap::Parser;

mod config;
#[cfg(feature = "log")]
mod logger;
mod render;
mod run;

use config::{Args, CliConfig};

fn main() {
    let cli_config = CliConfig::from_args(Args::parse());
    let program = std::env::args().next().unwrap_or_else(|| "ergo".to_string());

    #[cfg(feature = "log")]
    if let Err(e) = logger::init(cli_config.detail) {
        eprintln!("{program}: Failed to install logger: {e}");
    }

    #[cfg(not(feature = "log"))]
    if cli_config.detail > 0 {
        eprintln!("{program}: Logs require the 'log' feature");
    }

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    let status = match run::run(&cli_config, &program, &mut out, &mut err) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{program}: {e}");
            run::FAILURE
        }
    };

    if let Err(e) = out.flush() {
        eprintln!("{program}: {e}");
    }
    std::process::exit(status);
}
