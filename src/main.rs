#[macro_use] extern crate clap;
#[macro_use] extern crate lazy_static;

pub mod config;
pub mod demos;
pub mod error;
pub mod graphics;
pub mod interface;

use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use interface::cli::cli_main;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = cli_main() {
        error!("{}", e);
        process::exit(1);
    }
}
