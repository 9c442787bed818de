mod config;
mod services;

use crate::config::{Command, Config};
use clap::Parser;
use env_logger::Env;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    let result = match &config.command {
        Command::Check(args) => services::content::verify::process(args),
        Command::Export(args) => services::content::export::process(args).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
