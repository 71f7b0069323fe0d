use std::process::ExitCode;

use batsmith_app::{CliArgs, Report};
use clap::Parser;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    batsmith_core::init();
    batsmith_segment::init();
    batsmith_app::init();

    match batsmith_app::run(&args) {
        Ok(result) => {
            print!("{}", Report(&result));
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
