use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::{debug, info};

use json_lws::cli;
use json_lws::env::EnvConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Validate a JSON document against a lightweight schema")]
struct Args {
    /// Schema document describing the expected shape of the data.
    schema: PathBuf,
    /// JSON data document to validate.
    data: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    info!("starting jlws");

    let env = EnvConfig::load();
    let args = Args::parse();
    debug!("parsed command line arguments: schema={:?}, data={:?}", args.schema, args.data);

    match cli::run(&args.schema, &args.data, &env) {
        Ok(report) => {
            print!("{report}");
            info!("jlws completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = if env.is_debug_mode() { format!("{e:?}") } else { format!("Error! {e}") };
            eprintln!("{}", message.red());
            ExitCode::FAILURE
        }
    }
}
