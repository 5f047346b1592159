use clap::{CommandFactory, Parser, error::ErrorKind};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::process::ExitCode;
use tilescan::scan;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
)]
struct Cli {
	#[command(flatten)]
	arguments: scan::Arguments,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>, // Set verbosity flag
}

fn main() -> ExitCode {
	// Usage and configuration errors go to stdout, help and version exit successfully
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			print!("{}", err.render());
			if !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) && !has_usage(&err) {
				println!("\n{}", Cli::command().render_usage());
			}
			return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1));
		}
	};

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	let config = match cli.arguments.to_config() {
		Ok(config) => config,
		Err(err) => {
			println!("error: {err:#}\n\n{}", Cli::command().render_usage());
			return ExitCode::from(2);
		}
	};

	match scan::run(&config) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err:?}");
			ExitCode::FAILURE
		}
	}
}

// Missing and conflicting arguments already carry the usage line, value errors do not
fn has_usage(err: &clap::Error) -> bool {
	err.render().to_string().contains("Usage:")
}
