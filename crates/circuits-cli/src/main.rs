use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod error;
mod format;
mod io;
mod run;

pub use cli::{Cli, OutputFormat, PathOrStdin};

use crate::error::CliError;
use crate::run::RunOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => fail(&CliError::Usage {
            detail: e.to_string(),
        }),
    };

    init_logging(cli.log_level());

    if let Err(e) = run_cli(&cli) {
        fail(&e);
    }
}

/// Installs the stderr logger; `RUST_LOG` overrides the flag-derived level.
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run_cli(cli: &Cli) -> Result<(), CliError> {
    let vertex_count = usize::try_from(cli.num_vertices).map_err(|_| CliError::Usage {
        detail: format!(
            "error: NUM_VERTICES {} exceeds the addressable range",
            cli.num_vertices
        ),
    })?;

    let content = io::read_input(&cli.input, cli.max_file_size)?;

    let mut config = circuits_core::EnumerationConfig::default()
        .with_multi_arcs(cli.multi_arcs.into());
    if let Some(jobs) = cli.jobs {
        config = config.with_threads(jobs);
    }

    let options = RunOptions {
        vertex_count,
        format: cli.format,
        count_only: cli.count_only,
        echo_arcs: cli.echo_arcs,
        config,
        parallel: cli.jobs.is_some(),
    };
    run::run(&content, &options)
}

fn fail(e: &CliError) -> ! {
    eprintln!("{}", e.message());
    std::process::exit(e.exit_code());
}
