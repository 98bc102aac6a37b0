//! The userdesk CLI

use clap::Parser;
use tracing::{debug, error};
use userdesk_client::args::{Args, Command};
use userdesk_client::{ClientError, ProfileView, load_user, render_timestamp};
use userdesk_common::TimeFormatter;
use userdesk_protocol::WireTimestamp;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("invalid --now value: {0}")]
    Time(#[from] jiff::Error),
}

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args);

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(-1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let formatter = args.formatter()?;
    debug!(
        "clock: {:?}, now: {}",
        formatter.clock(),
        formatter.now()
    );

    match &args.command {
        Command::Format {
            seconds,
            nanos,
            style,
        } => {
            let ts = WireTimestamp::new(*seconds, *nanos);
            println!("{}", render_timestamp(&formatter, &ts, *style));
        }
        Command::Profile { file } => display_profile(&formatter, file)?,
    }

    Ok(())
}

fn display_profile(formatter: &TimeFormatter, file: &str) -> Result<(), CliError> {
    let user = load_user(file)?;
    print!("{}", ProfileView::new(&user, formatter));
    Ok(())
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            2.. => builder = builder.with_max_level(tracing::Level::TRACE),
            1 => builder = builder.with_max_level(tracing::Level::DEBUG),
            _ => builder = builder.with_max_level(tracing::Level::INFO),
        }
    }

    builder.init();
}
