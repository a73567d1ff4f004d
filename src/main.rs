use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pomodoro_clock::cli::Args;
use pomodoro_clock::console::Console;
use pomodoro_clock::error::AppError;
use pomodoro_clock::notify::DesktopNotifier;
use pomodoro_clock::pomodoro::cycle::PhaseCycle;
use pomodoro_clock::{gui, runtime};

fn init_tracing(args: &Args) {
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if args.gui {
        // Anything written to the terminal would corrupt the UI.
        tracing_subscriber::registry().with(env_filter).init();
        return;
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_tracing(&args);

    let durations = args.durations()?;
    let (handle, mut shutdown) = runtime::shutdown_channel();
    runtime::spawn_interrupt_listener(handle);

    if args.gui {
        return gui::run(durations, shutdown).await;
    }

    info!(?durations, silent = args.silent, "starting console mode");
    let mut cycle = PhaseCycle::new(durations);
    let mut console = Console::new(io::stdout(), DesktopNotifier::new(!args.silent));
    console.run(&mut cycle, &mut shutdown).await?;
    Ok(())
}
