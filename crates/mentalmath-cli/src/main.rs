//! mentalmath CLI: a terminal mental arithmetic trainer.

use std::io;
use std::process;

use clap::Parser;

mod play;

#[derive(Parser)]
#[command(
    name = "mentalmath",
    version,
    about = "Terminal mental arithmetic trainer",
    long_about = "Terminal mental arithmetic trainer.\n\n\
        Answer timed arithmetic problems at easy, medium, or hard difficulty. \
        Fast answers and streaks of correct answers earn bonus points. \
        Type 'quit' at any answer prompt to finish early."
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mentalmath=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let Cli {} = Cli::parse();

    // The game blocks on stdin, so it runs off the async workers while the
    // main task waits for either the game or an interrupt.
    let mut game = tokio::task::spawn_blocking(play::execute);

    let result = tokio::select! {
        joined = &mut game => game_result(joined),
        signal = tokio::signal::ctrl_c() => {
            if interrupted(signal) {
                println!("\nGoodbye! (interrupted)");
                process::exit(0);
            }
            game_result(game.await)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn game_result(joined: Result<anyhow::Result<()>, tokio::task::JoinError>) -> anyhow::Result<()> {
    joined.unwrap_or_else(|e| Err(anyhow::anyhow!("game task failed: {e}")))
}

/// Whether the Ctrl-C listener fired. A listener that failed to install is
/// logged and the game carries on without interrupt handling.
fn interrupted(signal: io::Result<()>) -> bool {
    match signal {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("could not listen for Ctrl-C: {e}");
            false
        }
    }
}
