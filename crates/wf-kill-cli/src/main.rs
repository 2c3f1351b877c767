//! wf-kill
//!
//! Asks the compositor to let the user click a window, then prints the pid of
//! the process owning it or kills that process.

mod action;
mod error;
mod requester;

use clap::Parser;
use miette::IntoDiagnostic;
use wayland_client::Connection;

use crate::action::Mode;
use crate::error::RequestError;
use crate::requester::Outcome;

#[derive(Parser, Debug)]
#[command(name = "wf-kill")]
#[command(about = "Pick a window with the pointer and report or kill its process")]
#[command(version)]
struct Cli {
    /// Send SIGKILL to the process instead of printing its pid
    #[arg(short)]
    kill: bool,
}

fn main() -> miette::Result<()> {
    // Logs go to stderr so stdout only carries the pid lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.kill { Mode::Kill } else { Mode::Report };

    let conn = match Connection::connect_to_env() {
        Ok(conn) => conn,
        Err(e) => {
            tracing::debug!("Cannot reach the compositor: {}", e);
            return Ok(());
        }
    };

    match requester::request_kill(&conn) {
        Ok(Outcome::ViewPid(pid)) => {
            action::act_on_pid(pid, mode, &mut std::io::stdout().lock()).into_diagnostic()?;
        }
        Ok(Outcome::Cancelled | Outcome::Disconnected) => return Ok(()),
        Err(e @ RequestError::NotAdvertised) => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e).into_diagnostic(),
    }

    requester::finish(&conn).into_diagnostic()
}
