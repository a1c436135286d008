//! Command dispatch: bridges CLI args -> backend operations -> output formatting.

pub mod boxes;
pub mod config_cmd;
pub mod donors;
pub mod events;
pub mod gate;
pub mod geo;
pub mod passes;
pub mod util;

use mtjops_core::Backend;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, backend: &Backend, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Events(args) => events::handle(backend, args, global).await,
        Command::Passes(args) => passes::handle(backend, args, global).await,
        Command::Gate(args) => gate::handle(backend, args, global).await,
        Command::Donors(args) => donors::handle(backend, args, global).await,
        Command::Boxes(args) => boxes::handle(backend, args, global).await,
        Command::Geo(args) => geo::handle(backend, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
