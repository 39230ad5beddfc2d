//! Command dispatch and handlers.

pub mod classes;
pub mod courses;
pub mod degrees;
pub mod restore;
pub mod share;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler on a live context.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the
/// selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    runtime.block_on(dispatch_with_context(command, &ctx))
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Degrees { term } => degrees::run(ctx, term).await,
        Command::Courses { degree_id, term } => courses::run(ctx, degree_id, term).await,
        Command::Restore { state } => restore::run(ctx, state).await,
        Command::Share => share::run(ctx),
        Command::Classes { state } => classes::run(ctx, state).await,
    }
}
