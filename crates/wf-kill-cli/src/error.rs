//! Error types for wf-kill

use thiserror::Error;
use wayland_client::backend::WaylandError;
use wayland_client::DispatchError;

/// Errors of the request/response exchange with the compositor
#[derive(Debug, Error)]
pub enum RequestError {
    /// The compositor does not advertise `wf_kill_view_base`
    #[error("Wayfire kill view protocol not advertised by compositor. Is wf-kill plugin enabled?")]
    NotAdvertised,

    /// The compositor sent something that could not be dispatched
    #[error("Failed to discover compositor globals: {0}")]
    Dispatch(#[from] DispatchError),

    /// Pending requests could not be written to the socket
    #[error("Failed to flush the compositor connection: {0}")]
    Flush(#[source] WaylandError),
}

/// Errors while acting on a reported pid
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Failed to send SIGKILL to PID {pid}: {source}")]
    Signal {
        pid: i32,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
