//! Request/response exchange with the compositor
//!
//! 1. Enumerate globals with one registry round-trip
//! 2. Bind `wf_kill_view_base` if advertised
//! 3. Send `kill_view`
//! 4. Block until exactly one outcome arrives
//!
//! There is no timeout: a compositor that never answers keeps the client
//! waiting.

use tracing::debug;
use wayland_client::protocol::wl_registry::{self, WlRegistry};
use wayland_client::{Connection, Dispatch, DispatchError, QueueHandle};
use wf_kill_protocol::client::wf_kill_view_base::{self, WfKillViewBase};
use wf_kill_protocol::{INTERFACE_NAME, VERSION};

use crate::error::RequestError;

/// How a selection cycle ended, from the client's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The compositor reported the owner of the clicked view
    ViewPid(i32),
    /// The user aborted the selection
    Cancelled,
    /// The global went away or the connection dropped
    Disconnected,
}

#[derive(Debug, Default)]
struct Exchange {
    /// Registry name and proxy of the bound global
    manager: Option<(u32, WfKillViewBase)>,
    outcome: Option<Outcome>,
}

/// Ask the compositor for a view selection and wait for the result
pub fn request_kill(conn: &Connection) -> Result<Outcome, RequestError> {
    let mut queue = conn.new_event_queue();
    let qh = queue.handle();
    let _registry = conn.display().get_registry(&qh, ());

    let mut exchange = Exchange::default();
    match queue.roundtrip(&mut exchange) {
        Ok(_) => {}
        Err(DispatchError::Backend(err)) => {
            debug!("Lost the compositor connection during discovery: {}", err);
            return Ok(Outcome::Disconnected);
        }
        Err(err) => return Err(err.into()),
    }

    let manager = match &exchange.manager {
        Some((_, manager)) => manager.clone(),
        None => return Err(RequestError::NotAdvertised),
    };

    manager.kill_view();
    debug!("Sent kill_view, waiting for a click");

    loop {
        if let Some(outcome) = exchange.outcome {
            return Ok(outcome);
        }

        if let Err(err) = queue.blocking_dispatch(&mut exchange) {
            debug!("Lost the compositor connection: {}", err);
            return Ok(Outcome::Disconnected);
        }
    }
}

/// Write out anything still queued before the connection is dropped
pub fn finish(conn: &Connection) -> Result<(), RequestError> {
    conn.flush().map_err(RequestError::Flush)
}

impl Dispatch<WlRegistry, ()> for Exchange {
    fn event(
        state: &mut Self,
        registry: &WlRegistry,
        event: wl_registry::Event,
        _data: &(),
        _conn: &Connection,
        qh: &QueueHandle<Self>,
    ) {
        match event {
            wl_registry::Event::Global {
                name,
                interface,
                version,
            } => {
                if interface == INTERFACE_NAME && version >= VERSION && state.manager.is_none() {
                    let manager = registry.bind::<WfKillViewBase, _, _>(name, VERSION, qh, ());
                    debug!(name, version, "Bound {}", INTERFACE_NAME);
                    state.manager = Some((name, manager));
                }
            }
            wl_registry::Event::GlobalRemove { name } => {
                if matches!(state.manager, Some((bound, _)) if bound == name) {
                    debug!(name, "{} removed by the compositor", INTERFACE_NAME);
                    state.outcome.get_or_insert(Outcome::Disconnected);
                }
            }
            _ => {}
        }
    }
}

impl Dispatch<WfKillViewBase, ()> for Exchange {
    fn event(
        state: &mut Self,
        _proxy: &WfKillViewBase,
        event: wf_kill_view_base::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
        let outcome = match event {
            wf_kill_view_base::Event::ViewPid { pid } => Outcome::ViewPid(pid),
            wf_kill_view_base::Event::Cancel => Outcome::Cancelled,
            _ => return,
        };
        state.outcome.get_or_insert(outcome);
    }
}
