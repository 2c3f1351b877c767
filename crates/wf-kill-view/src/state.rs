//! Protocol glue: the `wf_kill_view_base` global and its resources

use calloop::LoopHandle;
use tracing::{debug, info, warn};
use wayland_server::backend::{ClientId, GlobalId};
use wayland_server::{Client, DataInit, Dispatch, DisplayHandle, GlobalDispatch, New};
use wf_kill_config::KillViewConfig;
use wf_kill_protocol::server::wf_kill_view_base::{self, WfKillViewBase};
use wf_kill_protocol::{INTERFACE_NAME, VERSION};

use crate::backend::{GrabBackend, OutputId};
use crate::controller::{GrabController, Report};
use crate::endpoint::EndpointSet;

/// Implemented by the compositor state that hosts the view picker
pub trait KillViewHandler: Sized + 'static {
    type Backend: GrabBackend;

    /// The picker state and the compositor backend, borrowed together
    fn kill_view_parts(&mut self) -> (&mut KillViewState, &mut Self::Backend);

    /// Handle of the compositor event loop, used to run deferred work
    fn loop_handle(&self) -> LoopHandle<'static, Self>;
}

/// Server side of the view picker: the advertised global, the bound
/// endpoints, and the selection state machine
#[derive(Debug)]
pub struct KillViewState {
    display: DisplayHandle,
    global: Option<GlobalId>,
    endpoints: EndpointSet<WfKillViewBase>,
    controller: GrabController,
}

impl KillViewState {
    /// Advertise the global. Call once when the extension is activated.
    pub fn new<D>(display: &DisplayHandle, config: KillViewConfig) -> Self
    where
        D: GlobalDispatch<WfKillViewBase, ()> + Dispatch<WfKillViewBase, ()> + 'static,
    {
        let mut display = display.clone();
        let global = display.create_global::<D, WfKillViewBase, ()>(VERSION, ());
        info!(
            interface = INTERFACE_NAME,
            version = VERSION,
            "Advertised view picker global"
        );

        Self {
            display,
            global: Some(global),
            endpoints: EndpointSet::default(),
            controller: GrabController::new(config),
        }
    }

    /// The advertised global, until [`deactivate`] removes it
    pub fn global(&self) -> Option<&GlobalId> {
        self.global.as_ref()
    }

    /// False once [`deactivate`] ran; requests from endpoints still bound
    /// after that are ignored
    pub fn is_active(&self) -> bool {
        self.global.is_some()
    }

    pub fn endpoints(&self) -> &EndpointSet<WfKillViewBase> {
        &self.endpoints
    }

    pub fn controller(&self) -> &GrabController {
        &self.controller
    }

    /// Send `report` to every bound endpoint
    pub fn broadcast(&self, report: Report) {
        debug!(?report, endpoints = self.endpoints.len(), "Broadcasting");
        for endpoint in self.endpoints.iter() {
            match report {
                Report::ViewPid(pid) => endpoint.view_pid(pid),
                Report::Cancel => endpoint.cancel(),
            }
        }
    }
}

/// Pass a pointer button event from the host's input pipeline
///
/// Returns `true` when the picker consumed the event.
pub fn pointer_button<D: KillViewHandler>(
    state: &mut D,
    output: OutputId,
    button: u32,
    pressed: bool,
) -> bool {
    let (kill_view, backend) = state.kill_view_parts();
    let consumed = kill_view
        .controller
        .pointer_button(output, button, pressed, backend);
    schedule_idle(state);
    consumed
}

/// Tear the picker down. Call once when the extension is deactivated.
///
/// Removes the global and releases any grab still held.
pub fn deactivate<D: KillViewHandler>(state: &mut D) {
    let (kill_view, backend) = state.kill_view_parts();
    if let Some(global) = kill_view.global.take() {
        kill_view.display.remove_global::<D>(global);
        info!(interface = INTERFACE_NAME, "Removed view picker global");
    }
    kill_view.controller.shutdown(backend);
}

fn schedule_idle<D: KillViewHandler>(state: &mut D) {
    let (kill_view, _) = state.kill_view_parts();
    if kill_view.controller.arm_idle() {
        state.loop_handle().insert_idle(run_idle::<D>);
    }
}

fn run_idle<D: KillViewHandler>(state: &mut D) {
    let (kill_view, backend) = state.kill_view_parts();
    if let Some(report) = kill_view.controller.run_idle(backend, &kill_view.display) {
        kill_view.broadcast(report);
    }
}

impl<D> GlobalDispatch<WfKillViewBase, (), D> for KillViewState
where
    D: GlobalDispatch<WfKillViewBase, ()> + Dispatch<WfKillViewBase, ()> + KillViewHandler,
{
    fn bind(
        state: &mut D,
        _handle: &DisplayHandle,
        client: &Client,
        resource: New<WfKillViewBase>,
        _global_data: &(),
        data_init: &mut DataInit<'_, D>,
    ) {
        let endpoint = data_init.init(resource, ());
        debug!(client = ?client.id(), "Client bound view picker");
        state.kill_view_parts().0.endpoints.insert(endpoint);
    }
}

impl<D> Dispatch<WfKillViewBase, (), D> for KillViewState
where
    D: Dispatch<WfKillViewBase, ()> + KillViewHandler,
{
    fn request(
        state: &mut D,
        client: &Client,
        _resource: &WfKillViewBase,
        request: wf_kill_view_base::Request,
        _data: &(),
        _dhandle: &DisplayHandle,
        _data_init: &mut DataInit<'_, D>,
    ) {
        match request {
            wf_kill_view_base::Request::KillView => {
                debug!(client = ?client.id(), "kill_view requested");
                let (kill_view, backend) = state.kill_view_parts();
                if !kill_view.is_active() {
                    warn!("Ignoring kill_view: view picker is deactivated");
                    return;
                }
                if let Err(err) = kill_view.controller.begin(backend) {
                    warn!("Ignoring kill_view: {}", err);
                }
                schedule_idle(state);
            }
            _ => {}
        }
    }

    fn destroyed(state: &mut D, client: ClientId, resource: &WfKillViewBase, _data: &()) {
        if state.kill_view_parts().0.endpoints.remove(resource) {
            debug!(?client, "Client endpoint destroyed");
        }
    }
}
