use crate::client::{Client, ClientConfig};
use crate::ghost::GhostGui;
use gepetto_core::*;
use std::sync::Arc;
use tracing::{info, warn};

/// Options for [`gui_client`].
#[derive(Debug, Clone, Default)]
pub struct GuiClientOptions {
    /// Window to open if the viewer does not have it yet.
    pub window_name: Option<String>,
    /// On an unreachable viewer, log a warning instead of failing.
    pub dont_raise: bool,
    /// With `dont_raise`, hand back a [`GhostGui`] instead of `None`.
    pub ghost: bool,
    pub client: ClientConfig,
}

/// Connect to the viewer and return its graphical interface, opening
/// `window_name` when it is missing.
///
/// Only `Transient` errors are softened by `dont_raise`; everything else is
/// returned unchanged.
pub fn gui_client(
    orb: &dyn Orb,
    options: &GuiClientOptions,
) -> Result<Option<Arc<dyn GraphicalInterface>>, GepettoError> {
    match connect(orb, options) {
        Ok(gui) => Ok(Some(gui)),
        Err(e) if e.is_transient() && options.dont_raise => {
            warn!(
                error = %e,
                "Connection to the viewer failed, check that gepetto-gui is running"
            );
            if options.ghost {
                Ok(Some(Arc::new(GhostGui)))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(e),
    }
}

fn connect(
    orb: &dyn Orb,
    options: &GuiClientOptions,
) -> Result<Arc<dyn GraphicalInterface>, GepettoError> {
    let client = Client::with_config(orb, &options.client)?;
    let gui = client.gui().clone();

    if let Some(window) = &options.window_name {
        if !gui.get_window_list()?.iter().any(|w| w == window) {
            let id = gui.create_window(window)?;
            info!(window = %window, id, "Created viewer window");
        }
    }

    Ok(gui)
}
