//! Client bindings for the gepetto viewer.
//!
//! The middleware runtime is supplied by the caller as an [`Orb`]; this
//! crate only resolves the viewer through it and hands back the proxy.

pub mod callback;
pub mod client;
pub mod directory;
pub mod ghost;
pub mod gui;

pub use callback::CallbackChannel;
pub use client::{Client, ClientConfig};
pub use directory::{LocalDirectory, LocalOrb};
pub use ghost::GhostGui;
pub use gui::{gui_client, GuiClientOptions};

pub use gepetto_core::{
    ColorTable, Error, GepettoError, GraphicalInterface, NamingService, NodeCallback, Orb,
};
