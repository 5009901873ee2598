pub mod color;
pub mod events;
pub mod models;
pub mod traits;

pub use color::*;
pub use events::*;
pub use models::*;
pub use traits::*;

/// The error kind callers catch.
pub type Error = GepettoError;
