use crate::color::Rgba;
use crate::models::*;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by the middleware and the viewer.
///
/// This is the only error kind callers have to catch; it is passed through
/// unchanged by the client facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GepettoError {
    /// The naming service or the viewer could not be reached.
    #[error("Service unavailable: {0}")]
    Transient(String),
    #[error("Name not bound: {0}")]
    NotFound(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Exception raised by the viewer while executing a request.
    #[error("Viewer error: {0}")]
    Remote(String),
    #[error("Middleware error: {0}")]
    Other(String),
}

impl GepettoError {
    /// Whether the error means "nobody is listening", as opposed to a
    /// request the viewer refused.
    pub fn is_transient(&self) -> bool {
        matches!(self, GepettoError::Transient(_))
    }
}

// ---------------------------------------------------------------------------
// Graphical Interface
// ---------------------------------------------------------------------------

/// Scene-building surface exported by the viewer.
///
/// Implementations are proxies: every call is a synchronous round-trip to
/// the viewer process.
pub trait GraphicalInterface: Send + Sync {
    /// Names of the open windows.
    fn get_window_list(&self) -> Result<Vec<String>, GepettoError>;

    /// Open a new window.
    fn create_window(&self, name: &str) -> Result<WindowId, GepettoError>;

    fn get_window_id(&self, name: &str) -> Result<WindowId, GepettoError>;

    fn create_scene(&self, name: &str) -> Result<(), GepettoError>;

    fn add_scene_to_window(&self, scene: &str, window: WindowId) -> Result<bool, GepettoError>;

    fn create_group(&self, name: &str) -> Result<(), GepettoError>;

    fn add_to_group(&self, node: &str, group: &str) -> Result<bool, GepettoError>;

    fn add_sphere(&self, name: &str, radius: f32, color: Rgba) -> Result<bool, GepettoError>;

    /// Add a box with the given edge lengths.
    fn add_box(&self, name: &str, size: Position, color: Rgba) -> Result<bool, GepettoError>;

    fn add_line(
        &self,
        name: &str,
        start: Position,
        end: Position,
        color: Rgba,
    ) -> Result<bool, GepettoError>;

    fn set_color(&self, name: &str, color: Rgba) -> Result<bool, GepettoError>;

    fn set_visibility(&self, name: &str, visibility: Visibility) -> Result<bool, GepettoError>;

    /// Place a node in the world frame.
    fn apply_configuration(&self, name: &str, placement: Transform) -> Result<bool, GepettoError>;

    /// Remove a node; `all` also removes its children.
    fn delete_node(&self, name: &str, all: bool) -> Result<bool, GepettoError>;

    fn node_exists(&self, name: &str) -> Result<bool, GepettoError>;

    /// Flush pending configuration changes to the display.
    fn refresh(&self) -> Result<(), GepettoError>;

    /// Ask the viewer to call `callback` on node events.
    fn register_node_callback(&self, callback: Arc<dyn NodeCallback>) -> Result<(), GepettoError>;
}

// ---------------------------------------------------------------------------
// Node Callback
// ---------------------------------------------------------------------------

/// Callback surface the viewer invokes in this process.
pub trait NodeCallback: Send + Sync {
    /// A node was picked at `position` with surface `normal` (world frame).
    fn selected(&self, name: &str, position: Position, normal: Position);
}

// ---------------------------------------------------------------------------
// Naming / Middleware
// ---------------------------------------------------------------------------

/// Directory mapping well-known names to viewer proxies.
pub trait NamingService: Send + Sync {
    fn resolve(&self, name: &ServiceName) -> Result<Arc<dyn GraphicalInterface>, GepettoError>;
}

/// The middleware runtime: hands out naming-service handles.
pub trait Orb: Send + Sync {
    fn naming_service(
        &self,
        endpoint: &NamingEndpoint,
    ) -> Result<Arc<dyn NamingService>, GepettoError>;
}
