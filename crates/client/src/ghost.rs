use gepetto_core::*;
use std::sync::Arc;

/// A viewer that accepts every request and draws nothing.
///
/// Lets scripts run unchanged when no viewer is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhostGui;

impl GraphicalInterface for GhostGui {
    fn get_window_list(&self) -> Result<Vec<String>, GepettoError> {
        Ok(Vec::new())
    }

    fn create_window(&self, _name: &str) -> Result<WindowId, GepettoError> {
        Ok(0)
    }

    fn get_window_id(&self, _name: &str) -> Result<WindowId, GepettoError> {
        Ok(0)
    }

    fn create_scene(&self, _name: &str) -> Result<(), GepettoError> {
        Ok(())
    }

    fn add_scene_to_window(&self, _scene: &str, _window: WindowId) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn create_group(&self, _name: &str) -> Result<(), GepettoError> {
        Ok(())
    }

    fn add_to_group(&self, _node: &str, _group: &str) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn add_sphere(&self, _name: &str, _radius: f32, _color: Rgba) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn add_box(&self, _name: &str, _size: Position, _color: Rgba) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn add_line(
        &self,
        _name: &str,
        _start: Position,
        _end: Position,
        _color: Rgba,
    ) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn set_color(&self, _name: &str, _color: Rgba) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn set_visibility(&self, _name: &str, _visibility: Visibility) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn apply_configuration(&self, _name: &str, _placement: Transform) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn delete_node(&self, _name: &str, _all: bool) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn node_exists(&self, _name: &str) -> Result<bool, GepettoError> {
        Ok(true)
    }

    fn refresh(&self) -> Result<(), GepettoError> {
        Ok(())
    }

    fn register_node_callback(&self, _callback: Arc<dyn NodeCallback>) -> Result<(), GepettoError> {
        Ok(())
    }
}
