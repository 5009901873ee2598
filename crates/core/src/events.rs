use crate::models::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notifications the viewer pushes back into this process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeEvent {
    /// A node was picked in the viewer window.
    Selected {
        name: String,
        position: Position,
        normal: Position,
        received_at: DateTime<Utc>,
    },
}

impl NodeEvent {
    pub fn selected(name: impl Into<String>, position: Position, normal: Position) -> Self {
        NodeEvent::Selected {
            name: name.into(),
            position,
            normal,
            received_at: Utc::now(),
        }
    }

    /// Name of the node the event refers to.
    pub fn node(&self) -> &str {
        match self {
            NodeEvent::Selected { name, .. } => name,
        }
    }
}
