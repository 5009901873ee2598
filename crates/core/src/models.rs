use crate::traits::GepettoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Scene geometry
// ---------------------------------------------------------------------------

/// A point or direction in the world frame.
pub type Position = [f32; 3];

/// Placement as `[x, y, z, qx, qy, qz, qw]`.
pub type Transform = [f32; 7];

/// Window identifier handed out by the viewer.
pub type WindowId = u32;

/// Identity placement.
pub const IDENTITY: Transform = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];

/// Node visibility modes understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "ALWAYS_ON_TOP")]
    AlwaysOnTop,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::On => "ON",
            Visibility::Off => "OFF",
            Visibility::AlwaysOnTop => "ALWAYS_ON_TOP",
        }
    }
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// One `id.kind` step of a naming-service path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameComponent {
    pub id: String,
    pub kind: String,
}

impl NameComponent {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for NameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}.{}", self.id, self.kind)
        }
    }
}

/// A path in the naming service, written `id.kind/id.kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(Vec<NameComponent>);

impl ServiceName {
    pub fn new(components: Vec<NameComponent>) -> Result<Self, GepettoError> {
        if components.is_empty() {
            return Err(GepettoError::InvalidName("empty name".to_string()));
        }
        if let Some(c) = components.iter().find(|c| c.id.is_empty()) {
            return Err(GepettoError::InvalidName(format!(
                "empty id in component '{}'",
                c
            )));
        }
        Ok(Self(components))
    }

    /// The name the viewer registers its graphical interface under.
    pub fn viewer_gui() -> Self {
        Self(vec![
            NameComponent::new("gepetto", "viewer"),
            NameComponent::new("corbaserver", "gui"),
        ])
    }

    pub fn components(&self) -> &[NameComponent] {
        &self.0
    }
}

impl Default for ServiceName {
    fn default() -> Self {
        Self::viewer_gui()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for ServiceName {
    type Err = GepettoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('/')
            .map(|part| match part.split_once('.') {
                Some((id, kind)) => NameComponent::new(id, kind),
                None => NameComponent::new(part, ""),
            })
            .collect();
        Self::new(components)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = GepettoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.to_string()
    }
}

/// Where the middleware should look for the naming service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamingEndpoint {
    /// The runtime's initial references.
    Default,
    /// An explicit object URL, e.g. `corbaloc:iiop:localhost:2809/NameService`.
    Url(String),
}

impl NamingEndpoint {
    pub const DEFAULT_HOST: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 2809;

    pub fn corbaloc(host: &str, port: u16) -> Self {
        NamingEndpoint::Url(format!("corbaloc:iiop:{}:{}/NameService", host, port))
    }
}

impl fmt::Display for NamingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingEndpoint::Default => f.write_str("initial references"),
            NamingEndpoint::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_gui_name() {
        let name = ServiceName::viewer_gui();
        assert_eq!(name.to_string(), "gepetto.viewer/corbaserver.gui");
        assert_eq!(name.components().len(), 2);
        assert_eq!(name.components()[1], NameComponent::new("corbaserver", "gui"));
    }

    #[test]
    fn test_parse_service_name() {
        let name: ServiceName = "gepetto.viewer/corbaserver.gui".parse().unwrap();
        assert_eq!(name, ServiceName::viewer_gui());

        let bare: ServiceName = "viewer".parse().unwrap();
        assert_eq!(bare.components(), &[NameComponent::new("viewer", "")]);
        assert_eq!(bare.to_string(), "viewer");
    }

    #[test]
    fn test_invalid_service_name() {
        match "gepetto.viewer/.gui".parse::<ServiceName>() {
            Err(GepettoError::InvalidName(msg)) => assert!(msg.contains("empty id")),
            _ => panic!("Expected invalid name"),
        }
        assert!(ServiceName::new(Vec::new()).is_err());
    }

    #[test]
    fn test_corbaloc_endpoint() {
        let ep = NamingEndpoint::corbaloc("robot.local", 2810);
        assert_eq!(ep.to_string(), "corbaloc:iiop:robot.local:2810/NameService");
    }

    #[test]
    fn test_visibility_strings() {
        assert_eq!(Visibility::AlwaysOnTop.as_str(), "ALWAYS_ON_TOP");
        let json = serde_json::to_string(&Visibility::Off).unwrap();
        assert_eq!(json, "\"OFF\"");
    }
}
