use serde::Serialize;

/// RGBA color with every channel normalized to `[0.0, 1.0]` (OSG convention).
pub type Rgba = [f32; 4];

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgba: Rgba,
}

/// The fixed 16-entry viewer palette.
///
/// Lookup by index wraps around with floored modulo, so every integer
/// (negative ones included) maps onto an entry. `-1` is the last entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTable;

impl ColorTable {
    pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const LIGHT_WHITE: Rgba = [0.9, 0.9, 0.9, 1.0];
    pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
    pub const LIGHT_GREEN: Rgba = [0.0, 0.9, 0.0, 1.0];
    pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
    pub const LIGHT_YELLOW: Rgba = [0.9, 0.9, 0.0, 1.0];
    pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
    pub const LIGHT_BLUE: Rgba = [0.0, 0.0, 0.9, 1.0];
    pub const GREY: Rgba = [0.7, 0.7, 0.7, 1.0];
    pub const LIGHT_GREY: Rgba = [0.7, 0.7, 0.7, 0.7];
    pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
    pub const LIGHT_RED: Rgba = [0.9, 0.0, 0.0, 1.0];
    pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
    pub const LIGHT_BLACK: Rgba = [0.1, 0.1, 0.1, 1.0];
    pub const BROWN: Rgba = [0.85, 0.75, 0.15, 1.0];
    pub const LIGHT_BROWN: Rgba = [0.75, 0.65, 0.10, 1.0];

    /// Palette entries in index order.
    pub const ENTRIES: [NamedColor; 16] = [
        NamedColor { name: "white", rgba: Self::WHITE },
        NamedColor { name: "lightWhite", rgba: Self::LIGHT_WHITE },
        NamedColor { name: "green", rgba: Self::GREEN },
        NamedColor { name: "lightGreen", rgba: Self::LIGHT_GREEN },
        NamedColor { name: "yellow", rgba: Self::YELLOW },
        NamedColor { name: "lightYellow", rgba: Self::LIGHT_YELLOW },
        NamedColor { name: "blue", rgba: Self::BLUE },
        NamedColor { name: "lightBlue", rgba: Self::LIGHT_BLUE },
        NamedColor { name: "grey", rgba: Self::GREY },
        NamedColor { name: "lightGrey", rgba: Self::LIGHT_GREY },
        NamedColor { name: "red", rgba: Self::RED },
        NamedColor { name: "lightRed", rgba: Self::LIGHT_RED },
        NamedColor { name: "black", rgba: Self::BLACK },
        NamedColor { name: "lightBlack", rgba: Self::LIGHT_BLACK },
        NamedColor { name: "brown", rgba: Self::BROWN },
        NamedColor { name: "lightBrown", rgba: Self::LIGHT_BROWN },
    ];

    pub const fn len() -> usize {
        Self::ENTRIES.len()
    }

    /// Position in the palette that `index` wraps to.
    pub fn slot(index: i64) -> usize {
        index.rem_euclid(Self::len() as i64) as usize
    }

    /// Color at `index mod 16`.
    pub fn get(index: i64) -> Rgba {
        Self::entry(index).rgba
    }

    pub fn entry(index: i64) -> NamedColor {
        Self::ENTRIES[Self::slot(index)]
    }

    /// Look up a color by name. Accepts both `lightRed` and `light_red`.
    pub fn by_name(name: &str) -> Option<Rgba> {
        Self::ENTRIES
            .iter()
            .find(|c| c.name == name || snake_case(c.name) == name)
            .map(|c| c.rgba)
    }

    pub fn iter() -> impl Iterator<Item = NamedColor> {
        Self::ENTRIES.into_iter()
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
