//! Slot icons.
//!
//! An [`Icon`] is the renderable face of a button: a [`Material`] (glyph
//! plus base style) and a display label. Icons are owned by the button
//! that shows them and are replaced wholesale on update — nothing outside
//! the owning button mutates an icon in place.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Accent color shared by "positive" materials.
const COLOR_OK: Color = Color::Rgb(95, 175, 95);

/// Accent color shared by "negative" materials.
const COLOR_DENIED: Color = Color::Rgb(200, 80, 80);

/// Dimmed color for neutral materials.
const COLOR_NEUTRAL: Color = Color::Rgb(130, 130, 150);

/// The visual appearance of an icon.
///
/// Each material maps to a single-cell glyph and a default style, so a
/// grid cell always renders as `<glyph> <label>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// A door, the traditional close/exit marker.
    Door,
    /// A lever, for toggles.
    Lever,
    /// A check mark.
    Check,
    /// A cross mark.
    Cross,
    /// A gear, for settings-style buttons.
    Gear,
    /// A plain arrow marker.
    Arrow,
    /// An intentionally unobtrusive placeholder.
    Blank,
}

impl Material {
    /// The terminal glyph for this material.
    pub fn glyph(self) -> &'static str {
        match self {
            Material::Door => "⌂",
            Material::Lever => "⎆",
            Material::Check => "✓",
            Material::Cross => "✗",
            Material::Gear => "⚙",
            Material::Arrow => "▶",
            Material::Blank => "·",
        }
    }

    /// The default style for this material.
    pub fn style(self) -> Style {
        match self {
            Material::Door => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Material::Lever => Style::default().fg(Color::Yellow),
            Material::Check => Style::default().fg(COLOR_OK),
            Material::Cross => Style::default().fg(COLOR_DENIED),
            Material::Gear => Style::default().fg(COLOR_NEUTRAL),
            Material::Arrow => Style::default().fg(Color::Cyan),
            Material::Blank => Style::default().fg(COLOR_NEUTRAL),
        }
    }
}

/// A renderable icon: material, label, and effective style.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    material: Material,
    label: String,
    style: Style,
}

impl Icon {
    /// Create an icon with the material's default style.
    pub fn new(material: Material, label: impl Into<String>) -> Self {
        Self {
            material,
            label: label.into(),
            style: material.style(),
        }
    }

    /// The icon's material.
    pub fn material(&self) -> Material {
        self.material
    }

    /// The icon's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The icon's effective style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Render the icon as a single styled line: `<glyph> <label>`.
    pub fn to_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(self.material.glyph().to_string(), self.style)];
        if !self.label.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(self.label.clone(), self.style));
        }
        Line::from(spans)
    }
}

/// Factory for [`Icon`] values.
///
/// The buttons in this crate only depend on the produced [`Icon`]; hosts
/// with their own icon sources can bypass the builder entirely.
#[derive(Debug, Clone)]
pub struct IconBuilder {
    material: Material,
    label: String,
    style: Option<Style>,
}

impl IconBuilder {
    /// Start building an icon from a material.
    pub fn new(material: Material) -> Self {
        Self {
            material,
            label: String::new(),
            style: None,
        }
    }

    /// Set the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Override the material's default style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Build the icon.
    pub fn build(self) -> Icon {
        Icon {
            material: self.material,
            style: self.style.unwrap_or_else(|| self.material.style()),
            label: self.label,
        }
    }
}
