//! Property panel model.
//!
//! The panel shows one field per editable property of the selected
//! element. Compound properties are split into their components here and
//! merged back by the store, so the panel never writes `border` or
//! `boxShadow` directly.

use mk_core::style::{border_of, shadow_of};
use mk_core::{Element, ElementType, StyleMap, StylePatch};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelField {
    Width,
    Height,
    BackgroundColor,
    BorderRadius,
    BorderWidth,
    BorderColor,
    ShadowX,
    ShadowY,
    ShadowBlur,
    ShadowColor,
    FontSize,
    FontFamily,
    TextColor,
}

impl PanelField {
    /// Display order.
    pub const ALL: [PanelField; 13] = [
        PanelField::Width,
        PanelField::Height,
        PanelField::BackgroundColor,
        PanelField::BorderRadius,
        PanelField::BorderWidth,
        PanelField::BorderColor,
        PanelField::ShadowX,
        PanelField::ShadowY,
        PanelField::ShadowBlur,
        PanelField::ShadowColor,
        PanelField::FontSize,
        PanelField::FontFamily,
        PanelField::TextColor,
    ];

    /// Property name the field edits, as understood by `StylePatch`.
    pub fn name(self) -> &'static str {
        match self {
            PanelField::Width => "width",
            PanelField::Height => "height",
            PanelField::BackgroundColor => "backgroundColor",
            PanelField::BorderRadius => "borderRadius",
            PanelField::BorderWidth => "border-width",
            PanelField::BorderColor => "border-color",
            PanelField::ShadowX => "box-shadow-x",
            PanelField::ShadowY => "box-shadow-y",
            PanelField::ShadowBlur => "box-shadow-blur",
            PanelField::ShadowColor => "box-shadow-color",
            PanelField::FontSize => "fontSize",
            PanelField::FontFamily => "fontFamily",
            PanelField::TextColor => "color",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelField::Width => "Width",
            PanelField::Height => "Height",
            PanelField::BackgroundColor => "Background Color",
            PanelField::BorderRadius => "Border Radius",
            PanelField::BorderWidth => "Border Width",
            PanelField::BorderColor => "Border Color",
            PanelField::ShadowX => "Box Shadow X",
            PanelField::ShadowY => "Box Shadow Y",
            PanelField::ShadowBlur => "Box Shadow Blur",
            PanelField::ShadowColor => "Box Shadow Color",
            PanelField::FontSize => "Font Size",
            PanelField::FontFamily => "Font Family",
            PanelField::TextColor => "Text Color",
        }
    }

    /// Shown when the element carries no value for the field.
    pub fn default_value(self) -> &'static str {
        match self {
            PanelField::Width | PanelField::Height => "100px",
            PanelField::BackgroundColor => "#0000ff",
            PanelField::BorderRadius => "0px",
            PanelField::BorderWidth => "1px",
            PanelField::BorderColor | PanelField::ShadowColor | PanelField::TextColor => "#000000",
            PanelField::ShadowX | PanelField::ShadowY | PanelField::ShadowBlur => "0px",
            PanelField::FontSize => "16px",
            PanelField::FontFamily => "Arial",
        }
    }

    pub fn is_color(self) -> bool {
        matches!(
            self,
            PanelField::BackgroundColor
                | PanelField::BorderColor
                | PanelField::ShadowColor
                | PanelField::TextColor
        )
    }

    /// Font fields are only offered for text.
    pub fn applies_to(self, ty: ElementType) -> bool {
        match self {
            PanelField::FontSize | PanelField::FontFamily | PanelField::TextColor => {
                ty == ElementType::Text
            }
            _ => true,
        }
    }

    pub fn fields_for(ty: ElementType) -> impl Iterator<Item = PanelField> {
        Self::ALL.into_iter().filter(move |f| f.applies_to(ty))
    }

    /// Current value of the field in `style`, or its default when the value
    /// is missing or empty.
    pub fn read(self, style: &StyleMap) -> String {
        match self {
            PanelField::BorderWidth => border_of(style).width,
            PanelField::BorderColor => border_of(style).color,
            PanelField::ShadowX => shadow_of(style).x,
            PanelField::ShadowY => shadow_of(style).y,
            PanelField::ShadowBlur => shadow_of(style).blur,
            PanelField::ShadowColor => shadow_of(style).color,
            _ => style
                .get_by_name(self.name())
                .map(ToString::to_string)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| self.default_value().to_string()),
        }
    }

    /// The style edit that sets this field to `value`.
    pub fn patch(self, value: &str) -> StylePatch {
        StylePatch::single(self.name(), value)
    }
}

/// One row of the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelEntry {
    pub field: PanelField,
    pub label: &'static str,
    pub value: String,
}

/// Build the panel rows for an element.
pub fn panel_entries(element: &Element) -> Vec<PanelEntry> {
    PanelField::fields_for(element.element_type())
        .map(|field| PanelEntry {
            field,
            label: field.label(),
            value: field.read(&element.style),
        })
        .collect()
}
