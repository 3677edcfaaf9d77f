//! Core data model for Mockup canvases.
//!
//! A canvas is a flat, ordered list of [`Element`]s. Each element carries a
//! style map whose keys are a closed set of recognized properties plus an
//! escape hatch for anything else, and whose values are typed where the
//! editor needs to do arithmetic or decomposition on them (lengths, border
//! and shadow shorthands). Everything that does not parse is kept verbatim.

use crate::id::ElementId;
use crate::parser::parse_length;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

// ─── Lengths ─────────────────────────────────────────────────────────────

/// CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Px,
    Percent,
    Em,
    Rem,
    Pt,
    Vw,
    Vh,
    /// Bare number, e.g. `0` or a `lineHeight` multiplier.
    None,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Pt => "pt",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::None => "",
        }
    }
}

/// A number with a unit, e.g. `100px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Length {
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_num(self.value), self.unit.as_str())
    }
}

/// Integers print without a fraction; everything else uses the shortest
/// representation that reads back to the same `f32`.
pub fn format_num(n: f32) -> String {
    if n == n.trunc() && n.abs() < 1e9 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ─── Compound shorthands ─────────────────────────────────────────────────

/// Canonical `border` shorthand: `<width> solid <color>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub width: String,
    pub color: String,
}

impl Border {
    /// Parse only the canonical three-token form.
    pub fn parse(text: &str) -> Option<Self> {
        let tokens: SmallVec<[&str; 4]> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [width, "solid", color] => Some(Self {
                width: (*width).to_string(),
                color: (*color).to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} solid {}", self.width, self.color)
    }
}

/// Canonical `boxShadow` shorthand: `<x> <y> <blur> <color>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadow {
    pub x: String,
    pub y: String,
    pub blur: String,
    pub color: String,
}

impl Shadow {
    /// Parse only the canonical four-token form.
    pub fn parse(text: &str) -> Option<Self> {
        let tokens: SmallVec<[&str; 4]> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [x, y, blur, color] => Some(Self {
                x: (*x).to_string(),
                y: (*y).to_string(),
                blur: (*blur).to_string(),
                color: (*color).to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.blur, self.color)
    }
}

// ─── Style keys & values ─────────────────────────────────────────────────

/// A style property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Width,
    Height,
    Top,
    Left,
    BackgroundColor,
    BorderRadius,
    Border,
    BoxShadow,
    Color,
    FontSize,
    FontFamily,
    TextAlign,
    LineHeight,
    /// Any property the editor does not know about, kept verbatim.
    Other(String),
}

impl StyleKey {
    pub fn from_name(name: &str) -> Self {
        match name {
            "width" => StyleKey::Width,
            "height" => StyleKey::Height,
            "top" => StyleKey::Top,
            "left" => StyleKey::Left,
            "backgroundColor" => StyleKey::BackgroundColor,
            "borderRadius" => StyleKey::BorderRadius,
            "border" => StyleKey::Border,
            "boxShadow" => StyleKey::BoxShadow,
            "color" => StyleKey::Color,
            "fontSize" => StyleKey::FontSize,
            "fontFamily" => StyleKey::FontFamily,
            "textAlign" => StyleKey::TextAlign,
            "lineHeight" => StyleKey::LineHeight,
            other => StyleKey::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StyleKey::Width => "width",
            StyleKey::Height => "height",
            StyleKey::Top => "top",
            StyleKey::Left => "left",
            StyleKey::BackgroundColor => "backgroundColor",
            StyleKey::BorderRadius => "borderRadius",
            StyleKey::Border => "border",
            StyleKey::BoxShadow => "boxShadow",
            StyleKey::Color => "color",
            StyleKey::FontSize => "fontSize",
            StyleKey::FontFamily => "fontFamily",
            StyleKey::TextAlign => "textAlign",
            StyleKey::LineHeight => "lineHeight",
            StyleKey::Other(name) => name,
        }
    }

    /// Properties whose values are plain lengths.
    fn is_length(&self) -> bool {
        matches!(
            self,
            StyleKey::Width
                | StyleKey::Height
                | StyleKey::Top
                | StyleKey::Left
                | StyleKey::BorderRadius
                | StyleKey::FontSize
        )
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A length with the text it was written as. The text is what gets
    /// emitted; the parsed length is only read for arithmetic.
    Length { length: Length, text: String },
    Border(Border),
    Shadow(Shadow),
    /// Colors, font families, keywords (`none`, `transparent`), and anything
    /// that did not parse as the key's typed form.
    Raw(String),
}

impl StyleValue {
    /// Interpret `text` according to what `key` expects, falling back to
    /// [`StyleValue::Raw`].
    pub fn parse(key: &StyleKey, text: &str) -> Self {
        let typed = match key {
            StyleKey::Border => Border::parse(text).map(StyleValue::Border),
            StyleKey::BoxShadow => Shadow::parse(text).map(StyleValue::Shadow),
            k if k.is_length() => parse_length(text).map(|length| StyleValue::Length {
                length,
                text: text.to_string(),
            }),
            _ => None,
        };
        typed.unwrap_or_else(|| StyleValue::Raw(text.to_string()))
    }

    /// Numeric part of a length-like value, ignoring the unit.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Length { length, .. } => Some(length.value),
            StyleValue::Raw(text) => parse_length(text).map(|len| len.value),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Length { text, .. } => f.write_str(text),
            StyleValue::Border(border) => border.fmt(f),
            StyleValue::Shadow(shadow) => shadow.fmt(f),
            StyleValue::Raw(text) => f.write_str(text),
        }
    }
}

/// Computed lengths are written in canonical form.
impl From<Length> for StyleValue {
    fn from(length: Length) -> Self {
        StyleValue::Length {
            length,
            text: length.to_string(),
        }
    }
}

impl From<Border> for StyleValue {
    fn from(border: Border) -> Self {
        StyleValue::Border(border)
    }
}

impl From<Shadow> for StyleValue {
    fn from(shadow: Shadow) -> Self {
        StyleValue::Shadow(shadow)
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Raw(text.to_string())
    }
}

// ─── Style map ───────────────────────────────────────────────────────────

/// Insertion-ordered style mapping. Overwriting a key keeps its position;
/// new keys append at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(StyleKey, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up by property name (`"backgroundColor"`, `"border"`, ...).
    pub fn get_by_name(&self, name: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.name() == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &StyleKey) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Parse `text` for `key` and store it.
    pub fn set_text(&mut self, key: StyleKey, text: &str) {
        let value = StyleValue::parse(&key, text);
        self.set(key, value);
    }

    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Numeric value of a length property, if present and parseable.
    pub fn number(&self, key: &StyleKey) -> Option<f32> {
        self.get(key).and_then(StyleValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.entries
                .iter()
                .map(|(k, v)| (k.name().to_string(), v.to_string())),
        )
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(String, String)>::deserialize(deserializer)?;
        let mut map = StyleMap::new();
        for (name, text) in pairs {
            if map.get_by_name(&name).is_some() {
                return Err(D::Error::custom(format!("duplicate style key `{name}`")));
            }
            map.set_text(StyleKey::from_name(&name), &text);
        }
        Ok(map)
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// What kind of element to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    Rectangle,
    Text,
}

/// The element variant, carrying kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Text { content: String },
}

impl ElementKind {
    pub fn new(ty: ElementType) -> Self {
        match ty {
            ElementType::Rectangle => ElementKind::Rectangle,
            ElementType::Text => ElementKind::Text {
                content: String::new(),
            },
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Rectangle => ElementType::Rectangle,
            ElementKind::Text { .. } => ElementType::Text,
        }
    }
}

/// A single placed object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub style: StyleMap,
}

impl Element {
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    /// Text content; always empty for rectangles.
    pub fn content(&self) -> &str {
        match &self.kind {
            ElementKind::Text { content } => content,
            ElementKind::Rectangle => "",
        }
    }
}
