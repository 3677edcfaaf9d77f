//! Style merging.
//!
//! The property panel edits `border` and `boxShadow` one component at a
//! time (`border-width`, `box-shadow-y`, ...). Those component keys only
//! exist inside a [`StylePatch`]; [`merge`] folds them back into the single
//! canonical shorthand stored on the element.

use crate::model::{Border, ElementType, Length, Shadow, StyleKey, StyleMap, StyleValue};
use smallvec::SmallVec;

pub const DEFAULT_BORDER_WIDTH: &str = "1px";
pub const DEFAULT_BORDER_COLOR: &str = "#000000";
pub const DEFAULT_SHADOW_OFFSET: &str = "0px";
pub const DEFAULT_SHADOW_BLUR: &str = "0px";
pub const DEFAULT_SHADOW_COLOR: &str = "#000000";

/// Background of a freshly created rectangle.
pub const DEFAULT_RECT_FILL: &str = "#db9b9b";

// ─── Patch keys ──────────────────────────────────────────────────────────

/// A key a style edit can address: a stored property, or one component of
/// a compound shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchKey {
    Property(StyleKey),
    BorderWidth,
    BorderColor,
    ShadowX,
    ShadowY,
    ShadowBlur,
    ShadowColor,
}

impl PatchKey {
    pub fn from_name(name: &str) -> Self {
        match name {
            "border-width" => PatchKey::BorderWidth,
            "border-color" => PatchKey::BorderColor,
            "box-shadow-x" => PatchKey::ShadowX,
            "box-shadow-y" => PatchKey::ShadowY,
            "box-shadow-blur" => PatchKey::ShadowBlur,
            "box-shadow-color" => PatchKey::ShadowColor,
            other => PatchKey::Property(StyleKey::from_name(other)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PatchKey::Property(key) => key.name(),
            PatchKey::BorderWidth => "border-width",
            PatchKey::BorderColor => "border-color",
            PatchKey::ShadowX => "box-shadow-x",
            PatchKey::ShadowY => "box-shadow-y",
            PatchKey::ShadowBlur => "box-shadow-blur",
            PatchKey::ShadowColor => "box-shadow-color",
        }
    }
}

impl From<StyleKey> for PatchKey {
    fn from(key: StyleKey) -> Self {
        match key {
            // Component names smuggled in through the escape hatch still
            // resolve to their compound property.
            StyleKey::Other(name) => PatchKey::from_name(&name),
            key => PatchKey::Property(key),
        }
    }
}

// ─── Patches ─────────────────────────────────────────────────────────────

/// A partial style update, applied in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    entries: Vec<(PatchKey, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry patch addressed by property name.
    pub fn single(name: &str, value: impl Into<String>) -> Self {
        Self::new().with(name, value)
    }

    /// Builder form of [`StylePatch::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(PatchKey::from_name(name), value);
        self
    }

    pub fn set(&mut self, key: impl Into<PatchKey>, value: impl Into<String>) {
        let key = match key.into() {
            PatchKey::Property(prop) => PatchKey::from(prop),
            key => key,
        };
        self.entries.push((key, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PatchKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last value given for `key`, if any.
    fn last(&self, key: &PatchKey) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<PatchKey>, V: Into<String>> FromIterator<(K, V)> for StylePatch {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut patch = StylePatch::new();
        for (k, v) in iter {
            patch.set(k, v);
        }
        patch
    }
}

impl From<&str> for PatchKey {
    fn from(name: &str) -> Self {
        PatchKey::from_name(name)
    }
}

// ─── Merge ───────────────────────────────────────────────────────────────

/// Apply `patch` on top of `current` and return the merged style.
///
/// Plain properties overwrite in place. Border and shadow components are
/// resolved against the shorthand as it stands after the plain properties
/// have been applied, so a patch carrying both `border` and `border-width`
/// edits the new border.
#[must_use]
pub fn merge(current: &StyleMap, patch: &StylePatch) -> StyleMap {
    let mut style = current.clone();

    for (key, value) in patch.iter() {
        if let PatchKey::Property(prop) = key {
            style.set_text(prop.clone(), value);
        }
    }

    let width = patch.last(&PatchKey::BorderWidth);
    let color = patch.last(&PatchKey::BorderColor);
    if width.is_some() || color.is_some() {
        let mut border = border_of(&style);
        if let Some(width) = width {
            border.width = width.to_string();
        }
        if let Some(color) = color {
            border.color = color.to_string();
        }
        log::trace!("merge border -> {border}");
        style.set(StyleKey::Border, border);
    }

    let x = patch.last(&PatchKey::ShadowX);
    let y = patch.last(&PatchKey::ShadowY);
    let blur = patch.last(&PatchKey::ShadowBlur);
    let color = patch.last(&PatchKey::ShadowColor);
    if x.is_some() || y.is_some() || blur.is_some() || color.is_some() {
        let mut shadow = shadow_of(&style);
        for (slot, value) in [
            (&mut shadow.x, x),
            (&mut shadow.y, y),
            (&mut shadow.blur, blur),
            (&mut shadow.color, color),
        ] {
            if let Some(value) = value {
                *slot = value.to_string();
            }
        }
        log::trace!("merge boxShadow -> {shadow}");
        style.set(StyleKey::BoxShadow, shadow);
    }

    style
}

/// Decompose the element's `border`, filling anything missing or malformed
/// with the default components. The keyword `none` decomposes to the
/// defaults.
pub fn border_of(style: &StyleMap) -> Border {
    let text = match style.get(&StyleKey::Border) {
        Some(StyleValue::Border(border)) => return border.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let tokens = shorthand_tokens(&text);
    Border {
        width: token_or(&tokens, 0, DEFAULT_BORDER_WIDTH),
        color: token_or(&tokens, 2, DEFAULT_BORDER_COLOR),
    }
}

/// Decompose the element's `boxShadow`, same fallback rules as
/// [`border_of`].
pub fn shadow_of(style: &StyleMap) -> Shadow {
    let text = match style.get(&StyleKey::BoxShadow) {
        Some(StyleValue::Shadow(shadow)) => return shadow.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let tokens = shorthand_tokens(&text);
    Shadow {
        x: token_or(&tokens, 0, DEFAULT_SHADOW_OFFSET),
        y: token_or(&tokens, 1, DEFAULT_SHADOW_OFFSET),
        blur: token_or(&tokens, 2, DEFAULT_SHADOW_BLUR),
        color: token_or(&tokens, 3, DEFAULT_SHADOW_COLOR),
    }
}

fn shorthand_tokens(text: &str) -> SmallVec<[&str; 4]> {
    if text.trim() == "none" {
        return SmallVec::new();
    }
    text.split_whitespace().collect()
}

fn token_or(tokens: &[&str], index: usize, default: &str) -> String {
    tokens.get(index).copied().unwrap_or(default).to_string()
}

// ─── Defaults ────────────────────────────────────────────────────────────

/// The canonical style of a freshly created element.
pub fn default_style(ty: ElementType) -> StyleMap {
    let mut style = StyleMap::new();
    style.set(StyleKey::Width, Length::px(100.0));
    style.set(StyleKey::Height, Length::px(100.0));
    match ty {
        ElementType::Rectangle => {
            style.set(StyleKey::BackgroundColor, DEFAULT_RECT_FILL);
            style.set(StyleKey::BorderRadius, Length::px(0.0));
            style.set(
                StyleKey::Border,
                Border {
                    width: DEFAULT_BORDER_WIDTH.into(),
                    color: DEFAULT_BORDER_COLOR.into(),
                },
            );
            style.set(
                StyleKey::BoxShadow,
                Shadow {
                    x: DEFAULT_SHADOW_OFFSET.into(),
                    y: DEFAULT_SHADOW_OFFSET.into(),
                    blur: DEFAULT_SHADOW_BLUR.into(),
                    color: DEFAULT_SHADOW_COLOR.into(),
                },
            );
        }
        ElementType::Text => {
            style.set(StyleKey::FontSize, Length::px(16.0));
            style.set(StyleKey::FontFamily, "Arial");
            style.set(StyleKey::Color, "#000000");
            style.set(StyleKey::BackgroundColor, "transparent");
            style.set(StyleKey::BorderRadius, Length::px(0.0));
            style.set(StyleKey::Border, "none");
            style.set(StyleKey::BoxShadow, "none");
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(style: &StyleMap, name: &str) -> Option<String> {
        style.get_by_name(name).map(ToString::to_string)
    }

    #[test]
    fn plain_keys_overwrite() {
        let style = default_style(ElementType::Rectangle);
        let merged = merge(&style, &StylePatch::single("width", "240px"));
        assert_eq!(text_of(&merged, "width").as_deref(), Some("240px"));
        // Position in the map is unchanged.
        assert_eq!(merged.keys().next(), Some(&StyleKey::Width));
    }

    #[test]
    fn unknown_keys_are_stored_verbatim() {
        let style = StyleMap::new();
        let merged = merge(&style, &StylePatch::single("mixBlendMode", "multiply"));
        assert_eq!(
            text_of(&merged, "mixBlendMode").as_deref(),
            Some("multiply")
        );
    }

    #[test]
    fn border_width_without_prior_border_uses_default() {
        let merged = merge(&StyleMap::new(), &StylePatch::single("border-width", "3px"));
        assert_eq!(
            text_of(&merged, "border").as_deref(),
            Some("3px solid #000000")
        );
        assert!(merged.get_by_name("border-width").is_none());
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn border_color_keeps_width() {
        let style = merge(&StyleMap::new(), &StylePatch::single("border-width", "4px"));
        let merged = merge(&style, &StylePatch::single("border-color", "#ff0000"));
        assert_eq!(
            text_of(&merged, "border").as_deref(),
            Some("4px solid #ff0000")
        );
        assert!(merged.get_by_name("border-color").is_none());
    }

    #[test]
    fn border_edit_on_none_falls_back_to_defaults() {
        let style = default_style(ElementType::Text);
        let merged = merge(&style, &StylePatch::single("border-color", "#00ff00"));
        assert_eq!(
            text_of(&merged, "border").as_deref(),
            Some("1px solid #00ff00")
        );
    }

    #[test]
    fn short_border_fills_missing_components() {
        let mut style = StyleMap::new();
        style.set_text(StyleKey::Border, "2px");
        let merged = merge(&style, &StylePatch::single("border-color", "red"));
        assert_eq!(text_of(&merged, "border").as_deref(), Some("2px solid red"));
    }

    #[test]
    fn non_solid_border_is_canonicalized() {
        let mut style = StyleMap::new();
        style.set_text(StyleKey::Border, "2px dashed blue");
        let merged = merge(&style, &StylePatch::single("border-width", "5px"));
        assert_eq!(
            text_of(&merged, "border").as_deref(),
            Some("5px solid blue")
        );
    }

    #[test]
    fn border_and_component_in_one_patch() {
        let patch = StylePatch::new()
            .with("border", "2px solid green")
            .with("border-width", "6px");
        let merged = merge(&StyleMap::new(), &patch);
        assert_eq!(
            text_of(&merged, "border").as_deref(),
            Some("6px solid green")
        );
    }

    #[test]
    fn shadow_components_update_independently() {
        let style = default_style(ElementType::Rectangle);
        let style = merge(&style, &StylePatch::single("box-shadow-y", "5px"));
        let style = merge(&style, &StylePatch::single("box-shadow-y", "9px"));
        assert_eq!(
            text_of(&style, "boxShadow").as_deref(),
            Some("0px 9px 0px #000000")
        );
        let style = merge(&style, &StylePatch::single("box-shadow-color", "#333333"));
        assert_eq!(
            text_of(&style, "boxShadow").as_deref(),
            Some("0px 9px 0px #333333")
        );
    }

    #[test]
    fn shadow_on_none_uses_defaults() {
        let style = default_style(ElementType::Text);
        let merged = merge(&style, &StylePatch::single("box-shadow-blur", "4px"));
        assert_eq!(
            text_of(&merged, "boxShadow").as_deref(),
            Some("0px 0px 4px #000000")
        );
    }

    #[test]
    fn partial_shadow_string_defaults_missing_tokens() {
        let mut style = StyleMap::new();
        style.set_text(StyleKey::BoxShadow, "3px 4px");
        let merged = merge(&style, &StylePatch::single("box-shadow-x", "1px"));
        assert_eq!(
            text_of(&merged, "boxShadow").as_deref(),
            Some("1px 4px 0px #000000")
        );
    }

    #[test]
    fn component_names_through_escape_hatch_still_resolve() {
        let mut patch = StylePatch::new();
        patch.set(StyleKey::Other("border-width".into()), "7px");
        let merged = merge(&StyleMap::new(), &patch);
        assert!(merged.get_by_name("border-width").is_none());
        assert_eq!(
            text_of(&merged, "border").as_deref(),
            Some("7px solid #000000")
        );
    }

    #[test]
    fn rectangle_defaults_in_order() {
        let style = default_style(ElementType::Rectangle);
        let keys: Vec<_> = style.keys().map(StyleKey::name).collect();
        assert_eq!(
            keys,
            [
                "width",
                "height",
                "backgroundColor",
                "borderRadius",
                "border",
                "boxShadow"
            ]
        );
    }

    #[test]
    fn text_defaults_carry_shared_keys() {
        let style = default_style(ElementType::Text);
        for name in [
            "width",
            "height",
            "fontSize",
            "fontFamily",
            "color",
            "border",
            "boxShadow",
            "borderRadius",
        ] {
            assert!(style.get_by_name(name).is_some(), "missing {name}");
        }
        assert_eq!(text_of(&style, "border").as_deref(), Some("none"));
    }

    #[test]
    fn patch_from_pairs() {
        let patch: StylePatch = [("width", "1px"), ("box-shadow-x", "2px")]
            .into_iter()
            .collect();
        let keys: Vec<_> = patch.iter().map(|(k, _)| k.name().to_string()).collect();
        assert_eq!(keys, ["width", "box-shadow-x"]);
    }
}
