//! Class-name keyed styling for the tile
//!
//! Each element of the tile carries a list of class names (base name first,
//! caller override second). Styles are merged in that order so overrides win.

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 180, 150);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    pub text_color: Option<[u8; 3]>,
    pub background: Option<[u8; 3]>,
    pub rounding: Option<f32>,
    pub text_size: Option<f32>,
    pub monospace: Option<bool>,
    pub strong: Option<bool>,
}

impl ElementStyle {
    /// Fields set on `other` replace ours.
    pub fn merge(self, other: &ElementStyle) -> ElementStyle {
        ElementStyle {
            text_color: other.text_color.or(self.text_color),
            background: other.background.or(self.background),
            rounding: other.rounding.or(self.rounding),
            text_size: other.text_size.or(self.text_size),
            monospace: other.monospace.or(self.monospace),
            strong: other.strong.or(self.strong),
        }
    }

    pub fn rich_text(&self, text: impl Into<String>) -> egui::RichText {
        let mut rich = egui::RichText::new(text.into());
        if let Some([r, g, b]) = self.text_color {
            rich = rich.color(egui::Color32::from_rgb(r, g, b));
        }
        if let Some(size) = self.text_size {
            rich = rich.size(size);
        }
        if self.monospace == Some(true) {
            rich = rich.monospace();
        }
        if self.strong == Some(true) {
            rich = rich.strong();
        }
        rich
    }

    pub fn frame(&self) -> egui::Frame {
        let mut frame = egui::Frame::none();
        if let Some([r, g, b]) = self.background {
            frame = frame.fill(egui::Color32::from_rgb(r, g, b));
        }
        if let Some(rounding) = self.rounding {
            frame = frame.rounding(rounding);
        }
        frame
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    rules: BTreeMap<String, ElementStyle>,
}

impl StyleSheet {
    /// Base look of the tile elements.
    pub fn tile_defaults() -> Self {
        let mut sheet = Self::default();
        sheet.insert(
            "TileBankSigningDetails",
            ElementStyle {
                background: Some([32, 36, 40]),
                rounding: Some(6.0),
                ..ElementStyle::default()
            },
        );
        sheet.insert(
            "TileBankSigningDetails__title",
            ElementStyle {
                text_size: Some(14.0),
                strong: Some(true),
                ..ElementStyle::default()
            },
        );
        sheet.insert(
            "TileBankSigningDetails__copy-container",
            ElementStyle {
                text_color: Some([0, 180, 150]),
                rounding: Some(4.0),
                ..ElementStyle::default()
            },
        );
        sheet.insert(
            "TileBankSigningDetails__copy-icon",
            ElementStyle {
                text_color: Some([0, 180, 150]),
                text_size: Some(16.0),
                ..ElementStyle::default()
            },
        );
        sheet.insert(
            "TileBankSigningDetails__copy-text",
            ElementStyle {
                text_color: Some([0, 180, 150]),
                text_size: Some(12.0),
                ..ElementStyle::default()
            },
        );
        sheet.insert(
            "TileBankSigningDetails__value",
            ElementStyle {
                text_color: Some([200, 200, 200]),
                monospace: Some(true),
                ..ElementStyle::default()
            },
        );
        sheet
    }

    pub fn insert(&mut self, class_name: impl Into<String>, style: ElementStyle) {
        self.rules.insert(class_name.into(), style);
    }

    pub fn get(&self, class_name: &str) -> Option<&ElementStyle> {
        self.rules.get(class_name)
    }

    /// Adds every rule of `other`, replacing rules with the same class name.
    pub fn extend(&mut self, other: &StyleSheet) {
        for (name, style) in &other.rules {
            self.rules.insert(name.clone(), *style);
        }
    }

    pub fn resolve(&self, classes: &[String]) -> ElementStyle {
        classes
            .iter()
            .filter_map(|name| self.get(name))
            .fold(ElementStyle::default(), |acc, style| acc.merge(style))
    }

    /// Style of an element drawn inside `parent`: text settings of the parent
    /// apply unless the element sets its own.
    pub fn nested(&self, parent: &[String], classes: &[String]) -> ElementStyle {
        self.resolve(parent).merge(&self.resolve(classes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_class_wins_over_base() {
        let mut sheet = StyleSheet::tile_defaults();
        sheet.insert(
            "BankOverview__tile__title",
            ElementStyle {
                text_size: Some(20.0),
                ..ElementStyle::default()
            },
        );
        let style = sheet.resolve(&[
            "TileBankSigningDetails__title".to_owned(),
            "BankOverview__tile__title".to_owned(),
        ]);
        assert_eq!(style.text_size, Some(20.0));
        assert_eq!(style.strong, Some(true));
    }

    #[test]
    fn copy_icon_default_has_accent_color() {
        let sheet = StyleSheet::tile_defaults();
        let style = sheet.nested(
            &["TileBankSigningDetails__copy-container".to_owned()],
            &["TileBankSigningDetails__copy-icon".to_owned()],
        );
        assert_eq!(style.text_color, Some([0, 180, 150]));
        assert_eq!(style.text_size, Some(16.0));
    }

    #[test]
    fn container_override_color_reaches_copy_label() {
        let mut sheet = StyleSheet::tile_defaults();
        sheet.insert(
            "BankOverview__tile__copy-container",
            ElementStyle {
                text_color: Some([255, 0, 0]),
                ..ElementStyle::default()
            },
        );
        sheet.insert(
            "TileBankSigningDetails__copy-text",
            ElementStyle {
                text_size: Some(12.0),
                ..ElementStyle::default()
            },
        );
        let style = sheet.nested(
            &[
                "TileBankSigningDetails__copy-container".to_owned(),
                "BankOverview__tile__copy-container".to_owned(),
            ],
            &["TileBankSigningDetails__copy-text".to_owned()],
        );
        assert_eq!(style.text_color, Some([255, 0, 0]));
        assert_eq!(style.text_size, Some(12.0));
    }

    #[test]
    fn unknown_classes_resolve_to_empty_style() {
        let sheet = StyleSheet::tile_defaults();
        assert_eq!(sheet.resolve(&["Nope".to_owned()]), ElementStyle::default());
    }
}
