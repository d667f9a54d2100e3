//! Local styles published by the document.
//!
//! Styles are shared, named property sets. The plugin only lists them, so
//! each kind keeps just what the listing reports.

use crate::model::{Effect, FontRef, Paint};
use smallvec::SmallVec;

/// Identity shared by every style kind.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleInfo {
    pub id: String,
    pub name: String,
    /// Publish key, stable across files.
    pub key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub info: StyleInfo,
    pub paints: SmallVec<[Paint; 1]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub info: StyleInfo,
    pub font_size: f32,
    pub font_name: FontRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectStyle {
    pub info: StyleInfo,
    pub effects: SmallVec<[Effect; 1]>,
}

/// The document's local styles, grouped by kind in creation order.
#[derive(Debug, Clone, Default)]
pub struct LocalStyles {
    colors: Vec<PaintStyle>,
    texts: Vec<TextStyle>,
    effects: Vec<EffectStyle>,
    grids: Vec<StyleInfo>,
    next_serial: u32,
}

impl LocalStyles {
    pub fn colors(&self) -> &[PaintStyle] {
        &self.colors
    }

    pub fn texts(&self) -> &[TextStyle] {
        &self.texts
    }

    pub fn effects(&self) -> &[EffectStyle] {
        &self.effects
    }

    pub fn grids(&self) -> &[StyleInfo] {
        &self.grids
    }

    fn allocate(&mut self, name: &str) -> StyleInfo {
        self.next_serial += 1;
        StyleInfo {
            id: format!("S:{:040x},", self.next_serial),
            name: name.to_string(),
            key: format!("{:040x}", self.next_serial),
        }
    }

    /// Add a paint style. Returns its id.
    pub fn add_paint(&mut self, name: &str, paints: impl IntoIterator<Item = Paint>) -> String {
        let info = self.allocate(name);
        let id = info.id.clone();
        self.colors.push(PaintStyle {
            info,
            paints: paints.into_iter().collect(),
        });
        id
    }

    pub fn add_text(&mut self, name: &str, font_size: f32, font_name: FontRef) -> String {
        let info = self.allocate(name);
        let id = info.id.clone();
        self.texts.push(TextStyle {
            info,
            font_size,
            font_name,
        });
        id
    }

    pub fn add_effect(&mut self, name: &str, effects: impl IntoIterator<Item = Effect>) -> String {
        let info = self.allocate(name);
        let id = info.id.clone();
        self.effects.push(EffectStyle {
            info,
            effects: effects.into_iter().collect(),
        });
        id
    }

    pub fn add_grid(&mut self, name: &str) -> String {
        let info = self.allocate(name);
        let id = info.id.clone();
        self.grids.push(info);
        id
    }
}
