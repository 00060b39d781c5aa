use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Color, DecodingError};

/// Key into a [`ColorPalette`].
pub type ColorIdentifier = u32;

/// Always present in every palette.
pub const DEFAULT_COLOR_ID: ColorIdentifier = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifiableColor {
    pub id: ColorIdentifier,
    pub color: Color,
}

impl IdentifiableColor {
    pub const fn new(id: ColorIdentifier, color: Color) -> Self {
        Self { id, color }
    }
}

/// Indirection table from small integer ids to concrete colors.
///
/// Pixels store ids, so recoloring an entry recolors every pixel that uses it.
/// Ids are unique and id 0 can't be removed, which keeps `selected_index` on a live entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: Vec<IdentifiableColor>,
    selected_index: usize,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl ColorPalette {
    /// A palette holding only the default id mapped to `default_color`.
    pub fn new(default_color: Color) -> Self {
        Self {
            colors: vec![IdentifiableColor::new(DEFAULT_COLOR_ID, default_color)],
            selected_index: 0,
        }
    }

    /// # Errors
    ///
    /// Fails on duplicate ids or when the default id 0 is missing.
    pub fn from_colors(colors: Vec<IdentifiableColor>) -> Result<Self, DecodingError> {
        let mut seen = HashSet::new();
        for entry in &colors {
            if !seen.insert(entry.id) {
                return Err(DecodingError::DuplicateColorId { id: entry.id });
            }
        }
        if !seen.contains(&DEFAULT_COLOR_ID) {
            return Err(DecodingError::MissingDefaultColor);
        }
        Ok(Self { colors, selected_index: 0 })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentifiableColor> {
        self.colors.iter()
    }

    pub fn colors(&self) -> &[IdentifiableColor] {
        &self.colors
    }

    pub fn contains(&self, id: ColorIdentifier) -> bool {
        self.index_of(id).is_some()
    }

    fn index_of(&self, id: ColorIdentifier) -> Option<usize> {
        self.colors.iter().position(|c| c.id == id)
    }

    /// Color for `id`; unknown ids resolve to [`Color::CLEAR`].
    pub fn resolve(&self, id: ColorIdentifier) -> Color {
        match self.index_of(id) {
            Some(index) => self.colors[index].color,
            None => Color::CLEAR,
        }
    }

    /// First id mapped to `color`.
    pub fn find_id(&self, color: Color) -> Option<ColorIdentifier> {
        self.colors.iter().find(|c| c.color == color).map(|c| c.id)
    }

    /// Adds `color` under the smallest unused positive id and returns that id.
    pub fn add(&mut self, color: Color, update_selection: bool) -> ColorIdentifier {
        let used: HashSet<ColorIdentifier> = self.colors.iter().map(|c| c.id).collect();
        let id = (1..).find(|id| !used.contains(id)).unwrap_or_default();
        self.colors.push(IdentifiableColor::new(id, color));
        if update_selection {
            self.selected_index = self.colors.len() - 1;
        }
        id
    }

    /// Changes the color of `id`, inserting the entry when it doesn't exist yet.
    pub fn set(&mut self, id: ColorIdentifier, color: Color) {
        match self.index_of(id) {
            Some(index) => self.colors[index].color = color,
            None => self.colors.push(IdentifiableColor::new(id, color)),
        }
    }

    /// Removes `id` and returns its entry.
    ///
    /// When the selected entry is removed the selection moves to the previous entry, or to the
    /// next one when it was first. The default id is never removed.
    pub fn remove(&mut self, id: ColorIdentifier) -> Option<IdentifiableColor> {
        if id == DEFAULT_COLOR_ID {
            log::warn!("refusing to remove the default palette entry");
            return None;
        }
        let index = self.index_of(id)?;
        let removed = self.colors.remove(index);
        if index < self.selected_index || (index == self.selected_index && index > 0) {
            self.selected_index -= 1;
        }
        self.selected_index = self.selected_index.min(self.colors.len().saturating_sub(1));
        Some(removed)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Id of the selected entry.
    pub fn selected(&self) -> ColorIdentifier {
        self.colors.get(self.selected_index).map_or(DEFAULT_COLOR_ID, |c| c.id)
    }

    /// Selects `id`, returns false if the palette doesn't contain it.
    pub fn select(&mut self, id: ColorIdentifier) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => false,
        }
    }
}
