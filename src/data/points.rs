//! Data Point Store
//! Ordered, user-edited bar entries with session-unique identifiers.

use crate::data::color::HexColor;
use tracing::{debug, trace};

/// Identifier handed out by [`DataPointStore::add`]. Never reused.
pub type PointId = u64;

/// A single bar entry as typed into the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub id: PointId,
    pub label: String,
    /// Raw text, parsed lazily by the projector.
    pub value: String,
    pub color: HexColor,
}

/// Field-specific edit applied to one data point.
#[derive(Debug, Clone, PartialEq)]
pub enum PointEdit {
    SetLabel(PointId, String),
    SetValue(PointId, String),
    SetColor(PointId, HexColor),
}

impl PointEdit {
    pub fn id(&self) -> PointId {
        match self {
            PointEdit::SetLabel(id, _) | PointEdit::SetValue(id, _) | PointEdit::SetColor(id, _) => {
                *id
            }
        }
    }
}

/// Append-ordered collection of data points.
#[derive(Debug, Clone)]
pub struct DataPointStore {
    points: Vec<DataPoint>,
    next_id: PointId,
}

impl Default for DataPointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataPointStore {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> PointId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an empty point with the default color.
    pub fn add(&mut self) -> PointId {
        let id = self.allocate_id();
        self.points.push(DataPoint {
            id,
            label: String::new(),
            value: String::new(),
            color: HexColor::default(),
        });
        debug!(id, count = self.points.len(), "added data point");
        id
    }

    /// Apply an edit. Unknown ids are ignored and reported as `false`.
    pub fn apply(&mut self, edit: PointEdit) -> bool {
        let Some(point) = self.points.iter_mut().find(|p| p.id == edit.id()) else {
            trace!(id = edit.id(), "edit for unknown data point ignored");
            return false;
        };

        match edit {
            PointEdit::SetLabel(_, label) => point.label = label,
            PointEdit::SetValue(_, value) => point.value = value,
            PointEdit::SetColor(_, color) => point.color = color,
        }
        true
    }

    /// Remove the point with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: PointId) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        let removed = self.points.len() != before;
        if removed {
            debug!(id, count = self.points.len(), "removed data point");
        }
        removed
    }

    /// Append imported `(label, value)` rows, cycling the palette for colors.
    pub fn import<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut imported = 0;
        for (label, value) in rows {
            let id = self.allocate_id();
            self.points.push(DataPoint {
                id,
                label,
                value,
                color: HexColor::palette(imported),
            });
            imported += 1;
        }
        debug!(imported, count = self.points.len(), "imported data points");
        imported
    }

    /// Drop every point. The id counter keeps running.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn get(&self, id: PointId) -> Option<&DataPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_increasing_ids_with_defaults() {
        let mut store = DataPointStore::new();
        let a = store.add();
        let b = store.add();
        assert_eq!((a, b), (1, 2));

        let point = store.get(a).unwrap();
        assert!(point.label.is_empty());
        assert!(point.value.is_empty());
        assert_eq!(point.color.to_string(), "#3b82f6");
    }

    #[test]
    fn apply_updates_only_the_named_field() {
        let mut store = DataPointStore::new();
        let id = store.add();
        assert!(store.apply(PointEdit::SetLabel(id, "A".into())));
        assert!(store.apply(PointEdit::SetValue(id, "10".into())));

        let point = store.get(id).unwrap();
        assert_eq!(point.label, "A");
        assert_eq!(point.value, "10");
        assert_eq!(point.color, HexColor::default());
    }

    #[test]
    fn apply_ignores_unknown_ids() {
        let mut store = DataPointStore::new();
        store.add();
        assert!(!store.apply(PointEdit::SetLabel(99, "x".into())));
        assert_eq!(store.points()[0].label, "");
    }

    #[test]
    fn remove_preserves_order() {
        let mut store = DataPointStore::new();
        let ids: Vec<_> = (0..4).map(|_| store.add()).collect();
        assert!(store.remove(ids[1]));
        assert!(!store.remove(ids[1]));

        let remaining: Vec<_> = store.points().iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut store = DataPointStore::new();
        store.add();
        store.add();
        store.clear();
        assert_eq!(store.add(), 3);
    }
}
