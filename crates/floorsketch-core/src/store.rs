//! Element store: the ordered collection of committed elements.

use crate::elements::{Element, ElementId};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors from the host-facing store contract.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate element id {0} in replacement collection")]
    DuplicateId(ElementId),
}

/// Ordered collection of committed elements plus the current selection.
///
/// Insertion order is z-order (later elements draw on top). The collection
/// is only ever mutated wholesale through [`ElementStore::replace`]; partial
/// in-place edits are not part of the contract. The selection id is a
/// relation, not ownership: it may outlive the element it names, and every
/// consumer treats a dangling id as "no selection".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementStore {
    elements: Vec<Element>,
    selected: Option<ElementId>,
}

impl ElementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed elements in z-order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Replace the whole collection.
    ///
    /// Fails without modifying anything if the new collection contains a
    /// duplicate id. The selection is left untouched even if its id is
    /// absent from the new collection; consumers already treat dangling
    /// ids as unselected.
    pub fn replace(&mut self, elements: Vec<Element>) -> Result<(), StoreError> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(element.id()) {
                return Err(StoreError::DuplicateId(element.id()));
            }
        }
        self.elements = elements;
        Ok(())
    }

    /// The current selection id, which may be dangling.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// Set or clear the selection.
    pub fn set_selected(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    /// The selected element, if the selection id still refers to one.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Whether this element is the current selection.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Find the element under a screen point, top-most first.
    ///
    /// The pan offset is subtracted once at this boundary, so hit-testing is
    /// invariant under translating the query point and the offset together.
    pub fn element_at(&self, screen_point: Point, pan_offset: Vec2) -> Option<ElementId> {
        let model_point = screen_point - pan_offset;
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(model_point))
            .map(|e| e.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Door, Room};
    use uuid::Uuid;

    fn store_with(elements: Vec<Element>) -> ElementStore {
        let mut store = ElementStore::new();
        store.replace(elements).unwrap();
        store
    }

    #[test]
    fn test_replace_rejects_duplicate_ids() {
        let door = Door::at(Point::new(0.0, 0.0));
        let dup = door.clone();

        let mut store = ElementStore::new();
        let result = store.replace(vec![Element::Door(door), Element::Door(dup)]);
        assert!(matches!(result, Err(StoreError::DuplicateId(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_element_at_topmost_wins() {
        let bottom = Room::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let top = Room::from_corners(Point::new(50.0, 50.0), Point::new(150.0, 150.0));
        let top_id = top.id;
        let bottom_id = bottom.id;
        let store = store_with(vec![Element::Room(bottom), Element::Room(top)]);

        // Overlap region: the later-inserted room is on top.
        assert_eq!(
            store.element_at(Point::new(75.0, 75.0), Vec2::ZERO),
            Some(top_id)
        );
        // Outside the top room only the bottom one hits.
        assert_eq!(
            store.element_at(Point::new(25.0, 25.0), Vec2::ZERO),
            Some(bottom_id)
        );
        // Empty space: no selection, not an error.
        assert_eq!(store.element_at(Point::new(500.0, 500.0), Vec2::ZERO), None);
    }

    #[test]
    fn test_element_at_pan_invariance() {
        let door = Door::at(Point::new(40.0, 40.0));
        let id = door.id;
        let store = store_with(vec![Element::Door(door)]);

        let point = Point::new(45.0, 38.0);
        let shift = Vec2::new(-130.0, 917.5);
        assert_eq!(store.element_at(point, Vec2::ZERO), Some(id));
        assert_eq!(store.element_at(point + shift, shift), Some(id));
    }

    #[test]
    fn test_dangling_selection_is_unselected() {
        let door = Door::at(Point::new(0.0, 0.0));
        let id = door.id;
        let mut store = store_with(vec![Element::Door(door)]);

        store.set_selected(Some(id));
        assert!(store.selected_element().is_some());

        store.replace(Vec::new()).unwrap();
        assert_eq!(store.selected_id(), Some(id));
        assert!(store.selected_element().is_none());
        assert!(!store.is_selected(Uuid::nil()));
    }
}
