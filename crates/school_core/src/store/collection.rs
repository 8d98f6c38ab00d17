//! Insertion-ordered entity collection.
//!
//! # Invariants
//! - Iteration order equals insertion order; removal keeps the relative
//!   order of the remaining elements.
//! - No identifier checks happen here. Uniqueness is a repository concern.

use crate::model::entity::{Entity, EntityId};

/// Ordered, mutable list of one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one element at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds, like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether any element carries `id`.
    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns the positions of every element carrying `id`, in order.
    pub fn positions(&self, id: EntityId) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.id() == id)
            .map(|(index, _)| index)
            .collect()
    }
}

impl<T: Clone> Collection<T> {
    /// Returns owned copies of all elements in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::course::Course;
    use uuid::Uuid;

    fn course(id: u128, name: &str) -> Course {
        Course::with_id(Uuid::from_u128(id), name, "")
    }

    #[test]
    fn push_and_iter_keep_insertion_order() {
        let mut courses = Collection::new();
        courses.push(course(3, "c"));
        courses.push(course(1, "a"));
        courses.push(course(2, "b"));

        let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn remove_keeps_order_of_remaining_elements() {
        let mut courses = Collection::new();
        courses.push(course(1, "a"));
        courses.push(course(2, "b"));
        courses.push(course(3, "c"));

        let removed = courses.remove(1);
        assert_eq!(removed.name, "b");
        let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn positions_reports_every_match() {
        let mut courses = Collection::new();
        courses.push(course(7, "first"));
        courses.push(course(8, "other"));
        courses.push(course(7, "second"));

        assert_eq!(courses.positions(Uuid::from_u128(7)), vec![0, 2]);
        assert!(courses.positions(Uuid::from_u128(9)).is_empty());
        assert!(courses.contains(Uuid::from_u128(8)));
        assert!(!courses.contains(Uuid::from_u128(9)));
    }
}
