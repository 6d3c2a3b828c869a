// SPDX-License-Identifier: MPL-2.0
//! Per-position stacking containers.
//!
//! The registry holds at most one [`Container`] per [`Position`]. A
//! container is created the first time an alert targets its position and
//! then lives as long as the registry, even when it has no alerts left.

use crate::domain::alert::{AlertId, Position};

/// Class shared by every stacking container.
pub const CONTAINER_CLASS: &str = "alert-stack-container";

/// Prefix of the position-specific container class.
const POSITION_CLASS_PREFIX: &str = "alert-stack__";

/// Host element holding the alerts shown at one screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    position: Position,
    alerts: Vec<AlertId>,
}

impl Container {
    fn new(position: Position) -> Self {
        Self {
            position,
            alerts: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Stable class identifying this container's position, e.g.
    /// `alert-stack__top-center`.
    #[must_use]
    pub fn position_class(&self) -> String {
        format!("{POSITION_CLASS_PREFIX}{}", self.position.as_str())
    }

    /// Alerts in insertion (display) order.
    #[must_use]
    pub fn alerts(&self) -> &[AlertId] {
        &self.alerts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: AlertId) -> bool {
        self.alerts.contains(&id)
    }

    pub(crate) fn append(&mut self, id: AlertId) {
        self.alerts.push(id);
    }

    /// Removes a single alert, keeping the order of the others.
    pub(crate) fn detach(&mut self, id: AlertId) -> bool {
        match self.alerts.iter().position(|&alert| alert == id) {
            Some(index) => {
                self.alerts.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Lazily populated map from position to its container.
///
/// Containers are kept in creation order, which is also the order they are
/// layered on screen.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: Vec<Container>,
}

impl ContainerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container for `position`, creating it on first use.
    ///
    /// The boolean is true when this call created the container.
    pub fn get_or_create(&mut self, position: Position) -> (&mut Container, bool) {
        let (index, created) = match self.index_of(position) {
            Some(index) => (index, false),
            None => {
                self.containers.push(Container::new(position));
                (self.containers.len() - 1, true)
            }
        };
        (&mut self.containers[index], created)
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Container> {
        self.index_of(position).map(|index| &self.containers[index])
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Container> {
        let index = self.index_of(position)?;
        Some(&mut self.containers[index])
    }

    /// All live containers, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.containers
            .iter()
            .position(|container| container.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = ContainerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(Position::TopCenter).is_none());
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut registry = ContainerRegistry::new();

        let (first, created) = registry.get_or_create(Position::TopCenter);
        assert!(created);
        let first: *const Container = first;

        let (second, created_again) = registry.get_or_create(Position::TopCenter);
        assert!(!created_again);
        assert!(std::ptr::eq(first, second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn each_position_gets_its_own_container() {
        let mut registry = ContainerRegistry::new();
        for position in Position::ALL {
            registry.get_or_create(position);
        }
        for position in Position::ALL {
            registry.get_or_create(position);
        }

        assert_eq!(registry.len(), Position::ALL.len());
        let order: Vec<_> = registry.iter().map(Container::position).collect();
        assert_eq!(order, Position::ALL.to_vec());
    }

    #[test]
    fn position_class_is_derived_from_key() {
        let mut registry = ContainerRegistry::new();
        let (container, _) = registry.get_or_create(Position::BottomRight);
        assert_eq!(container.position_class(), "alert-stack__bottom-right");
    }

    #[test]
    fn alerts_keep_insertion_order_and_detach_singly() {
        let mut registry = ContainerRegistry::new();
        let ids: Vec<_> = (0..3).map(|_| AlertId::next()).collect();
        {
            let (container, _) = registry.get_or_create(Position::BottomLeft);
            for &id in &ids {
                container.append(id);
            }
        }

        let container = registry.get_mut(Position::BottomLeft).unwrap();
        assert!(container.detach(ids[1]));
        assert!(!container.detach(ids[1]));
        assert_eq!(container.alerts(), &[ids[0], ids[2]]);
    }

    #[test]
    fn empty_container_survives() {
        let mut registry = ContainerRegistry::new();
        let id = AlertId::next();
        registry.get_or_create(Position::TopLeft).0.append(id);
        registry.get_mut(Position::TopLeft).unwrap().detach(id);

        let container = registry.get(Position::TopLeft).expect("container kept");
        assert!(container.is_empty());
        assert_eq!(registry.len(), 1);
    }
}
