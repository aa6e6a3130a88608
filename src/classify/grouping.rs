//! Partition relationships into display sections

use crate::classify::{classify, is_known_type, RelationshipGroup};
use crate::registry::Relationship;
use itertools::Itertools;
use serde::Serialize;

/// Anything that carries a relationship-type label
pub trait HasRelationshipType {
    fn relationship_type(&self) -> &str;
}

impl HasRelationshipType for Relationship {
    fn relationship_type(&self) -> &str {
        &self.relationship_type
    }
}

impl<T: HasRelationshipType + ?Sized> HasRelationshipType for &T {
    fn relationship_type(&self) -> &str {
        (**self).relationship_type()
    }
}

/// One display section: a group and the items that fell into it
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipSection<T> {
    pub group: RelationshipGroup,
    pub label: &'static str,
    pub priority: u8,
    pub color: &'static str,
    pub items: Vec<T>,
}

impl<T> RelationshipSection<T> {
    fn empty(group: RelationshipGroup) -> Self {
        Self {
            group,
            label: group.label(),
            priority: group.priority(),
            color: group.color(),
            items: Vec::new(),
        }
    }
}

impl<T: Clone> RelationshipSection<&T> {
    /// Take owned copies of the section's items
    pub fn cloned(self) -> RelationshipSection<T> {
        RelationshipSection {
            group: self.group,
            label: self.label,
            priority: self.priority,
            color: self.color,
            items: self.items.into_iter().cloned().collect(),
        }
    }
}

/// Split items into all ten groups, in priority order.
///
/// Every item lands in exactly one section; order within a section follows
/// the input order.
pub fn group_relationships<T>(items: &[T]) -> Vec<RelationshipSection<&T>>
where
    T: HasRelationshipType,
{
    let mut sections: Vec<RelationshipSection<&T>> = RelationshipGroup::ALL
        .iter()
        .map(|&group| RelationshipSection::empty(group))
        .collect();

    for item in items {
        let group = classify(item.relationship_type()).group;
        // ALL is indexed by priority - 1
        sections[group.priority() as usize - 1].items.push(item);
    }

    sections
}

/// Drop sections with no items
pub fn non_empty_sections<T>(sections: Vec<RelationshipSection<T>>) -> Vec<RelationshipSection<T>> {
    sections.into_iter().filter(|s| !s.items.is_empty()).collect()
}

/// Distinct labels that the classifier does not recognize, first-seen order
pub fn unknown_types(relationships: &[Relationship]) -> Vec<String> {
    relationships
        .iter()
        .map(|r| r.relationship_type.as_str())
        .filter(|t| !is_known_type(t))
        .unique()
        .map(str::to_string)
        .collect()
}
