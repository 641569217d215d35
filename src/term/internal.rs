use smallvec::SmallVec;

use crate::term::{HpoChildren, HpoGroup, HpoParents, HpoTermId};
use crate::{DEFAULT_NUM_ALL_PARENTS, DEFAULT_NUM_PARENTS};

/// The `is_a` references as declared in the ontology source
pub(crate) type DeclaredParents = SmallVec<[HpoTermId; DEFAULT_NUM_PARENTS]>;

#[derive(Debug)]
pub(crate) struct HpoTermInternal {
    id: HpoTermId,
    name: String,
    declared_parents: DeclaredParents,
    parents: HpoParents,
    all_parents: HpoParents,
    children: HpoChildren,
}

impl HpoTermInternal {
    pub fn new(name: String, id: HpoTermId) -> HpoTermInternal {
        HpoTermInternal {
            id,
            name,
            declared_parents: DeclaredParents::new(),
            parents: HpoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            all_parents: HpoGroup::with_capacity(DEFAULT_NUM_ALL_PARENTS),
            children: HpoChildren::with_capacity(DEFAULT_NUM_PARENTS),
        }
    }

    pub fn id(&self) -> &HpoTermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_parents(&self) -> &[HpoTermId] {
        &self.declared_parents
    }

    pub fn declare_parent(&mut self, parent_id: HpoTermId) {
        if !self.declared_parents.contains(&parent_id) {
            self.declared_parents.push(parent_id);
        }
    }

    pub fn parents(&self) -> &HpoParents {
        &self.parents
    }

    pub fn children(&self) -> &HpoChildren {
        &self.children
    }

    pub fn all_parents(&self) -> &HpoParents {
        &self.all_parents
    }

    pub fn all_parents_mut(&mut self) -> &mut HpoParents {
        &mut self.all_parents
    }

    pub fn add_parent<I: Into<HpoTermId>>(&mut self, parent_id: I) {
        self.parents.insert(parent_id);
    }

    pub fn add_child<I: Into<HpoTermId>>(&mut self, child_id: I) {
        self.children.insert(child_id);
    }
}

impl PartialEq for HpoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HpoTermInternal {}
