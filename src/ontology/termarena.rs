use std::collections::HashMap;

use crate::term::internal::HpoTermInternal;
use crate::HpoTermId;

/// Owns all terms of the ontology
///
/// Terms are stored contiguously in insertion order and looked up
/// through an id-to-position index.
#[derive(Debug)]
pub(crate) struct Arena {
    terms: Vec<HpoTermInternal>,
    ids: HashMap<HpoTermId, usize>,
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Inserts the term and returns `true` if it replaced a previous term with the same id
    pub fn insert(&mut self, term: HpoTermInternal) -> bool {
        let id = *term.id();
        if let Some(idx) = self.ids.get(&id) {
            self.terms[*idx] = term;
            true
        } else {
            self.ids.insert(id, self.terms.len());
            self.terms.push(term);
            false
        }
    }

    pub fn get(&self, id: HpoTermId) -> Option<&HpoTermInternal> {
        self.ids.get(&id).map(|idx| &self.terms[*idx])
    }

    /// Returns the term with the given id
    ///
    /// # Panics
    ///
    /// Panics if the term is not present in the arena
    pub fn get_unchecked(&self, id: HpoTermId) -> &HpoTermInternal {
        self.get(id).expect("term must be present in the arena")
    }

    pub fn get_mut(&mut self, id: HpoTermId) -> Option<&mut HpoTermInternal> {
        match self.ids.get(&id) {
            Some(idx) => Some(&mut self.terms[*idx]),
            None => None,
        }
    }

    /// Returns a mutable reference to the term with the given id
    ///
    /// # Panics
    ///
    /// Panics if the term is not present in the arena
    pub fn get_unchecked_mut(&mut self, id: HpoTermId) -> &mut HpoTermInternal {
        self.get_mut(id).expect("term must be present in the arena")
    }

    pub fn contains(&self, id: HpoTermId) -> bool {
        self.ids.contains_key(&id)
    }

    pub fn values(&self) -> std::slice::Iter<'_, HpoTermInternal> {
        self.terms.iter()
    }

    pub fn keys(&self) -> Vec<HpoTermId> {
        self.terms.iter().map(|term| *term.id()).collect()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: Vec::with_capacity(20_000),
            ids: HashMap::with_capacity(20_000),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_and_replace() {
        let mut arena = Arena::default();
        assert!(!arena.insert(HpoTermInternal::new("Foo".into(), 1u32.into())));
        assert!(!arena.insert(HpoTermInternal::new("Bar".into(), 2u32.into())));
        assert!(arena.insert(HpoTermInternal::new("Baz".into(), 1u32.into())));

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(1u32.into()).unwrap().name(), "Baz");
        assert!(arena.get(3u32.into()).is_none());
        assert_eq!(arena.keys(), vec![HpoTermId::from(1u32), HpoTermId::from(2u32)]);
    }
}
