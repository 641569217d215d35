use std::ops::BitOr;

use crate::HpoTermId;

/// A set of [`HpoTermId`] representing a group of HPO terms
///
/// Each term can occur only once in the group. The ids are kept sorted,
/// so membership checks are a binary search.
///
/// This group is used e.g. for having a set of parent or child HPO Terms
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HpoGroup {
    ids: Vec<HpoTermId>,
}

impl HpoGroup {
    /// Constructs a new, empty [`HpoGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty [`HpoGroup`] with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no [`HpoTermId`]s
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of [`HpoTermId`]s in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`HpoTermId`] to the group
    ///
    /// Returns whether the `HpoTermId` was newly inserted. That is:
    ///
    /// - If the group did not previously contain this `HpoTermId`, true is returned.
    /// - If the group already contained this `HpoTermId`, false is returned.
    ///
    pub fn insert<I: Into<HpoTermId>>(&mut self, id: I) -> bool {
        let id = id.into();
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Returns `true` if the group contains the [`HpoTermId`]
    pub fn contains(&self, id: &HpoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns an Iterator of the [`HpoTermId`]s inside the group
    pub fn iter(&self) -> HpoTermIds {
        HpoTermIds::new(self.ids.iter())
    }
}

impl FromIterator<HpoTermId> for HpoGroup {
    fn from_iter<T: IntoIterator<Item = HpoTermId>>(iter: T) -> Self {
        let mut group = HpoGroup::new();
        for id in iter {
            group.insert(id);
        }
        group
    }
}

impl<'a> IntoIterator for &'a HpoGroup {
    type Item = HpoTermId;

    type IntoIter = HpoTermIds<'a>;

    fn into_iter(self) -> HpoTermIds<'a> {
        HpoTermIds::new(self.ids.iter())
    }
}

/// An iterator over [`HpoTermId`]s
pub struct HpoTermIds<'a> {
    inner: std::slice::Iter<'a, HpoTermId>,
}

impl<'a> HpoTermIds<'a> {
    fn new(inner: std::slice::Iter<'a, HpoTermId>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for HpoTermIds<'a> {
    type Item = HpoTermId;
    fn next(&mut self) -> Option<HpoTermId> {
        self.inner.next().copied()
    }
}

impl BitOr for &HpoGroup {
    type Output = HpoGroup;

    fn bitor(self, rhs: &HpoGroup) -> HpoGroup {
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut group = large.clone();
        group.ids.reserve(small.len());
        for id in &small.ids {
            group.insert(*id);
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hpogroup_iter() {
        let mut group = HpoGroup::new();
        group.insert(1u32);
        group.insert(2u32);
        group.insert(3u32);

        let mut ids = Vec::new();
        for id in &group {
            ids.push(id);
        }
        assert_eq!(ids.len(), 3);

        for id in &group {
            ids.push(id);
        }
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_insert_keeps_order_and_uniqueness() {
        let mut group = HpoGroup::new();
        assert!(group.insert(30u32));
        assert!(group.insert(10u32));
        assert!(group.insert(20u32));
        assert!(!group.insert(10u32));

        let expected: Vec<HpoTermId> = vec![10u32.into(), 20u32.into(), 30u32.into()];
        assert_eq!(group.ids, expected);
        assert!(group.contains(&20u32.into()));
        assert!(!group.contains(&21u32.into()));
    }

    #[test]
    fn test_bitor_set1() {
        let mut group1 = HpoGroup::new();
        group1.insert(1u32);
        group1.insert(2u32);
        group1.insert(3u32);

        let mut group2 = HpoGroup::new();
        group2.insert(2u32);
        group2.insert(4u32);

        let result = group1.bitor(&group2);
        let expected: Vec<HpoTermId> = vec![1u32.into(), 2u32.into(), 3u32.into(), 4u32.into()];
        assert_eq!(result.ids, expected);
    }

    #[test]
    fn test_bitor_set2() {
        let group1: HpoGroup = [1u32, 2, 3].into_iter().map(HpoTermId::from).collect();
        let group2: HpoGroup = [5u32, 1, 4, 2].into_iter().map(HpoTermId::from).collect();

        let result = group1.bitor(&group2);
        let expected: Vec<HpoTermId> = vec![
            1u32.into(),
            2u32.into(),
            3u32.into(),
            4u32.into(),
            5u32.into(),
        ];
        assert_eq!(result.ids, expected);
    }
}
