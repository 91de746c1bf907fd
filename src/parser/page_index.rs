//! Page-scoped, order-indexed access to fragments.

use std::collections::BTreeMap;

use crate::model::Fragment;

/// Fragments grouped per page, each page sorted by extraction order.
///
/// Entries are indices into the fragment slice the index was built from.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: BTreeMap<u32, Vec<usize>>,
    /// (page, position within page) for every fragment index
    positions: Vec<(u32, usize)>,
}

impl PageIndex {
    /// Build the index for one document.
    pub fn new(fragments: &[Fragment]) -> Self {
        let mut pages: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (i, fragment) in fragments.iter().enumerate() {
            pages.entry(fragment.page).or_default().push(i);
        }

        let mut positions = vec![(0, 0); fragments.len()];
        for (page, ids) in pages.iter_mut() {
            ids.sort_by_key(|&i| (fragments[i].order, i));
            for (pos, &i) in ids.iter().enumerate() {
                positions[i] = (*page, pos);
            }
        }

        Self { pages, positions }
    }

    /// Number of distinct pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterate pages in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = (u32, &[usize])> {
        self.pages.iter().map(|(page, ids)| (*page, ids.as_slice()))
    }

    /// Fragment indices on a page, in extraction order.
    pub fn page(&self, page: u32) -> &[usize] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of a fragment within its page.
    pub fn position(&self, index: usize) -> usize {
        self.positions[index].1
    }

    /// The fragment `offset` places before (negative) or after (positive)
    /// `index` on the same page.
    pub fn neighbor(&self, index: usize, offset: isize) -> Option<usize> {
        let (page, pos) = self.positions[index];
        let target = pos.checked_add_signed(offset)?;
        self.page(page).get(target).copied()
    }
}
