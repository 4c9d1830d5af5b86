use crate::types::Item;

/// The closed enumeration of ordering strategies used to seed the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    Height,
    HeightWidth,
    Width,
    WidthHeight,
    WidthHeightAsc,
    Area,
    AreaHeight,
    AreaWidth,
    AllPermutations,
    Synthetic2,
    Synthetic4,
}

impl Strategy {
    /// The constituent strategies a synthetic strategy is built from, in
    /// the order they should be tried (first strategy wins ties).
    pub fn constituents(self) -> &'static [Strategy] {
        use Strategy::*;
        match self {
            Synthetic2 => &[HeightWidth, WidthHeight],
            Synthetic4 => &[Height, HeightWidth, Width, WidthHeight],
            _ => &[],
        }
    }
}

/// Orders `items` according to `strategy`. `AllPermutations` is not a single
/// order and has no meaningful result here: callers needing every
/// permutation should use [`permutations`] instead.
pub fn order(items: &[Item], strategy: Strategy) -> Vec<Item> {
    let mut seq = items.to_vec();
    match strategy {
        Strategy::Random => {}
        Strategy::Height => seq.sort_by_key(|i| std::cmp::Reverse(i.height)),
        Strategy::HeightWidth => seq.sort_by_key(|i| std::cmp::Reverse((i.height, i.width))),
        Strategy::Width => seq.sort_by_key(|i| std::cmp::Reverse(i.width)),
        Strategy::WidthHeight => seq.sort_by_key(|i| std::cmp::Reverse((i.width, i.height))),
        Strategy::WidthHeightAsc => seq.sort_by_key(|i| (i.width, i.height)),
        Strategy::Area => seq.sort_by_key(|i| std::cmp::Reverse(i.area())),
        Strategy::AreaHeight => seq.sort_by_key(|i| std::cmp::Reverse((i.area(), i.height as u64))),
        Strategy::AreaWidth => seq.sort_by_key(|i| std::cmp::Reverse((i.area(), i.width as u64))),
        Strategy::AllPermutations | Strategy::Synthetic2 | Strategy::Synthetic4 => {
            // These strategies drive the solver across multiple sequences
            // rather than producing one; callers dispatch on them before
            // reaching `order`.
        }
    }
    seq
}

/// Lazily emits every permutation of `items` using Heap's algorithm, so
/// callers never materialise all n! sequences at once (only the current
/// one, plus O(n) bookkeeping).
pub struct Permutations {
    items: Vec<Item>,
    state: Vec<usize>,
    i: usize,
    started: bool,
}

impl Permutations {
    pub fn new(items: &[Item]) -> Self {
        let n = items.len();
        Self {
            items: items.to_vec(),
            state: vec![0; n],
            i: 0,
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<Item>;

    fn next(&mut self) -> Option<Vec<Item>> {
        let n = self.items.len();
        if n == 0 {
            return if self.started {
                None
            } else {
                self.started = true;
                Some(Vec::new())
            };
        }

        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }

        while self.i < n {
            if self.state[self.i] < self.i {
                if self.i % 2 == 0 {
                    self.items.swap(0, self.i);
                } else {
                    self.items.swap(self.state[self.i], self.i);
                }
                self.state[self.i] += 1;
                self.i = 0;
                return Some(self.items.clone());
            } else {
                self.state[self.i] = 0;
                self.i += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_order_is_descending_and_stable() {
        let items = vec![
            Item::new(1, 5),
            Item::new(2, 5),
            Item::new(3, 9),
            Item::new(4, 1),
        ];
        let ordered = order(&items, Strategy::Height);
        assert_eq!(
            ordered,
            vec![Item::new(3, 9), Item::new(1, 5), Item::new(2, 5), Item::new(4, 1)]
        );
    }

    #[test]
    fn width_height_asc_is_ascending() {
        let items = vec![Item::new(3, 1), Item::new(1, 1), Item::new(2, 1)];
        let ordered = order(&items, Strategy::WidthHeightAsc);
        assert_eq!(
            ordered,
            vec![Item::new(1, 1), Item::new(2, 1), Item::new(3, 1)]
        );
    }

    #[test]
    fn permutations_cover_every_arrangement_exactly_once() {
        let items = vec![Item::new(1, 1), Item::new(2, 2), Item::new(3, 3)];
        let perms: Vec<Vec<Item>> = Permutations::new(&items).collect();
        assert_eq!(perms.len(), 6);
        let mut seen = std::collections::HashSet::new();
        for p in &perms {
            let key: Vec<(u32, u32)> = p.iter().map(|i| (i.width, i.height)).collect();
            assert!(seen.insert(key), "duplicate permutation emitted");
        }
    }

    #[test]
    fn permutations_of_empty_slice_yields_one_empty_sequence() {
        let perms: Vec<Vec<Item>> = Permutations::new(&[]).collect();
        assert_eq!(perms, vec![Vec::<Item>::new()]);
    }

    #[test]
    fn synthetic_2_lists_height_width_then_width_height() {
        assert_eq!(
            Strategy::Synthetic2.constituents(),
            &[Strategy::HeightWidth, Strategy::WidthHeight]
        );
    }
}
