/// Iterator over all `K`-element index combinations of `0..n`, in lexicographic order.
///
/// `Combinations::<5>::new(7)` yields the C(7,5) = 21 ways to pick a five-card
/// hand out of seven cards.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        Self { n, indices: core::array::from_fn(|i| i), remaining: binomial(n, K) }
    }

    fn advance(&mut self) {
        // Find the rightmost index that can still move right
        for i in (0..K).rev() {
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.indices;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

/// C(n, k); zero when k > n.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    // each partial product is itself a binomial, so the division is exact
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn test_generates_21_combinations() {
        let combos: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(Combinations::<5>::new(7).len(), 21);
    }

    #[test]
    fn test_all_combinations_valid() {
        for combo in Combinations::<5>::new(7) {
            assert!(combo.iter().all(|&i| i < 7));
            for i in 1..5 {
                assert!(combo[i] > combo[i - 1]);
            }
        }
    }

    #[test]
    fn test_first_and_last_combination() {
        let combos: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_no_duplicates() {
        let mut seen = HashSet::new();
        for combo in Combinations::<5>::new(7) {
            assert!(seen.insert(combo), "Duplicate combination found: {combo:?}");
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        for pair in combos.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should come before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_5choose3_specific() {
        let combos: Vec<[usize; 3]> = Combinations::<3>::new(5).collect();
        assert_eq!(
            combos,
            vec![
                [0, 1, 2],
                [0, 1, 3],
                [0, 1, 4],
                [0, 2, 3],
                [0, 2, 4],
                [0, 3, 4],
                [1, 2, 3],
                [1, 2, 4],
                [1, 3, 4],
                [2, 3, 4],
            ]
        );
    }

    #[test]
    fn test_edge_sizes() {
        assert_eq!(Combinations::<5>::new(5).collect::<Vec<_>>(), vec![[0, 1, 2, 3, 4]]);
        assert_eq!(Combinations::<5>::new(4).count(), 0);
        assert_eq!(Combinations::<0>::new(3).count(), 1);
    }

    #[test]
    fn test_iterator_exhausts() {
        let mut iter = Combinations::<5>::new(7);
        for _ in 0..21 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
