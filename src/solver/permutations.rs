//! Lazy permutation generation
//!
//! Yields every ordered arrangement of every non-empty subset of the input, longest first.
//! Within one length, arrangements come out in lexicographic order of the source indices.

/// Iterator over all k-permutations of a pool, for k = n down to 1
///
/// The total number of items is Σ n!/(n-k)! for k in 1..=n. Nothing is materialized up front;
/// each arrangement is built on demand.
///
/// # Examples
/// ```
/// use scrabbler::solver::Permutations;
///
/// let perms: Vec<String> = Permutations::new("abc".chars().collect())
///     .map(|p| p.into_iter().collect())
///     .collect();
///
/// assert_eq!(perms.len(), 15);
/// assert_eq!(&perms[..6], &["abc", "acb", "bac", "bca", "cab", "cba"]);
/// assert_eq!(perms.last().map(String::as_str), Some("c"));
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    /// Current arrangement length; 0 once exhausted
    length: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    fresh: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Permutations<T> {
    #[must_use]
    pub fn new(pool: Vec<T>) -> Self {
        let n = pool.len();
        let mut perms = Self {
            remaining: total_count(n),
            pool,
            length: n,
            indices: Vec::with_capacity(n),
            cycles: Vec::with_capacity(n),
            fresh: true,
        };
        perms.reset();
        perms
    }

    /// Length of the arrangements currently being produced
    #[must_use]
    pub const fn current_length(&self) -> usize {
        self.length
    }

    fn reset(&mut self) {
        let n = self.pool.len();
        self.indices.clear();
        self.indices.extend(0..n);
        self.cycles.clear();
        self.cycles.extend((0..self.length).map(|i| n - i));
        self.fresh = true;
    }

    fn emit(&mut self) -> Vec<T> {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        self.indices[..self.length]
            .iter()
            .map(|&i| self.pool[i].clone())
            .collect()
    }

    /// Step to the next arrangement of the current length
    ///
    /// Returns false once every arrangement of this length has been produced.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        for i in (0..self.length).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.length > 0 {
            if self.fresh {
                self.fresh = false;
                return Some(self.emit());
            }
            if self.advance() {
                return Some(self.emit());
            }
            self.length -= 1;
            self.reset();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// Number of arrangements produced for a pool of `n` items
///
/// Returns `None` if the count does not fit in a `usize`.
#[must_use]
pub fn total_count(n: usize) -> Option<usize> {
    let mut total: usize = 0;
    let mut falling: usize = 1;
    // n!/(n-k)! = n * (n-1) * ... * (n-k+1)
    for k in 0..n {
        falling = falling.checked_mul(n - k)?;
        total = total.checked_add(falling)?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn strings(pool: &str) -> Vec<String> {
        Permutations::new(pool.chars().collect())
            .map(|p| p.into_iter().collect())
            .collect()
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut perms = Permutations::<char>::new(Vec::new());
        assert_eq!(perms.size_hint(), (0, Some(0)));
        assert!(perms.next().is_none());
    }

    #[test]
    fn single_item() {
        assert_eq!(strings("a"), vec!["a"]);
    }

    #[test]
    fn full_order_for_three() {
        assert_eq!(
            strings("abc"),
            vec![
                "abc", "acb", "bac", "bca", "cab", "cba", // length 3
                "ab", "ac", "ba", "bc", "ca", "cb", // length 2
                "a", "b", "c", // length 1
            ]
        );
    }

    #[test]
    fn longest_first() {
        let lengths: Vec<usize> = strings("abcd").iter().map(String::len).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(lengths.first(), Some(&4));
        assert_eq!(lengths.last(), Some(&1));
    }

    #[test]
    fn counts_match_formula() {
        assert_eq!(total_count(0), Some(0));
        assert_eq!(total_count(1), Some(1));
        assert_eq!(total_count(3), Some(15));
        assert_eq!(total_count(7), Some(13_699));

        for n in 0..=6 {
            let pool: Vec<usize> = (0..n).collect();
            assert_eq!(Permutations::new(pool).count(), total_count(n).unwrap());
        }
    }

    #[test]
    fn arrangements_are_distinct_for_distinct_items() {
        let all = strings("abcde");
        let unique: FxHashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn duplicates_are_not_suppressed() {
        let all = strings("aa");
        assert_eq!(all, vec!["aa", "aa", "a", "a"]);
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let mut perms = Permutations::new(vec![1, 2, 3]);
        assert_eq!(perms.size_hint(), (15, Some(15)));
        perms.next();
        perms.next();
        assert_eq!(perms.size_hint(), (13, Some(13)));
    }

    #[test]
    fn current_length_follows_output() {
        let mut perms = Permutations::new(vec!['x', 'y']);
        let first = perms.next().unwrap();
        assert_eq!(first.len(), perms.current_length());
        perms.next();
        perms.next();
        assert_eq!(perms.current_length(), 1);
    }

    #[test]
    fn huge_pool_reports_unbounded_hint() {
        assert_eq!(total_count(40), None);
    }
}
