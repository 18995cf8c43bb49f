//! Two memoized recursive Fibonacci implementations that differ only in where the memo lives.
//!
//! [`fibonacci_lru`] memoizes every argument in an [`LRUCache`] that the caller keeps for a whole
//! benchmark run, so later calls reuse everything earlier calls computed. [`fibonacci_splay`]
//! memoizes the two sub-results of each step in a [`SplayTree`] that the caller creates per
//! top-level `n`, so reuse is limited to a single call tree.
//!
//! Both recurse once per level, so stack depth grows linearly with `n` on a cold memo.
//! Very large `n` exhausts the thread's stack.

use crate::cache::lru::LRUCache;
use crate::cache::splay::SplayTree;
use crate::cache::Cache;
use num_bigint::BigUint;

/// `fib(n)` memoized in `memo`, which is expected to be unbounded and to outlive this call.
pub fn fibonacci_lru(n: u64, memo: &mut LRUCache<u64, BigUint>) -> BigUint {
    if let Some(value) = memo.get(&n) {
        return value;
    }
    let value = if n < 2 {
        BigUint::from(n)
    } else {
        fibonacci_lru(n - 1, memo) + fibonacci_lru(n - 2, memo)
    };
    memo.set(n, value.clone());
    value
}

/// `fib(n)` memoized in `tree`. Only the results for `n - 1` and `n - 2` are looked up and stored at each level.
pub fn fibonacci_splay(n: u64, tree: &mut SplayTree<u64, BigUint>) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }

    let left = match tree.find(&(n - 1)) {
        Some(value) => value.clone(),
        None => {
            let value = fibonacci_splay(n - 1, tree);
            tree.insert(n - 1, value.clone());
            value
        }
    };

    let right = match tree.find(&(n - 2)) {
        Some(value) => value.clone(),
        None => {
            let value = fibonacci_splay(n - 2, tree);
            tree.insert(n - 2, value.clone());
            value
        }
    };

    left + right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iterative_fib(n: u64) -> BigUint {
        let (mut a, mut b) = (BigUint::from(0u32), BigUint::from(1u32));
        for _ in 0..n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        a
    }

    #[test]
    fn test_known_values() {
        let mut memo = LRUCache::unbounded();
        for (n, want) in [(0u64, 0u64), (1, 1), (2, 1), (10, 55), (20, 6765)] {
            assert_eq!(fibonacci_lru(n, &mut memo), BigUint::from(want));
            assert_eq!(fibonacci_splay(n, &mut SplayTree::new()), BigUint::from(want));
        }
    }

    #[test]
    fn test_variants_agree() {
        let mut memo = LRUCache::unbounded();
        for n in 0..=30 {
            let lru = fibonacci_lru(n, &mut memo);
            let splay = fibonacci_splay(n, &mut SplayTree::new());
            assert_eq!(lru, splay);
            assert_eq!(lru, iterative_fib(n));
        }
    }

    #[test]
    fn test_large_n_does_not_overflow() {
        let mut memo = LRUCache::unbounded();
        let want = iterative_fib(300);
        assert_eq!(fibonacci_lru(300, &mut memo), want);
        assert_eq!(fibonacci_splay(300, &mut SplayTree::new()), want);
    }

    #[test]
    fn test_splay_tree_holds_sub_results() {
        let mut tree = SplayTree::new();
        assert_eq!(fibonacci_splay(10, &mut tree), BigUint::from(55u32));
        let stored: Vec<(u64, BigUint)> = tree.iter().map(|(k, v)| (*k, v.clone())).collect();
        let want: Vec<(u64, BigUint)> = (0..=9).map(|n| (n, iterative_fib(n))).collect();
        assert_eq!(stored, want);
        for n in 0..=9 {
            assert_eq!(tree.find(&n), Some(&iterative_fib(n)));
        }
    }

    #[test]
    fn test_lru_memo_persists_across_calls() {
        let mut memo = LRUCache::unbounded();
        fibonacci_lru(20, &mut memo);
        assert_eq!(memo.len(), 21);
        let misses = memo.stats().misses;

        fibonacci_lru(20, &mut memo);
        assert_eq!(memo.stats().misses, misses);

        fibonacci_lru(25, &mut memo);
        assert_eq!(memo.len(), 26);
    }
}
