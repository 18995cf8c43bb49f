use crate::cache::{Cache, CacheStats};
use std::cmp::Ordering;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// One key/value pair of the tree. Key and value never change after creation; rotations only move child ownership around.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// SplayTree is a self-adjusting binary search tree used as a memo store.
///
/// Every `find` and `insert` splays the tree on the requested key, moving that key (or the last node on its search path) to the root.
/// Recently touched keys are therefore cheap to reach again, and the amortized cost of an access is O(log n).
///
/// Inserting a key that is already present keeps the stored value. Keys cannot be removed.
///
/// Example:
/// ```
/// use splaycache::SplayTree;
///
/// fn main() {
///     let mut tree = SplayTree::new();
///     tree.insert(5, "five");
///     tree.insert(3, "three");
///
///     assert_eq!(tree.find(&3), Some(&"three"));
///     assert_eq!(tree.root_key(), Some(&3));
///     assert_eq!(tree.find(&4), None);
/// }
/// ```
#[derive(Debug)]
pub struct SplayTree<K, V> {
    root: Link<K, V>,
    len: usize,
    hits: u64,
    misses: u64,
}

impl<K, V> SplayTree<K, V> {
    pub fn new() -> Self {
        SplayTree {
            root: None,
            len: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// In-order iterator over `(key, value)` pairs, keys strictly increasing.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Promote `node.left` above `node`. A node without a left child is returned as is.
    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        match node.left.take() {
            Some(mut left) => {
                node.left = left.right.take();
                left.right = Some(node);
                left
            }
            None => node,
        }
    }

    /// Promote `node.right` above `node`. A node without a right child is returned as is.
    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        match node.right.take() {
            Some(mut right) => {
                node.right = right.left.take();
                right.left = Some(node);
                right
            }
            None => node,
        }
    }
}

impl<K: Ord, V> SplayTree<K, V> {
    /// Look up `key`, splaying it (or the last node on its search path) to the root.
    pub fn find(&mut self, key: &K) -> Option<&V> {
        self.root = Self::splay(self.root.take(), key);
        match self.root.as_deref() {
            Some(root) if root.key == *key => {
                self.hits += 1;
                Some(&root.value)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert `key` as the new root. If `key` is already present it is splayed to the root and its value is left untouched.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(mut root) = Self::splay(self.root.take(), &key) else {
            self.root = Some(Node::new(key, value));
            self.len = 1;
            return;
        };

        let node = match key.cmp(&root.key) {
            Ordering::Equal => {
                self.root = Some(root);
                return;
            }
            Ordering::Less => {
                let mut node = Node::new(key, value);
                node.left = root.left.take();
                node.right = Some(root);
                node
            }
            Ordering::Greater => {
                let mut node = Node::new(key, value);
                node.right = root.right.take();
                node.left = Some(root);
                node
            }
        };
        self.root = Some(node);
        self.len += 1;
    }

    /// Bring `key` as close to the root of `root` as possible and return the new subtree root.
    fn splay(root: Link<K, V>, key: &K) -> Link<K, V> {
        let mut root = root?;
        match key.cmp(&root.key) {
            Ordering::Equal => Some(root),
            Ordering::Less => {
                let Some(mut left) = root.left.take() else {
                    return Some(root);
                };
                match key.cmp(&left.key) {
                    // zig-zig
                    Ordering::Less => {
                        left.left = Self::splay(left.left.take(), key);
                        root.left = Some(left);
                        root = Self::rotate_right(root);
                    }
                    // zig-zag
                    Ordering::Greater => {
                        left.right = Self::splay(left.right.take(), key);
                        if left.right.is_some() {
                            left = Self::rotate_left(left);
                        }
                        root.left = Some(left);
                    }
                    Ordering::Equal => root.left = Some(left),
                }
                Some(Self::rotate_right(root))
            }
            Ordering::Greater => {
                let Some(mut right) = root.right.take() else {
                    return Some(root);
                };
                match key.cmp(&right.key) {
                    // zag-zag
                    Ordering::Greater => {
                        right.right = Self::splay(right.right.take(), key);
                        root.right = Some(right);
                        root = Self::rotate_left(root);
                    }
                    // zag-zig
                    Ordering::Less => {
                        right.left = Self::splay(right.left.take(), key);
                        if right.left.is_some() {
                            right = Self::rotate_right(right);
                        }
                        root.right = Some(right);
                    }
                    Ordering::Equal => root.right = Some(right),
                }
                Some(Self::rotate_left(root))
            }
        }
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Clone> Cache<K, V> for SplayTree<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        self.find(key).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.len as u64,
            capacity: None,
        }
    }
}

/// In-order iterator returned by [`SplayTree::iter`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> IntoIterator for &'a SplayTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
