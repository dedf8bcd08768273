// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Entry, UserValue};

type Link = Option<Box<Node>>;

/// Chain node, owning its entry and the rest of the chain
pub struct Node {
    pub entry: Entry,
    next: Link,
}

impl Node {
    pub fn new(entry: Entry) -> Box<Self> {
        Box::new(Self { entry, next: None })
    }
}

/// Singly-linked list of the entries that share a bucket
///
/// Keys are unique within a chain, and entries are kept in insertion order.
#[derive(Default)]
pub struct Chain {
    head: Link,
}

impl Chain {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut cursor = self.head.as_deref_mut();

        while let Some(node) = cursor {
            if node.entry.matches(key) {
                return Some(&mut node.entry);
            }
            cursor = node.next.as_deref_mut();
        }

        None
    }

    /// Appends a detached node at the tail.
    pub fn push_back(&mut self, node: Box<Node>) {
        debug_assert!(node.next.is_none(), "node should be detached");

        let mut cursor = &mut self.head;

        while let Some(curr) = cursor {
            cursor = &mut curr.next;
        }

        *cursor = Some(node);
    }

    /// Detaches the head node.
    pub fn pop_front(&mut self) -> Option<Box<Node>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }

    /// Replaces the value of the entry with the same key, or appends
    /// the entry at the tail.
    ///
    /// Returns the previous value if the key already existed.
    pub fn insert(&mut self, entry: Entry) -> Option<UserValue> {
        if let Some(existing) = self.find_mut(&entry.key) {
            return Some(std::mem::replace(&mut existing.value, entry.value));
        }

        self.push_back(Node::new(entry));
        None
    }

    /// Splices the entry with the given key out of the chain.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let mut cursor = &mut self.head;

        while cursor
            .as_ref()
            .is_some_and(|node| !node.entry.matches(key))
        {
            cursor = &mut cursor.as_mut()?.next;
        }

        // NOTE: Either the matching node, or the end of the chain
        let mut node = cursor.take()?;
        *cursor = node.next.take();

        Some(node.entry)
    }

    pub fn clear(&mut self) {
        let mut cursor = self.head.take();

        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

// NOTE: The default drop glue would recurse once per node
impl Drop for Chain {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterates over the entries of a chain, head to tail
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.entry)
    }
}
