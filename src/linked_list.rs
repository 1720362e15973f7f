use std::fmt;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly linked list that owns its nodes through `Box` links.
///
/// Positional operations signal a missing position with `None` instead of
/// panicking. There is no tail link, so appending walks the chain.
pub struct ChainedList<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> ChainedList<T> {
    pub fn new() -> Self {
        ChainedList {
            head: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn prepend(&mut self, value: T) {
        let new_node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(new_node);
        self.size += 1;
    }

    pub fn append(&mut self, value: T) {
        self.link_last(Box::new(Node { value, next: None }), 1);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.size -= 1;
            node.value
        })
    }

    /// Removes the last value.
    pub fn pop(&mut self) -> Option<T> {
        match self.size {
            0 => None,
            size => self.remove_at(size - 1),
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn last(&self) -> Option<&T> {
        match self.size {
            0 => None,
            size => self.at(size - 1),
        }
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.node(index).map(|node| &node.value)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size {
            return None;
        }
        self.node_mut(index).map(|node| &mut node.value)
    }

    /// Index of the first value matching `predicate`.
    pub fn find_by<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// Index 0 prepends and any index at or past the end appends, so the
    /// insertion always succeeds.
    pub fn insert_at(&mut self, index: usize, value: T) {
        if index == 0 {
            self.prepend(value);
            return;
        }

        if index >= self.size {
            self.append(value);
            return;
        }

        if let Some(prev) = self.node_mut(index - 1) {
            let new_node = Box::new(Node {
                value,
                next: prev.next.take(),
            });
            prev.next = Some(new_node);
            self.size += 1;
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.size {
            return None;
        }

        if index == 0 {
            return self.pop_front();
        }

        let prev = self.node_mut(index - 1)?;
        let mut removed = prev.next.take()?;
        prev.next = removed.next.take();
        self.size -= 1;
        Some(removed.value)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head.as_deref_mut(),
        }
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    // `chain` must hold exactly `count` nodes.
    fn link_last(&mut self, chain: Box<Node<T>>, count: usize) {
        if self.size == 0 {
            self.head = Some(chain);
        } else if let Some(last) = self.node_mut(self.size - 1) {
            last.next = Some(chain);
        }
        self.size += count;
    }
}

impl<T: PartialEq> ChainedList<T> {
    /// Index of the first value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.find_by(|candidate| candidate == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> Default for ChainedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ChainedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ChainedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ChainedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = ChainedList::new();
        for value in values.into_iter().rev() {
            list.prepend(value);
        }
        list
    }
}

impl<T> Extend<T> for ChainedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail: ChainedList<T> = iter.into_iter().collect();
        let count = tail.size;
        if let Some(chain) = tail.head.take() {
            tail.size = 0;
            self.link_last(chain, count);
        }
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

pub struct IntoIter<T> {
    list: ChainedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> IntoIterator for ChainedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ChainedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ChainedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
