//! Restricted mutation handle.
//!
//! [`Interior`] borrows the first node of a [`List`](crate::List), not the
//! head slot. It can rewrite values and relink any node behind the first one,
//! but it has no way to make a different node the head. Removing index 0 is
//! therefore a no-op here; use [`List::delete_at_beginning`](crate::List::delete_at_beginning)
//! for that.

use tracing::trace;

use crate::list::Node;

pub struct Interior<'a> {
    first: Option<&'a mut Node>,
}

impl<'a> Interior<'a> {
    pub(crate) fn new(first: Option<&'a mut Node>) -> Self {
        Interior { first }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cur = self.first.as_deref();
        while let Some(node) = cur {
            count += 1;
            cur = node.next.as_deref();
        }
        count
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.first
            .as_deref_mut()?
            .nth_mut(index)
            .map(|node| &mut node.data)
    }

    /// Unlinks the node at `index` and returns its value.
    ///
    /// Negative indices, indices past the tail and index 0 leave the list
    /// untouched.
    pub fn delete_at_index(&mut self, index: i32) -> Option<i32> {
        let Ok(index) = usize::try_from(index) else {
            trace!(index, "negative index, nothing deleted");
            return None;
        };
        if index == 0 {
            trace!("index 0 needs the head slot, nothing deleted");
            return None;
        }

        let prev = self.first.as_deref_mut()?.nth_mut(index - 1)?;
        let removed = prev.next.take()?;
        let Node { data, next } = *removed;
        prev.next = next;
        trace!(index, data, "released node");
        Some(data)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    fn values(list: &List) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn delete_middle_and_tail() {
        let mut list: List = [2, 3, 4].into_iter().collect();

        assert_eq!(list.interior().delete_at_index(1), Some(3));
        assert_eq!(values(&list), vec![2, 4]);

        assert_eq!(list.interior().delete_at_index(1), Some(4));
        assert_eq!(values(&list), vec![2]);
    }

    #[test]
    fn index_zero_is_noop() {
        let mut list: List = [2, 4].into_iter().collect();
        assert_eq!(list.interior().delete_at_index(0), None);
        assert_eq!(values(&list), vec![2, 4]);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut list: List = [1, 2, 3].into_iter().collect();
        let mut interior = list.interior();
        assert_eq!(interior.delete_at_index(-1), None);
        assert_eq!(interior.delete_at_index(3), None);
        assert_eq!(interior.delete_at_index(i32::MAX), None);
        assert_eq!(interior.len(), 3);
        assert_eq!(values(&list), vec![1, 2, 3]);
    }

    #[test]
    fn empty_list() {
        let mut list = List::new();
        let mut interior = list.interior();
        assert!(interior.is_empty());
        for index in [-3, 0, 1, 7] {
            assert_eq!(interior.delete_at_index(index), None);
        }
        assert!(list.is_empty());
    }

    #[test]
    fn get_mut_rewrites_values() {
        let mut list: List = [1, 2, 3].into_iter().collect();
        let mut interior = list.interior();
        if let Some(value) = interior.get_mut(0) {
            *value = 10;
        }
        if let Some(value) = interior.get_mut(2) {
            *value = 30;
        }
        assert_eq!(interior.get_mut(3), None);
        assert_eq!(values(&list), vec![10, 2, 30]);
    }
}
