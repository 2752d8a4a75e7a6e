//! Explicit recursion stack for the carver and the solver.
//!
//! Both algorithms are written iteratively; the stack records the cells of
//! the traversal in visitation order. One instance lives per invocation.

/// LIFO sequence of flat grid indices.
#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<usize>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an index on top of the stack.
    pub fn push(&mut self, idx: usize) {
        self.items.push(idx);
    }

    /// Remove and return the most recently pushed index, or `None` when
    /// the stack is empty.
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the stack, yielding its indices bottom-to-top.
    pub fn into_indices(self) -> Vec<usize> {
        self.items
    }
}
