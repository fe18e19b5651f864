//! FIFO queue of climbable rocks
//!
//! Rocks enter at the back as they spawn and the front id is the only
//! one a grab attempt is judged against. The queue stores ids, not rock
//! data; the state's rock list remains the single owner.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Spawn-ordered ids of rocks still eligible to be climbed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockQueue {
    ids: VecDeque<u32>,
}

impl RockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly spawned rock at the back
    pub fn enqueue(&mut self, id: u32) {
        self.ids.push_back(id);
    }

    /// The rock a grab attempt is judged against
    pub fn peek_front(&self) -> Option<u32> {
        self.ids.front().copied()
    }

    /// Remove and return the front rock after a successful grab
    pub fn pop_front(&mut self) -> Option<u32> {
        self.ids.pop_front()
    }

    /// Remove a rock wherever it sits, e.g. when it leaves the screen
    pub fn remove(&mut self, id: u32) {
        self.ids.retain(|&queued| queued != id);
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in spawn order, front first
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Enqueue(u32),
        PopFront,
        Remove(u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..20).prop_map(Op::Enqueue),
            Just(Op::PopFront),
            (0u32..20).prop_map(Op::Remove),
        ]
    }

    proptest! {
        /// Property: the queue behaves exactly like a plain VecDeque
        /// model under any interleaving of operations.
        #[test]
        fn prop_matches_vecdeque_model(ops in prop::collection::vec(op_strategy(), 0..100)) {
            let mut queue = RockQueue::new();
            let mut model: VecDeque<u32> = VecDeque::new();
            for op in ops {
                match op {
                    Op::Enqueue(id) => {
                        queue.enqueue(id);
                        model.push_back(id);
                    }
                    Op::PopFront => {
                        prop_assert_eq!(queue.pop_front(), model.pop_front());
                    }
                    Op::Remove(id) => {
                        queue.remove(id);
                        model.retain(|&queued| queued != id);
                    }
                }
                prop_assert_eq!(queue.len(), model.len());
                prop_assert_eq!(queue.peek_front(), model.front().copied());
            }
            let drained: Vec<u32> = queue.iter().collect();
            let expected: Vec<u32> = model.iter().copied().collect();
            prop_assert_eq!(drained, expected);
        }
    }
}
