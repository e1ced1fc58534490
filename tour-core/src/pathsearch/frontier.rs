//! Frontier for the Dijkstra algorithm.

/// Frontier for the Dijkstra algorithm.
/// Binary min-heap on cost, with a node-to-slot index so a queued node's
/// cost can be decreased in place.
pub(super) struct Frontier<W> {
    /// Heap-ordered `(node, cost)` pairs, the cheapest one at slot 0.
    heap: Vec<(usize, W)>,

    /// Links node index to its slot in the `heap`, `None` if not queued.
    slots: Vec<Option<usize>>,
}

impl<W> Frontier<W> where W: Copy + Ord {
    /// Create new empty instance, sized for nodes `0..node_count`.
    pub fn with_capacity(node_count: usize) -> Frontier<W> {
        Frontier {
            heap: Vec::with_capacity(node_count),
            slots: vec![None; node_count],
        }
    }

    pub fn contains(&self, node: usize) -> bool {
        self.slots.get(node).map_or(false, Option::is_some)
    }

    /// Insert a node with associated cost into the priority queue.
    /// The node must not be queued already.
    pub fn push(&mut self, node: usize, cost: W) {
        debug_assert!(!self.contains(node), "node {} is already queued", node);
        if node >= self.slots.len() {
            self.slots.resize(node + 1, None);
        }
        let slot = self.heap.len();
        self.heap.push((node, cost));
        self.slots[node] = Some(slot);
        self.sift_up(slot);
    }

    /// Extract node with the least cost from the queue.
    pub fn pop(&mut self) -> Option<(usize, W)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (node, cost) = self.heap.pop()?;
        self.slots[node] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((node, cost))
    }

    /// Lower the cost of a queued node and move it up to its new place.
    /// Returns `true` if the node is queued and `new_cost` is less than its current cost,
    /// otherwise the queue is left unchanged and `false` is returned.
    pub fn decrease_cost(&mut self, node: usize, new_cost: W) -> bool {
        match self.slots.get(node).copied().flatten() {
            Some(slot) if new_cost < self.heap[slot].1 => {
                self.heap[slot].1 = new_cost;
                self.sift_up(slot);
                true
            }
            _ => false,
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].1 < self.heap[parent].1 {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Swap two heap slots, keeping the index in sync.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].0] = Some(a);
        self.slots[self.heap[b].0] = Some(b);
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::with_capacity(3);
    assert_eq!(f.pop(), None);

    f.push(0, 1);
    assert_eq!(f.pop(), Some((0, 1)));
    assert_eq!(f.pop(), None);

    f.push(0, 1);
    f.push(1, 2);
    assert_eq!(f.pop(), Some((0, 1)));
    assert_eq!(f.pop(), Some((1, 2)));
    assert_eq!(f.pop(), None);

    f.push(1, 2);
    f.push(2, 1);
    assert_eq!(f.pop(), Some((2, 1)));
    assert_eq!(f.pop(), Some((1, 2)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_push_beyond_capacity() {
    let mut f = Frontier::with_capacity(0);
    f.push(5, 10);
    f.push(2, 3);
    assert!(f.contains(5));
    assert!(!f.contains(4));
    assert_eq!(f.pop(), Some((2, 3)));
    assert_eq!(f.pop(), Some((5, 10)));
}

#[test]
fn test_decrease_cost() {
    let mut f = Frontier::with_capacity(3);
    assert_eq!(f.decrease_cost(0, 1), false);

    f.push(0, 1);
    assert_eq!(f.decrease_cost(0, 2), false);
    assert_eq!(f.decrease_cost(0, 1), false);
    assert_eq!(f.pop(), Some((0, 1)));
    assert_eq!(f.decrease_cost(0, 0), false);
    assert_eq!(f.pop(), None);

    f.push(0, 1);
    f.push(1, 3);
    assert_eq!(f.decrease_cost(1, 2), true);
    assert_eq!(f.pop(), Some((0, 1)));
    assert_eq!(f.pop(), Some((1, 2)));
    assert_eq!(f.pop(), None);

    f.push(0, 2);
    f.push(1, 3);
    f.push(2, u32::MAX);
    assert_eq!(f.decrease_cost(2, 0), true);
    assert_eq!(f.decrease_cost(1, 1), true);
    assert_eq!(f.pop(), Some((2, 0)));
    assert_eq!(f.pop(), Some((1, 1)));
    assert_eq!(f.pop(), Some((0, 2)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_heap_order() {
    let costs = [9_u32, 4, 7, 1, 8, 2, 6, 3, 5, 0];
    let mut f = Frontier::with_capacity(costs.len());
    for (node, &cost) in costs.iter().enumerate() {
        f.push(node, cost + 200);
    }
    // Reverse the order through decreases
    for (node, &cost) in costs.iter().enumerate() {
        assert!(f.decrease_cost(node, 100 - cost));
    }
    let popped = std::iter::from_fn(|| f.pop()).map(|(_, cost)| 100 - cost).collect::<Vec<_>>();
    assert_eq!(popped, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}
