use crate::price_level::PriceLevel;

/// A node's identity is its index into the pool's arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChildSide {
    Left,
    Right,
}

/// The building block of a red-black tree, carrying a price and its owned
/// `PriceLevel`. An absent (`None`) child is always treated as black.
pub(super) struct Node {
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub red: bool,

    pub price: u64,
    pub level: PriceLevel,
}

impl Node {
    fn new(price: u64) -> Self {
        Node { parent: None, left: None, right: None, red: false, price, level: PriceLevel::new() }
    }

    /// Clears parent/children/color/price and resets the price level in
    /// place, preserving its allocated capacity.
    pub fn reset(&mut self) {
        self.parent = None;
        self.left = None;
        self.right = None;
        self.red = false;
        self.price = 0;
        self.level.reset();
    }
}

/// A process-lifetime reservoir of reusable tree nodes, shared across both
/// books of a market so nodes migrate freely between the buy and sell
/// trees instead of being freed and reallocated.
///
/// Implemented as a `Vec` arena plus a free list of indices rather than
/// individually-owned heap nodes, per the arena-pointer-topology guidance:
/// a node's identity is an index, parent/left/right are `Option<NodeId>`,
/// and the pool itself is the free list. This sidesteps the aliasing
/// hazards that hand-rolled parent-pointer trees suffer from in a language
/// without a garbage collector.
pub struct NodePool {
    arena: Vec<Node>,
    free: Vec<NodeId>,
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new()
    }
}

impl NodePool {
    pub fn new() -> Self {
        NodePool { arena: Vec::new(), free: Vec::new() }
    }

    /// Obtains a (reset) node for `price`, reusing a freed slot or
    /// fabricating a fresh one if the pool is empty.
    pub(super) fn alloc(&mut self, price: u64) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.arena[id].reset();
            self.arena[id].price = price;
            id
        } else {
            self.arena.push(Node::new(price));
            self.arena.len() - 1
        }
    }

    /// Resets and returns a node to the pool for future reuse.
    pub(super) fn free(&mut self, id: NodeId) {
        self.arena[id].reset();
        self.free.push(id);
    }

    pub(super) fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id]
    }

    /// The price level owned by the node at `id`. Used by the order book to
    /// colocate order storage without re-walking the tree.
    pub fn level(&self, id: NodeId) -> &PriceLevel {
        &self.arena[id].level
    }

    /// Mutable access to the price level owned by the node at `id`.
    pub fn level_mut(&mut self, id: NodeId) -> &mut PriceLevel {
        &mut self.arena[id].level
    }

    /// The price held by the node at `id`.
    pub fn price(&self, id: NodeId) -> u64 {
        self.arena[id].price
    }
}

pub(super) fn is_red(pool: &NodePool, id: Option<NodeId>) -> bool {
    id.map(|n| pool.node(n).red).unwrap_or(false)
}

pub(super) fn is_black(pool: &NodePool, id: Option<NodeId>) -> bool {
    !is_red(pool, id)
}
