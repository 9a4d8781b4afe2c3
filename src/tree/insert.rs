use super::node::{is_black, is_red, ChildSide, NodeId, NodePool};
use super::search::find;
use super::{Orientation, Tree};

impl Tree {
    /// Returns the node for `price`, creating it if absent. Always searches
    /// (never assume the price exists before calling this — the search is
    /// unavoidable either way).
    ///
    /// O(log n)
    pub fn insert(&mut self, price: u64) -> NodeId {
        let mut pool = self.pool.borrow_mut();
        let (holder, side, parent) = find(&pool, self.root, price);
        if let Some(h) = holder {
            return h;
        }

        let holder = pool.alloc(price);

        let better_than_head = match self.head {
            None => true,
            Some(h) => match self.orientation {
                Orientation::MinFirst => price < pool.price(h),
                Orientation::MaxFirst => price > pool.price(h),
            },
        };
        if better_than_head {
            self.head = Some(holder);
        }

        let parent = match parent {
            None => {
                self.root = Some(holder);
                return holder;
            }
            Some(p) => p,
        };

        pool.node_mut(holder).red = true;
        pool.node_mut(holder).parent = Some(parent);
        match side {
            ChildSide::Left => pool.node_mut(parent).left = Some(holder),
            ChildSide::Right => pool.node_mut(parent).right = Some(holder),
        }

        if is_black(&pool, Some(parent)) {
            return holder;
        }

        self.insert_fixup(&mut pool, holder);
        if let Some(root) = self.root {
            pool.node_mut(root).red = false;
        }
        holder
    }

    fn insert_fixup(&mut self, pool: &mut NodePool, mut z: NodeId) {
        loop {
            let z_parent = match pool.node(z).parent {
                Some(p) if pool.node(p).red => p,
                _ => break,
            };
            // `z_parent` is red, so it cannot be the root (the root is
            // always black), and therefore has a parent of its own.
            let grandparent = pool
                .node(z_parent)
                .parent
                .expect("a red node always has a parent");

            if Some(z_parent) == pool.node(grandparent).left {
                let uncle = pool.node(grandparent).right;
                if is_red(pool, uncle) {
                    pool.node_mut(z_parent).red = false;
                    pool.node_mut(uncle.unwrap()).red = false;
                    pool.node_mut(grandparent).red = true;
                    z = grandparent;
                } else {
                    if Some(z) == pool.node(z_parent).right {
                        z = z_parent;
                        self.rotate_left(pool, z);
                    }
                    let z_parent = pool.node(z).parent.unwrap();
                    let grandparent = pool.node(z_parent).parent.unwrap();
                    pool.node_mut(z_parent).red = false;
                    pool.node_mut(grandparent).red = true;
                    self.rotate_right(pool, grandparent);
                }
            } else {
                let uncle = pool.node(grandparent).left;
                if is_red(pool, uncle) {
                    pool.node_mut(z_parent).red = false;
                    pool.node_mut(uncle.unwrap()).red = false;
                    pool.node_mut(grandparent).red = true;
                    z = grandparent;
                } else {
                    if Some(z) == pool.node(z_parent).left {
                        z = z_parent;
                        self.rotate_right(pool, z);
                    }
                    let z_parent = pool.node(z).parent.unwrap();
                    let grandparent = pool.node(z_parent).parent.unwrap();
                    pool.node_mut(z_parent).red = false;
                    pool.node_mut(grandparent).red = true;
                    self.rotate_left(pool, grandparent);
                }
            }
        }
    }
}
