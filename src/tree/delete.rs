use super::node::{is_black, ChildSide, NodeId, NodePool};
use super::search::{find, max, min};
use super::{Orientation, Tree};

impl Tree {
    /// Removes the node holding `price`, if one exists; a no-op otherwise.
    ///
    /// O(log n)
    pub fn delete(&mut self, price: u64) {
        let mut pool = self.pool.borrow_mut();
        let (holder, _, _) = find(&pool, self.root, price);
        if let Some(h) = holder {
            self.delete_internal(&mut pool, h);
        }
    }

    /// Removes a node known to be present, without a prior search. The node
    /// id is invalidated (returned to the pool) after this call — it is the
    /// caller's responsibility to only pass a node that belongs to this
    /// tree.
    ///
    /// O(log n)
    pub fn delete_node(&mut self, node: NodeId) {
        let mut pool = self.pool.borrow_mut();
        self.delete_internal(&mut pool, node);
    }

    fn delete_internal(&mut self, pool: &mut NodePool, holder: NodeId) {
        if self.head == Some(holder) {
            self.head = match self.orientation {
                Orientation::MinFirst => match pool.node(holder).right {
                    None => pool.node(holder).parent,
                    Some(r) => Some(min(pool, r)),
                },
                Orientation::MaxFirst => match pool.node(holder).left {
                    None => pool.node(holder).parent,
                    Some(l) => Some(max(pool, l)),
                },
            };
        }

        let mut original_red = pool.node(holder).red;
        let x: Option<NodeId>;
        let x_parent: Option<NodeId>;

        let holder_left = pool.node(holder).left;
        let holder_right = pool.node(holder).right;

        if holder_left.is_none() {
            x = holder_right;
            x_parent = pool.node(holder).parent;
            self.transplant(pool, holder, x);
        } else if holder_right.is_none() {
            x = holder_left;
            x_parent = pool.node(holder).parent;
            self.transplant(pool, holder, x);
        } else {
            let y = min(pool, holder_right.unwrap());
            original_red = pool.node(y).red;
            x = pool.node(y).right;

            if pool.node(y).parent == Some(holder) {
                x_parent = Some(y);
                if let Some(xn) = x {
                    pool.node_mut(xn).parent = Some(y);
                }
            } else {
                x_parent = pool.node(y).parent;
                self.transplant(pool, y, x);
                pool.node_mut(y).right = holder_right;
                pool.node_mut(holder_right.unwrap()).parent = Some(y);
            }

            self.transplant(pool, holder, Some(y));
            pool.node_mut(y).left = holder_left;
            pool.node_mut(holder_left.unwrap()).parent = Some(y);
            pool.node_mut(y).red = pool.node(holder).red;
        }

        if !original_red {
            let x_side = side_of(pool, x_parent, x);
            self.delete_fixup(pool, x, x_parent, x_side);
        }

        pool.free(holder);
    }

    fn delete_fixup(
        &mut self,
        pool: &mut NodePool,
        mut x: Option<NodeId>,
        mut x_parent: Option<NodeId>,
        mut x_side: ChildSide,
    ) {
        while x != self.root && is_black(pool, x) {
            let xp = match x_parent {
                Some(p) => p,
                None => break,
            };

            match x_side {
                ChildSide::Left => {
                    let mut w = pool
                        .node(xp)
                        .right
                        .expect("the sibling of a black node cannot be nil in a valid red-black tree");

                    if pool.node(w).red {
                        pool.node_mut(w).red = false;
                        pool.node_mut(xp).red = true;
                        self.rotate_left(pool, xp);
                        w = pool.node(xp).right.expect("sibling must exist after rotation");
                    }

                    if is_black(pool, pool.node(w).left) && is_black(pool, pool.node(w).right) {
                        pool.node_mut(w).red = true;
                        x = Some(xp);
                        x_parent = pool.node(xp).parent;
                        x_side = side_of(pool, x_parent, x);
                    } else {
                        if is_black(pool, pool.node(w).right) {
                            if let Some(wl) = pool.node(w).left {
                                pool.node_mut(wl).red = false;
                            }
                            pool.node_mut(w).red = true;
                            self.rotate_right(pool, w);
                            w = pool.node(xp).right.expect("sibling must exist after rotation");
                        }
                        pool.node_mut(w).red = pool.node(xp).red;
                        pool.node_mut(xp).red = false;
                        if let Some(wr) = pool.node(w).right {
                            pool.node_mut(wr).red = false;
                        }
                        self.rotate_left(pool, xp);
                        x = self.root;
                        break;
                    }
                }
                ChildSide::Right => {
                    let mut w = pool
                        .node(xp)
                        .left
                        .expect("the sibling of a black node cannot be nil in a valid red-black tree");

                    if pool.node(w).red {
                        pool.node_mut(w).red = false;
                        pool.node_mut(xp).red = true;
                        self.rotate_right(pool, xp);
                        w = pool.node(xp).left.expect("sibling must exist after rotation");
                    }

                    if is_black(pool, pool.node(w).right) && is_black(pool, pool.node(w).left) {
                        pool.node_mut(w).red = true;
                        x = Some(xp);
                        x_parent = pool.node(xp).parent;
                        x_side = side_of(pool, x_parent, x);
                    } else {
                        if is_black(pool, pool.node(w).left) {
                            if let Some(wr) = pool.node(w).right {
                                pool.node_mut(wr).red = false;
                            }
                            pool.node_mut(w).red = true;
                            self.rotate_left(pool, w);
                            w = pool.node(xp).left.expect("sibling must exist after rotation");
                        }
                        pool.node_mut(w).red = pool.node(xp).red;
                        pool.node_mut(xp).red = false;
                        if let Some(wl) = pool.node(w).left {
                            pool.node_mut(wl).red = false;
                        }
                        self.rotate_right(pool, xp);
                        x = self.root;
                        break;
                    }
                }
            }
        }

        if let Some(xn) = x {
            pool.node_mut(xn).red = false;
        }
    }
}

fn side_of(pool: &NodePool, parent: Option<NodeId>, child: Option<NodeId>) -> ChildSide {
    match parent {
        Some(p) if pool.node(p).right == child => ChildSide::Right,
        _ => ChildSide::Left,
    }
}
