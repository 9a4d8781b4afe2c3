use super::node::{is_red, NodeId, NodePool};
use super::Tree;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("no node at price {0}")]
    PriceNotFound(u64),
    #[error("red-black invariant violated: {0}")]
    Invalid(String),
}

impl Tree {
    /// Debug-only consistency check: verifies the binary-search-tree
    /// ordering, the no-red-red-edge rule, and that every root-to-leaf path
    /// carries the same black-height. Not called anywhere on the hot path —
    /// intended for tests and fuzzing.
    pub fn valid(&self) -> Result<(), TreeError> {
        let pool = self.pool.borrow();

        if let Some(root) = self.root {
            if is_red(&pool, Some(root)) {
                return Err(TreeError::Invalid("root is red".into()));
            }
        }

        check_bst_order(&pool, self.root, None, None)?;
        check_no_red_red(&pool, self.root)?;
        check_black_height(&pool, self.root)?;
        Ok(())
    }
}

fn check_bst_order(
    pool: &NodePool,
    node: Option<NodeId>,
    lo: Option<u64>,
    hi: Option<u64>,
) -> Result<(), TreeError> {
    let n = match node {
        Some(n) => n,
        None => return Ok(()),
    };
    let price = pool.price(n);
    if let Some(lo) = lo {
        if price <= lo {
            return Err(TreeError::Invalid(format!("price {} out of order (lo {})", price, lo)));
        }
    }
    if let Some(hi) = hi {
        if price >= hi {
            return Err(TreeError::Invalid(format!("price {} out of order (hi {})", price, hi)));
        }
    }
    check_bst_order(pool, pool.node(n).left, lo, Some(price))?;
    check_bst_order(pool, pool.node(n).right, Some(price), hi)?;
    Ok(())
}

fn check_no_red_red(pool: &NodePool, node: Option<NodeId>) -> Result<(), TreeError> {
    let n = match node {
        Some(n) => n,
        None => return Ok(()),
    };
    if is_red(pool, Some(n)) && (is_red(pool, pool.node(n).left) || is_red(pool, pool.node(n).right)) {
        return Err(TreeError::Invalid(format!("red node {} has a red child", pool.price(n))));
    }
    check_no_red_red(pool, pool.node(n).left)?;
    check_no_red_red(pool, pool.node(n).right)?;
    Ok(())
}

fn check_black_height(pool: &NodePool, node: Option<NodeId>) -> Result<u32, TreeError> {
    let n = match node {
        Some(n) => n,
        None => return Ok(1),
    };
    let left = check_black_height(pool, pool.node(n).left)?;
    let right = check_black_height(pool, pool.node(n).right)?;
    if left != right {
        return Err(TreeError::Invalid(format!(
            "black-height mismatch at price {} ({} vs {})",
            pool.price(n),
            left,
            right
        )));
    }
    Ok(left + if is_red(pool, Some(n)) { 0 } else { 1 })
}
