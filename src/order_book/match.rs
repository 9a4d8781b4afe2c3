use super::OrderBook;
use crate::order::Match;

impl OrderBook {
    /// Walks price levels from the book's head, extracting resting orders
    /// until `volume` is satisfied or the book runs dry. Returns every
    /// match produced and whatever volume could not be filled.
    ///
    /// O(n) in the number of orders consumed.
    pub fn match_and_extract(&mut self, mut volume: u64) -> (Vec<Match>, u64) {
        let mut all_matches = Vec::with_capacity(10);

        while volume > 0 {
            let head = match self.tree.head() {
                Some(h) => h,
                None => break,
            };

            let mut pool = self.tree.pool().borrow_mut();
            let (matches, remaining) = pool.level_mut(head).match_and_extract(volume);
            volume = remaining;
            let head_price = pool.price(head);
            let head_volume = pool.level(head).volume();
            drop(pool);

            (self.volume_update_callback)(head_price, head_volume);
            if head_volume == 0 {
                self.delete_price_node(head, head_price);
            }

            all_matches.extend(matches);
        }

        (all_matches, volume)
    }
}
