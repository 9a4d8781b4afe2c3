use super::PriceLevel;
use crate::order::{Match, MatchType};

impl PriceLevel {
    /// Consumes orders from the front of the queue until `need` is fully
    /// satisfied or the level empties, whichever comes first.
    ///
    /// Each fully-consumed order is removed and reported as `Fulfilled` with
    /// `volume_taken` equal to the volume it had before being zeroed out for
    /// export. An order that outlives the requested volume is left resting
    /// with its volume reduced in place and reported as
    /// `PartiallyFulfilled`.
    ///
    /// Returns the matches in consumption order and the unsatisfied
    /// remainder of `need` (0 if this level supplied it all).
    ///
    /// O(k) in the number of consumed entries.
    pub fn match_and_extract(&mut self, mut need: u64) -> (Vec<Match>, u64) {
        let mut matches = Vec::new();

        while need > 0 {
            let idx = match self.head {
                Some(idx) => idx,
                None => break,
            };

            let resting_volume = self.slots[idx]
                .order
                .as_ref()
                .expect("list head must point at an occupied slot")
                .volume;

            if resting_volume <= need {
                let mut maker_order = self.remove_slot(idx);
                self.volume -= resting_volume;
                need -= resting_volume;
                maker_order.volume = 0;

                matches.push(Match {
                    maker_order,
                    match_type: MatchType::Fulfilled,
                    volume_taken: resting_volume,
                });
            } else {
                let order = self.slots[idx]
                    .order
                    .as_mut()
                    .expect("list head must point at an occupied slot");
                order.volume -= need;
                self.volume -= need;

                matches.push(Match {
                    maker_order: order.clone(),
                    match_type: MatchType::PartiallyFulfilled,
                    volume_taken: need,
                });
                need = 0;
            }
        }

        (matches, need)
    }
}
