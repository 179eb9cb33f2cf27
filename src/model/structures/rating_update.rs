use serde::{Deserialize, Serialize};

use crate::model::structures::player_rating::PlayerRating;

/// The before/after record produced by rating one period. Callers apply the
/// `*_after` pair atomically to their durable player record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub rating_before: f64,
    pub rating_after: f64,
    pub deviation_before: f64,
    pub deviation_after: f64
}

impl RatingUpdate {
    /// The updated rating pair, ready to store.
    pub fn applied(&self) -> PlayerRating {
        PlayerRating::new(self.rating_after, self.deviation_after)
    }
}
