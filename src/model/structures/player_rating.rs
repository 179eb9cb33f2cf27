use serde::{Deserialize, Serialize};

use crate::model::constants::{DEFAULT_RATING, MAX_DEVIATION};

/// A player's durable rating pair, as owned by the caller between rating
/// periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub rating: f64,
    pub deviation: f64
}

impl PlayerRating {
    pub fn new(rating: f64, deviation: f64) -> Self {
        PlayerRating { rating, deviation }
    }
}

impl Default for PlayerRating {
    /// An unrated player: 1500 with the maximum deviation.
    fn default() -> Self {
        PlayerRating {
            rating: DEFAULT_RATING,
            deviation: MAX_DEVIATION
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        constants::{DEFAULT_RATING, MAX_DEVIATION},
        structures::player_rating::PlayerRating
    };

    #[test]
    fn test_default_is_unrated() {
        let player = PlayerRating::default();

        assert_eq!(player.rating, DEFAULT_RATING);
        assert_eq!(player.deviation, MAX_DEVIATION);
    }
}
