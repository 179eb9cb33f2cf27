use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::structures::{game_record::GameRecord, outcome::Outcome, player_rating::PlayerRating};

/// Generates a reproducible rating period of `n_games` games against
/// opponents spread around `rating`.
pub fn generate_rating_period(n_games: usize, rating: f64) -> Vec<GameRecord> {
    // Seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    (0..n_games)
        .map(|_| {
            let opponent_rating = rating + rng.random_range(-400.0..=400.0);
            let opponent_deviation = rng.random_range(30.0..=350.0);
            let outcome = match rng.random_range(0..3) {
                0 => Outcome::Loss,
                1 => Outcome::Draw,
                _ => Outcome::Win
            };

            GameRecord::new(opponent_rating, opponent_deviation, outcome)
        })
        .collect()
}

pub fn generate_player_rating(rating: f64, deviation: f64) -> PlayerRating {
    PlayerRating::new(rating, deviation)
}
