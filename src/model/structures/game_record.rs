use serde::{Deserialize, Serialize};

use crate::model::{glicko::RatingError, structures::outcome::Outcome};

/// One game of a rating period: the opponent's pre-period rating and
/// deviation, and the result from the subject player's perspective.
///
/// Holding the three values in one record makes the equal-length invariant
/// of the underlying formulas structural instead of runtime-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub opponent_rating: f64,
    pub opponent_deviation: f64,
    pub outcome: Outcome
}

impl GameRecord {
    pub fn new(opponent_rating: f64, opponent_deviation: f64, outcome: Outcome) -> Self {
        GameRecord {
            opponent_rating,
            opponent_deviation,
            outcome
        }
    }

    /// Assembles a batch from the positional parallel slices callers often
    /// hold (opponent ratings, opponent deviations, raw 0 / 0.5 / 1 results).
    ///
    /// Fails on any length disagreement and on result values outside the
    /// Glicko score set. Never truncates or pads.
    pub fn from_parallel(
        opponent_ratings: &[f64],
        opponent_deviations: &[f64],
        results: &[f64]
    ) -> Result<Vec<GameRecord>, RatingError> {
        if opponent_ratings.len() != opponent_deviations.len() || opponent_ratings.len() != results.len() {
            return Err(RatingError::LengthMismatch {
                ratings: opponent_ratings.len(),
                deviations: opponent_deviations.len(),
                results: results.len()
            });
        }

        let mut games = Vec::with_capacity(opponent_ratings.len());
        for i in 0..opponent_ratings.len() {
            games.push(GameRecord::new(
                opponent_ratings[i],
                opponent_deviations[i],
                Outcome::try_from(results[i])?
            ));
        }

        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        glicko::RatingError,
        structures::{game_record::GameRecord, outcome::Outcome}
    };

    #[test]
    fn test_from_parallel_aligned() {
        let games = GameRecord::from_parallel(&[1400.0, 1550.0], &[30.0, 100.0], &[1.0, 0.0]).unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].outcome, Outcome::Win);
        assert_eq!(games[1].outcome, Outcome::Loss);
        assert_eq!(games[1].opponent_rating, 1550.0);
        assert_eq!(games[1].opponent_deviation, 100.0);
    }

    #[test]
    fn test_from_parallel_length_mismatch() {
        let result = GameRecord::from_parallel(&[1400.0, 1550.0, 1700.0], &[30.0, 100.0, 300.0], &[1.0, 0.0]);

        assert_eq!(
            result,
            Err(RatingError::LengthMismatch {
                ratings: 3,
                deviations: 3,
                results: 2
            })
        );
    }

    #[test]
    fn test_from_parallel_deviation_mismatch() {
        let result = GameRecord::from_parallel(&[1400.0], &[], &[1.0]);

        assert!(matches!(result, Err(RatingError::LengthMismatch { .. })));
    }

    #[test]
    fn test_from_parallel_invalid_result_value() {
        let result = GameRecord::from_parallel(&[1400.0], &[30.0], &[0.75]);

        assert_eq!(result, Err(RatingError::InvalidResult(0.75)));
    }

    #[test]
    fn test_from_parallel_empty_is_empty_batch() {
        // An empty but aligned triple is a valid (empty) batch; the batch
        // functions are the ones that reject it.
        let games = GameRecord::from_parallel(&[], &[], &[]).unwrap();

        assert!(games.is_empty());
    }
}
