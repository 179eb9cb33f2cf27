use tracing::debug;

use crate::model::{
    glicko::RatingError,
    structures::{game_record::GameRecord, player_rating::PlayerRating, rating_update::RatingUpdate}
};

pub mod constants;
pub mod decay;
pub mod glicko;
pub mod structures;

/// Rates one full period for a player: computes the new rating and new
/// deviation from the same pre-update rating and the same game batch,
/// keeping the two outputs coherent by construction.
///
/// A player with zero games in the period must not be rated — apply
/// [`decay::decayed_deviation`] instead.
pub fn rate(player: &PlayerRating, games: &[GameRecord]) -> Result<RatingUpdate, RatingError> {
    let rating_after = glicko::new_rating(player.rating, player.deviation, games)?;
    let deviation_after = glicko::new_deviation(player.rating, player.deviation, games)?;

    debug!(
        games = games.len(),
        rating_delta = rating_after - player.rating,
        deviation_after,
        "rated period"
    );

    Ok(RatingUpdate {
        rating_before: player.rating,
        rating_after,
        deviation_before: player.deviation,
        deviation_after
    })
}

#[cfg(test)]
mod tests {
    use crate::model::{
        glicko,
        glicko::RatingError,
        rate,
        structures::{game_record::GameRecord, outcome::Outcome, player_rating::PlayerRating}
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rate_matches_separate_calls() {
        let player = PlayerRating::new(1500.0, 200.0);
        let games = vec![
            GameRecord::new(1400.0, 30.0, Outcome::Win),
            GameRecord::new(1550.0, 100.0, Outcome::Loss),
            GameRecord::new(1700.0, 300.0, Outcome::Loss),
        ];

        let update = rate(&player, &games).unwrap();

        assert_eq!(update.rating_before, 1500.0);
        assert_eq!(update.deviation_before, 200.0);
        assert_abs_diff_eq!(
            update.rating_after,
            glicko::new_rating(1500.0, 200.0, &games).unwrap()
        );
        assert_abs_diff_eq!(
            update.deviation_after,
            glicko::new_deviation(1500.0, 200.0, &games).unwrap()
        );

        let applied = update.applied();
        assert_eq!(applied.rating, update.rating_after);
        assert_eq!(applied.deviation, update.deviation_after);
    }

    #[test]
    fn test_rate_empty_period_is_an_error() {
        let player = PlayerRating::new(1500.0, 200.0);

        assert_eq!(rate(&player, &[]), Err(RatingError::EmptyRatingPeriod));
    }
}
