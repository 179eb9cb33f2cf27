use std::f64::consts::PI;

use thiserror::Error;

use crate::model::{
    constants::{GLICKO_SCALE, Q},
    structures::game_record::GameRecord
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    #[error("Parallel input slices disagree in length: {ratings} ratings, {deviations} deviations, {results} results")]
    LengthMismatch {
        ratings: usize,
        deviations: usize,
        results: usize
    },

    #[error("Rating period contains no games")]
    EmptyRatingPeriod,

    #[error("Invalid input: {0}")]
    Domain(&'static str),

    #[error("Game result must be 0, 0.5 or 1, got {0}")]
    InvalidResult(f64)
}

/// The `g` factor: discounts an opponent's influence in proportion to that
/// opponent's own rating uncertainty. `g(0) == 1.0` (fully certain opponent,
/// full weight), and the factor shrinks toward zero as the deviation grows.
pub fn g(deviation: f64) -> f64 {
    (1.0 + 3.0 * Q * Q * deviation * deviation / (PI * PI)).sqrt().recip()
}

/// Expected score of a player rated `rating` against a single opponent,
/// with the rating difference dampened by `g` of the opponent's deviation.
pub fn expected_score(rating: f64, opponent_rating: f64, opponent_deviation: f64) -> f64 {
    let exponent = -g(opponent_deviation) * (rating - opponent_rating) / GLICKO_SCALE;

    (1.0 + 10f64.powf(exponent)).recip()
}

/// The aggregate variance term `d²` combining the uncertainty contributions
/// of every opponent in the rating period.
///
/// Every term is evaluated with the player's pre-update `rating`. The same
/// value must be fed to [`new_rating`] and [`new_deviation`] for the pair of
/// outputs to be coherent.
pub fn d_squared(rating: f64, games: &[GameRecord]) -> Result<f64, RatingError> {
    if games.is_empty() {
        return Err(RatingError::EmptyRatingPeriod);
    }

    let mut total = 0.0;
    for game in games {
        let impact = g(game.opponent_deviation);
        let expected = expected_score(rating, game.opponent_rating, game.opponent_deviation);

        total += impact * impact * expected * (1.0 - expected);
    }

    Ok((Q * Q * total).recip())
}

/// Post-period rating, combining every game outcome against the expectation
/// held before the period began.
pub fn new_rating(rating: f64, deviation: f64, games: &[GameRecord]) -> Result<f64, RatingError> {
    let d2 = checked_d_squared(rating, deviation, games)?;

    let mut total = 0.0;
    for game in games {
        let expected = expected_score(rating, game.opponent_rating, game.opponent_deviation);

        total += g(game.opponent_deviation) * (game.outcome.score() - expected);
    }

    let gain = Q / (1.0 / (deviation * deviation) + 1.0 / d2);

    Ok(rating + gain * total)
}

/// Post-period deviation. Information from a played game can only narrow
/// the confidence interval, so the result is always below `deviation`.
pub fn new_deviation(rating: f64, deviation: f64, games: &[GameRecord]) -> Result<f64, RatingError> {
    let d2 = checked_d_squared(rating, deviation, games)?;

    Ok((1.0 / (deviation * deviation) + 1.0 / d2).recip().sqrt())
}

fn checked_d_squared(rating: f64, deviation: f64, games: &[GameRecord]) -> Result<f64, RatingError> {
    if deviation <= 0.0 {
        return Err(RatingError::Domain("pre-update deviation must be positive"));
    }

    d_squared(rating, games)
}
