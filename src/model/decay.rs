use crate::model::{constants::MAX_DEVIATION, glicko::RatingError};

/// Grows a stored deviation to account for `periods` rating periods of
/// inactivity, capped at [`MAX_DEVIATION`].
///
/// `growth_rate` is the system constant `c`, chosen by the deployer to
/// control how quickly confidence erodes while a player is idle. Callers
/// apply this before a batch update, or on its own for a player with zero
/// games in the period.
pub fn decayed_deviation(deviation: f64, growth_rate: f64, periods: f64) -> Result<f64, RatingError> {
    if deviation < 0.0 {
        return Err(RatingError::Domain("deviation must be non-negative"));
    }
    if growth_rate < 0.0 {
        return Err(RatingError::Domain("growth rate must be non-negative"));
    }
    if periods < 0.0 {
        return Err(RatingError::Domain("elapsed periods must be non-negative"));
    }

    let grown = (deviation.powf(2.0) + growth_rate.powf(2.0) * periods).sqrt();

    Ok(grown.min(MAX_DEVIATION))
}
