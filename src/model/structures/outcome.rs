use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum_macros::EnumIter;

use crate::model::glicko::RatingError;

/// Game outcome from the subject player's perspective.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Outcome {
    Loss,
    Draw,
    Win
}

impl Outcome {
    /// Score on the Glicko scale: 1 for a win, 0.5 for a draw, 0 for a loss.
    pub fn score(self) -> f64 {
        match self {
            Outcome::Loss => 0.0,
            Outcome::Draw => 0.5,
            Outcome::Win => 1.0
        }
    }
}

impl TryFrom<f64> for Outcome {
    type Error = RatingError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v == 0.0 {
            Ok(Outcome::Loss)
        } else if v == 0.5 {
            Ok(Outcome::Draw)
        } else if v == 1.0 {
            Ok(Outcome::Win)
        } else {
            Err(RatingError::InvalidResult(v))
        }
    }
}
