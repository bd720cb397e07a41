use serde::Serialize;

use super::errors::RatingError;
use crate::domain::shared::value_objects::OrderId;

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingError> {
        match value {
            0 => Err(RatingError::ScoreRequired),
            v if v > Self::MAX => Err(RatingError::ScoreOutOfRange),
            v => Ok(Self(v)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub order_id: OrderId,
    pub client_name: String,
    pub client_phone: String,
    pub score: Score,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_scores_from_one_to_five() {
        for value in 1..=5 {
            assert_eq!(Score::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn should_require_a_score() {
        assert!(matches!(Score::new(0), Err(RatingError::ScoreRequired)));
    }

    #[test]
    fn should_reject_scores_above_five() {
        assert!(matches!(Score::new(6), Err(RatingError::ScoreOutOfRange)));
    }
}
