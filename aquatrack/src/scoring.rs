//! Usage scoring.
//!
//! A logged amount is compared against the task's standard amount. Every entry starts from
//! [`BASE_POINTS`] and moves [`POINTS_PER_UNIT`] points per unit of deviation: up when the user
//! used less than the standard, down when they used more. Penalties are not clamped, so a large
//! overuse produces a negative score.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::Error;

pub const BASE_POINTS: Decimal = Decimal::TEN;
pub const POINTS_PER_UNIT: Decimal = Decimal::TWO;

/// Classification of an observed amount against its standard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageFeedback {
    Conserving,
    Normal,
    Excessive,
}

impl UsageFeedback {
    pub fn message(self) -> &'static str {
        match self {
            UsageFeedback::Conserving => "You are Conserving Water",
            UsageFeedback::Normal => "Normal Usage, You are doing OKAY",
            UsageFeedback::Excessive => "Excessive!! Save water PLEASEE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub feedback: UsageFeedback,
    pub points: Decimal,
}

/// Score one usage entry. Comparison is exact, no tolerance band.
///
/// Fails with a bad request when the points would fall outside the decimal range.
pub fn score(standard: Decimal, observed: Decimal) -> Result<Score, Error> {
    let feedback = match observed.cmp(&standard) {
        std::cmp::Ordering::Less => UsageFeedback::Conserving,
        std::cmp::Ordering::Equal => UsageFeedback::Normal,
        std::cmp::Ordering::Greater => UsageFeedback::Excessive,
    };

    // Conserving adds 2*|difference|, excessive subtracts 2*(observed - standard); both reduce to this
    let points = standard
        .checked_sub(observed)
        .and_then(|difference| POINTS_PER_UNIT.checked_mul(difference))
        .and_then(|deviation| BASE_POINTS.checked_add(deviation))
        .ok_or_else(|| Error::BadRequest {
            message: "Water amount is too large to score".to_string(),
        })?;

    Ok(Score {
        feedback,
        points: points.normalize(),
    })
}

/// Water amount as clients send it: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WaterAmountInput {
    Number(serde_json::Number),
    Text(String),
}

impl WaterAmountInput {
    /// Parse into an exact, non-negative decimal
    pub fn parse(&self) -> Result<Decimal, Error> {
        let raw = match self {
            WaterAmountInput::Number(n) => n.to_string(),
            WaterAmountInput::Text(s) => s.trim().to_string(),
        };

        let amount = Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(|_| Error::BadRequest {
                message: format!("Invalid water amount: {raw:?}"),
            })?;

        if amount < Decimal::ZERO {
            return Err(Error::BadRequest {
                message: "Water amount must not be negative".to_string(),
            });
        }

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_reference_examples() {
        assert_eq!(
            score(dec("50"), dec("40")).unwrap(),
            Score {
                feedback: UsageFeedback::Conserving,
                points: dec("30"),
            }
        );
        assert_eq!(
            score(dec("50"), dec("50")).unwrap(),
            Score {
                feedback: UsageFeedback::Normal,
                points: dec("10"),
            }
        );
        assert_eq!(
            score(dec("50"), dec("70")).unwrap(),
            Score {
                feedback: UsageFeedback::Excessive,
                points: dec("-30"),
            }
        );
    }

    #[test]
    fn test_conserving_rewards_twice_the_saving() {
        for (standard, observed) in [("10", "0"), ("12.5", "12.25"), ("1000", "1")] {
            let result = score(dec(standard), dec(observed)).unwrap();
            assert_eq!(result.feedback, UsageFeedback::Conserving);
            assert_eq!(result.points, dec("10") + dec("2") * (dec(standard) - dec(observed)));
            assert!(result.points > dec("10"));
        }
    }

    #[test]
    fn test_excessive_penalty_is_unclamped() {
        for (standard, observed) in [("10", "10.5"), ("0", "3"), ("50", "1050")] {
            let result = score(dec(standard), dec(observed)).unwrap();
            assert_eq!(result.feedback, UsageFeedback::Excessive);
            assert_eq!(result.points, dec("10") - dec("2") * (dec(observed) - dec(standard)));
        }
        assert_eq!(score(dec("50"), dec("1050")).unwrap().points, dec("-1990"));
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(score(dec("0.3"), dec("0.30")).unwrap().feedback, UsageFeedback::Normal);
        assert_eq!(score(dec("0.3"), dec("0.1") + dec("0.2")).unwrap().feedback, UsageFeedback::Normal);
        assert_eq!(score(dec("0.3"), dec("0.3000001")).unwrap().feedback, UsageFeedback::Excessive);
    }

    #[test]
    fn test_out_of_range_points_are_rejected() {
        let err = score(dec("50"), dec("40000000000000000000000000000")).unwrap_err();
        assert!(matches!(err, Error::BadRequest { .. }));

        // Saving against a huge standard overflows upwards
        let err = score(Decimal::MAX, Decimal::ZERO).unwrap_err();
        assert!(matches!(err, Error::BadRequest { .. }));

        // Still in range once doubled
        assert_eq!(
            score(dec("0"), dec("30000000000000000000000000000")).unwrap().points,
            dec("-59999999999999999999999999990")
        );
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(UsageFeedback::Conserving.message(), "You are Conserving Water");
        assert_eq!(UsageFeedback::Normal.message(), "Normal Usage, You are doing OKAY");
        assert_eq!(UsageFeedback::Excessive.message(), "Excessive!! Save water PLEASEE");
    }

    #[test]
    fn test_parse_numbers_and_strings() {
        let cases = [
            (json!(40), "40"),
            (json!(15.5), "15.5"),
            (json!("40"), "40"),
            (json!(" 12.75 "), "12.75"),
            (json!("0"), "0"),
            (json!("1e2"), "100"),
        ];

        for (value, expected) in cases {
            let input: WaterAmountInput = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(input.parse().unwrap(), dec(expected), "input {value}");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_amounts() {
        for value in [json!("abc"), json!(""), json!("NaN"), json!("inf"), json!(-1), json!("-0.5")] {
            let input: WaterAmountInput = serde_json::from_value(value.clone()).unwrap();
            let err = input.parse().unwrap_err();
            assert!(matches!(err, Error::BadRequest { .. }), "input {value}");
        }
    }

    #[test]
    fn test_non_scalar_amount_does_not_deserialize() {
        assert!(serde_json::from_value::<WaterAmountInput>(json!({ "litres": 3 })).is_err());
        assert!(serde_json::from_value::<WaterAmountInput>(json!(null)).is_err());
    }
}
