//! Inbound money amounts.
//!
//! Wages, cash advances and reimbursements are whole, non-negative currency
//! units. A negative amount is rejected at the boundary so it can never
//! flip the sign of a deduction downstream.

use serde::{Deserialize, Deserializer, de};

/// Serde `deserialize_with` adapter that rejects negative amounts.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = i64::deserialize(deserializer)?;
    if amount < 0 {
        return Err(de::Error::custom(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize")]
        amount: i64,
    }

    #[test]
    fn test_accepts_zero_and_positive() {
        let holder: Holder = serde_json::from_str(r#"{"amount": 0}"#).unwrap();
        assert_eq!(holder.amount, 0);
        let holder: Holder = serde_json::from_str(r#"{"amount": 250000}"#).unwrap();
        assert_eq!(holder.amount, 250_000);
    }

    #[test]
    fn test_missing_uses_default() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.amount, 0);
    }

    #[test]
    fn test_negative_is_rejected() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"amount": -50000}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("must not be negative"));
    }
}
