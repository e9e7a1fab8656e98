use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One stage of the checkout flow. Transitions are owned by the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Billing,
    /// Order placed; confirmation screen.
    Details,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Billing,
        CheckoutStep::Details,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "SHIPPING_STEP",
            CheckoutStep::Billing => "BILLING_STEP",
            CheckoutStep::Details => "DETAILS_STEP",
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutStep {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckoutStep::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| CheckoutError::UnknownStep(s.to_string()))
    }
}

impl TryFrom<String> for CheckoutStep {
    type Error = CheckoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CheckoutStep> for &'static str {
    fn from(step: CheckoutStep) -> Self {
        step.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_steps() {
        for step in CheckoutStep::ALL {
            assert_eq!(step.as_str().parse::<CheckoutStep>().unwrap(), step);
        }
    }

    #[test]
    fn test_parse_unknown_step_fails() {
        let err = "PAYMENT_STEP".parse::<CheckoutStep>().unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownStep(ref s) if s == "PAYMENT_STEP"));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&CheckoutStep::Billing).unwrap();
        assert_eq!(json, "\"BILLING_STEP\"");
        let step: CheckoutStep = serde_json::from_str("\"DETAILS_STEP\"").unwrap();
        assert_eq!(step, CheckoutStep::Details);
        assert!(serde_json::from_str::<CheckoutStep>("\"shipping\"").is_err());
    }
}
