//! Typed business codes for type-safe entity references.
//!
//! The source transaction system identifies everything by short character
//! codes (business unit, counterparty, account). Wrapping them in distinct
//! types prevents accidentally passing a counterparty code where an account
//! code is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed code wrappers around strings.
macro_rules! typed_code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a code from any string-like value.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the code is empty or whitespace only.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }
    };
}

typed_code!(
    BusinessUnitCode,
    "Code identifying a business unit (사업장)."
);
typed_code!(
    CounterpartyCode,
    "Code identifying a counterparty: a supplier or a customer."
);
typed_code!(AccountCode, "Chart-of-accounts code (계정코드).");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_code_round_trip() {
        let code = CounterpartyCode::new("C001");
        assert_eq!(code.as_str(), "C001");
        assert_eq!(code.to_string(), "C001");
    }

    #[test]
    fn test_typed_code_blank() {
        assert!(CounterpartyCode::new("").is_blank());
        assert!(CounterpartyCode::new("   ").is_blank());
        assert!(!CounterpartyCode::new("C001").is_blank());
    }

    #[test]
    fn test_typed_code_equality_and_ordering() {
        let a = AccountCode::new("132");
        let b = AccountCode::new("132");
        let c = AccountCode::new("252");
        assert_eq!(a, b);
        assert!(a < c);
    }

    #[test]
    fn test_typed_code_serde_transparent() {
        let code = BusinessUnitCode::new("01");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"01\"");
        let back: BusinessUnitCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
