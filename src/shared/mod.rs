//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the ledger and the persistence layer carry,
//! so they can be used directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Shortest plausible ledger address, after trimming.
pub const MIN_ADDRESS_LEN: usize = 40;
/// Longest plausible ledger address, after trimming.
pub const MAX_ADDRESS_LEN: usize = 64;

// ─── AddressStr ──────────────────────────────────────────────────────────────

/// A ledger account address stored as its base32 string form.
///
/// Serializes transparently as a JSON string. Can be used as a HashMap key.
/// Construction does not validate — call [`AddressStr::is_plausible`] (or the
/// free [`is_plausible_address`]) where a flow accepts a counterparty address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressStr(String);

impl AddressStr {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Structural plausibility check for this address.
    pub fn is_plausible(&self) -> bool {
        is_plausible_address(&self.0)
    }
}

impl std::fmt::Display for AddressStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AddressStr {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AddressStr {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for AddressStr {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AddressStr(s.to_string()))
    }
}

impl Serialize for AddressStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AddressStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AddressStr(s))
    }
}

// ─── Address validation ──────────────────────────────────────────────────────

/// Is `s` structurally plausible as a ledger account address?
///
/// Trims whitespace, then accepts only lengths in
/// [`MIN_ADDRESS_LEN`]..=[`MAX_ADDRESS_LEN`]. This is deliberately coarse —
/// no checksum verification is performed; strict validation is deferred to
/// the external signer and the ledger itself, so false positives are
/// accepted here.
pub fn is_plausible_address(s: &str) -> bool {
    let trimmed = s.trim();
    (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&trimmed.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 58 chars, the canonical Algorand address length.
    const ADDR: &str = "OE44RO4QS3A7HCLMJZZDV5TJ3T5Z6LOZSY3XYNDN3ZV7FC4GEZFJLOI45Y";

    #[test]
    fn test_plausible_canonical_length() {
        assert_eq!(ADDR.len(), 58);
        assert!(is_plausible_address(ADDR));
    }

    #[test]
    fn test_rejects_empty_and_short() {
        assert!(!is_plausible_address(""));
        assert!(!is_plausible_address("   "));
        assert!(!is_plausible_address(&"A".repeat(39)));
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(!is_plausible_address(&"A".repeat(65)));
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        assert!(is_plausible_address(&"A".repeat(40)));
        assert!(is_plausible_address(&"A".repeat(64)));
    }

    #[test]
    fn test_trims_before_checking() {
        let padded = format!("  {}  ", ADDR);
        assert!(is_plausible_address(&padded));
    }

    #[test]
    fn test_address_str_serde() {
        let addr = AddressStr::new(ADDR);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", ADDR));
        let back: AddressStr = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
