//! Fiscal code tables and per-value rules.
//!
//! Every rule takes an already-trimmed, non-empty value. Empty cells are the
//! empty-cell pass's concern and never reach these functions.

use std::sync::LazyLock;

use regex::Regex;

use crate::issue::Violation;

/// Header of the NCM column.
pub const NCM_COLUMN: &str = "NCM";
/// Header of the CST origin column.
pub const CST_ORIGIN_COLUMN: &str = "CST Origem";
/// Header of the CSOSN column.
pub const CSOSN_COLUMN: &str = "CSOSN";
/// Header of the item type column.
pub const ITEM_TYPE_COLUMN: &str = "Tipo Item";

/// CSOSN codes defined for the Simples Nacional regime.
pub const CSOSN_CODES: &[&str] = &[
    "101", // taxed, with credit
    "102", // taxed, without credit
    "103", // exempt for gross revenue bracket
    "201", // taxed with credit, ICMS by ST
    "202", // taxed without credit, ICMS by ST
    "203", // exempt for bracket, ICMS by ST
    "300", // immune
    "400", // not taxed
    "500", // ICMS previously charged by ST
    "900", // other
];

/// Fiscal item type codes, compared as two-digit literals.
pub const ITEM_TYPE_CODES: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "99",
];

pub const CST_ORIGIN_RANGE: std::ops::RangeInclusive<i64> = 0..=8;

static NCM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("valid NCM regex"));

pub fn check_ncm(value: &str) -> Option<Violation> {
    if NCM_PATTERN.is_match(value) {
        None
    } else {
        Some(Violation::NcmFormat {
            value: value.to_string(),
        })
    }
}

pub fn check_cst_origin(value: &str) -> Option<Violation> {
    match value.parse::<i64>() {
        Err(_) => Some(Violation::CstOriginNotInteger {
            value: value.to_string(),
        }),
        Ok(code) if !CST_ORIGIN_RANGE.contains(&code) => Some(Violation::CstOriginOutOfRange {
            value: value.to_string(),
        }),
        Ok(_) => None,
    }
}

pub fn check_csosn(value: &str) -> Option<Violation> {
    if CSOSN_CODES.contains(&value) {
        None
    } else {
        Some(Violation::CsosnInvalid {
            value: value.to_string(),
        })
    }
}

pub fn check_item_type(value: &str) -> Option<Violation> {
    if value.parse::<i64>().is_err() {
        return Some(Violation::ItemTypeNotInteger {
            value: value.to_string(),
        });
    }
    // "1" parses but only the literal "01" is listed.
    if ITEM_TYPE_CODES.contains(&value) {
        None
    } else {
        Some(Violation::ItemTypeNotInTable {
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ncm_requires_eight_ascii_digits() {
        assert_eq!(check_ncm("12345678"), None);
        assert!(matches!(check_ncm("1234567"), Some(Violation::NcmFormat { .. })));
        assert!(check_ncm("123456789").is_some());
        assert!(check_ncm("1234.567").is_some());
        assert!(check_ncm("١٢٣٤٥٦٧٨").is_some());
    }

    #[test]
    fn cst_origin_distinguishes_parse_and_range() {
        assert_eq!(check_cst_origin("0"), None);
        assert_eq!(check_cst_origin("3"), None);
        assert_eq!(check_cst_origin("8"), None);
        assert!(matches!(
            check_cst_origin("9"),
            Some(Violation::CstOriginOutOfRange { .. })
        ));
        assert!(matches!(
            check_cst_origin("-1"),
            Some(Violation::CstOriginOutOfRange { .. })
        ));
        assert!(matches!(
            check_cst_origin("abc"),
            Some(Violation::CstOriginNotInteger { .. })
        ));
        assert!(matches!(
            check_cst_origin("1.0"),
            Some(Violation::CstOriginNotInteger { .. })
        ));
    }

    #[test]
    fn csosn_accepts_listed_codes_only() {
        for code in CSOSN_CODES {
            assert_eq!(check_csosn(code), None);
        }
        assert!(check_csosn("104").is_some());
        assert!(check_csosn("0101").is_some());
    }

    #[test]
    fn item_type_compares_literal_strings() {
        assert_eq!(check_item_type("00"), None);
        assert_eq!(check_item_type("99"), None);
        assert!(matches!(
            check_item_type("1"),
            Some(Violation::ItemTypeNotInTable { .. })
        ));
        assert!(matches!(
            check_item_type("11"),
            Some(Violation::ItemTypeNotInTable { .. })
        ));
        assert!(matches!(
            check_item_type("AB"),
            Some(Violation::ItemTypeNotInteger { .. })
        ));
    }
}
