//! Pure normalization functions for DMF field values.
//!
//! Every function here is total: unrecognized input passes through
//! unchanged, nothing fails. None of them touch I/O, which keeps them
//! directly unit-testable.

/// Expands a DMF record type code.
///
/// `"A"` → `"Add"`, `"C"` → `"Change"`, `"D"` → `"Delete"`; anything else
/// (including the empty string) passes through unchanged.
pub(crate) fn expand_type_code(code: String) -> String {
    match code.as_str() {
        "A" => "Add".to_string(),
        "C" => "Change".to_string(),
        "D" => "Delete".to_string(),
        _ => code,
    }
}

/// Expands a DMF verified code.
///
/// `"V"` → `"Verified"`, `"P"` → `"Proof Code"`; anything else passes
/// through unchanged.
pub(crate) fn expand_verified_code(code: String) -> String {
    match code.as_str() {
        "V" => "Verified".to_string(),
        "P" => "Proof Code".to_string(),
        _ => code,
    }
}

/// Reformats a DMF date from `MMDDCCYY` to `YYYY-MM-DD`.
///
/// Only inputs of exactly 8 ASCII bytes are transformed; everything else
/// passes through unchanged. The digits are reordered, not validated:
/// `"13450001"` becomes `"0001-13-45"`.
pub(crate) fn reformat_date(encoded: String) -> String {
    if encoded.len() != 8 || !encoded.is_ascii() {
        return encoded;
    }

    format!("{}-{}-{}", &encoded[4..8], &encoded[0..2], &encoded[2..4])
}

/// Title-cases a name field, ASCII style.
///
/// The whole value is lower-cased, then the first letter of each
/// whitespace-separated word is upper-cased. No locale handling, no
/// special cases for apostrophes or hyphens: `"O'BRIEN"` → `"O'brien"`.
pub(crate) fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;

    for ch in value.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            word_start = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        assert_eq!(expand_type_code("A".into()), "Add");
        assert_eq!(expand_type_code("C".into()), "Change");
        assert_eq!(expand_type_code("D".into()), "Delete");
    }

    #[test]
    fn test_type_code_passthrough() {
        assert_eq!(expand_type_code("".into()), "");
        assert_eq!(expand_type_code("X".into()), "X");
        assert_eq!(expand_type_code("Add".into()), "Add");
    }

    #[test]
    fn test_verified_codes() {
        assert_eq!(expand_verified_code("V".into()), "Verified");
        assert_eq!(expand_verified_code("P".into()), "Proof Code");
        assert_eq!(expand_verified_code("".into()), "");
        assert_eq!(expand_verified_code("Q".into()), "Q");
    }

    #[test]
    fn test_date_reformat() {
        assert_eq!(reformat_date("02141990".into()), "1990-02-14");
        assert_eq!(reformat_date("12311899".into()), "1899-12-31");
    }

    #[test]
    fn test_date_not_validated() {
        // Reordering only, no calendar checks
        assert_eq!(reformat_date("13450001".into()), "0001-13-45");
    }

    #[test]
    fn test_date_passthrough_wrong_length() {
        assert_eq!(reformat_date("".into()), "");
        assert_eq!(reformat_date("0214199".into()), "0214199");
        assert_eq!(reformat_date("021419900".into()), "021419900");
        // Already-formatted dates are 10 chars and untouched
        assert_eq!(reformat_date("1990-02-14".into()), "1990-02-14");
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("SMITH"), "Smith");
        assert_eq!(title_case("smith"), "Smith");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("VAN DER BERG"), "Van Der Berg");
    }

    #[test]
    fn test_title_case_no_special_boundaries() {
        assert_eq!(title_case("O'BRIEN"), "O'brien");
        assert_eq!(title_case("SMITH-JONES"), "Smith-jones");
        assert_eq!(title_case("III"), "Iii");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
