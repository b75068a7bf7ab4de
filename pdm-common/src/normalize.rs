//! Numeric normalization for loosely-typed spreadsheet cells
//!
//! The source sheets mix Colombian and American number formats row to row
//! ("1.234,56", "1,234.56", "$ 1.234.567", "23.50"), so cells cannot be
//! parsed against a fixed locale. [`normalize_number`] resolves the
//! separators heuristically and is total: any value that cannot be read
//! as a number becomes 0.

/// Normalize one raw cell value to a finite `f64`.
///
/// Currency signs (`$`), percent signs (`%`) and all whitespace are
/// stripped before separator resolution. Empty and `"-"` cells normalize
/// to 0, as does anything that still fails to parse after resolution.
///
/// Separator resolution:
/// - both `.` and `,` present: whichever appears last is the decimal
///   mark, the other groups thousands,
/// - only `.`: repeated dots group thousands; a single dot is a decimal
///   mark unless the value has exactly three fraction digits and does
///   not start with `0.` ("1.234" reads as 1234, "0.234" stays a
///   fraction),
/// - only `,`: repeated commas group thousands; a single comma is a
///   decimal mark.
pub fn normalize_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != '%')
        .collect();

    if cleaned.is_empty() || cleaned == "-" {
        return 0.0;
    }

    match resolve_separators(&cleaned).parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

fn resolve_separators(cleaned: &str) -> String {
    match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) => {
            if dot < comma {
                // 1.234,56
                cleaned.replace('.', "").replace(',', ".")
            } else {
                // 1,234.56
                cleaned.replace(',', "")
            }
        }
        (Some(_), None) => {
            let parts: Vec<&str> = cleaned.split('.').collect();
            if parts.len() > 2 {
                // 1.234.567
                cleaned.replace('.', "")
            } else {
                // One dot is ambiguous: "23.50" is a decimal but "1.234"
                // is almost always a thousands-grouped integer in this
                // data. Exactly three fraction digits reads as grouping
                // unless the value starts with "0.".
                let fraction = parts.get(1).copied().unwrap_or("");
                if fraction.len() == 3 && !cleaned.starts_with("0.") {
                    cleaned.replace('.', "")
                } else {
                    cleaned.to_string()
                }
            }
        }
        (None, Some(_)) => {
            if cleaned.matches(',').count() > 1 {
                cleaned.replace(',', "")
            } else {
                cleaned.replace(',', ".")
            }
        }
        (None, None) => cleaned.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators_last_one_wins() {
        assert_eq!(normalize_number("1.234,56"), 1234.56);
        assert_eq!(normalize_number("1,234.56"), 1234.56);
        assert_eq!(normalize_number("1.234.567,89"), 1234567.89);
        assert_eq!(normalize_number("1,234,567.89"), 1234567.89);
    }

    #[test]
    fn test_single_dot_heuristic() {
        assert_eq!(normalize_number("1.234.567"), 1234567.0);
        assert_eq!(normalize_number("23.50"), 23.5);
        assert_eq!(normalize_number("0.60"), 0.6);
        assert_eq!(normalize_number("1.234"), 1234.0);
        assert_eq!(normalize_number("0.234"), 0.234);
        assert_eq!(normalize_number("1.00"), 1.0);
        assert_eq!(normalize_number("1.5"), 1.5);
        assert_eq!(normalize_number("12.3456"), 12.3456);
    }

    #[test]
    fn test_comma_only() {
        assert_eq!(normalize_number("1,5"), 1.5);
        assert_eq!(normalize_number("79,5"), 79.5);
        assert_eq!(normalize_number("1,234,567"), 1234567.0);
    }

    #[test]
    fn test_decorations_stripped() {
        assert_eq!(normalize_number("$ 1.234.567"), 1234567.0);
        assert_eq!(normalize_number("85%"), 85.0);
        assert_eq!(normalize_number("  $1 234 567  "), 1234567.0);
        assert_eq!(normalize_number("$-12"), -12.0);
    }

    #[test]
    fn test_empty_and_dash_cells_are_zero() {
        assert_eq!(normalize_number(""), 0.0);
        assert_eq!(normalize_number("-"), 0.0);
        assert_eq!(normalize_number("   "), 0.0);
        assert_eq!(normalize_number(" - "), 0.0);
    }

    #[test]
    fn test_garbage_is_zero_never_a_panic() {
        assert_eq!(normalize_number("N/A"), 0.0);
        assert_eq!(normalize_number("sin dato"), 0.0);
        assert_eq!(normalize_number("12abc"), 0.0);
        assert_eq!(normalize_number("--"), 0.0);
        assert_eq!(normalize_number("NaN"), 0.0);
        assert_eq!(normalize_number("inf"), 0.0);
        assert_eq!(normalize_number("."), 0.0);
        assert_eq!(normalize_number(","), 0.0);
    }

    #[test]
    fn test_negatives_keep_their_sign() {
        assert_eq!(normalize_number("-1.234,56"), -1234.56);
        assert_eq!(normalize_number("-23.50"), -23.5);
        assert_eq!(normalize_number("-1.234"), -1234.0);
    }

    #[test]
    fn test_canonical_forms_are_idempotent() {
        for raw in [
            "1.234,56", "1,234.56", "1.234.567", "23.50", "0.60", "1.234", "85%", "$-12",
        ] {
            let once = normalize_number(raw);
            let twice = normalize_number(&once.to_string());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }
}
