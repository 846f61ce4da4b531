// File: crates/figure-core/src/format.rs
// Summary: Tooltip and legend value formatting.

/// Format a series value with its unit suffix. Series whose name mentions
/// "Advantage" are percentage-point margins ("pp"); everything else is a
/// plain percentage. Two decimal places either way.
pub fn value_with_unit(series_name: &str, value: f64) -> String {
    if series_name.contains("Advantage") {
        format!("{value:.2}pp")
    } else {
        format!("{value:.2}%")
    }
}

/// Tooltip header for a GDP sample, e.g. `GDP: $22k`.
pub fn gdp_label(gdp: f64) -> String {
    if (gdp - gdp.round()).abs() < 1e-9 {
        format!("GDP: ${:.0}k", gdp)
    } else {
        format!("GDP: ${:.1}k", gdp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advantage_values_get_pp_suffix() {
        assert_eq!(value_with_unit("Complainant Advantage (pp)", 12.345), "12.35pp");
        assert_eq!(value_with_unit("Defendant Advantage Zone", -3.5), "-3.50pp");
    }

    #[test]
    fn other_values_get_percent_suffix() {
        assert_eq!(value_with_unit("Respondent Win Probability (%)", 45.678), "45.68%");
    }

    #[test]
    fn gdp_labels() {
        assert_eq!(gdp_label(22.0), "GDP: $22k");
        assert_eq!(gdp_label(0.0), "GDP: $0k");
        assert_eq!(gdp_label(22.8), "GDP: $22.8k");
    }
}
