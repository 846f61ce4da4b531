// File: crates/wto-winrate/src/dataset.rs
// Summary: Synthetic win-rate dataset derived from two fixed linear formulas.

/// Complainant advantage at GDP = 0, in percentage points.
pub const COMPLAINANT_INTERCEPT: f64 = 17.3;
/// Advantage lost per $1k of GDP per capita.
pub const COMPLAINANT_SLOPE: f64 = 0.76;
/// Respondent win probability at GDP = 0, in percent.
pub const RESPONDENT_INTERCEPT: f64 = 31.6;
/// Win probability gained per $1k of GDP per capita.
pub const RESPONDENT_SLOPE: f64 = 0.64;

/// Sampled GDP domain: [0, GDP_MAX] in thousands of USD, every GDP_STEP.
pub const GDP_MAX: f64 = 70.0;
pub const GDP_STEP: f64 = 2.0;

/// One sample along the GDP axis. Immutable once computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// GDP per capita, thousands of USD.
    pub gdp: f64,
    /// Percentage-point margin by which the complainant's win rate exceeds
    /// the respondent's.
    pub complainant_advantage: f64,
    /// Percent likelihood the respondent prevails.
    pub respondent_win_prob: f64,
    /// Equals `complainant_advantage` where it is negative, 0 elsewhere.
    /// Drives the shaded region below the zero baseline.
    pub defender_zone: f64,
}

impl SamplePoint {
    /// Evaluate both formulas at a GDP value.
    pub fn at(gdp: f64) -> Self {
        let complainant_advantage = COMPLAINANT_INTERCEPT - COMPLAINANT_SLOPE * gdp;
        let respondent_win_prob = RESPONDENT_INTERCEPT + RESPONDENT_SLOPE * gdp;
        let defender_zone = if complainant_advantage < 0.0 { complainant_advantage } else { 0.0 };
        Self { gdp, complainant_advantage, respondent_win_prob, defender_zone }
    }
}

/// Generate the full sample sequence: ascending GDP from 0 to `GDP_MAX`
/// inclusive, stepping by `GDP_STEP`. Pure and infallible.
pub fn generate() -> Vec<SamplePoint> {
    let steps = (GDP_MAX / GDP_STEP) as usize;
    (0..=steps).map(|i| SamplePoint::at(i as f64 * GDP_STEP)).collect()
}

/// GDP value where the complainant advantage crosses zero.
pub fn crossover_gdp() -> f64 {
    COMPLAINANT_INTERCEPT / COMPLAINANT_SLOPE
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn endpoints_match_formulas() {
        let first = SamplePoint::at(0.0);
        assert!((first.complainant_advantage - 17.3).abs() < EPS);
        assert!((first.respondent_win_prob - 31.6).abs() < EPS);
        assert!(first.defender_zone.abs() < EPS);

        let last = SamplePoint::at(70.0);
        assert!((last.complainant_advantage - (-35.9)).abs() < EPS);
        assert!((last.respondent_win_prob - 76.4).abs() < EPS);
        assert!((last.defender_zone - (-35.9)).abs() < EPS);
    }

    #[test]
    fn sequence_is_complete_and_ordered() {
        let data = generate();
        assert_eq!(data.len(), 36);
        assert_eq!(data[0].gdp, 0.0);
        assert_eq!(data[35].gdp, 70.0);
        for pair in data.windows(2) {
            assert!((pair[1].gdp - pair[0].gdp - GDP_STEP).abs() < EPS);
        }
    }

    #[test]
    fn defender_zone_clamps_at_zero() {
        for p in generate() {
            if p.complainant_advantage < 0.0 {
                assert_eq!(p.defender_zone, p.complainant_advantage);
            } else {
                assert_eq!(p.defender_zone, 0.0);
            }
        }
    }

    #[test]
    fn crossover_sits_between_samples() {
        let x = crossover_gdp();
        assert!((x - 17.3 / 0.76).abs() < EPS);
        assert!(x > 22.0 && x < 23.0);
        // one-decimal rounding matches the fixed chart label
        assert_eq!(format!("{:.1}", x), "22.8");
        // advantage really is zero there
        assert!(SamplePoint::at(x).complainant_advantage.abs() < 1e-12);
    }
}
