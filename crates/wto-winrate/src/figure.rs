// File: crates/wto-winrate/src/figure.rs
// Summary: Assembles the dual-line win-rate chart from the generated dataset.

use figure_core::{
    Axis, Chart, Footnote, Gradient, Insets, RefLine, RenderOptions, Rgba, Series, TextAnnotation,
    Theme,
};

use crate::dataset::{
    self, SamplePoint, COMPLAINANT_SLOPE, GDP_MAX, RESPONDENT_SLOPE,
};

pub const COMPLAINANT_SERIES: &str = "Complainant Advantage (pp)";
pub const RESPONDENT_SERIES: &str = "Respondent Win Probability (%)";
pub const DEFENDER_SERIES: &str = "Defendant Advantage Zone";

pub const COMPLAINANT_COLOR: Rgba = Rgba::rgb(0x00, 0x66, 0xCC);
pub const RESPONDENT_COLOR: Rgba = Rgba::rgb(0x22, 0x8B, 0x22);
const DARK_RED: Rgba = Rgba::rgb(0x8B, 0x00, 0x00);
const GOLD: Rgba = Rgba::rgb(0xFF, 0xD7, 0x00);
const ZONE_TOP: Rgba = Rgba::rgba(0xFF, 0xCC, 0xCC, 178);
const ZONE_BOTTOM: Rgba = Rgba::rgba(0xFF, 0x99, 0x99, 128);

/// Render options sized for the full figure: header, chart, legend, and the
/// three footer panels.
pub fn render_options() -> RenderOptions {
    RenderOptions {
        width: 1280,
        height: 1080,
        insets: Insets::new(84, 100, 28, 150),
        theme: Theme::light(),
        draw_labels: true,
    }
}

/// Build the complete figure. Everything shown on the chart that quotes a
/// formula value is formatted from the dataset constants here, so the text
/// cannot drift from the generator.
pub fn win_rate_figure() -> Chart {
    let data = dataset::generate();
    let advantage: Vec<(f64, f64)> = data.iter().map(|p| (p.gdp, p.complainant_advantage)).collect();
    let win_prob: Vec<(f64, f64)> = data.iter().map(|p| (p.gdp, p.respondent_win_prob)).collect();
    let zone: Vec<(f64, f64)> = data.iter().map(|p| (p.gdp, p.defender_zone)).collect();

    let mut chart = Chart::new().with_title(
        "Visual Evidence: Win Rate by Legal Role (n=1,582)",
        "H3 Contradiction: Economic Power Favors Defendants",
    );
    chart.x_axis = Axis::new("GDP per Capita (Thousands USD)", 0.0, GDP_MAX).with_tick_step(10.0);
    chart.y_axis = Axis::new("Advantage / Win Probability (%)", -40.0, 80.0).with_tick_step(20.0);

    // The shaded zone goes in first so both lines draw over it.
    chart.add_series(
        Series::area(DEFENDER_SERIES, zone)
            .with_baseline(0.0)
            .with_gradient(Gradient { top: ZONE_TOP, bottom: ZONE_BOTTOM }),
    );
    chart.add_series(
        Series::line(COMPLAINANT_SERIES, advantage)
            .with_color(COMPLAINANT_COLOR)
            .with_stroke_width(3.0),
    );
    chart.add_series(
        Series::line(RESPONDENT_SERIES, win_prob)
            .with_color(RESPONDENT_COLOR)
            .with_stroke_width(3.0),
    );

    chart.add_ref_line(
        RefLine::horizontal(50.0, "50% Parity")
            .with_color(Rgba::rgb(0x99, 0x99, 0x99))
            .with_dash(3.0, 3.0),
    );
    chart.add_ref_line(
        RefLine::horizontal(0.0, "Zero Advantage")
            .with_color(Rgba::rgb(0x66, 0x66, 0x66))
            .with_stroke_width(2.0)
            .with_dash(5.0, 5.0),
    );
    let crossover = (dataset::crossover_gdp() * 10.0).round() / 10.0;
    chart.add_ref_line(
        RefLine::vertical(crossover, format!("Crossover: ${crossover:.1}k"))
            .with_color(GOLD)
            .with_stroke_width(4.0),
    );

    let start = SamplePoint::at(0.0);
    let end = SamplePoint::at(GDP_MAX);
    let at_start = "At GDP=0:";
    let at_end = format!("At GDP=${GDP_MAX:.0}k:");

    chart.add_annotation(
        TextAnnotation::new(0.03, 0.28, COMPLAINANT_COLOR)
            .line(at_start)
            .line("Complainant")
            .line(format!("{:+.1}pp", start.complainant_advantage)),
    );
    chart.add_annotation(
        TextAnnotation::new(0.03, 0.62, RESPONDENT_COLOR)
            .line(at_start)
            .line("Respondent")
            .line(format!("{:.1}%", start.respondent_win_prob)),
    );
    chart.add_annotation(
        TextAnnotation::new(0.85, 0.12, RESPONDENT_COLOR)
            .line(at_end.clone())
            .line("Respondent")
            .line(format!("{:.1}%", end.respondent_win_prob)),
    );
    chart.add_annotation(
        TextAnnotation::new(0.85, 0.85, DARK_RED)
            .line(at_end)
            .line("Complainant")
            .line(format!("{:+.1}pp", end.complainant_advantage)),
    );

    chart.add_footnote(Footnote::new(
        "Blue Line (Declining):",
        format!(
            "Complainant advantage drops from {:+.1}pp to {:+.1}pp. Each $1k GDP reduces advantage by {:.2}pp.",
            start.complainant_advantage, end.complainant_advantage, COMPLAINANT_SLOPE,
        ),
        COMPLAINANT_COLOR,
        Rgba::rgb(0xE3, 0xF2, 0xFD),
    ));
    chart.add_footnote(Footnote::new(
        "Green Line (Rising):",
        format!(
            "Respondent win probability rises from {:.1}% to {:.1}%. Each $1k GDP adds {:.2}pp.",
            start.respondent_win_prob, end.respondent_win_prob, RESPONDENT_SLOPE,
        ),
        RESPONDENT_COLOR,
        Rgba::rgb(0xE8, 0xF5, 0xE9),
    ));
    chart.add_footnote(Footnote::new(
        "H3 Contradiction - The \"Scissors Effect\":",
        "As GDP increases, complainant advantage DECLINES while respondent win probability RISES. \
         The two lines create a \"scissors\" pattern, demonstrating that economic power is a defensive \
         asset, not an offensive one. Wealth helps you defend your policies far more than it helps \
         you challenge others' policies, contradicting structural power theory.",
        Rgba::rgb(0xFF, 0x98, 0x00),
        Rgba::rgb(0xFF, 0xF3, 0xE0),
    ));

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_core::{RefValue, SeriesKind};

    #[test]
    fn series_order_and_styling() {
        let chart = win_rate_figure();
        assert_eq!(chart.series.len(), 3);

        let zone = &chart.series[0];
        assert_eq!(zone.kind, SeriesKind::Area);
        assert_eq!(zone.name, DEFENDER_SERIES);
        assert_eq!(zone.baseline, 0.0);
        assert!(zone.gradient.is_some());

        let adv = &chart.series[1];
        assert_eq!(adv.kind, SeriesKind::Line);
        assert_eq!(adv.color, COMPLAINANT_COLOR);
        assert_eq!(adv.stroke_width, 3.0);
        assert_eq!(adv.data_xy.len(), 36);

        let win = &chart.series[2];
        assert_eq!(win.name, RESPONDENT_SERIES);
        assert_eq!(win.color, RESPONDENT_COLOR);
    }

    #[test]
    fn axes_match_contract() {
        let chart = win_rate_figure();
        assert_eq!(chart.x_axis.label, "GDP per Capita (Thousands USD)");
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 70.0));
        assert_eq!(chart.y_axis.label, "Advantage / Win Probability (%)");
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (-40.0, 80.0));
    }

    #[test]
    fn reference_lines() {
        let chart = win_rate_figure();
        assert_eq!(chart.ref_lines.len(), 3);
        assert_eq!(chart.ref_lines[0].at, RefValue::Horizontal(50.0));
        assert_eq!(chart.ref_lines[0].label, "50% Parity");
        assert_eq!(chart.ref_lines[1].at, RefValue::Horizontal(0.0));
        assert_eq!(chart.ref_lines[1].label, "Zero Advantage");
        assert_eq!(chart.ref_lines[2].at, RefValue::Vertical(22.8));
        assert_eq!(chart.ref_lines[2].label, "Crossover: $22.8k");
    }

    #[test]
    fn annotations_are_derived_from_constants() {
        let chart = win_rate_figure();
        assert_eq!(chart.annotations.len(), 4);
        assert_eq!(chart.annotations[0].lines, vec!["At GDP=0:", "Complainant", "+17.3pp"]);
        assert_eq!(chart.annotations[1].lines, vec!["At GDP=0:", "Respondent", "31.6%"]);
        assert_eq!(chart.annotations[2].lines, vec!["At GDP=$70k:", "Respondent", "76.4%"]);
        assert_eq!(chart.annotations[3].lines, vec!["At GDP=$70k:", "Complainant", "-35.9pp"]);
    }

    #[test]
    fn footer_panels_present() {
        let chart = win_rate_figure();
        assert_eq!(chart.footnotes.len(), 3);
        assert!(chart.footnotes[0].body.contains("+17.3pp to -35.9pp"));
        assert!(chart.footnotes[1].body.contains("31.6% to 76.4%"));
        assert!(chart.footnotes[2].heading.contains("Scissors"));
    }
}
