// File: crates/wto-winrate/tests/figure_render.rs
// Purpose: End-to-end checks on the assembled figure's SVG and PNG output.

use wto_winrate::{render_options, win_rate_figure};

#[test]
fn svg_contains_full_figure() {
    let chart = win_rate_figure();
    let svg = chart.render_to_svg_string(&render_options());

    // header
    assert!(svg.contains("Visual Evidence: Win Rate by Legal Role (n=1,582)"));
    assert!(svg.contains("H3 Contradiction: Economic Power Favors Defendants"));

    // axes
    assert!(svg.contains(">GDP per Capita (Thousands USD)</text>"));
    assert!(svg.contains(">Advantage / Win Probability (%)</text>"));

    // series: shaded zone plus two 36-point polylines
    assert!(svg.contains("fill=\"url(#area-fill-0)\""));
    assert_eq!(svg.matches("<polyline").count(), 2);

    // reference lines
    assert!(svg.contains(">50% Parity</text>"));
    assert!(svg.contains(">Zero Advantage</text>"));
    assert!(svg.contains(">Crossover: $22.8k</text>"));

    // endpoint annotations
    assert!(svg.contains(">+17.3pp</text>"));
    assert!(svg.contains(">31.6%</text>"));
    assert!(svg.contains(">76.4%</text>"));
    assert!(svg.contains(">-35.9pp</text>"));

    // footer panels survive XML escaping
    assert!(svg.contains("Blue Line (Declining):"));
    assert!(svg.contains("Green Line (Rising):"));
    assert!(svg.contains("&quot;Scissors Effect&quot;"));
}

#[test]
fn svg_tooltips_use_unit_suffixes() {
    let chart = win_rate_figure();
    let svg = chart.render_to_svg_string(&render_options());

    // one hover target per sample per line series
    assert_eq!(svg.matches("<circle").count(), 72);
    assert!(svg.contains("<title>GDP: $0k\nComplainant Advantage (pp): 17.30pp</title>"));
    assert!(svg.contains("<title>GDP: $70k\nRespondent Win Probability (%): 76.40%</title>"));
}

#[test]
fn png_renders_non_empty() {
    let chart = win_rate_figure();
    let bytes = chart.render_to_png_bytes(&render_options()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
