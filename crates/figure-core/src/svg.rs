// File: crates/figure-core/src/svg.rs
// Summary: SVG backend; builds markup directly, with hover tooltips on data samples.

use crate::annotate::{LabelPos, RefValue};
use crate::chart::{Chart, Footnote, RenderOptions, PANEL_MARGIN, PANEL_PAD};
use crate::format;
use crate::geometry::RectF32;
use crate::scale::LinearScale;
use crate::series::{Series, SeriesKind};
use crate::theme::Theme;
use crate::types::Rgba;

/// Render the chart as a standalone SVG document.
pub fn render(chart: &Chart, opts: &RenderOptions) -> String {
    let layout = chart.layout(opts);
    let theme = &opts.theme;
    let w = opts.width;
    let h = opts.height;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background.css()
    ));
    svg.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"10\" fill=\"{}\"/>",
        PANEL_MARGIN,
        PANEL_MARGIN,
        w as f32 - 2.0 * PANEL_MARGIN,
        h as f32 - 2.0 * PANEL_MARGIN,
        theme.panel.css()
    ));

    push_gradient_defs(&mut svg, &chart.series);

    let sx = LinearScale::across(&chart.x_axis, layout.plot.left, layout.plot.right);
    let sy = LinearScale::down(&chart.y_axis, layout.plot.top, layout.plot.bottom);
    let plot = &layout.plot;

    push_grid(&mut svg, plot, chart, &sx, &sy, theme);

    for (i, s) in chart.series.iter().enumerate() {
        match s.kind {
            SeriesKind::Area => push_area(&mut svg, s, i, &sx, &sy),
            SeriesKind::Line => push_line(&mut svg, s, &sx, &sy),
        }
    }

    for line in &chart.ref_lines {
        push_ref_line(&mut svg, plot, line, &sx, &sy, opts.draw_labels);
    }

    // axis lines
    svg.push_str(&line_el(plot.left, plot.bottom, plot.right, plot.bottom, theme.axis_line, 1.5, None));
    svg.push_str(&line_el(plot.left, plot.top, plot.left, plot.bottom, theme.axis_line, 1.5, None));

    if opts.draw_labels {
        push_header(&mut svg, chart, theme);
        push_tick_labels(&mut svg, plot, chart, &sx, &sy, theme);
        push_axis_labels(&mut svg, &layout.viewport, plot, chart, theme);
        for a in &chart.annotations {
            push_annotation(&mut svg, &layout.viewport, a);
        }
        push_legend(&mut svg, &layout.plot, layout.legend_y, &chart.series, theme);
        for (idx, rect) in &layout.panels {
            push_footnote(&mut svg, &chart.footnotes[*idx], rect, theme);
        }
    }

    push_tooltips(&mut svg, &chart.series, &sx, &sy);

    svg.push_str("</svg>");
    svg
}

fn push_gradient_defs(svg: &mut String, series: &[Series]) {
    let mut defs = String::new();
    for (i, s) in series.iter().enumerate() {
        if let Some(g) = s.gradient {
            defs.push_str(&format!(
                "<linearGradient id=\"area-fill-{i}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
                 <stop offset=\"5%\" stop-color=\"{}\" stop-opacity=\"{:.2}\"/>\
                 <stop offset=\"95%\" stop-color=\"{}\" stop-opacity=\"{:.2}\"/>\
                 </linearGradient>",
                g.top.css(),
                g.top.opacity(),
                g.bottom.css(),
                g.bottom.opacity(),
            ));
        }
    }
    if !defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&defs);
        svg.push_str("</defs>");
    }
}

fn push_grid(svg: &mut String, plot: &RectF32, chart: &Chart, sx: &LinearScale, sy: &LinearScale, theme: &Theme) {
    for x in chart.x_axis.ticks() {
        let px = sx.to_px(x);
        svg.push_str(&line_el(px, plot.top, px, plot.bottom, theme.grid, 1.0, Some("3 3")));
    }
    for y in chart.y_axis.ticks() {
        let py = sy.to_px(y);
        svg.push_str(&line_el(plot.left, py, plot.right, py, theme.grid, 1.0, Some("3 3")));
    }
}

fn push_line(svg: &mut String, s: &Series, sx: &LinearScale, sy: &LinearScale) {
    if s.data_xy.len() < 2 {
        return;
    }
    let points = s
        .data_xy
        .iter()
        .map(|&(x, y)| format!("{:.2},{:.2}", sx.to_px(x), sy.to_px(y)))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" points=\"{points}\"/>",
        s.color.css(),
        s.stroke_width,
    ));
}

fn push_area(svg: &mut String, s: &Series, index: usize, sx: &LinearScale, sy: &LinearScale) {
    if s.data_xy.len() < 2 {
        return;
    }
    let base_py = sy.to_px(s.baseline);
    let mut d = format!("M {:.2},{:.2}", sx.to_px(s.data_xy[0].0), base_py);
    for &(x, y) in &s.data_xy {
        d.push_str(&format!(" L {:.2},{:.2}", sx.to_px(x), sy.to_px(y)));
    }
    d.push_str(&format!(" L {:.2},{:.2} Z", sx.to_px(s.data_xy[s.data_xy.len() - 1].0), base_py));

    let fill = if s.gradient.is_some() {
        format!("url(#area-fill-{index})")
    } else {
        s.color.css()
    };
    svg.push_str(&format!("<path d=\"{d}\" fill=\"{fill}\" stroke=\"none\"/>"));
}

fn push_ref_line(
    svg: &mut String,
    plot: &RectF32,
    line: &crate::annotate::RefLine,
    sx: &LinearScale,
    sy: &LinearScale,
    draw_labels: bool,
) {
    let dash = line.dash.map(|d| format!("{} {}", d[0], d[1]));
    match line.at {
        RefValue::Horizontal(y) => {
            let py = sy.to_px(y);
            svg.push_str(&line_el(plot.left, py, plot.right, py, line.color, line.stroke_width, dash.as_deref()));
            if draw_labels && !line.label.is_empty() {
                match line.label_pos {
                    LabelPos::Right => svg.push_str(&text_el(&line.label, plot.right + 6.0, py + 4.0, 11.0, line.color, false, "start")),
                    LabelPos::Top => svg.push_str(&text_el(&line.label, plot.center_x(), py - 6.0, 11.0, line.color, false, "middle")),
                }
            }
        }
        RefValue::Vertical(x) => {
            let px = sx.to_px(x);
            svg.push_str(&line_el(px, plot.top, px, plot.bottom, line.color, line.stroke_width, dash.as_deref()));
            if draw_labels && !line.label.is_empty() {
                match line.label_pos {
                    LabelPos::Top => svg.push_str(&text_el(&line.label, px, plot.top - 8.0, 14.0, Rgba::rgb(0, 0, 0), true, "middle")),
                    LabelPos::Right => svg.push_str(&text_el(&line.label, px + 6.0, plot.top + 14.0, 11.0, line.color, false, "start")),
                }
            }
        }
    }
}

fn push_header(svg: &mut String, chart: &Chart, theme: &Theme) {
    let x = PANEL_MARGIN + PANEL_PAD;
    if let Some(title) = &chart.title {
        svg.push_str(&text_el(title, x, PANEL_MARGIN + 38.0, 26.0, theme.title, true, "start"));
    }
    if let Some(subtitle) = &chart.subtitle {
        svg.push_str(&text_el(subtitle, x, PANEL_MARGIN + 68.0, 16.0, theme.subtitle, false, "start"));
    }
}

fn fmt_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

fn push_tick_labels(svg: &mut String, plot: &RectF32, chart: &Chart, sx: &LinearScale, sy: &LinearScale, theme: &Theme) {
    for x in chart.x_axis.ticks() {
        let px = sx.to_px(x);
        svg.push_str(&text_el(&fmt_tick(x), px, plot.bottom + 18.0, 12.0, theme.tick_label, false, "middle"));
    }
    for y in chart.y_axis.ticks() {
        let py = sy.to_px(y);
        svg.push_str(&text_el(&fmt_tick(y), plot.left - 8.0, py + 4.0, 12.0, theme.tick_label, false, "end"));
    }
}

fn push_axis_labels(svg: &mut String, viewport: &RectF32, plot: &RectF32, chart: &Chart, theme: &Theme) {
    svg.push_str(&text_el(
        &chart.x_axis.label,
        plot.center_x(),
        plot.bottom + 44.0,
        14.0,
        theme.axis_label,
        false,
        "middle",
    ));

    let cx = viewport.left + 22.0;
    let cy = plot.center_y();
    svg.push_str(&format!(
        "<text x=\"{cx:.1}\" y=\"{cy:.1}\" font-family=\"sans-serif\" font-size=\"14\" fill=\"{}\" \
         text-anchor=\"middle\" transform=\"rotate(-90 {cx:.1} {cy:.1})\">{}</text>",
        theme.axis_label.css(),
        escape_xml(&chart.y_axis.label),
    ));
}

fn push_annotation(svg: &mut String, viewport: &RectF32, a: &crate::annotate::TextAnnotation) {
    let x = viewport.left + a.fx * viewport.width();
    let mut y = viewport.top + a.fy * viewport.height();
    let dy = viewport.height() * 0.03;
    for (i, line) in a.lines.iter().enumerate() {
        let (size, bold) = if i == 0 { (13.0, true) } else { (12.0, false) };
        svg.push_str(&text_el(line, x, y, size, a.color, bold, "start"));
        y += dy;
    }
}

fn push_legend(svg: &mut String, plot: &RectF32, legend_y: f32, series: &[Series], theme: &Theme) {
    if series.is_empty() {
        return;
    }
    const SWATCH: f32 = 16.0;
    const GAP: f32 = 28.0;
    let size = 13.0;

    let mut total = 0.0;
    for s in series {
        total += SWATCH + 6.0 + estimate_width(&s.name, size) + GAP;
    }
    total -= GAP;

    let mut x = plot.center_x() - total * 0.5;
    for s in series {
        let swatch_color = match s.kind {
            SeriesKind::Line => s.color,
            SeriesKind::Area => s.gradient.map(|g| g.bottom).unwrap_or(s.color),
        };
        let (sy0, sh) = match s.kind {
            SeriesKind::Line => (legend_y - 6.0, 4.0),
            SeriesKind::Area => (legend_y - 10.0, 12.0),
        };
        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{sy0:.1}\" width=\"{SWATCH}\" height=\"{sh}\" fill=\"{}\"/>",
            swatch_color.css()
        ));
        x += SWATCH + 6.0;
        svg.push_str(&text_el(&s.name, x, legend_y, size, theme.axis_label, false, "start"));
        x += estimate_width(&s.name, size) + GAP;
    }
}

fn push_footnote(svg: &mut String, note: &Footnote, rect: &RectF32, theme: &Theme) {
    svg.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"4\" fill=\"{}\"/>",
        rect.left,
        rect.top,
        rect.width(),
        rect.height(),
        note.fill.css()
    ));
    svg.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"4\" height=\"{:.1}\" fill=\"{}\"/>",
        rect.left,
        rect.top,
        rect.height(),
        note.accent.css()
    ));

    let x = rect.left + 14.0;
    svg.push_str(&text_el(&note.heading, x, rect.top + 22.0, 13.0, note.accent, true, "start"));

    let max_chars = ((rect.width() - 28.0) / 6.2).max(20.0) as usize;
    let mut y = rect.top + 40.0;
    for line in wrap_text(&note.body, max_chars) {
        svg.push_str(&text_el(&line, x, y, 12.0, theme.axis_label, false, "start"));
        y += 16.0;
    }
}

/// Invisible hover targets carrying the tooltip strings; `<title>` renders as
/// a native tooltip in browsers.
fn push_tooltips(svg: &mut String, series: &[Series], sx: &LinearScale, sy: &LinearScale) {
    for s in series {
        if s.kind != SeriesKind::Line {
            continue;
        }
        for &(x, y) in &s.data_xy {
            let title = format!(
                "{}\n{}: {}",
                format::gdp_label(x),
                s.name,
                format::value_with_unit(&s.name, y)
            );
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"5\" fill=\"transparent\"><title>{}</title></circle>",
                sx.to_px(x),
                sy.to_px(y),
                escape_xml(&title),
            ));
        }
    }
}

// ---- element helpers --------------------------------------------------------

fn line_el(x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, width: f32, dash: Option<&str>) -> String {
    let dash_attr = dash
        .map(|d| format!(" stroke-dasharray=\"{d}\""))
        .unwrap_or_default();
    format!(
        "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" stroke=\"{}\" stroke-width=\"{width}\"{dash_attr}/>",
        color.css()
    )
}

fn text_el(text: &str, x: f32, y: f32, size: f32, color: Rgba, bold: bool, anchor: &str) -> String {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    format!(
        "<text x=\"{x:.1}\" y=\"{y:.1}\" font-family=\"sans-serif\" font-size=\"{size}\" fill=\"{}\" text-anchor=\"{anchor}\"{weight}>{}</text>",
        color.css(),
        escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Greedy word wrap at a character budget per line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Rough sans-serif width estimate; SVG viewers do the real layout.
fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}
