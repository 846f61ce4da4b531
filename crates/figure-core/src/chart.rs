// File: crates/figure-core/src/chart.rs
// Summary: Chart struct, shared band layout, and headless PNG rendering via Skia CPU raster surfaces.

use skia_safe as skia;

use crate::annotate::{LabelPos, RefLine, RefValue, TextAnnotation};
use crate::axis::Axis;
use crate::error::RenderError;
use crate::geometry::RectF32;
use crate::scale::LinearScale;
use crate::series::{Series, SeriesKind};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, Rgba, HEIGHT, WIDTH};

/// Page padding around the white panel.
pub(crate) const PANEL_MARGIN: f32 = 12.0;
/// Inner padding between the panel edge and its content.
pub(crate) const PANEL_PAD: f32 = 18.0;
/// Height of the title/subtitle band when present.
pub(crate) const HEADER_H: f32 = 84.0;
/// Footer panel row heights: side-by-side and full-width.
pub(crate) const PANEL_ROW_H: f32 = 88.0;
pub(crate) const PANEL_ROW_FULL_H: f32 = 104.0;
pub(crate) const PANEL_ROW_GAP: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable for pixel-deterministic output across platforms (skips all text).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Explanatory panel drawn below the chart: tinted box with a colored accent
/// bar, a bold heading, and wrapped body text.
#[derive(Clone, Debug)]
pub struct Footnote {
    pub heading: String,
    pub body: String,
    pub accent: Rgba,
    pub fill: Rgba,
}

impl Footnote {
    pub fn new(heading: impl Into<String>, body: impl Into<String>, accent: Rgba, fill: Rgba) -> Self {
        Self { heading: heading.into(), body: body.into(), accent, fill }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub ref_lines: Vec<RefLine>,
    pub annotations: Vec<TextAnnotation>,
    pub footnotes: Vec<Footnote>,
}

/// Resolved pixel bands for one render pass. Shared by the PNG and SVG backends.
pub(crate) struct Layout {
    /// Chart band including axis insets; text annotations position by
    /// fractions of this rect.
    pub viewport: RectF32,
    /// Data area.
    pub plot: RectF32,
    /// Baseline for the legend row, below the x-axis label.
    pub legend_y: f32,
    /// Footnote index paired with its panel rect.
    pub panels: Vec<(usize, RectF32)>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: None,
            series: Vec::new(),
            x_axis: Axis::new("X", 0.0, 10.0),
            y_axis: Axis::new("Y", 0.0, 100.0),
            ref_lines: Vec::new(),
            annotations: Vec::new(),
            footnotes: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_ref_line(&mut self, line: RefLine) {
        self.ref_lines.push(line);
    }

    pub fn add_annotation(&mut self, annotation: TextAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn add_footnote(&mut self, footnote: Footnote) {
        self.footnotes.push(footnote);
    }

    /// Fit both axes to the data with a fractional margin. Area baselines
    /// count toward the Y extent.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
            if s.kind == SeriesKind::Area {
                y_min = y_min.min(s.baseline);
                y_max = y_max.max(s.baseline);
            }
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * margin_frac;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Split the canvas into header, chart, and footer bands and place the
    /// footnote panels (two per row; a lone panel in a row spans full width).
    pub(crate) fn layout(&self, opts: &RenderOptions) -> Layout {
        let w = opts.width as f32;
        let h = opts.height as f32;
        let header = if self.title.is_some() || self.subtitle.is_some() { HEADER_H } else { 0.0 };

        let rows: Vec<&[Footnote]> = self.footnotes.chunks(2).collect();
        let mut footer_h = 0.0;
        for row in &rows {
            footer_h += if row.len() == 2 { PANEL_ROW_H } else { PANEL_ROW_FULL_H };
            footer_h += PANEL_ROW_GAP;
        }
        if footer_h > 0.0 {
            footer_h += PANEL_PAD - PANEL_ROW_GAP;
        }

        let viewport = RectF32::from_ltrb(
            PANEL_MARGIN,
            PANEL_MARGIN + header,
            w - PANEL_MARGIN,
            h - PANEL_MARGIN - footer_h,
        );
        let plot = viewport.inset(
            opts.insets.left as f32,
            opts.insets.top as f32,
            opts.insets.right as f32,
            opts.insets.bottom as f32,
        );
        let legend_y = plot.bottom + 70.0;

        let mut panels = Vec::new();
        let inner_left = viewport.left + PANEL_PAD;
        let inner_right = viewport.right - PANEL_PAD;
        let mut y = viewport.bottom + PANEL_ROW_GAP;
        let mut idx = 0usize;
        for row in &rows {
            if row.len() == 2 {
                let half = (inner_right - inner_left - PANEL_ROW_GAP) * 0.5;
                panels.push((idx, RectF32::from_ltrb(inner_left, y, inner_left + half, y + PANEL_ROW_H)));
                panels.push((idx + 1, RectF32::from_ltrb(inner_right - half, y, inner_right, y + PANEL_ROW_H)));
                y += PANEL_ROW_H + PANEL_ROW_GAP;
            } else {
                panels.push((idx, RectF32::from_ltrb(inner_left, y, inner_right, y + PANEL_ROW_FULL_H)));
                y += PANEL_ROW_FULL_H + PANEL_ROW_GAP;
            }
            idx += row.len();
        }

        Layout { viewport, plot, legend_y, panels }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        tracing::debug!(
            width = opts.width,
            height = opts.height,
            series = self.series.len(),
            "rendering chart to PNG"
        );
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw_on(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and read back an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw_on(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels { width: opts.width, height: opts.height });
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render the chart as an SVG document string.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        crate::svg::render(self, opts)
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let markup = self.render_to_svg_string(opts);
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, markup)?;
        Ok(())
    }

    // ---- raster pipeline ----------------------------------------------------

    fn draw_on(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let layout = self.layout(opts);
        let theme = &opts.theme;

        canvas.clear(theme.background.to_skia());
        draw_panel(canvas, opts, theme.panel);

        let sx = LinearScale::across(&self.x_axis, layout.plot.left, layout.plot.right);
        let sy = LinearScale::down(&self.y_axis, layout.plot.top, layout.plot.bottom);

        draw_grid(canvas, &layout.plot, &self.x_axis, &self.y_axis, &sx, &sy, theme.grid);

        for s in &self.series {
            match s.kind {
                SeriesKind::Area => draw_area_series(canvas, &sx, &sy, s),
                SeriesKind::Line => draw_line_series(canvas, &sx, &sy, s),
            }
        }

        for line in &self.ref_lines {
            draw_ref_line_stroke(canvas, &layout.plot, &sx, &sy, line);
        }

        draw_axis_lines(canvas, &layout.plot, theme.axis_line);

        if !opts.draw_labels {
            return;
        }

        let shaper = TextShaper::new();
        draw_header(canvas, &shaper, self, theme);
        draw_tick_labels(canvas, &shaper, &layout.plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);
        draw_axis_labels(canvas, &shaper, &layout, &self.x_axis, &self.y_axis, theme);
        for line in &self.ref_lines {
            draw_ref_line_label(canvas, &shaper, &layout.plot, &sx, &sy, line);
        }
        for a in &self.annotations {
            draw_annotation(canvas, &shaper, &layout.viewport, a);
        }
        draw_legend(canvas, &shaper, &layout, &self.series, theme);
        for (idx, rect) in &layout.panels {
            draw_footnote(canvas, &shaper, &self.footnotes[*idx], rect, theme);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color.to_skia());
    paint
}

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color.to_skia());
    paint
}

fn draw_panel(canvas: &skia::Canvas, opts: &RenderOptions, color: Rgba) {
    let rect = skia::Rect::from_ltrb(
        PANEL_MARGIN,
        PANEL_MARGIN,
        opts.width as f32 - PANEL_MARGIN,
        opts.height as f32 - PANEL_MARGIN,
    );
    canvas.draw_round_rect(rect, 10.0, 10.0, &fill_paint(color));
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectF32,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    color: Rgba,
) {
    let mut paint = stroke_paint(color, 1.0);
    paint.set_path_effect(skia::dash_path_effect::new(&[3.0, 3.0], 0.0));

    for x in x_axis.ticks() {
        let px = sx.to_px(x);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for y in y_axis.ticks() {
        let py = sy.to_px(y);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, plot: &RectF32, color: Rgba) {
    let paint = stroke_paint(color, 1.5);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    canvas.draw_path(&path, &stroke_paint(series.color, series.stroke_width));
}

fn draw_area_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let base_py = sy.to_px(series.baseline);
    let mut path = skia::Path::new();
    path.move_to((sx.to_px(data[0].0), base_py));
    for &(x, y) in data.iter() {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }
    path.line_to((sx.to_px(data[data.len() - 1].0), base_py));
    path.close();

    let mut paint = fill_paint(series.color);
    if let Some(g) = series.gradient {
        // Gradient spans the vertical extent the area actually covers.
        let mut top = base_py;
        let mut bottom = base_py;
        for &(_, y) in data.iter() {
            let py = sy.to_px(y);
            top = top.min(py);
            bottom = bottom.max(py);
        }
        let colors = [g.top.to_skia(), g.bottom.to_skia()];
        let shader = skia::Shader::linear_gradient(
            (skia::Point::new(0.0, top), skia::Point::new(0.0, bottom.max(top + 1.0))),
            skia::gradient_shader::GradientShaderColors::Colors(&colors),
            Some(&[0.05f32, 0.95][..]),
            skia::TileMode::Clamp,
            None,
            None,
        );
        paint.set_shader(shader);
    }
    canvas.draw_path(&path, &paint);
}

fn draw_ref_line_stroke(
    canvas: &skia::Canvas,
    plot: &RectF32,
    sx: &LinearScale,
    sy: &LinearScale,
    line: &RefLine,
) {
    let mut paint = stroke_paint(line.color, line.stroke_width);
    if let Some(d) = line.dash {
        paint.set_path_effect(skia::dash_path_effect::new(&d, 0.0));
    }
    match line.at {
        RefValue::Horizontal(y) => {
            let py = sy.to_px(y);
            canvas.draw_line((plot.left, py), (plot.right, py), &paint);
        }
        RefValue::Vertical(x) => {
            let px = sx.to_px(x);
            canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
        }
    }
}

fn draw_ref_line_label(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectF32,
    sx: &LinearScale,
    sy: &LinearScale,
    line: &RefLine,
) {
    if line.label.is_empty() {
        return;
    }
    match (line.at, line.label_pos) {
        (RefValue::Horizontal(y), LabelPos::Right) => {
            let py = sy.to_px(y);
            shaper.draw_left(canvas, &line.label, plot.right + 6.0, py + 4.0, 11.0, line.color.to_skia(), false);
        }
        (RefValue::Horizontal(y), LabelPos::Top) => {
            let py = sy.to_px(y);
            shaper.draw_center(canvas, &line.label, plot.center_x(), py - 6.0, 11.0, line.color.to_skia(), false);
        }
        (RefValue::Vertical(x), LabelPos::Top) => {
            let px = sx.to_px(x);
            shaper.draw_center(canvas, &line.label, px, plot.top - 8.0, 14.0, Rgba::rgb(0, 0, 0).to_skia(), true);
        }
        (RefValue::Vertical(x), LabelPos::Right) => {
            let px = sx.to_px(x);
            shaper.draw_left(canvas, &line.label, px + 6.0, plot.top + 14.0, 11.0, line.color.to_skia(), false);
        }
    }
}

fn draw_annotation(canvas: &skia::Canvas, shaper: &TextShaper, viewport: &RectF32, a: &TextAnnotation) {
    let x = viewport.left + a.fx * viewport.width();
    let mut y = viewport.top + a.fy * viewport.height();
    let dy = viewport.height() * 0.03;
    for (i, line) in a.lines.iter().enumerate() {
        let (size, bold) = if i == 0 { (13.0, true) } else { (12.0, false) };
        shaper.draw_left(canvas, line, x, y, size, a.color.to_skia(), bold);
        y += dy;
    }
}

fn draw_header(canvas: &skia::Canvas, shaper: &TextShaper, chart: &Chart, theme: &Theme) {
    let x = PANEL_MARGIN + PANEL_PAD;
    if let Some(title) = &chart.title {
        shaper.draw_left(canvas, title, x, PANEL_MARGIN + 38.0, 26.0, theme.title.to_skia(), true);
    }
    if let Some(subtitle) = &chart.subtitle {
        shaper.draw_left(canvas, subtitle, x, PANEL_MARGIN + 68.0, 16.0, theme.subtitle.to_skia(), false);
    }
}

fn fmt_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectF32,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    for x in x_axis.ticks() {
        let px = sx.to_px(x);
        shaper.draw_center(canvas, &fmt_tick(x), px, plot.bottom + 18.0, 12.0, theme.tick_label.to_skia(), false);
    }
    for y in y_axis.ticks() {
        let py = sy.to_px(y);
        shaper.draw_right(canvas, &fmt_tick(y), plot.left - 8.0, py + 4.0, 12.0, theme.tick_label.to_skia(), false);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &Layout,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let plot = &layout.plot;
    shaper.draw_center(canvas, &x_axis.label, plot.center_x(), plot.bottom + 44.0, 14.0, theme.axis_label.to_skia(), false);

    // Rotated Y label along the left edge of the viewport.
    let cx = layout.viewport.left + 22.0;
    let cy = plot.center_y();
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
    shaper.draw_center(canvas, &y_axis.label, cx, cy, 14.0, theme.axis_label.to_skia(), false);
    canvas.restore();
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, layout: &Layout, series: &[Series], theme: &Theme) {
    if series.is_empty() {
        return;
    }
    const SWATCH: f32 = 16.0;
    const GAP: f32 = 28.0;
    let size = 13.0;

    let mut total = 0.0;
    for s in series {
        total += SWATCH + 6.0 + shaper.measure_width(&s.name, size, false) + GAP;
    }
    total -= GAP;

    let mut x = layout.plot.center_x() - total * 0.5;
    let y = layout.legend_y;
    for s in series {
        match s.kind {
            SeriesKind::Line => {
                let rect = skia::Rect::from_ltrb(x, y - 6.0, x + SWATCH, y - 2.0);
                canvas.draw_rect(rect, &fill_paint(s.color));
            }
            SeriesKind::Area => {
                let rect = skia::Rect::from_ltrb(x + 2.0, y - 10.0, x + SWATCH - 2.0, y + 2.0);
                canvas.draw_rect(rect, &fill_paint(s.gradient.map(|g| g.bottom).unwrap_or(s.color)));
            }
        }
        x += SWATCH + 6.0;
        shaper.draw_left(canvas, &s.name, x, y, size, theme.axis_label.to_skia(), false);
        x += shaper.measure_width(&s.name, size, false) + GAP;
    }
}

fn draw_footnote(canvas: &skia::Canvas, shaper: &TextShaper, note: &Footnote, rect: &RectF32, theme: &Theme) {
    let box_rect = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
    canvas.draw_round_rect(box_rect, 4.0, 4.0, &fill_paint(note.fill));

    let accent = skia::Rect::from_ltrb(rect.left, rect.top, rect.left + 4.0, rect.bottom);
    canvas.draw_rect(accent, &fill_paint(note.accent));

    let x = rect.left + 14.0;
    shaper.draw_left(canvas, &note.heading, x, rect.top + 22.0, 13.0, note.accent.to_skia(), true);
    shaper.draw_wrapped(
        canvas,
        &note.body,
        x,
        rect.top + 30.0,
        12.0,
        theme.axis_label.to_skia(),
        false,
        rect.width() - 28.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn layout_without_header_or_footer() {
        let chart = Chart::new();
        let l = chart.layout(&opts());
        assert_eq!(l.viewport.top, PANEL_MARGIN);
        assert!(l.panels.is_empty());
        assert!(l.plot.width() > 0.0 && l.plot.height() > 0.0);
    }

    #[test]
    fn layout_reserves_header_and_footer_bands() {
        let mut chart = Chart::new().with_title("T", "S");
        chart.add_footnote(Footnote::new("a", "b", Rgba::rgb(0, 0, 0), Rgba::rgb(255, 255, 255)));
        chart.add_footnote(Footnote::new("c", "d", Rgba::rgb(0, 0, 0), Rgba::rgb(255, 255, 255)));
        chart.add_footnote(Footnote::new("e", "f", Rgba::rgb(0, 0, 0), Rgba::rgb(255, 255, 255)));
        let l = chart.layout(&opts());

        assert_eq!(l.viewport.top, PANEL_MARGIN + HEADER_H);
        assert_eq!(l.panels.len(), 3);
        // first two share a row, third spans full width below them
        let (_, a) = l.panels[0];
        let (_, b) = l.panels[1];
        let (_, c) = l.panels[2];
        assert_eq!(a.top, b.top);
        assert!(c.top > a.top);
        assert!(c.width() > a.width());
        // panels sit below the chart band
        assert!(a.top >= l.viewport.bottom);
    }

    #[test]
    fn autoscale_covers_data_and_baseline() {
        let mut chart = Chart::new();
        chart.add_series(Series::line("a", vec![(0.0, 1.0), (5.0, 3.0)]));
        chart.add_series(Series::area("z", vec![(0.0, -2.0), (5.0, -1.0)]).with_baseline(0.0));
        chart.autoscale_axes(0.0);
        assert!(chart.x_axis.min <= 0.0 + 1e-9);
        assert!(chart.x_axis.max >= 5.0 - 1e-9);
        assert!(chart.y_axis.min <= -2.0 + 1e-9);
        assert!(chart.y_axis.max >= 3.0 - 1e-9);
    }
}
