// File: crates/figure-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Page background behind the panel.
    pub background: Rgba,
    /// Card the chart is drawn on.
    pub panel: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick_label: Rgba,
    pub title: Rgba,
    pub subtitle: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(245, 245, 245),
            panel: Rgba::rgb(255, 255, 255),
            grid: Rgba::rgb(224, 224, 224),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            tick_label: Rgba::rgb(100, 100, 110),
            title: Rgba::rgb(0, 102, 204),
            subtitle: Rgba::rgb(102, 102, 102),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            panel: Rgba::rgb(28, 28, 32),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick_label: Rgba::rgb(150, 150, 160),
            title: Rgba::rgb(120, 180, 255),
            subtitle: Rgba::rgb(160, 160, 170),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
