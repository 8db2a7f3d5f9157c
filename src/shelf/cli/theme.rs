//! # Themed Template Rendering
//!
//! Output is produced by minijinja templates that reference **named styles** through a
//! `style` filter: `{{ product.name | style("name") }}`. The names resolve against a
//! [`Theme`], a map of `console::Style` values.
//!
//! When color is off (piped output, `--no-color`, `TERM=dumb`) the filter returns the
//! text unchanged. Unknown style names are flagged in both modes with
//! [`MISSING_STYLE_INDICATOR`] so template typos show up immediately.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// True when stdout can show colors and the user did not opt out.
pub fn color_enabled(no_color: bool) -> bool {
    !no_color && Term::stdout().features().colors_supported()
}

/// Renders `template` against `data`, resolving `style(...)` through `theme`.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    let theme = Arc::new(theme.clone());
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });

    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
