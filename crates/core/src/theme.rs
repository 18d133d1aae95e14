//! Shared chart styling
//!
//! One palette feeds all four charts so the site reads as a single visual
//! system. Mark fills are resolved here; text styling lives in the
//! dashboard stylesheet.

use serde::Serialize;

/// Named colors shared by the chart builders. The default is the site
/// palette; tests construct it the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Default bar color
    pub primary: &'static str,
    /// Second-tier emphasis (75"/85" bars, fourth donut slice)
    pub secondary: &'static str,
    /// Strong emphasis (55"/65" bars)
    pub accent: &'static str,
    /// Interactive highlight, used by the stylesheet
    pub highlight: &'static str,
    /// Axis caption color, used by the stylesheet
    pub text: &'static str,
    /// LCD/LED family color
    pub lcd: &'static str,
    /// OLED family color
    pub oled: &'static str,
    /// Outline between donut slices; matches the page background
    pub slice_stroke: &'static str,
    /// Fixed ordinal palette for the brand chart, cycled past twelve
    pub brand_palette: [&'static str; 12],
}

impl Default for Theme {
    fn default() -> Theme {
        Self {
            primary: "#e9c46a",
            secondary: "#f4a261",
            accent: "#e76f51",
            highlight: "#2ec4b6",
            text: "#a8dadc",
            lcd: "#4cc9f0",
            oled: "#f77f00",
            slice_stroke: "#1a1a2e",
            brand_palette: [
                "#e9c46a", "#f4a261", "#e76f51", "#2ec4b6", "#4cc9f0", "#9b5de5", "#f15bb5",
                "#fee440", "#00bbf9", "#00f5d4", "#9b5de5", "#f72585",
            ],
        }
    }
}

impl Theme {
    /// Brand-chart color for the bucket at `index`, cycling the palette
    /// when there are more buckets than colors.
    pub fn brand_color(&self, index: usize) -> &'static str {
        self.brand_palette[index % self.brand_palette.len()]
    }

    /// Donut palette keyed to technology order.
    pub fn tech_palette(&self) -> [&'static str; 4] {
        [self.lcd, self.oled, self.secondary, self.primary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_palette_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.brand_color(0), "#e9c46a");
        assert_eq!(theme.brand_color(11), "#f72585");
        assert_eq!(theme.brand_color(12), theme.brand_color(0));
    }
}
