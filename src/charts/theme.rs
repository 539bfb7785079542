//! Chart colors per style variant.

use crate::data::{HexColor, StyleVariant};
use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy)]
pub struct ChartTheme {
    pub background: RGBColor,
    /// Axis lines, tick labels and axis titles.
    pub foreground: RGBColor,
    /// `None` hides the horizontal grid.
    pub grid: Option<RGBColor>,
    pub axis_width: u32,
    pub bar_outline: RGBColor,
    pub legend_fill: RGBColor,
    pub legend_border: RGBColor,
}

impl ChartTheme {
    pub fn for_style(style: StyleVariant) -> Self {
        match style {
            StyleVariant::Default => Self {
                background: RGBColor(255, 255, 255),
                foreground: RGBColor(0x33, 0x33, 0x33),
                grid: Some(RGBColor(0xe0, 0xe0, 0xe0)),
                axis_width: 4,
                bar_outline: RGBColor(255, 255, 255),
                legend_fill: RGBColor(255, 255, 255),
                legend_border: RGBColor(0xe5, 0xe7, 0xeb),
            },
            StyleVariant::Minimal => Self {
                background: RGBColor(255, 255, 255),
                foreground: RGBColor(0x33, 0x33, 0x33),
                grid: None,
                axis_width: 1,
                bar_outline: RGBColor(255, 255, 255),
                legend_fill: RGBColor(255, 255, 255),
                legend_border: RGBColor(0xe5, 0xe7, 0xeb),
            },
            StyleVariant::Dark => Self {
                background: RGBColor(0x1f, 0x29, 0x37),
                foreground: RGBColor(0xe5, 0xe7, 0xeb),
                grid: Some(RGBColor(0x37, 0x41, 0x51)),
                axis_width: 3,
                bar_outline: RGBColor(0x1f, 0x29, 0x37),
                legend_fill: RGBColor(0x11, 0x18, 0x27),
                legend_border: RGBColor(0x4b, 0x55, 0x63),
            },
        }
    }
}

pub fn bar_color(color: HexColor) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}
