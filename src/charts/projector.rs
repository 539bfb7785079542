//! Chart Projector
//! Turns the editor stores into a render-ready scene.

use crate::data::{AxisConfigStore, DataPointStore, HexColor, LabelOffset, StyleVariant};

/// One bar as the renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBar {
    pub category_label: String,
    pub numeric_value: f64,
    pub color: HexColor,
}

impl SeriesBar {
    /// Text drawn above the bar.
    pub fn value_label(&self) -> String {
        self.numeric_value.to_string()
    }
}

pub type RenderSeries = Vec<SeriesBar>;

/// Axis label text, font size and displacement.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub size: u32,
    pub offset: LabelOffset,
}

/// Everything except the bars themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDirectives {
    /// Configured bounds, unmodified.
    pub y_domain: (f64, f64),
    pub x_label: AxisLabel,
    pub y_label: AxisLabel,
    pub style: StyleVariant,
}

/// Largest magnitude the plotted range may reach. Keeps `hi - lo` and the
/// backend's tick arithmetic finite.
pub const Y_SPAN_LIMIT: f64 = 1e300;

/// Smallest width of a plotted range relative to its magnitude. Narrower
/// ranges would put tick steps below the float resolution at that magnitude.
const MIN_RELATIVE_SPAN: f64 = 1e-9;

impl RenderDirectives {
    /// Finite, strictly ascending range usable by the plotting backend.
    ///
    /// Inverted bounds are swapped, both ends are clamped to
    /// [`Y_SPAN_LIMIT`], and a collapsed range is widened upward.
    pub fn y_span(&self) -> (f64, f64) {
        let (a, b) = self.y_domain;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = lo.clamp(-Y_SPAN_LIMIT, Y_SPAN_LIMIT);
        let hi = hi.clamp(-Y_SPAN_LIMIT, Y_SPAN_LIMIT);

        let magnitude = lo.abs().max(hi.abs()).max(1.0);
        if hi - lo > magnitude * MIN_RELATIVE_SPAN {
            (lo, hi)
        } else {
            // Widening by 1e-6 of the magnitude clears the threshold above.
            (lo, lo + (lo.abs() * 1e-6).max(1.0))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub series: RenderSeries,
    pub directives: RenderDirectives,
}

/// Derives [`ChartScene`]s from editor state.
pub struct ChartProjector;

impl ChartProjector {
    /// Parse the leading number of the raw value text, ignoring whatever
    /// trails it: `"12px"` is 12 and `"1,5"` is 1. Text without a leading
    /// number, or one that overflows, becomes 0.
    pub fn coerce_value(raw: &str) -> f64 {
        numeric_prefix(raw.trim_start())
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Points with a blank label or value are left out; order is kept.
    pub fn project_series(points: &DataPointStore) -> RenderSeries {
        points
            .points()
            .iter()
            .filter(|p| !p.label.trim().is_empty() && !p.value.trim().is_empty())
            .map(|p| SeriesBar {
                category_label: p.label.clone(),
                numeric_value: Self::coerce_value(&p.value),
                color: p.color,
            })
            .collect()
    }

    pub fn directives(axis: &AxisConfigStore) -> RenderDirectives {
        let config = axis.config();
        RenderDirectives {
            y_domain: (config.y_min, config.y_max),
            x_label: AxisLabel {
                text: config.x_label.clone(),
                size: config.x_label_size,
                offset: config.x_label_offset,
            },
            y_label: AxisLabel {
                text: config.y_label.clone(),
                size: config.y_label_size,
                offset: config.y_label_offset,
            },
            style: config.style,
        }
    }

    pub fn project(points: &DataPointStore, axis: &AxisConfigStore) -> ChartScene {
        ChartScene {
            series: Self::project_series(points),
            directives: Self::directives(axis),
        }
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
/// Empty when no mantissa digit is present. An exponent marker without
/// digits after it is not part of the number.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}
