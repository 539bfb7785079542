//! Axis Configuration Store
//! Axis labels, label sizes and offsets, y-range bounds and chart style.

use std::fmt;
use tracing::debug;

pub const LABEL_SIZE_MIN: u32 = 8;
pub const LABEL_SIZE_MAX: u32 = 24;
pub const LABEL_SIZE_STEP: u32 = 2;
pub const DEFAULT_LABEL_SIZE: u32 = 12;
pub const OFFSET_STEP: f64 = 5.0;
pub const DEFAULT_Y_MIN: f64 = 0.0;
pub const DEFAULT_Y_MAX: f64 = 100.0;

/// Cosmetic chart theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleVariant {
    #[default]
    Default,
    Minimal,
    Dark,
}

impl StyleVariant {
    pub const ALL: [StyleVariant; 3] = [StyleVariant::Default, StyleVariant::Minimal, StyleVariant::Dark];

    pub fn name(&self) -> &'static str {
        match self {
            StyleVariant::Default => "Default",
            StyleVariant::Minimal => "Minimal",
            StyleVariant::Dark => "Dark",
        }
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label displacement from its base position, in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelOffset {
    pub dx: f64,
    pub dy: f64,
}

/// Direction of a single nudge button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Right,
    Up,
    Down,
}

impl LabelOffset {
    pub fn nudged(self, nudge: Nudge) -> Self {
        match nudge {
            Nudge::Left => Self { dx: self.dx - OFFSET_STEP, ..self },
            Nudge::Right => Self { dx: self.dx + OFFSET_STEP, ..self },
            Nudge::Up => Self { dy: self.dy - OFFSET_STEP, ..self },
            Nudge::Down => Self { dy: self.dy + OFFSET_STEP, ..self },
        }
    }
}

/// Which axis label a control refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub x_label: String,
    pub y_label: String,
    pub y_min: f64,
    pub y_max: f64,
    pub style: StyleVariant,
    pub x_label_size: u32,
    pub y_label_size: u32,
    pub x_label_offset: LabelOffset,
    pub y_label_offset: LabelOffset,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_label: String::new(),
            y_label: String::new(),
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
            style: StyleVariant::Default,
            x_label_size: DEFAULT_LABEL_SIZE,
            y_label_size: DEFAULT_LABEL_SIZE,
            x_label_offset: LabelOffset::default(),
            y_label_offset: LabelOffset::default(),
        }
    }
}

/// Edit emitted by the axis controls.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisEdit {
    SetLabel(Axis, String),
    GrowLabel(Axis),
    ShrinkLabel(Axis),
    SetYMin(f64),
    SetYMax(f64),
    SetStyle(StyleVariant),
    Nudge(Axis, Nudge),
    Reset,
}

/// Single session-scoped axis configuration.
#[derive(Debug, Clone, Default)]
pub struct AxisConfigStore {
    config: AxisConfig,
}

impl AxisConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn apply(&mut self, edit: AxisEdit) {
        match edit {
            AxisEdit::SetLabel(axis, text) => self.set_label(axis, text),
            AxisEdit::GrowLabel(axis) => self.grow_label(axis),
            AxisEdit::ShrinkLabel(axis) => self.shrink_label(axis),
            AxisEdit::SetYMin(v) => self.set_y_min(v),
            AxisEdit::SetYMax(v) => self.set_y_max(v),
            AxisEdit::SetStyle(style) => self.set_style(style),
            AxisEdit::Nudge(axis, nudge) => self.nudge(axis, nudge),
            AxisEdit::Reset => self.reset(),
        }
    }

    pub fn set_label(&mut self, axis: Axis, text: String) {
        match axis {
            Axis::X => self.config.x_label = text,
            Axis::Y => self.config.y_label = text,
        }
    }

    fn label_size_mut(&mut self, axis: Axis) -> &mut u32 {
        match axis {
            Axis::X => &mut self.config.x_label_size,
            Axis::Y => &mut self.config.y_label_size,
        }
    }

    pub fn grow_label(&mut self, axis: Axis) {
        let size = self.label_size_mut(axis);
        *size = (*size + LABEL_SIZE_STEP).clamp(LABEL_SIZE_MIN, LABEL_SIZE_MAX);
    }

    pub fn shrink_label(&mut self, axis: Axis) {
        let size = self.label_size_mut(axis);
        *size = size
            .saturating_sub(LABEL_SIZE_STEP)
            .clamp(LABEL_SIZE_MIN, LABEL_SIZE_MAX);
    }

    /// Non-finite input keeps the default lower bound.
    pub fn set_y_min(&mut self, value: f64) {
        self.config.y_min = if value.is_finite() { value } else { DEFAULT_Y_MIN };
    }

    /// Non-finite input keeps the default upper bound.
    pub fn set_y_max(&mut self, value: f64) {
        self.config.y_max = if value.is_finite() { value } else { DEFAULT_Y_MAX };
    }

    /// Parse typed y-min text; unparsable input falls back to 0.
    pub fn set_y_min_text(&mut self, text: &str) {
        self.set_y_min(text.trim().parse().unwrap_or(DEFAULT_Y_MIN));
    }

    /// Parse typed y-max text; unparsable input falls back to 100.
    pub fn set_y_max_text(&mut self, text: &str) {
        self.set_y_max(text.trim().parse().unwrap_or(DEFAULT_Y_MAX));
    }

    pub fn set_style(&mut self, style: StyleVariant) {
        self.config.style = style;
    }

    pub fn nudge(&mut self, axis: Axis, nudge: Nudge) {
        let offset = match axis {
            Axis::X => &mut self.config.x_label_offset,
            Axis::Y => &mut self.config.y_label_offset,
        };
        *offset = offset.nudged(nudge);
    }

    /// Restore every field at once.
    pub fn reset(&mut self) {
        self.config = AxisConfig::default();
        debug!("axis configuration reset to defaults");
    }
}
