//! Data module - Editor stores, colors and CSV import

mod axis;
mod color;
mod loader;
mod points;
mod summary;

pub use axis::{
    Axis, AxisConfig, AxisConfigStore, AxisEdit, LabelOffset, Nudge, StyleVariant,
    DEFAULT_LABEL_SIZE, LABEL_SIZE_MAX, LABEL_SIZE_MIN, LABEL_SIZE_STEP, OFFSET_STEP,
};
pub use color::{ColorParseError, HexColor, DEFAULT_BAR_COLOR, PALETTE};
pub use loader::{DataLoader, ImportedRows, LoaderError};
pub use points::{DataPoint, DataPointStore, PointEdit, PointId};
pub use summary::SeriesSummary;
