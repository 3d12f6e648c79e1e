//! gpui_plot crate for plotting in GPUI, with an interactive drag-box
//! selection layer

pub mod callbacks;
pub mod chart_view;
pub mod data_types;
pub mod drag_box;
pub mod interactions;
pub mod plot_types;
pub mod scales;
pub mod theme;
pub mod transform;
pub mod utils;

pub use callbacks::{CallbackSet, DragBoxCallback};
pub use chart_view::ChartView;
pub use data_types::{
    AxisMask, AxisRange, BoxBounds, DragBoxConfig, PlotPoint, ResizeEdges, Series,
};
pub use drag_box::{DragBoxLayer, DragMode, StyleMarkers};
pub use interactions::{DragGesture, GesturePhase};
pub use plot_types::{LinePlot, PlotEntity, PlotRenderer};
pub use theme::ChartTheme;
pub use transform::PlotTransform;
