//! candle-layout: a pure candlestick-chart layout engine.
//!
//! An ascending OHLC series and a viewport go in; a renderer-agnostic
//! [`DrawPlan`](render::DrawPlan) with price gridlines, date ticks and
//! per-candle geometry comes out. Painting is left to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartLayoutEngine, ChartView, LayoutConfig};
pub use error::{ChartError, ChartResult};
