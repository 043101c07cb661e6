mod null_renderer;
mod plan;

pub use null_renderer::NullRenderer;
pub use plan::{DrawPlan, PlotFrame};

use crate::error::ChartResult;

/// Contract implemented by any rendering collaborator.
///
/// Renderers receive a fully resolved, deterministic `DrawPlan` and own all
/// paint state (surfaces, transitions, event wiring) themselves.
pub trait Renderer {
    fn render(&mut self, plan: &DrawPlan) -> ChartResult<()>;
}
