use crate::error::ChartResult;
use crate::render::{DrawPlan, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the plan so tests catch inconsistent geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_candle_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, plan: &DrawPlan) -> ChartResult<()> {
        plan.validate()?;
        self.render_count += 1;
        self.last_candle_count = plan.candles.len();
        self.last_label_count = plan.label_count();
        Ok(())
    }
}
