use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and keeps the last frame so callers can
/// inspect exactly what a real charting backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub update_count: usize,
    pub last_frame: Option<ChartFrame>,
}

impl Renderer for NullRenderer {
    fn update(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.update_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
