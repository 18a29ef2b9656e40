mod frame;
mod null_renderer;
mod primitives;
mod style;

pub use frame::ChartFrame;
pub use null_renderer::NullRenderer;
pub use primitives::Color;
pub use style::{
    ChartKind, DatasetStyle, DisplayFormats, Distribution, TimeAxisConfig, TimeUnit,
};

use crate::error::ChartResult;

/// Contract implemented by the charting backend behind a chart instance.
///
/// `update` is called after the displayed data was replaced and must redraw
/// from the frame alone, so backends stay isolated from selection logic.
pub trait Renderer {
    fn update(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn update(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        (**self).update(frame)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn update(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        (**self).update(frame)
    }
}
