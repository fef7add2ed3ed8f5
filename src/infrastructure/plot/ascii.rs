//! Line plots drawn with box-drawing characters by `rasciigraph`:
//!
//! ```text
//!  2.00 ┤ ╭
//!  1.00 ┤╭╯
//!  0.00 ┼╯
//! ```

use crate::domain::ports::plotter::{PlotOptions, Plotter};
use rasciigraph::Config;

#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiPlotter;

impl Plotter for AsciiPlotter {
    fn plot(&self, values: &[f64], options: &PlotOptions) -> String {
        if values.is_empty() {
            return String::new();
        }

        let mut config = Config::default()
            .with_width(options.width.try_into().unwrap_or_default())
            .with_height(options.height.try_into().unwrap_or_default());
        if let Some(caption) = &options.caption {
            config = config.with_caption(caption.clone());
        }
        rasciigraph::plot(values.to_vec(), config)
    }
}
