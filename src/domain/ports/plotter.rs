/// Size and caption of a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Number of columns the series is stretched or squeezed to.
    pub width: usize,
    /// Number of rows spanned between minimum and maximum.
    pub height: usize,
    pub caption: Option<String>,
}

/// Turns a series of values into multi-line text.
pub trait Plotter: Send + Sync {
    fn plot(&self, values: &[f64], options: &PlotOptions) -> String;
}
