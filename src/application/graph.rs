use crate::domain::entities::weather::WeatherSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::plotter::{PlotOptions, Plotter};
use crate::domain::values::graph_series::{GraphSeries, WINDOW_HOURS};
use std::sync::Arc;

const PLOT_WIDTH: usize = 110;
const PLOT_HEIGHT: usize = 10;
const CAPTION: &str = "Temperature Over Time";

/// Total width shared by the axis labels.
const LABEL_ROW_WIDTH: usize = 100;
/// Width of one label column.
const LABEL_WIDTH: usize = LABEL_ROW_WIDTH / WINDOW_HOURS;
/// Spaces before the first label, lining it up with the plot's y axis.
const LABEL_OFFSET: usize = 5;

/// Temperature curve for the next 24 hours with a sparse time axis below it.
pub struct TimeSeriesGraph {
    plotter: Arc<dyn Plotter>,
}

impl TimeSeriesGraph {
    pub fn new(plotter: Arc<dyn Plotter>) -> Self {
        Self { plotter }
    }

    pub fn render(&self, snapshot: &WeatherSnapshot) -> Result<String, DomainError> {
        let series = GraphSeries::from_snapshot(snapshot)?;
        let options = PlotOptions {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            caption: Some(CAPTION.to_string()),
        };

        let mut out = self.plotter.plot(&series.values, &options);
        out.push('\n');
        out.push_str(&label_row(&series.labels));
        out.push('\n');
        Ok(out)
    }
}

/// Every other label, left-justified in fixed columns; odd columns stay
/// blank so neighbouring labels never run into each other.
pub fn label_row(labels: &[String]) -> String {
    let mut row = " ".repeat(LABEL_OFFSET);
    for (i, label) in labels.iter().enumerate() {
        if i % 2 == 0 {
            row.push_str(&format!("{label:<width$}", width = LABEL_WIDTH));
        } else {
            row.push_str(&" ".repeat(LABEL_WIDTH));
        }
    }
    row
}
