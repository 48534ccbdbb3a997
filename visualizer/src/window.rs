use druid::{AppLauncher, Widget, WindowDesc};
use log::{error, info};
use plotters_druid::Plot;
use timings::Dataset;

use crate::style::PlotStyle;
use crate::visualizer::TimesChart;
use crate::PlotError;

/// Opens a window showing the chart. Blocks until the window is closed.
pub fn show(dataset: &Dataset, style: &PlotStyle) -> Result<(), PlotError> {
    let (width, height) = style.size;
    let title = style
        .caption
        .clone()
        .unwrap_or_else(|| "Timings".to_string());

    let dataset = dataset.clone();
    let style = style.clone();
    let main_window = WindowDesc::new(move || chart_builder(dataset, style))
        .title(title)
        .window_size((width as f64, height as f64))
        .resizable(true);

    info!("opening chart window");
    AppLauncher::with_window(main_window)
        .launch(())
        .map_err(|e| PlotError::Window(e.to_string()))
}

fn chart_builder(dataset: Dataset, style: PlotStyle) -> impl Widget<()> {
    Plot::new(move |_size, _data, root| {
        // the widget redraws on every resize, a failed frame is only logged
        if let Err(e) = TimesChart::new(&dataset, &style).draw(root) {
            error!("could not draw chart: {e}");
        }
    })
}
