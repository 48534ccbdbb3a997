use std::ops::Range;
use std::path::Path;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use timings::Dataset;

use crate::style::PlotStyle;
use crate::PlotError;

/// The chart canvas for one dataset: a line through all measurements in
/// dataset order and a marker on every measurement.
pub struct TimesChart<'a> {
    dataset: &'a Dataset,
    style: &'a PlotStyle,
}

impl<'a> TimesChart<'a> {
    pub fn new(dataset: &'a Dataset, style: &'a PlotStyle) -> Self {
        Self { dataset, style }
    }

    /// Sizes and times as two index-aligned sequences.
    pub fn columns(&self) -> (Vec<i64>, Vec<i64>) {
        self.dataset.columns()
    }

    /// The `(size, time)` coordinates, zipped back from [`TimesChart::columns`].
    /// Drawing happens on `f64` coordinates, so the full `i64` range fits on
    /// one axis.
    pub fn points(&self) -> Vec<(f64, f64)> {
        let (sizes, times) = self.columns();
        sizes
            .into_iter()
            .zip(times)
            .map(|(size, time)| (size as f64, time as f64))
            .collect()
    }

    /// Axis ranges `(x, y)` holding every point.
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let (sizes, times) = self.columns();
        (axis_range(&sizes), axis_range(&times))
    }

    /// Draws the chart onto `root`. Works with every plotters backend, the
    /// caller is responsible for presenting the area afterwards.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(root);
        builder.margin(10);
        if self.style.show_mesh {
            builder.set_left_and_bottom_label_area_size(45);
        }
        if let Some(caption) = &self.style.caption {
            builder.caption(caption, ("sans-serif", 20));
        }

        let (x_range, y_range) = self.ranges();
        debug!("axis ranges x: {:?}, y: {:?}", x_range, y_range);
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
        if self.style.show_mesh {
            chart.configure_mesh().draw()?;
        }

        let color = self.style.color;
        let marker_size = self.style.marker_size;
        let points = self.points();

        chart.draw_series(LineSeries::new(
            points.clone(),
            color.stroke_width(self.style.line_width),
        ))?;

        if self.style.label_points {
            chart.draw_series(PointSeries::of_element(
                points,
                marker_size,
                color.filled(),
                &|c, s, st| {
                    EmptyElement::at(c)
                        + Circle::new((0, 0), s, st)
                        + Text::new(format!("{}", c.1), (-10, -20), ("sans-serif", 14).into_font())
                },
            ))?;
        } else {
            chart.draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(p, marker_size, color.filled())),
            )?;
        }
        Ok(())
    }
}

/// Range from the smallest to the largest value, padded by 5% on both ends
/// (at least 1) so markers on the border stay visible. Never empty.
pub fn axis_range(values: &[i64]) -> Range<f64> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return 0.0..1.0;
    };
    let (min, max) = (min as f64, max as f64);
    let pad = ((max - min) / 20.0).max(1.0);
    (min - pad)..(max + pad)
}

fn render<DB: DrawingBackend>(
    chart: &TimesChart,
    root: DrawingArea<DB, Shift>,
) -> Result<(), PlotError> {
    chart.draw(&root)?;
    root.present()?;
    Ok(())
}

/// Renders the dataset into the image at `path`. The format follows the
/// extension: `svg` is written as vector graphics, `png`, `bmp` and `jpg`
/// as raster images.
pub fn save<P: AsRef<Path>>(dataset: &Dataset, style: &PlotStyle, path: P) -> Result<(), PlotError> {
    let path = path.as_ref();
    let chart = TimesChart::new(dataset, style);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => render(&chart, SVGBackend::new(path, style.size).into_drawing_area())?,
        "png" | "bmp" | "jpg" | "jpeg" => {
            render(&chart, BitMapBackend::new(path, style.size).into_drawing_area())?
        }
        _ => return Err(PlotError::UnsupportedFormat(path.display().to_string())),
    }

    info!("saved chart of {} measurements to {}", dataset.len(), path.display());
    Ok(())
}

/// Renders the dataset as an SVG document held in memory.
pub fn to_svg_string(dataset: &Dataset, style: &PlotStyle) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let chart = TimesChart::new(dataset, style);
        render(&chart, SVGBackend::with_string(&mut svg, style.size).into_drawing_area())?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A style that draws no axes or captions.
    fn plain_style() -> PlotStyle {
        PlotStyle {
            show_mesh: false,
            ..PlotStyle::default()
        }
    }

    #[test]
    fn test_columns_are_index_aligned() {
        let dataset = Dataset::from(vec![(1, 10), (2, 20), (3, 15)]);
        let style = PlotStyle::default();
        let chart = TimesChart::new(&dataset, &style);

        let (sizes, times) = chart.columns();
        assert_eq!(vec![1, 2, 3], sizes);
        assert_eq!(vec![10, 20, 15], times);
        assert_eq!(vec![(1.0, 10.0), (2.0, 20.0), (3.0, 15.0)], chart.points());
    }

    #[test]
    fn test_ranges_hold_every_point() {
        let dataset = Dataset::from(vec![(100, 7), (200, -3), (400, 90)]);
        let style = PlotStyle::default();
        let (x, y) = TimesChart::new(&dataset, &style).ranges();
        for (size, time) in [(100.0, 7.0), (200.0, -3.0), (400.0, 90.0)] {
            assert!(x.contains(&size), "{} must be inside {:?}", size, x);
            assert!(y.contains(&time), "{} must be inside {:?}", time, y);
        }
        assert_eq!(85.0..415.0, x);
    }

    #[test]
    fn test_axis_range_degenerate() {
        assert_eq!(0.0..1.0, axis_range(&[]));
        assert_eq!(4.0..6.0, axis_range(&[5]));
        assert_eq!(4.0..6.0, axis_range(&[5, 5, 5]));
        let extreme = axis_range(&[i64::MIN, i64::MAX]);
        assert!(!extreme.is_empty());
        assert!(extreme.contains(&(i64::MIN as f64)) && extreme.contains(&(i64::MAX as f64)));
    }

    #[test]
    fn test_draw_full_i64_range_with_mesh() {
        let dataset = Dataset::from(vec![(i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]);
        let style = PlotStyle {
            show_mesh: true,
            ..PlotStyle::default()
        };
        let svg = to_svg_string(&dataset, &style).unwrap();
        assert_eq!(2, svg.matches("<circle").count(), "One marker per point");
    }

    #[test]
    fn test_draw_labelled_points() {
        let dataset = Dataset::from(vec![(1, 10), (2, 20), (3, 15)]);
        let style = PlotStyle {
            label_points: true,
            ..plain_style()
        };
        let svg = to_svg_string(&dataset, &style).unwrap();
        assert_eq!(3, svg.matches("<circle").count(), "One marker per point");
        assert_eq!(3, svg.matches("<text").count(), "One label per point");
        assert!(svg.contains(">20<"), "Labels show the time value");
    }

    #[test]
    fn test_draw_line_and_markers() {
        let dataset = Dataset::from(vec![(1, 10), (2, 20), (3, 15), (4, 30)]);
        let svg = to_svg_string(&dataset, &plain_style()).unwrap();
        assert_eq!(1, svg.matches("<polyline").count(), "One connected line");
        assert_eq!(4, svg.matches("<circle").count(), "One marker per point");
    }

    #[test]
    fn test_draw_empty_dataset() {
        let svg = to_svg_string(&Dataset::default(), &plain_style()).unwrap();
        assert_eq!(0, svg.matches("<circle").count());
    }

    #[test]
    fn test_save_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let dataset = Dataset::from(vec![(1, 10), (2, 20)]);
        save(&dataset, &plain_style(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert_eq!(2, content.matches("<circle").count());
    }

    #[test]
    fn test_save_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Dataset::from(vec![(1, 10)]);
        for name in ["plot.gif", "plot"] {
            let result = save(&dataset, &plain_style(), dir.path().join(name));
            assert!(
                matches!(result, Err(PlotError::UnsupportedFormat(_))),
                "'{}' must be rejected",
                name
            );
        }
    }
}
