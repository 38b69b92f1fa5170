use crate::Result;
use camino::Utf8Path;
use core::ops::Range;
use ohno::{app_err, bail};
use plotters::prelude::*;

const LOG_TARGET: &str = "    charts";

/// Presentation settings for one line chart.
#[derive(Debug, Clone, Copy)]
pub struct LineChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub color: RGBColor,
    pub width: u32,
    pub height: u32,
}

const CAPTION_FONT_SIZE: u32 = 24;
const LABEL_FONT_SIZE: u32 = 16;
const MARKER_RADIUS: u32 = 4;
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);
const GRID_OPACITY: f64 = 0.6;

/// Draw `y_values` against `x_values` as one marker-connected line and save it as a PNG.
///
/// Empty input produces a chart with axes but no data.
///
/// # Errors
///
/// Returns an error if the two value slices differ in length, or if the chart cannot be drawn or written.
pub fn render_line_chart(x_values: &[i32], y_values: &[f64], chart: &LineChart<'_>, output_path: &Utf8Path) -> Result<()> {
    if x_values.len() != y_values.len() {
        bail!(
            "cannot chart {} x values against {} y values for '{}'",
            x_values.len(),
            y_values.len(),
            chart.title
        );
    }

    let points: Vec<(i32, f64)> = x_values.iter().copied().zip(y_values.iter().copied()).collect();

    draw(&points, chart, output_path).map_err(|e| app_err!("rendering chart '{}' to '{output_path}': {e}", chart.title))?;

    log::info!(target: LOG_TARGET, "Wrote {} point(s) to '{output_path}'", points.len());
    Ok(())
}

fn draw(points: &[(i32, f64)], chart: &LineChart<'_>, output_path: &Utf8Path) -> core::result::Result<(), Box<dyn core::error::Error>> {
    let root = BitMapBackend::new(output_path.as_std_path(), (chart.width, chart.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut context = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(year_range(points.iter().map(|(x, _)| *x)), value_range(points.iter().map(|(_, y)| *y)))?;

    context
        .configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .light_line_style(grid_style())
        .draw()?;

    let _ = context.draw_series(LineSeries::new(points.iter().copied(), chart.color.stroke_width(2)))?;
    let _ = context.draw_series(points.iter().map(|&point| Circle::new(point, MARKER_RADIUS, chart.color.filled())))?;

    root.present()?;
    Ok(())
}

/// Thin translucent light-grey grid lines, drawn under the series.
fn grid_style() -> ShapeStyle {
    GRID_COLOR.mix(GRID_OPACITY).stroke_width(1)
}

/// Year axis covering every point with one year of room on each side.
fn year_range(years: impl Iterator<Item = i32>) -> Range<i32> {
    let (min, max) = years.fold((i32::MAX, i32::MIN), |(min, max), year| (min.min(year), max.max(year)));
    if min > max {
        return 0..1;
    }

    min.saturating_sub(1)..max.saturating_add(1)
}

/// Value axis covering every point with five percent of headroom on each side.
fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| (min.min(value), max.max(value)));
    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    if span <= 0.0 {
        return (min - 1.0)..(max + 1.0);
    }

    let pad = span * 0.05;
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn test_chart() -> LineChart<'static> {
        LineChart {
            title: "Test Chart",
            x_label: "Year",
            y_label: "Value",
            color: BLUE,
            width: 400,
            height: 300,
        }
    }

    #[test]
    fn test_grid_style_is_light_and_thin() {
        let style = grid_style();
        assert_eq!((style.color.0, style.color.1, style.color.2), (220, 220, 220));
        assert!((style.color.3 - GRID_OPACITY).abs() < 1e-9);
        assert_eq!(style.stroke_width, 1);
        assert!(!style.filled);
    }

    #[test]
    fn test_year_range_empty() {
        assert_eq!(year_range(core::iter::empty()), 0..1);
    }

    #[test]
    fn test_year_range_pads_by_one_year() {
        assert_eq!(year_range([2003, 2000, 2018].into_iter()), 1999..2019);
    }

    #[test]
    fn test_year_range_single_year() {
        assert_eq!(year_range([2005].into_iter()), 2004..2006);
    }

    #[test]
    fn test_value_range_empty() {
        assert_eq!(value_range(core::iter::empty()), 0.0..1.0);
    }

    #[test]
    fn test_value_range_flat() {
        assert_eq!(value_range([2.5, 2.5].into_iter()), 1.5..3.5);
    }

    #[test]
    fn test_value_range_pads_span() {
        let range = value_range([10.0, 30.0, 20.0].into_iter());
        assert!((range.start - 9.0).abs() < 1e-9);
        assert!((range.end - 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_lengths() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("bad.png")).unwrap();
        let err = render_line_chart(&[2000, 2001], &[1.0], &test_chart(), &path).unwrap_err();
        assert!(err.to_string().contains("2 x values against 1 y values"));
        assert!(!path.exists());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot load system fonts")]
    fn test_render_writes_png() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("chart.png")).unwrap();
        render_line_chart(&[2000, 2001, 2002], &[3.0, 5.0, 4.0], &test_chart(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&PNG_SIGNATURE));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot load system fonts")]
    fn test_render_empty_series() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("empty.png")).unwrap();
        render_line_chart(&[], &[], &test_chart(), &path).unwrap();
        assert!(fs::read(&path).unwrap().starts_with(&PNG_SIGNATURE));
    }
}
