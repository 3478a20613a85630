//! Line chart of average likes over time
//!
//! Dates are treated as ordered labels on a point scale, not parsed.

use imchart_io::DailyLikes;
use tracing::debug;

use super::{require_rows, unplaced, value_scale};
use crate::config::{label_rotation, parse_color, LineConfig};
use crate::context::DrawContext;
use crate::curve::natural_path;
use crate::error::ChartResult;
use crate::scale::PointScale;
use crate::scene::{Mark, Path, Scene};

/// Build the line chart scene
pub fn build_lineplot(records: &[DailyLikes], config: &LineConfig) -> ChartResult<Scene> {
    require_rows("lineplot", records)?;
    let frame = &config.frame;
    frame.validate()?;
    let stroke = parse_color(&config.stroke)?;

    let x = PointScale::new(records.iter().map(|r| r.date.clone()), (0.0, frame.inner_width()))
        .with_padding(config.padding);
    let y = value_scale(frame, records.iter().map(|r| r.avg_likes));
    let ctx = DrawContext::new(frame, x, y);

    let mut marks = ctx.frame_marks(
        label_rotation(config.tick_rotation),
        &config.x_label,
        &config.y_label,
    );

    let points = records
        .iter()
        .map(|r| -> ChartResult<(f64, f64)> {
            let px = ctx.x().position(&r.date).ok_or_else(|| unplaced("date", &r.date))?;
            Ok((px, ctx.y().map(r.avg_likes)))
        })
        .collect::<ChartResult<Vec<_>>>()?;

    marks.push(Mark::Path(Path {
        d: natural_path(&points),
        fill: None,
        stroke: Some(stroke),
        stroke_width: Some(config.stroke_width),
    }));

    debug!(points = points.len(), "built line chart");
    Ok(ctx.scene(marks))
}
