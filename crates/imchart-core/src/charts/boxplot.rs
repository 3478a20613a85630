//! Side-by-side boxplots of likes per age group

use imchart_io::AgeLikes;
use imchart_stats::{group_by, FiveNumberSummary};
use tracing::debug;

use super::{require_rows, unplaced, value_scale};
use crate::colormap::Color;
use crate::config::{label_rotation, parse_color, BoxplotConfig};
use crate::context::DrawContext;
use crate::error::ChartResult;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Group, Line, Mark, Rect, Scene};

/// Marks for one box: whisker, interquartile box, median line
fn box_marks(
    x0: f64,
    bandwidth: f64,
    y: &LinearScale,
    summary: &FiveNumberSummary,
    fill: Color,
    stroke: Color,
) -> Vec<Mark> {
    let center = x0 + bandwidth / 2.0;
    let median = y.map(summary.median);
    vec![
        Mark::Line(Line::new(
            center,
            y.map(summary.min),
            center,
            y.map(summary.max),
            stroke,
        )),
        Mark::Rect(Rect::spanning(
            x0,
            bandwidth,
            y.map(summary.q3),
            y.map(summary.q1),
            fill,
        )),
        Mark::Line(Line::new(x0, median, x0 + bandwidth, median, stroke)),
    ]
}

/// Build the boxplot scene
pub fn build_boxplot(records: &[AgeLikes], config: &BoxplotConfig) -> ChartResult<Scene> {
    require_rows("boxplot", records)?;
    let frame = &config.frame;
    frame.validate()?;
    let fill = parse_color(&config.box_fill)?;
    let stroke = parse_color(&config.stroke)?;

    let groups = group_by(records, |r| r.age_group.clone(), |r| r.likes);
    let x = BandScale::new(groups.keys().iter().cloned(), (0.0, frame.inner_width()))
        .with_padding(config.padding);
    let y = value_scale(frame, records.iter().map(|r| r.likes));
    let ctx = DrawContext::new(frame, x, y);

    let mut marks = ctx.frame_marks(
        label_rotation(config.tick_rotation),
        &config.x_label,
        &config.y_label,
    );

    let summaries = groups.summarize();
    for (key, summary) in &summaries {
        let x0 = ctx.x().position(key).ok_or_else(|| unplaced("age group", key))?;
        let children = box_marks(x0, ctx.x().bandwidth(), ctx.y(), summary, fill, stroke);
        marks.push(Mark::Group(Group::new().with_class("box").with_children(children)));
    }

    debug!(
        rows = records.len(),
        groups = summaries.len(),
        "built boxplot"
    );
    Ok(ctx.scene(marks))
}
