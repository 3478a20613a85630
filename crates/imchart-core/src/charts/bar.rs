//! Grouped bar chart of average likes per platform and post type
//!
//! Platforms form the outer bands; within a platform each post type gets an
//! inner band. Rows repeating a (platform, post type) pair are averaged so
//! every pair is drawn exactly once.

use imchart_io::PlatformLikes;
use imchart_stats::{group_by, unique_in_order};
use tracing::debug;

use super::{require_rows, unplaced, value_scale};
use crate::colormap::Color;
use crate::config::{label_rotation, BarConfig};
use crate::context::DrawContext;
use crate::error::ChartResult;
use crate::scale::{BandScale, OrdinalScale};
use crate::scene::{Group, Mark, Rect, Scene, Text};

const LEGEND_GAP: f64 = 20.0;
const LEGEND_ROW: f64 = 20.0;
const SWATCH_SIZE: f64 = 15.0;

/// One value per (platform, post type) pair, in first-seen order
pub fn aggregate_pairs(records: &[PlatformLikes]) -> Vec<((String, String), f64)> {
    group_by(
        records,
        |r| (r.platform.clone(), r.post_type.clone()),
        |r| r.avg_likes,
    )
    .means()
}

fn legend(post_types: &[String], color: &OrdinalScale<Color>, x: f64) -> ChartResult<Group> {
    let mut group = Group::translated(x, 0.0).with_class("legend");
    for (i, post_type) in post_types.iter().enumerate() {
        let row = i as f64 * LEGEND_ROW;
        let fill = *color.get(post_type).ok_or_else(|| unplaced("color", post_type))?;
        group.push(Rect {
            x: 0.0,
            y: row,
            width: SWATCH_SIZE,
            height: SWATCH_SIZE,
            fill,
        });
        group.push(Text::new(20.0, row + 12.0, post_type.as_str()).with_baseline("middle"));
    }
    Ok(group)
}

/// Build the grouped bar chart scene
pub fn build_barplot(records: &[PlatformLikes], config: &BarConfig) -> ChartResult<Scene> {
    require_rows("barplot", records)?;
    let frame = &config.frame;
    frame.validate()?;
    let palette = config.colors()?;

    let platforms = unique_in_order(records.iter().map(|r| r.platform.clone()));
    let post_types = unique_in_order(records.iter().map(|r| r.post_type.clone()));
    let pairs = aggregate_pairs(records);

    let x0 = BandScale::new(platforms.iter().cloned(), (0.0, frame.inner_width()))
        .with_padding(config.outer_padding);
    let x1 = BandScale::new(post_types.iter().cloned(), (0.0, x0.bandwidth()))
        .with_padding(config.inner_padding);
    let color = OrdinalScale::new(post_types.iter().cloned(), palette);
    let y = value_scale(frame, pairs.iter().map(|(_, v)| *v));
    let ctx = DrawContext::new(frame, x0, y);
    let height = ctx.height();

    let mut marks = ctx.frame_marks(
        label_rotation(config.tick_rotation),
        &config.x_label,
        &config.y_label,
    );

    let by_platform = group_by(
        &pairs,
        |((platform, _), _)| platform.clone(),
        |((_, post_type), value)| (post_type.clone(), *value),
    );
    for (platform, bars) in by_platform.iter() {
        let offset = ctx.x().position(platform).ok_or_else(|| unplaced("platform", platform))?;
        let mut group = Group::translated(offset, 0.0).with_class("bar-group");
        for (post_type, value) in bars {
            let x = x1.position(post_type).ok_or_else(|| unplaced("post type", post_type))?;
            let fill = *color.get(post_type).ok_or_else(|| unplaced("color", post_type))?;
            group.push(Rect::spanning(x, x1.bandwidth(), ctx.y().map(*value), height, fill));
        }
        marks.push(Mark::Group(group));
    }

    marks.push(Mark::Group(legend(&post_types, &color, ctx.width() + LEGEND_GAP)?));

    debug!(
        rows = records.len(),
        bars = pairs.len(),
        platforms = platforms.len(),
        "built bar chart"
    );
    Ok(ctx.scene(marks))
}
