//! Drawing context shared by the steps that build one chart
//!
//! A `DrawContext` bundles the frame with the x and y scales. It is immutable:
//! every drawing step borrows it and returns new marks.

use crate::axis::{render_axis, AxisConfig, AxisScale, LabelRotation};
use crate::layout::Frame;
use crate::scale::LinearScale;
use crate::scene::{Group, Mark, Scene, Text, TextAnchor};

/// Frame plus scales for one chart
#[derive(Clone, Debug)]
pub struct DrawContext<'a, X> {
    frame: &'a Frame,
    x: X,
    y: LinearScale,
}

impl<'a, X: AxisScale> DrawContext<'a, X> {
    pub fn new(frame: &'a Frame, x: X, y: LinearScale) -> Self {
        Self { frame, x, y }
    }

    pub fn frame(&self) -> &Frame {
        self.frame
    }

    pub fn x(&self) -> &X {
        &self.x
    }

    pub fn y(&self) -> &LinearScale {
        &self.y
    }

    /// Plot area width
    pub fn width(&self) -> f64 {
        self.frame.inner_width()
    }

    /// Plot area height
    pub fn height(&self) -> f64 {
        self.frame.inner_height()
    }

    /// Bottom axis along the plot area's lower edge
    pub fn x_axis(&self, rotation: LabelRotation) -> Mark {
        let config = AxisConfig::bottom().with_rotation(rotation);
        Mark::Group(render_axis(&config, &self.x, self.height()))
    }

    /// Left axis for the value scale
    pub fn y_axis(&self) -> Mark {
        Mark::Group(render_axis(&AxisConfig::left(), &self.y, 0.0))
    }

    /// Caption centered below the bottom axis
    pub fn x_caption(&self, label: &str) -> Mark {
        let y = self.height() + self.frame.margin.bottom - 5.0;
        Mark::Text(Text::new(self.width() / 2.0, y, label).anchored(TextAnchor::Middle))
    }

    /// Caption running up the left margin
    pub fn y_caption(&self, label: &str) -> Mark {
        let x = -self.height() / 2.0;
        let y = -self.frame.margin.left + 15.0;
        Mark::Text(
            Text::new(x, y, label)
                .anchored(TextAnchor::Middle)
                .rotated(-90.0),
        )
    }

    /// Axes and captions, in draw order
    pub fn frame_marks(&self, rotation: LabelRotation, x_label: &str, y_label: &str) -> Vec<Mark> {
        vec![
            self.x_axis(rotation),
            self.y_axis(),
            self.x_caption(x_label),
            self.y_caption(y_label),
        ]
    }

    /// Place marks in a scene, offset by the frame's top-left margin
    pub fn scene(&self, marks: Vec<Mark>) -> Scene {
        let root =
            Group::translated(self.frame.margin.left, self.frame.margin.top).with_children(marks);
        Scene::new(self.frame.width, self.frame.height, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::BandScale;
    use crate::scene::Transform;

    fn context(frame: &Frame) -> DrawContext<'_, BandScale> {
        let x = BandScale::new(["Teen", "Adult"], (0.0, frame.inner_width()));
        let y = LinearScale::from_zero(100.0, frame.inner_height(), 0.0);
        DrawContext::new(frame, x, y)
    }

    #[test]
    fn test_caption_positions() {
        let frame = Frame::default();
        let ctx = context(&frame);

        let Mark::Text(x_caption) = ctx.x_caption("Age Group") else {
            panic!("expected text");
        };
        assert_eq!((x_caption.x, x_caption.y), (250.0, 345.0));
        assert_eq!(x_caption.anchor, Some(TextAnchor::Middle));

        let Mark::Text(y_caption) = ctx.y_caption("Likes") else {
            panic!("expected text");
        };
        assert_eq!((y_caption.x, y_caption.y), (-150.0, -35.0));
        assert_eq!(y_caption.transform, Some(Transform::Rotate(-90.0)));
    }

    #[test]
    fn test_frame_marks_order() {
        let frame = Frame::default();
        let ctx = context(&frame);
        let marks = ctx.frame_marks(LabelRotation::None, "x", "y");
        assert_eq!(marks.len(), 4);
        match &marks[0] {
            Mark::Group(g) => assert_eq!(g.transform, Some(Transform::Translate(0.0, 300.0))),
            other => panic!("expected bottom axis, got {:?}", other),
        }
        match &marks[1] {
            Mark::Group(g) => assert_eq!(g.transform, None),
            other => panic!("expected left axis, got {:?}", other),
        }
    }

    #[test]
    fn test_scene_offsets_by_margin() {
        let frame = Frame::default();
        let scene = context(&frame).scene(Vec::new());
        assert_eq!(scene.width, 600.0);
        assert_eq!(scene.root.transform, Some(Transform::Translate(50.0, 50.0)));
    }
}
