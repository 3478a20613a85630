//! Scene graph of drawable marks
//!
//! A `Scene` is a fixed-size surface holding a tree of marks. Scenes are plain
//! values: chart builders produce them, `export` serializes them.

use crate::colormap::Color;

/// Transform applied to a group or a text mark
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(f64, f64),
    /// Rotation in degrees about the local origin
    Rotate(f64),
}

/// Horizontal anchoring of text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Font settings inherited by the text inside a group
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 10.0,
        }
    }
}

/// Straight line segment
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Color,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }
}

/// Axis-aligned filled rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl Rect {
    /// Rectangle spanning the vertical interval between `y0` and `y1` in either order
    pub fn spanning(x: f64, width: f64, y0: f64, y1: f64, fill: Color) -> Self {
        Self {
            x,
            y: y0.min(y1),
            width,
            height: (y1 - y0).abs(),
            fill,
        }
    }
}

/// A run of text
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    /// Baseline shift in font-relative units, e.g. "0.71em"
    pub dy: Option<String>,
    pub anchor: Option<TextAnchor>,
    /// Vertical alignment keyword, e.g. "middle"
    pub baseline: Option<String>,
    pub transform: Option<Transform>,
    pub content: String,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            dy: None,
            anchor: None,
            baseline: None,
            transform: None,
            content: content.into(),
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_dy(mut self, dy: impl Into<String>) -> Self {
        self.dy = Some(dy.into());
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = Some(baseline.into());
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.transform = Some(Transform::Rotate(degrees));
        self
    }
}

/// Free-form path given as SVG path data
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub d: String,
    /// `None` leaves the path unfilled
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

/// A container of marks sharing a transform and font
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub transform: Option<Transform>,
    pub class: Option<String>,
    pub font: Option<Font>,
    pub anchor: Option<TextAnchor>,
    pub children: Vec<Mark>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translated(x: f64, y: f64) -> Self {
        Self {
            transform: Some(Transform::Translate(x, y)),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Mark>) -> Self {
        self.children = children;
        self
    }

    pub fn push(&mut self, mark: impl Into<Mark>) {
        self.children.push(mark.into());
    }
}

/// Any drawable element
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Group(Group),
    Line(Line),
    Rect(Rect),
    Text(Text),
    Path(Path),
}

impl Mark {
    /// Visit this mark and every descendant, depth first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Mark)) {
        visit(self);
        if let Mark::Group(group) = self {
            for child in &group.children {
                child.walk(visit);
            }
        }
    }
}

impl From<Group> for Mark {
    fn from(group: Group) -> Self {
        Mark::Group(group)
    }
}

impl From<Line> for Mark {
    fn from(line: Line) -> Self {
        Mark::Line(line)
    }
}

impl From<Rect> for Mark {
    fn from(rect: Rect) -> Self {
        Mark::Rect(rect)
    }
}

impl From<Text> for Mark {
    fn from(text: Text) -> Self {
        Mark::Text(text)
    }
}

impl From<Path> for Mark {
    fn from(path: Path) -> Self {
        Mark::Path(path)
    }
}

/// One chart's drawing surface
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub root: Group,
}

impl Scene {
    pub fn new(width: f64, height: f64, root: Group) -> Self {
        Self {
            width,
            height,
            root,
        }
    }

    /// All marks in draw order, groups included
    pub fn marks(&self) -> Vec<&Mark> {
        let mut out = Vec::new();
        for child in &self.root.children {
            child.walk(&mut |m| out.push(m));
        }
        out
    }

    /// Every rectangle in the scene
    pub fn rects(&self) -> Vec<&Rect> {
        self.marks()
            .into_iter()
            .filter_map(|m| match m {
                Mark::Rect(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    /// Every text mark in the scene
    pub fn texts(&self) -> Vec<&Text> {
        self.marks()
            .into_iter()
            .filter_map(|m| match m {
                Mark::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Groups carrying the given class
    pub fn groups_with_class(&self, class: &str) -> Vec<&Group> {
        self.marks()
            .into_iter()
            .filter_map(|m| match m {
                Mark::Group(g) if g.class.as_deref() == Some(class) => Some(g),
                _ => None,
            })
            .collect()
    }
}
