//! Scene export
//!
//! Supports writing charts out as:
//! - SVG: one standalone `<svg>` element per scene
//! - HTML: a page holding every chart in its own container

use std::borrow::Cow;
use std::fmt;
use std::path::Path as FsPath;

use quick_xml::escape::escape;
use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::scene::{Group, Line, Mark, Path, Rect, Scene, Text, Transform};

/// Format a coordinate with at most three decimals and no negative zero
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Escape text for use in XML content and attribute values
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    escape(text)
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate(x, y) => {
                write!(f, "translate({},{})", fmt_coord(*x), fmt_coord(*y))
            }
            Transform::Rotate(deg) => write!(f, "rotate({})", fmt_coord(*deg)),
        }
    }
}

fn write_group(out: &mut impl fmt::Write, group: &Group) -> fmt::Result {
    out.write_str("<g")?;
    if let Some(transform) = &group.transform {
        write!(out, " transform=\"{}\"", transform)?;
    }
    if let Some(class) = &group.class {
        write!(out, " class=\"{}\"", escape_xml(class))?;
    }
    if let Some(font) = &group.font {
        write!(
            out,
            " font-family=\"{}\" font-size=\"{}\"",
            escape_xml(&font.family),
            fmt_coord(font.size)
        )?;
    }
    if let Some(anchor) = &group.anchor {
        write!(out, " text-anchor=\"{}\"", anchor.as_str())?;
    }
    out.write_str(">")?;
    for child in &group.children {
        write_mark(out, child)?;
    }
    out.write_str("</g>")
}

fn write_line(out: &mut impl fmt::Write, line: &Line) -> fmt::Result {
    write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"/>",
        fmt_coord(line.x1),
        fmt_coord(line.y1),
        fmt_coord(line.x2),
        fmt_coord(line.y2),
        line.stroke.to_hex()
    )
}

fn write_rect(out: &mut impl fmt::Write, rect: &Rect) -> fmt::Result {
    write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        fmt_coord(rect.x),
        fmt_coord(rect.y),
        fmt_coord(rect.width),
        fmt_coord(rect.height),
        rect.fill.to_hex()
    )
}

fn write_text(out: &mut impl fmt::Write, text: &Text) -> fmt::Result {
    write!(out, "<text x=\"{}\" y=\"{}\"", fmt_coord(text.x), fmt_coord(text.y))?;
    if let Some(dy) = &text.dy {
        write!(out, " dy=\"{}\"", escape_xml(dy))?;
    }
    if let Some(anchor) = &text.anchor {
        write!(out, " text-anchor=\"{}\"", anchor.as_str())?;
    }
    if let Some(baseline) = &text.baseline {
        write!(out, " alignment-baseline=\"{}\"", escape_xml(baseline))?;
    }
    if let Some(transform) = &text.transform {
        write!(out, " transform=\"{}\"", transform)?;
    }
    write!(out, ">{}</text>", escape_xml(&text.content))
}

fn write_path(out: &mut impl fmt::Write, path: &Path) -> fmt::Result {
    let fill = path
        .fill
        .map(|c| c.to_hex())
        .unwrap_or_else(|| "none".to_string());
    write!(out, "<path d=\"{}\" fill=\"{}\"", escape_xml(&path.d), fill)?;
    if let Some(stroke) = &path.stroke {
        write!(out, " stroke=\"{}\"", stroke.to_hex())?;
    }
    if let Some(width) = path.stroke_width {
        write!(out, " stroke-width=\"{}\"", fmt_coord(width))?;
    }
    out.write_str("/>")
}

fn write_mark(out: &mut impl fmt::Write, mark: &Mark) -> fmt::Result {
    match mark {
        Mark::Group(group) => write_group(out, group),
        Mark::Line(line) => write_line(out, line),
        Mark::Rect(rect) => write_rect(out, rect),
        Mark::Text(text) => write_text(out, text),
        Mark::Path(path) => write_path(out, path),
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (fmt_coord(self.width), fmt_coord(self.height));
        write!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        )?;
        write_group(f, &self.root)?;
        f.write_str("</svg>")
    }
}

impl Scene {
    /// Serialize to a standalone SVG element
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Write the scene as an SVG file
    pub async fn write_svg(&self, path: impl AsRef<FsPath>) -> ExportResult<()> {
        write_file(path.as_ref(), self.to_svg()).await
    }
}

/// A web page holding one container per chart
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub title: String,
    /// Container id and its scene; `None` leaves the container empty
    pub charts: Vec<(String, Option<Scene>)>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            charts: Vec::new(),
        }
    }

    pub fn push(&mut self, container: impl Into<String>, scene: Option<Scene>) {
        self.charts.push((container.into(), scene));
    }

    /// Scene drawn into `container`, if that chart rendered
    pub fn scene(&self, container: &str) -> Option<&Scene> {
        self.charts
            .iter()
            .find(|(id, _)| id == container)
            .and_then(|(_, scene)| scene.as_ref())
    }

    /// Number of containers holding a chart
    pub fn rendered(&self) -> usize {
        self.charts.iter().filter(|(_, s)| s.is_some()).count()
    }

    /// Serialize to an HTML document
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Write the page as an HTML file
    pub async fn write(&self, path: impl AsRef<FsPath>) -> ExportResult<()> {
        write_file(path.as_ref(), self.to_html()).await
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\"/>")?;
        writeln!(f, "<title>{}</title>", escape_xml(&self.title))?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        for (container, scene) in &self.charts {
            write!(f, "<div id=\"{}\">", escape_xml(container))?;
            if let Some(scene) = scene {
                write!(f, "{}", scene)?;
            }
            writeln!(f, "</div>")?;
        }
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

async fn write_file(path: &FsPath, contents: String) -> ExportResult<()> {
    debug!(path = %path.display(), bytes = contents.len(), "writing export");
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Color;
    use crate::scene::TextAnchor;

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(50.0), "50");
        assert_eq!(fmt_coord(156.25), "156.25");
        assert_eq!(fmt_coord(1.0 / 3.0), "0.333");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(-6.0), "-6");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Q&A <b>"), "Q&amp;A &lt;b&gt;");
        assert_eq!(escape_xml("\"x\""), "&quot;x&quot;");
        assert_eq!(escape_xml("Teen's"), "Teen&apos;s");
        assert!(matches!(escape_xml("Adult"), Cow::Borrowed("Adult")));
    }

    #[test]
    fn test_scene_to_svg() {
        let mut root = Group::translated(50.0, 50.0);
        root.push(Rect {
            x: 0.0,
            y: 10.5,
            width: 20.0,
            height: 30.0,
            fill: Color::from_hex("#69b3a2").unwrap(),
        });
        root.push(Text::new(250.0, 345.0, "Age <Group>").anchored(TextAnchor::Middle));
        let svg = Scene::new(600.0, 400.0, root).to_svg();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"400\""));
        assert!(svg.contains("<g transform=\"translate(50,50)\">"));
        assert!(svg.contains("<rect x=\"0\" y=\"10.5\" width=\"20\" height=\"30\" fill=\"#69b3a2\"/>"));
        assert!(svg.contains("text-anchor=\"middle\">Age &lt;Group&gt;</text>"));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn test_path_without_fill() {
        let mut out = String::new();
        write_path(
            &mut out,
            &Path {
                d: "M0,0L1,1".to_string(),
                fill: None,
                stroke: Color::parse("steelblue"),
                stroke_width: Some(2.0),
            },
        )
        .unwrap();
        assert_eq!(
            out,
            "<path d=\"M0,0L1,1\" fill=\"none\" stroke=\"#4682b4\" stroke-width=\"2\"/>"
        );
    }

    #[test]
    fn test_rotated_text() {
        let mut out = String::new();
        write_text(&mut out, &Text::new(-150.0, -35.0, "Likes").rotated(-90.0)).unwrap();
        assert_eq!(
            out,
            "<text x=\"-150\" y=\"-35\" transform=\"rotate(-90)\">Likes</text>"
        );
    }

    #[test]
    fn test_page_leaves_failed_container_empty() {
        let mut page = Page::new("Social Media");
        page.push("boxplot", Some(Scene::new(600.0, 400.0, Group::new())));
        page.push("barplot", None);
        let html = page.to_html();

        assert!(html.contains("<title>Social Media</title>"));
        assert!(html.contains("<div id=\"boxplot\"><svg"));
        assert!(html.contains("<div id=\"barplot\"></div>"));
        assert_eq!(page.rendered(), 1);
        assert!(page.scene("barplot").is_none());
    }

    #[tokio::test]
    async fn test_write_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        Page::new("t").write(&path).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");
        let err = Page::new("t").write(&path).await.unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
