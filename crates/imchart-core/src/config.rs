//! Configuration for a chart page
//!
//! Every field has a default, so an empty TOML or JSON document describes the
//! standard three-chart page: a boxplot of likes per age group, a grouped bar
//! chart of average likes per platform and post type, and a line chart of
//! average likes per day.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::LabelRotation;
use crate::colormap::{category10, parse_palette, Color};
use crate::error::{ChartError, ChartResult};
use crate::layout::{Frame, Margin};

/// Post types in the bar chart's dataset, each taking a `category10` color
const DEFAULT_SERIES: usize = 3;

/// Page-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// HTML page title
    pub title: String,
    /// Likes per age group
    pub boxplot: BoxplotConfig,
    /// Average likes per platform and post type
    pub barplot: BarConfig,
    /// Average likes per day
    pub lineplot: LineConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Social Media Engagement".to_string(),
            boxplot: BoxplotConfig::default(),
            barplot: BarConfig::default(),
            lineplot: LineConfig::default(),
        }
    }
}

/// Boxplot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxplotConfig {
    /// CSV file, relative to the data directory
    pub source: String,
    /// Id of the page container
    pub container: String,
    pub frame: Frame,
    pub x_label: String,
    pub y_label: String,
    /// Fill of the interquartile box
    pub box_fill: String,
    /// Stroke of whiskers and median lines
    pub stroke: String,
    /// Band padding between age groups
    pub padding: f64,
    /// Tick label rotation in degrees; unset rotates only crowded labels
    pub tick_rotation: Option<f64>,
}

impl Default for BoxplotConfig {
    fn default() -> Self {
        Self {
            source: "socialMedia.csv".to_string(),
            container: "boxplot".to_string(),
            frame: Frame::default(),
            x_label: "Age Group".to_string(),
            y_label: "Number of Likes".to_string(),
            box_fill: "#69b3a2".to_string(),
            stroke: "black".to_string(),
            padding: 0.2,
            tick_rotation: None,
        }
    }
}

/// Grouped bar chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub source: String,
    pub container: String,
    /// The right margin holds the legend
    pub frame: Frame,
    pub x_label: String,
    pub y_label: String,
    /// Colors assigned to post types in order of first appearance
    pub palette: Vec<String>,
    /// Padding between platforms
    pub outer_padding: f64,
    /// Padding between post types within a platform
    pub inner_padding: f64,
    pub tick_rotation: Option<f64>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            source: "socialMediaAvg.csv".to_string(),
            container: "barplot".to_string(),
            frame: Frame::new(600.0, 400.0, Margin::default().with_right(150.0)),
            x_label: "Platform".to_string(),
            y_label: "Average Likes".to_string(),
            palette: category10()
                .iter()
                .take(DEFAULT_SERIES)
                .map(Color::to_hex)
                .collect(),
            outer_padding: 0.2,
            inner_padding: 0.05,
            tick_rotation: None,
        }
    }
}

/// Line chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub source: String,
    pub container: String,
    pub frame: Frame,
    pub x_label: String,
    pub y_label: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Outer padding of the date axis, in steps
    pub padding: f64,
    pub tick_rotation: Option<f64>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            source: "socialMediaTime.csv".to_string(),
            container: "lineplot".to_string(),
            frame: Frame::default(),
            x_label: "Date".to_string(),
            y_label: "Average Likes".to_string(),
            stroke: "steelblue".to_string(),
            stroke_width: 2.0,
            padding: 0.5,
            tick_rotation: Some(-25.0),
        }
    }
}

/// Tick label rotation for an optional configured angle
pub fn label_rotation(angle: Option<f64>) -> LabelRotation {
    match angle {
        Some(a) => LabelRotation::Fixed(a),
        None => LabelRotation::Auto,
    }
}

/// Parse a configured color
pub fn parse_color(value: &str) -> ChartResult<Color> {
    Color::parse(value)
        .ok_or_else(|| ChartError::InvalidConfig(format!("unknown color: {}", value)))
}

impl BarConfig {
    /// Parsed palette; empty palettes are rejected
    pub fn colors(&self) -> ChartResult<Vec<Color>> {
        if self.palette.is_empty() {
            return Err(ChartError::InvalidConfig("barplot palette is empty".to_string()));
        }
        parse_palette(&self.palette)
            .map_err(|bad| ChartError::InvalidConfig(format!("unknown color in palette: {}", bad)))
    }
}

impl PageConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read a configuration file; `.json` files are JSON, anything else TOML
    pub async fn load(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config = if is_json {
            Self::from_json(&text).map_err(|e| ChartError::InvalidConfig(e.to_string()))?
        } else {
            Self::from_toml(&text).map_err(|e| ChartError::InvalidConfig(e.to_string()))?
        };
        tracing::debug!(path = %path.display(), "loaded page config");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ChartResult<()> {
        self.boxplot.frame.validate()?;
        self.barplot.frame.validate()?;
        self.lineplot.frame.validate()?;

        parse_color(&self.boxplot.box_fill)?;
        parse_color(&self.boxplot.stroke)?;
        parse_color(&self.lineplot.stroke)?;
        self.barplot.colors()?;

        for (name, padding) in [
            ("boxplot padding", self.boxplot.padding),
            ("barplot inner_padding", self.barplot.inner_padding),
        ] {
            if !(0.0..=1.0).contains(&padding) {
                return Err(ChartError::InvalidConfig(format!(
                    "{} must be within 0..=1, got {}",
                    name, padding
                )));
            }
        }
        for (name, padding) in [
            ("barplot outer_padding", self.barplot.outer_padding),
            ("lineplot padding", self.lineplot.padding),
        ] {
            if !(padding >= 0.0) {
                return Err(ChartError::InvalidConfig(format!(
                    "{} must not be negative, got {}",
                    name, padding
                )));
            }
        }

        let mut seen = HashSet::new();
        for id in self.containers() {
            if !seen.insert(id) {
                return Err(ChartError::InvalidConfig(format!(
                    "duplicate container id: {}",
                    id
                )));
            }
        }
        Ok(())
    }

    /// Container ids in page order
    pub fn containers(&self) -> [&str; 3] {
        [
            &self.boxplot.container,
            &self.barplot.container,
            &self.lineplot.container,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.containers(), ["boxplot", "barplot", "lineplot"]);
        assert_eq!(config.barplot.frame.margin.right, 150.0);
        assert_eq!(config.lineplot.tick_rotation, Some(-25.0));
        assert_eq!(config.barplot.palette, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PageConfig::from_toml("").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = PageConfig::from_toml(
            r#"
            title = "Engagement"

            [boxplot]
            source = "likes.csv"

            [lineplot.frame]
            width = 800.0
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Engagement");
        assert_eq!(config.boxplot.source, "likes.csv");
        assert_eq!(config.boxplot.x_label, "Age Group");
        assert_eq!(config.lineplot.frame.width, 800.0);
        assert_eq!(config.lineplot.frame.height, 400.0);
        assert_eq!(config.lineplot.frame.margin, Margin::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PageConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(PageConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_json_serialization() {
        let config = PageConfig::default();
        let json = config.to_json().unwrap();
        let parsed = PageConfig::from_json(&json).unwrap();
        assert_eq!(parsed.barplot.palette, config.barplot.palette);
    }

    #[test]
    fn test_duplicate_containers_rejected() {
        let mut config = PageConfig::default();
        config.lineplot.container = "boxplot".to_string();
        assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let mut config = PageConfig::default();
        config.barplot.palette.clear();
        assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut config = PageConfig::default();
        config.boxplot.box_fill = "not-a-color".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_plot_area_rejected() {
        let mut config = PageConfig::default();
        config.barplot.frame.width = 200.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_margin_rejected() {
        let config = PageConfig::from_toml("[boxplot.frame.margin]\nleft = nan\n").unwrap();
        assert!(config.boxplot.frame.margin.left.is_nan());
        assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
    }

    #[test]
    fn test_label_rotation() {
        assert_eq!(label_rotation(None), LabelRotation::Auto);
        assert_eq!(label_rotation(Some(-25.0)), LabelRotation::Fixed(-25.0));
    }

    #[tokio::test]
    async fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("page.toml");
        std::fs::write(&toml_path, "title = \"From TOML\"").unwrap();
        assert_eq!(PageConfig::load(&toml_path).await.unwrap().title, "From TOML");

        let json_path = dir.path().join("page.json");
        std::fs::write(&json_path, r#"{"title": "From JSON"}"#).unwrap();
        assert_eq!(PageConfig::load(&json_path).await.unwrap().title, "From JSON");

        let bad_path = dir.path().join("bad.toml");
        std::fs::write(&bad_path, "title = ").unwrap();
        assert!(matches!(
            PageConfig::load(&bad_path).await,
            Err(ChartError::InvalidConfig(_))
        ));
    }
}
