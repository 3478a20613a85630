//! Async chart pipelines
//!
//! Each chart loads its CSV file and builds its scene in its own task. The page
//! renderer runs the three tasks concurrently; a chart that fails is logged and
//! its container is left empty while the others still render.

use std::path::{Path, PathBuf};

use imchart_io::{load_records, AgeLikes, DailyLikes, PlatformLikes};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::charts::{build_barplot, build_boxplot, build_lineplot};
use crate::config::{BarConfig, BoxplotConfig, LineConfig, PageConfig};
use crate::error::{ChartError, ChartResult};
use crate::export::Page;
use crate::scene::Scene;

/// Load the boxplot dataset and build its scene
pub async fn render_boxplot(config: &BoxplotConfig, data_dir: &Path) -> ChartResult<Scene> {
    let path = data_dir.join(&config.source);
    debug!("Loading boxplot data from {:?}", path);
    let records: Vec<AgeLikes> = load_records(&path).await?;
    build_boxplot(&records, config)
}

/// Load the bar chart dataset and build its scene
pub async fn render_barplot(config: &BarConfig, data_dir: &Path) -> ChartResult<Scene> {
    let path = data_dir.join(&config.source);
    debug!("Loading bar chart data from {:?}", path);
    let records: Vec<PlatformLikes> = load_records(&path).await?;
    build_barplot(&records, config)
}

/// Load the line chart dataset and build its scene
pub async fn render_lineplot(config: &LineConfig, data_dir: &Path) -> ChartResult<Scene> {
    let path = data_dir.join(&config.source);
    debug!("Loading line chart data from {:?}", path);
    let records: Vec<DailyLikes> = load_records(&path).await?;
    build_lineplot(&records, config)
}

/// Wait for a chart task, turning any failure into an empty container
async fn settle(chart: &str, handle: JoinHandle<ChartResult<Scene>>) -> Option<Scene> {
    let result = handle
        .await
        .unwrap_or_else(|e| Err(ChartError::Render(format!("task failed: {}", e))));
    match result {
        Ok(scene) => Some(scene),
        Err(e) => {
            warn!("Failed to render {}: {}", chart, e);
            None
        }
    }
}

/// Render every chart of the page concurrently
///
/// Only an invalid configuration fails the whole page; chart failures leave
/// their containers empty.
pub async fn render_page(config: &PageConfig, data_dir: impl AsRef<Path>) -> ChartResult<Page> {
    config.validate()?;
    let data_dir: PathBuf = data_dir.as_ref().to_path_buf();

    let boxplot = {
        let (config, dir) = (config.boxplot.clone(), data_dir.clone());
        tokio::spawn(async move { render_boxplot(&config, &dir).await })
    };
    let barplot = {
        let (config, dir) = (config.barplot.clone(), data_dir.clone());
        tokio::spawn(async move { render_barplot(&config, &dir).await })
    };
    let lineplot = {
        let (config, dir) = (config.lineplot.clone(), data_dir.clone());
        tokio::spawn(async move { render_lineplot(&config, &dir).await })
    };

    let (boxplot, barplot, lineplot) = tokio::join!(
        settle("boxplot", boxplot),
        settle("barplot", barplot),
        settle("lineplot", lineplot),
    );

    let mut page = Page::new(config.title.as_str());
    page.push(config.boxplot.container.as_str(), boxplot);
    page.push(config.barplot.container.as_str(), barplot);
    page.push(config.lineplot.container.as_str(), lineplot);

    info!(
        "Rendered {} of {} charts from {:?}",
        page.rendered(),
        page.charts.len(),
        data_dir
    );
    Ok(page)
}
