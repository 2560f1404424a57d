// src/export/mod.rs

//! Diagram export.
//!
//! - [`dot`] renders a graph to Graphviz DOT text (pure).
//! - [`render`] abstracts the external tool that rasterises a `.dot` file.
//!
//! File-write failures surface as [`DagError::IoError`]; renderer failures as
//! [`DagError::RendererUnavailable`] / [`DagError::RendererFailed`].

pub mod dot;
pub mod render;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::dag::GraphOperable;
use crate::errors::{DagError, Result};

pub use dot::{DotOptions, render_dot};
pub use render::{GraphvizRenderer, NoopRenderer, Renderer, with_suffix};

/// Files produced by [`save_dag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDiagram {
    pub dot_path: PathBuf,
    /// `None` when the renderer produced no image.
    pub image_path: Option<PathBuf>,
}

/// Write `<base>.dot` for `g` and hand it to `renderer`.
///
/// `ranks` (typically the execution layers) are drawn as same-rank groups.
pub async fn save_dag<G, R>(
    g: &G,
    base: &Path,
    ranks: Option<&[Vec<G::Node>]>,
    opts: &DotOptions,
    renderer: &mut R,
) -> Result<SavedDiagram>
where
    G: GraphOperable,
    R: Renderer + ?Sized,
{
    let dot_path = with_suffix(base, "dot");
    let text = render_dot(g, ranks, opts);

    tokio::fs::write(&dot_path, text).await?;

    let image_path = renderer.render(&dot_path, base).await?;

    match &image_path {
        Some(img) => info!(
            dot = %dot_path.display(),
            image = %img.display(),
            "saved DAG"
        ),
        None => info!(dot = %dot_path.display(), "saved DAG (not rendered)"),
    }

    Ok(SavedDiagram {
        dot_path,
        image_path,
    })
}

/// Make sure `dir` exists; with `clean`, remove whatever was there first.
pub async fn prepare_output_dir(dir: &Path, clean: bool) -> Result<()> {
    if clean {
        match tokio::fs::remove_dir_all(dir).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(DagError::IoError(err)),
        }
    }
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}
