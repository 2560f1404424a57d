// src/export/render.rs

//! Pluggable diagram renderer.
//!
//! [`save_dag`](super::save_dag) talks to a `Renderer` rather than spawning a
//! process directly, so tests can swap in a fake and environments without
//! Graphviz can use [`NoopRenderer`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{DagError, Result};

/// Boxed future returned by [`Renderer::render`].
pub type RenderFuture<'a> = Pin<Box<dyn Future<Output = Result<Option<PathBuf>>> + Send + 'a>>;

/// Turns a `.dot` file into an image.
pub trait Renderer: Send {
    /// Render `dot_path` next to `out_base`.
    ///
    /// Returns the image path, or `None` if this renderer produces no file.
    fn render<'a>(&'a mut self, dot_path: &'a Path, out_base: &'a Path) -> RenderFuture<'a>;
}

/// Append `.{ext}` to a path without touching any dots already in it.
pub fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut s = base.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Runs Graphviz: `<program> -T<format> <in.dot> -o <out.format>`.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    pub program: String,
    pub format: String,
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }
}

impl Renderer for GraphvizRenderer {
    fn render<'a>(&'a mut self, dot_path: &'a Path, out_base: &'a Path) -> RenderFuture<'a> {
        Box::pin(async move {
            let out_path = with_suffix(out_base, &self.format);

            debug!(
                program = %self.program,
                input = %dot_path.display(),
                output = %out_path.display(),
                "invoking renderer"
            );

            let output = Command::new(&self.program)
                .arg(format!("-T{}", self.format))
                .arg(dot_path)
                .arg("-o")
                .arg(&out_path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|err| DagError::RendererUnavailable {
                    program: self.program.clone(),
                    reason: match err.kind() {
                        ErrorKind::NotFound => "binary not found on PATH".to_string(),
                        _ => err.to_string(),
                    },
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                debug!(program = %self.program, stderr = %stderr.trim(), "renderer stderr");
                return Err(DagError::RendererFailed {
                    program: self.program.clone(),
                    code: output.status.code(),
                });
            }

            info!(output = %out_path.display(), "rendered diagram");
            Ok(Some(out_path))
        })
    }
}

/// Renderer that does nothing; only the `.dot` file is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render<'a>(&'a mut self, _dot_path: &'a Path, _out_base: &'a Path) -> RenderFuture<'a> {
        Box::pin(async { Ok(None) })
    }
}
