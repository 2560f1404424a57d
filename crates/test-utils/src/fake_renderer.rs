use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use workflow_dag::errors::DagError;
use workflow_dag::export::render::RenderFuture;
use workflow_dag::export::{Renderer, with_suffix};

/// A fake renderer that:
/// - records every `.dot` path it was asked to render
/// - reports `<base>.fake` as the image without creating it
/// - or, when built with [`FakeRenderer::failing`], fails like a crashed
///   renderer process.
pub struct FakeRenderer {
    rendered: Arc<Mutex<Vec<PathBuf>>>,
    fail_with: Option<i32>,
}

impl FakeRenderer {
    pub fn new(rendered: Arc<Mutex<Vec<PathBuf>>>) -> Self {
        Self {
            rendered,
            fail_with: None,
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            rendered: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(code),
        }
    }
}

impl Renderer for FakeRenderer {
    fn render<'a>(&'a mut self, dot_path: &'a Path, out_base: &'a Path) -> RenderFuture<'a> {
        let rendered = Arc::clone(&self.rendered);
        let fail_with = self.fail_with;

        Box::pin(async move {
            if let Some(code) = fail_with {
                return Err(DagError::RendererFailed {
                    program: "fake".to_string(),
                    code: Some(code),
                });
            }

            {
                let mut guard = rendered.lock().unwrap();
                guard.push(dot_path.to_path_buf());
            }
            Ok(Some(with_suffix(out_base, "fake")))
        })
    }
}
