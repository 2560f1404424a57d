// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration as read from TOML, before validation.
///
/// ```toml
/// [generate]
/// nodes = 6
/// probability = 0.3
/// seed = 42
///
/// [output]
/// dir = "example_output"
/// render = true
/// format = "svg"
/// ```
///
/// Every section and key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub generate: GenerateSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration. Construct through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub generate: GenerateSection,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(generate: GenerateSection, output: OutputSection) -> Self {
        Self { generate, output }
    }
}

/// `[generate]` section: parameters of the random DAG.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
    /// Number of nodes, must be > 0.
    #[serde(default = "default_nodes")]
    pub nodes: usize,

    /// Per-edge inclusion probability in `[0, 1]`.
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// RNG seed; `0` picks one from the clock.
    #[serde(default)]
    pub seed: u64,
}

fn default_nodes() -> usize {
    6
}

fn default_probability() -> f64 {
    0.3
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            probability: default_probability(),
            seed: 0,
        }
    }
}

/// `[output]` section: where diagrams go and how they are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Remove and recreate `dir` before writing.
    #[serde(default = "default_true")]
    pub clean: bool,

    /// Invoke the external renderer after writing each `.dot` file.
    #[serde(default = "default_true")]
    pub render: bool,

    #[serde(default = "default_renderer")]
    pub renderer: String,

    /// Graphviz output format (`png`, `svg`, ...).
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_rankdir")]
    pub rankdir: String,

    /// Show labels as `T<label>`.
    #[serde(default = "default_true")]
    pub names: bool,
}

fn default_dir() -> PathBuf {
    PathBuf::from("example_output")
}

fn default_true() -> bool {
    true
}

fn default_renderer() -> String {
    "dot".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_rankdir() -> String {
    "LR".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            clean: true,
            render: true,
            renderer: default_renderer(),
            format: default_format(),
            rankdir: default_rankdir(),
            names: true,
        }
    }
}

/// Values given on the command line; `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub nodes: Option<usize>,
    pub probability: Option<f64>,
    pub seed: Option<u64>,
    pub dir: Option<PathBuf>,
    pub names: Option<bool>,
    pub render: Option<bool>,
}

impl ConfigOverrides {
    pub fn apply(&self, raw: &mut RawConfigFile) {
        if let Some(nodes) = self.nodes {
            raw.generate.nodes = nodes;
        }
        if let Some(p) = self.probability {
            raw.generate.probability = p;
        }
        if let Some(seed) = self.seed {
            raw.generate.seed = seed;
        }
        if let Some(ref dir) = self.dir {
            raw.output.dir = dir.clone();
        }
        if let Some(names) = self.names {
            raw.output.names = names;
        }
        if let Some(render) = self.render {
            raw.output.render = render;
        }
    }
}
