//! JSON polygon and edge files.
//!
//! A polygon file is `[[x, y], ...]`. All-integer input is read for the exact
//! `I64Kernel`; anything else goes through `F64Kernel`. Integer coordinates
//! must stay inside `I64Kernel::COORD_LIMIT`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use visgraph::api::{polygon_to_f64, I64Kernel, Kernel, VisibilityGraph};
use visgraph::Vec2;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PolygonInput {
    Int(Vec<[i64; 2]>),
    Float(Vec<[f64; 2]>),
}

impl PolygonInput {
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    /// Float coordinates, converting integer input.
    pub fn to_f64(&self) -> Vec<Vec2<f64>> {
        match self {
            Self::Int(v) => polygon_to_f64(v),
            Self::Float(v) => v.iter().map(|p| Vec2::new(p[0], p[1])).collect(),
        }
    }
}

pub fn read_polygon(path: &Path) -> Result<PolygonInput> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let polygon: PolygonInput = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon from {}", path.display()))?;
    if let PolygonInput::Int(v) = &polygon {
        if let Some(i) = v.iter().position(|p| !I64Kernel::in_range(p)) {
            bail!(
                "{}: vertex {i} {:?} is outside the exact range |c| < 2^62",
                path.display(),
                v[i]
            );
        }
    }
    Ok(polygon)
}

/// Edge file contents: canonical pairs in comparator order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgesOut<T> {
    pub vertices: usize,
    pub edges: Vec<[[T; 2]; 2]>,
}

impl<T: Copy> EdgesOut<T> {
    pub fn from_graph<K: Kernel>(
        graph: &VisibilityGraph<K>,
        vertices: usize,
        coords: impl Fn(&K::Point) -> [T; 2],
    ) -> Self {
        Self {
            vertices,
            edges: graph.iter().map(|(a, b)| [coords(&a), coords(&b)]).collect(),
        }
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
