use std::ops::Range;

use thiserror::Error;
use tint_gpu::VERTEX_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    PointList,
    LineList,
    LineStrip,
    #[default]
    TriangleList,
    TriangleStrip,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DrawError {
    #[error("the triangle needs exactly {expected} vertices, got {0}", expected = VERTEX_COUNT)]
    VertexCount(u32),
    #[error("draw call has no instances")]
    NoInstances,
    #[error("topology {0:?} is not supported, only triangle lists are")]
    Topology(Topology),
}

/// A non-indexed draw call with no vertex buffers bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
    pub topology: Topology,
}

impl Draw {
    pub fn new(vertices: Range<u32>, instances: Range<u32>) -> Self {
        Self { vertices, instances, topology: Topology::default() }
    }

    /// The one draw call the triangle shader expects.
    pub fn triangle() -> Self {
        Self::new(0..VERTEX_COUNT, 0..1)
    }

    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn validate(&self) -> Result<(), DrawError> {
        if self.topology != Topology::TriangleList {
            return Err(DrawError::Topology(self.topology));
        }
        let count = self.vertices.end.saturating_sub(self.vertices.start);
        if count != VERTEX_COUNT {
            return Err(DrawError::VertexCount(count));
        }
        if self.instances.is_empty() {
            return Err(DrawError::NoInstances);
        }
        Ok(())
    }
}
