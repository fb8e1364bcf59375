/// Shared frame buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Instances: max_instances × 8 floats]
/// [Vectors: max_vector_vertices × 6 floats]
/// [Batches: max_batches × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::renderer::draw_list::DrawBatch;
use crate::renderer::instance::RenderInstance;
use crate::systems::vector::VectorVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 4;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_BATCHES: usize = 6;
pub const HEADER_BATCH_COUNT: usize = 7;
pub const HEADER_WORLD_WIDTH: usize = 8;
pub const HEADER_WORLD_HEIGHT: usize = 9;
pub const HEADER_STATUS_VERSION: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sprite instances.
    pub max_instances: usize,
    /// Maximum vector vertices.
    pub max_vector_vertices: usize,
    /// Maximum draw batches.
    pub max_batches: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of vector data section in floats.
    pub vector_data_floats: usize,
    /// Size of batch data section in floats.
    pub batch_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where batch data begins.
    pub batch_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_vector_vertices: usize, max_batches: usize) -> Self {
        let instance_data_floats = max_instances * RenderInstance::FLOATS;
        let vector_data_floats = max_vector_vertices * VectorVertex::FLOATS;
        let batch_data_floats = max_batches * DrawBatch::FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let vector_data_offset = instance_data_offset + instance_data_floats;
        let batch_data_offset = vector_data_offset + vector_data_floats;

        let buffer_total_floats = batch_data_offset + batch_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_vector_vertices,
            max_batches,
            instance_data_floats,
            vector_data_floats,
            batch_data_floats,
            instance_data_offset,
            vector_data_offset,
            batch_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_vector_vertices, config.max_batches)
    }
}
