//! Export of the assembly to portable JSON records, and the matching import

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assembly::Assembly;
use crate::segment::Segment;
use crate::types::{DimensionError, Pose, TubeDimensions};

/// Export/import errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: DimensionError,
    },
}

/// Three components, serialized as `{x, y, z}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyzRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for XyzRecord {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<XyzRecord> for [f32; 3] {
    fn from(r: XyzRecord) -> Self {
        [r.x, r.y, r.z]
    }
}

impl From<XyzRecord> for Vec3 {
    fn from(r: XyzRecord) -> Self {
        Vec3::new(r.x, r.y, r.z)
    }
}

/// One exported segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub length: f32,
    pub position: XyzRecord,
    /// Euler angles in radians, XYZ order
    pub rotation: XyzRecord,
}

impl From<&Segment> for SegmentRecord {
    fn from(segment: &Segment) -> Self {
        let dims = segment.dimensions();
        Self {
            width: dims.width(),
            height: dims.height(),
            thickness: dims.thickness(),
            length: dims.length(),
            position: segment.pose.xyz.into(),
            rotation: segment.pose.rpy.into(),
        }
    }
}

impl SegmentRecord {
    /// Rebuild a segment with a fresh id
    pub fn to_segment(&self) -> Result<Segment, DimensionError> {
        let dimensions = TubeDimensions::new(self.width, self.height, self.thickness, self.length)?;
        let pose = Pose::new(self.position.into(), self.rotation.into());
        Ok(Segment::new(dimensions, pose))
    }
}

/// Export every segment in chain order
pub fn export(assembly: &Assembly) -> Vec<SegmentRecord> {
    assembly.segments().iter().map(SegmentRecord::from).collect()
}

/// Export as a pretty-printed JSON array
pub fn export_json(assembly: &Assembly) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&export(assembly))?)
}

/// Suggested file name for an export taken at `timestamp_millis`
pub fn export_file_name(timestamp_millis: i64) -> String {
    format!("tube-assembly-{timestamp_millis}.json")
}

/// Build an assembly from exported records
///
/// All records are validated before anything is built; one bad record
/// rejects the whole import.
pub fn import(records: &[SegmentRecord]) -> Result<Assembly, ExportError> {
    let segments = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .to_segment()
                .map_err(|source| ExportError::InvalidRecord { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Assembly::from_segments(segments))
}

/// Parse the export format back into an assembly
pub fn import_json(json: &str) -> Result<Assembly, ExportError> {
    let records: Vec<SegmentRecord> = serde_json::from_str(json)?;
    import(&records)
}
