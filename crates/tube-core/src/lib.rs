//! Tube Assembly Core
//!
//! This crate contains the assembly state engine for chains of tube segments:
//! - Segment: one rigid rectangular tube with a mutable pose
//! - Placement: deriving a new segment's pose from its predecessor and a joint angle
//! - Projection: mapping pointer input onto the drag reference plane
//! - Assembly / AssemblyStore: the ordered chain, selection, and change notification
//! - History: snapshot-based undo/redo
//! - Export: portable JSON records

pub mod assembly;
pub mod export;
pub mod history;
pub mod observer;
pub mod placement;
pub mod projection;
pub mod segment;
pub mod store;
pub mod types;

pub use assembly::*;
pub use export::*;
pub use history::*;
pub use observer::*;
pub use placement::*;
pub use projection::*;
pub use segment::*;
pub use store::*;
pub use types::*;
