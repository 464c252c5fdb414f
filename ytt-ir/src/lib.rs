//! Data model for YAPI interface metadata.
//!
//! These types mirror the JSON shapes the YAPI server returns for
//! interface details and menu listings. They are consumed read-only by
//! the code generator; the fetch side owns their lifecycle.

mod artifact;
mod interface;
mod menu;

pub use artifact::GeneratedArtifact;
pub use interface::{InterfaceDescriptor, ParamDescriptor, ResponseBodyKind};
pub use menu::MenuExport;
