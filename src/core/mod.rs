pub mod codec;
pub mod convert;
pub mod element;
pub mod json;
pub mod registry;
pub mod schema;
pub mod wire;
pub mod xml;

pub use codec::{ObjectSlot, ScalarSlot, WireScalar};
pub use convert::{CheckReport, Converter, WireFormat};
pub use element::{Element, Value};
pub use registry::WireType;
pub use schema::{FieldKind, FieldSpec, Finding, Placement, Severity};
pub use wire::{WireObject, ADMIN_NAMESPACE};
pub use crate::utils::error::Result;
