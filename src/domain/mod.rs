//! Domain layer: entities and aggregation logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! roster loading). Every operation here is total.

pub mod arena;
pub mod entities;

pub use arena::{DepartmentRoster, OrgNode, OrgTree, StudentRow, TeacherRow};
pub use entities::{Money, NodeKind, OrgUnit, Role};
