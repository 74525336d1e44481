//! campus: hierarchical university-structure manager.
//!
//! Models an institution as an arena-backed tree of colleges,
//! departments, teachers and students and answers two aggregate
//! queries, net budget and student count, whose combination rule
//! depends on the node role. Trees are described declaratively in TOML
//! roster files.

use std::path::Path;

pub mod cli;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod report;
pub mod roster;
pub mod util;

pub use domain::{DepartmentRoster, Money, NodeKind, OrgNode, OrgTree, OrgUnit, Role};
pub use errors::{RosterError, RosterResult};
pub use roster::RosterBuilder;

/// Load a roster file into an organization tree.
pub fn load_roster(path: impl AsRef<Path>) -> RosterResult<OrgTree> {
    RosterBuilder::new().build_from_file(path.as_ref())
}
