//! Domain entities: node payloads for the organization tree

use std::fmt;

/// Monetary amounts are plain f64; sign conventions are carried by the
/// aggregation rules, not by the type.
pub type Money = f64;

/// Closed set of node roles.
///
/// Aggregation never inspects concrete payloads across the tree; a
/// composite classifies its children by role tag only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Teacher,
    Student,
    Department,
    College,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Department => "Department",
            Role::College => "College",
        };
        write!(f, "{}", s)
    }
}

/// Kind-specific payload of a node.
///
/// Leaves carry their scalar data, composites carry none (their state is
/// the ordered child list held by the arena).
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Teacher { subject: String, salary: Money },
    Student { id: String, tuition_fee: Money },
    Department,
    College,
}

impl NodeKind {
    pub fn role(&self) -> Role {
        match self {
            NodeKind::Teacher { .. } => Role::Teacher,
            NodeKind::Student { .. } => Role::Student,
            NodeKind::Department => Role::Department,
            NodeKind::College => Role::College,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, NodeKind::Department | NodeKind::College)
    }

    /// Intrinsic signed budget contribution of a leaf.
    ///
    /// A teacher's salary is a cost (positive on the expense side), a
    /// student's tuition is reported negative. Composites have no
    /// intrinsic contribution; theirs is computed over children.
    pub fn intrinsic_budget(&self) -> Money {
        match self {
            NodeKind::Teacher { salary, .. } => *salary,
            NodeKind::Student { tuition_fee, .. } => -tuition_fee,
            NodeKind::Department | NodeKind::College => 0.0,
        }
    }

    /// Intrinsic student count of a leaf (0 for composites).
    pub fn intrinsic_student_count(&self) -> usize {
        match self {
            NodeKind::Student { .. } => 1,
            _ => 0,
        }
    }
}

/// Data payload for tree nodes: a named organizational unit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnit {
    /// Display label, immutable after construction
    pub name: String,
    /// Role-specific payload
    pub kind: NodeKind,
}

impl OrgUnit {
    pub fn teacher(
        name: impl Into<String>,
        subject: impl Into<String>,
        salary: Money,
    ) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Teacher {
                subject: subject.into(),
                salary,
            },
        }
    }

    pub fn student(name: impl Into<String>, id: impl Into<String>, tuition_fee: Money) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Student {
                id: id.into(),
                tuition_fee,
            },
        }
    }

    pub fn department(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Department,
        }
    }

    pub fn college(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::College,
        }
    }

    pub fn role(&self) -> Role {
        self.kind.role()
    }
}

impl fmt::Display for OrgUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.role(), self.name)
    }
}
