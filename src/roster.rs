//! Roster documents: declarative TOML descriptions of an institution.
//!
//! A roster file holds the institution name plus nested colleges,
//! departments and their members. `RosterBuilder` turns a document into
//! an [`OrgTree`], inserting parent-first so every node attaches to an
//! already existing composite.
//!
//! Validation happens here, not in the tree: the core accepts whatever
//! scalars it is given (sign semantics are the caller's contract), so
//! the loader is the place that rejects negative salaries and tuition.

use std::fs;
use std::path::Path;

use generational_arena::Index;
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{OrgTree, OrgUnit};
use crate::errors::{RosterError, RosterResult};

/// Top-level roster document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterDoc {
    /// Institution name (becomes the root college)
    pub name: String,
    #[serde(default)]
    pub colleges: Vec<CollegeSpec>,
}

/// A college, possibly containing sub-colleges.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollegeSpec {
    pub name: String,
    #[serde(default)]
    pub colleges: Vec<CollegeSpec>,
    #[serde(default)]
    pub departments: Vec<DepartmentSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepartmentSpec {
    pub name: String,
    #[serde(default)]
    pub teachers: Vec<TeacherSpec>,
    #[serde(default)]
    pub students: Vec<StudentSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeacherSpec {
    pub name: String,
    pub subject: String,
    pub salary: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentSpec {
    pub name: String,
    pub id: String,
    pub tuition_fee: f64,
}

/// Builds an [`OrgTree`] from roster documents.
#[derive(Debug, Default)]
pub struct RosterBuilder;

impl RosterBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build_from_file(&self, path: &Path) -> RosterResult<OrgTree> {
        if !path.exists() {
            return Err(RosterError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(RosterError::FileReadError)?;
        self.build_from_str(&content, path)
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn build_from_str(&self, content: &str, path: &Path) -> RosterResult<OrgTree> {
        let doc: RosterDoc =
            toml::from_str(content).map_err(|e| RosterError::InvalidFormat {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.build(&doc)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn build(&self, doc: &RosterDoc) -> RosterResult<OrgTree> {
        if doc.name.trim().is_empty() {
            return Err(RosterError::EmptyInstitutionName);
        }

        let mut tree = OrgTree::new();
        let root = tree.insert_node(OrgUnit::college(doc.name.as_str()), None);
        for college in &doc.colleges {
            self.add_college(&mut tree, root, college)?;
        }
        Ok(tree)
    }

    fn add_college(
        &self,
        tree: &mut OrgTree,
        parent: Index,
        spec: &CollegeSpec,
    ) -> RosterResult<()> {
        let idx = tree.insert_node(OrgUnit::college(spec.name.as_str()), Some(parent));
        for college in &spec.colleges {
            self.add_college(tree, idx, college)?;
        }
        for department in &spec.departments {
            self.add_department(tree, idx, department)?;
        }
        Ok(())
    }

    fn add_department(
        &self,
        tree: &mut OrgTree,
        parent: Index,
        spec: &DepartmentSpec,
    ) -> RosterResult<()> {
        let idx = tree.insert_node(OrgUnit::department(spec.name.as_str()), Some(parent));
        for teacher in &spec.teachers {
            check_amount(&teacher.name, teacher.salary)?;
            tree.insert_node(
                OrgUnit::teacher(
                    teacher.name.as_str(),
                    teacher.subject.as_str(),
                    teacher.salary,
                ),
                Some(idx),
            );
        }
        for student in &spec.students {
            check_amount(&student.name, student.tuition_fee)?;
            tree.insert_node(
                OrgUnit::student(student.name.as_str(), student.id.as_str(), student.tuition_fee),
                Some(idx),
            );
        }
        Ok(())
    }
}

fn check_amount(name: &str, amount: f64) -> RosterResult<()> {
    if amount < 0.0 {
        return Err(RosterError::NegativeAmount {
            name: name.to_string(),
            amount,
        });
    }
    Ok(())
}
