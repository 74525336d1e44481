//! Arena-based organization tree with role-aware aggregation.
//!
//! The arena is the single owner of every node; composites hold their
//! children as ordered index lists (insertion order is display order).
//! Aggregate queries are pure functions of the current subtree: no
//! caching, no staleness, and they never fail. A dangling index simply
//! contributes nothing.

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::entities::{Money, NodeKind, OrgUnit, Role};

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct OrgNode {
    /// Organizational unit data for this node
    pub data: OrgUnit,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree for one institution hierarchy.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. Nodes can only be attached to an already existing parent,
/// so the structure is acyclic by construction.
#[derive(Debug)]
pub struct OrgTree {
    arena: Arena<OrgNode>,
    root: Option<Index>,
}

impl Default for OrgTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: OrgUnit, parent: Option<Index>) -> Index {
        let node = OrgNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    /// Detach `child` from `parent` and discard its whole subtree.
    ///
    /// Removing a node that is not among `parent`'s children is a
    /// silent no-op; the composite contract is exception-free.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_child(&mut self, parent: Index, child: Index) {
        let Some(parent_node) = self.arena.get(parent) else {
            return;
        };
        let Some(pos) = parent_node.children.iter().position(|&c| c == child) else {
            debug!("remove of non-member child ignored");
            return;
        };
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.remove(pos);
        }

        let mut stack = vec![child];
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.remove(idx) {
                stack.extend(node.children);
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut OrgNode> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Net budget of the subtree rooted at `idx`.
    ///
    /// Leaves report their intrinsic contribution (salary as cost,
    /// tuition negative). A College sums children uniformly, with an
    /// explicit 0 for the empty child list. A Department classifies
    /// children by role tag: teacher-role budgets accumulate as cost,
    /// student-role budgets are subtracted by absolute value, so its
    /// result is total salaries minus total tuition. Children of any
    /// other role are excluded from the department aggregate by policy.
    #[instrument(level = "trace", skip(self))]
    pub fn budget(&self, idx: Index) -> Money {
        let Some(node) = self.get_node(idx) else {
            return 0.0;
        };
        match node.data.role() {
            Role::Teacher | Role::Student => node.data.kind.intrinsic_budget(),
            Role::College => {
                if node.children.is_empty() {
                    return 0.0;
                }
                node.children.iter().map(|&child| self.budget(child)).sum()
            }
            Role::Department => {
                let mut salaries = 0.0;
                let mut tuition = 0.0;
                for &child in &node.children {
                    let Some(child_node) = self.get_node(child) else {
                        continue;
                    };
                    match child_node.data.role() {
                        Role::Teacher => salaries += self.budget(child),
                        // tuition is reported negative by the leaf;
                        // the department subtracts its magnitude
                        Role::Student => tuition += self.budget(child).abs(),
                        _ => {}
                    }
                }
                salaries - tuition
            }
        }
    }

    /// Number of student leaves in the subtree rooted at `idx`.
    ///
    /// A College sums over all children (explicit 0 on empty), a
    /// Department counts only its student-role children.
    #[instrument(level = "trace", skip(self))]
    pub fn student_count(&self, idx: Index) -> usize {
        let Some(node) = self.get_node(idx) else {
            return 0;
        };
        match node.data.role() {
            Role::Teacher | Role::Student => node.data.kind.intrinsic_student_count(),
            Role::College => {
                if node.children.is_empty() {
                    return 0;
                }
                node.children
                    .iter()
                    .map(|&child| self.student_count(child))
                    .sum()
            }
            Role::Department => node
                .children
                .iter()
                .filter_map(|&child| self.get_node(child))
                .filter(|child| child.data.role() == Role::Student)
                .count(),
        }
    }

    /// First node (preorder) whose name matches exactly.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.data.name == name)
            .map(|(idx, _)| idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Rosters of every department in the subtree, in traversal order.
    ///
    /// Read-only walk: colleges delegate to their children without
    /// emitting anything themselves, departments emit one roster with
    /// all teacher rows first, then all student rows, each pass in
    /// insertion order. Repeated invocation yields the same result.
    #[instrument(level = "debug", skip(self))]
    pub fn department_rosters(&self, idx: Index) -> Vec<DepartmentRoster> {
        let mut rosters = Vec::new();
        self.collect_rosters(idx, &mut rosters);
        rosters
    }

    fn collect_rosters(&self, idx: Index, rosters: &mut Vec<DepartmentRoster>) {
        let Some(node) = self.get_node(idx) else {
            return;
        };
        match node.data.role() {
            Role::College => {
                for &child in &node.children {
                    self.collect_rosters(child, rosters);
                }
            }
            Role::Department => rosters.push(self.department_roster(idx, node)),
            Role::Teacher | Role::Student => {}
        }
    }

    fn department_roster(&self, idx: Index, node: &OrgNode) -> DepartmentRoster {
        let mut teachers = Vec::new();
        let mut students = Vec::new();
        for &child in &node.children {
            let Some(child_node) = self.get_node(child) else {
                continue;
            };
            match &child_node.data.kind {
                NodeKind::Teacher { subject, salary } => teachers.push(TeacherRow {
                    name: child_node.data.name.clone(),
                    subject: subject.clone(),
                    salary: *salary,
                }),
                NodeKind::Student { id, tuition_fee } => students.push(StudentRow {
                    name: child_node.data.name.clone(),
                    id: id.clone(),
                    tuition_fee: *tuition_fee,
                }),
                _ => {}
            }
        }
        DepartmentRoster {
            name: node.data.name.clone(),
            budget: self.budget(idx),
            student_count: self.student_count(idx),
            teachers,
            students,
        }
    }

    /// Structure view of the subtree for terminal display.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree_string(&self, idx: Index) -> Option<Tree<String>> {
        let node = self.get_node(idx)?;
        let label = format!(
            "{} [students: {}, budget: {:.2}]",
            node.data,
            self.student_count(idx),
            self.budget(idx),
        );
        let leaves: Vec<_> = node
            .children
            .iter()
            .filter_map(|&child| self.to_tree_string(child))
            .collect();
        Some(Tree::new(label).with_leaves(leaves))
    }
}

/// One department's role-partitioned listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRoster {
    pub name: String,
    pub budget: Money,
    pub student_count: usize,
    pub teachers: Vec<TeacherRow>,
    pub students: Vec<StudentRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherRow {
    pub name: String,
    pub subject: String,
    pub salary: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub name: String,
    pub id: String,
    pub tuition_fee: Money,
}

pub struct TreeIterator<'a> {
    tree: &'a OrgTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a OrgTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a OrgTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a OrgTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // root college
    // ├── department (2 teachers, 3 students)
    // └── empty college
    fn sample_tree() -> (OrgTree, Index, Index, Index) {
        let mut tree = OrgTree::new();
        let root = tree.insert_node(OrgUnit::college("New Era University"), None);
        let dept = tree.insert_node(
            OrgUnit::department("Bachelor of Science in Biology"),
            Some(root),
        );
        tree.insert_node(
            OrgUnit::teacher("Dr. Maria Santos", "Molecular Biology", 95_000.0),
            Some(dept),
        );
        tree.insert_node(
            OrgUnit::teacher("Prof. Juan Dela Cruz", "Genetics", 90_000.0),
            Some(dept),
        );
        tree.insert_node(OrgUnit::student("Angela Reyes", "BIO001", 85_000.0), Some(dept));
        tree.insert_node(OrgUnit::student("Bryan Cruz", "BIO002", 80_000.0), Some(dept));
        tree.insert_node(OrgUnit::student("Carla Gomez", "BIO003", 75_000.0), Some(dept));
        let empty = tree.insert_node(OrgUnit::college("College of Law"), Some(root));
        (tree, root, dept, empty)
    }

    #[test]
    fn given_department_when_computing_budget_then_salaries_minus_tuition() {
        let (tree, _, dept, _) = sample_tree();
        assert_eq!(tree.budget(dept), 185_000.0 - 240_000.0);
        assert_eq!(tree.student_count(dept), 3);
    }

    #[test]
    fn given_empty_college_when_querying_then_zero() {
        let (tree, _, _, empty) = sample_tree();
        assert_eq!(tree.budget(empty), 0.0);
        assert_eq!(tree.student_count(empty), 0);
    }

    #[test]
    fn given_college_when_computing_budget_then_sums_children() {
        let (tree, root, dept, empty) = sample_tree();
        assert_eq!(tree.budget(root), tree.budget(dept) + tree.budget(empty));
        assert_eq!(tree.student_count(root), 3);
    }

    #[test]
    fn given_queries_when_repeated_then_results_are_stable() {
        let (tree, root, _, _) = sample_tree();
        let first = (tree.budget(root), tree.student_count(root));
        for _ in 0..3 {
            assert_eq!((tree.budget(root), tree.student_count(root)), first);
        }
    }

    #[test]
    fn given_college_under_department_when_aggregating_then_it_is_ignored() {
        let (mut tree, _, dept, _) = sample_tree();
        let before = (tree.budget(dept), tree.student_count(dept));
        let nested = tree.insert_node(OrgUnit::college("Nested"), Some(dept));
        tree.insert_node(OrgUnit::student("Ghost", "X001", 1_000.0), Some(nested));
        // the nested college (and everything under it) contributes 0
        assert_eq!((tree.budget(dept), tree.student_count(dept)), before);
    }

    #[test]
    fn given_non_member_child_when_removing_then_no_op() {
        let (mut tree, root, dept, empty) = sample_tree();
        let before = (tree.budget(root), tree.student_count(root), tree.node_count());
        // dept is a child of root, not of the empty college
        tree.remove_child(empty, dept);
        assert_eq!(
            (tree.budget(root), tree.student_count(root), tree.node_count()),
            before
        );
    }

    #[test]
    fn given_member_child_when_removing_then_subtree_is_discarded() {
        let (mut tree, root, dept, _) = sample_tree();
        tree.remove_child(root, dept);
        assert_eq!(tree.budget(root), 0.0);
        assert_eq!(tree.student_count(root), 0);
        assert!(tree.get_node(dept).is_none());
        // root + empty college remain
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn given_interleaved_children_when_building_roster_then_teachers_precede_students() {
        let mut tree = OrgTree::new();
        let dept = tree.insert_node(OrgUnit::department("Mixed"), None);
        tree.insert_node(OrgUnit::student("S1", "ID1", 10.0), Some(dept));
        tree.insert_node(OrgUnit::teacher("T1", "Math", 20.0), Some(dept));
        tree.insert_node(OrgUnit::student("S2", "ID2", 10.0), Some(dept));
        tree.insert_node(OrgUnit::teacher("T2", "Physics", 20.0), Some(dept));

        let rosters = tree.department_rosters(dept);
        assert_eq!(rosters.len(), 1);
        let names: Vec<_> = rosters[0].teachers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["T1", "T2"]);
        let names: Vec<_> = rosters[0].students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["S1", "S2"]);
    }

    #[test]
    fn given_tree_when_iterating_postorder_then_leaves_come_before_root() {
        let (tree, root, _, _) = sample_tree();
        let order: Vec<_> = tree.iter_postorder().map(|(idx, _)| idx).collect();
        assert_eq!(*order.last().unwrap(), root);
        assert_eq!(order.len(), tree.node_count());
    }

    #[test]
    fn given_tree_when_finding_by_name_then_first_preorder_match() {
        let (tree, _, dept, _) = sample_tree();
        assert_eq!(
            tree.find_by_name("Bachelor of Science in Biology"),
            Some(dept)
        );
        assert_eq!(tree.find_by_name("does not exist"), None);
    }
}
