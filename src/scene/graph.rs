use serde::Serialize;

use crate::foundation::error::{VmError, VmResult};
use crate::scene::component::{Component, Group, INITIAL_CAPACITY};

/// Path to each currently open group, outermost first.
///
/// Entry `i` is the child index of the `i`-th open group inside the previous one (or inside the
/// root list for `i == 0`). Children are append-only, so indices never go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupStack {
    path: Vec<usize>,
}

impl GroupStack {
    /// Number of open groups.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Return `true` when no group is open.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    fn push(&mut self, idx: usize) -> VmResult<()> {
        if self.path.len() == self.path.capacity() {
            let grow = self.path.capacity().max(INITIAL_CAPACITY);
            self.path
                .try_reserve_exact(grow)
                .map_err(|e| VmError::allocation(format!("grow group stack: {e}")))?;
        }
        self.path.push(idx);
        Ok(())
    }
}

/// Retained scene: the ordered root components plus the open-group bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneGraph {
    roots: Vec<Component>,
    #[serde(skip)]
    stack: GroupStack,
}

impl SceneGraph {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root-level components in insertion order.
    pub fn roots(&self) -> &[Component] {
        &self.roots
    }

    /// Open-group bookkeeping.
    pub fn stack(&self) -> &GroupStack {
        &self.stack
    }

    /// Total number of components, groups included.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Component::node_count).sum()
    }

    /// First component named `name` in document order.
    pub fn find(&self, name: &str) -> Option<&Component> {
        self.roots.iter().find_map(|c| c.find(name))
    }

    /// Names of the open groups, outermost first.
    pub fn open_groups(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.stack.depth());
        let mut level = &self.roots[..];
        for &idx in &self.stack.path {
            let Some(g) = level.get(idx).and_then(Component::as_group) else {
                break;
            };
            out.push(g.name.as_str());
            level = g.children();
        }
        out
    }

    /// Attach `component` to the innermost open group, or to the root list when none is open.
    ///
    /// Returns the component's index within its new parent.
    pub fn attach(&mut self, component: Component) -> VmResult<usize> {
        if self.stack.is_empty() {
            if self.roots.len() == self.roots.capacity() {
                let grow = self.roots.capacity().max(INITIAL_CAPACITY);
                self.roots
                    .try_reserve_exact(grow)
                    .map_err(|e| VmError::allocation(format!("grow root components: {e}")))?;
            }
            self.roots.push(component);
            return Ok(self.roots.len() - 1);
        }

        let parent = self.current_group_mut()?;
        parent.add_child(component)?;
        Ok(parent.len() - 1)
    }

    /// Attach a group exactly like [`SceneGraph::attach`], then make it the innermost open group.
    pub fn open_group(&mut self, group: Component) -> VmResult<()> {
        if group.as_group().is_none() {
            return Err(VmError::Other(anyhow::anyhow!(
                "open_group called with a {} component",
                group.kind_name()
            )));
        }
        let idx = self.attach(group)?;
        self.stack.push(idx)
    }

    /// Close the innermost open group and return its name, or `None` if no group is open.
    pub fn close_group(&mut self) -> Option<String> {
        let name = self.open_groups().last().map(|s| (*s).to_owned());
        self.stack.path.pop().map(|_| name.unwrap_or_default())
    }

    fn current_group_mut(&mut self) -> VmResult<&mut Group> {
        let stale = || VmError::Other(anyhow::anyhow!("open group path does not resolve"));

        let (first, rest) = self.stack.path.split_first().ok_or_else(stale)?;
        let mut group = self
            .roots
            .get_mut(*first)
            .and_then(Component::as_group_mut)
            .ok_or_else(stale)?;
        for &idx in rest {
            group = group
                .child_mut(idx)
                .and_then(Component::as_group_mut)
                .ok_or_else(stale)?;
        }
        Ok(group)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
