//! In-memory host document.
//!
//! `Document` plays the role of the design tool: it owns the node tree,
//! the current page and selection, and the font library. It enforces the
//! host's text rules: characters and range fonts may only be written with
//! fonts that have been loaded.

use crate::fonts::FontLibrary;
use crate::host::{FontLoader, HostError, TextHost};
use crate::id::NodeId;
use crate::model::{
    BooleanOperation, Bounds, FontName, FontRef, NodeKind, SceneGraph, SceneNode, TextContent,
};
use crate::styles::LocalStyles;
use petgraph::graph::NodeIndex;

pub struct Document {
    pub graph: SceneGraph,
    page: NodeIndex,
    selection: Vec<NodeId>,
    fonts: FontLibrary,
    styles: LocalStyles,
    next_serial: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with one page and the standard font library.
    pub fn new() -> Self {
        Self::with_fonts(FontLibrary::standard())
    }

    pub fn with_fonts(fonts: FontLibrary) -> Self {
        let root = SceneNode::new(NodeId::from_parts(0, 0), "Document", NodeKind::Document);
        let mut graph = SceneGraph::new(root);
        let page = SceneNode::new(NodeId::from_parts(0, 1), "Page 1", NodeKind::Page);
        let page = graph.add_node(graph.root, page);

        Self {
            graph,
            page,
            selection: Vec::new(),
            fonts,
            styles: LocalStyles::default(),
            next_serial: 1,
        }
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    pub fn styles(&self) -> &LocalStyles {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut LocalStyles {
        &mut self.styles
    }

    pub fn current_page(&self) -> &SceneNode {
        &self.graph.graph[self.page]
    }

    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    pub fn set_selection(&mut self, ids: Vec<NodeId>) -> Result<(), HostError> {
        for id in &ids {
            self.node(*id)?;
        }
        self.selection = ids;
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&SceneNode, HostError> {
        self.graph.get_by_id(id).ok_or(HostError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, HostError> {
        self.graph
            .get_by_id_mut(id)
            .ok_or(HostError::NodeNotFound(id))
    }

    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        let idx = self.graph.index_of(id)?;
        let parent = self.graph.parent(idx)?;
        Some(self.graph.graph[parent].id)
    }

    pub fn children_of(&self, id: NodeId) -> Result<Vec<&SceneNode>, HostError> {
        let idx = self.graph.index_of(id).ok_or(HostError::NodeNotFound(id))?;
        Ok(self
            .graph
            .children(idx)
            .into_iter()
            .map(|child| &self.graph.graph[child])
            .collect())
    }

    fn allocate_id(&mut self) -> NodeId {
        self.next_serial += 1;
        NodeId::from_parts(1, self.next_serial)
    }

    /// Create a node under `parent` (the current page when `None`).
    /// `build` receives the freshly allocated id.
    pub fn append(
        &mut self,
        parent: Option<NodeId>,
        build: impl FnOnce(NodeId) -> SceneNode,
    ) -> Result<NodeId, HostError> {
        let parent_idx = match parent {
            Some(parent) => {
                let idx = self
                    .graph
                    .index_of(parent)
                    .ok_or(HostError::NodeNotFound(parent))?;
                if !self.graph.graph[idx].kind.accepts_children() {
                    return Err(HostError::CannotHaveChildren(parent));
                }
                idx
            }
            None => self.page,
        };
        let id = self.allocate_id();
        self.graph.add_node(parent_idx, build(id));
        Ok(id)
    }

    /// Remove a node and its subtree. The document and page cannot be
    /// removed.
    pub fn remove(&mut self, id: NodeId) -> Result<SceneNode, HostError> {
        let idx = self.graph.index_of(id).ok_or(HostError::NodeNotFound(id))?;
        if !self.graph.graph[idx].kind.is_scene_node() {
            return Err(HostError::CannotRemove(id));
        }
        let removed = self
            .graph
            .remove_subtree(idx)
            .ok_or(HostError::NodeNotFound(id))?;
        self.selection.retain(|s| self.graph.index_of(*s).is_some());
        Ok(removed)
    }

    /// Wrap `ids` (which must share a parent) in a new group placed in that
    /// parent.
    pub fn group(&mut self, ids: &[NodeId], name: Option<&str>) -> Result<NodeId, HostError> {
        self.wrap(ids, name.unwrap_or("Group"), NodeKind::Group)
    }

    /// Combine `ids` (which must share a parent) into a boolean operation
    /// node placed in that parent.
    pub fn boolean_operation(
        &mut self,
        ids: &[NodeId],
        operation: BooleanOperation,
        name: Option<&str>,
    ) -> Result<NodeId, HostError> {
        let default_name = match operation {
            BooleanOperation::Union => "Union",
            BooleanOperation::Subtract => "Subtract",
            BooleanOperation::Intersect => "Intersect",
            BooleanOperation::Exclude => "Exclude",
        };
        self.wrap(
            ids,
            name.unwrap_or(default_name),
            NodeKind::BooleanOperation { operation },
        )
    }

    fn wrap(&mut self, ids: &[NodeId], name: &str, kind: NodeKind) -> Result<NodeId, HostError> {
        let mut indices = Vec::with_capacity(ids.len());
        for id in ids {
            indices.push(self.graph.index_of(*id).ok_or(HostError::NodeNotFound(*id))?);
        }
        let parent = indices
            .first()
            .and_then(|idx| self.graph.parent(*idx))
            .ok_or(HostError::MixedParents)?;
        if indices.iter().any(|idx| self.graph.parent(*idx) != Some(parent)) {
            return Err(HostError::MixedParents);
        }

        let wrapper_id = self.allocate_id();
        let wrapper = SceneNode::new(wrapper_id, name, kind);
        let wrapper_idx = self.graph.add_node(parent, wrapper);
        for idx in indices {
            self.graph.reparent_node(idx, wrapper_idx);
        }
        Ok(wrapper_id)
    }

    /// Bounds in parent coordinates. Groups and boolean operations span
    /// their children.
    pub fn bounds(&self, id: NodeId) -> Result<Bounds, HostError> {
        let idx = self.graph.index_of(id).ok_or(HostError::NodeNotFound(id))?;
        Ok(self.bounds_at(idx))
    }

    fn bounds_at(&self, idx: NodeIndex) -> Bounds {
        let node = &self.graph.graph[idx];
        if node.kind.spans_children() {
            let children: Vec<Bounds> = self
                .graph
                .children(idx)
                .into_iter()
                .map(|child| self.bounds_at(child))
                .collect();
            if children.is_empty() {
                return Bounds {
                    x: node.x,
                    y: node.y,
                    width: 0.0,
                    height: 0.0,
                };
            }
            let min_x = children.iter().map(|b| b.x).fold(f32::MAX, f32::min);
            let min_y = children.iter().map(|b| b.y).fold(f32::MAX, f32::min);
            let max_x = children.iter().map(|b| b.x + b.width).fold(f32::MIN, f32::max);
            let max_y = children.iter().map(|b| b.y + b.height).fold(f32::MIN, f32::max);
            return Bounds {
                x: min_x,
                y: min_y,
                width: max_x - min_x,
                height: max_y - min_y,
            };
        }
        let (width, height) = node.size().unwrap_or((0.0, 0.0));
        Bounds {
            x: node.x,
            y: node.y,
            width,
            height,
        }
    }

    /// Move a node to `(x, y)`. Moving a group shifts its children.
    pub fn move_to(&mut self, id: NodeId, x: f32, y: f32) -> Result<Bounds, HostError> {
        let idx = self.graph.index_of(id).ok_or(HostError::NodeNotFound(id))?;
        let current = self.bounds_at(idx);
        let (dx, dy) = (x - current.x, y - current.y);
        self.translate(idx, dx, dy);
        Ok(self.bounds_at(idx))
    }

    fn translate(&mut self, idx: NodeIndex, dx: f32, dy: f32) {
        if self.graph.graph[idx].kind.spans_children() {
            for child in self.graph.children(idx) {
                self.translate(child, dx, dy);
            }
        }
        let node = &mut self.graph.graph[idx];
        node.x += dx;
        node.y += dy;
    }

    fn text(&self, id: NodeId) -> Result<&TextContent, HostError> {
        self.node(id)?.text().ok_or(HostError::NotATextNode(id))
    }

    fn text_mut(&mut self, id: NodeId) -> Result<&mut TextContent, HostError> {
        self.node_mut(id)?
            .text_mut()
            .ok_or(HostError::NotATextNode(id))
    }

    fn require_loaded(&self, font: &FontRef) -> Result<(), HostError> {
        if self.fonts.is_loaded(font) {
            Ok(())
        } else {
            Err(HostError::FontNotLoaded(font.clone()))
        }
    }
}

impl FontLoader for Document {
    async fn load_font(&self, font: &FontRef) -> Result<(), HostError> {
        self.fonts.load(font).await
    }
}

impl TextHost for Document {
    fn characters(&self, node: NodeId) -> Result<String, HostError> {
        Ok(self.text(node)?.characters())
    }

    fn set_characters(&mut self, node: NodeId, text: &str) -> Result<(), HostError> {
        let content = self.text(node)?;
        for font in content.fonts_in_use() {
            self.require_loaded(font)?;
        }
        self.text_mut(node)?.set_characters(text);
        Ok(())
    }

    fn font_name(&self, node: NodeId) -> Result<FontName, HostError> {
        Ok(self.text(node)?.font_name())
    }

    fn set_font_name(&mut self, node: NodeId, font: &FontRef) -> Result<(), HostError> {
        self.text(node)?;
        self.require_loaded(font)?;
        self.text_mut(node)?.set_font(font.clone());
        Ok(())
    }

    fn range_font(&self, node: NodeId, start: usize, end: usize) -> Result<FontName, HostError> {
        let content = self.text(node)?;
        content
            .range_font(start, end)
            .ok_or(HostError::RangeOutOfBounds {
                start,
                end,
                len: content.len(),
            })
    }

    fn set_range_font(
        &mut self,
        node: NodeId,
        start: usize,
        end: usize,
        font: &FontRef,
    ) -> Result<(), HostError> {
        self.text(node)?;
        self.require_loaded(font)?;
        let content = self.text_mut(node)?;
        let len = content.len();
        if content.set_range_font(start, end, font) {
            Ok(())
        } else {
            Err(HostError::RangeOutOfBounds { start, end, len })
        }
    }
}
