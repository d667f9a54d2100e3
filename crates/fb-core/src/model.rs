//! Core data model for the host document.
//!
//! The document is a tree of `SceneNode` values stored in a stable graph:
//! edges go parent → child and carry an insertion sequence number so sibling
//! order survives removals (petgraph reuses vacated indices). Text nodes keep
//! one `FontRef` per character, mirroring the host's range-level font attribution.

use crate::id::NodeId;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

// ─── Colors & Paint ──────────────────────────────────────────────────────

fn opaque() -> f32 {
    1.0
}

/// RGBA color as sent by the UI. Channels are in [0.0, 1.0]; alpha
/// defaults to fully opaque when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub r: f32,
    #[serde(default)]
    pub g: f32,
    #[serde(default)]
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Opaque RGB triple, the host's paint color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Fill or stroke paint. Alpha travels as a separate `opacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid { color: Rgb, opacity: f32 },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid {
            color: Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            },
            opacity: color.a,
        }
    }
}

// ─── Effects ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    #[default]
    Normal,
}

/// Drop or inner shadow parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    pub offset: Vector,
    pub radius: f32,
    pub visible: bool,
    pub blend_mode: BlendMode,
}

impl Shadow {
    pub fn new(color: Color, offset: Vector, radius: f32) -> Self {
        Self {
            color,
            offset,
            radius,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }
}

/// A visual effect applied on top of a node's paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur { radius: f32, visible: bool },
    BackgroundBlur { radius: f32, visible: bool },
}

impl Effect {
    pub fn type_name(&self) -> &'static str {
        match self {
            Effect::DropShadow(_) => "DROP_SHADOW",
            Effect::InnerShadow(_) => "INNER_SHADOW",
            Effect::LayerBlur { .. } => "LAYER_BLUR",
            Effect::BackgroundBlur { .. } => "BACKGROUND_BLUR",
        }
    }
}

// ─── Fonts ───────────────────────────────────────────────────────────────

/// A typeface variant: `(family, style)`. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontRef {
    pub family: String,
    pub style: String,
}

impl FontRef {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Composed map key, `family::style`.
    pub fn key(&self) -> String {
        format!("{}::{}", self.family, self.style)
    }
}

/// Inter Regular, the host's default text font.
impl Default for FontRef {
    fn default() -> Self {
        Self::new("Inter", "Regular")
    }
}

impl fmt::Display for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// The font attributed to a text node or range: a single font, or the
/// `Mixed` sentinel when more than one font applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontName {
    Uniform(FontRef),
    Mixed,
}

impl FontName {
    pub fn as_uniform(&self) -> Option<&FontRef> {
        match self {
            FontName::Uniform(font) => Some(font),
            FontName::Mixed => None,
        }
    }

    /// Collapse a slice of per-character fonts into a `FontName`.
    /// Returns `None` for an empty slice.
    pub fn of_slice(fonts: &[FontRef]) -> Option<Self> {
        let (first, rest) = fonts.split_first()?;
        if rest.iter().all(|f| f == first) {
            Some(FontName::Uniform(first.clone()))
        } else {
            Some(FontName::Mixed)
        }
    }
}

/// Serialized as the font object, or the string `"mixed"`.
impl Serialize for FontName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FontName::Uniform(font) => font.serialize(serializer),
            FontName::Mixed => serializer.serialize_str("mixed"),
        }
    }
}

/// Map a numeric font weight to the host's style name.
pub fn style_for_weight(weight: u16) -> &'static str {
    match weight {
        100 => "Thin",
        200 => "Extra Light",
        300 => "Light",
        400 => "Regular",
        500 => "Medium",
        600 => "Semi Bold",
        700 => "Bold",
        800 => "Extra Bold",
        900 => "Black",
        _ => "Regular",
    }
}

// ─── Text ────────────────────────────────────────────────────────────────

/// Character content of a text node with per-character font attribution.
///
/// Indices count Unicode scalar values. `font` is the node-level font, used
/// while the node is empty and as the seed for newly written characters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    chars: Vec<char>,
    fonts: Vec<FontRef>,
    font: FontRef,
    pub font_size: f32,
}

impl TextContent {
    pub fn new(font: FontRef) -> Self {
        Self {
            chars: Vec::new(),
            fonts: Vec::new(),
            font,
            font_size: 12.0,
        }
    }

    /// Build content from consecutive `(text, font)` runs.
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = (&'a str, FontRef)>) -> Self {
        let mut content = Self::new(FontRef::default());
        for (text, font) in runs {
            for c in text.chars() {
                content.chars.push(c);
                content.fonts.push(font.clone());
            }
        }
        if let Some(first) = content.fonts.first() {
            content.font = first.clone();
        }
        content
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn characters(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn font_name(&self) -> FontName {
        FontName::of_slice(&self.fonts).unwrap_or_else(|| FontName::Uniform(self.font.clone()))
    }

    /// Font of `[start, end)`, or `None` when the range is empty or out of
    /// bounds.
    pub fn range_font(&self, start: usize, end: usize) -> Option<FontName> {
        if start >= end || end > self.len() {
            return None;
        }
        FontName::of_slice(&self.fonts[start..end])
    }

    /// Distinct fonts currently needed to render the node, in first-use
    /// order.
    pub fn fonts_in_use(&self) -> Vec<&FontRef> {
        if self.fonts.is_empty() {
            return vec![&self.font];
        }
        let mut used: Vec<&FontRef> = Vec::new();
        for font in &self.fonts {
            if !used.contains(&font) {
                used.push(font);
            }
        }
        used
    }

    pub fn set_font(&mut self, font: FontRef) {
        for f in &mut self.fonts {
            *f = font.clone();
        }
        self.font = font;
    }

    /// Replace the characters. New characters take the font of the first
    /// existing character, like the host does.
    pub fn set_characters(&mut self, text: &str) {
        let font = self.fonts.first().cloned().unwrap_or_else(|| self.font.clone());
        self.chars = text.chars().collect();
        self.fonts = vec![font.clone(); self.chars.len()];
        self.font = font;
    }

    /// Returns `false` when the range is empty or out of bounds.
    pub fn set_range_font(&mut self, start: usize, end: usize, font: &FontRef) -> bool {
        if start >= end || end > self.len() {
            return false;
        }
        for f in &mut self.fonts[start..end] {
            *f = font.clone();
        }
        if start == 0 {
            self.font = font.clone();
        }
        true
    }

    /// Auto-sized box: widest line × lines, using rough glyph metrics.
    pub fn approximate_size(&self) -> (f32, f32) {
        let text = self.characters();
        let lines = text.split('\n');
        let (mut widest, mut count) = (0usize, 0usize);
        for line in lines {
            widest = widest.max(line.chars().count());
            count += 1;
        }
        (
            widest as f32 * self.font_size * 0.55,
            count as f32 * self.font_size * 1.2,
        )
    }
}

// ─── Constraints & Corners ───────────────────────────────────────────────

/// Resize behaviour of a node along one axis when its parent resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintType {
    #[default]
    Min,
    Center,
    Max,
    Stretch,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constraints {
    pub horizontal: ConstraintType,
    pub vertical: ConstraintType,
}

/// Per-corner radii, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left_radius: f32,
    pub top_right_radius: f32,
    pub bottom_right_radius: f32,
    pub bottom_left_radius: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left_radius: radius,
            top_right_radius: radius,
            bottom_right_radius: radius,
            bottom_left_radius: radius,
        }
    }

    /// The shared radius, or `None` when corners differ (host: mixed).
    pub fn uniform_radius(&self) -> Option<f32> {
        let r = self.top_left_radius;
        (self.top_right_radius == r && self.bottom_right_radius == r && self.bottom_left_radius == r)
            .then_some(r)
    }
}

// ─── Scene Nodes ─────────────────────────────────────────────────────────

/// How a boolean operation combines its children's shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BooleanOperation {
    Union,
    Subtract,
    Intersect,
    Exclude,
}

impl BooleanOperation {
    /// Parse the host's operation tag (`"UNION"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "UNION" => Some(BooleanOperation::Union),
            "SUBTRACT" => Some(BooleanOperation::Subtract),
            "INTERSECT" => Some(BooleanOperation::Intersect),
            "EXCLUDE" => Some(BooleanOperation::Exclude),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            BooleanOperation::Union => "UNION",
            BooleanOperation::Subtract => "SUBTRACT",
            BooleanOperation::Intersect => "INTERSECT",
            BooleanOperation::Exclude => "EXCLUDE",
        }
    }
}

/// The node kinds of the host document.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root of the document; parent of pages.
    Document,
    Page,
    Frame { width: f32, height: f32 },
    Rectangle { width: f32, height: f32 },
    /// Transparent container; its bounds are its children's.
    Group,
    /// Shape combining its children; bounded like a group.
    BooleanOperation { operation: BooleanOperation },
    Text(TextContent),
}

impl NodeKind {
    /// Host type tag (`"FRAME"`, `"TEXT"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Document => "DOCUMENT",
            NodeKind::Page => "PAGE",
            NodeKind::Frame { .. } => "FRAME",
            NodeKind::Rectangle { .. } => "RECTANGLE",
            NodeKind::Group => "GROUP",
            NodeKind::BooleanOperation { .. } => "BOOLEAN_OPERATION",
            NodeKind::Text(_) => "TEXT",
        }
    }

    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Page
                | NodeKind::Frame { .. }
                | NodeKind::Group
                | NodeKind::BooleanOperation { .. }
        )
    }

    /// Kinds with no geometry of their own: bounds come from the children
    /// and moving the node moves them.
    pub fn spans_children(&self) -> bool {
        matches!(self, NodeKind::Group | NodeKind::BooleanOperation { .. })
    }

    /// Whether the node sits on the canvas (has a position).
    pub fn is_scene_node(&self) -> bool {
        !matches!(self, NodeKind::Document | NodeKind::Page)
    }

    pub fn has_paints(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame { .. }
                | NodeKind::Rectangle { .. }
                | NodeKind::BooleanOperation { .. }
                | NodeKind::Text(_)
        )
    }

    pub fn has_effects(&self) -> bool {
        self.is_scene_node()
    }

    pub fn has_corners(&self) -> bool {
        matches!(self, NodeKind::Frame { .. } | NodeKind::Rectangle { .. })
    }

    pub fn has_constraints(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame { .. } | NodeKind::Rectangle { .. } | NodeKind::Text(_)
        )
    }
}

/// A single node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub visible: bool,
    /// Position relative to the nearest frame or page.
    pub x: f32,
    pub y: f32,
    pub fills: SmallVec<[Paint; 1]>,
    pub strokes: SmallVec<[Paint; 1]>,
    pub stroke_weight: f32,
    pub effects: SmallVec<[Effect; 1]>,
    pub corners: CornerRadii,
    pub constraints: Constraints,
}

impl SceneNode {
    pub fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            visible: true,
            x: 0.0,
            y: 0.0,
            fills: SmallVec::new(),
            strokes: SmallVec::new(),
            stroke_weight: 1.0,
            effects: SmallVec::new(),
            corners: CornerRadii::default(),
            constraints: Constraints::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Intrinsic size, for kinds that have one.
    pub fn size(&self) -> Option<(f32, f32)> {
        match &self.kind {
            NodeKind::Frame { width, height } | NodeKind::Rectangle { width, height } => {
                Some((*width, *height))
            }
            NodeKind::Text(content) => Some(content.approximate_size()),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&TextContent> {
        match &self.kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextContent> {
        match &mut self.kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }
}

/// Axis-aligned bounds in parent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// ─── Scene Graph ─────────────────────────────────────────────────────────

/// The node tree. Edge weights are insertion sequence numbers that define
/// sibling order.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    pub graph: StableDiGraph<SceneNode, u64>,
    pub root: NodeIndex,
    pub id_index: HashMap<NodeId, NodeIndex>,
    next_seq: u64,
}

impl SceneGraph {
    /// Create a graph holding only `root`.
    #[must_use]
    pub fn new(root: SceneNode) -> Self {
        let mut graph = StableDiGraph::new();
        let id = root.id;
        let root = graph.add_node(root);

        let mut id_index = HashMap::new();
        id_index.insert(id, root);

        Self {
            graph,
            root,
            id_index,
            next_seq: 0,
        }
    }

    fn seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Add a node as the last child of `parent`. Returns the new node's index.
    pub fn add_node(&mut self, parent: NodeIndex, node: SceneNode) -> NodeIndex {
        let id = node.id;
        let idx = self.graph.add_node(node);
        let seq = self.seq();
        self.graph.add_edge(parent, idx, seq);
        self.id_index.insert(id, idx);
        idx
    }

    /// Remove a node and all of its descendants. Returns the removed node.
    pub fn remove_subtree(&mut self, idx: NodeIndex) -> Option<SceneNode> {
        let mut stack = self.children(idx);
        while let Some(child) = stack.pop() {
            stack.extend(self.children(child));
            if let Some(removed) = self.graph.remove_node(child) {
                self.id_index.remove(&removed.id);
            }
        }
        let removed = self.graph.remove_node(idx)?;
        self.id_index.remove(&removed.id);
        Some(removed)
    }

    pub fn get_by_id(&self, id: NodeId) -> Option<&SceneNode> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    pub fn get_by_id_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.id_index
            .get(&id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    /// Move a node to the end of `new_parent`'s children.
    pub fn reparent_node(&mut self, child: NodeIndex, new_parent: NodeIndex) {
        if let Some(old_parent) = self.parent(child)
            && let Some(edge) = self.graph.find_edge(old_parent, child)
        {
            self.graph.remove_edge(edge);
        }
        let seq = self.seq();
        self.graph.add_edge(new_parent, child, seq);
    }

    /// Children of a node in sibling (insertion) order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(u64, NodeIndex)> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        edges.sort_unstable_by_key(|(seq, _)| *seq);
        edges.into_iter().map(|(_, child)| child).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inter(style: &str) -> FontRef {
        FontRef::new("Inter", style)
    }

    #[test]
    fn font_key_joins_family_and_style() {
        let font = FontRef::new("Roboto Mono", "Bold Italic");
        assert_eq!(font.key(), "Roboto Mono::Bold Italic");
    }

    #[test]
    fn font_name_serializes_mixed_as_string() {
        let mixed = serde_json::to_value(FontName::Mixed).unwrap();
        assert_eq!(mixed, serde_json::json!("mixed"));
        let uniform = serde_json::to_value(FontName::Uniform(inter("Bold"))).unwrap();
        assert_eq!(
            uniform,
            serde_json::json!({ "family": "Inter", "style": "Bold" })
        );
    }

    #[test]
    fn weight_maps_to_style() {
        assert_eq!(style_for_weight(700), "Bold");
        assert_eq!(style_for_weight(600), "Semi Bold");
        assert_eq!(style_for_weight(450), "Regular");
    }

    #[test]
    fn text_content_reports_mixed_fonts() {
        let content = TextContent::from_runs([("ab", inter("Regular")), ("cd", inter("Bold"))]);
        assert_eq!(content.font_name(), FontName::Mixed);
        assert_eq!(
            content.range_font(0, 2),
            Some(FontName::Uniform(inter("Regular")))
        );
        assert_eq!(content.range_font(1, 3), Some(FontName::Mixed));
        assert_eq!(content.range_font(2, 2), None);
        assert_eq!(content.range_font(3, 5), None);
        assert_eq!(content.fonts_in_use().len(), 2);
    }

    #[test]
    fn set_characters_seeds_from_first_font() {
        let mut content = TextContent::from_runs([("a", inter("Bold")), ("b", inter("Light"))]);
        content.set_characters("xyz");
        assert_eq!(content.characters(), "xyz");
        assert_eq!(content.font_name(), FontName::Uniform(inter("Bold")));
    }

    #[test]
    fn empty_text_uses_node_font() {
        let content = TextContent::new(inter("Medium"));
        assert_eq!(content.font_name(), FontName::Uniform(inter("Medium")));
        assert_eq!(content.fonts_in_use(), vec![&inter("Medium")]);
    }

    #[test]
    fn children_keep_insertion_order_after_removal() {
        let mut graph = SceneGraph::new(SceneNode::new(
            NodeId::intern("0:0"),
            "Document",
            NodeKind::Document,
        ));
        let root = graph.root;
        let a = graph.add_node(root, SceneNode::new(NodeId::intern("t:a"), "a", NodeKind::Group));
        graph.add_node(root, SceneNode::new(NodeId::intern("t:b"), "b", NodeKind::Group));
        graph.remove_subtree(a);
        graph.add_node(root, SceneNode::new(NodeId::intern("t:c"), "c", NodeKind::Group));

        let names: Vec<&str> = graph
            .children(root)
            .into_iter()
            .map(|idx| graph.graph[idx].name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c"]);
        assert!(graph.get_by_id(NodeId::intern("t:a")).is_none());
    }

    #[test]
    fn effects_serialize_with_type_tag() {
        let shadow = Effect::DropShadow(Shadow::new(
            Color::rgba(0.0, 0.0, 0.0, 0.25),
            Vector { x: 0.0, y: 4.0 },
            8.0,
        ));
        assert_eq!(
            serde_json::to_value(&shadow).unwrap(),
            serde_json::json!({
                "type": "DROP_SHADOW",
                "color": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 0.25},
                "offset": {"x": 0.0, "y": 4.0},
                "radius": 8.0,
                "visible": true,
                "blendMode": "NORMAL",
            })
        );
        let blur = Effect::LayerBlur {
            radius: 2.0,
            visible: true,
        };
        assert_eq!(
            serde_json::to_value(&blur).unwrap(),
            serde_json::json!({"type": "LAYER_BLUR", "radius": 2.0, "visible": true})
        );
    }

    #[test]
    fn boolean_operation_tags() {
        assert_eq!(
            BooleanOperation::from_tag("SUBTRACT"),
            Some(BooleanOperation::Subtract)
        );
        assert_eq!(BooleanOperation::from_tag("union"), None);
        assert_eq!(BooleanOperation::Exclude.tag(), "EXCLUDE");
        let kind = NodeKind::BooleanOperation {
            operation: BooleanOperation::Union,
        };
        assert_eq!(kind.type_name(), "BOOLEAN_OPERATION");
        assert!(kind.spans_children());
        assert!(!NodeKind::Page.has_effects());
    }

    #[test]
    fn corner_radii_detect_uniform() {
        assert_eq!(CornerRadii::uniform(4.0).uniform_radius(), Some(4.0));
        let mut corners = CornerRadii::uniform(4.0);
        corners.top_left_radius = 8.0;
        assert_eq!(corners.uniform_radius(), None);
    }
}
