//! Command execution against the host document.
//!
//! Each handler validates its params, applies the change, and returns a JSON
//! reply describing the affected node.

use crate::commands::{
    ApplyEffect, Command, CreateBooleanOperation, CreateFrame, CreateRectangle, CreateText,
    GroupNodes, MoveNode, NodeParams, ResizeNode, SetConstraints, SetCornerRadius, SetFillColor,
    SetStrokeColor, SetTextContent,
};
use crate::error::CommandError;
use fb_core::styles::StyleInfo;
use fb_core::{
    BooleanOperation, Color, Constraints, CornerRadii, Document, Effect, FontLoader, FontRef,
    NodeId, NodeKind, Paint, SceneNode, Shadow, TextContent, style_for_weight,
};
use fb_text::{ReconcileOutcome, TextOptions, set_characters};
use serde_json::{Map, Value, json};
use smallvec::smallvec;

/// Run `cmd` against `doc`.
pub async fn execute(doc: &mut Document, cmd: Command) -> Result<Value, CommandError> {
    log::debug!("execute {}", cmd.name());
    match cmd {
        Command::GetDocumentInfo => Ok(document_info(doc)),
        Command::GetSelection => selection_info(doc),
        Command::GetNodeInfo(params) => node_info(doc, require_node(&params)?),
        Command::GetStyles => Ok(styles_info(doc)),
        Command::CreateRectangle(params) => create_rectangle(doc, params),
        Command::CreateFrame(params) => create_frame(doc, params),
        Command::CreateText(params) => create_text(doc, params).await,
        Command::SetFillColor(params) => set_fill_color(doc, params),
        Command::SetStrokeColor(params) => set_stroke_color(doc, params),
        Command::MoveNode(params) => move_node(doc, params),
        Command::ResizeNode(params) => resize_node(doc, params),
        Command::DeleteNode(params) => delete_node(doc, require_node(&params)?),
        Command::SetCornerRadius(params) => set_corner_radius(doc, params),
        Command::SetTextContent(params) => set_text_content(doc, params).await,
        Command::GroupNodes(params) => group_nodes(doc, params),
        Command::SetConstraints(params) => set_constraints(doc, params),
        Command::ApplyEffect(params) => apply_effect(doc, params),
        Command::CreateBooleanOperation(params) => create_boolean_operation(doc, params),
    }
}

fn require_node(params: &NodeParams) -> Result<NodeId, CommandError> {
    params.node_id.ok_or(CommandError::Missing("nodeId parameter"))
}

fn require_id(node_id: Option<NodeId>) -> Result<NodeId, CommandError> {
    node_id.ok_or(CommandError::Missing("nodeId parameter"))
}

// ─── Replies ────────────────────────────────────────────────────────────

fn summary(node: &SceneNode) -> Value {
    json!({
        "id": node.id,
        "name": node.name,
        "type": node.type_name(),
    })
}

/// Reply for commands that create or reshape a node.
fn shape_reply(doc: &Document, id: NodeId) -> Result<Value, CommandError> {
    let node = doc.node(id)?;
    let bounds = doc.bounds(id)?;
    let mut reply = Map::new();
    reply.insert("id".into(), json!(node.id));
    reply.insert("name".into(), json!(node.name));
    reply.insert("x".into(), json!(bounds.x));
    reply.insert("y".into(), json!(bounds.y));
    reply.insert("width".into(), json!(bounds.width));
    reply.insert("height".into(), json!(bounds.height));
    if node.kind.has_paints() {
        reply.insert("fills".into(), json!(node.fills));
        reply.insert("strokes".into(), json!(node.strokes));
        reply.insert("strokeWeight".into(), json!(node.stroke_weight));
    }
    if let Some(parent) = doc.parent_id(id) {
        reply.insert("parentId".into(), json!(parent));
    }
    Ok(Value::Object(reply))
}

fn document_info(doc: &Document) -> Value {
    let page = doc.current_page();
    let children: Vec<Value> = doc
        .children_of(page.id)
        .unwrap_or_default()
        .into_iter()
        .map(summary)
        .collect();
    let page_entry = json!({
        "id": page.id,
        "name": page.name,
        "childCount": children.len(),
    });
    json!({
        "name": page.name,
        "id": page.id,
        "type": page.type_name(),
        "children": children,
        "currentPage": page_entry,
        "pages": [page_entry],
    })
}

fn selection_info(doc: &Document) -> Result<Value, CommandError> {
    let mut selection = Vec::with_capacity(doc.selection().len());
    for id in doc.selection() {
        let node = doc.node(*id)?;
        selection.push(json!({
            "id": node.id,
            "name": node.name,
            "type": node.type_name(),
            "visible": node.visible,
        }));
    }
    Ok(json!({
        "selectionCount": selection.len(),
        "selection": selection,
    }))
}

fn node_info(doc: &Document, id: NodeId) -> Result<Value, CommandError> {
    let node = doc.node(id)?;
    let mut info = Map::new();
    info.insert("id".into(), json!(node.id));
    info.insert("name".into(), json!(node.name));
    info.insert("type".into(), json!(node.type_name()));
    info.insert("visible".into(), json!(node.visible));

    if node.kind.is_scene_node() {
        let bounds = doc.bounds(id)?;
        info.insert("x".into(), json!(bounds.x));
        info.insert("y".into(), json!(bounds.y));
        info.insert("width".into(), json!(bounds.width));
        info.insert("height".into(), json!(bounds.height));
    }
    if node.kind.has_paints() {
        info.insert("fills".into(), json!(node.fills));
        info.insert("strokes".into(), json!(node.strokes));
        info.insert("strokeWeight".into(), json!(node.stroke_weight));
    }
    if node.kind.has_effects() {
        info.insert("effects".into(), json!(node.effects));
    }
    if node.kind.has_corners() {
        info.insert("cornerRadius".into(), corner_radius_value(&node.corners));
    }
    if node.kind.has_constraints() {
        info.insert("constraints".into(), json!(node.constraints));
    }
    if node.kind.accepts_children() {
        let children: Vec<Value> = doc.children_of(id)?.into_iter().map(summary).collect();
        info.insert("children".into(), Value::Array(children));
    }
    if let Some(text) = node.text() {
        info.insert("characters".into(), json!(text.characters()));
        info.insert("fontSize".into(), json!(text.font_size));
        info.insert("fontName".into(), json!(text.font_name()));
    }
    Ok(Value::Object(info))
}

fn style_entry(info: &StyleInfo) -> Map<String, Value> {
    let mut entry = Map::new();
    entry.insert("id".into(), json!(info.id));
    entry.insert("name".into(), json!(info.name));
    entry.insert("key".into(), json!(info.key));
    entry
}

/// Local styles by kind. Paint styles report their first paint only.
fn styles_info(doc: &Document) -> Value {
    let styles = doc.styles();
    let colors: Vec<Value> = styles
        .colors()
        .iter()
        .map(|style| {
            let mut entry = style_entry(&style.info);
            if let Some(paint) = style.paints.first() {
                entry.insert("paint".into(), json!(paint));
            }
            Value::Object(entry)
        })
        .collect();
    let texts: Vec<Value> = styles
        .texts()
        .iter()
        .map(|style| {
            let mut entry = style_entry(&style.info);
            entry.insert("fontSize".into(), json!(style.font_size));
            entry.insert("fontName".into(), json!(style.font_name));
            Value::Object(entry)
        })
        .collect();
    let effects: Vec<Value> = styles
        .effects()
        .iter()
        .map(|style| Value::Object(style_entry(&style.info)))
        .collect();
    let grids: Vec<Value> = styles
        .grids()
        .iter()
        .map(|info| Value::Object(style_entry(info)))
        .collect();
    json!({
        "colors": colors,
        "texts": texts,
        "effects": effects,
        "grids": grids,
    })
}

fn corner_radius_value(corners: &CornerRadii) -> Value {
    match corners.uniform_radius() {
        Some(radius) => json!(radius),
        None => json!("mixed"),
    }
}

// ─── Creation ───────────────────────────────────────────────────────────

fn create_rectangle(doc: &mut Document, params: CreateRectangle) -> Result<Value, CommandError> {
    let id = doc.append(params.parent_id, |id| {
        let kind = NodeKind::Rectangle {
            width: params.width.unwrap_or(100.0),
            height: params.height.unwrap_or(100.0),
        };
        let mut node = SceneNode::new(id, params.name.as_deref().unwrap_or("Rectangle"), kind);
        node.x = params.x.unwrap_or(0.0);
        node.y = params.y.unwrap_or(0.0);
        node
    })?;
    shape_reply(doc, id)
}

fn create_frame(doc: &mut Document, params: CreateFrame) -> Result<Value, CommandError> {
    let id = doc.append(params.parent_id, |id| {
        let kind = NodeKind::Frame {
            width: params.width.unwrap_or(100.0),
            height: params.height.unwrap_or(100.0),
        };
        let mut node = SceneNode::new(id, params.name.as_deref().unwrap_or("Frame"), kind);
        node.x = params.x.unwrap_or(0.0);
        node.y = params.y.unwrap_or(0.0);
        if let Some(fill) = params.fill_color {
            node.fills = smallvec![Paint::solid(fill)];
        }
        if let Some(stroke) = params.stroke_color {
            node.strokes = smallvec![Paint::solid(stroke)];
        }
        if let Some(weight) = params.stroke_weight {
            node.stroke_weight = weight;
        }
        node
    })?;
    shape_reply(doc, id)
}

async fn create_text(doc: &mut Document, params: CreateText) -> Result<Value, CommandError> {
    let font = FontRef::new("Inter", style_for_weight(params.font_weight.unwrap_or(400)));
    if let Err(err) = doc.load_font(&font).await {
        log::error!("Error loading font \"{font}\": {err}");
    }

    let mut content = TextContent::new(font);
    content.font_size = params.font_size.unwrap_or(14.0);
    let color = params.font_color.unwrap_or(Color::BLACK);
    let id = doc.append(params.parent_id, |id| {
        let mut node = SceneNode::new(
            id,
            params.name.as_deref().unwrap_or("Text"),
            NodeKind::Text(content),
        );
        node.x = params.x.unwrap_or(0.0);
        node.y = params.y.unwrap_or(0.0);
        node.fills = smallvec![Paint::solid(color)];
        node
    })?;

    let text = params.text.as_deref().unwrap_or("Text");
    if let Err(err) = set_characters(doc, id, text, &TextOptions::default()).await {
        doc.remove(id)?;
        return Err(err.into());
    }
    shape_reply(doc, id)
}

// ─── Paint & geometry ───────────────────────────────────────────────────

fn painted_node<'a>(
    doc: &'a mut Document,
    id: NodeId,
    operation: &'static str,
) -> Result<&'a mut SceneNode, CommandError> {
    let node = doc.node_mut(id)?;
    if !node.kind.has_paints() {
        return Err(CommandError::Unsupported { operation, node: id });
    }
    Ok(node)
}

fn set_fill_color(doc: &mut Document, params: SetFillColor) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let color = params.color.ok_or(CommandError::Missing("color parameter"))?;
    let node = painted_node(doc, id, "fills")?;
    node.fills = smallvec![Paint::solid(color)];
    Ok(json!({
        "id": node.id,
        "name": node.name,
        "fills": node.fills,
    }))
}

fn set_stroke_color(doc: &mut Document, params: SetStrokeColor) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let color = params.color.ok_or(CommandError::Missing("color parameter"))?;
    let node = painted_node(doc, id, "strokes")?;
    node.strokes = smallvec![Paint::solid(color)];
    node.stroke_weight = params.weight.unwrap_or(1.0);
    Ok(json!({
        "id": node.id,
        "name": node.name,
        "strokes": node.strokes,
        "strokeWeight": node.stroke_weight,
    }))
}

/// Append one effect to the node's effect list.
fn apply_effect(doc: &mut Document, params: ApplyEffect) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let node = doc.node_mut(id)?;
    if !node.kind.has_effects() {
        return Err(CommandError::NoEffects(node.type_name()));
    }
    let effect_type = params
        .effect_type
        .ok_or(CommandError::Missing("effectType parameter"))?;
    let radius = params.radius.unwrap_or(0.0);

    let shadow = |effect: &str| -> Result<Shadow, CommandError> {
        let color = params.color.ok_or_else(|| CommandError::EffectParam {
            param: "Color",
            effect: effect.to_string(),
        })?;
        let offset = params.offset.ok_or_else(|| CommandError::EffectParam {
            param: "Offset",
            effect: effect.to_string(),
        })?;
        Ok(Shadow::new(color, offset, radius))
    };
    let effect = match effect_type.as_str() {
        "DROP_SHADOW" => Effect::DropShadow(shadow(&effect_type)?),
        "INNER_SHADOW" => Effect::InnerShadow(shadow(&effect_type)?),
        "LAYER_BLUR" => Effect::LayerBlur {
            radius,
            visible: true,
        },
        "BACKGROUND_BLUR" => Effect::BackgroundBlur {
            radius,
            visible: true,
        },
        other => return Err(CommandError::UnknownEffect(other.to_string())),
    };

    let mut reply = summary(node);
    reply["effectType"] = json!(effect.type_name());
    node.effects.push(effect);
    Ok(reply)
}

fn move_node(doc: &mut Document, params: MoveNode) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let (Some(x), Some(y)) = (params.x, params.y) else {
        return Err(CommandError::Missing("x or y parameters"));
    };
    if !doc.node(id)?.kind.is_scene_node() {
        return Err(CommandError::Unsupported {
            operation: "position",
            node: id,
        });
    }
    let bounds = doc.move_to(id, x, y)?;
    let node = doc.node(id)?;
    Ok(json!({
        "id": node.id,
        "name": node.name,
        "x": bounds.x,
        "y": bounds.y,
    }))
}

fn resize_node(doc: &mut Document, params: ResizeNode) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let (Some(new_width), Some(new_height)) = (params.width, params.height) else {
        return Err(CommandError::Missing("width or height parameters"));
    };
    let node = doc.node_mut(id)?;
    match &mut node.kind {
        NodeKind::Frame { width, height } | NodeKind::Rectangle { width, height } => {
            *width = new_width;
            *height = new_height;
        }
        _ => {
            return Err(CommandError::Unsupported {
                operation: "resizing",
                node: id,
            });
        }
    }
    Ok(json!({
        "id": node.id,
        "name": node.name,
        "width": new_width,
        "height": new_height,
    }))
}

fn delete_node(doc: &mut Document, id: NodeId) -> Result<Value, CommandError> {
    let removed = doc.remove(id)?;
    log::info!("deleted {} \"{}\"", removed.id, removed.name);
    Ok(summary(&removed))
}

fn set_corner_radius(doc: &mut Document, params: SetCornerRadius) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let radius = params
        .radius
        .ok_or(CommandError::Missing("radius parameter"))?;
    let node = doc.node_mut(id)?;
    if !node.kind.has_corners() {
        return Err(CommandError::Unsupported {
            operation: "corner radius",
            node: id,
        });
    }

    match params.corners {
        Some([top_left, top_right, bottom_right, bottom_left]) => {
            let corners = &mut node.corners;
            if top_left {
                corners.top_left_radius = radius;
            }
            if top_right {
                corners.top_right_radius = radius;
            }
            if bottom_right {
                corners.bottom_right_radius = radius;
            }
            if bottom_left {
                corners.bottom_left_radius = radius;
            }
        }
        None => node.corners = CornerRadii::uniform(radius),
    }

    let mut reply = Map::new();
    reply.insert("id".into(), json!(node.id));
    reply.insert("name".into(), json!(node.name));
    reply.insert("cornerRadius".into(), corner_radius_value(&node.corners));
    if let Value::Object(corners) = json!(node.corners) {
        reply.extend(corners);
    }
    Ok(Value::Object(reply))
}

// ─── Text ───────────────────────────────────────────────────────────────

async fn set_text_content(
    doc: &mut Document,
    params: SetTextContent,
) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let text = params
        .text
        .ok_or(CommandError::Missing("text parameter"))?;
    let node = doc.node(id)?;
    if node.text().is_none() {
        return Err(fb_core::HostError::NotATextNode(id).into());
    }

    let outcome = set_characters(doc, id, &text, &params.options).await?;

    let node = doc.node(id)?;
    let mut reply = Map::new();
    reply.insert("id".into(), json!(node.id));
    reply.insert("name".into(), json!(node.name));
    if let Some(content) = node.text() {
        reply.insert("characters".into(), json!(content.characters()));
        reply.insert("fontName".into(), json!(content.font_name()));
    }
    if let ReconcileOutcome::Degraded { font } = outcome {
        reply.insert("missingFont".into(), json!(font));
    }
    Ok(Value::Object(reply))
}

// ─── Structure ──────────────────────────────────────────────────────────

fn group_nodes(doc: &mut Document, params: GroupNodes) -> Result<Value, CommandError> {
    let ids = params.node_ids.unwrap_or_default();
    if ids.len() < 2 {
        return Err(CommandError::TooFewNodes);
    }
    let group = doc.group(&ids, params.name.as_deref())?;
    let node = doc.node(group)?;
    let children: Vec<NodeId> = doc.children_of(group)?.iter().map(|c| c.id).collect();
    let mut reply = summary(node);
    reply["children"] = json!(children);
    Ok(reply)
}

/// Combine at least two nodes. Node lookups are checked before the
/// operation tag.
fn create_boolean_operation(
    doc: &mut Document,
    params: CreateBooleanOperation,
) -> Result<Value, CommandError> {
    let ids = params.node_ids.unwrap_or_default();
    if ids.len() < 2 {
        return Err(CommandError::TooFewOperands);
    }
    for id in &ids {
        doc.node(*id)?;
    }
    let tag = params
        .operation
        .ok_or(CommandError::Missing("operation parameter"))?;
    let operation =
        BooleanOperation::from_tag(&tag).ok_or(CommandError::UnknownBooleanOperation(tag))?;

    let op_id = doc.boolean_operation(&ids, operation, params.name.as_deref())?;
    let mut reply = summary(doc.node(op_id)?);
    reply["operation"] = json!(operation.tag());
    Ok(reply)
}

fn set_constraints(doc: &mut Document, params: SetConstraints) -> Result<Value, CommandError> {
    let id = require_id(params.node_id)?;
    let (Some(horizontal), Some(vertical)) = (params.horizontal, params.vertical) else {
        return Err(CommandError::Missing("horizontal or vertical parameters"));
    };
    let node = doc.node_mut(id)?;
    if !node.kind.has_constraints() {
        return Err(CommandError::Unsupported {
            operation: "constraints",
            node: id,
        });
    }
    node.constraints = Constraints {
        horizontal,
        vertical,
    };
    let mut reply = summary(node);
    reply["constraints"] = json!(node.constraints);
    Ok(reply)
}
