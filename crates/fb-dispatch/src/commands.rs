//! The command catalog.
//!
//! Commands arrive as a name plus a JSON params object. Every param field is
//! optional at the decoding stage so that an absent value is reported with
//! the command's own message (`Missing nodeId parameter`) rather than a
//! generic deserialization error; defaults are applied by the handlers.

use crate::error::CommandError;
use fb_core::{Color, ConstraintType, NodeId, Vector};
use fb_text::TextOptions;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeParams {
    pub node_id: Option<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRectangle {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub name: Option<String>,
    pub parent_id: Option<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFrame {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub name: Option<String>,
    pub parent_id: Option<NodeId>,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_weight: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateText {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub text: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub font_color: Option<Color>,
    pub name: Option<String>,
    pub parent_id: Option<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFillColor {
    pub node_id: Option<NodeId>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStrokeColor {
    pub node_id: Option<NodeId>,
    pub color: Option<Color>,
    pub weight: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveNode {
    pub node_id: Option<NodeId>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeNode {
    pub node_id: Option<NodeId>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCornerRadius {
    pub node_id: Option<NodeId>,
    pub radius: Option<f32>,
    /// Which corners to set: `[top-left, top-right, bottom-right, bottom-left]`.
    pub corners: Option<[bool; 4]>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTextContent {
    pub node_id: Option<NodeId>,
    pub text: Option<String>,
    #[serde(flatten)]
    pub options: TextOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNodes {
    pub node_ids: Option<Vec<NodeId>>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetConstraints {
    pub node_id: Option<NodeId>,
    pub horizontal: Option<ConstraintType>,
    pub vertical: Option<ConstraintType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEffect {
    pub node_id: Option<NodeId>,
    /// `DROP_SHADOW`, `INNER_SHADOW`, `LAYER_BLUR` or `BACKGROUND_BLUR`.
    pub effect_type: Option<String>,
    pub radius: Option<f32>,
    pub color: Option<Color>,
    pub offset: Option<Vector>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooleanOperation {
    pub node_ids: Option<Vec<NodeId>>,
    /// `UNION`, `SUBTRACT`, `INTERSECT` or `EXCLUDE`.
    pub operation: Option<String>,
    pub name: Option<String>,
}

/// A decoded command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GetDocumentInfo,
    GetSelection,
    GetNodeInfo(NodeParams),
    GetStyles,
    CreateRectangle(CreateRectangle),
    CreateFrame(CreateFrame),
    CreateText(CreateText),
    SetFillColor(SetFillColor),
    SetStrokeColor(SetStrokeColor),
    MoveNode(MoveNode),
    ResizeNode(ResizeNode),
    DeleteNode(NodeParams),
    SetCornerRadius(SetCornerRadius),
    SetTextContent(SetTextContent),
    GroupNodes(GroupNodes),
    SetConstraints(SetConstraints),
    ApplyEffect(ApplyEffect),
    CreateBooleanOperation(CreateBooleanOperation),
}

impl Command {
    /// Decode `command` with its `params`. `null` params count as `{}`.
    pub fn from_message(command: &str, params: Value) -> Result<Self, CommandError> {
        let params = match params {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let cmd = match command {
            "get_document_info" => Command::GetDocumentInfo,
            "get_selection" => Command::GetSelection,
            "get_node_info" => Command::GetNodeInfo(decode(command, params)?),
            "get_styles" => Command::GetStyles,
            "create_rectangle" => Command::CreateRectangle(decode(command, params)?),
            "create_frame" => Command::CreateFrame(decode(command, params)?),
            "create_text" => Command::CreateText(decode(command, params)?),
            "set_fill_color" => Command::SetFillColor(decode(command, params)?),
            "set_stroke_color" => Command::SetStrokeColor(decode(command, params)?),
            "move_node" => Command::MoveNode(decode(command, params)?),
            "resize_node" => Command::ResizeNode(decode(command, params)?),
            "delete_node" => Command::DeleteNode(decode(command, params)?),
            "set_corner_radius" => Command::SetCornerRadius(decode(command, params)?),
            "set_text_content" => Command::SetTextContent(decode(command, params)?),
            "group_nodes" => Command::GroupNodes(decode(command, params)?),
            "set_constraints" => Command::SetConstraints(decode(command, params)?),
            "apply_effect" => Command::ApplyEffect(decode(command, params)?),
            "create_boolean_operation" => {
                Command::CreateBooleanOperation(decode(command, params)?)
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }

    /// Wire name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetDocumentInfo => "get_document_info",
            Command::GetSelection => "get_selection",
            Command::GetNodeInfo(_) => "get_node_info",
            Command::GetStyles => "get_styles",
            Command::CreateRectangle(_) => "create_rectangle",
            Command::CreateFrame(_) => "create_frame",
            Command::CreateText(_) => "create_text",
            Command::SetFillColor(_) => "set_fill_color",
            Command::SetStrokeColor(_) => "set_stroke_color",
            Command::MoveNode(_) => "move_node",
            Command::ResizeNode(_) => "resize_node",
            Command::DeleteNode(_) => "delete_node",
            Command::SetCornerRadius(_) => "set_corner_radius",
            Command::SetTextContent(_) => "set_text_content",
            Command::GroupNodes(_) => "group_nodes",
            Command::SetConstraints(_) => "set_constraints",
            Command::ApplyEffect(_) => "apply_effect",
            Command::CreateBooleanOperation(_) => "create_boolean_operation",
        }
    }
}

fn decode<T: DeserializeOwned>(command: &str, params: Value) -> Result<T, CommandError> {
    serde_json::from_value(params).map_err(|source| CommandError::InvalidParams {
        command: command.to_string(),
        source,
    })
}
