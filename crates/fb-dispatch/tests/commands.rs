//! Integration tests: command catalog through the dispatcher.
//!
//! Commands are sent as the UI would send them and the replies are checked
//! as JSON.

use fb_core::{
    Color, Document, FontRef, NodeId, NodeKind, Paint, SceneNode, TextContent, TextHost,
};
use fb_dispatch::{Dispatcher, PluginMessage, Settings, UiMessage};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn dispatcher() -> Dispatcher {
    Dispatcher::new(Document::new(), Settings::default())
}

async fn run(dispatcher: &mut Dispatcher, command: &str, params: Value) -> Result<Value, String> {
    match dispatcher.execute("req".into(), command, params).await {
        PluginMessage::CommandResult { id, result } => {
            assert_eq!(id, "req");
            Ok(result)
        }
        PluginMessage::CommandError { id, error } => {
            assert_eq!(id, "req");
            Err(error)
        }
        other => panic!("unexpected reply {other:?}"),
    }
}

fn id_of(reply: &Value) -> String {
    reply["id"].as_str().unwrap().to_string()
}

// ─── Creation ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_rectangle_with_defaults() {
    let mut d = dispatcher();
    let reply = run(&mut d, "create_rectangle", Value::Null).await.unwrap();

    assert_eq!(reply["name"], "Rectangle");
    assert_eq!(reply["x"], 0.0);
    assert_eq!(reply["width"], 100.0);
    assert_eq!(reply["height"], 100.0);
    assert_eq!(reply["parentId"], "0:1");
}

#[tokio::test]
async fn create_frame_with_paints_and_nested_rectangle() {
    let mut d = dispatcher();
    let frame = run(
        &mut d,
        "create_frame",
        json!({
            "x": 10, "y": 20, "width": 300, "height": 200, "name": "Card",
            "fillColor": {"r": 1, "g": 1, "b": 1},
            "strokeColor": {"r": 0, "g": 0, "b": 0, "a": 0.5},
            "strokeWeight": 2,
        }),
    )
    .await
    .unwrap();

    assert_eq!(frame["name"], "Card");
    assert_eq!(
        frame["fills"],
        json!([{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}, "opacity": 1.0}])
    );
    assert_eq!(frame["strokes"][0]["opacity"], 0.5);
    assert_eq!(frame["strokeWeight"], 2.0);

    let rect = run(
        &mut d,
        "create_rectangle",
        json!({"parentId": id_of(&frame), "width": 50}),
    )
    .await
    .unwrap();
    assert_eq!(rect["parentId"], frame["id"]);
    assert_eq!(rect["width"], 50.0);
}

#[tokio::test]
async fn create_in_missing_or_childless_parent_fails() {
    let mut d = dispatcher();
    let err = run(&mut d, "create_rectangle", json!({"parentId": "9:9"}))
        .await
        .unwrap_err();
    assert_eq!(err, "Node not found with ID: 9:9");

    let rect = run(&mut d, "create_rectangle", json!({})).await.unwrap();
    let err = run(&mut d, "create_frame", json!({"parentId": id_of(&rect)}))
        .await
        .unwrap_err();
    assert!(err.starts_with("Node does not support children"), "{err}");
}

#[tokio::test]
async fn create_text_uses_weight_style_and_color() {
    let mut d = dispatcher();
    let reply = run(
        &mut d,
        "create_text",
        json!({"text": "Hello", "fontWeight": 700, "fontSize": 24,
               "fontColor": {"r": 1, "g": 0, "b": 0}}),
    )
    .await
    .unwrap();

    assert_eq!(reply["fills"][0]["color"], json!({"r": 1.0, "g": 0.0, "b": 0.0}));
    let info = run(&mut d, "get_node_info", json!({"nodeId": id_of(&reply)}))
        .await
        .unwrap();
    assert_eq!(info["type"], "TEXT");
    assert_eq!(info["characters"], "Hello");
    assert_eq!(info["fontSize"], 24.0);
    assert_eq!(info["fontName"], json!({"family": "Inter", "style": "Bold"}));
}

#[tokio::test]
async fn create_text_defaults() {
    let mut d = dispatcher();
    let reply = run(&mut d, "create_text", json!({})).await.unwrap();
    assert_eq!(reply["name"], "Text");

    let info = run(&mut d, "get_node_info", json!({"nodeId": id_of(&reply)}))
        .await
        .unwrap();
    assert_eq!(info["characters"], "Text");
    assert_eq!(info["fontSize"], 14.0);
    assert_eq!(info["fontName"]["style"], "Regular");
    assert_eq!(info["fills"][0]["color"], json!({"r": 0.0, "g": 0.0, "b": 0.0}));
}

// ─── Inspection ─────────────────────────────────────────────────────────

#[tokio::test]
async fn document_info_lists_page_children() {
    let mut d = dispatcher();
    run(&mut d, "create_rectangle", json!({"name": "A"}))
        .await
        .unwrap();
    run(&mut d, "create_frame", json!({"name": "B"})).await.unwrap();

    let info = run(&mut d, "get_document_info", Value::Null)
        .await
        .unwrap();
    assert_eq!(info["type"], "PAGE");
    assert_eq!(info["name"], "Page 1");
    assert_eq!(info["currentPage"]["childCount"], 2);
    let names: Vec<&str> = info["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn selection_reports_selected_nodes() {
    let mut d = dispatcher();
    let reply = run(&mut d, "get_selection", Value::Null).await.unwrap();
    assert_eq!(reply, json!({"selectionCount": 0, "selection": []}));

    let rect = run(&mut d, "create_rectangle", json!({})).await.unwrap();
    let id = NodeId::intern(&id_of(&rect));
    d.document_mut().set_selection(vec![id]).unwrap();

    let reply = run(&mut d, "get_selection", Value::Null).await.unwrap();
    assert_eq!(reply["selectionCount"], 1);
    assert_eq!(
        reply["selection"][0],
        json!({"id": id_of(&rect), "name": "Rectangle", "type": "RECTANGLE", "visible": true})
    );
}

#[tokio::test]
async fn node_info_requires_node_id() {
    let mut d = dispatcher();
    let err = run(&mut d, "get_node_info", json!({})).await.unwrap_err();
    assert_eq!(err, "Missing nodeId parameter");
}

// ─── Mutation ───────────────────────────────────────────────────────────

#[tokio::test]
async fn fill_and_stroke_colors() {
    let mut d = dispatcher();
    let rect = run(&mut d, "create_rectangle", json!({})).await.unwrap();
    let id = id_of(&rect);

    let reply = run(
        &mut d,
        "set_fill_color",
        json!({"nodeId": id, "color": {"r": 0, "g": 0.5, "b": 1, "a": 0.25}}),
    )
    .await
    .unwrap();
    assert_eq!(
        reply["fills"],
        json!([{"type": "SOLID", "color": {"r": 0.0, "g": 0.5, "b": 1.0}, "opacity": 0.25}])
    );

    let reply = run(
        &mut d,
        "set_stroke_color",
        json!({"nodeId": id, "color": {"r": 1, "g": 1, "b": 1}}),
    )
    .await
    .unwrap();
    assert_eq!(reply["strokeWeight"], 1.0);

    let err = run(&mut d, "set_fill_color", json!({"nodeId": id}))
        .await
        .unwrap_err();
    assert_eq!(err, "Missing color parameter");
}

#[tokio::test]
async fn move_and_resize() {
    let mut d = dispatcher();
    let rect = run(&mut d, "create_rectangle", json!({})).await.unwrap();
    let id = id_of(&rect);

    let reply = run(&mut d, "move_node", json!({"nodeId": id, "x": 40, "y": 60}))
        .await
        .unwrap();
    assert_eq!((reply["x"].clone(), reply["y"].clone()), (json!(40.0), json!(60.0)));

    let err = run(&mut d, "move_node", json!({"nodeId": id, "x": 1}))
        .await
        .unwrap_err();
    assert_eq!(err, "Missing x or y parameters");

    let reply = run(
        &mut d,
        "resize_node",
        json!({"nodeId": id, "width": 12, "height": 34}),
    )
    .await
    .unwrap();
    assert_eq!(reply["width"], 12.0);
    assert_eq!(reply["height"], 34.0);
}

#[tokio::test]
async fn text_nodes_cannot_be_resized() {
    let mut d = dispatcher();
    let text = run(&mut d, "create_text", json!({"text": "x"})).await.unwrap();
    let id = id_of(&text);
    let err = run(
        &mut d,
        "resize_node",
        json!({"nodeId": id, "width": 1, "height": 1}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, format!("Node does not support resizing: {id}"));
}

#[tokio::test]
async fn corner_radius_uniform_and_per_corner() {
    let mut d = dispatcher();
    let rect = run(&mut d, "create_rectangle", json!({})).await.unwrap();
    let id = id_of(&rect);

    let reply = run(&mut d, "set_corner_radius", json!({"nodeId": id, "radius": 8}))
        .await
        .unwrap();
    assert_eq!(reply["cornerRadius"], 8.0);
    assert_eq!(reply["bottomLeftRadius"], 8.0);

    let reply = run(
        &mut d,
        "set_corner_radius",
        json!({"nodeId": id, "radius": 2, "corners": [true, false, false, false]}),
    )
    .await
    .unwrap();
    assert_eq!(reply["cornerRadius"], "mixed");
    assert_eq!(reply["topLeftRadius"], 2.0);
    assert_eq!(reply["topRightRadius"], 8.0);

    let err = run(&mut d, "set_corner_radius", json!({"nodeId": id}))
        .await
        .unwrap_err();
    assert_eq!(err, "Missing radius parameter");
}

#[tokio::test]
async fn constraints() {
    let mut d = dispatcher();
    let rect = run(&mut d, "create_rectangle", json!({})).await.unwrap();
    let reply = run(
        &mut d,
        "set_constraints",
        json!({"nodeId": id_of(&rect), "horizontal": "STRETCH", "vertical": "CENTER"}),
    )
    .await
    .unwrap();
    assert_eq!(
        reply["constraints"],
        json!({"horizontal": "STRETCH", "vertical": "CENTER"})
    );
    assert_eq!(reply["type"], "RECTANGLE");
}

#[tokio::test]
async fn delete_reports_removed_node() {
    let mut d = dispatcher();
    let rect = run(&mut d, "create_rectangle", json!({"name": "Gone"}))
        .await
        .unwrap();
    let id = id_of(&rect);

    let reply = run(&mut d, "delete_node", json!({"nodeId": id})).await.unwrap();
    assert_eq!(reply, json!({"id": id, "name": "Gone", "type": "RECTANGLE"}));

    let err = run(&mut d, "get_node_info", json!({"nodeId": id}))
        .await
        .unwrap_err();
    assert_eq!(err, format!("Node not found with ID: {id}"));
}

// ─── Grouping ───────────────────────────────────────────────────────────

#[tokio::test]
async fn group_nodes_with_shared_parent() {
    let mut d = dispatcher();
    let a = id_of(&run(&mut d, "create_rectangle", json!({"x": 0, "y": 0})).await.unwrap());
    let b = id_of(
        &run(&mut d, "create_rectangle", json!({"x": 150, "y": 50}))
            .await
            .unwrap(),
    );

    let group = run(
        &mut d,
        "group_nodes",
        json!({"nodeIds": [a, b], "name": "Pair"}),
    )
    .await
    .unwrap();
    assert_eq!(group["name"], "Pair");
    assert_eq!(group["type"], "GROUP");
    assert_eq!(group["children"], json!([a, b]));

    let info = run(&mut d, "get_node_info", json!({"nodeId": id_of(&group)}))
        .await
        .unwrap();
    assert_eq!(info["width"], 250.0);
    assert_eq!(info["height"], 150.0);
}

#[tokio::test]
async fn group_requires_two_nodes_with_one_parent() {
    let mut d = dispatcher();
    let frame = id_of(&run(&mut d, "create_frame", json!({})).await.unwrap());
    let inner = id_of(
        &run(&mut d, "create_rectangle", json!({"parentId": frame}))
            .await
            .unwrap(),
    );
    let outer = id_of(&run(&mut d, "create_rectangle", json!({})).await.unwrap());

    let err = run(&mut d, "group_nodes", json!({"nodeIds": [outer]}))
        .await
        .unwrap_err();
    assert_eq!(err, "At least two node IDs are required to create a group");

    let err = run(&mut d, "group_nodes", json!({"nodeIds": [inner, outer]}))
        .await
        .unwrap_err();
    assert_eq!(err, "All nodes must have the same parent to be grouped");
}

#[tokio::test]
async fn boolean_operation_combines_shapes() {
    let mut d = dispatcher();
    let a = id_of(&run(&mut d, "create_rectangle", json!({"x": 0, "y": 0})).await.unwrap());
    let b = id_of(
        &run(&mut d, "create_rectangle", json!({"x": 50, "y": 50}))
            .await
            .unwrap(),
    );

    let op = run(
        &mut d,
        "create_boolean_operation",
        json!({"nodeIds": [a, b], "operation": "UNION", "name": "Blob"}),
    )
    .await
    .unwrap();
    assert_eq!(op["name"], "Blob");
    assert_eq!(op["type"], "BOOLEAN_OPERATION");
    assert_eq!(op["operation"], "UNION");

    let info = run(&mut d, "get_node_info", json!({"nodeId": id_of(&op)}))
        .await
        .unwrap();
    assert_eq!(info["width"], 150.0);
    assert_eq!(info["children"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn boolean_operation_validates_nodes_then_operation() {
    let mut d = dispatcher();
    let a = id_of(&run(&mut d, "create_rectangle", json!({})).await.unwrap());
    let b = id_of(&run(&mut d, "create_rectangle", json!({})).await.unwrap());

    let err = run(&mut d, "create_boolean_operation", json!({"nodeIds": [a]}))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        "At least two node IDs are required for a boolean operation"
    );

    let err = run(
        &mut d,
        "create_boolean_operation",
        json!({"nodeIds": [a, "9:99"], "operation": "MERGE"}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Node not found with ID: 9:99");

    let err = run(
        &mut d,
        "create_boolean_operation",
        json!({"nodeIds": [a, b], "operation": "MERGE"}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Unknown boolean operation: MERGE");
    assert_eq!(d.document().parent_id(NodeId::intern(&a)), Some(d.document().current_page().id));
}

// ─── Effects ────────────────────────────────────────────────────────────

#[tokio::test]
async fn apply_effect_appends_shadow_and_blur() {
    let mut d = dispatcher();
    let rect = id_of(&run(&mut d, "create_rectangle", json!({})).await.unwrap());

    let reply = run(
        &mut d,
        "apply_effect",
        json!({
            "nodeId": rect,
            "effectType": "DROP_SHADOW",
            "radius": 6,
            "color": {"r": 0, "g": 0, "b": 0, "a": 0.5},
            "offset": {"x": 0, "y": 2},
        }),
    )
    .await
    .unwrap();
    assert_eq!(
        reply,
        json!({"id": rect, "name": "Rectangle", "type": "RECTANGLE", "effectType": "DROP_SHADOW"})
    );

    run(
        &mut d,
        "apply_effect",
        json!({"nodeId": rect, "effectType": "LAYER_BLUR", "radius": 3}),
    )
    .await
    .unwrap();

    let info = run(&mut d, "get_node_info", json!({"nodeId": rect}))
        .await
        .unwrap();
    assert_eq!(
        info["effects"],
        json!([
            {
                "type": "DROP_SHADOW",
                "color": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 0.5},
                "offset": {"x": 0.0, "y": 2.0},
                "radius": 6.0,
                "visible": true,
                "blendMode": "NORMAL",
            },
            {"type": "LAYER_BLUR", "radius": 3.0, "visible": true},
        ])
    );
}

#[tokio::test]
async fn apply_effect_errors() {
    let mut d = dispatcher();
    let rect = id_of(&run(&mut d, "create_rectangle", json!({})).await.unwrap());
    let page = d.document().current_page().id;

    let err = run(
        &mut d,
        "apply_effect",
        json!({"nodeId": rect, "effectType": "INNER_SHADOW", "offset": {"x": 1, "y": 1}}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Color is required for INNER_SHADOW");

    let err = run(
        &mut d,
        "apply_effect",
        json!({"nodeId": rect, "effectType": "DROP_SHADOW", "color": {"r": 1}}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Offset is required for DROP_SHADOW");

    let err = run(
        &mut d,
        "apply_effect",
        json!({"nodeId": rect, "effectType": "GLOW"}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Unknown effect type: GLOW");

    let err = run(
        &mut d,
        "apply_effect",
        json!({"nodeId": page, "effectType": "LAYER_BLUR"}),
    )
    .await
    .unwrap_err();
    assert_eq!(err, "Node type PAGE does not support effects");

    let info = run(&mut d, "get_node_info", json!({"nodeId": rect}))
        .await
        .unwrap();
    assert_eq!(info["effects"], json!([]));
}

// ─── Styles ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_styles_lists_local_styles_by_kind() {
    let mut d = dispatcher();
    let empty = run(&mut d, "get_styles", Value::Null).await.unwrap();
    assert_eq!(
        empty,
        json!({"colors": [], "texts": [], "effects": [], "grids": []})
    );

    let styles = d.document_mut().styles_mut();
    let brand = styles.add_paint(
        "Brand/Primary",
        [Paint::solid(Color::rgba(0.0, 0.5, 1.0, 1.0))],
    );
    let heading = styles.add_text("Heading", 32.0, FontRef::new("Inter", "Bold"));
    styles.add_effect("Elevation/1", []);
    styles.add_grid("12 columns");

    let reply = run(&mut d, "get_styles", Value::Null).await.unwrap();
    assert_eq!(reply["colors"][0]["id"], brand);
    assert_eq!(reply["colors"][0]["name"], "Brand/Primary");
    assert_eq!(
        reply["colors"][0]["paint"],
        json!({"type": "SOLID", "color": {"r": 0.0, "g": 0.5, "b": 1.0}, "opacity": 1.0})
    );
    assert_eq!(reply["texts"][0]["id"], heading);
    assert_eq!(reply["texts"][0]["fontSize"], 32.0);
    assert_eq!(
        reply["texts"][0]["fontName"],
        json!({"family": "Inter", "style": "Bold"})
    );
    assert_eq!(reply["effects"][0]["name"], "Elevation/1");
    assert_eq!(reply["grids"][0]["name"], "12 columns");
    assert!(reply["grids"][0]["key"].is_string());
}

// ─── Text content ───────────────────────────────────────────────────────

fn mixed_text_node(d: &mut Dispatcher) -> NodeId {
    let content = TextContent::from_runs([
        ("one ", FontRef::new("Inter", "Bold")),
        ("two", FontRef::new("Roboto", "Regular")),
    ]);
    d.document_mut()
        .append(None, |id| SceneNode::new(id, "Label", NodeKind::Text(content)))
        .unwrap()
}

#[tokio::test]
async fn set_text_content_with_strategy() {
    let mut d = dispatcher();
    let id = mixed_text_node(&mut d);

    let reply = run(
        &mut d,
        "set_text_content",
        json!({"nodeId": id, "text": "uno dos", "smartStrategy": "experimental"}),
    )
    .await
    .unwrap();

    assert_eq!(reply["characters"], "uno dos");
    assert_eq!(reply["fontName"], "mixed");
    assert!(reply.get("missingFont").is_none());
    let doc = d.document();
    assert_eq!(
        doc.range_font(id, 0, 3).unwrap().as_uniform(),
        Some(&FontRef::new("Inter", "Bold"))
    );
    assert_eq!(
        doc.range_font(id, 4, 7).unwrap().as_uniform(),
        Some(&FontRef::new("Roboto", "Regular"))
    );
}

#[tokio::test]
async fn set_text_content_reports_missing_font() {
    let mut d = dispatcher();
    let content = TextContent::from_runs([("old", FontRef::new("Papyrus", "Regular"))]);
    let id = d
        .document_mut()
        .append(None, |id| SceneNode::new(id, "Label", NodeKind::Text(content)))
        .unwrap();

    let reply = run(&mut d, "set_text_content", json!({"nodeId": id, "text": "new"}))
        .await
        .unwrap();

    assert_eq!(reply["characters"], "new");
    assert_eq!(reply["fontName"], json!({"family": "Inter", "style": "Regular"}));
    assert_eq!(
        reply["missingFont"],
        json!({"family": "Papyrus", "style": "Regular"})
    );
}

#[tokio::test]
async fn set_text_content_rejects_non_text_nodes() {
    let mut d = dispatcher();
    let rect = id_of(&run(&mut d, "create_rectangle", json!({})).await.unwrap());

    let err = run(&mut d, "set_text_content", json!({"nodeId": rect, "text": "x"}))
        .await
        .unwrap_err();
    assert_eq!(err, format!("Node is not a text node: {rect}"));

    let err = run(&mut d, "set_text_content", json!({"nodeId": rect}))
        .await
        .unwrap_err();
    assert_eq!(err, "Missing text parameter");
}

#[tokio::test]
async fn unavailable_fallback_surfaces_as_text_error() {
    let mut d = dispatcher();
    let content = TextContent::from_runs([("old", FontRef::new("Papyrus", "Regular"))]);
    let id = d
        .document_mut()
        .append(None, |id| SceneNode::new(id, "Label", NodeKind::Text(content)))
        .unwrap();

    let err = run(
        &mut d,
        "set_text_content",
        json!({"nodeId": id, "text": "new",
               "fallbackFont": {"family": "Wingdings", "style": "Regular"}}),
    )
    .await
    .unwrap_err();
    assert!(err.starts_with("Error setting text content: "), "{err}");
    assert_eq!(d.document().characters(id).unwrap(), "old");
}

// ─── Envelope ───────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_command_replies_with_error() {
    let mut d = dispatcher();
    let reply = d
        .handle(UiMessage::ExecuteCommand {
            id: "abc".into(),
            command: "make_coffee".into(),
            params: Value::Null,
        })
        .await;
    assert_eq!(
        reply,
        Some(PluginMessage::CommandError {
            id: "abc".into(),
            error: "Unknown command: make_coffee".into(),
        })
    );
}

#[tokio::test]
async fn settings_update_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut d = Dispatcher::new(Document::new(), Settings::default())
        .with_settings_path(path.clone());

    let reply = d
        .handle(UiMessage::UpdateSettings {
            server_port: Some(4100),
        })
        .await;

    let expected = Settings { server_port: 4100 };
    assert_eq!(
        reply,
        Some(PluginMessage::SettingsUpdated { settings: expected })
    );
    assert_eq!(d.settings(), expected);
    assert_eq!(Settings::load(&path).unwrap(), expected);
}

#[tokio::test]
async fn notify_has_no_reply() {
    let mut d = dispatcher();
    let reply = d
        .handle(UiMessage::Notify {
            message: "hello".into(),
        })
        .await;
    assert_eq!(reply, None);
    assert!(!d.is_closed());
}
