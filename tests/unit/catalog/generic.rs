use super::*;
use std::collections::HashSet;

#[test]
fn primitive_names_are_unique() {
    let mut seen = HashSet::new();
    for (name, _) in PRIMITIVES {
        assert!(seen.insert(*name), "{name} listed twice");
    }
}

fn nothing(_cx: &RenderCx<'_>) -> Element {
    Element::Nothing
}

#[test]
fn generic_pass_skips_claimed_names() {
    let mut reg = Registry::new();
    let button = reg.register("Button", nothing);
    let registered = register(&mut reg);

    assert_eq!(registered, PRIMITIVES.len() - 1);
    assert!(Arc::ptr_eq(reg.get_renderer("Button").unwrap(), &button));
    assert!(!reg.has_renderer("button"));
    assert!(reg.has_renderer("alert-dialog-trigger"));
    assert!(reg.has_renderer("alertdialogtrigger"));
}

#[test]
fn children_fall_back_to_the_explicit_list() {
    let nodes = vec![
        crate::scene::model::Node::new(
            "g",
            "TableRow",
            serde_json::json!({"children": {"explicitList": ["c1", "c2"]}, "hidden": false}),
        ),
        crate::scene::model::Node::new("c1", "TableCell", serde_json::json!({"child": "missing"})),
        crate::scene::model::Node::new("c2", "TableCell", serde_json::json!({})),
    ];
    let mut reg = Registry::new();
    register(&mut reg);
    let data = Value::Null;
    let out = crate::session::render_session::RenderSession::new(&nodes, &data)
        .with_registry(&reg)
        .render(None);

    let row = out.as_widget().unwrap();
    assert_eq!(row.tag, "tr");
    assert_eq!(row.get_attr("hidden"), Some(&Value::Bool(false)));
    assert_eq!(row.children.len(), 2);
    let first = row.children[0].as_widget().unwrap();
    assert_eq!(first.tag, "td");
    assert_eq!(
        first.children[0].as_diagnostic().unwrap().message(),
        "Unknown component: missing"
    );
}

#[test]
fn props_that_are_not_attribute_names_are_not_forwarded() {
    let nodes = vec![crate::scene::model::Node::new(
        "root",
        "Label",
        serde_json::json!({
            "x\"><script>alert(1)</script><b y": true,
            "onclick": "steal()",
            "text": "hi",
        }),
    )];
    let data = Value::Null;
    let out = crate::session::render_session::render_graph(&nodes, None, &data, None);

    let label = out.as_widget().unwrap();
    assert_eq!(label.tag, "label");
    assert_eq!(label.get_attr("text"), Some(&Value::String("hi".into())));
    assert_eq!(label.get_attr("onclick"), None);
    assert_eq!(label.attrs.len(), 2, "{:?}", label.attrs);

    let html = crate::render::html::to_html(&out);
    assert!(!html.contains("<script>"), "{html}");
    assert!(!html.contains("onclick"), "{html}");
    assert!(html.contains(r#"text="hi""#), "{html}");
}
