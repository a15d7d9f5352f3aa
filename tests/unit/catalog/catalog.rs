use super::*;
use crate::catalog::meta::CATALOG;
use crate::scene::graph::Graph;
use crate::schema::validate::validate_graph_with;
use crate::session::render_session::RenderSession;
use serde_json::{Map, json};
use std::cell::Cell;

fn render(nodes: Value, data: Value) -> Element {
    let graph = Graph::from_value(nodes).unwrap();
    RenderSession::for_graph(&graph, &data).render(None)
}

fn widget(e: &Element) -> &Widget {
    e.as_widget().expect("widget")
}

fn class(w: &Widget) -> &str {
    w.get_attr("class").and_then(Value::as_str).unwrap_or_default()
}

#[test]
fn every_catalog_type_is_registered_curated_first() {
    let reg = build_standard_registry();
    for e in CATALOG {
        assert!(reg.has_renderer(e.name), "{} missing", e.name);
    }
    assert_eq!(reg.list_types()[0], "Column");
}

#[test]
fn standard_registry_is_built_once() {
    assert!(std::ptr::eq(standard_registry(), standard_registry()));
    assert_eq!(standard_registry().len(), build_standard_registry().len());
}

#[test]
fn curated_renderers_keep_their_slots() {
    let reg = standard_registry();
    let card = reg.get_renderer("Card").unwrap();
    assert!(card.child_slots().contains(&ChildSlot::One("footer")));
    let generic = reg.get_renderer("CardHeader").unwrap();
    assert_eq!(generic.child_slots(), CONVENTIONAL_SLOTS);
}

#[test]
fn generic_aliases_resolve_but_curated_names_get_none() {
    let reg = standard_registry();
    assert!(reg.has_renderer("card-header"));
    assert!(reg.has_renderer("cardheader"));
    assert!(reg.has_renderer("input-otp-group"));
    assert!(!reg.has_renderer("card"));
}

#[test]
fn column_defaults() {
    let out = render(json!([{"id": "c", "component": {"Column": {}}}]), json!({}));
    let w = widget(&out);
    assert_eq!(w.tag, "div");
    assert_eq!(
        class(w),
        "flex flex-col gap-4 items-stretch justify-start w-full"
    );
    assert!(w.get_attr("style").is_none());
}

#[test]
fn column_keeps_zero_gap_and_padding() {
    let out = render(
        json!([{"id": "c", "component": {"Column": {"gap": 0, "padding": 2, "width": "1/2"}}}]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(
        class(w),
        "flex flex-col gap-0 items-stretch justify-start w-1/2"
    );
    assert_eq!(w.get_attr("style"), Some(&json!("padding: 8px")));
}

#[test]
fn row_wraps_and_centers() {
    let out = render(
        json!([{"id": "r", "component": {"Row": {"wrap": true, "className": "mt-2"}}}]),
        json!({}),
    );
    assert_eq!(
        class(widget(&out)),
        "flex flex-row gap-4 items-center justify-start flex-wrap w-full mt-2"
    );
}

#[test]
fn text_maps_usage_hint_and_resolves_paths() {
    let out = render(
        json!([{"id": "t", "component": {"Text": {
            "text": {"path": "/user/name"}, "usageHint": "h1"}}}]),
        json!({"user": {"name": "Ada"}}),
    );
    let w = widget(&out);
    assert_eq!(w.tag, "h1");
    assert_eq!(class(w), "text-4xl font-bold tracking-tight");
    assert_eq!(w.text_content(), "Ada");

    let out = render(
        json!([{"id": "t", "component": {"Text": {"text": {"path": "/missing"}}}}]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.tag, "p");
    assert!(w.children.is_empty());
}

#[test]
fn card_renders_header_content_and_footer() {
    let out = render(
        json!([
            {"id": "card", "component": {"Card": {
                "title": {"literalString": "Pro"}, "child": "body", "footer": "cta"}}},
            {"id": "body", "component": {"Text": {"text": "Unlimited"}}},
            {"id": "cta", "component": {"Button": {"label": "Buy"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    let slots: Vec<_> = w
        .children
        .iter()
        .map(|c| widget(c).get_attr("data-slot").cloned())
        .collect();
    assert_eq!(
        slots,
        vec![
            Some(json!("card-header")),
            Some(json!("card-content")),
            Some(json!("card-footer")),
        ]
    );
    assert_eq!(w.text_content(), "ProUnlimitedBuy");
}

#[test]
fn button_binds_click_only_with_a_handler() {
    let graph = Graph::from_value(json!([
        {"id": "b", "component": {"Button": {
            "label": {"literalString": "Save"},
            "action": {"name": "save", "context": {"draft": false}}}}}
    ]))
    .unwrap();
    let data = json!({});

    let plain = RenderSession::for_graph(&graph, &data).render(None);
    assert!(widget(&plain).events.is_empty());
    assert_eq!(widget(&plain).text_content(), "Save");

    let fired = Cell::new(0);
    let handler = |name: &str, ctx: &Map<String, Value>| {
        assert_eq!(name, "save");
        assert_eq!(ctx.get("draft"), Some(&json!(false)));
        fired.set(fired.get() + 1);
    };
    let session = RenderSession::for_graph(&graph, &data).with_action_handler(&handler);
    let out = session.render(None);
    assert_eq!(fired.get(), 0);
    assert!(widget(&out).fire("click", &handler));
    assert_eq!(fired.get(), 1);
}

#[test]
fn button_prefers_its_child_subtree() {
    let out = render(
        json!([
            {"id": "b", "component": {"Button": {"label": "ignored", "child": "icon"}}},
            {"id": "icon", "component": {"Icon": {"name": "star"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.children.len(), 1);
    assert_eq!(widget(&w.children[0]).get_attr("data-icon"), Some(&json!("star")));
}

#[test]
fn input_defaults() {
    let out = render(
        json!([
            {"id": "col", "component": {"Column": {"children": {"explicitList": ["l", "p", "s", "a", "sel"]}}}},
            {"id": "l", "component": {"Link": {"text": "Docs"}}},
            {"id": "p", "component": {"Progress": {}}},
            {"id": "s", "component": {"Slider": {}}},
            {"id": "a", "component": {"TextArea": {}}},
            {"id": "sel", "component": {"SelectInput": {"options": ["a", {"value": "b", "label": "Bee"}]}}}
        ]),
        json!({}),
    );
    let kids = &widget(&out).children;

    let link = widget(&kids[0]);
    assert_eq!(link.get_attr("href"), Some(&json!("#")));
    assert_eq!(link.get_attr("target"), Some(&json!("_self")));

    assert_eq!(widget(&kids[1]).get_attr("aria-valuenow"), Some(&json!(0)));

    let slider = widget(&kids[2]);
    assert_eq!(slider.get_attr("value"), Some(&json!(50)));
    assert_eq!(slider.get_attr("max"), Some(&json!(100)));

    assert_eq!(widget(&kids[3]).get_attr("rows"), Some(&json!(4)));

    let select = widget(&kids[4]);
    assert_eq!(select.text_content(), "Select...aBee");
    assert_eq!(
        widget(&select.children[2]).get_attr("value"),
        Some(&json!("b"))
    );
}

#[test]
fn labelled_inputs_are_wrapped() {
    let out = render(
        json!([{"id": "f", "component": {"TextField": {
            "label": "Email", "placeholder": "you@example.com", "type": "email"}}}]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(class(w), "space-y-2");
    assert_eq!(widget(&w.children[0]).tag, "label");
    let input = widget(&w.children[1]);
    assert_eq!(input.get_attr("type"), Some(&json!("email")));
    assert_eq!(input.get_attr("placeholder"), Some(&json!("you@example.com")));
}

#[test]
fn tabs_pick_a_default_and_number_missing_labels() {
    let out = render(
        json!([
            {"id": "t", "component": {"Tabs": {"tabs": [
                {"label": "One", "content": "p1"},
                {"content": "p2"}
            ]}}},
            {"id": "p1", "component": {"Text": {"text": "first"}}},
            {"id": "p2", "component": {"Text": {"text": "second"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.get_attr("data-default-value"), Some(&json!("tab-0")));

    let list = widget(&w.children[0]);
    assert_eq!(list.text_content(), "OneTab 2");
    assert_eq!(widget(&list.children[0]).get_attr("aria-selected"), Some(&json!(true)));
    assert_eq!(widget(&list.children[1]).get_attr("data-value"), Some(&json!("tab-1")));

    let second = widget(&w.children[2]);
    assert_eq!(second.get_attr("hidden"), Some(&json!(true)));
    assert_eq!(second.text_content(), "second");
}

#[test]
fn accordion_titles_default_to_item_numbers() {
    let out = render(
        json!([{"id": "a", "component": {"Accordion": {"items": [
            {"title": "FAQ", "text": "Answer"},
            {}
        ]}}}]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.get_attr("data-type"), Some(&json!("single")));
    assert_eq!(w.text_content(), "FAQAnswerItem 2");
}

#[test]
fn table_cells_by_key_then_index() {
    let out = render(
        json!([{"id": "t", "component": {"Table": {
            "columns": [{"header": "Name", "key": "name"}, "Age"],
            "rows": [{"name": "Ada"}, ["x", 36]]
        }}}]),
        json!({}),
    );
    let w = widget(&out);
    let head = widget(&w.children[0]);
    assert_eq!(head.text_content(), "NameAge");
    let body = widget(&w.children[1]);
    let cells: Vec<String> = body
        .children
        .iter()
        .flat_map(|row| widget(row).children.iter().map(|c| widget(c).text_content()))
        .collect();
    assert_eq!(cells, vec!["Ada", "", "x", "36"]);
}

#[test]
fn chips_and_avatar_fallbacks() {
    let out = render(
        json!([
            {"id": "row", "component": {"Row": {"children": {"explicitList": ["chips", "av"]}}}},
            {"id": "chips", "component": {"ChipList": {"chips": ["rust", {"text": "wasm", "variant": "outline"}]}}},
            {"id": "av", "component": {"Avatar": {}}}
        ]),
        json!({}),
    );
    let kids = &widget(&out).children;
    let chips = widget(&kids[0]);
    assert_eq!(chips.text_content(), "rustwasm");
    assert_eq!(
        widget(&chips.children[0]).get_attr("data-variant"),
        Some(&json!("secondary"))
    );
    assert_eq!(widget(&kids[1]).text_content(), "?");
}

#[test]
fn overlays_render_trigger_and_content() {
    let out = render(
        json!([
            {"id": "tip", "component": {"Tooltip": {"trigger": "btn", "content": "hint"}}},
            {"id": "btn", "component": {"Button": {"label": "?"}}},
            {"id": "hint", "component": {"Text": {"text": "Help"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.get_attr("data-slot"), Some(&json!("tooltip")));
    let content = widget(&w.children[1]);
    assert_eq!(content.get_attr("role"), Some(&json!("tooltip")));
    assert_eq!(w.text_content(), "?Help");
}

#[test]
fn generic_primitives_pass_props_through() {
    let out = render(
        json!([
            {"id": "h", "component": {"card-header": {"className": "pb-2", "child": "t", "aria-label": "head"}}},
            {"id": "t", "component": {"CardTitle": {"children": {"explicitList": ["x"]}}}},
            {"id": "x", "component": {"Text": {"text": "Hi"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.get_attr("data-slot"), Some(&json!("card-header")));
    assert_eq!(class(w), "pb-2");
    assert_eq!(w.get_attr("aria-label"), Some(&json!("head")));
    let title = widget(&w.children[0]);
    assert_eq!(title.get_attr("data-slot"), Some(&json!("card-title")));
    assert_eq!(title.text_content(), "Hi");
}

fn slot_of(w: &Widget) -> Option<&str> {
    w.get_attr("data-slot").and_then(Value::as_str)
}

#[test]
fn resizable_panels_hold_children_between_handles() {
    let out = render(
        json!([
            {"id": "r", "component": {"Resizable": {"panels": [
                {"child": "a"},
                {"child": "b", "size": 30}
            ]}}},
            {"id": "a", "component": {"Text": {"text": "Left"}}},
            {"id": "b", "component": {"Text": {"text": "Right"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(slot_of(w), Some("resizable-panel-group"));
    assert_eq!(w.get_attr("data-panel-group-direction"), Some(&json!("horizontal")));
    let parts: Vec<_> = w.children.iter().map(|c| slot_of(widget(c))).collect();
    assert_eq!(
        parts,
        vec![
            Some("resizable-panel"),
            Some("resizable-handle"),
            Some("resizable-panel"),
        ]
    );
    assert_eq!(widget(&w.children[0]).get_attr("data-size"), Some(&json!(50)));
    assert_eq!(
        widget(&w.children[2]).get_attr("style"),
        Some(&json!("flex: 30 1 0px"))
    );
    assert_eq!(w.text_content(), "LeftRight");
}

#[test]
fn sidebar_regions_follow_their_props() {
    let out = render(
        json!([
            {"id": "s", "component": {"Sidebar": {
                "header": "h", "content": "nav", "footer": "f", "collapsible": "icon",
                "children": {"explicitList": ["extra"]}}}},
            {"id": "h", "component": {"Text": {"text": "Acme"}}},
            {"id": "nav", "component": {"Text": {"text": "Home"}}},
            {"id": "extra", "component": {"Text": {"text": "Settings"}}},
            {"id": "f", "component": {"Text": {"text": "v1"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(slot_of(w), Some("sidebar-wrapper"));

    let aside = widget(&w.children[0]);
    assert_eq!(aside.tag, "aside");
    assert_eq!(aside.get_attr("data-collapsible"), Some(&json!("icon")));
    let regions: Vec<_> = aside.children.iter().map(|c| slot_of(widget(c))).collect();
    assert_eq!(
        regions,
        vec![Some("sidebar-header"), Some("sidebar-content"), Some("sidebar-footer")]
    );
    assert_eq!(widget(&aside.children[1]).text_content(), "HomeSettings");

    let main = widget(&w.children[1]);
    assert_eq!(main.tag, "main");
    assert_eq!(slot_of(widget(&main.children[0])), Some("sidebar-trigger"));

    let bare = render(json!([{"id": "s", "component": {"Sidebar": {}}}]), json!({}));
    let aside = widget(&widget(&bare).children[0]);
    assert_eq!(aside.children.len(), 1);
    assert!(aside.get_attr("data-collapsible").is_none());

    let trigger = render(json!([{"id": "t", "component": {"SidebarTrigger": {}}}]), json!({}));
    assert_eq!(widget(&trigger).text_content(), "Toggle Sidebar");
}

#[test]
fn empty_state_renders_icon_title_and_content() {
    let out = render(
        json!([
            {"id": "e", "component": {"Empty": {"title": "No projects", "icon": "i", "child": "go"}}},
            {"id": "i", "component": {"Icon": {"name": "folder"}}},
            {"id": "go", "component": {"Button": {"label": "Create"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(slot_of(w), Some("empty"));
    let header = widget(&w.children[0]);
    assert_eq!(header.children.len(), 2);
    assert_eq!(slot_of(widget(&w.children[1])), Some("empty-content"));
    assert_eq!(w.text_content(), "folderNo projectsCreate");
}

#[test]
fn chart_frames_type_and_data() {
    let out = render(
        json!([{"id": "c", "component": {"Chart": {
            "type": "bar", "data": [{"m": 1}, {"m": 2}], "title": "Revenue", "height": "200px"}}}]),
        json!({}),
    );
    let w = widget(&out);
    assert!(out.diagnostics().is_empty());
    assert_eq!(w.children.len(), 2);
    let frame = widget(&w.children[1]);
    assert_eq!(slot_of(frame), Some("chart"));
    assert_eq!(frame.get_attr("data-chart"), Some(&json!("bar")));
    assert_eq!(frame.get_attr("data-points"), Some(&json!(2)));
    assert_eq!(class(frame), "aspect-video w-full h-[200px]");
    assert_eq!(w.text_content(), "RevenueChart: bar");

    let out = render(json!([{"id": "c", "component": {"Chart": {}}}]), json!({}));
    let w = widget(&out);
    assert_eq!(w.children.len(), 1);
    assert!(widget(&w.children[0]).get_attr("data-points").is_none());
    assert_eq!(w.text_content(), "Chart: Data Visualization");
}

#[test]
fn input_and_button_groups_render_their_lists() {
    let out = render(
        json!([
            {"id": "col", "component": {"Column": {"children": {"explicitList": ["g", "bg"]}}}},
            {"id": "g", "component": {"InputGroup": {"children": {"explicitList": ["at", "field"]}}}},
            {"id": "at", "component": {"InputGroupAddon": {"child": "sym"}}},
            {"id": "sym", "component": {"Text": {"text": "@"}}},
            {"id": "field", "component": {"TextField": {"placeholder": "handle"}}},
            {"id": "bg", "component": {"ButtonGroup": {
                "orientation": "vertical", "children": {"explicitList": ["b1", "b2"]}}}},
            {"id": "b1", "component": {"Button": {"label": "One"}}},
            {"id": "b2", "component": {"Button": {"label": "Two"}}}
        ]),
        json!({}),
    );
    let kids = &widget(&out).children;

    let group = widget(&kids[0]);
    assert_eq!(slot_of(group), Some("input-group"));
    let addon = widget(&group.children[0]);
    assert_eq!(addon.get_attr("data-align"), Some(&json!("inline-start")));
    assert_eq!(addon.text_content(), "@");
    assert_eq!(slot_of(widget(&group.children[1])), Some("input"));

    let buttons = widget(&kids[1]);
    assert_eq!(buttons.get_attr("data-orientation"), Some(&json!("vertical")));
    assert_eq!(buttons.children.len(), 2);
    assert_eq!(buttons.text_content(), "OneTwo");
}

#[test]
fn otp_cells_follow_max_length_and_value() {
    let out = render(
        json!([{"id": "o", "component": {"InputOTP": {"value": {"path": "/code"}, "maxLength": 4}}}]),
        json!({"code": "12"}),
    );
    let w = widget(&out);
    assert_eq!(w.get_attr("data-max-length"), Some(&json!(4)));
    let cells = &widget(&w.children[0]).children;
    let texts: Vec<String> = cells.iter().map(|c| widget(c).text_content()).collect();
    assert_eq!(texts, vec!["1", "2", "", ""]);
    assert_eq!(widget(&cells[2]).get_attr("data-active"), Some(&json!(true)));
    assert!(widget(&cells[0]).get_attr("data-active").is_none());

    let cells_for = |max: Value| {
        let out = render(
            json!([{"id": "o", "component": {"InputOTP": {"maxLength": max}}}]),
            json!({}),
        );
        widget(&widget(&out).children[0]).children.len()
    };
    assert_eq!(cells_for(Value::Null), 6);
    assert_eq!(cells_for(json!(1000)), 32);
}

#[test]
fn toggle_group_items_prefer_labels_over_children() {
    let out = render(
        json!([
            {"id": "tg", "component": {"ToggleGroup": {"items": [
                {"value": "b", "label": "Bold"},
                {"value": "i", "child": "ic"}
            ]}}},
            {"id": "ic", "component": {"Icon": {"name": "italic"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.get_attr("data-type"), Some(&json!("multiple")));
    let bold = widget(&w.children[0]);
    assert_eq!(bold.get_attr("data-value"), Some(&json!("b")));
    assert_eq!(bold.text_content(), "Bold");
    let italic = widget(&w.children[1]);
    assert_eq!(
        widget(&italic.children[0]).get_attr("data-icon"),
        Some(&json!("italic"))
    );
}

#[test]
fn alert_dialog_defaults_and_binds_its_action() {
    let graph = Graph::from_value(json!([
        {"id": "d", "component": {"AlertDialog": {
            "trigger": "open", "title": "Delete?", "actionLabel": "Delete",
            "action": {"name": "delete"}}}},
        {"id": "open", "component": {"Button": {"label": "Remove"}}}
    ]))
    .unwrap();
    let data = json!({});
    let fired = Cell::new(0);
    let handler = |name: &str, _: &Map<String, Value>| {
        assert_eq!(name, "delete");
        fired.set(fired.get() + 1);
    };
    let out = RenderSession::for_graph(&graph, &data)
        .with_action_handler(&handler)
        .render(None);

    let w = widget(&out);
    assert_eq!(slot_of(widget(&w.children[0])), Some("alert-dialog-trigger"));
    let content = widget(&w.children[1]);
    assert_eq!(content.get_attr("role"), Some(&json!("alertdialog")));
    assert_eq!(w.text_content(), "RemoveDelete?CancelDelete");

    let footer = widget(&content.children[1]);
    assert!(!widget(&footer.children[0]).fire("click", &handler));
    assert!(widget(&footer.children[1]).fire("click", &handler));
    assert_eq!(fired.get(), 1);
}

#[test]
fn drawer_and_sheet_render_their_regions() {
    let out = render(
        json!([
            {"id": "col", "component": {"Column": {"children": {"explicitList": ["dr", "sh"]}}}},
            {"id": "dr", "component": {"Drawer": {"title": "Filters", "child": "body", "footer": "apply"}}},
            {"id": "sh", "component": {"Sheet": {"trigger": "open", "child": "body"}}},
            {"id": "body", "component": {"Text": {"text": "Pick"}}},
            {"id": "apply", "component": {"Button": {"label": "Apply"}}},
            {"id": "open", "component": {"Button": {"label": "Open"}}}
        ]),
        json!({}),
    );
    let kids = &widget(&out).children;

    let drawer = widget(&kids[0]);
    assert_eq!(drawer.children.len(), 1);
    let content = widget(&drawer.children[0]);
    assert_eq!(slot_of(content), Some("drawer-content"));
    assert_eq!(widget(&content.children[2]).text_content(), "ApplyClose");
    assert_eq!(drawer.text_content(), "FiltersPickApplyClose");

    let sheet = widget(&kids[1]);
    assert_eq!(slot_of(widget(&sheet.children[0])), Some("sheet-trigger"));
    assert_eq!(
        widget(&sheet.children[1]).get_attr("data-side"),
        Some(&json!("right"))
    );
    assert_eq!(sheet.text_content(), "OpenPick");
}

#[test]
fn carousel_wraps_each_item_in_a_slide() {
    let out = render(
        json!([
            {"id": "c", "component": {"Carousel": {"items": ["s1", "s2"]}}},
            {"id": "s1", "component": {"Text": {"text": "One"}}},
            {"id": "s2", "component": {"Text": {"text": "Two"}}}
        ]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(w.children.len(), 3);
    let slides = &widget(&w.children[0]).children;
    assert_eq!(slides.len(), 2);
    assert!(slides.iter().all(|s| slot_of(widget(s)) == Some("carousel-item")));
    assert_eq!(w.text_content(), "OneTwoPrevious slideNext slide");
}

#[test]
fn menus_render_items_and_separators() {
    let out = render(
        json!([
            {"id": "row", "component": {"Row": {"children": {"explicitList": ["ctx", "bar"]}}}},
            {"id": "ctx", "component": {"ContextMenu": {"items": [
                {"label": "Copy"}, {"separator": true}, {"label": {"path": "/paste"}}
            ]}}},
            {"id": "bar", "component": {"Menubar": {"items": [
                {"label": "File", "items": [{"label": "New"}, {"separator": true}, {"label": "Quit"}]},
                {"label": "Edit"}
            ]}}}
        ]),
        json!({"paste": "Paste"}),
    );
    assert!(out.diagnostics().is_empty());
    let kids = &widget(&out).children;

    let ctx = widget(&kids[0]);
    assert_eq!(widget(&ctx.children[0]).text_content(), "Right click here");
    let entries = &widget(&ctx.children[1]).children;
    let parts: Vec<_> = entries.iter().map(|e| slot_of(widget(e))).collect();
    assert_eq!(
        parts,
        vec![
            Some("context-menu-item"),
            Some("context-menu-separator"),
            Some("context-menu-item"),
        ]
    );
    assert_eq!(widget(&entries[2]).text_content(), "Paste");

    let bar = widget(&kids[1]);
    assert_eq!(bar.get_attr("role"), Some(&json!("menubar")));
    assert_eq!(bar.children.len(), 2);
    let file = widget(&bar.children[0]);
    assert_eq!(widget(&file.children[1]).children.len(), 3);
    assert_eq!(bar.text_content(), "FileNewQuitEdit");
}

#[test]
fn navigation_menu_links_and_panels() {
    let out = render(
        json!([{"id": "n", "component": {"NavigationMenu": {"items": [
            {"label": "Docs", "href": "/docs"},
            {"label": "Products", "content": "All products"},
            {"label": "Blog"}
        ]}}}]),
        json!({}),
    );
    let list = widget(&widget(&out).children[0]);
    let items: Vec<&Widget> = list.children.iter().map(widget).collect();

    let docs = widget(&items[0].children[0]);
    assert_eq!(docs.tag, "a");
    assert_eq!(docs.get_attr("href"), Some(&json!("/docs")));

    assert_eq!(items[1].children.len(), 2);
    assert_eq!(slot_of(widget(&items[1].children[0])), Some("navigation-menu-trigger"));
    assert_eq!(items[1].text_content(), "ProductsAll products");

    assert_eq!(widget(&items[2].children[0]).get_attr("href"), Some(&json!("#")));
}

#[test]
fn command_groups_are_separated() {
    let out = render(
        json!([{"id": "c", "component": {"Command": {"groups": [
            {"heading": "Files", "items": ["Open", {"label": "Save"}]},
            {"heading": "Help", "items": [{"label": "Docs"}]}
        ]}}}]),
        json!({}),
    );
    let w = widget(&out);
    assert_eq!(
        widget(&w.children[0]).get_attr("placeholder"),
        Some(&json!("Type a command..."))
    );
    let list = widget(&w.children[1]);
    let parts: Vec<_> = list.children.iter().map(|c| slot_of(widget(c))).collect();
    assert_eq!(
        parts,
        vec![
            Some("command-empty"),
            Some("command-group"),
            Some("command-separator"),
            Some("command-group"),
        ]
    );
    assert_eq!(
        widget(&list.children[1]).get_attr("data-heading"),
        Some(&json!("Files"))
    );
    assert_eq!(list.text_content(), "No results found.OpenSaveDocs");
}

#[test]
fn pagination_clamps_and_marks_the_current_page() {
    let entries = |props: Value| {
        let out = render(json!([{"id": "p", "component": {"Pagination": props}}]), json!({}));
        let content = widget(&widget(&out).children[0]);
        content
            .children
            .iter()
            .map(|li| widget(&widget(li).children[0]).clone())
            .collect::<Vec<Widget>>()
    };

    let last = entries(json!({"current": 9, "total": 5}));
    assert_eq!(last.len(), 3);
    assert_eq!(last[0].get_attr("data-page"), Some(&json!(4)));
    assert_eq!(last[1].text_content(), "5");
    assert_eq!(last[1].get_attr("aria-current"), Some(&json!("page")));
    assert_eq!(last[2].get_attr("aria-disabled"), Some(&json!(true)));

    let open = entries(json!({}));
    assert_eq!(open.len(), 4);
    assert_eq!(open[0].get_attr("aria-disabled"), Some(&json!(true)));
    assert_eq!(slot_of(&open[2]), Some("pagination-ellipsis"));
    assert_eq!(open[3].get_attr("data-page"), Some(&json!(2)));
}

#[test]
fn pagination_binds_only_enabled_directions() {
    let graph = Graph::from_value(json!([
        {"id": "p", "component": {"Pagination": {"current": 1, "onPageChange": {"name": "page"}}}}
    ]))
    .unwrap();
    let data = json!({});
    let handler = |_: &str, _: &Map<String, Value>| {};
    let out = RenderSession::for_graph(&graph, &data)
        .with_action_handler(&handler)
        .render(None);
    let content = widget(&widget(&out).children[0]);
    let link = |i: usize| widget(&widget(&content.children[i]).children[0]);
    assert!(link(0).events.is_empty());
    assert!(link(3).events.contains_key("click"));
}

#[test]
fn validation_follows_curated_slots() {
    let graph = Graph::from_value(json!([
        {"id": "side", "component": {"Sidebar": {"header": "ghost"}}},
        {"id": "split", "component": {"Resizable": {"panels": [{"child": "side"}, {"child": "nowhere"}]}}},
        {"id": "slides", "component": {"Carousel": {"items": ["gone"]}}},
        {"id": "tg", "component": {"ToggleGroup": {"items": [{"child": "lost"}]}}},
        {"id": "none", "component": {"Empty": {"icon": "void"}}},
        {"id": "ask", "component": {"AlertDialog": {"trigger": "missing"}}}
    ]))
    .unwrap();
    let errs: Vec<String> = validate_graph_with(&graph, standard_registry())
        .unwrap_err()
        .errors
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        errs,
        vec![
            "$[0].component: 'side' references unknown id 'ghost'",
            "$[1].component: 'split' references unknown id 'nowhere'",
            "$[2].component: 'slides' references unknown id 'gone'",
            "$[3].component: 'tg' references unknown id 'lost'",
            "$[4].component: 'none' references unknown id 'void'",
            "$[5].component: 'ask' references unknown id 'missing'",
        ]
    );
}

#[test]
fn chart_counts_bound_data_rows() {
    let out = render(
        json!([{"id": "c", "component": {"Chart": {"data": {"path": "/sales"}}}}]),
        json!({"sales": [1, 2, 3]}),
    );
    let frame = widget(&widget(&out).children[0]);
    assert_eq!(frame.get_attr("data-points"), Some(&json!(3)));
}
