use super::{
    conventional, curated, extra_class, items, leaf, number, padding_style, raw_or, raw_truthy_or,
    size_class, slot,
};
use crate::binding::scalar;
use crate::eval::children::ChildSlot;
use crate::eval::interpreter::RenderCx;
use crate::registry::Registry;
use crate::render::element::{Element, Widget};
use serde_json::Value;

const CARD_SLOTS: &[ChildSlot] = &[
    ChildSlot::One("child"),
    ChildSlot::ExplicitList("children"),
    ChildSlot::One("footer"),
];
const ONE_CHILD: &[ChildSlot] = &[ChildSlot::One("child")];
const LIST_ITEMS: &[ChildSlot] = &[ChildSlot::Nested {
    list: "items",
    field: "content",
}];
const PANELS: &[ChildSlot] = &[ChildSlot::Nested {
    list: "panels",
    field: "child",
}];
const SIDEBAR_SLOTS: &[ChildSlot] = &[
    ChildSlot::One("header"),
    ChildSlot::One("content"),
    ChildSlot::ExplicitList("children"),
    ChildSlot::One("footer"),
];

pub(super) fn register(reg: &mut Registry) {
    conventional(reg, "Column", column);
    conventional(reg, "Row", row);
    curated(reg, "Card", card, CARD_SLOTS);
    curated(reg, "Section", section, ONE_CHILD);
    curated(reg, "AspectRatio", aspect_ratio, ONE_CHILD);
    conventional(reg, "ScrollArea", scroll_area);
    curated(reg, "ListView", list_view, LIST_ITEMS);
    curated(reg, "Resizable", resizable, PANELS);
    curated(reg, "Sidebar", sidebar, SIDEBAR_SLOTS);
    leaf(reg, "SidebarTrigger", standalone_sidebar_trigger);
}

fn flex(cx: &RenderCx<'_>, direction: &str, default_align: &str) -> Widget {
    let gap = raw_or(cx, "gap", "4");
    let align = raw_truthy_or(cx, "align", default_align);
    let justify = raw_truthy_or(cx, "justify", "start");
    let wrap = if cx.prop_flag("wrap") { "flex-wrap" } else { "" };
    let width = size_class(cx, "w", "width").unwrap_or_else(|| "w-full".to_owned());
    let height = size_class(cx, "h", "height").unwrap_or_default();
    Widget::new("div")
        .class(format!(
            "flex {direction} gap-{gap} items-{align} justify-{justify} {wrap} {width} {height} {}",
            extra_class(cx)
        ))
        .children(cx.render_children())
}

fn column(cx: &RenderCx<'_>) -> Element {
    flex(cx, "flex-col", "stretch")
        .attr_opt("style", padding_style(cx))
        .into()
}

fn row(cx: &RenderCx<'_>) -> Element {
    flex(cx, "flex-row", "center").into()
}

fn card(cx: &RenderCx<'_>) -> Element {
    let title = cx.resolve_text("title");
    let description = cx.resolve_text("description");
    let header = (title.is_some() || description.is_some()).then(|| {
        Widget::new("div")
            .attr("data-slot", "card-header")
            .child(title.map(|t| slot("div", "card-title").text(t)))
            .child(description.map(|d| slot("div", "card-description").text(d)))
    });
    let content = slot("div", "card-content")
        .child(cx.render_child("child"))
        .children(cx.render_children());
    let footer = cx
        .prop_str("footer")
        .map(|id| slot("div", "card-footer").child(cx.render(id)));

    slot("div", "card")
        .class(format!(
            "{} {}",
            size_class(cx, "w", "width").unwrap_or_default(),
            extra_class(cx)
        ))
        .child(header)
        .child(content)
        .child(footer)
        .into()
}

fn section(cx: &RenderCx<'_>) -> Element {
    Widget::new("section")
        .class(cx.prop_str("background").unwrap_or_default())
        .attr_opt("style", padding_style(cx))
        .child(cx.render_child("child"))
        .into()
}

fn aspect_ratio(cx: &RenderCx<'_>) -> Element {
    let ratio = cx
        .prop_f64("ratio")
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(16.0 / 9.0);
    slot("div", "aspect-ratio")
        .attr("data-ratio", number(ratio))
        .attr("style", format!("aspect-ratio: {ratio}"))
        .child(cx.render_child("child"))
        .into()
}

fn scroll_area(cx: &RenderCx<'_>) -> Element {
    let body: Element = match cx.prop_str("child").filter(|id| !id.is_empty()) {
        Some(id) => cx.render(id),
        None => Widget::new("div")
            .class(cx.prop_str("innerClassName").unwrap_or_default())
            .children(cx.render_children())
            .into(),
    };
    slot("div", "scroll-area")
        .class(extra_class(cx))
        .child(body)
        .into()
}

fn list_view(cx: &RenderCx<'_>) -> Element {
    let rows = items(cx, "items").iter().map(|item| {
        let body: Element = match item {
            Value::String(s) => Widget::new("p").text(s.as_str()).into(),
            _ if item.get("content").is_some() => cx.render_ref(item.get("content")),
            _ => {
                let text = scalar::non_empty_string(cx.resolve(item.get("text")))
                    .unwrap_or_else(|| item.to_string());
                Widget::new("p").text(text).into()
            }
        };
        Element::from(Widget::new("div").class("p-3 border rounded-lg").child(body))
    });
    slot("div", "scroll-area")
        .class("h-72")
        .child(Widget::new("div").class("space-y-2 pr-4").children(rows))
        .into()
}

fn resizable(cx: &RenderCx<'_>) -> Element {
    let panels = items(cx, "panels");
    let mut group = slot("div", "resizable-panel-group")
        .attr(
            "data-panel-group-direction",
            raw_truthy_or(cx, "direction", "horizontal"),
        )
        .class("min-h-50 w-full rounded-lg border");
    for (i, panel) in panels.iter().enumerate() {
        let size = scalar::as_f64(panel.get("size"))
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(50.0);
        group = group.child(
            slot("div", "resizable-panel")
                .attr("data-size", number(size))
                .attr("style", format!("flex: {} 1 0px", number(size)))
                .child(
                    Widget::new("div")
                        .class("flex h-full items-center justify-center p-6")
                        .child(cx.render_ref(panel.get("child"))),
                ),
        );
        if i + 1 < panels.len() {
            group = group.child(slot("div", "resizable-handle").attr("role", "separator"));
        }
    }
    group.into()
}

fn sidebar_trigger() -> Widget {
    slot("button", "sidebar-trigger")
        .attr("type", "button")
        .child(Widget::new("span").class("sr-only").text("Toggle Sidebar"))
}

fn standalone_sidebar_trigger(_cx: &RenderCx<'_>) -> Element {
    sidebar_trigger().into()
}

/// Sidebar with header, content and footer regions, laid out next to a main area.
fn sidebar(cx: &RenderCx<'_>) -> Element {
    let region = |key: &str, part: &str| {
        cx.prop_str(key)
            .map(|id| slot("div", part).child(cx.render(id)))
    };
    let aside = slot("aside", "sidebar")
        .attr_opt("data-collapsible", scalar::non_empty_string(cx.prop("collapsible")))
        .child(region("header", "sidebar-header"))
        .child(
            slot("div", "sidebar-content")
                .child(cx.render_child("content"))
                .children(cx.render_children()),
        )
        .child(region("footer", "sidebar-footer"));
    slot("div", "sidebar-wrapper")
        .class("flex min-h-screen w-full")
        .child(aside)
        .child(Widget::new("main").class("flex-1 p-6").child(sidebar_trigger()))
        .into()
}
