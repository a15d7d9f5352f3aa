use super::{curated, extra_class, items, leaf, number, raw_truthy_or, slot};
use crate::binding::scalar;
use crate::eval::children::ChildSlot;
use crate::eval::interpreter::RenderCx;
use crate::registry::Registry;
use crate::render::element::{Element, Widget};
use serde_json::Value;

pub(super) fn register(reg: &mut Registry) {
    leaf(reg, "Text", text);
    leaf(reg, "Image", image);
    leaf(reg, "Icon", icon);
    leaf(reg, "Badge", badge);
    leaf(reg, "Divider", divider);
    leaf(reg, "Avatar", avatar);
    leaf(reg, "Alert", alert);
    leaf(reg, "Progress", progress);
    leaf(reg, "Skeleton", skeleton);
    leaf(reg, "Link", link);
    leaf(reg, "Table", table);
    leaf(reg, "ChipList", chip_list);
    leaf(reg, "Breadcrumb", breadcrumb);
    curated(reg, "Empty", empty, EMPTY_SLOTS);
    leaf(reg, "Chart", chart);
}

const EMPTY_SLOTS: &[ChildSlot] = &[ChildSlot::One("icon"), ChildSlot::One("child")];

/// Tag and typography classes for a `usageHint`.
fn typography(hint: &str) -> (&'static str, &'static str) {
    match hint {
        "h1" => ("h1", "text-4xl font-bold tracking-tight"),
        "h2" => ("h2", "text-3xl font-semibold tracking-tight"),
        "h3" => ("h3", "text-2xl font-semibold"),
        "h4" => ("h4", "text-xl font-semibold"),
        "h5" => ("h5", "text-lg font-medium"),
        "h6" => ("h6", "text-base font-medium"),
        "label" => ("span", "text-sm font-medium"),
        "caption" => ("span", "text-sm text-muted-foreground"),
        _ => ("p", "text-base"),
    }
}

fn text(cx: &RenderCx<'_>) -> Element {
    let (tag, class) = typography(cx.prop_str("usageHint").unwrap_or("body"));
    Widget::new(tag)
        .class(format!("{class} {}", extra_class(cx)))
        .text(cx.resolve_string("text"))
        .into()
}

fn image(cx: &RenderCx<'_>) -> Element {
    Widget::new("img")
        .attr_opt("src", cx.resolve_text("src"))
        .attr("alt", cx.resolve_text("alt").unwrap_or_default())
        .attr_opt("width", cx.prop("width").cloned())
        .attr_opt("height", cx.prop("height").cloned())
        .class("rounded-md object-cover")
        .into()
}

fn icon(cx: &RenderCx<'_>) -> Element {
    let size = match cx.prop_str("size") {
        Some("lg") => "text-2xl",
        Some("sm") => "text-sm",
        _ => "text-base",
    };
    let name = cx.resolve_string("name");
    Widget::new("span")
        .class(format!("inline-flex items-center justify-center {size}"))
        .attr("data-icon", name.as_str())
        .attr_opt("style", cx.prop_str("color").map(|c| format!("color: {c}")))
        .text(name)
        .into()
}

fn badge(cx: &RenderCx<'_>) -> Element {
    slot("span", "badge")
        .attr("data-variant", raw_truthy_or(cx, "variant", "default"))
        .text(cx.resolve_string("text"))
        .into()
}

fn divider(cx: &RenderCx<'_>) -> Element {
    slot("div", "separator")
        .attr("role", "separator")
        .attr("aria-orientation", raw_truthy_or(cx, "orientation", "horizontal"))
        .class("my-4")
        .into()
}

fn avatar(cx: &RenderCx<'_>) -> Element {
    let image = cx.resolve_text("src").map(|src| {
        slot("img", "avatar-image")
            .attr("src", src)
            .attr_opt("alt", cx.resolve_text("alt"))
    });
    let fallback = cx.resolve_text("fallback").unwrap_or_else(|| "?".to_owned());
    slot("span", "avatar")
        .child(image)
        .child(slot("span", "avatar-fallback").text(fallback))
        .into()
}

fn alert(cx: &RenderCx<'_>) -> Element {
    slot("div", "alert")
        .attr("role", "alert")
        .attr("data-variant", raw_truthy_or(cx, "variant", "default"))
        .child(cx.resolve_text("title").map(|t| slot("div", "alert-title").text(t)))
        .child(
            cx.resolve_text("description")
                .map(|d| slot("div", "alert-description").text(d)),
        )
        .into()
}

fn progress(cx: &RenderCx<'_>) -> Element {
    let value = cx.resolve_f64("value").unwrap_or(0.0).clamp(0.0, 100.0);
    slot("div", "progress")
        .attr("role", "progressbar")
        .attr("aria-valuemin", 0)
        .attr("aria-valuemax", 100)
        .attr("aria-valuenow", number(value))
        .child(
            slot("div", "progress-indicator")
                .attr("style", format!("width: {}%", number(value))),
        )
        .into()
}

fn skeleton(cx: &RenderCx<'_>) -> Element {
    let height = raw_truthy_or(cx, "height", "4");
    let width = raw_truthy_or(cx, "width", "full");
    slot("div", "skeleton")
        .class(format!(
            "animate-pulse rounded-md bg-accent h-{height} w-{width} {}",
            extra_class(cx)
        ))
        .into()
}

fn link(cx: &RenderCx<'_>) -> Element {
    Widget::new("a")
        .attr("href", cx.resolve_text("href").unwrap_or_else(|| "#".to_owned()))
        .attr("target", raw_truthy_or(cx, "target", "_self"))
        .class("text-primary underline-offset-4 hover:underline")
        .text(cx.resolve_string("text"))
        .into()
}

fn table(cx: &RenderCx<'_>) -> Element {
    let columns = items(cx, "columns");
    let head = Widget::new("tr").children(columns.iter().map(|col| {
        let header = scalar::non_empty_string(cx.resolve(col.get("header")))
            .unwrap_or_else(|| scalar::display_string(Some(col)));
        Element::from(Widget::new("th").text(header))
    }));
    let body = items(cx, "rows").iter().map(|row| {
        let cells = columns.iter().enumerate().map(|(i, col)| {
            let by_key = col
                .get("key")
                .and_then(Value::as_str)
                .and_then(|k| row.get(k));
            let cell = scalar::non_empty_string(by_key)
                .or_else(|| scalar::non_empty_string(row.get(i)))
                .unwrap_or_default();
            Element::from(Widget::new("td").text(cell))
        });
        Element::from(Widget::new("tr").children(cells))
    });

    slot("table", "table")
        .child(cx.resolve_text("caption").map(|c| Widget::new("caption").text(c)))
        .child(Widget::new("thead").child(head))
        .child(Widget::new("tbody").children(body))
        .into()
}

fn chip_list(cx: &RenderCx<'_>) -> Element {
    let chips = items(cx, "chips").iter().map(|chip| {
        let variant = scalar::non_empty_string(chip.get("variant"))
            .unwrap_or_else(|| "secondary".to_owned());
        let label = scalar::non_empty_string(cx.resolve(chip.get("text")))
            .unwrap_or_else(|| scalar::display_string(Some(chip)));
        Element::from(
            slot("span", "badge")
                .attr("data-variant", variant)
                .text(label),
        )
    });
    Widget::new("div")
        .class("flex flex-wrap gap-2")
        .children(chips)
        .into()
}

fn breadcrumb(cx: &RenderCx<'_>) -> Element {
    let entries = items(cx, "items");
    let mut list = slot("ol", "breadcrumb-list");
    for (i, item) in entries.iter().enumerate() {
        let label = cx.resolve(item.get("label"));
        let crumb = if i + 1 == entries.len() {
            slot("span", "breadcrumb-page")
                .attr("aria-current", "page")
                .text(scalar::display_string(label))
        } else {
            slot("a", "breadcrumb-link")
                .attr(
                    "href",
                    scalar::non_empty_string(item.get("href")).unwrap_or_else(|| "#".to_owned()),
                )
                .text(scalar::display_string(label))
        };
        list = list.child(slot("li", "breadcrumb-item").child(crumb));
        if i + 1 < entries.len() {
            list = list.child(
                slot("li", "breadcrumb-separator")
                    .attr("aria-hidden", "true")
                    .text("/"),
            );
        }
    }
    Widget::new("nav")
        .attr("aria-label", "breadcrumb")
        .child(list)
        .into()
}

/// Empty-state panel: icon, title and description, then optional content below.
fn empty(cx: &RenderCx<'_>) -> Element {
    let header = slot("div", "empty-header")
        .child(
            slot("div", "empty-media")
                .attr("data-variant", "icon")
                .child(cx.render_child("icon")),
        )
        .child(cx.resolve_text("title").map(|t| slot("div", "empty-title").text(t)))
        .child(
            cx.resolve_text("description")
                .map(|d| slot("p", "empty-description").text(d)),
        );
    let content = cx
        .prop_str("child")
        .map(|id| slot("div", "empty-content").child(cx.render(id)));
    slot("div", "empty").child(header).child(content).into()
}

fn chart(cx: &RenderCx<'_>) -> Element {
    let title = cx.resolve_text("title");
    let description = cx.resolve_text("description");
    let header = (title.is_some() || description.is_some()).then(|| {
        Widget::new("div")
            .class("mb-4")
            .child(title.map(|t| Widget::new("h3").class("text-lg font-medium").text(t)))
            .child(
                description
                    .map(|d| Widget::new("p").class("text-sm text-muted-foreground").text(d)),
            )
    });
    let kind = raw_truthy_or(cx, "type", "Data Visualization");
    // Inline arrays are literal; anything else may be a binding to one.
    let points = match cx.prop("data") {
        Some(Value::Array(rows)) => Some(rows.len()),
        raw => cx.resolve(raw).and_then(Value::as_array).map(Vec::len),
    };
    let container = slot("div", "chart")
        .attr("data-chart", kind.as_str())
        .attr_opt("data-points", points)
        .class(format!(
            "aspect-video w-full h-[{}]",
            raw_truthy_or(cx, "height", "300px")
        ))
        .child(
            Widget::new("div")
                .class("flex h-full items-center justify-center border-2 border-dashed rounded-lg bg-muted/50")
                .child(
                    Widget::new("span")
                        .class("text-sm text-muted-foreground")
                        .text(format!("Chart: {kind}")),
                ),
        );
    Widget::new("div")
        .class("w-full")
        .child(header)
        .child(container)
        .into()
}
