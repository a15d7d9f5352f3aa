use super::{curated, items, leaf, number, raw_truthy_or, slot};
use crate::binding::scalar;
use crate::eval::children::ChildSlot;
use crate::eval::interpreter::RenderCx;
use crate::registry::Registry;
use crate::render::element::{Element, Widget};
use serde_json::Value;

const TAB_SLOTS: &[ChildSlot] = &[ChildSlot::Nested {
    list: "tabs",
    field: "content",
}];
const ITEM_SLOTS: &[ChildSlot] = &[ChildSlot::Nested {
    list: "items",
    field: "content",
}];
const DIALOG_SLOTS: &[ChildSlot] = &[
    ChildSlot::One("trigger"),
    ChildSlot::One("content"),
    ChildSlot::One("child"),
];
const OVERLAY_SLOTS: &[ChildSlot] = &[ChildSlot::One("trigger"), ChildSlot::One("content")];
const TRIGGER_SLOT: &[ChildSlot] = &[ChildSlot::One("trigger")];
const DRAWER_SLOTS: &[ChildSlot] = &[
    ChildSlot::One("trigger"),
    ChildSlot::One("child"),
    ChildSlot::One("footer"),
];
const SHEET_SLOTS: &[ChildSlot] = &[ChildSlot::One("trigger"), ChildSlot::One("child")];
const SLIDES: &[ChildSlot] = &[ChildSlot::Ids("items")];

pub(super) fn register(reg: &mut Registry) {
    curated(reg, "Tabs", tabs, TAB_SLOTS);
    curated(reg, "Accordion", accordion, ITEM_SLOTS);
    curated(reg, "Dialog", dialog, DIALOG_SLOTS);
    curated(reg, "Collapsible", collapsible, OVERLAY_SLOTS);
    curated(reg, "Tooltip", tooltip, OVERLAY_SLOTS);
    curated(reg, "Popover", popover, OVERLAY_SLOTS);
    curated(reg, "HoverCard", hover_card, OVERLAY_SLOTS);
    curated(reg, "DropdownMenu", dropdown_menu, TRIGGER_SLOT);
    curated(reg, "AlertDialog", alert_dialog, TRIGGER_SLOT);
    curated(reg, "Drawer", drawer, DRAWER_SLOTS);
    curated(reg, "Sheet", sheet, SHEET_SLOTS);
    curated(reg, "Carousel", carousel, SLIDES);
    curated(reg, "ContextMenu", context_menu, TRIGGER_SLOT);
    leaf(reg, "Menubar", menubar);
    leaf(reg, "NavigationMenu", navigation_menu);
    leaf(reg, "Command", command);
    leaf(reg, "Pagination", pagination);
}

fn tabs(cx: &RenderCx<'_>) -> Element {
    let tabs = items(cx, "tabs");
    let value_of = |i: usize| {
        scalar::non_empty_string(tabs[i].get("value")).unwrap_or_else(|| format!("tab-{i}"))
    };
    let active = cx
        .resolve_text("defaultValue")
        .or_else(|| tabs.first().and_then(|t| scalar::non_empty_string(t.get("value"))))
        .unwrap_or_else(|| "tab-0".to_owned());

    let triggers = (0..tabs.len()).map(|i| {
        let value = value_of(i);
        let label = scalar::non_empty_string(cx.resolve(tabs[i].get("label")))
            .unwrap_or_else(|| format!("Tab {}", i + 1));
        Element::from(
            slot("button", "tabs-trigger")
                .attr("role", "tab")
                .attr("aria-selected", value == active)
                .attr("data-value", value)
                .text(label),
        )
    });
    let panels = (0..tabs.len()).map(|i| {
        let value = value_of(i);
        Element::from(
            slot("div", "tabs-content")
                .attr("role", "tabpanel")
                .flag("hidden", value != active)
                .attr("data-value", value)
                .child(cx.render_ref(tabs[i].get("content"))),
        )
    });

    slot("div", "tabs")
        .attr("data-default-value", active.as_str())
        .child(
            slot("div", "tabs-list")
                .attr("role", "tablist")
                .children(triggers),
        )
        .children(panels)
        .into()
}

fn accordion(cx: &RenderCx<'_>) -> Element {
    let sections = items(cx, "items").iter().enumerate().map(|(i, item)| {
        let title = scalar::non_empty_string(cx.resolve(item.get("title")))
            .unwrap_or_else(|| format!("Item {}", i + 1));
        let text = scalar::non_empty_string(cx.resolve(item.get("text")));
        Element::from(
            slot("div", "accordion-item")
                .attr("data-value", format!("item-{i}"))
                .child(slot("button", "accordion-trigger").text(title))
                .child(
                    slot("div", "accordion-content")
                        .child(cx.render_ref(item.get("content")))
                        .child(text.map(|t| Widget::new("p").text(t))),
                ),
        )
    });
    slot("div", "accordion")
        .attr("data-type", raw_truthy_or(cx, "type", "single"))
        .children(sections)
        .into()
}

fn dialog(cx: &RenderCx<'_>) -> Element {
    let header = slot("div", "dialog-header")
        .child(cx.resolve_text("title").map(|t| slot("h2", "dialog-title").text(t)))
        .child(
            cx.resolve_text("description")
                .map(|d| slot("p", "dialog-description").text(d)),
        );
    slot("div", "dialog")
        .flag("data-open", cx.prop_flag("open"))
        .child(trigger(cx, "dialog-trigger"))
        .child(
            slot("div", "dialog-content")
                .attr("role", "dialog")
                .child(header)
                .child(cx.render_child("content"))
                .child(cx.render_child("child")),
        )
        .into()
}

fn trigger(cx: &RenderCx<'_>, part: &str) -> Option<Widget> {
    cx.prop_str("trigger")
        .map(|id| slot("div", part).child(cx.render(id)))
}

/// Trigger plus content, the shape shared by every hover/click overlay.
fn overlay(cx: &RenderCx<'_>, name: &str, content_role: Option<&str>) -> Element {
    slot("div", name)
        .child(trigger(cx, &format!("{name}-trigger")))
        .child(
            slot("div", &format!("{name}-content"))
                .attr_opt("role", content_role)
                .child(cx.render_child("content")),
        )
        .into()
}

fn collapsible(cx: &RenderCx<'_>) -> Element {
    overlay(cx, "collapsible", None)
}

fn tooltip(cx: &RenderCx<'_>) -> Element {
    overlay(cx, "tooltip", Some("tooltip"))
}

fn popover(cx: &RenderCx<'_>) -> Element {
    overlay(cx, "popover", Some("dialog"))
}

fn hover_card(cx: &RenderCx<'_>) -> Element {
    overlay(cx, "hover-card", None)
}

fn dropdown_menu(cx: &RenderCx<'_>) -> Element {
    let label = cx.resolve_text("label");
    let has_label = label.is_some();
    let entries = items(cx, "items").iter().map(|item| {
        let text = scalar::non_empty_string(cx.resolve(item.get("label")))
            .unwrap_or_else(|| scalar::display_string(Some(item)));
        Element::from(
            slot("div", "dropdown-menu-item")
                .attr("role", "menuitem")
                .on("click", cx.bind_action(item.get("action")))
                .text(text),
        )
    });
    slot("div", "dropdown-menu")
        .child(trigger(cx, "dropdown-menu-trigger"))
        .child(
            slot("div", "dropdown-menu-content")
                .attr("role", "menu")
                .child(label.map(|l| slot("div", "dropdown-menu-label").text(l)))
                .child(has_label.then(|| {
                    slot("div", "dropdown-menu-separator").attr("role", "separator")
                }))
                .children(entries),
        )
        .into()
}

/// Title and description header shared by the modal surfaces.
fn surface_header(cx: &RenderCx<'_>, name: &str) -> Widget {
    slot("div", &format!("{name}-header"))
        .child(slot("h2", &format!("{name}-title")).text(cx.resolve_string("title")))
        .child(slot("p", &format!("{name}-description")).text(cx.resolve_string("description")))
}

fn alert_dialog(cx: &RenderCx<'_>) -> Element {
    let label = |key: &str, default: &str| cx.resolve_text(key).unwrap_or_else(|| default.to_owned());
    let footer = slot("div", "alert-dialog-footer")
        .child(
            slot("button", "alert-dialog-cancel")
                .attr("type", "button")
                .text(label("cancelLabel", "Cancel")),
        )
        .child(
            slot("button", "alert-dialog-action")
                .attr("type", "button")
                .on("click", cx.bind_action(cx.prop("action")))
                .text(label("actionLabel", "Continue")),
        );
    slot("div", "alert-dialog")
        .child(trigger(cx, "alert-dialog-trigger"))
        .child(
            slot("div", "alert-dialog-content")
                .attr("role", "alertdialog")
                .child(surface_header(cx, "alert-dialog"))
                .child(footer),
        )
        .into()
}

fn drawer(cx: &RenderCx<'_>) -> Element {
    slot("div", "drawer")
        .child(trigger(cx, "drawer-trigger"))
        .child(
            slot("div", "drawer-content")
                .attr("role", "dialog")
                .child(surface_header(cx, "drawer"))
                .child(
                    Widget::new("div")
                        .class("p-4 overflow-y-auto")
                        .child(cx.render_child("child")),
                )
                .child(
                    slot("div", "drawer-footer")
                        .child(cx.render_child("footer"))
                        .child(
                            slot("button", "drawer-close")
                                .attr("type", "button")
                                .attr("data-variant", "outline")
                                .text("Close"),
                        ),
                ),
        )
        .into()
}

fn sheet(cx: &RenderCx<'_>) -> Element {
    slot("div", "sheet")
        .child(trigger(cx, "sheet-trigger"))
        .child(
            slot("div", "sheet-content")
                .attr("role", "dialog")
                .attr("data-side", raw_truthy_or(cx, "side", "right"))
                .child(surface_header(cx, "sheet"))
                .child(Widget::new("div").class("py-4").child(cx.render_child("child"))),
        )
        .into()
}

fn carousel(cx: &RenderCx<'_>) -> Element {
    let slides = cx.render_slot(SLIDES[0]).into_iter().map(|slide| {
        Element::from(
            slot("div", "carousel-item")
                .attr("role", "group")
                .attr("aria-roledescription", "slide")
                .child(slide),
        )
    });
    let nav = |part: &str, label: &str| {
        slot("button", part)
            .attr("type", "button")
            .child(Widget::new("span").class("sr-only").text(label))
    };
    slot("div", "carousel")
        .attr("role", "region")
        .attr("aria-roledescription", "carousel")
        .class("w-full max-w-xs mx-auto")
        .child(slot("div", "carousel-content").children(slides))
        .child(nav("carousel-previous", "Previous slide"))
        .child(nav("carousel-next", "Next slide"))
        .into()
}

/// Menu entries; `{ "separator": true }` items become separators.
fn menu_entries<'a>(cx: &RenderCx<'a>, entries: &'a [Value], part: &str) -> Vec<Element> {
    entries
        .iter()
        .map(|item| {
            if scalar::is_truthy(item.get("separator")) {
                return Element::from(
                    slot("div", &format!("{part}-separator")).attr("role", "separator"),
                );
            }
            Element::from(
                slot("div", &format!("{part}-item"))
                    .attr("role", "menuitem")
                    .on("click", cx.bind_action(item.get("action")))
                    .text(scalar::display_string(cx.resolve(item.get("label")))),
            )
        })
        .collect()
}

fn context_menu(cx: &RenderCx<'_>) -> Element {
    let area = slot("div", "context-menu-trigger")
        .class("flex w-full items-center justify-center rounded-md border border-dashed text-sm");
    let area = match cx.prop_str("trigger") {
        Some(id) => area.child(cx.render(id)),
        None => area.text("Right click here"),
    };
    slot("div", "context-menu")
        .child(area)
        .child(
            slot("div", "context-menu-content")
                .attr("role", "menu")
                .children(menu_entries(cx, items(cx, "items"), "context-menu")),
        )
        .into()
}

fn menubar(cx: &RenderCx<'_>) -> Element {
    let menus = items(cx, "items").iter().map(|menu| {
        let entries = menu
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Element::from(
            slot("div", "menubar-menu")
                .child(
                    slot("button", "menubar-trigger")
                        .attr("type", "button")
                        .text(scalar::display_string(cx.resolve(menu.get("label")))),
                )
                .child(
                    slot("div", "menubar-content")
                        .attr("role", "menu")
                        .children(menu_entries(cx, entries, "menubar")),
                ),
        )
    });
    slot("div", "menubar").attr("role", "menubar").children(menus).into()
}

/// Items with `content` open a panel; the rest are plain links.
fn navigation_menu(cx: &RenderCx<'_>) -> Element {
    let entries = items(cx, "items").iter().map(|item| {
        let label = scalar::display_string(cx.resolve(item.get("label")));
        let body = match scalar::non_empty_string(cx.resolve(item.get("content"))) {
            Some(content) => vec![
                Element::from(
                    slot("button", "navigation-menu-trigger")
                        .attr("type", "button")
                        .text(label),
                ),
                Element::from(
                    slot("div", "navigation-menu-content")
                        .child(Widget::new("div").class("p-4 w-100").text(content)),
                ),
            ],
            None => vec![Element::from(
                slot("a", "navigation-menu-link")
                    .attr(
                        "href",
                        scalar::non_empty_string(item.get("href"))
                            .unwrap_or_else(|| "#".to_owned()),
                    )
                    .text(label),
            )],
        };
        Element::from(slot("li", "navigation-menu-item").children(body))
    });
    slot("nav", "navigation-menu")
        .child(slot("ul", "navigation-menu-list").children(entries))
        .into()
}

fn command(cx: &RenderCx<'_>) -> Element {
    let groups = items(cx, "groups");
    let mut list = slot("div", "command-list")
        .attr("role", "listbox")
        .child(slot("div", "command-empty").text("No results found."));
    for (i, group) in groups.iter().enumerate() {
        let entries = group
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|item| {
                let text = scalar::non_empty_string(cx.resolve(item.get("label")))
                    .unwrap_or_else(|| scalar::display_string(Some(item)));
                Element::from(
                    slot("div", "command-item")
                        .attr("role", "option")
                        .on("click", cx.bind_action(item.get("action")))
                        .text(text),
                )
            });
        list = list.child(
            slot("div", "command-group")
                .attr("role", "group")
                .attr_opt("data-heading", scalar::non_empty_string(group.get("heading")))
                .children(entries),
        );
        if i + 1 < groups.len() {
            list = list.child(slot("div", "command-separator").attr("role", "separator"));
        }
    }
    let placeholder = cx
        .resolve_text("placeholder")
        .unwrap_or_else(|| "Type a command...".to_owned());
    slot("div", "command")
        .class("rounded-lg border shadow-md")
        .child(
            slot("input", "command-input")
                .attr("type", "text")
                .attr("placeholder", placeholder),
        )
        .child(list)
        .into()
}

/// Previous, current page, next; an ellipsis when more pages follow.
fn pagination(cx: &RenderCx<'_>) -> Element {
    let total = cx.resolve_f64("total").filter(|t| t.is_finite() && *t >= 1.0).map(f64::floor);
    let current = cx
        .resolve_f64("current")
        .filter(|c| c.is_finite() && *c >= 1.0)
        .map_or(1.0, f64::floor);
    let current = total.map_or(current, |t| current.min(t));
    let change = |part: &str, page: f64, enabled: bool, label: &str| {
        slot("a", part)
            .attr("href", "#")
            .attr("data-page", number(page))
            .flag("aria-disabled", !enabled)
            .on("click", enabled.then(|| cx.bind_action(cx.prop("onPageChange"))).flatten())
            .text(label)
    };
    let more = total.is_none_or(|t| current < t);
    let item = |w: Widget| Element::from(slot("li", "pagination-item").child(w));

    let mut entries = vec![
        item(change("pagination-previous", current - 1.0, current > 1.0, "Previous")),
        item(
            slot("a", "pagination-link")
                .attr("href", "#")
                .attr("aria-current", "page")
                .flag("data-active", true)
                .text(scalar::display_string(Some(&number(current)))),
        ),
    ];
    if more {
        entries.push(item(
            slot("span", "pagination-ellipsis")
                .attr("aria-hidden", "true")
                .text("..."),
        ));
    }
    entries.push(item(change("pagination-next", current + 1.0, more, "Next")));

    slot("nav", "pagination")
        .attr("role", "navigation")
        .attr("aria-label", "pagination")
        .attr_opt("data-total", total.map(number))
        .child(slot("ul", "pagination-content").children(entries))
        .into()
}
