use super::{curated, items, labelled, leaf, number, option_pair, raw_truthy_or, slot};
use crate::binding::scalar;
use crate::eval::children::ChildSlot;
use crate::eval::interpreter::RenderCx;
use crate::registry::Registry;
use crate::render::element::{Element, Widget};

const ONE_CHILD: &[ChildSlot] = &[ChildSlot::One("child")];
const CHILD_LIST: &[ChildSlot] = &[ChildSlot::ExplicitList("children")];
const TOGGLE_ITEMS: &[ChildSlot] = &[ChildSlot::Nested {
    list: "items",
    field: "child",
}];

/// Upper bound on one-time-code cells.
const MAX_OTP_SLOTS: usize = 32;

pub(super) fn register(reg: &mut Registry) {
    curated(reg, "Button", button, ONE_CHILD);
    leaf(reg, "TextField", text_field);
    leaf(reg, "TextArea", text_area);
    leaf(reg, "DateInput", date_input);
    leaf(reg, "SelectInput", select_input);
    leaf(reg, "CheckBox", check_box);
    leaf(reg, "RadioInput", radio_input);
    leaf(reg, "Toggle", toggle);
    leaf(reg, "Slider", slider);
    curated(reg, "Field", field, ONE_CHILD);
    curated(reg, "InputGroup", input_group, CHILD_LIST);
    curated(reg, "InputGroupAddon", input_group_addon, ONE_CHILD);
    leaf(reg, "InputOTP", input_otp);
    curated(reg, "ToggleGroup", toggle_group, TOGGLE_ITEMS);
    curated(reg, "ButtonGroup", button_group, CHILD_LIST);
}

fn button(cx: &RenderCx<'_>) -> Element {
    let w = slot("button", "button")
        .attr("type", "button")
        .attr("data-variant", raw_truthy_or(cx, "variant", "default"))
        .attr("data-size", raw_truthy_or(cx, "size", "default"))
        .flag("disabled", cx.prop_flag("disabled"))
        .on("click", cx.bind_action(cx.prop("action")));
    let w = match cx.prop_str("child").filter(|id| !id.is_empty()) {
        Some(id) => w.child(cx.render(id)),
        None => w.text(cx.resolve_string("label")),
    };
    w.into()
}

fn text_input(cx: &RenderCx<'_>, input_type: String) -> Element {
    let input = slot("input", "input")
        .attr("type", input_type)
        .attr_opt("placeholder", cx.resolve_text("placeholder"))
        .attr_opt("value", cx.resolve_prop("value").map(|v| scalar::display_string(Some(v))))
        .flag("disabled", cx.prop_flag("disabled"))
        .class("w-full");
    labelled(cx.resolve_text("label"), input)
}

fn text_field(cx: &RenderCx<'_>) -> Element {
    text_input(cx, raw_truthy_or(cx, "type", "text"))
}

fn date_input(cx: &RenderCx<'_>) -> Element {
    text_input(cx, "date".to_owned())
}

fn text_area(cx: &RenderCx<'_>) -> Element {
    let rows = cx.prop_f64("rows").filter(|r| *r > 0.0).unwrap_or(4.0);
    let area = slot("textarea", "textarea")
        .attr_opt("placeholder", cx.resolve_text("placeholder"))
        .attr("rows", number(rows))
        .flag("disabled", cx.prop_flag("disabled"))
        .class("w-full")
        .text(cx.resolve_string("value"));
    labelled(cx.resolve_text("label"), area)
}

fn select_input(cx: &RenderCx<'_>) -> Element {
    let selected = cx.resolve_text("value");
    let placeholder = cx
        .resolve_text("placeholder")
        .unwrap_or_else(|| "Select...".to_owned());
    let options = items(cx, "options").iter().map(|opt| {
        let (value, label) = option_pair(opt);
        let is_selected = selected.as_deref() == Some(value.as_str());
        Element::from(
            Widget::new("option")
                .attr("value", value)
                .flag("selected", is_selected)
                .text(label),
        )
    });
    let select = slot("select", "select")
        .flag("disabled", cx.prop_flag("disabled"))
        .class("w-full")
        .child(
            Widget::new("option")
                .attr("value", "")
                .flag("disabled", true)
                .flag("selected", selected.is_none())
                .text(placeholder),
        )
        .children(options);
    labelled(cx.resolve_text("label"), select)
}

fn check_box(cx: &RenderCx<'_>) -> Element {
    let id = cx.prop_str("id");
    Widget::new("div")
        .class("flex items-center space-x-2")
        .child(
            slot("input", "checkbox")
                .attr("type", "checkbox")
                .attr_opt("id", id)
                .flag("checked", cx.resolve_flag("checked"))
                .flag("disabled", cx.prop_flag("disabled")),
        )
        .child(
            cx.resolve_text("label")
                .map(|l| Widget::new("label").attr_opt("for", id).text(l)),
        )
        .into()
}

fn radio_input(cx: &RenderCx<'_>) -> Element {
    let selected = cx.resolve_text("value");
    let group = cx.prop_str("name");
    let radios = items(cx, "options").iter().enumerate().map(|(i, opt)| {
        let (value, label) = option_pair(opt);
        let id = format!("radio-{i}");
        let checked = selected.as_deref() == Some(value.as_str());
        Element::from(
            Widget::new("div")
                .class("flex items-center space-x-2")
                .child(
                    slot("input", "radio-group-item")
                        .attr("type", "radio")
                        .attr("id", id.as_str())
                        .attr_opt("name", group)
                        .attr("value", value)
                        .flag("checked", checked),
                )
                .child(Widget::new("label").attr("for", id).text(label)),
        )
    });
    slot("div", "radio-group")
        .attr("role", "radiogroup")
        .children(radios)
        .into()
}

fn toggle(cx: &RenderCx<'_>) -> Element {
    let checked = cx.resolve_flag("checked");
    Widget::new("div")
        .class("flex items-center space-x-2")
        .child(
            slot("button", "switch")
                .attr("type", "button")
                .attr("role", "switch")
                .attr("aria-checked", checked)
                .attr("data-state", if checked { "checked" } else { "unchecked" })
                .flag("disabled", cx.prop_flag("disabled")),
        )
        .child(cx.resolve_text("label").map(|l| Widget::new("label").text(l)))
        .into()
}

fn slider(cx: &RenderCx<'_>) -> Element {
    let bound = |key: &str, default: f64| cx.prop_f64(key).unwrap_or(default);
    let input = slot("input", "slider")
        .attr("type", "range")
        .attr("value", number(cx.resolve_f64("value").unwrap_or(50.0)))
        .attr("min", number(bound("min", 0.0)))
        .attr("max", number(bound("max", 100.0)))
        .attr("step", number(bound("step", 1.0)));
    labelled(cx.resolve_text("label"), input)
}

fn field(cx: &RenderCx<'_>) -> Element {
    slot("div", "field")
        .attr("data-orientation", raw_truthy_or(cx, "orientation", "vertical"))
        .child(
            cx.resolve_text("label")
                .map(|l| slot("label", "field-label").text(l)),
        )
        .child(
            slot("div", "field-content")
                .child(cx.render_child("child"))
                .child(
                    cx.resolve_text("description")
                        .map(|d| slot("p", "field-description").text(d)),
                )
                .child(
                    cx.resolve_text("error")
                        .map(|e| slot("p", "field-error").attr("role", "alert").text(e)),
                ),
        )
        .into()
}

fn input_group(cx: &RenderCx<'_>) -> Element {
    slot("div", "input-group")
        .attr("role", "group")
        .class("relative flex w-full items-center rounded-md border")
        .children(cx.render_children())
        .into()
}

fn input_group_addon(cx: &RenderCx<'_>) -> Element {
    slot("div", "input-group-addon")
        .attr("role", "group")
        .attr("data-align", raw_truthy_or(cx, "align", "inline-start"))
        .child(cx.render_child("child"))
        .into()
}

/// One cell per code character; `maxLength` defaults to 6.
fn input_otp(cx: &RenderCx<'_>) -> Element {
    let max_len = cx
        .prop_f64("maxLength")
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map_or(6, |n| (n as usize).min(MAX_OTP_SLOTS));
    let value: Vec<char> = cx.resolve_string("value").chars().collect();
    let cells = (0..max_len).map(|i| {
        let cell = slot("div", "input-otp-slot")
            .attr("data-index", i)
            .flag("data-active", i == value.len());
        let cell = match value.get(i) {
            Some(c) => cell.text(c.to_string()),
            None => cell,
        };
        Element::from(cell)
    });
    slot("div", "input-otp")
        .attr("data-max-length", max_len)
        .attr_opt("data-pattern", cx.prop_str("pattern"))
        .on("change", cx.bind_action(cx.prop("onChange")))
        .child(slot("div", "input-otp-group").children(cells))
        .into()
}

fn toggle_group(cx: &RenderCx<'_>) -> Element {
    let buttons = items(cx, "items").iter().map(|item| {
        let w = slot("button", "toggle-group-item")
            .attr("type", "button")
            .attr_opt("data-value", scalar::non_empty_string(item.get("value")))
            .on("click", cx.bind_action(item.get("action")));
        let w = match scalar::non_empty_string(cx.resolve(item.get("label"))) {
            Some(label) => w.text(label),
            None => w.child(cx.render_ref(item.get("child"))),
        };
        Element::from(w)
    });
    slot("div", "toggle-group")
        .attr("role", "group")
        .attr("data-type", raw_truthy_or(cx, "type", "multiple"))
        .attr_opt("data-variant", scalar::non_empty_string(cx.prop("variant")))
        .attr_opt("data-size", scalar::non_empty_string(cx.prop("size")))
        .children(buttons)
        .into()
}

fn button_group(cx: &RenderCx<'_>) -> Element {
    slot("div", "button-group")
        .attr("role", "group")
        .attr("data-orientation", raw_truthy_or(cx, "orientation", "horizontal"))
        .children(cx.render_children())
        .into()
}
