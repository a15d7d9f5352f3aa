use serde::Serialize;

/// Prompt-facing description of one curated component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Type name as it appears in a node's `component` mapping.
    pub name: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Props the renderer reads.
    pub props: &'static [&'static str],
}

const fn entry(
    name: &'static str,
    description: &'static str,
    props: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        name,
        description,
        props,
    }
}

/// Every curated type of the standard registry, grouped by family.
pub const CATALOG: &[CatalogEntry] = &[
    // layout
    entry(
        "Column",
        "Vertical flex container",
        &["gap", "children", "align", "justify", "padding", "width", "height", "className"],
    ),
    entry(
        "Row",
        "Horizontal flex container",
        &["gap", "children", "align", "justify", "wrap", "width", "height", "className"],
    ),
    entry(
        "Card",
        "Card container with optional title, description and footer",
        &["title", "description", "child", "children", "footer", "width", "className"],
    ),
    entry("Section", "Semantic section wrapper", &["child", "padding", "background"]),
    entry(
        "AspectRatio",
        "Content held at a fixed aspect ratio",
        &["ratio", "child"],
    ),
    entry(
        "ScrollArea",
        "Scrollable container",
        &["child", "children", "className", "innerClassName"],
    ),
    entry("ListView", "Scrollable list of items", &["items"]),
    entry(
        "Resizable",
        "Panels laid out side by side or stacked, each holding one child",
        &["direction", "panels"],
    ),
    entry(
        "Sidebar",
        "Application sidebar with header, content and footer regions",
        &["header", "content", "children", "footer", "collapsible"],
    ),
    entry("SidebarTrigger", "Button that toggles the sidebar", &[]),
    // display
    entry("Text", "Text and headings", &["text", "usageHint", "className"]),
    entry("Image", "Image display", &["src", "alt", "width", "height"]),
    entry("Icon", "Icon glyph", &["name", "size", "color"]),
    entry("Badge", "Small status label", &["text", "variant"]),
    entry("Divider", "Visual separator line", &["orientation"]),
    entry(
        "Avatar",
        "User image with a text fallback",
        &["src", "fallback", "alt"],
    ),
    entry(
        "Alert",
        "Callout for user attention",
        &["title", "description", "variant"],
    ),
    entry("Progress", "Completion indicator from 0 to 100", &["value"]),
    entry(
        "Skeleton",
        "Loading placeholder",
        &["width", "height", "className"],
    ),
    entry("Link", "Navigation link", &["text", "href", "target"]),
    entry("Table", "Data table", &["columns", "rows", "caption"]),
    entry("ChipList", "Row of chips or tags", &["chips"]),
    entry("Breadcrumb", "Path to the current page", &["items"]),
    entry(
        "Empty",
        "Placeholder for empty states",
        &["title", "description", "icon", "child"],
    ),
    entry(
        "Chart",
        "Chart frame with title and description",
        &["type", "data", "height", "title", "description"],
    ),
    // input
    entry(
        "Button",
        "Clickable button",
        &["label", "action", "variant", "size", "disabled", "child"],
    ),
    entry(
        "TextField",
        "Single-line text input",
        &["placeholder", "value", "type", "disabled", "label"],
    ),
    entry(
        "TextArea",
        "Multi-line text input",
        &["placeholder", "value", "rows", "disabled", "label"],
    ),
    entry(
        "DateInput",
        "Date picker",
        &["value", "placeholder", "disabled", "label"],
    ),
    entry(
        "SelectInput",
        "Dropdown selection",
        &["options", "value", "placeholder", "disabled", "label"],
    ),
    entry("CheckBox", "Boolean checkbox", &["checked", "label", "disabled", "id"]),
    entry("RadioInput", "Radio button group", &["options", "value", "name"]),
    entry("Toggle", "On/off switch", &["checked", "label", "disabled"]),
    entry(
        "Slider",
        "Range slider",
        &["value", "min", "max", "step", "label"],
    ),
    entry(
        "Field",
        "Form field wrapper with label, description and error",
        &["label", "description", "error", "child", "orientation"],
    ),
    entry(
        "InputGroup",
        "Inputs and addons grouped in one frame",
        &["children"],
    ),
    entry("InputGroupAddon", "Addon inside an InputGroup", &["child", "align"]),
    entry(
        "InputOTP",
        "One-time password input, one cell per character",
        &["value", "maxLength", "pattern", "onChange"],
    ),
    entry(
        "ToggleGroup",
        "Set of two-state buttons",
        &["type", "variant", "size", "items"],
    ),
    entry(
        "ButtonGroup",
        "Group of related buttons",
        &["children", "orientation"],
    ),
    // disclosure
    entry("Tabs", "Tabbed panels", &["tabs", "defaultValue"]),
    entry("Accordion", "Expandable sections", &["items", "type"]),
    entry(
        "Dialog",
        "Modal dialog",
        &["title", "description", "trigger", "content", "child", "open"],
    ),
    entry(
        "Collapsible",
        "Section that expands and collapses",
        &["trigger", "content"],
    ),
    entry("Tooltip", "Hint shown on hover or focus", &["trigger", "content"]),
    entry("Popover", "Rich content opened from a trigger", &["trigger", "content"]),
    entry("HoverCard", "Card shown on hover", &["trigger", "content"]),
    entry(
        "DropdownMenu",
        "Menu of actions opened from a trigger",
        &["trigger", "label", "items"],
    ),
    entry(
        "AlertDialog",
        "Modal that interrupts the user and expects a response",
        &["trigger", "title", "description", "actionLabel", "cancelLabel", "action"],
    ),
    entry(
        "Drawer",
        "Panel that slides in from the bottom edge",
        &["trigger", "title", "description", "child", "footer"],
    ),
    entry(
        "Sheet",
        "Side panel that complements the main screen",
        &["trigger", "title", "description", "child", "side"],
    ),
    entry("Carousel", "Slideshow cycling through components", &["items"]),
    entry(
        "ContextMenu",
        "Menu opened by right-clicking an area",
        &["trigger", "items"],
    ),
    entry("Menubar", "Persistent row of desktop-style menus", &["items"]),
    entry(
        "NavigationMenu",
        "Site navigation links, some opening a panel",
        &["items"],
    ),
    entry("Command", "Searchable command menu", &["placeholder", "groups"]),
    entry(
        "Pagination",
        "Previous and next page navigation",
        &["total", "current", "onPageChange"],
    ),
];

/// Look up a curated type's entry.
pub fn catalog_entry(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name == name)
}

/// `- **Type**: description` lines, one per entry, for prompt construction.
pub fn catalog_for_prompt() -> String {
    CATALOG
        .iter()
        .map(|e| format!("- **{}**: {}", e.name, e.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/meta.rs"]
mod tests;
