use serde_json::Value;

/// Where a component type keeps the ids of nested nodes in its props.
///
/// The graph itself has no children field; each renderer declares its own slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSlot {
    /// `props[key] = "<id>"`
    One(&'static str),
    /// `props[key] = { "explicitList": ["<id>", ...] }`
    ExplicitList(&'static str),
    /// `props[key] = ["<id>", ...]`
    Ids(&'static str),
    /// `props[list][i][field] = "<id>"`
    Nested {
        /// Array prop holding item objects.
        list: &'static str,
        /// Field of each item holding an id.
        field: &'static str,
    },
}

/// Slots assumed for any renderer that declares none: `child` and `children.explicitList`.
pub const CONVENTIONAL_SLOTS: &[ChildSlot] =
    &[ChildSlot::One("child"), ChildSlot::ExplicitList("children")];

impl ChildSlot {
    /// Ids referenced through this slot, in order. Non-string entries are skipped.
    pub fn ids<'p>(self, props: &'p Value) -> Vec<&'p str> {
        match self {
            Self::One(key) => props.get(key).and_then(Value::as_str).into_iter().collect(),
            Self::ExplicitList(key) => explicit_list(props.get(key)),
            Self::Ids(key) => str_items(props.get(key)),
            Self::Nested { list, field } => props
                .get(list)
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.get(field).and_then(Value::as_str))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// All ids referenced through `slots`, in slot order.
pub fn child_ids<'p>(slots: &[ChildSlot], props: &'p Value) -> Vec<&'p str> {
    slots.iter().flat_map(|s| s.ids(props)).collect()
}

/// Ids of a `{ "explicitList": [...] }` reference.
pub fn explicit_list(raw: Option<&Value>) -> Vec<&str> {
    str_items(raw.and_then(|v| v.get("explicitList")))
}

fn str_items(raw: Option<&Value>) -> Vec<&str> {
    raw.and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/children.rs"]
mod tests;
