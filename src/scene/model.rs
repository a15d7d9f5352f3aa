use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded `component` mapping of a node.
///
/// On the wire a node carries `{"component": {"<Type>": <props>}}`. The single-key object is
/// decoded once into this enum so that dispatch never re-derives "first key of an object".
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// A type tag with its raw props.
    Typed {
        /// Type name used for registry dispatch.
        type_name: String,
        /// Raw props; usually an object, kept as-is otherwise.
        props: Value,
    },
    /// Zero entries (or a `null`/missing `component`). Renders as a diagnostic.
    Empty,
}

impl Component {
    /// Type name, if any.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Typed { type_name, .. } => Some(type_name),
            Self::Empty => None,
        }
    }

    /// Props, if any.
    pub fn props(&self) -> Option<&Value> {
        match self {
            Self::Typed { props, .. } => Some(props),
            Self::Empty => None,
        }
    }
}

/// One entry of the flat UI graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    component: Component,
    /// Extra type keys dropped at decode time, in document order.
    ignored_types: Vec<String>,
}

impl Node {
    /// Node with a single typed component.
    pub fn new(id: impl Into<String>, type_name: impl Into<String>, props: Value) -> Self {
        Self {
            id: id.into(),
            component: Component::Typed {
                type_name: type_name.into(),
                props,
            },
            ignored_types: Vec::new(),
        }
    }

    /// Node whose component mapping has no entries.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component: Component::Empty,
            ignored_types: Vec::new(),
        }
    }

    /// Node id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Decoded component.
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Type keys that were present after the first one and ignored.
    pub fn ignored_types(&self) -> &[String] {
        &self.ignored_types
    }

    fn from_def(def: NodeDef) -> Self {
        let Some(map) = def.component else {
            return Self::empty(def.id);
        };

        let mut entries = map.into_iter();
        let Some((type_name, props)) = entries.next() else {
            return Self::empty(def.id);
        };
        let ignored_types: Vec<String> = entries.map(|(k, _)| k).collect();

        if !ignored_types.is_empty() {
            tracing::warn!(
                id = %def.id,
                kept = %type_name,
                ignored = ?ignored_types,
                "component mapping has more than one entry; keeping the first"
            );
        }
        if !(props.is_object() || props.is_null()) {
            tracing::warn!(id = %def.id, type_name = %type_name, "props are not an object");
        }

        Self {
            id: def.id,
            component: Component::Typed { type_name, props },
            ignored_types,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NodeDef {
    id: String,
    #[serde(default)]
    component: Option<Map<String, Value>>,
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        NodeDef::deserialize(deserializer).map(Self::from_def)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Repr<'a> {
            id: &'a str,
            component: Map<String, Value>,
        }

        let mut component = Map::new();
        if let Component::Typed { type_name, props } = &self.component {
            component.insert(type_name.clone(), props.clone());
        }
        Repr {
            id: &self.id,
            component,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
