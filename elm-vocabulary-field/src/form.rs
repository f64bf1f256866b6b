//! Form element model handed to the host's form renderer.
//!
//! Elements form a tree: a container holds named children, and violation
//! paths are mapped back onto that tree by the widget.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The input control an element renders as.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    /// Wrapper without an input of its own.
    Container,
    Select {
        options: IndexMap<String, String>,
        /// Value submitted when nothing is chosen.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        empty_value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        disabled: bool,
    },
    Checkbox {
        #[serde(default)]
        default_value: bool,
    },
    Checkboxes {
        options: IndexMap<String, String>,
        #[serde(default)]
        default_value: IndexMap<String, bool>,
    },
}

/// One form element and its named children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormElement {
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, FormElement>,
}

impl FormElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            title: None,
            description: None,
            children: IndexMap::new(),
        }
    }

    pub fn container() -> Self {
        Self::new(ElementKind::Container)
    }

    pub fn checkbox(default_value: bool) -> Self {
        Self::new(ElementKind::Checkbox { default_value })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_child(mut self, key: impl Into<String>, child: FormElement) -> Self {
        self.children.insert(key.into(), child);
        self
    }

    pub fn child(&self, key: &str) -> Option<&FormElement> {
        self.children.get(key)
    }

    /// Options of a select or checkboxes element.
    pub fn options(&self) -> Option<&IndexMap<String, String>> {
        match &self.kind {
            ElementKind::Select { options, .. } | ElementKind::Checkboxes { options, .. } => {
                Some(options)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_serializes_with_type_tag() {
        let mut options = IndexMap::new();
        options.insert("formal".to_string(), "Formal learning".to_string());
        let element = FormElement::new(ElementKind::Select {
            options,
            empty_value: Some(String::new()),
            default_value: None,
            required: true,
            disabled: false,
        })
        .with_title("Setting");

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["title"], "Setting");
        assert_eq!(json["options"]["formal"], "Formal learning");
        assert_eq!(json["empty_value"], "");
        assert!(json.get("default_value").is_none());
        assert!(json.get("children").is_none());
    }

    #[test]
    fn children_are_addressable() {
        let element = FormElement::container()
            .with_child("value", FormElement::checkbox(true).with_title("Value"));
        assert_eq!(element.child("value").unwrap().title.as_deref(), Some("Value"));
        assert!(element.child("other").is_none());
        assert!(element.options().is_none());
    }
}
