//! Plugin metadata shared by the widget and formatter.

use serde::Serialize;

/// Static description of a widget or formatter plugin.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PluginInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub field_types: &'static [&'static str],
}

impl PluginInfo {
    /// Whether the plugin can be used on fields of `field_type`.
    pub fn applies_to(&self, field_type: &str) -> bool {
        self.field_types.contains(&field_type)
    }
}
