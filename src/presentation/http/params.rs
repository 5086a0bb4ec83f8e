use crate::application::display::portlet_namespace;
use std::collections::HashMap;

/// Query parameters of a display request.
///
/// Each name is looked up under the portlet namespace first, then plain.
#[derive(Debug, Clone, Default)]
pub struct NamespacedParams {
    namespace: String,
    values: HashMap<String, String>,
}

impl NamespacedParams {
    pub fn new(portlet_id: &str, pairs: Vec<(String, String)>) -> Self {
        let mut values = HashMap::with_capacity(pairs.len());
        for (name, value) in pairs {
            // First occurrence wins.
            values.entry(name).or_insert(value);
        }
        Self {
            namespace: portlet_namespace(portlet_id),
            values,
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values
            .get(&format!("{}{name}", self.namespace))
            .or_else(|| self.values.get(name))
            .cloned()
    }
}
