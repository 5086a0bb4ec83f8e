pub mod preferences;

pub use preferences::{PREF_RESOURCE_PRIM_KEY, PortletPreferences, PortletPreferencesRepository};
