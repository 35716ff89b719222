//! Static unit and core catalogs.
//!
//! Catalogs are built once and read-only afterwards. [`UnitCatalog`] keeps a
//! bidirectional index between catalog keys (BHK labels) and template ids so
//! placed units can be mapped back to their label without scanning.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{CoreTemplate, UnitTemplate};
use crate::error::{PlateForgeError, Result};

/// Unit templates keyed by BHK label.
///
/// # Examples
///
/// ```
/// use plateforge_core::UnitCatalog;
///
/// let catalog = UnitCatalog::standard();
/// assert_eq!(catalog.len(), 7);
/// assert_eq!(catalog.key_for_id("3bhk-std"), Some("3BHK"));
/// assert_eq!(catalog.get("2BHK").unwrap().width, 8.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<UnitTemplate>", into = "Vec<UnitTemplate>")]
pub struct UnitCatalog {
    templates: IndexMap<String, UnitTemplate>,
    key_by_id: HashMap<String, String>,
}

impl UnitCatalog {
    /// Key of the template used when a program names nothing placeable.
    pub const FALLBACK_KEY: &'static str = "2BHK";

    /// Builds a catalog keyed by each template's `bhk_type`.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate keys or duplicate template ids.
    pub fn from_templates(templates: impl IntoIterator<Item = UnitTemplate>) -> Result<Self> {
        let mut by_key = IndexMap::new();
        let mut key_by_id = HashMap::new();
        for template in templates {
            if key_by_id.contains_key(&template.id) {
                return Err(PlateForgeError::Catalog(format!(
                    "duplicate unit template id '{}'",
                    template.id
                )));
            }
            if by_key.contains_key(&template.bhk_type) {
                return Err(PlateForgeError::Catalog(format!(
                    "duplicate unit template key '{}'",
                    template.bhk_type
                )));
            }
            key_by_id.insert(template.id.clone(), template.bhk_type.clone());
            by_key.insert(template.bhk_type.clone(), template);
        }
        Ok(Self {
            templates: by_key,
            key_by_id,
        })
    }

    /// The default catalog for the Indian residential market.
    pub fn standard() -> Self {
        let templates = vec![
            UnitTemplate::new("1rk-std", "1 RK", "1RK", 5.5, 5.0, 26.0, 35.0).with_color("#FFE082"),
            UnitTemplate::new("1bhk-std", "1 BHK", "1BHK", 6.5, 6.5, 42.0, 55.0).with_color("#81D4FA"),
            UnitTemplate::new("1.5bhk-std", "1.5 BHK", "1.5BHK", 7.0, 7.0, 52.0, 68.0)
                .with_color("#A5D6A7"),
            UnitTemplate::new("2bhk-std", "2 BHK", "2BHK", 8.5, 7.5, 65.0, 85.0).with_color("#90CAF9"),
            UnitTemplate::new("2.5bhk-std", "2.5 BHK", "2.5BHK", 9.5, 8.0, 78.0, 100.0)
                .with_color("#80DEEA"),
            UnitTemplate::new("3bhk-std", "3 BHK", "3BHK", 11.0, 8.5, 95.0, 125.0).with_color("#CE93D8"),
            UnitTemplate::new("4bhk-std", "4 BHK", "4BHK", 13.0, 9.5, 130.0, 170.0).with_color("#F48FB1"),
        ];
        let mut key_by_id = HashMap::with_capacity(templates.len());
        let mut by_key = IndexMap::with_capacity(templates.len());
        for template in templates {
            key_by_id.insert(template.id.clone(), template.bhk_type.clone());
            by_key.insert(template.bhk_type.clone(), template);
        }
        Self {
            templates: by_key,
            key_by_id,
        }
    }

    pub fn get(&self, key: &str) -> Option<&UnitTemplate> {
        self.templates.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Catalog key (BHK label) for a template id.
    pub fn key_for_id(&self, id: &str) -> Option<&str> {
        self.key_by_id.get(id).map(String::as_str)
    }

    /// Template for a template id.
    pub fn template_for_id(&self, id: &str) -> Option<&UnitTemplate> {
        self.key_for_id(id).and_then(|key| self.templates.get(key))
    }

    /// Template used when a program names nothing placeable: the
    /// [`FALLBACK_KEY`](Self::FALLBACK_KEY) entry, else the first entry.
    pub fn fallback(&self) -> Option<&UnitTemplate> {
        self.get(Self::FALLBACK_KEY)
            .or_else(|| self.templates.values().next())
    }

    /// Templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<UnitTemplate>> for UnitCatalog {
    type Error = PlateForgeError;

    fn try_from(templates: Vec<UnitTemplate>) -> Result<Self> {
        Self::from_templates(templates)
    }
}

impl From<UnitCatalog> for Vec<UnitTemplate> {
    fn from(catalog: UnitCatalog) -> Self {
        catalog.templates.into_values().collect()
    }
}

/// Core templates keyed by size class.
///
/// # Examples
///
/// ```
/// use plateforge_core::CoreCatalog;
///
/// let cores = CoreCatalog::standard();
/// let medium = cores.get(CoreCatalog::DEFAULT_KEY).unwrap();
/// assert_eq!((medium.width, medium.depth), (5.0, 7.0));
/// assert_eq!(medium.lift_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoreCatalog {
    templates: IndexMap<String, CoreTemplate>,
}

impl CoreCatalog {
    /// Size class placed on every floor plate.
    pub const DEFAULT_KEY: &'static str = "medium";

    /// An empty catalog; populate with [`with`](Self::with).
    pub fn new() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    pub fn standard() -> Self {
        let templates = [
            ("small", CoreTemplate::new("core-small", 4.0, 6.0, 1, 1)),
            ("medium", CoreTemplate::new("core-medium", 5.0, 7.0, 2, 2)),
            ("large", CoreTemplate::new("core-large", 6.0, 8.0, 3, 2)),
        ];
        Self {
            templates: templates
                .into_iter()
                .map(|(key, template)| (key.to_string(), template))
                .collect(),
        }
    }

    /// Adds or replaces a size class.
    pub fn with(mut self, key: impl Into<String>, template: CoreTemplate) -> Self {
        self.templates.insert(key.into(), template);
        self
    }

    pub fn get(&self, key: &str) -> Option<&CoreTemplate> {
        self.templates.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoreTemplate)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for CoreCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
