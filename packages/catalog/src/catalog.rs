use crate::types::{ComponentDefinition, PropType};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// One embedded category data file: `{ "components": [...] }`.
#[derive(Debug, Deserialize)]
struct CategoryFile {
    components: Vec<ComponentDefinition>,
}

/// Embedded category data, one file per catalog category.
const CATEGORY_FILES: &[&str] = &[
    include_str!("../data/inputs.json"),
    include_str!("../data/dataDisplay.json"),
    include_str!("../data/feedback.json"),
    include_str!("../data/surfaces.json"),
    include_str!("../data/navigation.json"),
    include_str!("../data/layout.json"),
    include_str!("../data/utils.json"),
    include_str!("../data/lab.json"),
];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate component definition: {0}")]
    DuplicateComponent(String),

    #[error("enum prop '{prop}' on component '{component}' has no enumValues")]
    MissingEnumValues { component: String, prop: String },

    #[error("invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only registry of component definitions, keyed by name.
///
/// Loaded once at startup and never mutated afterwards; the engine treats
/// it purely as input to validation and default-value assignment.
#[derive(Debug, Clone)]
pub struct Catalog {
    components: Vec<ComponentDefinition>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, enforcing unique names and complete enum schemas.
    pub fn from_definitions(
        definitions: Vec<ComponentDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(definitions.len());

        for (index, definition) in definitions.iter().enumerate() {
            if by_name.insert(definition.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateComponent(definition.name.clone()));
            }

            for prop in &definition.props {
                if prop.prop_type == PropType::Enum && prop.enum_values.is_none() {
                    return Err(CatalogError::MissingEnumValues {
                        component: definition.name.clone(),
                        prop: prop.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            components: definitions,
            by_name,
        })
    }

    /// Parse a single category file (`{ "components": [...] }`).
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let file: CategoryFile = serde_json::from_str(source)?;
        Self::from_definitions(file.components)
    }

    /// The full built-in registry assembled from the embedded category files.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut definitions = Vec::new();
        for source in CATEGORY_FILES {
            let file: CategoryFile = serde_json::from_str(source)?;
            definitions.extend(file.components);
        }
        Self::from_definitions(definitions)
    }

    /// Look up a component definition by name.
    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.by_name.get(name).map(|&index| &self.components[index])
    }

    /// All definitions, in load order.
    pub fn components(&self) -> &[ComponentDefinition] {
        &self.components
    }

    /// Definitions belonging to one category, in load order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ComponentDefinition> {
        self.components.iter().filter(move |c| c.category == category)
    }

    /// Sorted, de-duplicated category names.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> =
            self.components.iter().map(|c| c.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Case-insensitive search over name, display name and description.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a ComponentDefinition> {
        let query = query.to_lowercase();
        self.components
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query)
                    || c.display_name.to_lowercase().contains(&query)
                    || c.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
