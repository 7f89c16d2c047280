use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The category → sub-category mapping returned by
/// `GET /api/articles/categories`.
///
/// The backend orders its keys deliberately, so entries keep JSON key
/// insertion order instead of being collected into a map. Lookup is
/// linear; taxonomies are a handful of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTaxonomy {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryTaxonomy {
    /// Category names, in backend order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Sub-categories of the given category, empty for an unknown name.
    pub fn sub_categories(&self, category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, subs)| subs.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, Vec<String>)> for CategoryTaxonomy {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for CategoryTaxonomy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, subs) in &self.entries {
            map.serialize_entry(name, subs)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryTaxonomy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TaxonomyVisitor;

        impl<'de> Visitor<'de> for TaxonomyVisitor {
            type Value = CategoryTaxonomy;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category name to sub-category names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(CategoryTaxonomy { entries })
            }
        }

        deserializer.deserialize_map(TaxonomyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_backend_key_order() {
        let taxonomy: CategoryTaxonomy =
            serde_json::from_str(r#"{"Tech": ["AI", "Web"], "Sport": []}"#).unwrap();

        let categories: Vec<&str> = taxonomy.categories().collect();
        assert_eq!(categories, vec!["Tech", "Sport"]);
        assert_eq!(taxonomy.sub_categories("Tech"), ["AI", "Web"]);
        assert!(taxonomy.sub_categories("Sport").is_empty());
    }

    #[test]
    fn unknown_category_has_no_sub_categories() {
        let taxonomy: CategoryTaxonomy = serde_json::from_str(r#"{"Tech": ["AI"]}"#).unwrap();
        assert!(taxonomy.sub_categories("Cuisine").is_empty());
    }

    #[test]
    fn empty_object_is_empty_taxonomy() {
        let taxonomy: CategoryTaxonomy = serde_json::from_str("{}").unwrap();
        assert!(taxonomy.is_empty());
        assert_eq!(taxonomy.len(), 0);
    }
}
