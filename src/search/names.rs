//! Subcategory and category names to ids.
//!
//! Resolution order for a subcategory: a component-type alias ("mlcc"),
//! then an exact name, then the shortest name containing the query
//! ("crystal" -> "Crystals", not "Crystal Oscillators"). Categories skip the
//! alias step.

use crate::extract::ALIAS_LOOKUP;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const MAX_SUGGESTIONS: usize = 5;
const MIN_SUGGESTION_WORD: usize = 3;

/// One catalog subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryInfo {
    pub id: u32,
    pub name: String,
    #[serde(default, alias = "category_name")]
    pub category: Option<String>,
}

/// Which kind of name failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Subcategory,
    Category,
}

/// A name that matched nothing, with names the caller may have meant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    pub kind: NameKind,
    pub name: String,
    pub suggestions: Vec<String>,
}

/// Subcategory table, indexed for name lookups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<SubcategoryInfo>")]
pub struct CategoryTable {
    subcategories: Vec<SubcategoryInfo>,
    by_id: HashMap<u32, usize>,
    /// Lowercase subcategory name -> id.
    by_name: BTreeMap<String, u32>,
    /// Lowercase category name -> (display name, subcategory ids).
    categories: BTreeMap<String, (String, Vec<u32>)>,
}

impl From<Vec<SubcategoryInfo>> for CategoryTable {
    fn from(subcategories: Vec<SubcategoryInfo>) -> Self {
        CategoryTable::new(subcategories)
    }
}

impl CategoryTable {
    pub fn new(subcategories: Vec<SubcategoryInfo>) -> Self {
        let mut table = CategoryTable::default();
        for (index, info) in subcategories.iter().enumerate() {
            table.by_id.insert(info.id, index);
            table.by_name.insert(info.name.to_lowercase(), info.id);
            if let Some(category) = &info.category {
                let entry =
                    table.categories.entry(category.to_lowercase()).or_insert_with(|| (category.clone(), Vec::new()));
                entry.1.push(info.id);
            }
        }
        table.subcategories = subcategories;
        table
    }

    pub fn subcategory(&self, id: u32) -> Option<&SubcategoryInfo> {
        self.by_id.get(&id).map(|&index| &self.subcategories[index])
    }

    pub fn subcategories(&self) -> &[SubcategoryInfo] {
        &self.subcategories
    }

    /// Resolve a subcategory name to its id.
    pub fn resolve_subcategory(&self, name: &str) -> Result<&SubcategoryInfo, NotFound> {
        let lower = name.trim().to_lowercase();
        let aliased = ALIAS_LOOKUP.get(lower.as_str()).and_then(|target| self.by_name.get(*target));
        let id = aliased
            .or_else(|| self.by_name.get(&lower))
            .copied()
            .or_else(|| shortest_containing(self.by_name.iter().map(|(n, id)| (n.as_str(), *id)), &lower));

        id.and_then(|id| self.subcategory(id)).ok_or_else(|| NotFound {
            kind: NameKind::Subcategory,
            name: name.to_string(),
            suggestions: suggestions(self.subcategories.iter().map(|s| s.name.as_str()), &lower),
        })
    }

    /// Resolve a category name to its display name and subcategory ids.
    pub fn resolve_category(&self, name: &str) -> Result<(&str, &[u32]), NotFound> {
        let lower = name.trim().to_lowercase();
        let key = if self.categories.contains_key(&lower) {
            Some(lower.as_str())
        } else {
            shortest_containing(self.categories.keys().map(|k| (k.as_str(), k.as_str())), &lower)
        };

        key.and_then(|k| self.categories.get(k)).map(|(display, ids)| (display.as_str(), ids.as_slice())).ok_or_else(
            || NotFound {
                kind: NameKind::Category,
                name: name.to_string(),
                suggestions: suggestions(self.categories.values().map(|(display, _)| display.as_str()), &lower),
            },
        )
    }
}

/// The value whose (lowercase) name is the shortest one containing `query`.
fn shortest_containing<'a, T>(names: impl Iterator<Item = (&'a str, T)>, query: &str) -> Option<T> {
    if query.is_empty() {
        return None;
    }
    names.filter(|(name, _)| name.contains(query)).min_by_key(|(name, _)| name.len()).map(|(_, value)| value)
}

/// Names containing any query word of three or more characters.
fn suggestions<'a>(names: impl Iterator<Item = &'a str>, query: &str) -> Vec<String> {
    let words: Vec<&str> = query.split_whitespace().filter(|w| w.chars().count() >= MIN_SUGGESTION_WORD).collect();
    if words.is_empty() {
        return Vec::new();
    }
    names
        .filter(|name| {
            let lower = name.to_lowercase();
            words.iter().any(|w| lower.contains(w))
        })
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        let sub = |id: u32, name: &str, category: &str| SubcategoryInfo {
            id,
            name: name.to_string(),
            category: Some(category.to_string()),
        };
        CategoryTable::new(vec![
            sub(1, "Crystals", "Crystals, Oscillators"),
            sub(2, "Crystal Oscillators", "Crystals, Oscillators"),
            sub(3, "Multilayer Ceramic Capacitors MLCC - SMD/SMT", "Capacitors"),
            sub(4, "Chip Resistor - Surface Mount", "Resistors"),
            sub(5, "Through Hole Resistors", "Resistors"),
        ])
    }

    #[test]
    fn subcategory_resolution_order() {
        let table = table();
        let cases: Vec<(&str, u32)> = vec![
            ("mlcc", 3),
            ("capacitor", 3),
            ("Crystals", 1),
            ("crystal", 1),
            ("oscillators", 2),
            ("through hole resist", 5),
        ];
        for (name, id) in cases {
            assert_eq!(table.resolve_subcategory(name).map(|s| s.id), Ok(id), "resolving {name:?}");
        }
    }

    #[test]
    fn unknown_subcategory_suggests_near_matches() {
        let err = table().resolve_subcategory("quartz crystal thing").unwrap_err();
        assert_eq!(err.kind, NameKind::Subcategory);
        assert_eq!(err.suggestions, vec!["Crystals", "Crystal Oscillators"]);

        let err = table().resolve_subcategory("xy").unwrap_err();
        assert!(err.suggestions.is_empty());
    }

    #[test]
    fn categories_collect_their_subcategories() {
        let table = table();
        let (name, ids) = table.resolve_category("resistors").expect("known category");
        assert_eq!(name, "Resistors");
        assert_eq!(ids, &[4, 5]);
        assert!(table.resolve_category("crystal").is_ok());
        assert_eq!(table.resolve_category("motors").unwrap_err().kind, NameKind::Category);
    }
}
