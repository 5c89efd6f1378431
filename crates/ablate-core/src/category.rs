//! Category catalog
//!
//! Maps semantic category names ("people", "ethnicity+location", ...) to the raw
//! recognizer labels they subsume. The table is fixed: three atomic categories
//! and every union of them, seven sets in total.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Atomic entity category
///
/// Variant order is the canonical order used when composing set names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ethnicity,
    Location,
    People,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Ethnicity, Category::Location, Category::People];

    pub fn name(self) -> &'static str {
        match self {
            Category::Ethnicity => "ethnicity",
            Category::Location => "location",
            Category::People => "people",
        }
    }

    /// Short form used in output field names
    pub fn abbreviation(self) -> &'static str {
        match self {
            Category::Ethnicity => "ethn",
            Category::Location => "loc",
            Category::People => "ppl",
        }
    }

    /// Raw recognizer labels for this category
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Category::Ethnicity => &["NORP", "LANGUAGE"],
            Category::Location => &["GPE", "LOC"],
            Category::People => &["PERSON"],
        }
    }

    fn description(self) -> &'static str {
        match self {
            Category::Ethnicity => "ethnicity and language names",
            Category::Location => "cities, states, and countries",
            Category::People => "person names",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// A set of raw recognizer labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A named union of one or more atomic categories
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySet {
    members: Vec<Category>,
    field: String,
}

impl CategorySet {
    fn from_members(mut members: Vec<Category>) -> Self {
        members.sort();
        let abbrs: Vec<_> = members.iter().map(|c| c.abbreviation()).collect();
        let field = format!("ner_no_{}_bio", abbrs.join("+"));
        Self { members, field }
    }

    /// Keep an established output column name instead of the composed one
    fn with_field(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }

    pub fn members(&self) -> &[Category] {
        &self.members
    }

    /// Canonical name, e.g. `ethnicity+people`
    pub fn name(&self) -> String {
        self.members
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Output field name, e.g. `ner_no_ethn+ppl_bio`
    pub fn field_name(&self) -> &str {
        &self.field
    }

    pub fn labels(&self) -> LabelSet {
        self.members
            .iter()
            .flat_map(|c| c.labels().iter().copied())
            .collect()
    }

    /// Why this variant exists, for run logs
    pub fn reason(&self) -> String {
        let parts: Vec<_> = self.members.iter().map(|c| c.description()).collect();
        match parts.as_slice() {
            [one] => format!("remove {}", one),
            [init @ .., last] => format!("remove {} and {}", init.join("; "), last),
            [] => String::new(),
        }
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Output column of the all-three-categories variant
pub const TRIPLE_FIELD: &str = "ner_no_ppl+ethn+loc_bio";

/// The fixed table of seven category sets
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    sets: Vec<CategorySet>,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        use Category::*;

        let mut sets: Vec<_> = vec![
            vec![Ethnicity],
            vec![Location],
            vec![People],
            vec![Ethnicity, Location],
            vec![Ethnicity, People],
            vec![Location, People],
        ]
        .into_iter()
        .map(CategorySet::from_members)
        .collect();
        // downstream evaluation reads the triple under this column
        sets.push(
            CategorySet::from_members(vec![Ethnicity, Location, People])
                .with_field(TRIPLE_FIELD),
        );

        Self { sets }
    }

    /// All sets: singles, then pairs, then the triple
    pub fn all(&self) -> &[CategorySet] {
        &self.sets
    }

    /// Resolve a category name; compound members may come in any order
    pub fn get(&self, name: &str) -> Result<&CategorySet> {
        let mut members = Vec::new();
        for part in name.split('+') {
            let category: Category = part
                .parse()
                .map_err(|_| Error::UnknownCategory(name.to_string()))?;
            if members.contains(&category) {
                return Err(Error::UnknownCategory(name.to_string()));
            }
            members.push(category);
        }
        members.sort();

        self.sets
            .iter()
            .find(|set| set.members == members)
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))
    }

    pub fn labels_for(&self, name: &str) -> Result<LabelSet> {
        Ok(self.get(name)?.labels())
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}
