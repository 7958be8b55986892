//! Populate trees.
//!
//! A populate tree tells the CMS which relations, components and media to
//! include in a response. At every level a node may select sub-fields, recurse
//! into further relations, or both.

use std::fmt;

use crate::query::builder::{bracket, QueryParams};

pub const POPULATE_KEY: &str = "populate";

/// What to populate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populate {
    /// Every first-level relation (`populate=*`).
    All,
    /// Dot paths, each sent as its own `populate=` parameter.
    Paths(Vec<String>),
    /// Named relations with per-relation field selection and nesting.
    Tree(Vec<(String, PopulateNode)>),
}

/// One relation inside a populate tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateNode {
    pub fields: Vec<String>,
    pub populate: Option<Populate>,
}

impl Populate {
    pub fn paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Populate::Paths(paths.into_iter().map(Into::into).collect())
    }

    pub fn tree() -> Self {
        Populate::Tree(Vec::new())
    }

    /// Add a relation. Flat paths become bare relations of the new tree.
    pub fn relation(self, key: &str, node: PopulateNode) -> Self {
        let mut entries = match self {
            Populate::Tree(entries) => entries,
            Populate::Paths(paths) => paths
                .into_iter()
                .map(|p| (p, PopulateNode::default()))
                .collect(),
            Populate::All => Vec::new(),
        };
        entries.push((key.to_string(), node));
        Populate::Tree(entries)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Populate::All => false,
            Populate::Paths(paths) => paths.is_empty(),
            Populate::Tree(entries) => entries.is_empty(),
        }
    }

    /// Append the top-level `populate` parameters.
    pub(crate) fn write_params(&self, params: &mut QueryParams) {
        match self {
            Populate::All => params.push_raw(POPULATE_KEY.to_string(), "*".to_string()),
            Populate::Paths(paths) => {
                for path in paths {
                    params.push(POPULATE_KEY, path);
                }
            }
            Populate::Tree(entries) => {
                for (key, node) in entries {
                    if node.is_bare() {
                        params.push(POPULATE_KEY, key);
                    } else {
                        node.write_params(&bracket(POPULATE_KEY, key), params);
                    }
                }
            }
        }
    }
}

impl PopulateNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn populate(mut self, populate: Populate) -> Self {
        self.populate = Some(populate);
        self
    }

    /// Neither a field selection nor nested relations.
    pub fn is_bare(&self) -> bool {
        self.fields.is_empty() && self.populate.as_ref().map_or(true, Populate::is_empty)
    }

    fn write_params(&self, prefix: &str, params: &mut QueryParams) {
        if self.is_bare() {
            params.push_raw(prefix.to_string(), "true".to_string());
            return;
        }

        if !self.fields.is_empty() {
            params.push_list(&format!("{}[fields]", prefix), &self.fields);
        }

        match &self.populate {
            Some(Populate::All) => {
                params.push_raw(format!("{}[{}]", prefix, POPULATE_KEY), "*".to_string());
            }
            Some(Populate::Paths(paths)) if !paths.is_empty() => {
                params.push_list(&format!("{}[{}]", prefix, POPULATE_KEY), paths);
            }
            Some(Populate::Tree(entries)) => {
                let nested = format!("{}[{}]", prefix, POPULATE_KEY);
                for (key, child) in entries {
                    child.write_params(&bracket(&nested, key), params);
                }
            }
            _ => {}
        }
    }
}

impl fmt::Display for Populate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut params = QueryParams::default();
        self.write_params(&mut params);
        write!(f, "{}", params)
    }
}
