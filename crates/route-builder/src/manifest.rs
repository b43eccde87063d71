// File: src/manifest.rs
// Purpose: Declarative route tables loaded from routes.toml

use crate::error::RouteError;
use crate::guard::Guard;
use crate::route::{Component, RouteOptions, Views};
use crate::scope::{GroupConfig, RouteScope};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Route table as written in TOML
///
/// ```toml
/// prefix = "/"
/// guards = ["session"]
///
/// [[routes]]
/// path = "/"
/// view = "Home"
///
/// [[routes]]
/// group = "dashboard"
/// guards = ["auth"]
///
///   [[routes.routes]]
///   path = "home"
///   view = "DashboardHome"
///   name = "dashboard.home"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub guards: Vec<String>,

    #[serde(default)]
    pub routes: Vec<EntryDef>,
}

/// A `[[routes]]` table: a group when it has a `group` key, a route otherwise
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntryDef {
    Group(GroupDef),
    Route(RouteDef),
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupDef {
    /// Group prefix
    pub group: String,

    #[serde(default)]
    pub guards: Vec<String>,

    #[serde(default)]
    pub routes: Vec<EntryDef>,

    /// Keys that are not part of the format
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteDef {
    pub path: String,

    /// Component for the default slot
    #[serde(default)]
    pub view: Option<String>,

    /// Slot name → component
    #[serde(default)]
    pub views: BTreeMap<String, String>,

    #[serde(default)]
    pub guards: Vec<String>,

    #[serde(default)]
    pub children: Vec<EntryDef>,

    #[serde(flatten)]
    pub options: RouteOptions,

    /// Keys left over once every route option has been taken
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

/// Guards addressable by name from a manifest
#[derive(Debug, Clone, Default)]
pub struct GuardRegistry {
    guards: HashMap<String, Guard>,
}

impl GuardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, guard: impl Into<Guard>) -> &mut Self {
        self.guards.insert(name.into(), guard.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, guard: impl Into<Guard>) -> Self {
        self.register(name, guard);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Guard> {
        self.guards.get(name)
    }

    /// Looks up every name in order; `path` only labels the error
    pub fn resolve(&self, names: &[String], path: &str) -> Result<Vec<Guard>, RouteError> {
        names
            .iter()
            .map(|name| {
                self.get(name).cloned().ok_or_else(|| RouteError::UnknownGuard {
                    name: name.clone(),
                    path: path.to_string(),
                })
            })
            .collect()
    }
}

impl RouteManifest {
    /// Parse a manifest from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, RouteError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a manifest file
    ///
    /// An empty file is an empty manifest.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route manifest: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse route manifest: {:?}", path))?;

        Ok(manifest)
    }

    /// Builds the root scope, resolving guard names against `registry`
    pub fn into_scope(self, registry: &GuardRegistry) -> Result<RouteScope, RouteError> {
        let guards = registry.resolve(&self.guards, self.prefix.as_deref().unwrap_or("/"))?;
        let mut scope = RouteScope::with_config(GroupConfig {
            prefix: self.prefix,
            guards,
        });

        populate(&mut scope, self.routes, registry)?;
        Ok(scope)
    }
}

fn populate(scope: &mut RouteScope, entries: Vec<EntryDef>, registry: &GuardRegistry) -> Result<(), RouteError> {
    for entry in entries {
        match entry {
            EntryDef::Group(group) => {
                reject_unknown(&group.unknown, &group.group)?;
                let guards = registry.resolve(&group.guards, &group.group)?;
                let config = GroupConfig {
                    prefix: Some(group.group),
                    guards,
                };

                let mut result = Ok(());
                scope.group(config, |inner| result = populate(inner, group.routes, registry));
                result?;
            }
            EntryDef::Route(def) => {
                reject_unknown(&def.unknown, &def.path)?;
                let guards = registry.resolve(&def.guards, &def.path)?;
                let views = component_views(&def.path, def.views)?;

                let node = scope.add_route(def.path, def.view.map(Component::new), views, def.options);
                node.guards(guards);

                if !def.children.is_empty() {
                    let mut result = Ok(());
                    node.children(|children| result = populate(children, def.children, registry));
                    result?;
                }
            }
        }
    }

    Ok(())
}

fn reject_unknown(unknown: &BTreeMap<String, toml::Value>, path: &str) -> Result<(), RouteError> {
    match unknown.keys().next() {
        Some(key) => Err(RouteError::UnknownKey {
            key: key.clone(),
            path: path.to_string(),
        }),
        None => Ok(()),
    }
}

fn component_views(path: &str, views: BTreeMap<String, String>) -> Result<Views, RouteError> {
    views
        .into_iter()
        .map(|(slot, name)| {
            if slot.trim().is_empty() {
                return Err(RouteError::InvalidArgument(format!("empty view slot name on `{}`", path)));
            }
            Ok((slot, Component::new(name)))
        })
        .collect()
}
