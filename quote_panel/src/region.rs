//! Headless model of the page elements the panel writes into.
//!
//! A `Region` stands in for one element identified by its id. Handlers never
//! look elements up; they receive `Option<RegionHandle>` values resolved once
//! when the page is assembled, and a `None` turns the corresponding write into
//! a no-op.
use quote_common::Result;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Shared, lockable handle to a region.
pub type RegionHandle = Arc<Mutex<Region>>;

/// State of one page element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    /// Element id.
    pub id: String,
    /// Inner markup.
    pub html: String,
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// `display: none`.
    pub hidden: bool,
    /// Disabled form control.
    pub disabled: bool,
    /// Form control value.
    pub value: String,
    /// Form control placeholder.
    pub placeholder: String,
}

impl Region {
    /// Empty, visible region with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Region {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Wrap into a shareable handle.
    pub fn handle(self) -> RegionHandle {
        Arc::new(Mutex::new(self))
    }

    /// Replace the inner markup.
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Replace the inner markup with escaped text.
    pub fn set_text(&mut self, text: &str) {
        self.html = escape_html(text);
    }

    /// Drop the inner markup.
    pub fn clear(&mut self) {
        self.html.clear();
    }

    /// `true` when the markup is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.html.trim().is_empty()
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Overwrite the whole class list from a space separated string.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes.clear();
        for class in class_name.split_whitespace() {
            self.add_class(class);
        }
    }

    /// Space separated class list.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }
}

/// Every element of a rendered page, by id.
///
/// Handler structs resolve their handles from here once; lookups never happen
/// inside handlers.
#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: BTreeMap<String, RegionHandle>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, replacing any element with the same id.
    pub fn insert(&mut self, region: Region) -> RegionHandle {
        let id = region.id.clone();
        let handle = region.handle();
        self.regions.insert(id, handle.clone());
        handle
    }

    /// Handle of the element with `id`, if the page has one.
    pub fn resolve(&self, id: &str) -> Option<RegionHandle> {
        self.regions.get(id).cloned()
    }

    /// All elements whose id starts with `prefix`, keyed by the rest of the id.
    pub fn resolve_prefixed(&self, prefix: &str) -> BTreeMap<String, RegionHandle> {
        self.regions
            .iter()
            .filter_map(|(id, handle)| {
                id.strip_prefix(prefix)
                    .map(|rest| (rest.to_string(), handle.clone()))
            })
            .collect()
    }
}

/// Run `f` against the region if it is present.
///
/// Returns `Ok(None)` for an absent region; a poisoned lock is an error.
pub fn with_region<T>(
    region: Option<&RegionHandle>,
    f: impl FnOnce(&mut Region) -> T,
) -> Result<Option<T>> {
    match region {
        Some(handle) => {
            let mut guard = handle.lock()?;
            Ok(Some(f(&mut guard)))
        }
        None => Ok(None),
    }
}

/// Escape text for insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
