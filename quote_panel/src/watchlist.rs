//! Watchlist sidebar: tab switching, search results visibility and item
//! selection.
use quote_common::Result;
use std::collections::BTreeMap;

use crate::region::{Page, RegionHandle, with_region};

const ACTIVE_CLASS: &str = "active";
const SELECTED_CLASS: &str = "selected";

/// Watchlist elements, resolved once.
#[derive(Debug, Clone, Default)]
pub struct WatchlistRegions {
    /// Tab buttons (`.wl-tab`) keyed by their `data-tab` name.
    pub tabs: BTreeMap<String, RegionHandle>,
    /// Tab bodies (`wl-content-{tab}`) keyed by tab name.
    pub contents: BTreeMap<String, RegionHandle>,
    /// `wl-search-results`.
    pub search_results: Option<RegionHandle>,
    /// `wl-tabs-area`.
    pub tabs_area: Option<RegionHandle>,
    /// `wl-search-input`.
    pub search_input: Option<RegionHandle>,
}

impl WatchlistRegions {
    /// Resolve the watchlist elements of `page`. Tab buttons are `wl-tab-{tab}`.
    pub fn from_page(page: &Page) -> Self {
        WatchlistRegions {
            tabs: page.resolve_prefixed("wl-tab-"),
            contents: page.resolve_prefixed("wl-content-"),
            search_results: page.resolve("wl-search-results"),
            tabs_area: page.resolve("wl-tabs-area"),
            search_input: page.resolve("wl-search-input"),
        }
    }
}

pub struct Watchlist {
    regions: WatchlistRegions,
}

impl Watchlist {
    pub fn new(regions: WatchlistRegions) -> Self {
        Watchlist { regions }
    }

    pub fn regions(&self) -> &WatchlistRegions {
        &self.regions
    }

    /// Activate `tab`: highlight its button, show only its body, and drop any
    /// search in progress.
    pub fn switch_tab(&self, tab: &str) -> Result<()> {
        for (name, button) in &self.regions.tabs {
            with_region(Some(button), |r| {
                if name == tab {
                    r.add_class(ACTIVE_CLASS);
                } else {
                    r.remove_class(ACTIVE_CLASS);
                }
            })?;
        }
        for content in self.regions.contents.values() {
            with_region(Some(content), |r| r.hide())?;
        }
        with_region(self.regions.contents.get(tab), |r| r.show())?;

        with_region(self.regions.search_results.as_ref(), |r| r.hide())?;
        with_region(self.regions.search_input.as_ref(), |r| r.set_value(""))?;
        Ok(())
    }

    /// Called after new search results were swapped into the results region.
    ///
    /// Non-blank results replace the tabs; blank results bring the tabs back.
    pub fn on_search_results_swapped(&self) -> Result<()> {
        let has_results = with_region(self.regions.search_results.as_ref(), |r| !r.is_blank())?;
        let Some(has_results) = has_results else {
            return Ok(());
        };

        with_region(self.regions.search_results.as_ref(), |r| {
            if has_results {
                r.show();
            } else {
                r.hide();
            }
        })?;
        with_region(self.regions.tabs_area.as_ref(), |r| {
            if has_results {
                r.hide();
            } else {
                r.show();
            }
        })?;
        Ok(())
    }

    /// Typing into the search box; an emptied box restores the tabs.
    pub fn on_search_input(&self, value: &str) -> Result<()> {
        with_region(self.regions.search_input.as_ref(), |r| r.set_value(value))?;
        if value.trim().is_empty() {
            self.reset_results()?;
        }
        Ok(())
    }

    /// Explicit "clear" button of the search box.
    pub fn clear_search(&self) -> Result<()> {
        self.reset_results()?;
        with_region(self.regions.search_input.as_ref(), |r| r.set_value(""))?;
        Ok(())
    }

    fn reset_results(&self) -> Result<()> {
        with_region(self.regions.search_results.as_ref(), |r| {
            r.hide();
            r.clear();
        })?;
        with_region(self.regions.tabs_area.as_ref(), |r| r.show())?;
        Ok(())
    }
}

/// Move the `selected` class to `items[index]`. An out of range index only
/// clears the previous selection.
pub fn mark_selected(items: &[RegionHandle], index: usize) -> Result<()> {
    for item in items {
        with_region(Some(item), |r| r.remove_class(SELECTED_CLASS))?;
    }
    with_region(items.get(index), |r| r.add_class(SELECTED_CLASS))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    fn watchlist() -> Watchlist {
        let mut regions = WatchlistRegions::default();
        for tab in ["favorites", "holdings", "recent"] {
            regions
                .tabs
                .insert(tab.to_string(), Region::new(format!("tab-{tab}")).handle());
            regions
                .contents
                .insert(tab.to_string(), Region::new(format!("wl-content-{tab}")).handle());
        }
        regions.search_results = Some(Region::new("wl-search-results").handle());
        regions.tabs_area = Some(Region::new("wl-tabs-area").handle());
        regions.search_input = Some(Region::new("wl-search-input").handle());
        Watchlist::new(regions)
    }

    fn region<'a>(handle: &'a Option<RegionHandle>) -> std::sync::MutexGuard<'a, Region> {
        handle.as_ref().unwrap().lock().unwrap()
    }

    #[test]
    fn switch_tab_shows_only_chosen_content() {
        let wl = watchlist();
        region(&wl.regions().search_input).set_value("sam");
        region(&wl.regions().search_results).show();

        wl.switch_tab("holdings").unwrap();

        let regions = wl.regions();
        for (name, button) in &regions.tabs {
            assert_eq!(button.lock().unwrap().has_class("active"), name == "holdings");
        }
        for (name, content) in &regions.contents {
            assert_eq!(content.lock().unwrap().hidden, name != "holdings");
        }
        assert!(region(&regions.search_results).hidden);
        assert_eq!(region(&regions.search_input).value, "");
    }

    #[test]
    fn unknown_tab_hides_every_content() {
        let wl = watchlist();
        wl.switch_tab("missing").unwrap();
        assert!(wl.regions().contents.values().all(|c| c.lock().unwrap().hidden));
    }

    #[test]
    fn swapped_results_toggle_tabs_area() {
        let wl = watchlist();
        region(&wl.regions().search_results).set_html("<li>005930</li>");
        wl.on_search_results_swapped().unwrap();
        assert!(!region(&wl.regions().search_results).hidden);
        assert!(region(&wl.regions().tabs_area).hidden);

        region(&wl.regions().search_results).set_html("  \n ");
        wl.on_search_results_swapped().unwrap();
        assert!(region(&wl.regions().search_results).hidden);
        assert!(!region(&wl.regions().tabs_area).hidden);
    }

    #[test]
    fn emptied_search_box_restores_tabs() {
        let wl = watchlist();
        region(&wl.regions().search_results).set_html("<li>AAPL</li>");
        region(&wl.regions().tabs_area).hide();

        wl.on_search_input("AA").unwrap();
        assert_eq!(region(&wl.regions().search_results).html, "<li>AAPL</li>");

        wl.on_search_input("   ").unwrap();
        assert_eq!(region(&wl.regions().search_results).html, "");
        assert!(!region(&wl.regions().tabs_area).hidden);
    }

    #[test]
    fn clear_search_resets_everything() {
        let wl = watchlist();
        region(&wl.regions().search_input).set_value("tes");
        region(&wl.regions().search_results).set_html("<li>TSLA</li>");

        wl.clear_search().unwrap();
        assert_eq!(region(&wl.regions().search_input).value, "");
        assert!(region(&wl.regions().search_results).hidden);
        assert!(!region(&wl.regions().tabs_area).hidden);
    }

    #[test]
    fn handlers_tolerate_a_bare_page() {
        let wl = Watchlist::new(WatchlistRegions::default());
        wl.switch_tab("favorites").unwrap();
        wl.on_search_results_swapped().unwrap();
        wl.on_search_input("").unwrap();
        wl.clear_search().unwrap();
    }

    #[test]
    fn selection_moves_between_items() {
        let items: Vec<_> = (0..3).map(|i| Region::new(format!("item-{i}")).handle()).collect();
        mark_selected(&items, 0).unwrap();
        mark_selected(&items, 2).unwrap();
        let selected: Vec<bool> = items
            .iter()
            .map(|i| i.lock().unwrap().has_class("selected"))
            .collect();
        assert_eq!(selected, vec![false, false, true]);

        mark_selected(&items, 9).unwrap();
        assert!(items.iter().all(|i| !i.lock().unwrap().has_class("selected")));
    }
}
