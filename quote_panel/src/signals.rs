//! Page signals and the sidebar refresh they trigger.
//!
//! Submitting an order raises `PanelSignal::RefreshSidebar`. The
//! `SidebarRefresher` answers it with one `PartialLoad` per sidebar partial
//! present on the page; fetching and swapping the partial markup belongs to
//! whoever consumes those loads.
//!
//! Broadcast is best-effort: a subscriber whose receiver was dropped is removed
//! on the next emit.
use crossbeam_channel::{Receiver, Sender, select, unbounded};
use log::{debug, info};
use quote_common::net::{
    ORDERS_COMPACT_PATH, PORTFOLIO_COMPACT_PATH, POSITIONS_COMPACT_PATH, stock_position_path,
};
use quote_common::{PanelError, Result};
use std::sync::Mutex;

use crate::region::{Page, RegionHandle};

/// Named page-level signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelSignal {
    /// Sidebar partials are stale (an order was just submitted).
    RefreshSidebar,
}

/// Fan-out of `PanelSignal`s to every subscriber.
#[derive(Default)]
pub struct SignalBus {
    subscribers: Mutex<Vec<Sender<PanelSignal>>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Result<Receiver<PanelSignal>> {
        let (tx, rx) = unbounded();
        self.subscribers.lock()?.push(tx);
        Ok(rx)
    }

    /// Deliver `signal` to every live subscriber; returns how many received it.
    pub fn emit(&self, signal: PanelSignal) -> Result<usize> {
        let mut subscribers = self.subscribers.lock()?;
        subscribers.retain(|tx| tx.send(signal.clone()).is_ok());
        debug!("{signal:?} delivered to {} subscriber(s)", subscribers.len());
        Ok(subscribers.len())
    }
}

/// Request to re-fetch one partial into one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialLoad {
    pub region_id: String,
    pub path: String,
}

/// Sidebar partials that exist on the current page.
#[derive(Debug, Clone, Default)]
pub struct SidebarRegions {
    pub portfolio_compact: Option<RegionHandle>,
    pub positions_compact: Option<RegionHandle>,
    pub orders_compact: Option<RegionHandle>,
    /// Position box of the stock on screen, with that stock's symbol.
    pub stock_position: Option<(RegionHandle, String)>,
}

impl SidebarRegions {
    /// Resolve the sidebar partials of `page`; `symbol` is the stock on screen.
    pub fn from_page(page: &Page, symbol: Option<&str>) -> Self {
        SidebarRegions {
            portfolio_compact: page.resolve("portfolio-compact"),
            positions_compact: page.resolve("positions-compact"),
            orders_compact: page.resolve("orders-compact"),
            stock_position: page
                .resolve("stock-position")
                .zip(symbol.map(str::to_string)),
        }
    }
}

pub struct SidebarRefresher {
    regions: SidebarRegions,
}

impl SidebarRefresher {
    pub fn new(regions: SidebarRegions) -> Self {
        SidebarRefresher { regions }
    }

    /// Loads triggered by `signal`, in sidebar order.
    pub fn loads_for(&self, signal: &PanelSignal) -> Result<Vec<PartialLoad>> {
        match signal {
            PanelSignal::RefreshSidebar => self.sidebar_loads(),
        }
    }

    fn sidebar_loads(&self) -> Result<Vec<PartialLoad>> {
        let mut loads = Vec::with_capacity(4);
        let fixed = [
            (&self.regions.portfolio_compact, PORTFOLIO_COMPACT_PATH),
            (&self.regions.positions_compact, POSITIONS_COMPACT_PATH),
            (&self.regions.orders_compact, ORDERS_COMPACT_PATH),
        ];
        for (region, path) in fixed {
            if let Some(region) = region {
                loads.push(PartialLoad {
                    region_id: region.lock()?.id.clone(),
                    path: path.to_string(),
                });
            }
        }
        if let Some((region, symbol)) = &self.regions.stock_position {
            loads.push(PartialLoad {
                region_id: region.lock()?.id.clone(),
                path: stock_position_path(symbol)?,
            });
        }
        Ok(loads)
    }

    /// Forward loads for every received signal until `signals` closes or
    /// `shutdown` fires.
    pub fn run(
        &self,
        signals: Receiver<PanelSignal>,
        loads: Sender<PartialLoad>,
        shutdown: Receiver<()>,
    ) -> Result<()> {
        loop {
            select! {
                recv(shutdown) -> _ => break,
                recv(signals) -> msg => match msg {
                    Ok(signal) => {
                        for load in self.loads_for(&signal)? {
                            debug!("Reloading {} from {}", load.region_id, load.path);
                            loads
                                .send(load)
                                .map_err(|e| PanelError::ChannelSend(e.to_string()))?;
                        }
                    }
                    Err(_) => break,
                },
            }
        }
        info!("Sidebar refresher stopping...");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use std::thread;

    fn full_sidebar() -> SidebarRefresher {
        SidebarRefresher::new(SidebarRegions {
            portfolio_compact: Some(Region::new("portfolio-compact").handle()),
            positions_compact: Some(Region::new("positions-compact").handle()),
            orders_compact: Some(Region::new("orders-compact").handle()),
            stock_position: Some((Region::new("stock-position").handle(), "005930".into())),
        })
    }

    #[test]
    fn emit_reaches_every_live_subscriber() {
        let bus = SignalBus::new();
        let first = bus.subscribe().unwrap();
        let second = bus.subscribe().unwrap();
        drop(bus.subscribe().unwrap());

        assert_eq!(bus.emit(PanelSignal::RefreshSidebar).unwrap(), 2);
        assert_eq!(first.try_recv(), Ok(PanelSignal::RefreshSidebar));
        assert_eq!(second.try_recv(), Ok(PanelSignal::RefreshSidebar));
    }

    #[test]
    fn emit_without_subscribers_is_harmless() {
        assert_eq!(SignalBus::new().emit(PanelSignal::RefreshSidebar).unwrap(), 0);
    }

    #[test]
    fn refresh_lists_every_present_partial() {
        let loads = full_sidebar().loads_for(&PanelSignal::RefreshSidebar).unwrap();
        let paths: Vec<_> = loads.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/partials/portfolio-compact",
                "/partials/positions-compact",
                "/partials/orders-compact",
                "/partials/stock-position/005930",
            ]
        );
        assert_eq!(loads[3].region_id, "stock-position");
    }

    #[test]
    fn position_symbol_stays_one_segment() {
        let refresher = SidebarRefresher::new(SidebarRegions {
            stock_position: Some((Region::new("stock-position").handle(), "BRK/B".into())),
            ..Default::default()
        });
        let loads = refresher.loads_for(&PanelSignal::RefreshSidebar).unwrap();
        assert_eq!(loads[0].path, "/partials/stock-position/BRK%2FB");
    }

    #[test]
    fn absent_partials_are_skipped() {
        let refresher = SidebarRefresher::new(SidebarRegions {
            orders_compact: Some(Region::new("orders-compact").handle()),
            ..Default::default()
        });
        let loads = refresher.loads_for(&PanelSignal::RefreshSidebar).unwrap();
        assert_eq!(
            loads,
            vec![PartialLoad {
                region_id: "orders-compact".into(),
                path: "/partials/orders-compact".into(),
            }]
        );
    }

    #[test]
    fn run_forwards_loads_until_signals_close() {
        let bus = SignalBus::new();
        let signals = bus.subscribe().unwrap();
        let (loads_tx, loads_rx) = unbounded();
        let (_shutdown_tx, shutdown_rx) = unbounded::<()>();

        let worker = thread::spawn(move || full_sidebar().run(signals, loads_tx, shutdown_rx));
        bus.emit(PanelSignal::RefreshSidebar).unwrap();
        drop(bus);

        worker.join().unwrap().unwrap();
        assert_eq!(loads_rx.iter().count(), 4);
    }

    #[test]
    fn run_stops_on_shutdown() {
        let bus = SignalBus::new();
        let signals = bus.subscribe().unwrap();
        let (loads_tx, _loads_rx) = unbounded();
        let (shutdown_tx, shutdown_rx) = unbounded::<()>();

        let worker = thread::spawn(move || full_sidebar().run(signals, loads_tx, shutdown_rx));
        shutdown_tx.send(()).unwrap();
        worker.join().unwrap().unwrap();
        drop(bus);
    }
}
