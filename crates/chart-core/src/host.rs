// File: crates/chart-core/src/host.rs
// Summary: Mounting an engine into a size-observable container and re-rendering on resize.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::chart::ChartEngine;
use crate::config::ViewConfig;
use crate::focus::Focus;
use crate::series::Series;
use crate::view::Viewport;

/// Size-change callback registered with a [`Container`].
pub type SizeObserver = Rc<dyn Fn(Viewport)>;

/// Host element the chart draws into.
pub trait Container {
    /// Current content box size.
    fn content_size(&self) -> Viewport;
    /// Register `observer` for every later size change. The returned handle
    /// unregisters it when dropped.
    fn observe(&self, observer: SizeObserver) -> Subscription;
    /// Page-unique element id; used to scope the ids a mounted chart emits.
    fn element_id(&self) -> Option<String> { None }
}

/// Handle to a registered size observer; releases it exactly once.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release.
    pub fn noop() -> Self { Self { release: None } }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) { self.run_release(); }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

#[derive(Default)]
struct VirtualState {
    id: Option<String>,
    size: Viewport,
    next_id: u64,
    observers: Vec<(u64, SizeObserver)>,
}

/// In-memory container: size is set by hand and observers are notified synchronously.
#[derive(Clone, Default)]
pub struct VirtualContainer {
    state: Rc<RefCell<VirtualState>>,
}

impl VirtualContainer {
    pub fn new(width: f64, height: f64) -> Self {
        let c = Self::default();
        c.state.borrow_mut().size = Viewport::new(width, height);
        c
    }

    /// Container with an element id, as a page would give each chart slot.
    pub fn with_id(id: impl Into<String>, width: f64, height: f64) -> Self {
        let c = Self::new(width, height);
        c.state.borrow_mut().id = Some(id.into());
        c
    }

    /// Change the content size and notify every observer.
    pub fn resize(&self, width: f64, height: f64) {
        let size = Viewport::new(width, height);
        let observers: Vec<SizeObserver> = {
            let mut state = self.state.borrow_mut();
            state.size = size;
            state.observers.iter().map(|(_, o)| Rc::clone(o)).collect()
        };
        for observer in observers {
            observer(size);
        }
    }

    pub fn observer_count(&self) -> usize { self.state.borrow().observers.len() }
}

impl Container for VirtualContainer {
    fn content_size(&self) -> Viewport { self.state.borrow().size }

    fn element_id(&self) -> Option<String> { self.state.borrow().id.clone() }

    fn observe(&self, observer: SizeObserver) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.observers.push((id, observer));
            id
        };
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().observers.retain(|(oid, _)| *oid != id);
            }
        })
    }
}

struct Mounted {
    engine: ChartEngine,
    series: Series,
    config: ViewConfig,
    viewport: Viewport,
}

impl Mounted {
    fn rerender(&mut self) {
        self.engine.render(&self.series, &self.config, self.viewport);
    }
}

/// An engine mounted into a container. Dropping it unmounts: the size
/// subscription is released and later notifications reach nothing.
///
/// A size change that arrives while the chart is borrowed (from inside
/// [`ChartHost::with_engine`], say) is parked and applied as soon as the
/// borrow ends; only the latest parked size is kept.
pub struct ChartHost {
    inner: Rc<RefCell<Mounted>>,
    pending: Rc<Cell<Option<Viewport>>>,
    subscription: Option<Subscription>,
}

impl ChartHost {
    /// Mount a default engine. Gradient ids are scoped to the container's
    /// element id when it has one.
    pub fn mount(container: &dyn Container, series: Series, config: ViewConfig) -> Self {
        let engine = match container.element_id() {
            Some(id) => ChartEngine::new().with_id_prefix(id),
            None => ChartEngine::new(),
        };
        Self::mount_engine(container, engine, series, config)
    }

    /// Mount a pre-configured engine (theme, tooltip style).
    pub fn mount_engine(container: &dyn Container, engine: ChartEngine, series: Series, config: ViewConfig) -> Self {
        let viewport = container.content_size();
        let inner = Rc::new(RefCell::new(Mounted { engine, series, config, viewport }));
        inner.borrow_mut().rerender();

        let pending = Rc::new(Cell::new(None));
        let weak: Weak<RefCell<Mounted>> = Rc::downgrade(&inner);
        let parked = Rc::clone(&pending);
        let subscription = container.observe(Rc::new(move |size: Viewport| {
            let Some(mounted) = weak.upgrade() else { return };
            let Ok(mut mounted) = mounted.try_borrow_mut() else {
                debug!("resize to {}x{} parked: chart busy", size.width, size.height);
                parked.set(Some(size));
                return;
            };
            parked.set(None);
            debug!("resize {}x{} -> {}x{}", mounted.viewport.width, mounted.viewport.height, size.width, size.height);
            mounted.viewport = size;
            mounted.rerender();
        }));
        debug!("mounted chart at {}x{}", viewport.width, viewport.height);
        Self { inner, pending, subscription: Some(subscription) }
    }

    /// Move a parked size (if any) into `m`. Returns whether one was applied.
    fn take_pending(&self, m: &mut Mounted) -> bool {
        match self.pending.take() {
            Some(size) => {
                debug!("applying parked resize {}x{}", size.width, size.height);
                m.viewport = size;
                true
            }
            None => false,
        }
    }

    /// Re-render at a parked size once nothing else holds the chart.
    fn flush_pending(&self) {
        let Ok(mut m) = self.inner.try_borrow_mut() else { return };
        if self.take_pending(&mut m) {
            m.rerender();
        }
    }

    /// Replace the data and re-render with the last known viewport.
    pub fn set_series(&self, series: Series) {
        let mut m = self.inner.borrow_mut();
        self.take_pending(&mut m);
        m.series = series;
        m.rerender();
    }

    /// Replace the view configuration and re-render with the last known viewport.
    pub fn set_config(&self, config: ViewConfig) {
        let mut m = self.inner.borrow_mut();
        self.take_pending(&mut m);
        m.config = config;
        m.rerender();
    }

    pub fn pointer_move(&self, x: f64, y: f64) -> Option<Focus> {
        self.flush_pending();
        self.inner.borrow_mut().engine.pointer_move(x, y).cloned()
    }

    pub fn pointer_leave(&self) {
        self.flush_pending();
        self.inner.borrow_mut().engine.pointer_leave();
    }

    pub fn viewport(&self) -> Viewport {
        self.flush_pending();
        self.inner.borrow().viewport
    }

    /// Borrow the engine for inspection or export. A resize triggered inside `f`
    /// is applied after `f` returns.
    pub fn with_engine<R>(&self, f: impl FnOnce(&ChartEngine) -> R) -> R {
        let out = {
            let m = self.inner.borrow();
            f(&m.engine)
        };
        self.flush_pending();
        out
    }

    /// Explicit unmount; equivalent to dropping the host.
    pub fn unmount(self) {}
}

impl Drop for ChartHost {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
        debug!("unmounted chart");
    }
}
