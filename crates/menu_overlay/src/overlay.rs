//! Overlay lifecycle state machine.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use log::debug;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::trace;

use menu_geometry::{Layouts, TextDirection, initial_placement, resolve};

use crate::animation::{AnimationBackend, Easing, Transition};
use crate::config::MenuConfig;
use crate::style::{OverlayStyle, PixelGrid};

/// Scale the open transition starts from.
const OPEN_SCALE_FROM: f64 = 0.1;

/// Lifecycle states of a mounted overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Opening,
    Open,
    Closing,
    Closed,
}

/// Which way the open animation grows from the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthDirection {
    Downward,
    Upward,
}

/// Pick the open animation's grow direction from the pre-placement vertical
/// classification: end-anchored menus hang above the trigger and grow upward.
pub fn growth_direction(layouts: &Layouts) -> Result<GrowthDirection> {
    let placement =
        initial_placement(layouts).context("classifying initial vertical placement")?;
    if placement.anchored_to_end() {
        Ok(GrowthDirection::Upward)
    } else {
        Ok(GrowthDirection::Downward)
    }
}

struct Inner {
    state: MenuState,
    transition: Transition,
}

/// The mounted menu overlay.
///
/// Constructed per open: [`MenuOverlay::mount`] starts the open transition,
/// [`MenuOverlay::close`] starts the close transition. The caller samples
/// [`MenuOverlay::placement_style`] on every frame it renders.
pub struct MenuOverlay {
    config: MenuConfig,
    inner: Arc<Mutex<Inner>>,
    closed_tx: watch::Sender<bool>,
    closed_rx: watch::Receiver<bool>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MenuOverlay {
    /// Mount the overlay and start the open transition (scale/opacity
    /// grow from 0.1 to 1 with cubic-out easing).
    ///
    /// With the [`AnimationBackend::Timer`] backend this must be called
    /// inside a tokio runtime; the `Immediate` backend completes the open
    /// transition synchronously.
    pub fn mount(config: MenuConfig) -> Self {
        let now = Instant::now();
        let (closed_tx, closed_rx) = watch::channel(false);
        let inner = match config.backend {
            AnimationBackend::Immediate => Inner {
                state: MenuState::Open,
                transition: Transition::settled(1.0, now),
            },
            AnimationBackend::Timer => Inner {
                state: MenuState::Opening,
                transition: Transition::new(
                    OPEN_SCALE_FROM,
                    1.0,
                    config.open_duration,
                    Easing::CubicOut,
                    now,
                ),
            },
        };
        let overlay = Self {
            config,
            inner: Arc::new(Mutex::new(inner)),
            closed_tx,
            closed_rx,
        };
        debug!("menu overlay mounted ({:?} backend)", config.backend);

        if config.backend == AnimationBackend::Timer {
            let end = lock(&overlay.inner).transition.end();
            let inner = Arc::clone(&overlay.inner);
            tokio::spawn(async move {
                tokio::time::sleep_until(end).await;
                let mut inner = lock(&inner);
                // A close may have interrupted the open transition.
                if inner.state == MenuState::Opening {
                    inner.state = MenuState::Open;
                    trace!("open transition finished");
                }
            });
        }
        overlay
    }

    pub fn state(&self) -> MenuState {
        lock(&self.inner).state
    }

    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Start the close transition (current driven value down to 0 with
    /// cubic-in easing) and return a future resolved once the overlay is
    /// [`MenuState::Closed`].
    ///
    /// Closing an overlay that is already closing does not restart the
    /// transition; the returned future observes the one in flight. Closing
    /// a closed overlay returns an immediately ready future.
    pub fn close(&self) -> CloseFinished {
        let mut inner = lock(&self.inner);
        match inner.state {
            MenuState::Closed | MenuState::Closing => CloseFinished {
                closed: self.closed_rx.clone(),
            },
            MenuState::Opening | MenuState::Open => {
                let now = Instant::now();
                let from = inner.transition.value_at(now);
                inner.state = MenuState::Closing;
                debug!("menu close transition started from value {from:.3}");

                match self.config.backend {
                    AnimationBackend::Immediate => {
                        inner.transition = Transition::settled(0.0, now);
                        inner.state = MenuState::Closed;
                        let _ = self.closed_tx.send(true);
                    }
                    AnimationBackend::Timer => {
                        inner.transition = Transition::new(
                            from,
                            0.0,
                            self.config.close_duration,
                            Easing::CubicIn,
                            now,
                        );
                        let end = inner.transition.end();
                        drop(inner);

                        let inner = Arc::clone(&self.inner);
                        let closed_tx = self.closed_tx.clone();
                        tokio::spawn(async move {
                            tokio::time::sleep_until(end).await;
                            let mut inner = lock(&inner);
                            if inner.state == MenuState::Closing {
                                inner.state = MenuState::Closed;
                                trace!("close transition finished");
                                let _ = closed_tx.send(true);
                            }
                        });
                    }
                }
                CloseFinished {
                    closed: self.closed_rx.clone(),
                }
            }
        }
    }

    /// Assemble the placement style for one rendered frame: the resolved
    /// position merged with the sampled scale/opacity.
    pub fn placement_style(
        &self,
        layouts: &Layouts,
        direction: TextDirection,
        grid: PixelGrid,
        now: Instant,
    ) -> Result<OverlayStyle> {
        let position = resolve(layouts, direction).context("resolving menu position")?;
        let value = lock(&self.inner).transition.value_at(now);
        Ok(OverlayStyle::new(position, value, grid))
    }
}

/// Future resolved when the close transition has finished.
///
/// Any number of these may observe the same transition; they all resolve
/// when the overlay reaches [`MenuState::Closed`]. Resolves immediately if
/// the overlay is dropped before completing.
pub struct CloseFinished {
    closed: watch::Receiver<bool>,
}

impl IntoFuture for CloseFinished {
    type Output = ();
    type IntoFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        let mut closed = self.closed;
        Box::pin(async move {
            let _ = closed.wait_for(|done| *done).await;
        })
    }
}
