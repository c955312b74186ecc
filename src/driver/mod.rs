//! Per-frame trail driver
//!
//! Owns one trail instance end to end: the shared raw-sample cell the
//! host's event handlers write into, the engine that turns samples into
//! curves, and the repeating frame task that feeds the render surface.
//! The host drives transitions through `enable`/`disable` and
//! `set_device_class`; the loop is torn down on every exit path so no
//! perpetual callback leaks past the effect's lifetime.

pub mod engine;
pub mod surface;

use crate::config::TrailConfig;
use crate::input::state::SharedPointerState;
use crate::input::types::DeviceClass;
use engine::TrailEngine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use surface::{RenderSurface, TrailStyle};
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;

/// Errors that can occur while driving the trail
#[derive(Error, Debug)]
pub enum TrailError {
    #[error("trail already enabled")]
    AlreadyEnabled,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("render surface error: {0}")]
    Render(#[source] anyhow::Error),
}

/// Result type for driver operations
pub type TrailResult<T> = Result<T, TrailError>;

/// Observable driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Toggled off; no buffer mutation, no rendering.
    Disabled,
    /// Enabled, but the device is not pointer-capable; the loop never runs.
    InactiveDevice,
    /// Enabled on a pointer-capable device; the frame loop is running.
    Active,
}

impl std::fmt::Display for DriverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverState::Disabled => write!(f, "disabled"),
            DriverState::InactiveDevice => write!(f, "inactive-device"),
            DriverState::Active => write!(f, "active"),
        }
    }
}

/// Drives one pointer trail.
///
/// Each instance owns its raw-sample cell and frame task; the lifecycle is
/// tied to the host view. Mount: create, hook the [`SharedPointerState`]
/// into pointer/touch handlers, call [`enable`](Self::enable). Unmount or
/// toggle-off: [`disable`](Self::disable), which stops the loop and clears
/// the surface. Re-enabling starts from a clean trail; stale history never
/// reappears.
pub struct TrailDriver {
    config: TrailConfig,
    style: TrailStyle,
    device: DeviceClass,
    enabled: bool,
    pointer: SharedPointerState,
    surface: Arc<AsyncMutex<Box<dyn RenderSurface>>>,
    is_running: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl TrailDriver {
    /// Create a driver in the disabled state. The host enables it on mount.
    pub fn new(
        config: TrailConfig,
        style: TrailStyle,
        device: DeviceClass,
        surface: Box<dyn RenderSurface>,
    ) -> TrailResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            style,
            device,
            enabled: false,
            pointer: SharedPointerState::default(),
            surface: Arc::new(AsyncMutex::new(surface)),
            is_running: Arc::new(AtomicBool::new(false)),
            task: None,
        })
    }

    /// Handle the host's event handlers write raw samples into.
    pub fn pointer(&self) -> SharedPointerState {
        self.pointer.clone()
    }

    pub fn state(&self) -> DriverState {
        if !self.enabled {
            DriverState::Disabled
        } else if !self.device.is_pointer_capable() {
            DriverState::InactiveDevice
        } else {
            DriverState::Active
        }
    }

    /// Turn the effect on. Starts the frame loop if the device allows it.
    pub async fn enable(&mut self) -> TrailResult<()> {
        if self.enabled {
            return Err(TrailError::AlreadyEnabled);
        }
        self.enabled = true;

        if self.device.is_pointer_capable() {
            self.spawn_loop();
        }
        tracing::info!("trail enabled (state={})", self.state());
        Ok(())
    }

    /// Turn the effect off. Stops the frame loop and clears the surface;
    /// a no-op when already disabled.
    pub async fn disable(&mut self) -> TrailResult<()> {
        if !self.enabled {
            return Ok(());
        }
        self.enabled = false;

        self.stop_loop().await;
        self.clear_surface().await?;
        tracing::info!("trail disabled");
        Ok(())
    }

    /// Flip the enable toggle.
    pub async fn toggle(&mut self) -> TrailResult<()> {
        if self.enabled {
            self.disable().await
        } else {
            self.enable().await
        }
    }

    /// Apply a device reclassification (the host re-evaluates on viewport
    /// resize). Any running loop is restarted from a clean trail.
    pub async fn set_device_class(&mut self, device: DeviceClass) -> TrailResult<()> {
        if device == self.device {
            return Ok(());
        }
        tracing::debug!("device class changed: {:?} -> {:?}", self.device, device);
        self.device = device;

        if !self.enabled {
            return Ok(());
        }

        self.stop_loop().await;
        if self.device.is_pointer_capable() {
            self.spawn_loop();
        } else {
            self.clear_surface().await?;
        }
        Ok(())
    }

    fn spawn_loop(&mut self) {
        let is_running = self.is_running.clone();
        is_running.store(true, Ordering::SeqCst);

        let config = self.config.clone();
        let style = self.style.clone();
        let pointer = self.pointer.clone();
        let surface = self.surface.clone();

        let task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs_f64(1.0 / config.refresh_rate_hz));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            // A fresh engine per loop start: re-enable and device changes
            // begin with an empty history and the head on the pointer.
            let mut engine = TrailEngine::new(config, pointer.latest());

            while is_running.load(Ordering::SeqCst) {
                interval.tick().await;
                if !is_running.load(Ordering::SeqCst) {
                    break;
                }

                let path = engine.tick(pointer.latest());
                if path.is_empty() {
                    continue;
                }

                if let Err(e) = surface.lock().await.render(&path, &style).await {
                    tracing::warn!("render surface failed: {:#}", e);
                }
            }
        });
        self.task = Some(task);
    }

    async fn stop_loop(&mut self) {
        self.is_running.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    async fn clear_surface(&self) -> TrailResult<()> {
        self.surface
            .lock()
            .await
            .clear()
            .await
            .map_err(TrailError::Render)
    }
}

impl Drop for TrailDriver {
    fn drop(&mut self) {
        // The loop checks the flag after every tick; aborting as well
        // covers a runtime that never polls the task again.
        self.is_running.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
