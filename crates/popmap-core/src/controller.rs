// crates/popmap-core/src/controller.rs

//! # Map Controller
//!
//! Owns the only mutable state of a map: the [`Timeline`], the attached
//! [`RenderedLayer`] and the token of the latest redraw request.
//!
//! Fetching is left to the caller. A year change returns a
//! [`RedrawRequest`]; the caller fetches the dataset however it can (file
//! read, HTTP) and hands the result back through
//! [`MapController::complete`]. Requests may complete out of order; only the
//! one carrying the latest token reaches the surface.

use crate::config::MapConfig;
use crate::error::{PopMapError, Result};
use crate::layer::{build_layer, LayerOptions, RenderedLayer};
use crate::legend::Legend;
use crate::model::{Dataset, Year};
use crate::timeline::{Direction, Timeline};
use crate::traits::MapSurface;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// A pending redraw: fetch the dataset, then call
/// [`MapController::complete`] with this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedrawRequest {
    pub token: u64,
    pub year: Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RedrawOutcome {
    /// The layer for `year` is now attached.
    Applied { year: Year, markers: usize },
    /// A newer request was issued meanwhile; the result was dropped.
    Stale { token: u64, latest: u64 },
    /// The fetch failed; the previous layer (if any) is still attached.
    Failed,
}

pub struct MapController<S: MapSurface> {
    timeline: Timeline,
    options: LayerOptions,
    legend: Legend,
    latest_token: u64,
    layer: Option<RenderedLayer>,
    surface: S,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(config: &MapConfig, surface: S) -> Result<Self> {
        config.validate()?;
        let options = config.layer_options()?;
        Ok(Self {
            timeline: config.timeline()?,
            legend: Legend::new(&options.scale),
            options,
            latest_token: 0,
            layer: None,
            surface,
        })
    }

    /// Attaches the legend, shows the initial year and requests the first load.
    pub fn start(&mut self) -> RedrawRequest {
        self.surface.show_legend(&self.legend);
        self.surface.show_year(self.timeline.current());
        self.issue()
    }

    /// Slider input.
    pub fn select_year(&mut self, year: Year) -> Option<RedrawRequest> {
        let changed = self.timeline.set_year(year)?;
        Some(self.year_changed(changed))
    }

    pub fn step(&mut self, delta: Year) -> Option<RedrawRequest> {
        let changed = self.timeline.step_year(delta)?;
        Some(self.year_changed(changed))
    }

    pub fn step_towards(&mut self, direction: Direction) -> Option<RedrawRequest> {
        let changed = self.timeline.step_towards(direction)?;
        Some(self.year_changed(changed))
    }

    pub fn step_back(&mut self) -> Option<RedrawRequest> {
        self.step_towards(Direction::Back)
    }

    pub fn step_forward(&mut self) -> Option<RedrawRequest> {
        self.step_towards(Direction::Forward)
    }

    /// Re-fetch the current year without changing it.
    pub fn refresh(&mut self) -> RedrawRequest {
        self.issue()
    }

    /// Hands back the outcome of the fetch started for `request`.
    pub fn complete(&mut self, request: RedrawRequest, fetched: Result<Dataset>) -> RedrawOutcome {
        match fetched {
            Ok(dataset) => self.complete_with(request, &dataset),
            Err(err) => self.fail(request, err),
        }
    }

    pub fn complete_with(&mut self, request: RedrawRequest, dataset: &Dataset) -> RedrawOutcome {
        if let Some(stale) = self.check_stale(request) {
            return stale;
        }
        let layer = build_layer(dataset, request.year, &self.options);
        let outcome = RedrawOutcome::Applied {
            year: layer.year,
            markers: layer.len(),
        };
        self.surface.replace_layer(&layer);
        self.layer = Some(layer);
        outcome
    }

    pub fn fail(&mut self, request: RedrawRequest, err: PopMapError) -> RedrawOutcome {
        if let Some(stale) = self.check_stale(request) {
            return stale;
        }
        error!(year = request.year, token = request.token, "error updating map: {err}");
        self.surface.report_error(&err);
        RedrawOutcome::Failed
    }

    /// Redraw the current year from a dataset the caller already holds.
    pub fn redraw_with(&mut self, dataset: &Dataset) -> RedrawOutcome {
        let request = self.issue();
        self.complete_with(request, dataset)
    }

    pub fn current_year(&self) -> Year {
        self.timeline.current()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn layer(&self) -> Option<&RenderedLayer> {
        self.layer.as_ref()
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn year_changed(&mut self, year: Year) -> RedrawRequest {
        info!(year, "selected year changed");
        self.surface.show_year(year);
        self.issue()
    }

    fn issue(&mut self) -> RedrawRequest {
        self.latest_token = self.latest_token.wrapping_add(1);
        RedrawRequest {
            token: self.latest_token,
            year: self.timeline.current(),
        }
    }

    fn check_stale(&self, request: RedrawRequest) -> Option<RedrawOutcome> {
        if request.token == self.latest_token {
            return None;
        }
        debug!(
            token = request.token,
            latest = self.latest_token,
            year = request.year,
            "dropping stale redraw"
        );
        Some(RedrawOutcome::Stale {
            token: request.token,
            latest: self.latest_token,
        })
    }
}
