// crates/popmap-core/src/traits.rs
use crate::error::PopMapError;
use crate::layer::RenderedLayer;
use crate::legend::Legend;
use crate::model::Year;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons are Unicode-aware, accent-insensitive and case-insensitive,
/// based on [`fold_key`].
///
/// # Examples
/// ```rust
/// use popmap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Kraków").is_named("krakow"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The map library, seen from the controller.
///
/// Implementations draw; they never decide what to draw. The controller only
/// calls [`MapSurface::replace_layer`] with a layer that belongs to the latest
/// selected year, so an implementation can drop its old markers and attach
/// the new ones without further checks.
pub trait MapSurface {
    /// Update the year label (and the slider position, if it differs).
    fn show_year(&mut self, year: Year);

    /// Discard every marker currently shown and attach `layer` instead.
    fn replace_layer(&mut self, layer: &RenderedLayer);

    /// Attach the legend panel. Called once, from `MapController::start`.
    fn show_legend(&mut self, legend: &Legend);

    /// A redraw failed. The controller already logged it.
    fn report_error(&mut self, _error: &PopMapError) {}
}

/// A surface that draws nothing. Handy for headless use of the controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl MapSurface for NullSurface {
    fn show_year(&mut self, _year: Year) {}
    fn replace_layer(&mut self, _layer: &RenderedLayer) {}
    fn show_legend(&mut self, _legend: &Legend) {}
}
