// crates/popmap-core/src/convert.rs
use crate::error::{PopMapError, Result};
use crate::model::{CityFeature, Dataset, LatLng, Population, Year};
use crate::raw::{FeatureCollectionRaw, FeatureRaw, GeometryRaw};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// **Standard Converter:** Raw GeoJSON -> Dataset.
///
/// Fails on the first feature that cannot be drawn, naming its index, so a
/// broken file never produces a half-filled layer.
pub fn from_raw(raw: FeatureCollectionRaw) -> Result<Dataset> {
    if raw.kind != "FeatureCollection" {
        return Err(PopMapError::InvalidData(format!(
            "expected a FeatureCollection, found type {:?}",
            raw.kind
        )));
    }

    let features = raw
        .features
        .into_iter()
        .enumerate()
        .map(|(idx, f)| convert_feature(idx, f))
        .collect::<Result<Vec<_>>>()?;

    Ok(Dataset::new(features))
}

fn convert_feature(idx: usize, raw: FeatureRaw) -> Result<CityFeature> {
    if let Some(kind) = raw.kind.as_deref() {
        if kind != "Feature" {
            return Err(invalid(idx, format!("expected type \"Feature\", found {kind:?}")));
        }
    }

    let geometry = raw
        .geometry
        .ok_or_else(|| invalid(idx, "missing geometry"))?;
    let point = convert_point(idx, &geometry)?;

    let props = raw
        .properties
        .ok_or_else(|| invalid(idx, "missing properties"))?;

    let city = props
        .city
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid(idx, "missing or empty \"city\""))?;
    let country = props.country.map(|s| s.trim().to_string()).unwrap_or_default();

    let mut populations = BTreeMap::new();
    for (key, value) in props.populations {
        // Lookups are by the canonical spelling, so "+1970" or "01970" would
        // shadow the real "1970" record.
        let year: Year = key
            .parse()
            .ok()
            .filter(|y: &Year| y.to_string() == key)
            .ok_or_else(|| invalid(idx, format!("year key {key:?} is not a plain integer")))?;
        // `null` means "not recorded".
        let Some(number) = value else {
            continue;
        };
        let population = convert_population(&number).ok_or_else(|| {
            invalid(
                idx,
                format!("population {number} for {year} is not a non-negative integer"),
            )
        })?;
        populations.insert(year, population);
    }

    Ok(CityFeature {
        city,
        country,
        point,
        populations,
    })
}

fn convert_point(idx: usize, geometry: &GeometryRaw) -> Result<LatLng> {
    if geometry.kind != "Point" {
        return Err(invalid(
            idx,
            format!("expected Point geometry, found {:?}", geometry.kind),
        ));
    }

    let coords = match &geometry.coordinates {
        Value::Array(items) if items.len() >= 2 => items,
        _ => return Err(invalid(idx, "Point needs at least two coordinates")),
    };

    // GeoJSON order is [lng, lat].
    let lng = coords[0].as_f64();
    let lat = coords[1].as_f64();
    match (lat, lng) {
        (Some(lat), Some(lng))
            if lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 && lng.abs() <= 180.0 =>
        {
            Ok(LatLng { lat, lng })
        }
        _ => Err(invalid(
            idx,
            format!("coordinates {} are not a valid [lng, lat]", geometry.coordinates),
        )),
    }
}

/// Accepts `8000000` and `8000000.0`; rejects negatives and fractions.
fn convert_population(number: &Number) -> Option<Population> {
    if let Some(n) = number.as_u64() {
        return Some(n);
    }
    let f = number.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as Population)
    } else {
        None
    }
}

fn invalid(idx: usize, msg: impl AsRef<str>) -> PopMapError {
    PopMapError::InvalidData(format!("feature #{idx}: {}", msg.as_ref()))
}
