use popmap_core::prelude::*;
use popmap_core::LEGEND_VALUES;

const TOKYO: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [139.6917, 35.6895] },
      "properties": {
        "city": "Tokyo",
        "country": "Japan",
        "populations": { "1970": 8000000, "1980": 9000000 }
      }
    }
  ]
}"#;

#[derive(Default)]
struct Recorder {
    layers: Vec<RenderedLayer>,
    year_label: Option<Year>,
}

impl MapSurface for Recorder {
    fn show_year(&mut self, year: Year) {
        self.year_label = Some(year);
    }
    fn replace_layer(&mut self, layer: &RenderedLayer) {
        self.layers.push(layer.clone());
    }
    fn show_legend(&mut self, _legend: &Legend) {}
}

#[test]
fn year_with_record_scales_and_formats() {
    let dataset = Dataset::from_json_str(TOKYO).unwrap();
    let mut map = MapController::new(&MapConfig::default(), Recorder::default()).unwrap();

    let request = map.start();
    assert_eq!(request.year, 1970);
    map.complete(request, Ok(dataset));

    let layer = map.layer().expect("layer attached");
    let marker = &layer.markers()[0];
    assert!((marker.radius - 5.657).abs() < 1e-3);
    assert_eq!(marker.radius, 8_000_000f64.sqrt() / 500.0);
    assert!(marker.popup.contains("Tokyo, Japan"));
    assert!(marker.popup.contains("8,000,000"));
    assert_eq!(marker.position, LatLng { lat: 35.6895, lng: 139.6917 });
}

#[test]
fn year_without_record_is_omitted_by_default() {
    let dataset = Dataset::from_json_str(TOKYO).unwrap();
    let mut map = MapController::new(&MapConfig::default(), Recorder::default()).unwrap();
    map.start();
    map.select_year(2000).unwrap();

    let outcome = map.redraw_with(&dataset);
    assert_eq!(outcome, RedrawOutcome::Applied { year: 2000, markers: 0 });
    assert_eq!(map.layer().unwrap().omitted, 1);
    assert_eq!(map.surface().year_label, Some(2000));
}

#[test]
fn year_without_record_can_be_labelled() {
    let dataset = Dataset::from_json_str(TOKYO).unwrap();
    let config = MapConfig {
        missing: MissingPolicy::LabelNoData,
        ..MapConfig::default()
    };
    let mut map = MapController::new(&config, Recorder::default()).unwrap();
    map.start();
    map.select_year(2000).unwrap();
    map.redraw_with(&dataset);

    let marker = &map.layer().unwrap().markers()[0];
    assert_eq!(marker.population, PopulationLookup::Absent);
    assert!(marker.popup.contains("no data"));
}

#[test]
fn malformed_document_keeps_previous_layer() {
    let mut map = MapController::new(&MapConfig::default(), Recorder::default()).unwrap();
    let first = map.start();
    map.complete(first, Dataset::from_json_str(TOKYO));

    let next = map.step_forward().unwrap();
    let broken = Dataset::from_json_str(r#"{"type":"FeatureCollection","features":[{"type":"Feature"}]}"#);
    assert!(matches!(broken, Err(PopMapError::InvalidData(_))));
    assert_eq!(map.complete(next, broken), RedrawOutcome::Failed);

    assert_eq!(map.surface().layers.len(), 1);
    assert_eq!(map.layer().unwrap().year, 1970);
}

#[test]
fn rapid_steps_only_apply_the_last_request() {
    let dataset = Dataset::from_json_str(TOKYO).unwrap();
    let mut map = MapController::new(&MapConfig::default(), Recorder::default()).unwrap();

    let mut pending = vec![map.start()];
    pending.extend(map.step_forward());
    pending.extend(map.step_forward());
    pending.extend(map.step_back());
    assert_eq!(pending.len(), 4);

    // Responses arrive in reverse order.
    let outcomes: Vec<_> = pending
        .iter()
        .rev()
        .map(|req| map.complete(*req, Ok(dataset.clone())))
        .collect();

    assert!(matches!(outcomes[0], RedrawOutcome::Applied { year: 1980, .. }));
    assert!(outcomes[1..]
        .iter()
        .all(|o| matches!(o, RedrawOutcome::Stale { .. })));
    let applied: Vec<Year> = map.surface().layers.iter().map(|l| l.year).collect();
    assert_eq!(applied, [1980]);
}

#[test]
fn legend_matches_marker_scaling() {
    let map = MapController::new(&MapConfig::default(), NullSurface).unwrap();
    let radii: Vec<f64> = map.legend().entries().iter().map(|e| e.radius).collect();
    let expected: Vec<f64> = LEGEND_VALUES.iter().map(|&v| radius(v)).collect();
    assert_eq!(radii, expected);
}
