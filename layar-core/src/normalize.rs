//! Shape detection and normalization of the raw data document.
//!
//! The document has shipped in several shapes over its life: a bare array of
//! cinema records, an object with a `cinemas` array, an object of nested
//! arrays, and a single bare record. Detection runs as an ordered chain of
//! strategies and the first one that yields records wins.

use serde_json::Value;

use crate::brand::BrandClassifier;
use crate::domain::Cinema;

/// Structural test for "should this object be treated as a Cinema record":
/// a non-empty `movies` array, or both a `name` and a `city` string.
/// Records failing the test are discarded, not defaulted.
pub fn is_cinema_like(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let has_movies = obj
        .get("movies")
        .and_then(Value::as_array)
        .is_some_and(|movies| !movies.is_empty());
    let has_name_and_city = obj.get("name").is_some_and(Value::is_string)
        && obj.get("city").is_some_and(Value::is_string);
    has_movies || has_name_and_city
}

/// Normalizes an arbitrary parsed document into the canonical cinema list,
/// attaching the derived brand to every surviving record.
///
/// An empty result means "no usable data", never an error; callers render an
/// explicit empty state for it. The input is not mutated, so the raw payload
/// stays inspectable for diagnostics.
pub fn normalize(raw: &Value, brands: &BrandClassifier) -> Vec<Cinema> {
    collect_cinema_values(raw)
        .into_iter()
        .filter_map(|value| decode(value, brands))
        .collect()
}

/// The ordered strategy chain: bare array, `cinemas` field, nested-array
/// scan, singleton wrap. Later strategies only run when earlier ones yield
/// nothing.
fn collect_cinema_values(raw: &Value) -> Vec<&Value> {
    match raw {
        Value::Array(items) => items.iter().filter(|v| is_cinema_like(v)).collect(),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("cinemas") {
                let found: Vec<&Value> =
                    items.iter().filter(|v| is_cinema_like(v)).collect();
                if !found.is_empty() {
                    return found;
                }
            }

            let mut found: Vec<&Value> = Vec::new();
            for value in map.values() {
                if let Value::Array(items) = value {
                    found.extend(items.iter().filter(|v| is_cinema_like(v)));
                }
            }
            if !found.is_empty() {
                return found;
            }

            if is_cinema_like(raw) {
                vec![raw]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

fn decode(value: &Value, brands: &BrandClassifier) -> Option<Cinema> {
    let mut cinema: Cinema = serde_json::from_value(value.clone()).ok()?;
    cinema.brand = brands.classify(cinema.name.as_deref());
    Some(cinema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> Value {
        json!([
            {
                "id": "c1",
                "name": "CGV Sun Plaza",
                "city": "Medan",
                "movies": [{"id": "m1", "title": "Foo", "ageRating": "17+", "genres": ["Drama"]}]
            },
            {"id": "c2", "name": "Hermes XXI", "city": "Medan"}
        ])
    }

    #[test]
    fn all_supported_shapes_yield_the_same_list() {
        let brands = BrandClassifier::default();
        let items = dataset();

        let bare = normalize(&items, &brands);
        let keyed = normalize(&json!({ "cinemas": items.clone() }), &brands);
        let nested = normalize(&json!({ "sunPlaza": [items[0].clone()], "hermes": [items[1].clone()] }), &brands);

        for shape in [&keyed, &nested] {
            assert_eq!(shape.len(), bare.len());
            let mut ids: Vec<_> = shape.iter().map(|c| c.id.clone()).collect();
            let mut bare_ids: Vec<_> = bare.iter().map(|c| c.id.clone()).collect();
            ids.sort();
            bare_ids.sort();
            assert_eq!(ids, bare_ids);
        }
    }

    #[test]
    fn a_single_bare_record_is_wrapped() {
        let brands = BrandClassifier::default();
        let root = json!({"id": "c1", "name": "CGV Sun Plaza", "city": "Medan"});
        let cinemas = normalize(&root, &brands);
        assert_eq!(cinemas.len(), 1);
        assert_eq!(cinemas[0].id.as_deref(), Some("c1"));
    }

    #[test]
    fn name_and_city_without_movies_survives_with_empty_movie_list() {
        let brands = BrandClassifier::default();
        let cinemas = normalize(&json!([{"name": "Hermes XXI", "city": "Medan"}]), &brands);
        assert_eq!(cinemas.len(), 1);
        assert!(cinemas[0].movies.is_empty());
    }

    #[test]
    fn records_failing_the_predicate_are_discarded() {
        let brands = BrandClassifier::default();
        let cinemas = normalize(
            &json!([
                {"name": "CGV Sun Plaza", "city": "Medan"},
                {"name": "no city here"},
                {"movies": []},
                42,
                "not a record"
            ]),
            &brands,
        );
        assert_eq!(cinemas.len(), 1);
    }

    #[test]
    fn unusable_documents_normalize_to_an_empty_list() {
        let brands = BrandClassifier::default();
        assert!(normalize(&json!(null), &brands).is_empty());
        assert!(normalize(&json!("cinemas"), &brands).is_empty());
        assert!(normalize(&json!({"meta": {"version": 2}}), &brands).is_empty());
        assert!(normalize(&json!([]), &brands).is_empty());
    }

    #[test]
    fn brand_is_attached_to_every_survivor() {
        let brands = BrandClassifier::default();
        let cinemas = normalize(&dataset(), &brands);
        assert_eq!(cinemas[0].brand, "CGV");
        assert_eq!(cinemas[1].brand, "Cinema XXI");
    }

    #[test]
    fn the_input_document_is_not_mutated() {
        let brands = BrandClassifier::default();
        let raw = dataset();
        let before = raw.clone();
        let _ = normalize(&raw, &brands);
        assert_eq!(raw, before);
    }

    #[test]
    fn keyed_field_wins_over_nested_scan_when_it_has_records() {
        let brands = BrandClassifier::default();
        let root = json!({
            "cinemas": [{"name": "CGV Sun Plaza", "city": "Medan"}],
            "stale": [{"name": "Old Hermes XXI", "city": "Medan"}]
        });
        let cinemas = normalize(&root, &brands);
        assert_eq!(cinemas.len(), 1);
        assert_eq!(cinemas[0].name.as_deref(), Some("CGV Sun Plaza"));
    }

    #[test]
    fn loose_field_types_still_decode() {
        let brands = BrandClassifier::default();
        let root = json!([{
            "id": 7,
            "name": "CGV Focal Point",
            "city": "Medan",
            "totalStudios": 6,
            "movies": [{"id": "m1", "durationMinutes": 120, "ratingScore": "4.5"}]
        }]);
        let cinemas = normalize(&root, &brands);
        assert_eq!(cinemas[0].id.as_deref(), Some("7"));
        assert_eq!(cinemas[0].total_studios.as_deref(), Some("6"));
        assert_eq!(cinemas[0].movies[0].duration_minutes.as_deref(), Some("120"));
        assert_eq!(cinemas[0].movies[0].rating_score, Some(4.5));
    }
}
