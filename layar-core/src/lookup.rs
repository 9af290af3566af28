use crate::domain::{Cinema, Movie};
use crate::view::UNNAMED_CINEMA;

/// A movie resolved by id, together with the names of every cinema screening
/// it, in canonical-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieLookup<'a> {
    pub movie: &'a Movie,
    pub cinema_names: Vec<String>,
}

/// Resolves a cinema by its opaque id. `None` is a distinguishable render
/// path for the caller, never a fault.
pub fn find_cinema_by_id<'a>(cinemas: &'a [Cinema], id: &str) -> Option<&'a Cinema> {
    cinemas.iter().find(|c| c.id.as_deref() == Some(id))
}

/// Scans every cinema's movie list for the given id.
///
/// Movie ids are not validated as globally unique; when distinct records
/// share an id, the first match in canonical order is the one rendered
/// (deterministic tie-break). All screening cinemas are still collected, at
/// most one structural match per cinema, for the "plays at N cinemas" line.
pub fn find_movie_by_id<'a>(cinemas: &'a [Cinema], id: &str) -> Option<MovieLookup<'a>> {
    let mut movie: Option<&Movie> = None;
    let mut cinema_names = Vec::new();

    for cinema in cinemas {
        if let Some(found) = cinema.movies.iter().find(|m| m.id.as_deref() == Some(id)) {
            movie.get_or_insert(found);
            cinema_names.push(
                cinema
                    .name
                    .clone()
                    .unwrap_or_else(|| UNNAMED_CINEMA.to_string()),
            );
        }
    }

    movie.map(|movie| MovieLookup {
        movie,
        cinema_names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandClassifier;
    use crate::normalize::normalize;
    use serde_json::json;

    fn cinemas() -> Vec<Cinema> {
        let raw = json!([
            {
                "id": "c1",
                "name": "CGV Sun Plaza",
                "city": "Medan",
                "movies": [{"id": "m1", "title": "Foo"}]
            },
            {
                "id": "c2",
                "name": "Hermes XXI",
                "city": "Medan",
                "movies": [{"id": "m1", "title": "Foo (re-release)"}, {"id": "m2", "title": "Bar"}]
            },
            {"id": "c3", "city": "Binjai", "movies": [{"id": "m1", "title": "Foo"}]}
        ]);
        normalize(&raw, &BrandClassifier::default())
    }

    #[test]
    fn cinema_lookup_resolves_by_id() {
        let list = cinemas();
        let cinema = find_cinema_by_id(&list, "c2").unwrap();
        assert_eq!(cinema.name.as_deref(), Some("Hermes XXI"));
        assert!(find_cinema_by_id(&list, "missing").is_none());
    }

    #[test]
    fn movie_lookup_collects_every_screening_cinema_in_order() {
        let list = cinemas();
        let lookup = find_movie_by_id(&list, "m1").unwrap();
        assert_eq!(
            lookup.cinema_names,
            vec!["CGV Sun Plaza", "Hermes XXI", UNNAMED_CINEMA]
        );
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first_match() {
        let list = cinemas();
        let lookup = find_movie_by_id(&list, "m1").unwrap();
        assert_eq!(lookup.movie.title.as_deref(), Some("Foo"));
    }

    #[test]
    fn unknown_movie_id_is_not_found() {
        let list = cinemas();
        assert!(find_movie_by_id(&list, "m9").is_none());
    }
}
