use actix_web::App;
use utoipa::openapi::{Info, OpenApi};
use utoipa_actix_web::AppExt;

/// Create the OpenAPI document of all endpoints.
pub fn openapi() -> OpenApi {
    let (_, mut openapi) = App::new()
        .into_utoipa_app()
        .configure(crate::endpoints::routes)
        .split_for_parts();

    openapi.info = Info::new("Superheroes API", env!("CARGO_PKG_VERSION"));

    openapi
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_routes_documented() {
        let openapi = openapi();
        let paths = &openapi.paths.paths;

        for path in ["/heroes", "/heroes/{id}", "/powers", "/powers/{id}", "/hero_powers"] {
            assert!(paths.contains_key(path), "missing path: {path}");
        }

        let power = &paths["/powers/{id}"];
        assert!(power.get.is_some());
        assert!(power.patch.is_some());
        assert!(paths["/hero_powers"].post.is_some());
    }
}
