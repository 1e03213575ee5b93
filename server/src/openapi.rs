use utoipa::openapi::Info;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(crate::endpoints::index), tags())]
pub struct ApiDoc;

pub fn info() -> Info {
    Info::new("Superheroes API", env!("CARGO_PKG_VERSION"))
}

/// The API document of the full server.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.merge(superheroes_module_fundamental::openapi());
    doc.info = info();

    doc
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn includes_landing_page() {
        let doc = openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/heroes"));
        assert_eq!(doc.info.title, "Superheroes API");
    }
}
