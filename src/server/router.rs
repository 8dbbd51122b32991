//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa specification. The collected
//! OpenAPI document is served with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the bearer token scheme referenced by owner-guarded endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/api/continent/...` - Continent CRUD and lookups by name & alias
/// - `/api/country/...` - Country CRUD, lookups, inclusive range filters and continent summaries
/// - `/api/favourite/...` - Favourite CRUD, lookups and the favourites ranking
/// - `/api/visited/...` - Visited CRUD and lookups
///
/// Create, update and delete of countries, favourites and visited countries require a bearer
/// token; the verified `sub` claim becomes the owner of created records.
///
/// # Returns
/// An Axum `Router<AppState>`, call `with_state` to make it servable.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Country API", description = "Continents, countries, favourite and visited countries"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::continent::CONTINENT_TAG, description = "Continent API routes"),
            (name = controller::country::COUNTRY_TAG, description = "Country API routes"),
            (name = controller::favourite::FAVOURITE_TAG, description = "Favourite country API routes"),
            (name = controller::visited::VISITED_TAG, description = "Visited country API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Continent
        .routes(routes!(controller::continent::create_continent))
        .routes(routes!(controller::continent::get_all_continents))
        .routes(routes!(
            controller::continent::get_continent_by_id,
            controller::continent::update_continent,
            controller::continent::delete_continent
        ))
        .routes(routes!(controller::continent::get_continent_by_alias))
        .routes(routes!(controller::continent::get_continent_by_name))
        // Country
        .routes(routes!(controller::country::create_country))
        .routes(routes!(controller::country::get_all_countries))
        .routes(routes!(
            controller::country::get_country_by_id,
            controller::country::update_country,
            controller::country::delete_country
        ))
        .routes(routes!(controller::country::get_summary_by_continent))
        .routes(routes!(controller::country::get_summary_by_all_continents))
        .routes(routes!(controller::country::get_countries_by_continent))
        .routes(routes!(controller::country::get_countries_by_user))
        .routes(routes!(controller::country::get_country_by_name))
        .routes(routes!(controller::country::get_countries_by_inhabitants))
        .routes(routes!(controller::country::filter_countries_by_inhabitants))
        .routes(routes!(controller::country::get_countries_by_language))
        .routes(routes!(controller::country::get_countries_by_area))
        .routes(routes!(controller::country::filter_countries_by_area))
        .routes(routes!(controller::country::get_countries_by_pkb))
        .routes(routes!(controller::country::filter_countries_by_pkb))
        // Favourite
        .routes(routes!(controller::favourite::create_favourite))
        .routes(routes!(controller::favourite::get_all_favourites))
        .routes(routes!(controller::favourite::get_favourite_ranking))
        .routes(routes!(
            controller::favourite::get_favourite_by_id,
            controller::favourite::update_favourite,
            controller::favourite::delete_favourite
        ))
        .routes(routes!(controller::favourite::get_favourites_by_country))
        .routes(routes!(controller::favourite::get_favourites_by_user))
        // Visited
        .routes(routes!(controller::visited::create_visited))
        .routes(routes!(controller::visited::get_all_visited))
        .routes(routes!(
            controller::visited::get_visited_by_id,
            controller::visited::update_visited,
            controller::visited::delete_visited
        ))
        .routes(routes!(controller::visited::get_visited_by_country))
        .routes(routes!(controller::visited::get_visited_by_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
