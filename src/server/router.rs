//! HTTP routing and OpenAPI documentation.
//!
//! Routes are registered through `utoipa_axum::router::OpenApiRouter`, which collects the
//! `#[utoipa::path]` annotations of every handler into one OpenAPI document. The document is
//! served as JSON at `/api-docs/openapi.json` with a Swagger UI at `/api-docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{composer, customer, person, session, team},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course API",
        description = "Document API for composers, customers, persons, teams and user signup",
    ),
    tags(
        (name = "Composers", description = "Composer documents"),
        (name = "Customers", description = "Customer documents and their invoices"),
        (name = "Persons", description = "Person documents"),
        (name = "Teams", description = "Team documents and their players"),
        (name = "Session", description = "Signup and login")
    )
)]
struct ApiDoc;

/// Builds the application router with every API route and the documentation endpoints.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(composer::get_composers, composer::create_composer))
        .routes(routes!(
            composer::get_composer_by_id,
            composer::update_composer,
            composer::delete_composer
        ))
        .routes(routes!(customer::get_customers, customer::create_customer))
        .routes(routes!(customer::create_invoice, customer::get_invoices))
        .routes(routes!(person::get_persons, person::create_person))
        .routes(routes!(person::get_person_by_id))
        .routes(routes!(team::get_teams, team::create_team))
        .routes(routes!(team::get_team_by_id, team::delete_team))
        .routes(routes!(team::create_player, team::get_players))
        .routes(routes!(session::signup))
        .routes(routes!(session::login))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
}
