//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    auth, establishments, healthcheck, observability::request_logging, promo_codes,
    state::State, views,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("auth")
                .post(auth::handlers::login)
                .delete(auth::handlers::logout),
        )
        .push(
            Router::with_path("establishments")
                .get(establishments::index::handler)
                .push(Router::with_path("summary").get(establishments::summary::handler)),
        )
        .push(
            Router::with_path("promo")
                .get(promo_codes::index::handler)
                .post(promo_codes::create::handler)
                .patch(promo_codes::update::handler)
                .delete(promo_codes::delete::handler)
                .push(Router::with_path("toggle").post(promo_codes::toggle::handler))
                .push(Router::with_path("summary").get(promo_codes::summary::handler)),
        )
}

/// Every route, gated by the session filter, plus the OpenAPI document and
/// Swagger UI.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .hoop(auth::filter::route_filter)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("login").get(views::login))
        .push(api_router())
        .get(views::admin);

    let doc = OpenApi::new("Restodocks Admin API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}
