use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::{
    http::handlers::{
        add_response_handler, delete_response_handler, get_stats_handler, import_reviews_handler,
        list_reviews_handler, moderate_review_handler, submit_review_handler,
        update_response_handler, upsert_business_handler, vote_review_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/reviews",
            get(list_reviews_handler).post(submit_review_handler),
        )
        .route("/reviews/import", post(import_reviews_handler))
        .route("/reviews/stats", get(get_stats_handler))
        .route("/reviews/{review_id}/status", patch(moderate_review_handler))
        .route("/reviews/{review_id}/vote", post(vote_review_handler))
        .route(
            "/reviews/{review_id}/response",
            post(add_response_handler)
                .put(update_response_handler)
                .delete(delete_response_handler),
        )
        .route("/businesses", put(upsert_business_handler))
        .with_state(state)
}
