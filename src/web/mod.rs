pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use self::routes::{camps, payments, registrations, users};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Medical Camp Server is Running" }))
        .route("/users", post(users::create_user_handler))
        .route("/users/role/:email", get(users::user_role_handler))
        .route("/users/admin/:email", get(users::admin_check_handler))
        .route(
            "/camps",
            get(camps::list_camps_handler).post(camps::create_camp_handler),
        )
        .route("/popular-camps", get(camps::popular_camps_handler))
        .route(
            "/camps/:id",
            get(camps::get_camp_handler).delete(camps::delete_camp_handler),
        )
        .route("/camps/:id/recount", post(camps::recount_camp_handler))
        .route(
            "/registered-camps",
            get(registrations::list_all_handler).post(registrations::submit_registration_handler),
        )
        .route(
            "/registered-camps/id/:id",
            get(registrations::get_registration_handler),
        )
        // One parameterised segment: GET reads it as the participant email,
        // PATCH/DELETE as the registration id.
        .route(
            "/registered-camps/:id",
            get(registrations::list_by_participant_handler)
                .patch(registrations::confirm_registration_handler)
                .delete(registrations::cancel_registration_handler),
        )
        .route(
            "/create-payment-intent",
            post(payments::create_payment_intent_handler),
        )
        .route("/payments", post(payments::record_payment_handler))
        .route(
            "/payment-history/:email",
            get(payments::payment_history_handler),
        )
        .with_state(state)
}
