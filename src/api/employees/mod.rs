//! Employee API module

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // GET reads the path segment as a CPF, DELETE as an id
        .route("/{id}", get(handler::find_by_cpf).delete(handler::delete))
        .route("/{id}/fire", patch(handler::fire))
        .route("/{id}/raiseSalary", patch(handler::raise_salary))
        .route("/{id}/raiseProfitShare", patch(handler::raise_profit_share))
        .route("/{id}/lowerProfitShare", patch(handler::lower_profit_share))
        .route("/{id}/changeRole", patch(handler::change_role))
}
