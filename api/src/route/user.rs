use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    change_user_role, delete_user, list_users, register_user, show_current_user,
    show_my_colleagues, show_my_employees, show_my_positions, show_my_supervisors, show_user,
    show_user_colleagues, show_user_employees, show_user_positions, show_user_supervisors,
    update_current_user_profile, update_user,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", get(list_users).post(register_user))
        .route("/me", get(show_current_user).put(update_current_user_profile))
        .route("/me/supervisors", get(show_my_supervisors))
        .route("/me/employees", get(show_my_employees))
        .route("/me/colleagues", get(show_my_colleagues))
        .route("/me/positions", get(show_my_positions))
        .route(
            "/:user_id",
            get(show_user).put(update_user).delete(delete_user),
        )
        .route("/:user_id/role", put(change_user_role))
        .route("/:user_id/supervisors", get(show_user_supervisors))
        .route("/:user_id/employees", get(show_user_employees))
        .route("/:user_id/colleagues", get(show_user_colleagues))
        .route("/:user_id/positions", get(show_user_positions));

    Router::new().nest("/users", user_routers)
}
