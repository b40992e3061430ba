use axum::response::Redirect;

pub mod health;
pub mod v1;

/// Landing page lives with the static assets.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}
