//! User pages: create form, listing, edit form and delete

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use minijinja::context;
use serde::Serialize;
use usuarios_core::NameSummary;

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{UserId, ValidUserForm};
use crate::http::server::AppState;
use crate::models::User;
use crate::templates::page;

/// Where every successful write redirects to.
const LIST_PATH: &str = "/listar";

/// Context for `listar.html`
#[derive(Serialize)]
struct ListingContext<'a> {
    usuarios: &'a [User],
    emails: Vec<&'a str>,
    summary: NameSummary,
}

/// GET / - empty creation form
async fn new_user_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let html = state.templates.render(page::INDEX, context! {})?;
    Ok(Html(html))
}

/// POST / - create a user from the submitted form
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidUserForm(form): ValidUserForm,
) -> Result<Redirect, ApiError> {
    let id = UserRepo::new(&state.pool)
        .create(&form.name, &form.email)
        .await?;
    tracing::debug!(id, "Created usuario");

    Ok(Redirect::to(LIST_PATH))
}

/// GET /listar - all users plus the name transformations
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let users = UserRepo::new(&state.pool).list_all().await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    let ctx = ListingContext {
        usuarios: &users,
        emails: users.iter().map(|u| u.email.as_str()).collect(),
        summary: NameSummary::from_names(&names),
    };

    let html = state.templates.render(page::LIST, ctx)?;
    Ok(Html(html))
}

/// GET /editar/{id} - edit form pre-filled with the stored values
async fn edit_user_form(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    let html = state
        .templates
        .render(page::EDIT, context! { usuario => user })?;
    Ok(Html(html))
}

/// POST /editar/{id} - overwrite name and email
///
/// The record is looked up before the form is checked, so an unknown id
/// is a 404 whatever the body holds.
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    form: Result<ValidUserForm, ApiError>,
) -> Result<Redirect, ApiError> {
    let repo = UserRepo::new(&state.pool);
    repo.get(id).await?;

    let ValidUserForm(form) = form?;
    repo.update(id, &form.name, &form.email).await?;
    tracing::debug!(id, "Updated usuario");

    Ok(Redirect::to(LIST_PATH))
}

/// GET /deletar/{id} - remove the user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Redirect, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;
    tracing::debug!(id, "Deleted usuario");

    Ok(Redirect::to(LIST_PATH))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(new_user_form).post(create_user))
        .route(LIST_PATH, get(list_users))
        .route("/editar/{id}", get(edit_user_form).post(update_user))
        .route("/deletar/{id}", get(delete_user))
}
