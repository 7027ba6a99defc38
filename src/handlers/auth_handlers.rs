use actix_session::Session;
use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::auth::{csrf, session};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{PageContext, SigninTemplate};

// The access token only ever travels in a POST body, never in the URL, so it
// stays out of access logs, history and Referer headers.
#[derive(Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    #[serde(default)]
    pub csrf_token: String,
}

fn signin_page(
    config: &AppConfig,
    session: &Session,
    error: Option<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext {
        signin_url: config.signin_url.clone(),
        csrf_token: csrf::get_or_create_token(session),
    };
    render(SigninTemplate { ctx, error }.render()?)
}

pub async fn signin_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    signin_page(&config, &session, None)
}

pub async fn signin(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<SigninForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let token = form.access_token.trim();
    if token.is_empty() {
        return signin_page(&config, &session, Some("Please paste your access token.".to_string()));
    }
    session::set_access_token(&session, token)?;
    log::info!("Viewer signed in");
    Ok(see_other("/"))
}

pub async fn signout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session::clear(&session);
    Ok(see_other("/"))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
