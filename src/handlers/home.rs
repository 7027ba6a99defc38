use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::provider::UserProviderFactory;
use crate::auth::{csrf, session};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::graphql::{HomeDataSource, QueryBinding};
use crate::page::PageController;
use crate::templates_structs::PageContext;

pub async fn index(
    config: web::Data<AppConfig>,
    source: web::Data<dyn HomeDataSource>,
    users: web::Data<dyn UserProviderFactory>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let provider = session::get_access_token(&session).map(|token| users.for_token(token));
    if provider.is_none() {
        log::debug!("Homepage request without access token, rendering anonymous header");
    }
    let ctx = PageContext {
        signin_url: config.signin_url.clone(),
        csrf_token: csrf::get_or_create_token(&session),
    };

    let binding = QueryBinding::bind(source.into_inner());
    let mut page = PageController::mount(binding, provider).with_context(ctx);
    let html = page.settle().await?;
    render(html)
}
