use crate::error::PageError;
use crate::flash;
use analyzer_app::application::AddUrlOutcome;
use analyzer_app::infrastructure::db::db_error;
use analyzer_app::AppContext;
use analyzer_errors::AppError;
use analyzer_ui::{render_home_page, render_url_page, render_urls_page, Flash};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

const URL_ADDED: &str = "Page successfully added";
const URL_EXISTS: &str = "Page already exists";
const CHECK_SUCCEEDED: &str = "Page successfully checked";

#[derive(Deserialize)]
struct UrlForm {
    #[serde(default)]
    url: String,
}

pub fn router(ctx: AppContext) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(1)));

    Router::new()
        .route("/", get(index))
        .route("/urls", get(urls_index).post(urls_store))
        .route("/urls/{id}", get(url_show))
        .route("/urls/{id}/checks", post(url_checks_store))
        .fallback(not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn index(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    Html(render_home_page(&flashes, ""))
}

async fn urls_store(
    State(ctx): State<AppContext>,
    session: Session,
    Form(form): Form<UrlForm>,
) -> Response {
    match ctx.add_url.execute(&form.url).await {
        Ok(outcome) => {
            let notice = match outcome {
                AddUrlOutcome::Created(_) => Flash::success(URL_ADDED),
                AddUrlOutcome::AlreadyExists(_) => Flash::info(URL_EXISTS),
            };
            flash::push(&session, notice).await;
            Redirect::to(&format!("/urls/{}", outcome.id())).into_response()
        }
        Err(AppError::InvalidUrl(message)) => {
            let html = render_home_page(&[Flash::danger(message)], form.url.trim());
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
        Err(e) => PageError(e).into_response(),
    }
}

async fn urls_index(
    State(ctx): State<AppContext>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let urls = ctx.url_repo.list_with_last_check().await.map_err(db_error)?;
    let flashes = flash::take(&session).await;
    Ok(Html(render_urls_page(&flashes, &urls)))
}

async fn url_show(
    State(ctx): State<AppContext>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;
    let url = ctx
        .url_repo
        .find_by_id(id)
        .await
        .map_err(db_error)?
        .ok_or(AppError::NotFound)?;
    let checks = ctx.check_repo.list_for_url(id).await.map_err(db_error)?;

    let flashes = flash::take(&session).await;
    Ok(Html(render_url_page(&flashes, &url, &checks)))
}

async fn url_checks_store(
    State(ctx): State<AppContext>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    let id = parse_id(&id)?;

    match ctx.run_check.execute(id).await {
        Ok(_) => flash::push(&session, Flash::success(CHECK_SUCCEEDED)).await,
        Err(e) if e.is_check_failure() => {
            flash::push(&session, Flash::danger(e.user_message())).await
        }
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(&format!("/urls/{}", id)))
}

async fn not_found() -> PageError {
    PageError(AppError::NotFound)
}

// Non-numeric ids are unknown pages rather than bad requests.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_app::infrastructure::db::{create_connection, create_schema};
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_app() -> (Router, AppContext) {
        let db = create_connection("sqlite::memory:", 1).await.unwrap();
        create_schema(&db).await.unwrap();
        let ctx = AppContext::new(db, Duration::from_secs(5)).unwrap();
        (router(ctx.clone()), ctx)
    }

    fn form_post(uri: &str, body: String, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn encode(url: &str) -> String {
        format!("url={}", urlencoding::encode(url))
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    fn session_cookie(response: &Response) -> Option<String> {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn landing_page() {
        let (app, _) = test_app().await;

        let response = app.oneshot(get_with_cookie("/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#"action="/urls""#));
    }

    #[tokio::test]
    async fn empty_url_is_unprocessable() {
        let (app, ctx) = test_app().await;

        let response = app
            .oneshot(form_post("/urls", "url=".to_string(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response).await.contains("URL must not be empty"));
        assert!(ctx.url_repo.list_with_last_check().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn too_long_url_is_unprocessable() {
        let (app, _) = test_app().await;
        let long = format!("https://example.com/{}", "a".repeat(236));

        let response = app
            .oneshot(form_post("/urls", encode(&long), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response)
            .await
            .contains("URL must not exceed 255 characters"));
    }

    #[tokio::test]
    async fn encoded_host_over_limit_is_unprocessable() {
        let (app, ctx) = test_app().await;
        let long_host = format!("https://{}.com", ["пример"; 19].join("."));

        let response = app
            .oneshot(form_post("/urls", encode(&long_host), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response)
            .await
            .contains("URL must not exceed 255 characters"));
        assert!(ctx.url_repo.list_with_last_check().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_url_redirects_and_flashes() {
        let (app, _) = test_app().await;

        let response = app
            .clone()
            .oneshot(form_post("/urls", encode("https://Example.com/path?x=1"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let detail = location(&response).to_string();
        let cookie = session_cookie(&response).expect("session cookie");

        let page = app
            .clone()
            .oneshot(get_with_cookie(&detail, Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(page.status(), StatusCode::OK);
        let html = body_text(page).await;
        assert!(html.contains("https://example.com"));
        assert!(html.contains(URL_ADDED));

        let again = app
            .clone()
            .oneshot(form_post("/urls", encode("https://example.com/other"), None))
            .await
            .unwrap();
        assert_eq!(location(&again), detail);
        let cookie = session_cookie(&again).expect("session cookie");

        let page = app
            .oneshot(get_with_cookie(&detail, Some(&cookie)))
            .await
            .unwrap();
        let html = body_text(page).await;
        assert!(html.contains(URL_EXISTS));
        assert!(!html.contains(URL_ADDED));
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let (app, _) = test_app().await;

        for uri in ["/urls/999", "/urls/abc", "/nowhere"] {
            let response = app
                .clone()
                .oneshot(get_with_cookie(uri, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }

        let response = app
            .oneshot(form_post("/urls/999/checks", String::new(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn listing_shows_last_status() {
        let (app, ctx) = test_app().await;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let url_id = ctx.add_url.execute(&server.uri()).await.unwrap().id();

        let response = app
            .clone()
            .oneshot(form_post(&format!("/urls/{url_id}/checks"), String::new(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/urls/{url_id}"));

        let html = body_text(app.oneshot(get_with_cookie("/urls", None)).await.unwrap()).await;
        assert!(html.contains(&server.uri()));
        assert!(html.contains("<td>404</td>"));
    }

    #[tokio::test]
    async fn server_error_check_is_flashed_not_stored() {
        let (app, ctx) = test_app().await;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let url_id = ctx.add_url.execute(&server.uri()).await.unwrap().id();

        let response = app
            .clone()
            .oneshot(form_post(&format!("/urls/{url_id}/checks"), String::new(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookie = session_cookie(&response).expect("session cookie");

        let html = body_text(
            app.oneshot(get_with_cookie(&format!("/urls/{url_id}"), Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert!(html.contains(analyzer_errors::CHECK_FAILED_MESSAGE));
        assert!(html.contains("No checks yet."));
        assert!(ctx.check_repo.list_for_url(url_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_check_is_listed() {
        let (app, ctx) = test_app().await;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><head><title>Welcome</title></head><h1>Hi</h1></html>"),
            )
            .mount(&server)
            .await;
        let url_id = ctx.add_url.execute(&server.uri()).await.unwrap().id();

        let response = app
            .clone()
            .oneshot(form_post(&format!("/urls/{url_id}/checks"), String::new(), None))
            .await
            .unwrap();
        let cookie = session_cookie(&response).expect("session cookie");

        let html = body_text(
            app.oneshot(get_with_cookie(&format!("/urls/{url_id}"), Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert!(html.contains(CHECK_SUCCEEDED));
        assert!(html.contains("<td>200</td>"));
        assert!(html.contains("<td>Hi</td>"));
        assert!(html.contains("<td>Welcome</td>"));
    }
}
