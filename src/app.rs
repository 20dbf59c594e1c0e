/*
 * Responsibility
 * - tracing / panic hook setup
 * - Load Config → build dependencies → assemble the Router
 * - Apply middleware (Basic auth on /secure, HTTP layers on everything)
 * - Start with axum::serve()
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware::http::{self as http_layers, HttpLimits};
use crate::services::auth::build_basic_auth_verifier;
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG wins when set, e.g.
    // RUST_LOG=info,basic_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it gets noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting basic gate in {:?} mode on {} (user {:?}, realm {:?})",
        config.app_env,
        config.addr,
        config.basic_auth_username,
        config.basic_auth_realm
    );

    let state = build_state(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    let auth = build_basic_auth_verifier(config)?;
    Ok(AppState::new(auth))
}

fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(api::routes(state.clone()))
        .with_state(state);

    http_layers::apply(router, HttpLimits::default())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use base64::{Engine, engine::general_purpose::STANDARD};
    use tower::ServiceExt;

    use super::*;
    use crate::services::auth::{BasicAuthVerifier, Credentials};

    fn app(username: &str, password: &str) -> Router {
        let verifier =
            BasicAuthVerifier::new(Credentials::new(username, password), "Access to the site")
                .unwrap();
        build_router(AppState::new(Arc::new(verifier)))
    }

    async fn get(app: Router, uri: &str, authorization: Option<&str>) -> Response {
        let mut req = Request::builder().uri(uri);
        if let Some(value) = authorization {
            req = req.header(header::AUTHORIZATION, value);
        }
        app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
    }

    async fn body_text(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn basic(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    async fn assert_challenged(res: Response) {
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers()[header::WWW_AUTHENTICATE],
            "Basic realm=\"Access to the site\""
        );
        assert_eq!(body_text(res).await, "Unauthorized");
    }

    #[tokio::test]
    async fn secure_without_credentials_is_challenged() {
        assert_challenged(get(app("foo", "foo"), "/secure", None).await).await;
    }

    #[tokio::test]
    async fn secure_with_valid_credentials_welcomes() {
        let res = get(app("foo", "foo"), "/secure", Some(&basic("foo:foo"))).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "Welcome, authorized user!");
    }

    #[tokio::test]
    async fn secure_with_wrong_password_is_challenged() {
        assert_challenged(get(app("foo", "foo"), "/secure", Some(&basic("foo:wrong"))).await)
            .await;
    }

    #[tokio::test]
    async fn secure_with_wrong_username_is_challenged() {
        assert_challenged(get(app("foo", "foo"), "/secure", Some(&basic("wrong:foo"))).await)
            .await;
    }

    #[tokio::test]
    async fn malformed_header_gets_the_same_401() {
        for value in ["Basic %%%", "Bearer token", "Basic ", "Basic Zm9vZm9v"] {
            assert_challenged(get(app("foo", "foo"), "/secure", Some(value)).await).await;
        }
    }

    #[tokio::test]
    async fn password_with_colon_is_accepted() {
        let res = get(app("foo", "pa:ss"), "/secure", Some(&basic("foo:pa:ss"))).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found_not_challenged() {
        let res = get(app("foo", "foo"), "/elsewhere", None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
