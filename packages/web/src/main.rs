use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Login, Projects, Register, Todos, Users};

mod views;

#[cfg(feature = "server")]
mod proxy;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/todo")]
    Todos {},
    #[route("/admin/users")]
    Users {},
    #[route("/projects")]
    Projects {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Proxy routes first, then the application itself
    let router = axum::Router::new()
        .nest("/api", proxy::router())
        .serve_dioxus_application(ServeConfig::new(), App);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the todo list.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Todos {});
    rsx! {}
}
