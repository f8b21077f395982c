#![allow(non_snake_case)]

#[cfg(any(feature = "ssr", test))]
#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
mod config {
    use serde::Deserialize;

    pub const DEFAULT_PATH: &str = "config.example.toml";

    #[derive(Deserialize, Clone, Debug, Default, PartialEq)]
    #[serde(default)]
    pub struct Config {
        pub server: ServerConfig,
        pub backend: BackendConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    #[serde(default)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    /// REST service that `/api/*` is forwarded to.
    #[derive(Deserialize, Clone, Debug, PartialEq)]
    #[serde(default)]
    pub struct BackendConfig {
        pub url: String,
    }

    impl Default for BackendConfig {
        fn default() -> Self {
            Self {
                url: "http://127.0.0.1:8080".into(),
            }
        }
    }

    impl ServerConfig {
        pub fn address(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
            format!("{}:{}", self.bind, self.port).parse()
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    /// Value following `--config`, or the example file.
    pub fn path_from_args(args: &[String]) -> String {
        args.iter()
            .position(|a| a == "--config")
            .and_then(|idx| args.get(idx + 1))
            .cloned()
            .unwrap_or_else(|| DEFAULT_PATH.into())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn partial_file_keeps_defaults() {
            let config: Config = toml::from_str("[backend]\nurl = \"http://docs.internal:9000\"\n").unwrap();
            assert_eq!(config.backend.url, "http://docs.internal:9000");
            assert_eq!(config.server, ServerConfig::default());
        }

        #[test]
        fn server_address_parses() {
            let server = ServerConfig {
                bind: "127.0.0.1".into(),
                port: 4000,
            };
            assert_eq!(server.address().unwrap().port(), 4000);
            assert!(ServerConfig {
                bind: "not an ip".into(),
                port: 1
            }
            .address()
            .is_err());
        }

        #[test]
        fn config_flag_is_optional() {
            let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            assert_eq!(path_from_args(&args(&["console"])), DEFAULT_PATH);
            assert_eq!(path_from_args(&args(&["console", "--config"])), DEFAULT_PATH);
            assert_eq!(
                path_from_args(&args(&["console", "--config", "prod.toml"])),
                "prod.toml"
            );
        }

        #[test]
        fn missing_file_falls_back() {
            assert_eq!(load("/nonexistent/locker.toml"), Config::default());
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use locker_api::AppState;
    use locker_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = config::path_from_args(&args);

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{} backend={}",
        appConfig.server.bind,
        appConfig.server.port,
        appConfig.backend.url
    );

    let appState = AppState::new(&appConfig.backend.url)
        .unwrap_or_else(|e| panic!("invalid backend url {}: {e}", appConfig.backend.url));

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = appConfig.server.address().unwrap_or_else(|e| {
        tracing::warn!(
            "invalid bind address {}:{}: {e}, using {}",
            appConfig.server.bind,
            appConfig.server.port,
            leptosOptions.site_addr
        );
        leptosOptions.site_addr
    });

    let routes = generate_route_list(App);

    // API routes carry their own AppState; pages use LeptosOptions.
    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(locker_api::api_router(appState))
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
