use poem::{
    EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing, post,
};
use poem_openapi::OpenApiService;

use crate::api::relay::routes::{preflight, relay};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.status_api),
            "Chat Relay Backend",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at("/lucid", post(relay).options(preflight))
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(container.forward_chat_use_case)
            .data(config.origin_policy)
            .with(Tracing);
        println!("Relay running at http://{}", addr);
        println!("Relay endpoint at http://{}/lucid", addr);
        println!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
