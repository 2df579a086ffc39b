use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use course_library_api::{
    application::http::server::http_server::{router, state},
    args::Args,
    logging::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let state = state(args.clone()).await?;
    let router = router(state)?;

    info!("Course Library API listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
