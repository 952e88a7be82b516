use std::net::SocketAddr;

use crate::{config::Config, error, server};

pub async fn serve(config: Config, addr: Option<SocketAddr>) {
    if let Err(e) = server::start_api_server(config, addr).await {
        error!("Server stopped. Err: {}", e);
    }
}
