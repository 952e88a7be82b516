use std::sync::Arc;

use reqwest::Client;

use crate::{config::Config, info, spotify::auth::TokenGateway, warning};

/// Prints the authorization URL, opening it in the default browser when
/// `open` is set.
pub fn auth_url(config: Config, open: bool) {
    let gateway = TokenGateway::new(Arc::new(config), Client::new());
    let url = gateway.get_auth_url();

    info!("Authorize Statify at:\n{}", url);

    if open && webbrowser::open(url.as_str()).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }
}
