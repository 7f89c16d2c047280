use crate::api::ApiClient;
use crate::app::App;

/// Load the category taxonomy once, before the event loop starts.
/// A failure leaves the category choices empty; the form stays usable
/// without them, so this is a warning rather than a blocking error.
pub async fn initialize_app_state(app: &mut App, client: &ApiClient) {
    match client.categories().await {
        Ok(taxonomy) => app.set_taxonomy(taxonomy),
        Err(e) => eprintln!("Warning: could not load categories: {:#}", e),
    }
}
