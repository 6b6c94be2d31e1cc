use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::pages::{contact::ContactPage, home::HomePage};

pub const ROUTE_PATHS: &[&str] = &["/", "/contact"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/contact" view=ContactPage/>
            </Routes>
        </Router>
    }
}
