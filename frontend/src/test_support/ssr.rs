use leptos::*;
use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view on the host at `/`. Meta and router contexts are always
/// provided so pages using `<Title>` or `<A>` render without extra setup.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        leptos_meta::provide_meta_context();
        provide_context(RouterIntegrationContext::new(ServerIntegration {
            path: "http://localhost/".to_string(),
        }));
        view! { <Router>{view()}</Router> }
            .into_view()
            .render_to_string()
            .to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}
