use leptos::*;

mod panel;
mod repository;
pub mod types;
mod view_model;

pub use panel::ContactPanel;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <ContactPanel /> }
}
