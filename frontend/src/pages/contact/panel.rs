use super::types::{ContactField, SubmissionStatus};
use super::view_model::use_contact_view_model;
use leptos::*;
use leptos_router::A;

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";

#[component]
pub fn ContactPanel() -> impl IntoView {
    let vm = use_contact_view_model();
    let form = vm.form;

    let status = create_memo(move |_| form.with(|state| state.status()));
    let submitting = move || status.get() == SubmissionStatus::Submitting;
    let field_value = move |field: ContactField| form.with(|state| state.field(field).to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Get in touch"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Tell us a little about yourself and we'll reach out."
                    </p>
                </div>

                {move || match status.get() {
                    SubmissionStatus::Success => view! {
                        <div class="rounded-md bg-status-success-bg p-4 text-status-success-text" role="status">
                            <p class="text-sm font-medium">{super::types::SUCCESS_MESSAGE}</p>
                        </div>
                    }
                        .into_view(),
                    SubmissionStatus::Error => view! {
                        <div class="rounded-md bg-status-error-bg p-4 text-status-error-text" role="alert">
                            <p class="text-sm font-medium">{super::types::FAILURE_MESSAGE}</p>
                        </div>
                    }
                        .into_view(),
                    SubmissionStatus::Idle | SubmissionStatus::Submitting => view! {}.into_view(),
                }}

                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="contact-name" class="block text-sm font-medium text-fg">
                                "Name"
                            </label>
                            <input
                                id="contact-name"
                                name="name"
                                type="text"
                                autocomplete="name"
                                required
                                class=INPUT_CLASS
                                prop:value=move || field_value(ContactField::Name)
                                on:input=move |ev| vm.set_field(ContactField::Name, event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contact-email" class="block text-sm font-medium text-fg">
                                "Email"
                            </label>
                            <input
                                id="contact-email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                class=INPUT_CLASS
                                prop:value=move || field_value(ContactField::Email)
                                on:input=move |ev| vm.set_field(ContactField::Email, event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contact-message" class="block text-sm font-medium text-fg">
                                "Message"
                            </label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="4"
                                required
                                class=INPUT_CLASS
                                prop:value=move || field_value(ContactField::Message)
                                on:input=move |ev| vm.set_field(ContactField::Message, event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>

                    <div>
                        <button
                            type="submit"
                            disabled=submitting
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                        >
                            {move || if submitting() { "Sending..." } else { "Send message" }}
                        </button>
                    </div>

                    <div class="text-sm text-center">
                        <A href="/" class="font-medium text-link hover:text-link-hover">
                            "Back to home"
                        </A>
                    </div>
                </form>
            </div>
        </div>
    }
}
