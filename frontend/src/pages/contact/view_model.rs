use super::repository::ContactRepository;
use super::types::{ContactField, ContactFormState, FormSubmission, SubmissionFailure};
use crate::api::ApiClient;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub form: RwSignal<ContactFormState>,
    pub submit_action: Action<FormSubmission, Result<(), SubmissionFailure>>,
}

impl ContactViewModel {
    pub fn set_field(&self, field: ContactField, value: String) {
        self.form.update(|state| state.set_field(field, value));
    }

    /// Dispatches at most one request at a time; calls while one is in flight are dropped.
    pub fn submit(&self) {
        let mut payload = None;
        self.form.update(|state| payload = state.begin_submit());
        match payload {
            Some(payload) => self.submit_action.dispatch(payload),
            None => log::debug!("contact submission already in flight; ignoring"),
        }
    }
}

/// Folds a completed dispatch into the form state. `None` means nothing has finished yet.
pub fn apply_result(
    form: RwSignal<ContactFormState>,
    result: Option<Result<(), SubmissionFailure>>,
) {
    if let Some(result) = result {
        form.update(|state| state.finish(result));
    }
}

pub fn use_contact_view_model() -> ContactViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ContactRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(ContactFormState::default());

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |payload: &FormSubmission| {
        let repo = repo_for_submit.clone();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| apply_result(form, submit_action.value().get()));

    ContactViewModel {
        form,
        submit_action,
    }
}
