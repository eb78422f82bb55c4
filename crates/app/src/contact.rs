use dioxus::prelude::*;
use shared_types::{ContactField, ContactFormState};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input, Label, Textarea,
};

use crate::client::SubmitClient;
use crate::config::ContactConfig;

/// Contact page: one card wrapping the three-field form.
///
/// All form state lives in a single [`ContactFormState`] signal; the handlers
/// below only translate DOM events into its transitions and hand the POST to
/// the [`SubmitClient`].
#[component]
pub fn ContactPage() -> Element {
    let config = use_context::<ContactConfig>();
    let client = use_hook(move || SubmitClient::new(&config));
    let mut state = use_signal(ContactFormState::new);

    let handle_submit = move |_: FormEvent| {
        // Enter-key submissions can still arrive while a request is in
        // flight; only the button is disabled.
        if state.read().is_submitting() {
            return;
        }
        if !state.write().begin_submit() {
            return;
        }

        let client = client.clone();
        let form = state.read().values().clone();
        spawn(async move {
            match client.send(&form).await {
                Ok(()) => state.write().submit_succeeded(),
                Err(e) => {
                    tracing::error!(error = %e, "contact submission failed");
                    state.write().submit_failed(e.user_message());
                }
            }
        });
    };

    let submitting = state.read().is_submitting();

    rsx! {
        div { class: "contact-page",
            Card { class: "contact-card",
                CardHeader {
                    CardTitle { "Send me a message" }
                    CardDescription {
                        "Feel free to get in touch with me with anything related to Web Development or you can just say hi. I will get back to you as soon as possible."
                    }
                }

                CardContent {
                    if let Some(err) = state.read().submit_error() {
                        div { class: "contact-error", "{err}" }
                    }

                    Form { onsubmit: handle_submit,
                        div { class: "contact-field",
                            Label { html_for: "name", "Name" }
                            Input {
                                id: "name",
                                name: "name",
                                placeholder: "Your name",
                                value: state.read().value(ContactField::Name).to_string(),
                                on_input: move |e: FormEvent| {
                                    state.write().edit(ContactField::Name, e.value())
                                },
                            }
                            if let Some(err) = state.read().field_error(ContactField::Name) {
                                span { class: "contact-field-error", "{err}" }
                            }
                        }

                        div { class: "contact-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                id: "email",
                                name: "email",
                                placeholder: "Email address",
                                value: state.read().value(ContactField::Email).to_string(),
                                on_input: move |e: FormEvent| {
                                    state.write().edit(ContactField::Email, e.value())
                                },
                            }
                            if let Some(err) = state.read().field_error(ContactField::Email) {
                                span { class: "contact-field-error", "{err}" }
                            }
                        }

                        div { class: "contact-field",
                            Label { html_for: "message", "Message" }
                            Textarea {
                                id: "message",
                                name: "message",
                                placeholder: "Message",
                                value: state.read().value(ContactField::Message).to_string(),
                                on_input: move |e: FormEvent| {
                                    state.write().edit(ContactField::Message, e.value())
                                },
                            }
                            if let Some(err) = state.read().field_error(ContactField::Message) {
                                span { class: "contact-field-error", "{err}" }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "contact-submit button",
                            disabled: submitting,
                            if submitting { "Submitting..." } else { "Submit" }
                        }
                    }
                }
            }
        }
    }
}
