//! Contact form
//!
//! Submission is simulated: after a short delay it always succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::contact::{
    ContactError, ContactFlow, FormEffect, FormMessage, MessageId, MessageKind, MessagePhase,
};
use crate::ui::config::use_page_config;

const SUBMIT_LABEL: &str = "Send message";

async fn sleep(ms: u32) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = ms;
}

/// Stand-in for a real backend call
async fn simulate_submission(delay_ms: u32) -> Result<(), ContactError> {
    sleep(delay_ms).await;
    Ok(())
}

/// Fade out and remove a message after its lifetime, unless it was replaced
async fn dismiss_later(
    flow: RwSignal<ContactFlow>,
    id: MessageId,
    lifetime_ms: u32,
    fade_ms: u32,
) {
    sleep(lifetime_ms).await;
    let still_current = flow
        .try_with_untracked(|flow| flow.current_message_id() == Some(id))
        .unwrap_or(false);
    if !still_current {
        return;
    }
    flow.maybe_update(|flow| flow.messages_mut().begin_fade(id));

    sleep(fade_ms).await;
    flow.maybe_update(|flow| flow.messages_mut().remove(id));
}

fn message_style(message: &FormMessage) -> String {
    let (background, color, border) = match message.kind {
        MessageKind::Success => ("rgba(34, 197, 94, 0.1)", "#22c55e", "rgba(34, 197, 94, 0.3)"),
        MessageKind::Error => ("rgba(239, 68, 68, 0.1)", "#ef4444", "rgba(239, 68, 68, 0.3)"),
    };
    let animation = match message.phase {
        MessagePhase::Visible => "fadeIn 0.3s ease",
        MessagePhase::FadingOut => "fadeOut 0.3s ease forwards",
    };
    format!(
        "margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.5rem; \
         background: {background}; color: {color}; border: 1px solid {border}; \
         animation: {animation};"
    )
}

/// Contact form component
#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_page_config();
    let submit_delay = config.submit_delay_ms;
    let lifetime = config.message_lifetime_ms;
    let fade = config.message_fade_ms;

    let flow = RwSignal::new(ContactFlow::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let email_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let address = email.get_untracked();
        let Some(started) = flow.try_update(|flow| flow.begin(&address)) else {
            return;
        };

        match started {
            Ok(ticket) => spawn_local(async move {
                let outcome = simulate_submission(submit_delay).await;
                let finished = flow.try_update(|flow| flow.finish(ticket, outcome));
                let Some((effect, id)) = finished else {
                    return;
                };
                if effect == FormEffect::Reset {
                    name.set(String::new());
                    email.set(String::new());
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                }
                dismiss_later(flow, id, lifetime, fade).await;
            }),
            Err(ContactError::InvalidEmail { .. }) => {
                if let Some(input) = email_ref.get_untracked() {
                    let _ = input.focus();
                }
                if let Some(id) = flow.with_untracked(ContactFlow::current_message_id) {
                    spawn_local(dismiss_later(flow, id, lifetime, fade));
                }
            }
            // A submission is already running
            Err(_) => {}
        }
    };

    view! {
        <form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit novalidate>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    autocomplete="name"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    node_ref=email_ref
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                prop:disabled=move || !flow.with(ContactFlow::submit_enabled)
            >
                {move || flow.with(ContactFlow::busy_label).unwrap_or(SUBMIT_LABEL)}
            </button>

            {move || {
                flow.with(|flow| flow.messages().current().cloned()).map(|message| {
                    view! {
                        <div class=message.class() style=message_style(&message) role="status">
                            {message.text.clone()}
                        </div>
                    }
                })
            }}
        </form>
    }
}
