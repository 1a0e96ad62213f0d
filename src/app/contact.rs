use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::prelude::*;

use super::sections::{paragraph_view, AnimatedSection};
use crate::{
    contact::{ContactFormController, Field, LogSink, SubmissionSink, SubmitError, RESET_DELAY},
    content::{Paragraph, PersonalInfo},
    motion::SECTION_CHILDREN,
    scroll::Section,
};

/// Submission sink shared through context, so the form can be pointed at a
/// real backend from `App` without touching the component.
#[derive(Clone)]
pub struct ContactSink(pub Arc<dyn SubmissionSink>);

impl Default for ContactSink {
    fn default() -> Self {
        Self(Arc::new(LogSink))
    }
}

/// Pending form reset. Restarting clears the previous timeout first.
#[derive(Default)]
struct ResetTimer(Option<TimeoutHandle>);

impl ResetTimer {
    fn restart(&mut self, delay: Duration, cb: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => self.0 = Some(handle),
            Err(e) => log::warn!("couldn't schedule form reset: {e:?}"),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

#[component]
pub fn ContactSection(personal: PersonalInfo, intro: Paragraph) -> impl IntoView {
    let form = RwSignal::new(ContactFormController::new());
    let (sink_error, set_sink_error) = signal(None::<String>);
    let sink = use_context::<ContactSink>().unwrap_or_default();

    let timer = Arc::new(Mutex::new(ResetTimer::default()));
    on_cleanup({
        let timer = timer.clone();
        move || {
            timer
                .lock()
                .expect("should be able to lock reset timer")
                .cancel()
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let res = form.try_update(|f| f.submit(sink.0.as_ref()));
        match res {
            Some(Ok(ticket)) => {
                set_sink_error(None);
                timer
                    .lock()
                    .expect("should be able to lock reset timer")
                    .restart(RESET_DELAY, move || {
                        form.try_update(|f| f.reset(ticket));
                    });
            }
            Some(Err(SubmitError::MissingField(field))) => {
                // the browser's required check normally stops this first
                log::debug!("contact form missing {field:?}");
            }
            Some(Err(e @ SubmitError::Sink(_))) => {
                log::warn!("{e}");
                set_sink_error(Some(e.to_string()));
            }
            None => {}
        }
    };

    let value = move |field: Field| move || form.with(|f| f.field(field).to_string());

    view! {
        <AnimatedSection section=Section::Contact title="Get In Touch">
            <div class="contact-wrapper">
                <div class="contact-info">
                    <p class="contact-intro reveal">{paragraph_view(intro, "highlight-accent")}</p>
                    <div class="contact-links">
                        <a class="reveal" style=SECTION_CHILDREN.style(0, 1) href=personal.mailto()>
                            <span class="contact-icon">
                                <i class="extra-email"></i>
                            </span>
                            {personal.email.clone()}
                        </a>
                        <a class="reveal" style=SECTION_CHILDREN.style(0, 2) href=personal.tel()>
                            <span class="contact-icon">
                                <i class="extra-phone"></i>
                            </span>
                            {personal.phone.clone()}
                        </a>
                        <a
                            class="reveal"
                            style=SECTION_CHILDREN.style(0, 3)
                            href=personal.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="contact-icon">
                                <i class="devicon-linkedin-plain"></i>
                            </span>
                            "LinkedIn Profile"
                        </a>
                    </div>
                </div>
                <form class="contact-form reveal" on:submit=on_submit>
                    <div class="form-row">
                        <input
                            type="text"
                            placeholder=Field::Name.placeholder()
                            required=true
                            prop:value=value(Field::Name)
                            on:input=move |ev| {
                                form.update(|f| f.set_field(Field::Name, event_target_value(&ev)))
                            }
                        />
                        <input
                            type="email"
                            placeholder=Field::Email.placeholder()
                            required=true
                            prop:value=value(Field::Email)
                            on:input=move |ev| {
                                form.update(|f| f.set_field(Field::Email, event_target_value(&ev)))
                            }
                        />
                    </div>
                    <textarea
                        placeholder=Field::Message.placeholder()
                        rows="5"
                        required=true
                        prop:value=value(Field::Message)
                        on:input=move |ev| {
                            form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                    <button type="submit" class="submit-btn">
                        <span>"Send Message"</span>
                        " ➤"
                    </button>
                    <Show when=move || form.with(ContactFormController::is_submitted)>
                        <p class="success-msg">"✓ Message sent successfully!"</p>
                    </Show>
                    {move || sink_error.get().map(|e| view! { <p class="error-msg">{e}</p> })}
                </form>
            </div>
        </AnimatedSection>
    }
}
