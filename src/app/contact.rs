use leptos::{either::Either, ev::SubmitEvent, prelude::*};
use log::{debug, warn};

use super::sections::SECTION_CLASS;
use crate::{
    config::SiteConfig,
    contact::{deliver, ContactForm, Field, FormStatus},
};

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default().contact;
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(s)) => s,
            Some(Err(e)) => {
                debug!("submission blocked: {e}");
                return;
            }
            None => return,
        };
        let status_reset = config.status_reset;
        set_timeout(
            move || {
                let outcome = deliver(&submission);
                if let Err(e) = &outcome {
                    warn!("{e}");
                }
                form.try_update(|f| f.finish(outcome));
                set_timeout(
                    move || {
                        form.try_update(|f| f.dismiss_status());
                    },
                    status_reset,
                );
            },
            config.send_delay,
        );
    };

    let status = move || form.with(|f| f.status());

    view! {
        <section id="contact" class=SECTION_CLASS>
            <div class="max-w-2xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-4">"Get In Touch"</h2>
                <p class="text-center text-muted mb-10">
                    "Have a project in mind or just want to say hi? My inbox is open."
                </p>
                <form class="space-y-6" on:submit=on_submit novalidate>
                    <FormField field=Field::Name label="Name" form />
                    <FormField field=Field::Email label="Email" input_type="email" form />
                    <FormField field=Field::Subject label="Subject (optional)" form />
                    <FormField field=Field::Message label="Message" multiline=true form />
                    <button
                        type="submit"
                        class="w-full py-3 rounded-md font-medium bg-primary text-white disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !form.with(|f| f.can_submit())
                    >
                        {move || {
                            if status() == FormStatus::Sending { "Sending..." } else { "Send Message" }
                        }}
                    </button>
                    {move || match status() {
                        FormStatus::Success => {
                            Some(
                                view! {
                                    <div class="p-4 rounded-md bg-green-500/10 text-green-400" role="status">
                                        "✅ Message sent successfully! I'll get back to you soon."
                                    </div>
                                }
                                    .into_any(),
                            )
                        }
                        FormStatus::Error => {
                            Some(
                                view! {
                                    <div class="p-4 rounded-md bg-red-500/10 text-red-400" role="alert">
                                        "❌ Something went wrong. Please try again later."
                                    </div>
                                }
                                    .into_any(),
                            )
                        }
                        FormStatus::Idle | FormStatus::Sending => None,
                    }}
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    form: RwSignal<ContactForm>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{}", label.split_whitespace().next().unwrap_or(label).to_lowercase());
    let value = move || form.with(|f| f.data().get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let input_class = "w-full px-4 py-3 rounded-md border border-muted bg-surface focus:outline-none focus:ring-2 focus:ring-primary";

    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium mb-2">
                {label}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=id.clone()
                            rows="5"
                            class=input_class
                            required=field.is_required()
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            type=input_type
                            class=input_class
                            required=field.is_required()
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || {
                form.with(|f| f.error(field))
                    .map(|e| {
                        view! {
                            <p class="mt-1 text-sm text-red-400" role="alert">
                                {e.to_string()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
