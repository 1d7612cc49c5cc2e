use leptos::{either::Either, html, prelude::*};

use super::motion::{use_section_reveal, SectionHeading};
use crate::{
    content,
    state::{ContactField, ContactForm, LogSink, Stagger, Variants},
};

const CONFIRMATION: &str = "Message sent successfully!";

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, Stagger::SECTION, "contact");
    let (form, set_form) = signal(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(|f| f.is_complete()) {
            log::debug!("contact form submitted with empty fields");
        }
        if set_form.try_update(|f| f.submit_to(&LogSink)).is_none() {
            return;
        }
        if let Err(e) = window().alert_with_message(CONFIRMATION) {
            log::warn!("could not show confirmation: {e:?}");
        }
    };

    // every control shares this; the target's `name` picks the field
    let on_input = move |ev: leptos::ev::Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        let value = event_target_value(&ev);
        if let Some(Err(e)) = set_form.try_update(|f| f.set_named_field(&name, value)) {
            log::warn!("ignoring input: {e}");
        }
    };

    let input_class = "w-full px-4 py-3 rounded-md border border-grey-600 bg-primary-dark text-grey-100 focus:outline-none focus:border-secondary transition-colors";

    view! {
        <section id="contact" node_ref=section_ref class="bg-primary-light py-12">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    reveal
                    title="Contact"
                    description="Have a project in mind or want to discuss potential opportunities? Feel free to reach out through the form below or via the provided contact information."
                />
                <div
                    class="grid grid-cols-1 md:grid-cols-2 gap-12"
                    style=move || reveal.get().container_style()
                >
                    <div class="flex flex-col gap-8">
                        {content::contact_details()
                            .iter()
                            .enumerate()
                            .map(|(i, detail)| {
                                view! {
                                    <div
                                        class="flex items-start gap-4"
                                        style=move || reveal.get().style(&Variants::ITEM, i)
                                    >
                                        <div class="flex items-center justify-center w-12 h-12 rounded-full bg-secondary text-accent">
                                            <span aria-hidden="true">{detail.glyph}</span>
                                        </div>
                                        <div>
                                            <h3 class="text-lg text-accent mb-1">{detail.label}</h3>
                                            <p class="text-grey-300">{detail.value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <form class="flex flex-col gap-6" on:submit=on_submit>
                        {ContactField::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(i, field)| {
                                let value = move || form.with(|f| f.get(field).to_string());
                                let control = if field.is_multiline() {
                                    Either::Left(
                                        view! {
                                            <textarea
                                                id=field.as_str()
                                                name=field.as_str()
                                                rows="6"
                                                required
                                                class=input_class
                                                prop:value=value
                                                on:input=on_input
                                            ></textarea>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <input
                                                type=field.input_type()
                                                id=field.as_str()
                                                name=field.as_str()
                                                required
                                                class=input_class
                                                prop:value=value
                                                on:input=on_input
                                            />
                                        },
                                    )
                                };
                                view! {
                                    <div style=move || reveal.get().style(&Variants::ITEM, i)>
                                        <label for=field.as_str() class="block mb-2 text-accent">
                                            {field.label()}
                                        </label>
                                        {control}
                                    </div>
                                }
                            })
                            .collect_view()}
                        <button
                            type="submit"
                            class="self-start px-8 py-3 rounded-md bg-secondary hover:bg-secondary-light text-grey-100 font-medium transition-colors hover:scale-105 active:scale-95"
                            style=move || reveal.get().style(&Variants::ITEM, ContactField::ALL.len())
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
