use leptos::{html, prelude::*};

use super::motion::{use_mount_phase, use_section_reveal};
use crate::{
    content,
    state::{Stagger, Variants},
};

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, Stagger::HERO, "home");
    let indicator = use_mount_phase();
    let profile = content::profile();

    let view_work = move |_| {
        if let Some(el) = document().get_element_by_id("portfolio") {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <section
            id="home"
            node_ref=section_ref
            class="relative flex flex-col justify-center min-h-screen px-6 pt-24"
        >
            <div class="flex flex-col-reverse lg:flex-row items-center justify-between gap-12 max-w-6xl mx-auto w-full">
                <div
                    class="max-w-xl text-center lg:text-left"
                    style=move || reveal.get().container_style()
                >
                    <h1
                        class="font-serif text-4xl md:text-6xl text-accent mb-6"
                        style=move || reveal.get().style(&Variants::HERO_ITEM, 0)
                    >
                        "Hi, I'm "
                        {profile.name}
                        <br />
                        "I'm a "
                        {profile.role}
                    </h1>
                    <p
                        class="text-lg text-grey-300 mb-8"
                        style=move || reveal.get().style(&Variants::HERO_ITEM, 1)
                    >
                        {profile.tagline}
                    </p>
                    <button
                        class="px-8 py-3 rounded-md bg-secondary hover:bg-secondary-light text-grey-100 font-medium transition-colors"
                        style=move || reveal.get().style(&Variants::HERO_ITEM, 2)
                        on:click=view_work
                    >
                        "View My Work"
                    </button>
                </div>
                <div
                    class="w-72 h-72 md:w-96 md:h-96 rounded-full border-4 border-accent bg-primary-light shadow-lg"
                    style=move || reveal.get().style_after(&Variants::PORTRAIT, 0.0)
                ></div>
            </div>
            <div
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 text-sm text-grey-300"
                style=move || Variants::FADE.style(indicator.get(), 1.0)
            >
                <span>"Scroll Down"</span>
                <span class="animate-bounce">"↓"</span>
            </div>
        </section>
    }
}
