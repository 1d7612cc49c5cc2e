use leptos::{html, prelude::*};

use super::motion::{use_section_reveal, SectionHeading};
use crate::{
    content,
    state::{Stagger, Variants},
};

#[component]
pub fn Certificates() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, Stagger::SECTION, "certificates");

    view! {
        <section id="certificates" node_ref=section_ref class="bg-primary-light py-12">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    reveal
                    title="Certificates"
                    description="Professional certifications and achievements that demonstrate my expertise and commitment to continuous learning."
                />
                <div
                    class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8"
                    style=move || reveal.get().container_style()
                >
                    {content::certificates()
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <div
                                    class="flex flex-col p-8 rounded-2xl bg-primary shadow-md hover:-translate-y-1 transition-transform"
                                    style=move || reveal.get().style(&Variants::ITEM, i)
                                >
                                    <div class="flex items-center justify-center w-12 h-12 mb-6 rounded-full bg-secondary text-accent">
                                        <span aria-hidden="true">{content::AWARD_GLYPH}</span>
                                    </div>
                                    <h3 class="font-serif text-xl text-accent mb-2">{cert.title}</h3>
                                    <p class="text-secondary-light font-medium mb-1">{cert.issuer}</p>
                                    <p class="text-sm text-grey-400 mb-4">{cert.date}</p>
                                    <p class="text-grey-300 mb-6 flex-grow">{cert.description}</p>
                                    <a
                                        href=cert.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 text-accent hover:text-secondary-light transition-colors"
                                    >
                                        "View Certificate"
                                        <span aria-hidden="true">{content::EXTERNAL_LINK_GLYPH}</span>
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
