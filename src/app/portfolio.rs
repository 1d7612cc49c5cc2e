use leptos::{html, prelude::*};

use super::motion::{use_mount_phase, use_section_reveal, SectionHeading};
use crate::{
    content::{Project, EXTERNAL_LINK_GLYPH, PROJECT_DETAIL_BLURB},
    state::{ModalClick, ProjectGallery, Stagger, Variants},
};

#[component]
pub fn Portfolio() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, Stagger::SECTION, "portfolio");
    let (gallery, set_gallery) = signal(ProjectGallery::new());
    // only remount the modal when the selection itself changes
    let selected = Memo::new(move |_| gallery.with(|g| g.selected()));

    let open = move |id: u32| {
        set_gallery.update(|g| {
            if let Err(e) = g.select_project(id) {
                log::warn!("ignoring project click: {e}");
            }
        })
    };

    view! {
        <section id="portfolio" node_ref=section_ref class="py-12">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    reveal
                    title="Portfolio"
                    description="Here are some of my recent projects. Each project is built with attention to detail, focusing on both functionality and user experience."
                />
                <div
                    class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8"
                    style=move || reveal.get().container_style()
                >
                    {gallery
                        .get_untracked()
                        .projects()
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div
                                    class="cursor-pointer rounded-2xl overflow-hidden bg-primary-light shadow-md hover:scale-[1.03] active:scale-[0.98] transition-transform"
                                    style=move || reveal.get().style(&Variants::ITEM, i)
                                    on:click=move |_| open(project.id)
                                >
                                    <div class="project-image h-48"></div>
                                    <div class="p-6">
                                        <ProjectTitle project />
                                        <ProjectSummary project />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selected.get().map(|project| view! { <ProjectModal project set_gallery /> })
            }}
        </section>
    }
}

#[component]
fn ProjectTitle(project: &'static Project) -> impl IntoView {
    view! { <h3 class="font-serif text-xl text-accent mb-2">{project.title}</h3> }
}

/// Description, tags and links. Shared by the cards and the modal.
#[component]
fn ProjectSummary(
    project: &'static Project,
    #[prop(optional)] detail: Option<&'static str>,
) -> impl IntoView {
    view! {
        <p class="text-grey-300 mb-4">
            {project.description}
            {detail
                .map(|d| {
                    view! {
                        <br />
                        <br />
                        {d}
                    }
                })}
        </p>
        <div class="flex flex-wrap gap-2 mb-6">
            {project
                .tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="px-3 py-1 rounded-full text-xs bg-primary-dark text-accent">
                            {*tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
        <div class="flex gap-6">
            // links must not open the modal when clicked on a card
            <a
                href=project.demo_link
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 text-accent hover:text-secondary-light transition-colors"
                on:click=move |ev| ev.stop_propagation()
            >
                <span aria-hidden="true">{EXTERNAL_LINK_GLYPH}</span>
                "Live Demo"
            </a>
            <a
                href=project.code_link
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 text-accent hover:text-secondary-light transition-colors"
                on:click=move |ev| ev.stop_propagation()
            >
                <i class="devicon-github-plain" />
                "View Code"
            </a>
        </div>
    }
}

#[component]
fn ProjectModal(
    project: &'static Project,
    set_gallery: WriteSignal<ProjectGallery>,
) -> impl IntoView {
    let phase = use_mount_phase();
    let click = move |target: ModalClick| {
        set_gallery.update(|g| {
            g.handle_modal_click(target);
        })
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-6 bg-black/80"
            style=move || Variants::MODAL_OVERLAY.style(phase.get(), 0.0)
            on:click=move |_| click(ModalClick::Background)
        >
            <div
                role="dialog"
                aria-modal="true"
                class="relative w-full max-w-3xl max-h-[90vh] overflow-y-auto p-8 rounded-2xl bg-primary shadow-lg"
                style=move || Variants::MODAL_CONTENT.style(phase.get(), 0.0)
                on:click=move |ev| {
                    ev.stop_propagation();
                    click(ModalClick::Content);
                }
            >
                <button
                    class="absolute top-4 right-4 text-2xl text-grey-300 hover:text-accent"
                    aria-label="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        click(ModalClick::CloseButton);
                    }
                >
                    "✕"
                </button>
                <ProjectTitle project />
                <div class="project-image h-72 my-6 rounded-lg"></div>
                <ProjectSummary project detail=PROJECT_DETAIL_BLURB />
            </div>
        </div>
    }
}
