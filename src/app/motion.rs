use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::state::{Phase, Reveal, RevealController, Stagger, Variants, VisibilityTracker};

/// Reveal state of a section, driven by how much of it is in the viewport.
///
/// The observer is created against the section's node and dropped with the
/// component's owner, so nothing outlives the section.
pub fn use_section_reveal(
    target: NodeRef<html::Section>,
    stagger: Stagger,
    name: &'static str,
) -> Signal<Reveal> {
    let (reveal, set_reveal) = signal(Reveal::initial(stagger));
    let state = StoredValue::new((VisibilityTracker::default(), RevealController::new(stagger)));
    let threshold = state.with_value(|(tracker, _)| tracker.threshold());

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let Some(entry) = entries.last() else {
                return;
            };
            let mut next = None;
            state.update_value(|(tracker, controller)| {
                next = tracker
                    .observe(entry.is_intersecting(), entry.intersection_ratio())
                    .and_then(|visible| controller.set_visible(visible));
            });
            if let Some(r) = next {
                log::debug!("section {name}: {:?} -> {:?}", r.from, r.to);
                set_reveal.set(r);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    reveal.into()
}

/// Phase for elements that animate in once after mounting, e.g. the modal.
///
/// Waits two frames so the hidden style is painted before switching.
pub fn use_mount_phase() -> Signal<Phase> {
    let (phase, set_phase) = signal(Phase::Hidden);
    Effect::new(move |_| {
        request_animation_frame(move || {
            request_animation_frame(move || set_phase.set(Phase::Visible));
        });
    });
    phase.into()
}

/// Title and blurb at the top of every content section.
#[component]
pub fn SectionHeading(
    reveal: Signal<Reveal>,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <h2
            class="relative text-center text-5xl font-serif text-accent mb-8 after:content-[''] after:absolute after:-bottom-2 after:left-1/2 after:-translate-x-1/2 after:w-20 after:h-[3px] after:bg-secondary"
            style=move || reveal.get().style_after(&Variants::HEADING, 0.0)
        >
            {title}
        </h2>
        <p
            class="text-center max-w-2xl mx-auto mb-12 text-grey-300"
            style=move || reveal.get().style_after(&Variants::HEADING, 0.2)
        >
            {description}
        </p>
    }
}
