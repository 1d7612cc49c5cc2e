use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{
    content,
    state::{NavbarMode, NavbarState},
};

#[component]
pub fn Navbar() -> impl IntoView {
    let (nav, set_nav) = signal(NavbarState::default());
    let (_, scroll_y) = use_window_scroll();

    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| set_nav.update(|n| n.on_scroll(*y)),
        true,
    );

    let nav_class = move || {
        let base = "fixed top-0 inset-x-0 z-40 flex items-center justify-between px-6 py-4 transition-all duration-300";
        match nav.get().mode() {
            NavbarMode::Solid => format!("{base} bg-primary shadow-sm"),
            NavbarMode::Transparent => format!("{base} bg-transparent"),
        }
    };
    let links_class = move || {
        if nav.get().menu_open() {
            "flex flex-col absolute top-full inset-x-0 gap-4 p-6 bg-primary-dark md:static md:flex-row md:p-0 md:bg-transparent"
        } else {
            "hidden md:flex md:flex-row gap-8"
        }
    };

    view! {
        <nav class=nav_class>
            <a href="#home" class="font-serif text-2xl font-bold text-accent">
                {content::profile().site_title}
            </a>
            <button
                class="md:hidden text-2xl text-accent"
                aria-label="Toggle navigation"
                aria-expanded=move || nav.get().menu_open().to_string()
                on:click=move |_| set_nav.update(|n| n.toggle_menu())
            >
                {move || if nav.get().menu_open() { "✕" } else { "☰" }}
            </button>
            <div class=links_class>
                {content::nav_items()
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href()
                                class="relative text-grey-100 hover:text-accent transition-colors"
                                on:click=move |_| set_nav.update(|n| n.on_nav_link())
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
