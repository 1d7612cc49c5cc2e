use leptos::prelude::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = content::profile();

    view! {
        <footer class="bg-primary-dark py-12">
            <div class="flex flex-col items-center max-w-6xl mx-auto px-6">
                <div class="font-serif text-2xl font-bold text-accent mb-6">
                    {profile.site_title}
                </div>
                <div class="flex gap-6 mb-8">
                    {content::social_links()
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="text-2xl text-grey-300 hover:text-accent hover:-translate-y-1 active:scale-90 transition-all"
                                >
                                    <i class=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row items-center gap-4 sm:gap-8 mb-8">
                    {content::nav_items()
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.href() class="text-grey-300 hover:text-accent transition-colors">
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="w-full h-px bg-grey-800 mb-8"></div>
                <p class="text-sm text-grey-500">
                    {format!(
                        "© {} {}'s {}. All rights reserved.",
                        content::copyright_year(),
                        profile.name,
                        profile.site_title,
                    )}
                </p>
            </div>
        </footer>
    }
}
