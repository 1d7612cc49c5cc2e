mod certificates;
mod contact;
mod footer;
mod hero;
mod motion;
mod navbar;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use certificates::Certificates;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-primary text-grey-100 leading-normal overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let profile = content::profile();

    view! {
        <Title formatter=move |title| format!("{}'s {} - {title}", profile.name, profile.site_title) />
        <Meta name="description" content=profile.tagline />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Every section on one scrolling page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Navbar />
        <main>
            <Hero />
            <Certificates />
            <Portfolio />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center min-h-screen gap-6">
            <h1 class="font-serif text-5xl text-accent">"404"</h1>
            <p class="text-grey-300">"There is nothing here."</p>
            <a href="/" class="text-secondary-light hover:text-accent transition-colors">
                "Back to the portfolio"
            </a>
        </div>
    }
}
