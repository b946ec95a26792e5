mod about;
mod background;
mod contact;
mod footer;
mod hero;
mod icons;
mod nav;
mod projects;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{SiteContent, SITE_CONTENT};
use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::Nav;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let content: &'static SiteContent = &SITE_CONTENT;

    view! {
        <Title text=content.site_name.as_str() />
        <Meta name="description" content=content.person.sub.as_str() />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=move || view! { <PortfolioPage content /> } />
            </Routes>
        </Router>
    }
}

/// The whole page, top to bottom.
#[component]
pub fn PortfolioPage(content: &'static SiteContent) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white text-foreground">
            <Nav
                site_name=content.site_name.as_str()
                full_name=content.person.name.as_str()
                links=content.nav.as_slice()
            />
            <Hero person=&content.person background=&content.background />
            <About about=&content.about />
            <Projects projects=content.projects.as_slice() />
            <Contact contact=&content.contact />
            <Footer name=content.person.name.as_str() note=content.footer_note.as_str() />
        </div>
    }
}
