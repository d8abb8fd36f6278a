mod about;
mod chat;
mod contact;
mod footer;
mod header;
mod homepage;
mod projects;
mod reveal;
mod reviews;
mod sections;
mod services;
mod skills;
mod theme;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::{routes, settings::Settings};

use about::AboutPage;
use chat::ChatWidget;
use contact::ContactPage;
use footer::Footer;
use header::Navigation;
use homepage::HomePage;
use projects::{ProjectDetailPage, ProjectsPage};
use reviews::ReviewsPage;
use services::{ServiceDetailPage, ServicesPage};
use skills::SkillsPage;
use theme::ThemeProvider;
use toast::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let settings = Settings::default();
    provide_context(settings);
    provide_toasts(settings.toast_duration_ms);

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <ThemeProvider>
            <Router>
                <ScrollToTop />
                <div class="flex flex-col min-h-screen">
                    <Navigation />
                    <main class="flex-grow pt-20">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about") view=AboutPage />
                            <Route path=path!("/skills") view=SkillsPage />
                            <Route path=path!("/services") view=ServicesPage />
                            <Route path=path!("/services/:slug") view=ServiceDetailPage />
                            <Route path=path!("/projects") view=ProjectsPage />
                            <Route path=path!("/projects/:id") view=ProjectDetailPage />
                            <Route path=path!("/reviews") view=ReviewsPage />
                            <Route path=path!("/contact") view=ContactPage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
                <ChatWidget />
                <Toaster />
            </Router>
        </ThemeProvider>
    }
}

/// Site knobs from context, or the defaults when rendered outside [`App`].
pub(crate) fn use_settings() -> Settings {
    use_context::<Settings>().unwrap_or_default()
}

/// Marks the current server response as a 404. No-op in the browser.
pub(crate) fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::watch(
        move || pathname.get(),
        |_, _, _| window().scroll_to_with_x_and_y(0.0, 0.0),
        false,
    );
}

#[component]
fn NotFound() -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Page not found" />
        <section class="container mx-auto px-4 py-32 text-center">
            <h1 class="text-6xl font-bold mb-4">"404"</h1>
            <p class="text-xl text-muted-foreground mb-8">"Page not found."</p>
            <A href=routes::HOME attr:class="btn btn-primary">
                "Return home"
            </A>
        </section>
    }
}
