use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_router::components::*;

use crate::{
    content::CATALOG,
    reveal::{Easing, Motion, RevealSpec},
    routes::{self, NAV_ITEMS},
};

use super::reveal::{RevealGroup, RevealItem};

const FOOTER_REVEAL: RevealSpec = RevealSpec::cards(0.9);
const SOCIAL_REVEAL: RevealSpec = RevealSpec::cards(0.9)
    .with_motion(Motion::pop(0.0))
    .with_duration(500)
    .with_delay(600)
    .with_stagger(100)
    .with_easing(Easing::BackOut);

/// Year the site was built, so server and client render the same copyright.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[component]
pub fn Footer() -> impl IntoView {
    let socials = &CATALOG.site.socials;
    let services = &CATALOG.services;

    view! {
        <footer class="border-t border-border/40 mt-16">
            <RevealGroup spec=FOOTER_REVEAL class="container mx-auto px-4 py-12">
                <RevealItem class="glass rounded-2xl p-8 mb-12 flex flex-col md:flex-row items-center justify-between gap-6">
                    <div>
                        <h3 class="text-2xl font-bold mb-2">"Ready to start your project?"</h3>
                        <p class="text-muted-foreground">
                            "Get in touch today and let's create something amazing together."
                        </p>
                    </div>
                    <A href=routes::CONTACT attr:class="btn btn-primary">
                        "Contact Me →"
                    </A>
                </RevealItem>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <RevealItem index=1>
                        <h3 class="text-xl font-bold mb-4 text-gradient">"Portfolio"</h3>
                        <p class="text-muted-foreground mb-4">
                            "Creating modern and innovative digital experiences with a focus on performance and aesthetics."
                        </p>
                        <RevealGroup spec=SOCIAL_REVEAL class="flex gap-3">
                            {socials
                                .iter()
                                .enumerate()
                                .map(|(i, social)| {
                                    view! {
                                        <RevealItem index=i>
                                            <a
                                                href=social.url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.name.clone()
                                                class="text-muted-foreground hover:text-primary"
                                            >
                                                {social.name.clone()}
                                            </a>
                                        </RevealItem>
                                    }
                                })
                                .collect_view()}
                        </RevealGroup>
                    </RevealItem>
                    <RevealItem index=2>
                        <h4 class="font-semibold mb-4">"Navigation"</h4>
                        <ul class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <A href=item.path attr:class="footer-link">
                                                "→ "
                                                {item.name}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </RevealItem>
                    <RevealItem index=3>
                        <h4 class="font-semibold mb-4">"Services"</h4>
                        <ul class="space-y-2">
                            {services
                                .iter()
                                .take(4)
                                .map(|service| {
                                    view! {
                                        <li>
                                            <A href=service.path() attr:class="footer-link">
                                                "→ "
                                                {service.title.clone()}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </RevealItem>
                    <RevealItem index=4>
                        <h4 class="font-semibold mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-muted-foreground">
                            {CATALOG
                                .site
                                .contact_channels
                                .iter()
                                .take(2)
                                .map(|channel| {
                                    view! {
                                        <li>
                                            <a href=channel.link.clone() class="hover:text-primary">
                                                {channel.value.clone()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </RevealItem>
                </div>
                <p class="mt-12 pt-6 border-t border-border/40 text-center text-sm text-muted-foreground">
                    {format!("© {} Portfolio. All rights reserved.", copyright_year())}
                </p>
            </RevealGroup>
        </footer>
    }
}
