use leptos::prelude::*;
use leptos_router::components::*;

use crate::{
    reveal::{Motion, RevealSpec},
    routes,
};

use super::reveal::{RevealGroup, RevealItem};

const HEADER_REVEAL: RevealSpec = RevealSpec::heading();
const CTA_REVEAL: RevealSpec = RevealSpec::cards(0.8).with_motion(Motion::pop(0.9));

/// Title block at the top of every inner page. `highlight` is rendered in the
/// accent gradient after `title`.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(into)] highlight: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="relative py-20 md:py-28 overflow-hidden">
            <RevealGroup spec=HEADER_REVEAL class="container mx-auto px-4 text-center max-w-3xl">
                <RevealItem>
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">
                        {title} " " <span class="text-gradient">{highlight}</span>
                    </h1>
                </RevealItem>
                <RevealItem index=1>
                    <p class="text-lg md:text-xl text-muted-foreground mb-8">{subtitle}</p>
                </RevealItem>
                <RevealItem index=2>{children.map(|c| c())}</RevealItem>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn SectionHeading(
    #[prop(optional)] eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center max-w-2xl mx-auto mb-12">
            {eyebrow.map(|e| view! { <span class="badge mb-4">{e}</span> })}
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-muted-foreground">{s}</p> })}
        </div>
    }
}

/// Closing banner that sends the visitor to the contact page.
#[component]
pub fn CallToAction(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    link_text: &'static str,
) -> impl IntoView {
    view! {
        <section class="py-20">
            <RevealGroup spec=CTA_REVEAL class="container mx-auto px-4">
                <RevealItem class="glass rounded-3xl p-10 md:p-16 text-center max-w-4xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
                    <p class="text-lg text-muted-foreground mb-8 max-w-2xl mx-auto">{body}</p>
                    <A href=routes::CONTACT attr:class="btn btn-primary btn-lg">
                        {link_text}
                    </A>
                </RevealItem>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
    }
}
