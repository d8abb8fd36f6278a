use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use crate::{
    content::{Service, ServiceRoute, CATALOG},
    reveal::{Motion, RevealSpec},
    routes,
};

use super::{
    reveal::{RevealGroup, RevealItem},
    sections::{CallToAction, PageHeader, SectionHeading, TagList},
};

const CARDS_REVEAL: RevealSpec = RevealSpec::cards(0.8).with_stagger(150);
const PROCESS_REVEAL: RevealSpec = RevealSpec::cards(0.75)
    .with_motion(Motion::fade_left(50.0))
    .with_stagger(200);

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services" />
        <PageHeader
            title="My"
            highlight="Services"
            subtitle="Specialized solutions designed to bring your vision to life and help your business thrive in the digital landscape."
        />
        <section class="container mx-auto px-4 py-8">
            <RevealGroup spec=CARDS_REVEAL class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {CATALOG
                    .services
                    .iter()
                    .enumerate()
                    .map(|(i, service)| {
                        view! {
                            <RevealItem index=i class="h-full">
                                <A
                                    href=service.path()
                                    attr:class="card h-full p-6 flex flex-col hover:border-primary/50 transition-colors"
                                >
                                    <ServiceSummary service />
                                </A>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-20">
            <SectionHeading
                title="My Process"
                subtitle="A systematic approach ensures every project is delivered with excellence and meets your objectives"
            />
            <RevealGroup spec=PROCESS_REVEAL class="relative max-w-4xl mx-auto space-y-8">
                {CATALOG
                    .site
                    .process_steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <RevealItem index=i class="glass rounded-2xl p-6 flex gap-6 items-start">
                                <span class="step-number">{step.number.clone()}</span>
                                <div>
                                    <h3 class="text-xl font-bold mb-2">{step.title.clone()}</h3>
                                    <p class="text-muted-foreground">{step.description.clone()}</p>
                                </div>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <CallToAction
            title="Ready to start your project?"
            body="Contact me today to discuss your needs and discover how my services can help you achieve your goals."
            link_text="Get In Touch"
        />
    }
}

#[component]
fn ServiceSummary(service: &'static Service) -> impl IntoView {
    view! {
        <div class="h-12 w-12 rounded-lg bg-primary/20 flex items-center justify-center mb-4 text-2xl">
            {service.icon.glyph()}
        </div>
        <h3 class="text-xl font-bold mb-2">{service.title.clone()}</h3>
        <p class="text-muted-foreground mb-4">{service.summary.clone()}</p>
        <ul class="space-y-2 mb-6 flex-grow">
            {service
                .highlights
                .iter()
                .map(|h| {
                    view! {
                        <li class="flex items-center gap-2 text-sm">
                            <span class="h-1.5 w-1.5 rounded-full bg-primary"></span>
                            {h.clone()}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
        <span class="link-primary">"Learn More →"</span>
    }
}

/// `/services/:slug`. Unknown slugs bounce back to the listing.
#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let route = move || {
        params.with(|p| CATALOG.resolve_service(&p.get("slug").unwrap_or_default()))
    };

    move || match route() {
        ServiceRoute::Detail(service) => Either::Left(view! { <ServiceDetail service /> }),
        ServiceRoute::Redirect(path) => {
            log::debug!("services: unknown slug, redirecting to {path}");
            Either::Right(view! { <Redirect path=path /> })
        }
    }
}

#[component]
fn ServiceDetail(service: &'static Service) -> impl IntoView {
    view! {
        <Title text=service.title.clone() />
        <PageHeader
            title=""
            highlight=service.title.clone()
            subtitle=service.summary.clone()
        >
            <A href=routes::CONTACT attr:class="btn btn-outline btn-lg">
                "Get a Quote"
            </A>
        </PageHeader>
        <section class="container mx-auto px-4 py-12 max-w-5xl">
            <RevealGroup spec=RevealSpec::cards(0.8) class="grid md:grid-cols-2 gap-12 items-start">
                <RevealItem>
                    <h2 class="text-3xl font-bold mb-6">"Overview"</h2>
                    <p class="text-muted-foreground leading-relaxed mb-6">
                        {service.description.clone()}
                    </p>
                </RevealItem>
                <RevealItem index=1>
                    <h3 class="text-xl font-semibold mb-4">"Technologies"</h3>
                    <TagList tags=service.technologies.clone() />
                </RevealItem>
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-12 max-w-4xl">
            <SectionHeading title="Our Process" />
            <RevealGroup spec=PROCESS_REVEAL class="space-y-6">
                {service
                    .process
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <RevealItem index=i class="glass rounded-2xl p-6 flex gap-6 items-start">
                                <span class="step-number">{i + 1}</span>
                                <div>
                                    <h3 class="text-xl font-bold mb-2">{step.title.clone()}</h3>
                                    <p class="text-muted-foreground">{step.description.clone()}</p>
                                </div>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-12">
            <SectionHeading title="Key Benefits" />
            <RevealGroup spec=CARDS_REVEAL class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {service
                    .benefits
                    .iter()
                    .enumerate()
                    .map(|(i, benefit)| {
                        view! {
                            <RevealItem index=i class="card p-6">
                                <span class="text-2xl mb-4 block">"⚡"</span>
                                <p>{benefit.clone()}</p>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-12">
            <SectionHeading title="Pricing" />
            <RevealGroup spec=CARDS_REVEAL class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                {service
                    .pricing
                    .tiers()
                    .into_iter()
                    .enumerate()
                    .map(|(i, (tier, price))| {
                        view! {
                            <RevealItem index=i class="card p-6 text-center">
                                <h3 class="text-lg font-semibold mb-2">{tier}</h3>
                                <p class="text-2xl font-bold text-gradient">{price.to_string()}</p>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-12 max-w-3xl">
            <SectionHeading title="Frequently Asked Questions" />
            <div class="space-y-4">
                {service
                    .faqs
                    .iter()
                    .map(|faq| {
                        view! {
                            <details class="card p-5">
                                <summary class="font-semibold cursor-pointer">
                                    {faq.question.clone()}
                                </summary>
                                <p class="mt-3 text-muted-foreground">{faq.answer.clone()}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <CallToAction
            title="Ready to get started?"
            body=format!(
                "Let's discuss your {} needs and create a tailored solution for your business.",
                service.title.to_lowercase(),
            )
            link_text="Get in Touch"
        />
        <div class="text-center pb-12">
            <A href=routes::SERVICES attr:class="link-primary">
                "← Back to Services"
            </A>
        </div>
    }
}
