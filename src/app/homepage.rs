use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::CATALOG,
    reveal::{Motion, RevealSpec},
    routes,
};

use super::{
    projects::ProjectCard,
    reveal::{RevealGroup, RevealItem},
    reviews::{StatsRow, TestimonialCard},
    sections::{CallToAction, SectionHeading},
};

const HERO_REVEAL: RevealSpec = RevealSpec::heading();
const HERO_IMAGE_REVEAL: RevealSpec = RevealSpec::heading()
    .with_motion(Motion::pop(0.9))
    .with_duration(1000)
    .with_delay(800);
const CARDS_REVEAL: RevealSpec = RevealSpec::cards(0.8);

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <section class="relative min-h-[90vh] flex items-center overflow-hidden">
            <div class="container mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <RevealGroup spec=HERO_REVEAL>
                    <RevealItem>
                        <span class="badge mb-6">"Full Stack Developer & UI/UX Designer"</span>
                        <h1 class="text-4xl md:text-6xl font-bold leading-tight mb-6">
                            "Creating " <span class="text-gradient">"Digital Experiences"</span>
                            " That Matter"
                        </h1>
                    </RevealItem>
                    <RevealItem index=1>
                        <p class="text-lg md:text-xl text-muted-foreground mb-8">
                            "I blend creativity and technical expertise to build modern, responsive websites and applications that help businesses thrive in the digital world."
                        </p>
                    </RevealItem>
                    <RevealItem index=2 class="flex flex-wrap gap-4 mb-8">
                        <A href=routes::CONTACT attr:class="btn btn-primary btn-lg">
                            "Let's Work Together"
                        </A>
                        <A href=routes::PROJECTS attr:class="btn btn-outline btn-lg">
                            "View Projects"
                        </A>
                    </RevealItem>
                    <RevealItem index=3 class="flex items-center gap-4 text-muted-foreground">
                        <span>"Follow me:"</span>
                        {CATALOG
                            .site
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="hover:text-primary transition-colors"
                                    >
                                        {social.name.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </RevealItem>
                </RevealGroup>
                <RevealGroup spec=HERO_IMAGE_REVEAL class="relative hidden lg:block">
                    <RevealItem class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1498050108023-c5249f4df085"
                            alt="Developer working"
                            class="rounded-3xl shadow-2xl object-cover w-full"
                        />
                        <div class="glass absolute -bottom-6 -left-6 rounded-2xl px-5 py-3">
                            <p class="font-semibold">"Available for work"</p>
                            <p class="text-sm text-green-500">"● Online now"</p>
                        </div>
                    </RevealItem>
                </RevealGroup>
            </div>
        </section>
        <section class="container mx-auto px-4 py-16">
            <StatsRow stats=&CATALOG.site.home_stats />
        </section>
        <section class="container mx-auto px-4 py-20">
            <SectionHeading
                eyebrow="What I Do"
                title="My Services"
                subtitle="Specialized services tailored to your digital needs"
            />
            <RevealGroup spec=CARDS_REVEAL class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12">
                {CATALOG
                    .services
                    .iter()
                    .take(3)
                    .enumerate()
                    .map(|(i, service)| {
                        view! {
                            <RevealItem index=i class="glass rounded-xl p-6">
                                <div class="h-12 w-12 rounded-lg bg-primary/20 flex items-center justify-center mb-4 text-2xl">
                                    {service.icon.glyph()}
                                </div>
                                <h3 class="text-xl font-bold mb-2">{service.title.clone()}</h3>
                                <p class="text-muted-foreground">{service.summary.clone()}</p>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
            <div class="text-center">
                <A href=routes::SERVICES attr:class="btn btn-outline btn-lg">
                    "View All Services"
                </A>
            </div>
        </section>
        <section class="container mx-auto px-4 py-20">
            <SectionHeading
                eyebrow="My Work"
                title="Featured Projects"
                subtitle="A selection of my recent work showcasing my skills and expertise"
            />
            <RevealGroup spec=CARDS_REVEAL class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
                {CATALOG
                    .showcase_projects(4)
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <RevealItem index=i>
                                <ProjectCard project />
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
            <div class="text-center">
                <A href=routes::PROJECTS attr:class="btn btn-outline btn-lg">
                    "View All Projects"
                </A>
            </div>
        </section>
        <section class="container mx-auto px-4 py-20">
            <SectionHeading
                eyebrow="What Clients Say"
                title="Testimonials"
                subtitle="Hear from clients about their experience working with me"
            />
            <RevealGroup spec=CARDS_REVEAL class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12">
                {CATALOG
                    .testimonials
                    .iter()
                    .take(3)
                    .enumerate()
                    .map(|(i, testimonial)| {
                        view! {
                            <RevealItem index=i>
                                <TestimonialCard testimonial />
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
            <div class="text-center">
                <A href=routes::REVIEWS attr:class="btn btn-outline btn-lg">
                    "View All Reviews"
                </A>
            </div>
        </section>
        <CallToAction
            title="Ready to start your project?"
            body="Let's work together to create something amazing. I'm currently available for freelance work and remote positions."
            link_text="Get in Touch"
        />
    }
}
