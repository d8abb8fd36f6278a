use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::CATALOG,
    reveal::{Motion, RevealSpec},
};

use super::{
    reveal::{RevealGroup, RevealItem},
    sections::{CallToAction, PageHeader},
};

const BIO_REVEAL: RevealSpec = RevealSpec::cards(0.8);
const TIMELINE_REVEAL: RevealSpec = RevealSpec::cards(0.8)
    .with_motion(Motion::fade_left(50.0))
    .with_stagger(300);

const BIO: [(&str, [&str; 2]); 3] = [
    (
        "My Journey",
        [
            "I'm a web developer with over 5 years of experience creating websites and applications that are not only visually appealing but also functional and user-friendly. My journey in tech began when I was in college, where I discovered my passion for coding and design.",
            "After graduating with a degree in Computer Science, I joined a digital agency where I honed my skills working on various projects for clients across different industries. This experience gave me insights into different business needs and how technology can address them effectively.",
        ],
    ),
    (
        "My Approach",
        [
            "I believe in a holistic approach to web development, where design, functionality, and user experience work together harmoniously. Each project I undertake is an opportunity to create something meaningful that serves both the client's objectives and the end-users' needs.",
            "My process involves close collaboration with clients, understanding their vision, and translating it into a tangible digital product. I focus on clean, maintainable code and responsive designs that work seamlessly across all devices.",
        ],
    ),
    (
        "Beyond Coding",
        [
            "When I'm not coding, you can find me exploring hiking trails, attending tech meetups, or experimenting with photography. I believe that these diverse interests contribute to my creativity and problem-solving abilities in my professional work.",
            "I'm also passionate about continuous learning and regularly attend workshops and conferences to stay updated with the latest trends and technologies in the web development world.",
        ],
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <PageHeader
            title="About"
            highlight="Me"
            subtitle="A passionate web developer and designer with a focus on creating beautiful, functional, and user-centered digital experiences."
        >
            <a href="/resume.pdf" download="resume.pdf" class="btn btn-outline btn-lg">
                "Download Resume"
            </a>
        </PageHeader>
        <section class="container mx-auto px-4 py-16">
            <RevealGroup spec=BIO_REVEAL class="grid lg:grid-cols-3 gap-12">
                <RevealItem class="space-y-4">
                    <h2 class="text-3xl font-bold mb-6">"Bio"</h2>
                    <img
                        src="https://images.unsplash.com/photo-1518791841217-8f162f1e1131?auto=format&fit=crop&w=800&q=60"
                        alt="Profile"
                        class="rounded-2xl w-full object-cover aspect-square"
                    />
                    <p>
                        <strong>"Location: "</strong>
                        <span class="text-muted-foreground">"San Francisco, CA"</span>
                    </p>
                    <p>
                        <strong>"Email: "</strong>
                        <a href="mailto:hello@portfolio.com" class="link-primary">
                            "hello@portfolio.com"
                        </a>
                    </p>
                </RevealItem>
                <RevealItem index=1 class="lg:col-span-2 space-y-8">
                    {BIO
                        .iter()
                        .map(|(heading, paragraphs)| {
                            view! {
                                <div>
                                    <h3 class="text-2xl font-semibold mb-4">{*heading}</h3>
                                    {paragraphs
                                        .iter()
                                        .map(|p| view! { <p class="text-muted-foreground mb-4">{*p}</p> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </RevealItem>
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-16 max-w-4xl">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Professional Journey"</h2>
            <RevealGroup spec=TIMELINE_REVEAL class="relative border-l-2 border-primary/30 pl-8 space-y-12">
                {CATALOG
                    .site
                    .timeline
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <RevealItem index=i class="relative">
                                <span class="absolute -left-[2.6rem] top-1 h-4 w-4 rounded-full bg-primary"></span>
                                <span class="badge mb-2">{entry.period.clone()}</span>
                                <h3 class="text-xl font-bold">{entry.role.clone()}</h3>
                                <p class="text-primary mb-2">{entry.company.clone()}</p>
                                <p class="text-muted-foreground">{entry.summary.clone()}</p>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <CallToAction
            title="Interested in working together?"
            body="Whether you're looking for a new website, a redesign, or a digital consultant, I'm here to help you achieve your goals."
            link_text="Let's Connect"
        />
    }
}
