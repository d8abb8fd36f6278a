use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::{
    content::{FeaturedSkill, SkillCategory, CATALOG, SKILL_RING_RADIUS},
    reveal::{Easing, Motion, RevealSpec},
    routes,
};

use super::{
    reveal::{use_group_fired, RevealGroup, RevealItem},
    sections::{CallToAction, PageHeader, SectionHeading},
};

const CIRCLES_REVEAL: RevealSpec = RevealSpec::cards(0.8)
    .with_motion(Motion::pop(0.5))
    .with_duration(1000)
    .with_stagger(100)
    .with_easing(Easing::BackOut);
const CATEGORY_REVEAL: RevealSpec = RevealSpec::cards(0.75).with_stagger(150);
const TOOLS_REVEAL: RevealSpec = RevealSpec::cards(0.85)
    .with_motion(Motion::pop(0.8))
    .with_duration(400)
    .with_stagger(50);

#[component]
pub fn SkillsPage() -> impl IntoView {
    let skills = &CATALOG.skills;
    view! {
        <Title text="Skills" />
        <PageHeader
            title="My"
            highlight="Skills"
            subtitle="A showcase of my technical expertise and professional capabilities across various domains of web development and design."
        >
            <A href=routes::CONTACT attr:class="btn btn-outline btn-lg">
                "Work With Me"
            </A>
        </PageHeader>
        <section class="container mx-auto px-4 py-16">
            <SectionHeading title="Core Technologies" />
            <RevealGroup spec=CIRCLES_REVEAL class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8">
                {skills
                    .featured
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <RevealItem index=i>
                                <SkillCircle skill />
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-16">
            <SectionHeading title="Skill Categories" />
            <RevealGroup spec=CATEGORY_REVEAL class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {skills
                    .categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <RevealItem index=i>
                                <CategoryCard category />
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <section class="container mx-auto px-4 py-16 max-w-4xl">
            <SectionHeading title="Professional Experience" />
            <div class="space-y-6">
                {CATALOG
                    .site
                    .timeline
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="card p-6">
                                <div class="flex flex-wrap items-baseline justify-between gap-2 mb-2">
                                    <h3 class="text-xl font-bold">{entry.role.clone()}</h3>
                                    <span class="badge">{entry.period.clone()}</span>
                                </div>
                                <p class="text-primary mb-2">{entry.company.clone()}</p>
                                <p class="text-muted-foreground">{entry.summary.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="container mx-auto px-4 py-16">
            <SectionHeading title="Tools & Technologies" />
            <RevealGroup spec=TOOLS_REVEAL class="grid grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">
                {skills
                    .tools
                    .iter()
                    .enumerate()
                    .map(|(i, tool)| {
                        view! {
                            <RevealItem index=i class="glass rounded-xl p-4 flex flex-col items-center gap-2">
                                <span class="text-3xl">{tool.icon.clone()}</span>
                                <span class="text-sm text-center">{tool.name.clone()}</span>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
        <CallToAction
            title="Want to work together?"
            body="I'm always looking for new and exciting projects to work on. If you have a project in mind, let's discuss how we can make it happen."
            link_text="Get in Touch"
        />
    }
}

/// Progress ring that fills to the skill level once its group is revealed.
#[component]
fn SkillCircle(skill: &'static FeaturedSkill) -> impl IntoView {
    let fired = use_group_fired();
    let circumference = FeaturedSkill::circumference();
    let offset = move || {
        let offset = if fired.get() {
            skill.dash_offset()
        } else {
            circumference
        };
        format!("{offset:.3}")
    };
    let radius = SKILL_RING_RADIUS.to_string();
    view! {
        <div class="flex flex-col items-center">
            <div class="relative w-28 h-28">
                <svg class="w-full h-full -rotate-90" viewBox="0 0 100 100">
                    <circle
                        cx="50"
                        cy="50"
                        r=radius.clone()
                        fill="none"
                        stroke="currentColor"
                        stroke-width="8"
                        class="text-muted/30"
                    />
                    <circle
                        cx="50"
                        cy="50"
                        r=radius.clone()
                        fill="none"
                        stroke=skill.color.clone()
                        stroke-width="8"
                        stroke-linecap="round"
                        stroke-dasharray=format!("{circumference:.3}")
                        stroke-dashoffset=offset
                        style="transition: stroke-dashoffset 1.5s cubic-bezier(0.215, 0.61, 0.355, 1);"
                    />
                </svg>
                <span class="absolute inset-0 flex items-center justify-center text-xl font-bold">
                    {format!("{}%", skill.level)}
                </span>
            </div>
            <span class="mt-3 font-medium">{skill.name.clone()}</span>
        </div>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let fired = use_group_fired();
    view! {
        <div class="card p-6 h-full">
            <div class="flex items-center gap-3 mb-6">
                <span class="text-3xl">{category.icon.clone()}</span>
                <h3 class="text-2xl font-bold">{category.name.clone()}</h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        let level = skill.level;
                        view! {
                            <div>
                                <div class="flex justify-between mb-1 text-sm">
                                    <span>{skill.name.clone()}</span>
                                    <span class="text-muted-foreground">{format!("{level}%")}</span>
                                </div>
                                <div class="h-2 rounded-full bg-muted/30 overflow-hidden">
                                    <div
                                        class="h-full rounded-full bg-primary transition-[width] duration-1000 ease-out"
                                        style=move || {
                                            format!("width: {}%;", if fired.get() { level } else { 0 })
                                        }
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
