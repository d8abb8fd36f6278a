use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use crate::{
    content::{Project, ProjectFilter, CATALOG},
    reveal::RevealSpec,
    routes,
};

use super::{
    reveal::{RevealGroup, RevealItem},
    sections::{CallToAction, PageHeader, TagList},
    set_not_found_status,
};

const GRID_REVEAL: RevealSpec = RevealSpec::cards(0.8).with_stagger(150);

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class=if project.featured {
            "card h-full flex flex-col overflow-hidden group border-primary/30"
        } else {
            "card h-full flex flex-col overflow-hidden group"
        }>
            <div class="aspect-[16/9] overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="object-cover w-full h-full transition-transform duration-500 group-hover:scale-110"
                />
            </div>
            <div class="p-6 flex-grow">
                <h3 class="text-xl font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-muted-foreground mb-4">{project.description.clone()}</p>
                <TagList tags=project.tags.clone() />
            </div>
            <div class="flex justify-between border-t border-border/40 px-6 py-4">
                <A href=project.path() attr:class="link-primary">
                    "View Project →"
                </A>
                <div class="flex gap-4 text-sm">
                    <a href=project.source_link.clone() target="_blank" rel="noopener noreferrer">
                        "Code"
                    </a>
                    <a href=project.demo_link.clone() target="_blank" rel="noopener noreferrer">
                        "Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);
    let filter_button = move |value: ProjectFilter, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if filter.get() == value { "btn btn-primary" } else { "btn btn-outline" }
                }
                on:click=move |_| set_filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <Title text="Projects" />
        <PageHeader
            title="Recent"
            highlight="Projects"
            subtitle="A selection of my recent work showcasing my skills and expertise in web development and design."
        >
            <div class="flex justify-center gap-4">
                {filter_button(ProjectFilter::All, "All Projects")}
                {filter_button(ProjectFilter::Featured, "Featured")}
            </div>
        </PageHeader>
        <section class="container mx-auto px-4 py-8">
            // keyed on the filter so the new selection plays its entrance again
            {move || {
                let projects = CATALOG.projects(filter.get());
                view! {
                    <RevealGroup
                        spec=GRID_REVEAL
                        class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8"
                    >
                        {projects
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
                }
            }}
        </section>
        <CallToAction
            title="Interested in working together?"
            body="I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
            link_text="Let's Connect →"
        />
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || {
        params.with(|p| {
            p.get("id")
                .and_then(|id| CATALOG.project_by_param(&id))
        })
    };

    move || match project() {
        Some(project) => Either::Left(view! { <ProjectDetail project /> }),
        None => {
            set_not_found_status();
            Either::Right(view! { <ProjectNotFound /> })
        }
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <Title text=project.title.clone() />
        <section class="container mx-auto px-4 py-16 max-w-5xl">
            <RevealGroup spec=RevealSpec::heading() class="space-y-8">
                <RevealItem>
                    <A href=routes::PROJECTS attr:class="link-primary">
                        "← Back to Projects"
                    </A>
                </RevealItem>
                <RevealItem index=1>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{project.title.clone()}</h1>
                    {project.featured.then(|| view! { <span class="badge">"Featured"</span> })}
                </RevealItem>
                <RevealItem index=2>
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full rounded-2xl object-cover aspect-[16/9]"
                    />
                </RevealItem>
                <RevealItem index=3 class="space-y-6">
                    <p class="text-lg text-muted-foreground">{project.description.clone()}</p>
                    <TagList tags=project.tags.clone() />
                    <div class="flex gap-4">
                        <a
                            href=project.demo_link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            "Live Demo"
                        </a>
                        <a
                            href=project.source_link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline"
                        >
                            "Source Code"
                        </a>
                    </div>
                </RevealItem>
            </RevealGroup>
        </section>
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <Title text="Project not found" />
        <section class="container mx-auto px-4 py-32 text-center">
            <h1 class="text-4xl font-bold mb-4">"Project not found"</h1>
            <p class="text-muted-foreground mb-8">
                "The project you're looking for doesn't exist or has been removed."
            </p>
            <A href=routes::PROJECTS attr:class="btn btn-primary">
                "Back to Projects"
            </A>
        </section>
    }
}
