use leptos::{either::Either, ev::TouchEvent, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::{
    carousel::{Carousel, Swipe, SwipeDirection},
    content::{Stat, StatValue, Testimonial, CATALOG},
    reveal::{CountUp, Motion, RevealSpec},
};

use super::{
    reveal::{use_group_fired, RevealGroup, RevealItem},
    sections::{CallToAction, PageHeader, SectionHeading},
    use_settings,
};

const STATS_REVEAL: RevealSpec = RevealSpec::cards(0.8)
    .with_motion(Motion::pop(0.8))
    .with_duration(600)
    .with_stagger(150);
const GRID_REVEAL: RevealSpec = RevealSpec::cards(0.8);
const COUNT_DELAY_MS: u32 = 500;
const COUNT_STAGGER_MS: u32 = 200;
const COUNT_TICK_MS: u64 = 16;

#[component]
pub fn Stars(rating: u8) -> impl IntoView {
    let stars = Testimonial::star_slots(rating);
    view! {
        <div class="flex gap-0.5" aria-label=format!("{rating} out of 5 stars")>
            {stars
                .into_iter()
                .map(|filled| {
                    view! {
                        <span class=if filled {
                            "text-yellow-400"
                        } else {
                            "text-muted-foreground/30"
                        }>"★"</span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    testimonial: &'static Testimonial,
    #[prop(optional)] show_project: bool,
) -> impl IntoView {
    view! {
        <div class="card h-full p-6 flex flex-col">
            <div class="flex items-center justify-between mb-4">
                {show_project
                    .then(|| view! { <span class="badge">{testimonial.project.clone()}</span> })}
                <Stars rating=testimonial.rating />
            </div>
            <p class="italic text-muted-foreground flex-grow mb-6">
                "\"" {testimonial.content.clone()} "\""
            </p>
            <div class="flex items-center gap-3">
                <img
                    src=testimonial.avatar.clone()
                    alt=testimonial.name.clone()
                    class="w-12 h-12 rounded-full object-cover"
                />
                <div>
                    <p class="font-semibold">{testimonial.name.clone()}</p>
                    <p class="text-sm text-muted-foreground">{testimonial.role()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn StatsRow(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <RevealGroup spec=STATS_REVEAL class="grid grid-cols-2 md:grid-cols-4 gap-6">
            {stats
                .iter()
                .enumerate()
                .map(|(i, stat)| {
                    view! {
                        <RevealItem index=i class="glass rounded-2xl p-6 text-center">
                            <span class="block text-4xl font-bold text-gradient mb-2">
                                <CountUpValue value=&stat.value index=i />
                            </span>
                            <span class="text-muted-foreground">{stat.label.clone()}</span>
                        </RevealItem>
                    }
                })
                .collect_view()}
        </RevealGroup>
    }
}

/// Counts a stat up from zero once the enclosing group is revealed.
#[component]
fn CountUpValue(value: &'static StatValue, index: usize) -> impl IntoView {
    let fired = use_group_fired();
    let count = CountUp::new(value.target)
        .with_delay(COUNT_DELAY_MS + COUNT_STAGGER_MS * index as u32);
    let (elapsed, set_elapsed) = signal(0.0_f64);
    let done = Memo::new(move |_| count.is_done(elapsed.get()));

    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            if fired.get_untracked() {
                set_elapsed.update(|ms| *ms += COUNT_TICK_MS as f64);
            }
        },
        COUNT_TICK_MS,
    );
    Effect::new(move |_| {
        if fired.get() && !done.get() {
            resume();
        } else {
            pause();
        }
    });

    move || value.at(count.value_at(elapsed.get()))
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let testimonials = &CATALOG.testimonials;
    view! {
        <Title text="Reviews" />
        <PageHeader
            title="Client"
            highlight="Testimonials"
            subtitle="Discover what clients have to say about their experiences working with me on various projects."
        />
        <section class="container mx-auto px-4 pb-16">
            <StatsRow stats=&CATALOG.site.review_stats />
        </section>
        <section class="container mx-auto px-4 py-16">
            <SectionHeading
                title="Featured Reviews"
                subtitle="Read through a selection of client testimonials and discover how my work has helped businesses achieve their goals."
            />
            <RevealGroup spec=GRID_REVEAL class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {testimonials
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
        </section>
        <section class="container mx-auto px-4 py-16">
            <SectionHeading
                title="Client Success Stories"
                subtitle="Swipe through testimonials from clients across different industries and projects"
            />
            <TestimonialCarousel testimonials />
        </section>
        <CallToAction
            title="Ready to join our satisfied clients?"
            body="Contact me today to discuss your project needs and discover how I can help bring your vision to life with the same level of excellence and dedication."
            link_text="Start Your Project"
        />
    }
}

/// Auto-advancing slider over every testimonial, with arrows, dots and
/// horizontal swipes.
#[component]
fn TestimonialCarousel(testimonials: &'static [Testimonial]) -> impl IntoView {
    let carousel = match Carousel::new(testimonials.len()) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(e) => {
            log::warn!("reviews: {e}");
            return Either::Left(());
        }
    };
    let settings = use_settings();

    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            carousel.try_update(Carousel::next);
        },
        settings.carousel_interval_ms,
    );
    let countdown = StoredValue::new_local((pause, resume));
    // a manual move gets a full interval before the next automatic one
    let restart = move || {
        countdown.with_value(|(pause, resume)| {
            pause();
            resume();
        })
    };
    let step = move |f: fn(&mut Carousel)| {
        carousel.update(f);
        restart();
    };

    let swipe = StoredValue::new(Swipe::default());
    let touch_x = |ev: &TouchEvent| ev.touches().get(0).map(|t| t.client_x() as f64);
    let on_touch_end = move |_: TouchEvent| {
        let direction = swipe
            .try_update_value(|s| s.finish(settings.swipe_threshold_px))
            .unwrap_or(SwipeDirection::None);
        if direction != SwipeDirection::None {
            carousel.update(|c| c.apply(direction));
            restart();
        }
    };

    let slide_width = format!("width: {}%;", 100.0 / testimonials.len() as f64);

    Either::Right(view! {
        <div class="relative max-w-4xl mx-auto">
            <div
                class="overflow-hidden rounded-2xl"
                on:touchstart=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        swipe.update_value(|s| s.begin(x));
                    }
                }
                on:touchmove=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        swipe.update_value(|s| s.track(x));
                    }
                }
                on:touchend=on_touch_end
            >
                <div
                    class="flex transition-transform duration-500 ease-out"
                    style=move || carousel.with(Carousel::strip_style)
                >
                    {testimonials
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <div class="px-4" style=slide_width.clone()>
                                    <TestimonialCard testimonial show_project=true />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <button
                type="button"
                class="carousel-arrow left-0 -translate-x-1/2"
                aria-label="Previous testimonial"
                on:click=move |_| step(Carousel::previous)
            >
                "‹"
            </button>
            <button
                type="button"
                class="carousel-arrow right-0 translate-x-1/2"
                aria-label="Next testimonial"
                on:click=move |_| step(Carousel::next)
            >
                "›"
            </button>
            <div class="flex justify-center gap-2 mt-8">
                {(0..testimonials.len())
                    .map(|i| {
                        view! {
                            <button
                                type="button"
                                aria-label=format!("Go to testimonial {}", i + 1)
                                class=move || {
                                    if carousel.with(|c| c.is_active(i)) {
                                        "w-3 h-3 rounded-full bg-primary"
                                    } else {
                                        "w-3 h-3 rounded-full bg-primary/20 hover:scale-125 transition-all"
                                    }
                                }
                                on:click=move |_| {
                                    carousel.update(|c| c.go_to(i));
                                    restart();
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    })
}
