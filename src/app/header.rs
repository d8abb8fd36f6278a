use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use crate::{
    reveal::{Easing, Motion, RevealSpec},
    routes::{self, NavItem, NAV_ITEMS},
};

use super::{
    reveal::{RevealGroup, RevealItem},
    theme::ThemeToggle,
    use_settings,
};

const NAV_REVEAL: RevealSpec = RevealSpec::heading()
    .with_motion(Motion::fade_down(20.0))
    .with_duration(500)
    .with_stagger(100)
    .with_easing(Easing::Power2Out);

#[component]
pub fn Navigation() -> impl IntoView {
    let settings = use_settings();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || settings.is_scrolled(scroll_y.get());
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class=move || {
            if scrolled() {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 py-3 bg-background/90 backdrop-blur shadow-md"
            } else {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 py-5 bg-transparent"
            }
        }>
            <div class="container mx-auto px-4 flex items-center justify-between">
                <A href=routes::HOME attr:class="text-2xl font-bold text-gradient">
                    "Portfolio"
                </A>
                <RevealGroup spec=NAV_REVEAL class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <RevealItem index=i>
                                    <NavLink item=*item />
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="md:hidden p-2"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden container mx-auto px-4 pt-4 pb-2 flex flex-col gap-3 bg-background/95">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <div on:click=move |_| set_menu_open.set(false)>
                                    <NavLink item=*item />
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || pathname.with(|p| item.is_active(p));
    view! {
        <A href=item.path>
            <span class=move || {
                if active() {
                    "relative font-medium text-primary"
                } else {
                    "relative text-muted-foreground hover:text-foreground transition-colors"
                }
            }>
                {item.name}
                <Show when=active>
                    <span class="absolute -bottom-1 inset-x-0 h-0.5 rounded-full bg-primary"></span>
                </Show>
            </span>
        </A>
    }
}
