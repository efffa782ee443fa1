//! Fixed navigation bar: brand, desktop menu, hamburger and mobile panel.

use leptos::*;
use leptos_router::*;

use crate::state::{brand_class, nav_class};
use crate::{nav_items, NavState, BRAND_PRIMARY, BRAND_SECONDARY, LOGO_ALT, LOGO_SRC};

#[component]
pub fn NavBar(state: RwSignal<NavState>) -> impl IntoView {
    let scrolled = create_memo(move |_| state.with(|s| s.is_scrolled));
    let menu_open = create_memo(move |_| state.with(|s| s.is_menu_open));

    let on_hamburger = move |_| {
        state.update(NavState::toggle_menu);
        log::debug!("🍔 Mobile menu open: {}", menu_open.get_untracked());
    };

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="flex justify-between items-center p-4 md:px-10 relative z-10">
                <div class="flex items-center space-x-1 ml-20">
                    <img src=LOGO_SRC alt=LOGO_ALT class="h-12 w-auto"/>
                    <A href="/">
                        <span class=move || brand_class(scrolled.get())>
                            <span class="text-blue-900">{BRAND_PRIMARY}</span>
                            " "
                            {BRAND_SECONDARY}
                        </span>
                    </A>
                </div>

                // Hamburger
                <div
                    class="md:hidden flex flex-col justify-center items-end gap-1 cursor-pointer"
                    on:click=on_hamburger
                >
                    <div class="w-6 h-1 rounded bg-black"></div>
                    <div class="w-6 h-1 rounded bg-black"></div>
                    <div class="w-6 h-1 rounded bg-black"></div>
                </div>

                // Desktop menu, hidden below the md breakpoint
                <ul class="hidden md:flex items-center gap-4 lg:gap-6 text-lg lg:text-xl font-semibold">
                    {nav_items()
                        .into_iter()
                        .map(|item| view! {
                            <li>
                                <A href=item.path class="hover:text-blue-700 transition-colors duration-200">
                                    {item.label}
                                </A>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <div class="hidden md:block">
                    <GetStartedButton
                        state=state
                        class="bg-blue-700 text-lg text-white px-6 lg:px-8 py-2 lg:py-3 rounded-3xl font-bold hover:bg-blue-800 transition-colors duration-200"
                    />
                </div>
            </div>

            <Show
                when=move || menu_open.get()
                fallback=|| view! { }
            >
                <MobileMenu state=state/>
            </Show>
        </nav>
    }
}

/// Collapsible panel, mounted only while the menu is open.
#[component]
fn MobileMenu(state: RwSignal<NavState>) -> impl IntoView {
    view! {
        <div class="md:hidden flex flex-col gap-4 items-center p-4 bg-white text-black">
            {nav_items()
                .into_iter()
                .map(|item| view! {
                    <A href=item.path class="hover:text-blue-700 transition-colors duration-200">
                        // Following a link collapses the panel
                        <span on:click=move |_| state.update(NavState::close_menu)>
                            {item.label}
                        </span>
                    </A>
                })
                .collect_view()}
            <GetStartedButton
                state=state
                class="bg-blue-700 text-white px-4 py-2 rounded-xl hover:bg-blue-800 transition-colors duration-200"
            />
        </div>
    }
}

#[component]
fn GetStartedButton(state: RwSignal<NavState>, class: &'static str) -> impl IntoView {
    view! {
        <button
            class=class
            on:click=move |_| {
                state.update(NavState::open_popup);
                log::debug!("📝 Lead form opened");
            }
        >
            "Get Started →"
        </button>
    }
}
