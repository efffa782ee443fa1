//! Hero title with optional breadcrumb trail

use leptos::*;
use leptos_router::*;

use crate::Breadcrumb;

#[component]
pub fn HeroTitle(title: String, breadcrumb: Option<Breadcrumb>) -> impl IntoView {
    view! {
        <div class="relative z-10 flex flex-col justify-center items-center h-full text-center pt-32 px-4">
            <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold text-black">{title}</h2>
            {breadcrumb.map(|trail| view! {
                <div class="text-base sm:text-lg mt-4 text-black flex flex-wrap justify-center">
                    <A href=trail.home_path class="hover:text-blue-400 transition-colors duration-200">
                        {trail.home_label}
                    </A>
                    <span class="mx-2">{trail.separator}</span>
                    <span class="font-semibold">{trail.current}</span>
                </div>
            })}
        </div>
    }
}
