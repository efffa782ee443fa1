use leptos::*;
use leptos_meta::Title;

use crate::services::scroll::{ScrollSource, ScrollSubscription, WindowScroll};
use crate::{
    breadcrumb_trail, HeroTitle, LeadForm, NavBar, NavState, DEFAULT_BREADCRUMB, DEFAULT_TITLE,
    HERO_BACKGROUND, SITE_NAME, SiteResult,
};

/// Hero banner with the navigation bar, page title and lead form popup.
#[component]
pub fn Header(
    /// Heading shown over the hero image
    #[prop(into, default = DEFAULT_TITLE.to_string())]
    title: String,
    /// Current page name in the breadcrumb trail
    #[prop(into, default = DEFAULT_BREADCRUMB.to_string())]
    breadcrumb: String,
    #[prop(default = true)] show_breadcrumb: bool,
) -> impl IntoView {
    let state = create_rw_signal(NavState::default());
    if let Err(e) = WindowScroll::new().and_then(|window| watch_scroll(state, window)) {
        log::warn!("Navbar will stay transparent: {}", e);
    }

    let popup_visible = create_memo(move |_| state.with(|s| s.is_popup_visible));
    let on_close = Callback::new(move |_: ()| {
        state.update(NavState::close_popup);
        log::debug!("📝 Lead form closed");
    });

    let page_title = format!("{} | {}", title, SITE_NAME);
    let trail = breadcrumb_trail(show_breadcrumb, &breadcrumb);

    view! {
        <Title text=page_title/>

        <div
            class="relative bg-cover bg-center min-h-[50vh] w-full"
            style=format!("background-image: url({});", HERO_BACKGROUND)
        >
            <NavBar state=state/>
            <HeroTitle title=title breadcrumb=trail/>
        </div>

        <Show
            when=move || popup_visible.get()
            fallback=|| view! { }
        >
            <LeadForm on_close=on_close/>
        </Show>
    }
}

/// Keep `state.is_scrolled` in sync with `source` for the lifetime of the
/// current reactive owner.
fn watch_scroll<S: ScrollSource + 'static>(state: RwSignal<NavState>, source: S) -> SiteResult<()> {
    let subscription = ScrollSubscription::acquire(source, move |offset| {
        // Disposed signal: the header is gone
        let Some(mut next) = state.try_get_untracked() else {
            return;
        };
        // Only notify readers when the style actually flips
        if next.on_scroll(offset) {
            state.set(next);
            log::debug!(
                "🧭 Navbar {}",
                if next.is_scrolled { "opaque" } else { "transparent" }
            );
        }
    })?;

    log::info!("📜 Scroll listener attached");
    on_cleanup(move || subscription.cancel());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scroll::fake::FakeWindow;
    use crate::SiteError;

    #[test]
    fn test_watch_scroll_tracks_offsets_until_owner_disposed() {
        let runtime = create_runtime();
        let window = FakeWindow::default();
        let state = create_rw_signal(NavState::default());

        let mount = as_child_of_current_owner(move |source: FakeWindow| watch_scroll(state, source));
        let (result, disposer) = mount(window.clone());
        assert!(result.is_ok());
        assert_eq!(window.listener_count(), 1);

        window.emit(51.0);
        assert!(state.get_untracked().is_scrolled);
        window.emit(50.0);
        assert!(!state.get_untracked().is_scrolled);

        window.emit(400.0);
        drop(disposer);
        assert_eq!(window.listener_count(), 0);

        // Nothing reaches the state after unmount
        window.emit(0.0);
        assert!(state.get_untracked().is_scrolled);

        runtime.dispose();
    }

    #[test]
    fn test_watch_scroll_skips_unchanged_side() {
        let runtime = create_runtime();
        let window = FakeWindow::default();
        let state = create_rw_signal(NavState::default());
        let writes = create_rw_signal(0usize);

        create_isomorphic_effect(move |_| {
            state.with(|_| ());
            writes.update_untracked(|n| *n += 1);
        });
        let initial = writes.get_untracked();

        watch_scroll(state, window.clone()).unwrap();
        window.emit(10.0);
        window.emit(49.0);
        assert_eq!(writes.get_untracked(), initial);

        window.emit(60.0);
        window.emit(90.0);
        assert_eq!(writes.get_untracked(), initial + 1);

        runtime.dispose();
    }

    #[test]
    fn test_watch_scroll_ignores_disposed_state() {
        let runtime = create_runtime();
        let window = FakeWindow::default();
        let state = create_rw_signal(NavState::default());

        watch_scroll(state, window.clone()).unwrap();
        state.dispose();

        window.emit(120.0);
        assert_eq!(state.try_get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn test_watch_scroll_reports_rejected_listener() {
        let runtime = create_runtime();
        let window = FakeWindow {
            reject: true,
            ..FakeWindow::default()
        };
        let state = create_rw_signal(NavState::default());

        let result = watch_scroll(state, window.clone());
        assert!(matches!(result, Err(SiteError::Listener(_))));
        assert_eq!(window.listener_count(), 0);
        assert_eq!(state.get_untracked(), NavState::default());

        runtime.dispose();
    }
}
