//! Плавающая кнопка "Volver arriba"
//!
//! Видна, пока страница прокручена больше чем на
//! [`SCROLL_TOP_THRESHOLD`](crate::shared::scroll::SCROLL_TOP_THRESHOLD).
//! Подписка на прокрутку живёт ровно столько, сколько текущий владелец (компонент).

use crate::shared::icons::icon;
use crate::shared::scroll::{watch_visibility, ScrollSource, Visibility, WindowScroll};
use leptos::logging::log;
use leptos::prelude::*;

/// Связывает `visibility` с прокруткой `source` до очистки текущего владельца.
/// Без источника (`None`) сигнал остаётся как есть.
pub fn bind_scroll_visibility<S>(source: Option<S>, visibility: RwSignal<Visibility>)
where
    S: ScrollSource + Clone + 'static,
{
    let subscription = StoredValue::new_local(source.map(|source| {
        watch_visibility(source, move |next| {
            if visibility.get_untracked() != next {
                visibility.set(next);
            }
        })
    }));

    on_cleanup(move || {
        subscription.set_value(None);
        log!("ScrollToTopButton: scroll listener removed");
    });
}

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visibility = RwSignal::new(Visibility::Hidden);
    bind_scroll_visibility(WindowScroll::current(), visibility);

    let scroll_to_top = move |_| {
        if let Some(source) = WindowScroll::current() {
            source.scroll_to_top();
        }
    };

    move || {
        visibility.get().is_visible().then(|| {
            view! {
                <div class="scroll-to-top">
                    <button
                        class="scroll-to-top__button"
                        aria-label="Volver arriba"
                        on:click=scroll_to_top
                    >
                        {icon("arrow-up")}
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scroll::testing::FakeScroll;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_visibility_bound_while_mounted() {
        let root = Owner::new();
        root.set();
        let visibility = RwSignal::new(Visibility::Hidden);
        let scroll = FakeScroll::at(0.0);

        let component = root.child();
        component.with(|| bind_scroll_visibility(Some(scroll.clone()), visibility));

        scroll.scroll_to(50.0);
        assert_eq!(visibility.get_untracked(), Visibility::Hidden);
        scroll.scroll_to(150.0);
        assert_eq!(visibility.get_untracked(), Visibility::Visible);
        scroll.scroll_to(80.0);
        assert_eq!(visibility.get_untracked(), Visibility::Hidden);
    }

    #[test]
    fn test_initial_offset_applied_at_mount() {
        let root = Owner::new();
        root.set();
        let visibility = RwSignal::new(Visibility::Hidden);
        let scroll = FakeScroll::at(400.0);

        let component = root.child();
        component.with(|| bind_scroll_visibility(Some(scroll.clone()), visibility));

        assert_eq!(visibility.get_untracked(), Visibility::Visible);
    }

    #[test]
    fn test_no_updates_after_cleanup() {
        let root = Owner::new();
        root.set();
        let visibility = RwSignal::new(Visibility::Hidden);
        let scroll = FakeScroll::at(0.0);

        let component = root.child();
        component.with(|| bind_scroll_visibility(Some(scroll.clone()), visibility));
        assert_eq!(scroll.listener_count(), 1);

        component.cleanup();
        assert_eq!(scroll.listener_count(), 0);

        scroll.scroll_to(500.0);
        assert_eq!(visibility.get_untracked(), Visibility::Hidden);
    }
}
