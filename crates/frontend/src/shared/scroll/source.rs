//! Подписка на прокрутку страницы
//!
//! Позиция прокрутки принадлежит браузеру, компонент только наблюдает за ней.
//! [`ScrollSubscription`] снимает обработчик при `Drop`, поэтому после
//! размонтирования компонента callback больше не вызывается.

use super::visibility::Visibility;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// Источник событий прокрутки
pub trait ScrollSource {
    /// Токен зарегистрированного обработчика
    type Listener;

    /// Текущее вертикальное смещение
    fn offset(&self) -> f64;

    /// `None`, если обработчик зарегистрировать не удалось
    fn add_listener(&self, on_scroll: Box<dyn Fn()>) -> Option<Self::Listener>;

    fn remove_listener(&self, listener: Self::Listener);

    /// Плавная прокрутка к началу страницы
    fn scroll_to_top(&self);
}

/// Активная подписка. Обработчик снимается при уничтожении.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.remove_listener(listener);
        }
    }
}

/// Сразу вычисляет видимость по текущему смещению, затем пересчитывает её
/// на каждое событие прокрутки, пока жива подписка.
pub fn watch_visibility<S, F>(source: S, on_change: F) -> ScrollSubscription<S>
where
    S: ScrollSource + Clone + 'static,
    F: Fn(Visibility) + 'static,
{
    on_change(Visibility::from_offset(source.offset()));

    let reader = source.clone();
    let listener = source.add_listener(Box::new(move || {
        on_change(Visibility::from_offset(reader.offset()));
    }));

    ScrollSubscription { source, listener }
}

/// Прокрутка окна браузера
#[derive(Clone)]
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollSource for WindowScroll {
    type Listener = Closure<dyn Fn()>;

    fn offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn add_listener(&self, on_scroll: Box<dyn Fn()>) -> Option<Self::Listener> {
        let handler = Closure::wrap(on_scroll);
        match self
            .window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
        {
            Ok(()) => Some(handler),
            Err(err) => {
                log::error!("Failed to subscribe to scroll events: {:?}", err);
                None
            }
        }
    }

    fn remove_listener(&self, listener: Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            log::error!("Failed to remove scroll listener: {:?}", err);
        }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
