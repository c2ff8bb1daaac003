//! Прокрутка в памяти для тестов: смещение задаётся вручную,
//! обработчики вызываются синхронно

use super::source::ScrollSource;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct FakeScroll {
    state: Rc<RefCell<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    offset: f64,
    next_id: usize,
    listeners: Vec<(usize, Rc<dyn Fn()>)>,
    scrolled_to_top: usize,
}

impl FakeScroll {
    pub fn at(offset: f64) -> Self {
        let fake = Self::default();
        fake.state.borrow_mut().offset = offset;
        fake
    }

    /// Сдвинуть страницу и разослать событие прокрутки
    pub fn scroll_to(&self, offset: f64) {
        self.state.borrow_mut().offset = offset;
        let listeners: Vec<Rc<dyn Fn()>> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn scrolled_to_top(&self) -> usize {
        self.state.borrow().scrolled_to_top
    }
}

impl ScrollSource for FakeScroll {
    type Listener = usize;

    fn offset(&self) -> f64 {
        self.state.borrow().offset
    }

    fn add_listener(&self, on_scroll: Box<dyn Fn()>) -> Option<usize> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::from(on_scroll)));
        Some(id)
    }

    fn remove_listener(&self, listener: usize) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != listener);
    }

    fn scroll_to_top(&self) {
        self.state.borrow_mut().scrolled_to_top += 1;
    }
}
