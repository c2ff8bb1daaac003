//! Временные уведомления панели отчётов

/// Сколько уведомление остаётся на экране
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

pub const LOAD_FAILED_TEXT: &str = "No se pudieron cargar los datos. Intente nuevamente.";
pub const LOAD_SUCCESS_TEXT: &str = "Los reportes se han actualizado correctamente";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Уведомление с порядковым номером: таймер скрывает только "своё" уведомление
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(id: u32, kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
        }
    }
}

/// Убрать уведомление, если на экране всё ещё оно
pub fn dismiss(current: &mut Option<Notice>, id: u32) {
    if current.as_ref().is_some_and(|notice| notice.id == id) {
        *current = None;
    }
}
