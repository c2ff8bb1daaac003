/// Смещение (px), начиная с которого кнопка "наверх" становится видимой.
/// Граница не включается: при смещении ровно 100 кнопка скрыта.
pub const SCROLL_TOP_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_TOP_THRESHOLD {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}
