//! Ячейка таблицы для уже отформатированного числового значения
//!
//! ```ignore
//! <TableCellNumeric text=row.total_cost />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Выравнивает значение по правому краю, как `isNumeric` у числовых колонок
#[component]
pub fn TableCellNumeric(
    /// Готовый текст ячейки
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <span style="font-variant-numeric: tabular-nums">{text}</span>
        </TableCell>
    }
}
