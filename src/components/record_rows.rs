use leptos::prelude::*;
use crate::app::TableCtx;
use crate::components::CellEditor;
use crate::state::Column;

const CELL_STYLE: &str = "padding: 6px 8px; border-bottom: 1px solid #0a1a0a; cursor: text;";

#[component]
pub fn RecordRows() -> impl IntoView {
    let ctx = use_context::<TableCtx>().unwrap();

    let rows = move || {
        let records = ctx.table.with(|t| t.records().to_vec());

        records
            .into_iter()
            .enumerate()
            .map(|(position, chemical)| {
                let is_selected = move || ctx.selected.with(|s| s.contains(&position));

                let cells = Column::ALL
                    .into_iter()
                    .map(|column| {
                        let text = chemical.display_text(column);
                        let editing_here = move || {
                            ctx.editing
                                .with(|e| e.as_ref().filter(|e| e.position == position && e.column == column).map(|e| e.initial.clone()))
                        };
                        view! {
                            <td style=CELL_STYLE on:click=move |_| {
                                if ctx.editing.with_untracked(|e| e.is_none()) {
                                    ctx.begin_edit(position, column);
                                }
                            }>
                                {move || match editing_here() {
                                    Some(initial) => view! { <CellEditor initial=initial /> }.into_any(),
                                    None => text.clone().into_any(),
                                }}
                            </td>
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <tr style=move || {
                        if is_selected() {
                            "background: #041004;"
                        } else {
                            "background: transparent;"
                        }
                    }>
                        <td style=CELL_STYLE>
                            <input
                                type="checkbox"
                                prop:checked=is_selected
                                on:change=move |ev| ctx.set_selected(position, event_target_checked(&ev))
                            />
                        </td>
                        <td style=CELL_STYLE>{format!("{}.", position + 1)}</td>
                        {cells}
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <tbody>{rows}</tbody> }
}
