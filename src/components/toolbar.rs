use leptos::prelude::*;
use crate::app::TableCtx;

const BUTTON_STYLE: &str = "background: transparent; color: #44dd66; border: 1px solid #44dd66; \
                            padding: 6px 12px; cursor: pointer; font-family: inherit; font-size: 12px;";

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<TableCtx>().unwrap();
    let nothing_selected = move || ctx.selected.with(|s| s.is_empty());

    view! {
        <div style="display: flex; gap: 8px; margin-bottom: 12px; flex-wrap: wrap;">
            <button style=BUTTON_STYLE on:click=move |_| ctx.add_row()>"Add"</button>
            <button style=BUTTON_STYLE disabled=nothing_selected on:click=move |_| ctx.move_up()>
                "Move up"
            </button>
            <button style=BUTTON_STYLE disabled=nothing_selected on:click=move |_| ctx.move_down()>
                "Move down"
            </button>
            <button style=BUTTON_STYLE disabled=nothing_selected on:click=move |_| ctx.delete_selected()>
                "Delete"
            </button>
            <button
                style=BUTTON_STYLE
                disabled=move || !ctx.table.with(|t| t.can_undo())
                on:click=move |_| ctx.undo()
            >
                "Undo"
            </button>
            <button
                style=BUTTON_STYLE
                disabled=move || !ctx.table.with(|t| t.can_redo())
                on:click=move |_| ctx.redo()
            >
                "Redo"
            </button>
            <button style=BUTTON_STYLE on:click=move |_| ctx.reset()>"Reset"</button>
            <button style=BUTTON_STYLE on:click=move |_| ctx.download_csv()>"Save CSV"</button>
        </div>
    }
}
