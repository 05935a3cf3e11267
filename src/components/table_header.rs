use leptos::prelude::*;
use crate::app::TableCtx;
use crate::state::Column;

const HEADER_CELL_STYLE: &str = "text-align: left; padding: 6px 8px; color: #44dd66; \
                                 border-bottom: 1px solid #44dd66; white-space: nowrap;";
const ARROW_STYLE: &str = "cursor: pointer; color: #66cc88; margin-left: 4px;";

#[component]
pub fn TableHeader() -> impl IntoView {
    let ctx = use_context::<TableCtx>().unwrap();

    let all_selected = move || {
        let len = ctx.table.with(|t| t.len());
        len > 0 && ctx.selected.with(|s| s.len() == len)
    };

    let column_headers = Column::ALL
        .into_iter()
        .map(|column| {
            view! {
                <th style=HEADER_CELL_STYLE>
                    {column.header()}
                    <span
                        style=ARROW_STYLE
                        title="Sort ascending"
                        on:click=move |_| ctx.sort(column, "asc")
                    >
                        "\u{25B2}"
                    </span>
                    <span
                        style=ARROW_STYLE
                        title="Sort descending"
                        on:click=move |_| ctx.sort(column, "desc")
                    >
                        "\u{25BC}"
                    </span>
                </th>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <thead>
            <tr>
                <th style=HEADER_CELL_STYLE>
                    <input
                        type="checkbox"
                        prop:checked=all_selected
                        on:change=move |ev| ctx.set_all_selected(event_target_checked(&ev))
                    />
                </th>
                <th style=HEADER_CELL_STYLE>"#"</th>
                {column_headers}
            </tr>
        </thead>
    }
}
