use crate::components::{RecordRows, TableHeader, Toolbar};
use crate::config::TableConfig;
use crate::export::CSV_FILE_NAME;
use crate::state::{seed_chemicals, Chemical, Column};
use crate::table::InventoryTable;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CONFIG_STORAGE_KEY: &str = "chemical-inventory-config";

pub const FONT: &str = "JetBrains Mono, Fira Code, Consolas, monospace";

/// Cell currently shown as an input.
#[derive(Clone, Debug, PartialEq)]
pub struct EditingCell {
    pub position: usize,
    pub column: Column,
    pub initial: String,
}

/// Shared handles for the table session, provided to every component.
#[derive(Clone, Copy)]
pub struct TableCtx {
    pub table: RwSignal<InventoryTable>,
    pub selected: RwSignal<BTreeSet<usize>>,
    pub editing: RwSignal<Option<EditingCell>>,
}

impl TableCtx {
    fn new(table: InventoryTable) -> Self {
        Self {
            table: RwSignal::new(table),
            selected: RwSignal::new(BTreeSet::new()),
            editing: RwSignal::new(None),
        }
    }

    fn clear_transient(&self) {
        self.selected.set(BTreeSet::new());
        self.editing.set(None);
    }

    pub fn move_up(&self) {
        let selection = self.selected.get_untracked();
        let mut moved = BTreeSet::new();
        self.table.update(|t| moved = t.move_up(selection));
        self.editing.set(None);
        self.selected.set(moved);
    }

    pub fn move_down(&self) {
        let selection = self.selected.get_untracked();
        let mut moved = BTreeSet::new();
        self.table.update(|t| moved = t.move_down(selection));
        self.editing.set(None);
        self.selected.set(moved);
    }

    pub fn delete_selected(&self) {
        let selection = self.selected.get_untracked();
        if selection.is_empty() {
            return;
        }
        self.table.update(|t| {
            t.delete(selection);
        });
        self.clear_transient();
    }

    pub fn add_row(&self) {
        let mut position = 0;
        self.table.update(|t| position = t.add_row());
        self.begin_edit(position, Column::Name);
    }

    pub fn sort(&self, column: Column, direction: &'static str) {
        let mut result = Ok(());
        self.table.update(|t| result = t.sort_by_name(column, direction));
        match result {
            Ok(()) => self.clear_transient(),
            Err(e) => tracing::error!(%e, ?column, "Sort failed"),
        }
    }

    pub fn undo(&self) {
        let mut changed = false;
        self.table.update(|t| changed = t.undo());
        self.editing.set(None);
        if changed {
            self.selected.set(BTreeSet::new());
        }
    }

    pub fn redo(&self) {
        let mut changed = false;
        self.table.update(|t| changed = t.redo());
        self.editing.set(None);
        if changed {
            self.selected.set(BTreeSet::new());
        }
    }

    pub fn reset(&self) {
        self.table.update(|t| t.reset());
        self.clear_transient();
    }

    pub fn set_all_selected(&self, selected: bool) {
        let len = self.table.with_untracked(|t| t.len());
        self.selected.set(if selected {
            (0..len).collect()
        } else {
            BTreeSet::new()
        });
    }

    pub fn set_selected(&self, position: usize, selected: bool) {
        self.selected.update(|s| {
            if selected {
                s.insert(position);
            } else {
                s.remove(&position);
            }
        });
    }

    pub fn begin_edit(&self, position: usize, column: Column) {
        // Opening an editor does not change any row, so don't re-render them
        let mut initial = None;
        self.table
            .update_untracked(|t| initial = t.begin_edit(position, column));
        if let Some(initial) = initial {
            self.editing.set(Some(EditingCell {
                position,
                column,
                initial,
            }));
        }
    }

    pub fn commit_edit(&self, raw: &str) {
        let mut outcome = None;
        self.table.update(|t| outcome = t.commit_edit(raw));
        if let Some(outcome) = outcome {
            tracing::debug!(?outcome, "Cell edit committed");
        }
        self.editing.set(None);
    }

    pub fn cancel_edit(&self) {
        self.table.update_untracked(|t| t.cancel_edit());
        self.editing.set(None);
    }

    pub fn download_csv(&self) {
        let csv = self.table.with_untracked(|t| t.to_csv());
        if let Err(e) = download_text(&csv, CSV_FILE_NAME, "text/csv") {
            tracing::error!(error = ?e, "CSV download failed");
        }
    }
}

fn load_config() -> TableConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => TableConfig::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!(%e, "Ignoring stored table configuration");
            TableConfig::default()
        }),
        None => TableConfig::default(),
    }
}

fn load_seed() -> Vec<Chemical> {
    seed_chemicals().unwrap_or_else(|e| {
        tracing::error!(%e, "Starting with an empty table");
        Vec::new()
    })
}

fn download_text(contents: &str, file_name: &str, mime: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

fn on_shortcut(ctx: TableCtx, ev: web_sys::KeyboardEvent) {
    if ctx.editing.get_untracked().is_some() {
        return;
    }

    let modifier = ev.ctrl_key() || ev.meta_key();
    let key = ev.key();

    match key.as_str() {
        "z" | "Z" if modifier && ev.shift_key() => {
            ev.prevent_default();
            ctx.redo();
        }
        "z" | "Z" if modifier => {
            ev.prevent_default();
            ctx.undo();
        }
        "y" | "Y" if modifier => {
            ev.prevent_default();
            ctx.redo();
        }
        "Delete" => ctx.delete_selected(),
        "Escape" => ctx.selected.set(BTreeSet::new()),
        _ => {}
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = TableCtx::new(InventoryTable::new(load_seed(), load_config()));
    provide_context(ctx);

    // Autosave only touches the history; the rows are unchanged.
    let interval_ms = ctx.table.with_untracked(|t| t.config().autosave_interval_ms);
    let table = ctx.table;
    Interval::new(interval_ms, move || {
        table.update_untracked(|t| t.autosave());
    })
    .forget();

    let _ = window_event_listener(leptos::ev::keydown, move |ev| on_shortcut(ctx, ev));

    view! {
        <div style=format!(
            "min-height: 100vh; background: #020202; color: #ccffdd; padding: 24px; \
             box-sizing: border-box; font-family: {}; font-size: 13px;",
            FONT
        )>
            <h1 style="font-size: 18px; color: #44dd66; margin: 0 0 16px 0; letter-spacing: 1px;">
                "Chemical Supplies"
            </h1>
            <Toolbar />
            <table style="width: 100%; border-collapse: collapse;">
                <TableHeader />
                <RecordRows />
            </table>
            <div style="margin-top: 12px; color: #66cc88; font-size: 11px; letter-spacing: 0.5px;">
                "[CLICK] edit cell  [CTRL+Z] undo  [CTRL+Y] redo  [DEL] delete selected  [ESC] clear selection"
            </div>
        </div>
    }
}
