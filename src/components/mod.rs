mod cell_editor;
mod record_rows;
mod table_header;
mod toolbar;

pub use cell_editor::CellEditor;
pub use record_rows::RecordRows;
pub use table_header::TableHeader;
pub use toolbar::Toolbar;
