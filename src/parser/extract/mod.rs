pub mod column_table;
pub mod definitions;
pub mod inline;
pub mod lines;
pub mod list_items;
pub mod table_rows;
