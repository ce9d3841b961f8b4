//! GitHub-Flavoured Markdown pipe tables.
//!
//! A [`Table`] is a fixed set of aligned [`Column`]s plus ordered rows of
//! string cells. [`render_table`] lays it out as aligned pipe-table text:
//!
//! ```
//! use cmdoc_table::{Alignment, Column, Table, render_table};
//!
//! let mut table = Table::new(vec![
//!     Column::new("Name", Alignment::Left),
//!     Column::new("Type", Alignment::Centre),
//! ])
//! .unwrap();
//! table.add_row(vec!["Path".to_owned(), "String".to_owned()]).unwrap();
//!
//! assert_eq!(
//!     render_table(&table),
//!     vec![
//!         "| Name | Type   |",
//!         "| :--- | :----: |",
//!         "| Path | String |",
//!     ]
//! );
//! ```

mod model;
mod render;

pub use model::{Alignment, Column, Table, TableError};
pub use render::render_table;
