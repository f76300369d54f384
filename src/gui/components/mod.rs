// src/gui/components/mod.rs
pub mod export_bar;
pub mod lookup_panel;
pub mod notes_table;
