pub mod result_list;
pub mod search_input;
pub mod search_panel;
