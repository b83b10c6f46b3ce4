pub mod search_input_box;
pub mod search_results_top_bar;
pub mod trademark_result_card;
pub mod search_result_list;
pub mod filter_panel;
pub mod pagination_controls;
pub mod apply_for_trademark;
