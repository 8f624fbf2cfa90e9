pub mod prompt_view;
