pub mod main_menu;
