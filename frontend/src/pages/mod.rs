pub mod home_page;
pub mod tasks_page;
