pub mod survey;
pub mod test_drive_form;
pub mod util;

pub use sea_orm;
