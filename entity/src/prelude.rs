pub use super::employee::Entity as Employee;
pub use super::loading_record::Entity as LoadingRecord;
