pub use super::teachers::Entity as Teachers;
