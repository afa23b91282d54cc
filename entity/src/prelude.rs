pub use super::views::Entity as Views;
