pub use super::composer::Entity as Composer;
pub use super::customer::Entity as Customer;
pub use super::person::Entity as Person;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
