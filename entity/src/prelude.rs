pub use super::continent::Entity as Continent;
pub use super::country::Entity as Country;
pub use super::favourite::Entity as Favourite;
pub use super::visited::Entity as Visited;
