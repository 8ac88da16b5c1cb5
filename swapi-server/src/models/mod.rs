//! Record types shared by the repositories and the HTTP layer
//!
//! Each table gets its own row type and its own serializer. Request bodies
//! are separate `*Fields` types whose members are all optional: a missing
//! or null field is passed through to the database as NULL, and any other
//! JSON scalar is stored as its text form.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;

mod text;

pub use favorite::{FavoritePeople, FavoritePeopleEntry, FavoritePlanet, FavoritePlanetEntry};
pub use person::{Person, PersonFields};
pub use planet::{Planet, PlanetFields};
pub use user::{NewUser, User, UserSummary};
