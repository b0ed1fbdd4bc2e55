mod home;
pub use home::Home;

mod projects;
pub use projects::Projects;

mod services;
pub use services::Services;

mod partners;
pub use partners::{PartnerDetail, Partners};

mod blog;
pub use blog::{Blog, BlogPost};

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod not_found;
pub use not_found::NotFound;
