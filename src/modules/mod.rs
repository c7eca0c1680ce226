pub mod about_me;
pub mod contact;
pub mod content;
pub mod education;
pub mod experience;
pub mod media;
pub mod project;
pub mod site;
pub mod skill;
pub mod social_media;
