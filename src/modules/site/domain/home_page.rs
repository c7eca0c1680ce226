use serde::Serialize;

use crate::{
    about_me::domain::entities::AboutMe, contact::domain::entities::Contact,
    education::domain::entities::Education, experience::domain::entities::Experience,
    project::domain::entities::Project, skill::domain::entities::Skill,
    social_media::domain::entities::SocialMedia,
};

/// Everything the public home page shows. A section that could not be
/// loaded is simply empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub about: Option<AboutMe>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub projects: Vec<Project>,
    pub contact: Option<Contact>,
    pub social_media: Vec<SocialMedia>,
}
