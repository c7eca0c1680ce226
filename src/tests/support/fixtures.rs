use chrono::Utc;
use uuid::Uuid;

use crate::{
    about_me::domain::entities::AboutMe, contact::domain::entities::Contact,
    education::domain::entities::Education, experience::domain::entities::Experience,
    project::domain::entities::Project, skill::domain::entities::Skill,
    social_media::domain::entities::SocialMedia,
};

pub fn skill(name: &str, order: i32) -> Skill {
    let now = Utc::now();
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        icon: None,
        order,
        created_at: now,
        updated_at: now,
    }
}

pub fn experience(title: &str, start: &str, end: &str) -> Experience {
    let now = Utc::now();
    Experience {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        location: "Remote".to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        responsibilities: vec!["Shipped features".to_string()],
        created_at: now,
        updated_at: now,
    }
}

pub fn education(degree: &str, start: &str, end: &str) -> Education {
    let now = Utc::now();
    Education {
        id: Uuid::new_v4(),
        degree: degree.to_string(),
        institution: "State University".to_string(),
        location: "Kupang".to_string(),
        start_year: start.to_string(),
        end_year: end.to_string(),
        descriptions: vec!["Graduated with honors".to_string()],
        created_at: now,
        updated_at: now,
    }
}

pub fn project(title: &str, order: i32) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        image: "/project-images/project-1700000000000-42.png".to_string(),
        link: "https://example.com".to_string(),
        tags: vec!["rust".to_string()],
        order,
        created_at: now,
        updated_at: now,
    }
}

pub fn social_media(platform: &str, order: i32) -> SocialMedia {
    let now = Utc::now();
    SocialMedia {
        id: Uuid::new_v4(),
        platform: platform.to_string(),
        url: format!("https://{}.com/me", platform.to_lowercase()),
        order,
        created_at: now,
        updated_at: now,
    }
}

pub fn about_me() -> AboutMe {
    let now = Utc::now();
    AboutMe {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        title: "Software Engineer".to_string(),
        bio: "Writes programs for analytical engines.".to_string(),
        picture_url: "/placeholder.svg".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn contact() -> Contact {
    let now = Utc::now();
    Contact {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_string(),
        phone: "+62 812 0000 0000".to_string(),
        address: "Kupang, Indonesia".to_string(),
        created_at: now,
        updated_at: now,
    }
}
