use chrono::Utc;
use rand::Rng;

/// Where an uploaded image for one resource comes from and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSlot {
    /// Multipart field carrying the file.
    pub form_field: &'static str,
    /// Payload field that receives the public URL.
    pub payload_field: &'static str,
    /// Public folder, also the first URL segment.
    pub folder: &'static str,
    /// File name prefix.
    pub prefix: &'static str,
}

impl ImageSlot {
    pub const ABOUT_PICTURE: ImageSlot = ImageSlot {
        form_field: "picture",
        payload_field: "pictureUrl",
        folder: "about-images",
        prefix: "about",
    };

    pub const PROJECT_IMAGE: ImageSlot = ImageSlot {
        form_field: "image",
        payload_field: "image",
        folder: "project-images",
        prefix: "project",
    };

    pub const ALL: [ImageSlot; 2] = [Self::ABOUT_PICTURE, Self::PROJECT_IMAGE];

    pub fn for_folder(folder: &str) -> Option<ImageSlot> {
        Self::ALL.into_iter().find(|slot| slot.folder == folder)
    }

    /// `<prefix>-<millis>-<random><extension>`, unique enough for one site.
    pub fn new_file_name(&self, extension: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
        format!("{}-{millis}-{suffix}{extension}", self.prefix)
    }

    pub fn public_url(&self, file_name: &str) -> String {
        format!("/{}/{}", self.folder, file_name)
    }
}
