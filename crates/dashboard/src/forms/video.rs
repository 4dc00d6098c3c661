use eduadmin_client::http::ApiClient;
use eduadmin_client::models::video::{Video, VideoPayload};
use eduadmin_client::models::ContentStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::nested::Repeatable;
use eduadmin_core::validation::{check_url, require_text, FieldErrors};

use super::{filled_strings, optional, FormSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub category: String,
    pub duration: String,
    pub tags: Repeatable<String>,
    pub status: ContentStatus,
}

pub struct VideoForm;

impl FormSchema for VideoForm {
    type Record = Video;
    type Draft = VideoDraft;
    type Payload = VideoPayload;

    const ENTITY: &'static str = "Video";

    fn resource(client: &ApiClient) -> Resource<Video> {
        client.videos()
    }

    fn validate(draft: &VideoDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "Title", &draft.title);
        check_url(&mut errors, "videoUrl", "Video URL", &draft.video_url, true);
        check_url(
            &mut errors,
            "thumbnailUrl",
            "Thumbnail URL",
            &draft.thumbnail_url,
            false,
        );
        errors
    }

    fn to_payload(draft: &VideoDraft) -> VideoPayload {
        VideoPayload {
            title: draft.title.trim().to_string(),
            description: optional(&draft.description),
            video_url: draft.video_url.trim().to_string(),
            thumbnail_url: optional(&draft.thumbnail_url),
            category: optional(&draft.category),
            duration: optional(&draft.duration),
            tags: filled_strings(&draft.tags),
            status: draft.status,
        }
    }

    fn from_record(video: &Video) -> VideoDraft {
        VideoDraft {
            title: video.title.clone(),
            description: video.description.clone().unwrap_or_default(),
            video_url: video.video_url.clone(),
            thumbnail_url: video.thumbnail_url.clone().unwrap_or_default(),
            category: video.category.clone().unwrap_or_default(),
            duration: video.duration.clone().unwrap_or_default(),
            tags: Repeatable::from_rows(video.tags.clone()),
            status: video.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_url_is_required_and_well_formed() {
        let mut draft = VideoDraft {
            title: "Intro".into(),
            ..VideoDraft::default()
        };
        assert_eq!(
            VideoForm::validate(&draft).get("videoUrl"),
            Some("Video URL is required")
        );
        draft.video_url = "youtube dot com".into();
        assert_eq!(
            VideoForm::validate(&draft).get("videoUrl"),
            Some("Video URL must be a valid URL")
        );
        draft.video_url = "https://youtu.be/abc".into();
        assert!(VideoForm::validate(&draft).is_empty());
    }
}
