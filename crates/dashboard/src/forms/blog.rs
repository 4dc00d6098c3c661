use eduadmin_client::http::ApiClient;
use eduadmin_client::models::blog::{Blog, BlogPayload};
use eduadmin_client::models::ContentStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::nested::Repeatable;
use eduadmin_core::slug::generate_slug;
use eduadmin_core::validation::{check_url, require_text, FieldErrors};

use super::{check_slug, filled_strings, optional, FormSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub cover_image: String,
    pub category: String,
    pub tags: Repeatable<String>,
    pub status: ContentStatus,
}

pub struct BlogForm;

impl FormSchema for BlogForm {
    type Record = Blog;
    type Draft = BlogDraft;
    type Payload = BlogPayload;

    const ENTITY: &'static str = "Blog";

    fn resource(client: &ApiClient) -> Resource<Blog> {
        client.blogs()
    }

    fn validate(draft: &BlogDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "Title", &draft.title);
        check_slug(&mut errors, &draft.slug);
        require_text(&mut errors, "content", "Content", &draft.content);
        check_url(&mut errors, "coverImage", "Cover image", &draft.cover_image, false);
        errors
    }

    fn to_payload(draft: &BlogDraft) -> BlogPayload {
        BlogPayload {
            title: draft.title.trim().to_string(),
            slug: draft.slug.trim().to_string(),
            excerpt: optional(&draft.excerpt),
            content: draft.content.trim().to_string(),
            author: optional(&draft.author),
            cover_image: optional(&draft.cover_image),
            category: optional(&draft.category),
            tags: filled_strings(&draft.tags),
            status: draft.status,
        }
    }

    fn from_record(blog: &Blog) -> BlogDraft {
        BlogDraft {
            title: blog.title.clone(),
            slug: blog.slug.clone(),
            excerpt: blog.excerpt.clone().unwrap_or_default(),
            content: blog.content.clone(),
            author: blog.author.clone().unwrap_or_default(),
            cover_image: blog.cover_image.clone().unwrap_or_default(),
            category: blog.category.clone().unwrap_or_default(),
            tags: Repeatable::from_rows(blog.tags.clone()),
            status: blog.status,
        }
    }

    fn after_edit(draft: &mut BlogDraft, field: &str) {
        if field == "title" {
            draft.slug = generate_slug(&draft.title);
        }
    }
}
