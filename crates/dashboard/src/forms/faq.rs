use eduadmin_client::http::ApiClient;
use eduadmin_client::models::faq::{Faq, FaqPayload};
use eduadmin_client::models::ActiveStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::validation::{check_number, parse_number, require_text, FieldErrors, NumberRule};

use super::{optional, FormSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order: String,
    pub status: ActiveStatus,
}

pub struct FaqForm;

impl FormSchema for FaqForm {
    type Record = Faq;
    type Draft = FaqDraft;
    type Payload = FaqPayload;

    const ENTITY: &'static str = "FAQ";

    fn resource(client: &ApiClient) -> Resource<Faq> {
        client.faqs()
    }

    fn validate(draft: &FaqDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "question", "Question", &draft.question);
        require_text(&mut errors, "answer", "Answer", &draft.answer);
        check_number(
            &mut errors,
            "order",
            "Order",
            &draft.order,
            NumberRule::optional().min(0.0),
        );
        errors
    }

    fn to_payload(draft: &FaqDraft) -> FaqPayload {
        FaqPayload {
            question: draft.question.trim().to_string(),
            answer: draft.answer.trim().to_string(),
            category: optional(&draft.category),
            order: parse_number(&draft.order).map(|n| n as i64),
            status: draft.status,
        }
    }

    fn from_record(faq: &Faq) -> FaqDraft {
        FaqDraft {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            category: faq.category.clone().unwrap_or_default(),
            order: faq.order.map(|o| o.to_string()).unwrap_or_default(),
            status: faq.status,
        }
    }
}
