use eduadmin_client::http::ApiClient;
use eduadmin_client::models::refer_partner::{ReferPartner, ReferPartnerPayload};
use eduadmin_client::models::ActiveStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::validation::{
    check_number, check_url, parse_number, require_text, FieldErrors, NumberRule,
};

use super::{optional, FormSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferPartnerDraft {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub logo: String,
    pub commission_rate: String,
    pub description: String,
    pub status: ActiveStatus,
}

pub struct ReferPartnerForm;

impl FormSchema for ReferPartnerForm {
    type Record = ReferPartner;
    type Draft = ReferPartnerDraft;
    type Payload = ReferPartnerPayload;

    const ENTITY: &'static str = "Refer partner";

    fn resource(client: &ApiClient) -> Resource<ReferPartner> {
        client.refer_partners()
    }

    fn validate(draft: &ReferPartnerDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Name", &draft.name);
        check_url(&mut errors, "website", "Website", &draft.website, false);
        check_url(&mut errors, "logo", "Logo", &draft.logo, false);
        check_number(
            &mut errors,
            "commissionRate",
            "Commission rate",
            &draft.commission_rate,
            NumberRule::optional().min(0.0).max(100.0),
        );
        errors
    }

    fn to_payload(draft: &ReferPartnerDraft) -> ReferPartnerPayload {
        ReferPartnerPayload {
            name: draft.name.trim().to_string(),
            contact_person: optional(&draft.contact_person),
            email: optional(&draft.email),
            phone: optional(&draft.phone),
            website: optional(&draft.website),
            logo: optional(&draft.logo),
            commission_rate: parse_number(&draft.commission_rate),
            description: optional(&draft.description),
            status: draft.status,
        }
    }

    fn from_record(p: &ReferPartner) -> ReferPartnerDraft {
        ReferPartnerDraft {
            name: p.name.clone(),
            contact_person: p.contact_person.clone().unwrap_or_default(),
            email: p.email.clone().unwrap_or_default(),
            phone: p.phone.clone().unwrap_or_default(),
            website: p.website.clone().unwrap_or_default(),
            logo: p.logo.clone().unwrap_or_default(),
            commission_rate: p.commission_rate.map(|r| r.to_string()).unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            status: p.status,
        }
    }
}
