use std::rc::Rc;
use web_sys::File;
use yew::prelude::*;

pub const BUSINESS_INDUSTRIES: [&str; 9] = [
    "Hair Salon",
    "Nail Salon",
    "Spa & Wellness",
    "Barbershop",
    "Beauty Salon",
    "Massage Therapy",
    "Tattoo Studio",
    "Fitness Studio",
    "Other Service Business",
];

pub const SUCCESS_MESSAGE: &str =
    "Your request has been sent via WhatsApp. We will contact you shortly!";

/// The text fields of the access request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    BusinessIndustry,
    CompanyWebsite,
    InstagramHandle,
    Message,
}

impl Field {
    #[cfg(test)]
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::BusinessIndustry,
        Field::CompanyWebsite,
        Field::InstagramHandle,
        Field::Message,
    ];

    /// Used as both `id` and `name` of the form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::BusinessIndustry => "businessIndustry",
            Field::CompanyWebsite => "companyWebsite",
            Field::InstagramHandle => "instagramHandle",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormRecord {
    pub full_name: String,
    pub email: String,
    // Kept on the record for a future upload control; never sent.
    pub photo: Option<File>,
    pub business_industry: String,
    pub company_website: String,
    pub instagram_handle: String,
    pub message: String,
}

impl FormRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::BusinessIndustry => &self.business_industry,
            Field::CompanyWebsite => &self.company_website,
            Field::InstagramHandle => &self.instagram_handle,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::BusinessIndustry => &mut self.business_industry,
            Field::CompanyWebsite => &mut self.company_website,
            Field::InstagramHandle => &mut self.instagram_handle,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Outcome of the last submission. Only `Idle` and `Success` are reached today:
/// the WhatsApp hand-off has no async step that could be pending or fail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Loading => "",
            SubmissionStatus::Success(message) | SubmissionStatus::Error(message) => message,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub record: FormRecord,
    pub status: SubmissionStatus,
}

pub enum FormAction {
    Update(Field, String),
    Submitted,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Update(field, value) => {
                let mut next = (*self).clone();
                next.record.set(field, value);
                next.into()
            }
            FormAction::Submitted => FormState {
                record: FormRecord::default(),
                status: SubmissionStatus::Success(SUCCESS_MESSAGE.to_string()),
            }
            .into(),
        }
    }
}
