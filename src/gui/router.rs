// src/gui/router.rs
use crate::config::options::AuditMode::{self, *};

use super::forms::{self, Form};

pub static FORMS: &[&'static dyn Form] = &[
    &forms::single::FORM,
    &forms::bulk::FORM,
    &forms::sitemap::FORM,
];

pub fn all_forms() -> &'static [&'static dyn Form] {
    FORMS
}

pub fn form_for(mode: AuditMode) -> &'static dyn Form {
    match mode {
        Single => &forms::single::FORM,
        Bulk => &forms::bulk::FORM,
        Sitemap => &forms::sitemap::FORM,
    }
}

pub fn index_of(mode: AuditMode) -> usize {
    FORMS
        .iter()
        .position(|f| f.kind() == mode)
        .unwrap_or(0)
}
