//! UI Components

mod checklist_table;
mod document_info_fields;
mod expense_form;
mod form_nav;
mod mooring_form;
mod pre_transfer_form;
mod signature_upload;
mod standing_orders_form;
mod status_banner;
mod timesheet_form;

pub use checklist_table::ChecklistTable;
pub use document_info_fields::DocumentInfoFields;
pub use expense_form::ExpenseSheetForm;
pub use form_nav::FormNav;
pub use mooring_form::MooringReadinessForm;
pub use pre_transfer_form::PreTransferForm;
pub use signature_upload::SignatureUpload;
pub use standing_orders_form::StandingOrdersForm;
pub use status_banner::StatusBanner;
pub use timesheet_form::TimesheetForm;

use wasm_bindgen::JsCast;

/// Value of the input element an event fired on.
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().map(|input| input.value()))
        .unwrap_or_default()
}

/// Checked state of the checkbox an event fired on.
pub(crate) fn input_checked(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| {
            target
                .dyn_ref::<web_sys::HtmlInputElement>()
                .map(|input| input.checked())
        })
        .unwrap_or(false)
}

/// Value of the textarea an event fired on.
pub(crate) fn textarea_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| {
            target
                .dyn_ref::<web_sys::HtmlTextAreaElement>()
                .map(|area| area.value())
        })
        .unwrap_or_default()
}
