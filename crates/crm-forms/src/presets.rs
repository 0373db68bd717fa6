// File: src/presets.rs
// Purpose: Field bindings for the product's screens

use crm_validation_core::{FieldRule, InputHandler, Pattern, Rule};

use crate::config::TaskConfig;
use crate::feedback::ErrorTranslator;
use crate::field::{ChangePolicy, FieldBinding};
use crate::form::Form;

fn format(pattern: Pattern, field_name: &str) -> FieldRule {
    FieldRule::new(Rule::Format(pattern)).named(field_name)
}

fn required(field_name: &str) -> FieldRule {
    FieldRule::new(Rule::Required).named(field_name)
}

/// Alphabet-only text field that drops any other keystroke
fn name_field(name: &str, field_name: &str) -> FieldBinding {
    FieldBinding::new(name)
        .rule(format(Pattern::AlphabetOnly, field_name))
        .policy(ChangePolicy::Reject)
}

pub fn login_form() -> Form {
    Form::new("login")
        .field(
            FieldBinding::new("email")
                .rule(Rule::Format(Pattern::Email))
                .live_message("Please enter a valid email address (e.g., admin@company.com)")
                .blur_message("Please enter a valid email address (e.g., admin@company.com)"),
        )
        .field(
            FieldBinding::new("password")
                .rule(Rule::Password)
                .live_message("Password should be at least 6 characters long"),
        )
        .translator(ErrorTranslator::login())
        .clear_on_failure("password")
}

/// Task form, also used by the new-task modal
pub fn task_form(config: &TaskConfig) -> Form {
    let max = config.description_max_length;
    Form::new("task")
        .field(
            FieldBinding::new("title")
                .rule(required("Title"))
                .live_message("Title is required"),
        )
        .field(
            FieldBinding::new("description")
                .rule(FieldRule::new(Rule::MaxLength(max)).named("Description"))
                .live_message(format!("Description should not exceed {} characters", max)),
        )
        .translator(ErrorTranslator::plain("Failed to create task"))
}

pub fn employee_form() -> Form {
    Form::new("employee")
        .field(
            FieldBinding::new("name")
                .rule(required("Name"))
                .rule(format(Pattern::AlphabetOnly, "Name"))
                .policy(ChangePolicy::Reject),
        )
        .field(
            FieldBinding::new("email")
                .rule(required("Email"))
                .rule(Rule::Format(Pattern::Email))
                .live_message("Please enter a valid email address"),
        )
        .field(
            FieldBinding::new("password")
                .rule(required("Password"))
                .rule(Rule::Password)
                .live_message("Password should be at least 6 characters long"),
        )
        .field(FieldBinding::new("role").initial("employee"))
        .translator(ErrorTranslator::plain("Failed to create user"))
}

/// Supplier, buyer, bank and client details of an invoice
pub fn invoice_form() -> Form {
    Form::new("invoice")
        .field(FieldBinding::new("client_name"))
        .field(FieldBinding::new("client_email").rule(format(Pattern::Email, "Client Email")))
        .field(name_field("supplier_name", "Supplier Name"))
        .field(
            FieldBinding::new("supplier_gstin")
                .rule(format(Pattern::Gstin, "Supplier GSTIN"))
                .uppercase(),
        )
        .field(
            FieldBinding::new("supplier_contact")
                .rule(format(Pattern::PhoneNumber, "Supplier Contact"))
                .policy(ChangePolicy::Handler(InputHandler::PhoneNumber)),
        )
        .field(
            FieldBinding::new("supplier_email").rule(format(Pattern::Email, "Supplier Email")),
        )
        .field(
            FieldBinding::new("buyer_gstin")
                .rule(format(Pattern::Gstin, "Buyer GSTIN"))
                .uppercase(),
        )
        .field(name_field("bank_name", "Bank Name"))
        .field(
            FieldBinding::new("bank_account")
                .rule(format(Pattern::BankAccount, "Account Number"))
                .policy(ChangePolicy::Handler(InputHandler::BankAccount)),
        )
        .field(
            FieldBinding::new("bank_ifsc")
                .rule(format(Pattern::IfscCode, "IFSC Code"))
                .uppercase(),
        )
        .field(name_field("bank_branch", "Branch"))
        .field(FieldBinding::new("bank_upi").rule(format(Pattern::UpiId, "UPI ID")))
        .translator(ErrorTranslator::plain("Failed to save invoice"))
}

/// One line of the invoice item table
pub fn line_item_form() -> Form {
    Form::new("line_item")
        .field(FieldBinding::new("desc"))
        .field(
            FieldBinding::new("qty")
                .rule(FieldRule::new(Rule::PositiveNumber).named("Quantity"))
                .policy(ChangePolicy::Handler(InputHandler::DecimalNumbers))
                .initial("1"),
        )
        .field(
            FieldBinding::new("price")
                .rule(FieldRule::new(Rule::NonNegativeNumber).named("Price"))
                .policy(ChangePolicy::Handler(InputHandler::DecimalNumbers))
                .initial("0"),
        )
        .field(
            FieldBinding::new("hsn")
                .rule(format(Pattern::HsnSac, "HSN/SAC"))
                .policy(ChangePolicy::Handler(InputHandler::HsnSac)),
        )
}
