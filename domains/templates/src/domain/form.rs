//! Template form input and validation
//!
//! Submitted values are trimmed and blank values treated as missing before
//! the rules run, so `"   "` fails `required` just like an absent field.

use serde::{Deserialize, Serialize};
use validator::Validate;

use sendportal_common::FieldErrors;

pub const NAME_TAKEN: &str = "The name has already been taken.";

/// Raw `{name, content}` form body, also echoed back as old input
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct TemplateForm {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(required(message = "The content field is required."))]
    pub content: Option<String>,
}

/// Form values that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTemplate {
    pub name: String,
    pub content: String,
}

impl TemplateForm {
    /// Trim values and drop the ones left empty
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: clean(self.name),
            content: clean(self.content),
        }
    }

    /// Run the field rules, returning either clean values or per-field errors
    pub fn validated(self) -> Result<ValidTemplate, FieldErrors> {
        let form = self.normalized();
        form.validate().map_err(FieldErrors::from)?;

        // `required` has passed, so both values are present
        Ok(ValidTemplate {
            name: form.name.unwrap_or_default(),
            content: form.content.unwrap_or_default(),
        })
    }
}
