//! Surcharge list, dialog, and form state for the admin screens.
//!
//! DESIGN
//! ======
//! The form keeps raw text for every editable field so partially typed
//! values survive re-renders; conversion to a `SurchargeInput` happens once,
//! on submit, through `SurchargeForm::to_input`.

#[cfg(test)]
#[path = "surcharges_test.rs"]
mod surcharges_test;

use crate::net::types::{Surcharge, SurchargeInput, SurchargeType};

/// Label of the confirmation shown before deleting a surcharge.
pub const DELETE_LABEL: &str = "Delete Surcharge";

/// Render an amount the way the table shows it: `10%` or `$10`.
pub fn format_amount(surcharge: &Surcharge) -> String {
    match surcharge.surcharge_type {
        SurchargeType::Percentage => format!("{}%", surcharge.amount),
        SurchargeType::Amount => format!("${}", surcharge.amount),
    }
}

/// Split a comma-separated field into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Amount must be a number")]
    InvalidAmount,
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

/// Editable copy of a surcharge in the create/edit dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct SurchargeForm {
    pub id: Option<String>,
    pub name: String,
    pub amount: String,
    pub surcharge_type: SurchargeType,
    pub active: bool,
    pub carriers: String,
    pub services: String,
}

impl Default for SurchargeForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            amount: String::new(),
            surcharge_type: SurchargeType::Amount,
            active: true,
            carriers: String::new(),
            services: String::new(),
        }
    }
}

impl SurchargeForm {
    pub fn from_surcharge(surcharge: &Surcharge) -> Self {
        Self {
            id: Some(surcharge.id.clone()),
            name: surcharge.name.clone(),
            amount: surcharge.amount.to_string(),
            surcharge_type: surcharge.surcharge_type,
            active: surcharge.active,
            carriers: surcharge.carriers.join(", "),
            services: surcharge.services.join(", "),
        }
    }

    /// Validate the form and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure in field order.
    pub fn to_input(&self) -> Result<SurchargeInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or(FormError::InvalidAmount)?;
        if amount < 0.0 {
            return Err(FormError::NegativeAmount);
        }
        Ok(SurchargeInput {
            name: name.to_owned(),
            amount,
            surcharge_type: self.surcharge_type,
            active: self.active,
            carriers: split_list(&self.carriers),
            services: split_list(&self.services),
        })
    }
}

/// Which dialog, if any, is open over the table.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit(Surcharge),
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Edit Surcharge",
            Self::Create | Self::Closed => "Add Surcharge",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Save",
            Self::Create | Self::Closed => "Create",
        }
    }

    pub fn initial_form(&self) -> SurchargeForm {
        match self {
            Self::Edit(surcharge) => SurchargeForm::from_surcharge(surcharge),
            Self::Create | Self::Closed => SurchargeForm::default(),
        }
    }

    /// The request a submit in this mode should send. Edits of a record
    /// without an id are dropped.
    pub fn mutation(&self) -> Option<SurchargeMutation> {
        match self {
            Self::Closed => None,
            Self::Create => Some(SurchargeMutation::Create),
            Self::Edit(surcharge) if surcharge.id.is_empty() => None,
            Self::Edit(surcharge) => Some(SurchargeMutation::Update { id: surcharge.id.clone() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurchargeMutation {
    Create,
    Update { id: String },
}

impl SurchargeMutation {
    pub fn success_title(&self) -> &'static str {
        match self {
            Self::Create => "Surcharge created successfully",
            Self::Update { .. } => "Surcharge updated successfully",
        }
    }

    pub fn failure_title(&self) -> &'static str {
        match self {
            Self::Create => "Failed to create surcharge",
            Self::Update { .. } => "Failed to update surcharge",
        }
    }
}

/// Counts shown on the overview page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurchargeSummary {
    pub total: usize,
    pub active: usize,
    pub percentage: usize,
    pub flat: usize,
}

impl SurchargeSummary {
    pub fn from_items(items: &[Surcharge]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            summary.total += 1;
            if item.active {
                summary.active += 1;
            }
            match item.surcharge_type {
                SurchargeType::Percentage => summary.percentage += 1,
                SurchargeType::Amount => summary.flat += 1,
            }
            summary
        })
    }
}

/// Shared surcharge list state backed by the admin API.
#[derive(Clone, Debug, Default)]
pub struct SurchargesState {
    pub items: Vec<Surcharge>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub dialog: DialogMode,
    pub saving: bool,
}

impl SurchargesState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_items(&mut self, items: Vec<Surcharge>) {
        self.items = items;
        self.loading = false;
        self.loaded = true;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn open_create(&mut self) {
        self.dialog = DialogMode::Create;
    }

    pub fn open_edit(&mut self, surcharge: Surcharge) {
        self.dialog = DialogMode::Edit(surcharge);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogMode::Closed;
        self.saving = false;
    }
}
