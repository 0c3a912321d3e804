// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use time::{Date, OffsetDateTime, macros::format_description};

use crate::{CapacityKind, DeliveryTerm, VehicleModel, Warranty};

/// Placeholder used wherever an optional field is rendered blank.
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything the user enters for one quotation. One instance per session.
///
/// Price and discount stay raw strings: they arrive as possibly-unparseable
/// user text and are only parsed when totals are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationForm {
    pub client: String,
    pub quote_date: String,
    pub model: VehicleModel,
    pub version: String,
    pub vehicle_type: String,
    pub year: String,
    pub length_m: String,
    pub width_m: String,
    pub height_m: String,
    pub gross_weight_kg: String,
    pub capacity_kind: Option<CapacityKind>,
    pub capacity_value: String,
    pub warranty: Warranty,
    pub price: String,
    pub discount: String,
    pub delivery: DeliveryTerm,
    pub delivery_other: String,
}

impl QuotationForm {
    pub fn new() -> Self {
        Self::with_date(OffsetDateTime::now_utc().date())
    }

    pub fn with_date(today: Date) -> Self {
        let format = format_description!("[day]/[month]/[year]");
        let quote_date = today
            .format(&format)
            .unwrap_or_else(|_| String::from("--/--/----"));
        Self {
            client: String::new(),
            quote_date,
            model: VehicleModel::Tm3,
            version: String::new(),
            vehicle_type: "Pasaje".to_owned(),
            year: today.year().to_string(),
            length_m: String::new(),
            width_m: String::new(),
            height_m: String::new(),
            gross_weight_kg: String::new(),
            capacity_kind: None,
            capacity_value: String::new(),
            warranty: Warranty::ThreeYears100k,
            price: String::new(),
            discount: String::new(),
            delivery: DeliveryTerm::Immediate,
            delivery_other: String::new(),
        }
    }

    /// The only gating check before generation: client and price must be
    /// non-blank. The error names the first missing field.
    pub fn validate(&self) -> Result<()> {
        if self.client.trim().is_empty() {
            bail!("client is required -- enter a client name and retry");
        }
        if self.price.trim().is_empty() {
            bail!("price is required -- enter a price and retry");
        }
        Ok(())
    }

    /// Switching away from "Otro" always discards the free-text override.
    pub fn set_delivery(&mut self, term: DeliveryTerm) {
        self.delivery = term;
        if term != DeliveryTerm::Other {
            self.delivery_other.clear();
        }
    }

    /// Delivery text as rendered: the free-text override when "Otro" is
    /// selected, the fixed label otherwise.
    pub fn resolved_delivery(&self) -> &str {
        match self.delivery {
            DeliveryTerm::Other => &self.delivery_other,
            term => term.label(),
        }
    }

    /// Trim version as rendered. Models without versions always show "N/A",
    /// even when a stale version string is still set.
    pub fn version_display(&self) -> &str {
        if self.model.has_versions() {
            display_or_na(&self.version)
        } else {
            NOT_AVAILABLE
        }
    }

    pub fn capacity_kind_label(&self) -> &'static str {
        self.capacity_kind
            .map(CapacityKind::label)
            .unwrap_or(NOT_AVAILABLE)
    }
}

impl Default for QuotationForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn display_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{NOT_AVAILABLE, QuotationForm, display_or_na};
    use crate::{DeliveryTerm, VehicleModel};
    use time::{Date, Month};

    fn form() -> QuotationForm {
        let today = Date::from_calendar_date(2026, Month::August, 27).expect("valid date");
        QuotationForm::with_date(today)
    }

    #[test]
    fn defaults_match_first_catalog_entries() {
        let form = form();
        assert_eq!(form.model, VehicleModel::Tm3);
        assert_eq!(form.quote_date, "27/08/2026");
        assert_eq!(form.year, "2026");
        assert_eq!(form.delivery, DeliveryTerm::Immediate);
    }

    #[test]
    fn validation_names_client_first() {
        let form = form();
        let error = form.validate().expect_err("blank form should fail");
        assert!(error.to_string().contains("client"));
    }

    #[test]
    fn validation_names_price_when_client_present() {
        let mut form = form();
        form.client = "Acme SA".to_owned();
        let error = form.validate().expect_err("blank price should fail");
        assert!(error.to_string().contains("price"));
    }

    #[test]
    fn validation_passes_with_client_and_price() {
        let mut form = form();
        form.client = "Acme SA".to_owned();
        form.price = "500000".to_owned();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn switching_away_from_other_clears_override() {
        let mut form = form();
        form.set_delivery(DeliveryTerm::Other);
        form.delivery_other = "15 de octubre".to_owned();
        assert_eq!(form.resolved_delivery(), "15 de octubre");

        form.set_delivery(DeliveryTerm::Immediate);
        assert!(form.delivery_other.is_empty());
        assert_eq!(form.resolved_delivery(), "Disponibilidad inmediata");
    }

    #[test]
    fn version_hidden_for_models_without_trims() {
        let mut form = form();
        form.model = VehicleModel::Tunland;
        form.version = "G9 4X4 AUT".to_owned();
        assert_eq!(form.version_display(), "G9 4X4 AUT");

        // Stale version survives the model switch but must not render.
        form.model = VehicleModel::S12;
        assert_eq!(form.version_display(), NOT_AVAILABLE);
    }

    #[test]
    fn blank_optional_fields_render_as_na() {
        assert_eq!(display_or_na(""), NOT_AVAILABLE);
        assert_eq!(display_or_na("   "), NOT_AVAILABLE);
        assert_eq!(display_or_na("7.2"), "7.2");
    }
}
