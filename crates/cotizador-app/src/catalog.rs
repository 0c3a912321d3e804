// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Commercial vehicle lineup offered on quotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleModel {
    Tm3,
    Miler,
    S3,
    S5,
    S6,
    S8,
    S12,
    S20,
    S35,
    EstA6x4,
    EstAX13,
    HiVan,
    ViewCs2,
    Galaxy,
    Tunland,
}

impl VehicleModel {
    pub const ALL: [Self; 15] = [
        Self::Tm3,
        Self::Miler,
        Self::S3,
        Self::S5,
        Self::S6,
        Self::S8,
        Self::S12,
        Self::S20,
        Self::S35,
        Self::EstA6x4,
        Self::EstAX13,
        Self::HiVan,
        Self::ViewCs2,
        Self::Galaxy,
        Self::Tunland,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tm3 => "TM3",
            Self::Miler => "MILER",
            Self::S3 => "S3",
            Self::S5 => "S5",
            Self::S6 => "S6",
            Self::S8 => "S8",
            Self::S12 => "S12",
            Self::S20 => "S20",
            Self::S35 => "S35",
            Self::EstA6x4 => "EST-A 6X4",
            Self::EstAX13 => "EST-A X13",
            Self::HiVan => "HI-VAN",
            Self::ViewCs2 => "VIEW CS2",
            Self::Galaxy => "GALAXY",
            Self::Tunland => "TUNLAND",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.as_str() == value)
    }

    /// Only the Tunland pickup ships in multiple trim versions.
    pub const fn has_versions(self) -> bool {
        matches!(self, Self::Tunland)
    }
}

/// Trim versions available for the Tunland pickup.
pub const TUNLAND_VERSIONS: [&str; 7] = [
    "E5",
    "G7 4X2 GASOLINA STD",
    "G7 4X4 DIESEL STD",
    "G7 4X4 DIESEL AUT",
    "G9 4X4 AUT",
    "V7 4X2 HIBRIDA",
    "V9 4X4 HIBRIDA",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityKind {
    Payload,
    Towing,
    Passengers,
    ChassisLoad,
}

impl CapacityKind {
    pub const ALL: [Self; 4] = [
        Self::Payload,
        Self::Towing,
        Self::Passengers,
        Self::ChassisLoad,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Payload => "Carga útil",
            Self::Towing => "Capacidad de arrastre",
            Self::Passengers => "Número de pasajeros",
            Self::ChassisLoad => "Carga sobre chasis",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warranty {
    ThreeYears100k,
    TenYears200k,
    TwoYearsUnlimited,
}

impl Warranty {
    pub const ALL: [Self; 3] = [
        Self::ThreeYears100k,
        Self::TenYears200k,
        Self::TwoYearsUnlimited,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeYears100k => "3 años o 100 mil kilómetros",
            Self::TenYears200k => "10 años o 200 mil kilómetros",
            Self::TwoYearsUnlimited => "2 años sin límite de kilometraje",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|warranty| warranty.label() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryTerm {
    Immediate,
    Within90Days,
    Other,
}

impl DeliveryTerm {
    pub const ALL: [Self; 3] = [Self::Immediate, Self::Within90Days, Self::Other];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Disponibilidad inmediata",
            Self::Within90Days => "Hasta 90 días a partir del pago del 50% de la unidad",
            Self::Other => "Otro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|term| term.label() == value)
    }
}
