// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::VehicleModel;

/// Seed the dealership was at when this tool took over folio numbering.
pub const DEFAULT_FOLIO_SEED: u32 = 7309;

/// Process-wide quotation sequence. Not persisted across sessions; the
/// configured seed is the only continuity mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolioCounter {
    value: u32,
}

impl FolioCounter {
    pub const fn new(seed: u32) -> Self {
        Self { value: seed }
    }

    pub const fn get(self) -> u32 {
        self.value
    }

    /// Called exactly once per confirmed save, never before.
    pub fn bump(&mut self) {
        self.value += 1;
    }
}

impl Default for FolioCounter {
    fn default() -> Self {
        Self::new(DEFAULT_FOLIO_SEED)
    }
}

/// Display folio for a quotation. Pure derivation: recomputed on demand from
/// the current model and counter, never stored or set directly.
pub fn folio(model: VehicleModel, counter: u32) -> String {
    format!("{}/FTNLN/{counter:05}", model.as_str())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FOLIO_SEED, FolioCounter, folio};
    use crate::VehicleModel;

    #[test]
    fn folio_is_model_prefix_plus_padded_counter() {
        assert_eq!(folio(VehicleModel::Tm3, 7309), "TM3/FTNLN/07309");
        assert_eq!(folio(VehicleModel::Tunland, 7), "TUNLAND/FTNLN/00007");
        assert_eq!(folio(VehicleModel::HiVan, 123456), "HI-VAN/FTNLN/123456");
    }

    #[test]
    fn folio_tracks_model_and_counter_changes() {
        let mut counter = FolioCounter::default();
        assert_eq!(folio(VehicleModel::Tm3, counter.get()), "TM3/FTNLN/07309");

        counter.bump();
        assert_eq!(counter.get(), DEFAULT_FOLIO_SEED + 1);
        assert_eq!(folio(VehicleModel::S3, counter.get()), "S3/FTNLN/07310");
    }
}
