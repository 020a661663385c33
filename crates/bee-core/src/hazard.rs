use crate::state::EnvironmentalState;
use serde::{Deserialize, Serialize};

/// LC50 reference per contaminant channel. A value <= 0 means "no reference".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lc50References {
    pub pm25_ug_m3: f64,
    pub nox_ppb: f64,
    pub o3_ppb: f64,
    pub voc_ug_m3: f64,
}

/// Mixture weights, expected to sum to 1.0. Never renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixtureWeights {
    pub w_pm25: f64,
    pub w_nox: f64,
    pub w_o3: f64,
    pub w_voc: f64,
}

impl MixtureWeights {
    pub fn sum(&self) -> f64 {
        self.w_pm25 + self.w_nox + self.w_o3 + self.w_voc
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardParameters {
    pub lc50: Lc50References,
    pub weights: MixtureWeights,
    /// Preferred PM2.5-equivalent corridor, e.g. 8.5 µg/m³.
    pub pm25_eq_viability_ug_m3: f64,
}

/// Concentration over LC50 for each channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRatios {
    #[serde(with = "crate::float_repr")]
    pub pm25: f64,
    #[serde(with = "crate::float_repr")]
    pub nox: f64,
    #[serde(with = "crate::float_repr")]
    pub o3: f64,
    #[serde(with = "crate::float_repr")]
    pub voc: f64,
}

/// Ratio of a reading to its LC50, or 0.0 when the reference is not positive.
pub fn channel_ratio(concentration: f64, lc50: f64) -> f64 {
    if lc50 > 0.0 {
        concentration / lc50
    } else {
        0.0
    }
}

impl ChannelRatios {
    pub fn from_readings(state: &EnvironmentalState, voc_ug_m3: f64, lc50: &Lc50References) -> Self {
        Self {
            pm25: channel_ratio(state.pm25_ug_m3, lc50.pm25_ug_m3),
            nox: channel_ratio(state.nox_ppb, lc50.nox_ppb),
            o3: channel_ratio(state.o3_ppb, lc50.o3_ppb),
            voc: channel_ratio(voc_ug_m3, lc50.voc_ug_m3),
        }
    }

    /// Weighted mixture risk `r_bee`.
    pub fn weighted(&self, weights: &MixtureWeights) -> f64 {
        weights.w_pm25 * self.pm25
            + weights.w_nox * self.nox
            + weights.w_o3 * self.o3
            + weights.w_voc * self.voc
    }
}

/// Linear PM2.5-equivalent proxy. The gas channels reuse the mixture weights.
pub fn pm25_equivalent(state: &EnvironmentalState, voc_ug_m3: f64, weights: &MixtureWeights) -> f64 {
    state.pm25_ug_m3
        + weights.w_nox * state.nox_ppb
        + weights.w_o3 * state.o3_ppb
        + weights.w_voc * voc_ug_m3
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardState {
    /// Instantaneous bee risk index, 0..inf.
    #[serde(with = "crate::float_repr")]
    pub r_bee: f64,
    /// PM2.5-equivalent index [µg/m³].
    #[serde(with = "crate::float_repr")]
    pub pm25_eq: f64,
    pub within_viability: bool,
    pub ratios: ChannelRatios,
}
