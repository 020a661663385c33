use serde::{Deserialize, Serialize};

/// Number of coordinates in the classifier space.
pub const STATE_DIM: usize = 5;

/// Ambient snapshot at one node, in the fixed classifier order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalState {
    pub pm25_ug_m3: f64,   // PM2.5 [µg/m³]
    pub nox_ppb: f64,      // NOx as NO2 [ppb]
    pub o3_ppb: f64,       // O3 [ppb]
    pub temp_c: f64,       // air temperature [°C]
    pub floral_m2_ha: f64, // floral density [m²/ha]
}

impl EnvironmentalState {
    pub fn new(
        pm25_ug_m3: f64,
        nox_ppb: f64,
        o3_ppb: f64,
        temp_c: f64,
        floral_m2_ha: f64,
    ) -> Self {
        Self {
            pm25_ug_m3,
            nox_ppb,
            o3_ppb,
            temp_c,
            floral_m2_ha,
        }
    }

    /// Point `x` used by half-space rows: PM2.5, NOx, O3, temperature, floral density.
    pub fn as_point(&self) -> [f64; STATE_DIM] {
        [
            self.pm25_ug_m3,
            self.nox_ppb,
            self.o3_ppb,
            self.temp_c,
            self.floral_m2_ha,
        ]
    }
}
