//! Built-in reference tables

use crate::products::{CashValueSeries, ProductPreset};

/// Years covered by the preset curves
pub const PRESET_YEARS: usize = 30;

/// Total premium the preset curves are calibrated to (six annual units)
pub const PRESET_BASELINE_PREMIUM: f64 = 6.0;

/// Preset cash value curves for the comparison tool
pub fn product_presets() -> Vec<ProductPreset> {
    vec![
        ProductPreset {
            id: "usd_savings_6pay".to_string(),
            name: "USD interest-sensitive savings, 6-pay".to_string(),
            baseline_total_premium: PRESET_BASELINE_PREMIUM,
            pay_years: 6,
            series: CashValueSeries::new(vec![
                0.420, 1.280, 2.210, 3.350, 4.620, 5.940, 6.120, 6.258, 6.399, 6.543, // Year 1-10
                6.690, 6.841, 6.995, 7.152, 7.313, 7.478, 7.646, 7.818, 7.994, 8.174, // Year 11-20
                8.358, 8.546, 8.738, 8.935, 9.136, 9.342, 9.552, 9.767, 9.987, 10.212, // Year 21-30
            ]),
        },
        ProductPreset {
            id: "twd_dividend_6pay".to_string(),
            name: "TWD participating whole life, 6-pay".to_string(),
            baseline_total_premium: PRESET_BASELINE_PREMIUM,
            pay_years: 6,
            series: CashValueSeries::new(vec![
                0.550, 1.460, 2.380, 3.410, 4.470, 5.620, 5.800, 5.945, 6.094, 6.246, // Year 1-10
                6.402, 6.562, 6.726, 6.894, 7.066, 7.243, 7.424, 7.610, 7.800, 7.995, // Year 11-20
                8.195, 8.400, 8.610, 8.825, 9.046, 9.272, 9.504, 9.742, 9.986, 10.236, // Year 21-30
            ]),
        },
        ProductPreset::manual_entry(PRESET_YEARS),
    ]
}
