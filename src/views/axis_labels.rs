use crate::data_types::LabelSource;
use crate::registry::DataframeRegistry;

/// Pixel spacing between consecutive x ticks.
pub fn tick_spacing(plot_width: f32, span: f64, device_pixel_ratio: f32) -> f32 {
    let denom = span as f32 * device_pixel_ratio;
    if denom <= 0.0 {
        return plot_width;
    }
    plot_width / denom
}

/// X tick labels taken from the label source. Every label is blank once the
/// ticks get closer than `break_point` pixels.
pub fn x_labels(ticks: &[f64], spacing: f32, break_point: f32, labels: &LabelSource) -> Vec<String> {
    if spacing <= break_point {
        return vec![String::new(); ticks.len()];
    }
    ticks
        .iter()
        .map(|&t| {
            if t < 0.0 || t.fract() != 0.0 {
                return String::new();
            }
            labels.get(t as usize).unwrap_or_default().to_string()
        })
        .collect()
}

/// One decimal, trailing zeros dropped.
pub fn y_label(value: f64) -> String {
    let fixed = format!("{value:.1}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Residue legend value: one `"<protein> - <aa> (<res>); "` entry per
/// dataframe, or `"NA; "` where the index has no amino acid.
pub fn residue_summary(registry: &DataframeRegistry, idx: usize) -> String {
    let mut out = String::new();
    for df in registry.dataframes() {
        let Some(aa) = df.amino_acid_at(idx) else {
            out.push_str("NA; ");
            continue;
        };
        let res = df.position_at(idx).map(ToString::to_string).unwrap_or_default();
        out.push_str(&format!("{} - {} ({}); ", df.protein_id(), aa, res));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{ChartData, DataframeInput, ResidueId};

    #[test]
    fn test_y_labels_drop_trailing_zeros() {
        assert_eq!(y_label(0.5), "0.5");
        assert_eq!(y_label(1.0), "1");
        assert_eq!(y_label(12.34), "12.3");
        assert_eq!(y_label(-0.04), "0");
        assert_eq!(y_label(10.0), "10");
    }

    #[test]
    fn test_x_labels_hide_below_break_point() {
        let labels = LabelSource::new("a", vec![Some("M".into()), Some("K".into()), None]);
        let ticks = [0.0, 1.0, 2.0, 1.5];
        assert_eq!(x_labels(&ticks, 20.0, 8.0, &labels), vec!["M", "K", "", ""]);
        assert_eq!(x_labels(&ticks, 8.0, 8.0, &labels), vec!["", "", "", ""]);
    }

    #[test]
    fn test_spacing_accounts_for_pixel_ratio() {
        assert_eq!(tick_spacing(300.0, 15.0, 2.0), 10.0);
        assert_eq!(tick_spacing(300.0, 0.0, 1.0), 300.0);
    }

    #[test]
    fn test_summary_lists_every_dataframe() {
        let reg = DataframeRegistry::from_data(ChartData {
            dataframes: vec![
                DataframeInput::new("a")
                    .with_positions(vec![Some(ResidueId::Int(10)), Some(ResidueId::Int(11))])
                    .with_amino_acids(vec![Some("M".into()), Some("K".into())]),
                DataframeInput::new("b")
                    .with_positions(vec![None, Some(ResidueId::Int(3))])
                    .with_amino_acids(vec![None, Some("L".into())]),
            ],
        })
        .unwrap();
        assert_eq!(residue_summary(&reg, 0), "a - M (10); NA; ");
        assert_eq!(residue_summary(&reg, 1), "a - K (11); b - L (3); ");
    }

    #[test]
    fn test_summary_keys_missing_entries_on_amino_acid() {
        let reg = DataframeRegistry::from_data(ChartData {
            dataframes: vec![DataframeInput::new("a")
                .with_positions(vec![Some(ResidueId::Int(10)), None])
                .with_amino_acids(vec![None, Some("K".into())])],
        })
        .unwrap();
        assert_eq!(residue_summary(&reg, 0), "NA; ");
        assert_eq!(residue_summary(&reg, 1), "a - K (); ");
    }
}
