/// Chart colors assigned to buckets in first-seen order. The original pages
/// derived hex colors from `Math.random()`, which made every aggregation pass
/// paint differently; buckets now draw from a fixed, injectable palette so
/// output is reproducible.
pub const DEFAULT_COLORS: &[&str] = &[
    "#8884d8", "#82ca9d", "#ffc658", "#4CAF50", "#f44336", "#9e9e9e", "#0088fe", "#ff8042",
];

#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Custom palette. An empty list falls back to the default colors so
    /// `color_for` always has something to hand out.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            Palette::default()
        } else {
            Palette { colors }
        }
    }

    /// Color for the bucket at `index` (first-seen order), cycling when there
    /// are more buckets than colors.
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_is_deterministic() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0), "#8884d8");
        assert_eq!(palette.color_for(1), "#82ca9d");
        assert_eq!(palette.color_for(0), palette.color_for(0));
    }

    #[test]
    fn test_color_for_cycles_past_palette_length() {
        let palette = Palette::new(vec!["#111111".to_string(), "#222222".to_string()]);
        assert_eq!(palette.color_for(0), "#111111");
        assert_eq!(palette.color_for(1), "#222222");
        assert_eq!(palette.color_for(2), "#111111");
        assert_eq!(palette.color_for(5), "#222222");
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let palette = Palette::new(vec![]);
        assert_eq!(palette.color_for(0), DEFAULT_COLORS[0]);
    }
}
