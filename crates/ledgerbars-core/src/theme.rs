// File: crates/ledgerbars-core/src/theme.rs
// Summary: Named color presets for axes and the three bar layers.

use crate::dataset::Subgroup;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub bar_background: &'static str,
    pub bar_background_selected: &'static str,
    pub earn: &'static str,
    pub spend: &'static str,
    pub earn_selected: &'static str,
    pub spend_selected: &'static str,
}

impl Theme {
    pub fn pastel() -> Self {
        Self {
            name: "pastel",
            axis_line: "#000000",
            axis_label: "#000000",
            bar_background: "#F6F6F6",
            bar_background_selected: "#E2E2E2",
            earn: "#B2FCF1",
            spend: "#C4DCFC",
            earn_selected: "#00E5C4",
            spend_selected: "#8BB6EF",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            axis_line: "#B4B4BE",
            axis_label: "#E6E6EE",
            bar_background: "#2A2A2E",
            bar_background_selected: "#3A3A42",
            earn: "#8FE8D8",
            spend: "#9DBDF0",
            earn_selected: "#00E5C4",
            spend_selected: "#8BB6EF",
        }
    }

    /// Fill for a subgroup's bars inside the highlighted month.
    pub fn selected_fill(&self, group: Subgroup) -> &'static str {
        match group {
            Subgroup::Earn => self.earn_selected,
            Subgroup::Spend => self.spend_selected,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::pastel(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to pastel.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::pastel()
}
