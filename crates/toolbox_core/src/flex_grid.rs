//! Flexbox and grid container editor
//!
//! One container, two display modes. Each mode keeps its own settings so
//! switching back and forth loses nothing.

use crate::editor::{check_range, Editor};
use crate::error::EditorError;
use crate::keywords::css_keywords;
use crate::style::{GeneratedCode, Style};

/// Most preview items the editor shows
pub const MAX_ITEMS: u32 = 12;

/// Preview items after a reset
pub const DEFAULT_ITEMS: u32 = 4;

css_keywords! {
    /// Container display mode
    pub enum DisplayMode {
        Flex => "flex",
        Grid => "grid",
    }
}

css_keywords! {
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

css_keywords! {
    pub enum JustifyContent {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

css_keywords! {
    pub enum AlignItems {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

css_keywords! {
    pub enum FlexWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

css_keywords! {
    /// `justify-items` / `align-items` for grid containers
    pub enum GridAlign {
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlexSettings {
    pub direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub wrap: FlexWrap,
    /// px, 0 to 48
    pub gap: f64,
}

impl Default for FlexSettings {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            wrap: FlexWrap::NoWrap,
            gap: 16.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSettings {
    /// 1 to 6
    pub columns: u32,
    /// 1 to 6
    pub rows: u32,
    /// px, 0 to 48
    pub gap: f64,
    pub justify_items: GridAlign,
    pub align_items: GridAlign,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 2,
            gap: 16.0,
            justify_items: GridAlign::Stretch,
            align_items: GridAlign::Stretch,
        }
    }
}

/// Input events for the flex/grid editor
#[derive(Clone, Debug, PartialEq)]
pub enum FlexGridAction {
    SetMode(DisplayMode),
    /// Clamped to 1..=12
    SetItemCount(u32),
    AddItem,
    RemoveItem,
    SetDirection(FlexDirection),
    SetJustifyContent(JustifyContent),
    SetAlignItems(AlignItems),
    SetWrap(FlexWrap),
    SetFlexGap(f64),
    SetColumns(u32),
    SetRows(u32),
    SetGridGap(f64),
    SetJustifyItems(GridAlign),
    SetGridAlignItems(GridAlign),
    /// Restore the current mode's defaults and the item count
    Reset,
}

/// Flex/grid editor state
#[derive(Clone, Debug, PartialEq)]
pub struct FlexGridState {
    pub mode: DisplayMode,
    pub item_count: u32,
    pub flex: FlexSettings,
    pub grid: GridSettings,
}

impl Default for FlexGridState {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Flex,
            item_count: DEFAULT_ITEMS,
            flex: FlexSettings::default(),
            grid: GridSettings::default(),
        }
    }
}

fn check_track_count(field: &'static str, count: u32) -> Result<u32, EditorError> {
    if !(1..=6).contains(&count) {
        return Err(EditorError::invalid(field, format!("{} is outside 1..=6", count)));
    }
    Ok(count)
}

impl Editor for FlexGridState {
    type Action = FlexGridAction;

    fn reduce(&self, action: FlexGridAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        match action {
            FlexGridAction::SetMode(mode) => next.mode = mode,
            FlexGridAction::SetItemCount(n) => next.item_count = n.clamp(1, MAX_ITEMS),
            FlexGridAction::AddItem => next.item_count = (next.item_count + 1).min(MAX_ITEMS),
            FlexGridAction::RemoveItem => next.item_count = next.item_count.saturating_sub(1).max(1),
            FlexGridAction::SetDirection(d) => next.flex.direction = d,
            FlexGridAction::SetJustifyContent(j) => next.flex.justify_content = j,
            FlexGridAction::SetAlignItems(a) => next.flex.align_items = a,
            FlexGridAction::SetWrap(w) => next.flex.wrap = w,
            FlexGridAction::SetFlexGap(g) => next.flex.gap = check_range("gap", g, 0.0, 48.0)?,
            FlexGridAction::SetColumns(c) => next.grid.columns = check_track_count("columns", c)?,
            FlexGridAction::SetRows(r) => next.grid.rows = check_track_count("rows", r)?,
            FlexGridAction::SetGridGap(g) => next.grid.gap = check_range("gap", g, 0.0, 48.0)?,
            FlexGridAction::SetJustifyItems(j) => next.grid.justify_items = j,
            FlexGridAction::SetGridAlignItems(a) => next.grid.align_items = a,
            FlexGridAction::Reset => {
                match next.mode {
                    DisplayMode::Flex => next.flex = FlexSettings::default(),
                    DisplayMode::Grid => next.grid = GridSettings::default(),
                }
                next.item_count = DEFAULT_ITEMS;
            }
        }
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        match self.mode {
            DisplayMode::Flex => Style::new()
                .with("display", "flex")
                .with("flex-direction", self.flex.direction.css())
                .with("justify-content", self.flex.justify_content.css())
                .with("align-items", self.flex.align_items.css())
                .with("flex-wrap", self.flex.wrap.css())
                .with("gap", format!("{}px", toolbox_math::css_number(self.flex.gap))),
            DisplayMode::Grid => Style::new()
                .with("display", "grid")
                .with("grid-template-columns", format!("repeat({}, 1fr)", self.grid.columns))
                .with("grid-template-rows", format!("repeat({}, 1fr)", self.grid.rows))
                .with("gap", format!("{}px", toolbox_math::css_number(self.grid.gap)))
                .with("justify-items", self.grid.justify_items.css())
                .with("align-items", self.grid.align_items.css()),
        }
    }

    fn derive_code(&self) -> GeneratedCode {
        GeneratedCode::css(self.derive_style().to_rule(".container"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flex_code() {
        assert_eq!(
            FlexGridState::default().derive_code().css,
            ".container {\n  display: flex;\n  flex-direction: row;\n  justify-content: flex-start;\n  align-items: stretch;\n  flex-wrap: nowrap;\n  gap: 16px;\n}"
        );
    }

    #[test]
    fn test_grid_code() {
        let state = FlexGridState::default()
            .reduce(FlexGridAction::SetMode(DisplayMode::Grid))
            .unwrap()
            .reduce(FlexGridAction::SetColumns(4))
            .unwrap()
            .reduce(FlexGridAction::SetJustifyItems(GridAlign::Center))
            .unwrap();
        assert_eq!(
            state.derive_code().css,
            ".container {\n  display: grid;\n  grid-template-columns: repeat(4, 1fr);\n  grid-template-rows: repeat(2, 1fr);\n  gap: 16px;\n  justify-items: center;\n  align-items: stretch;\n}"
        );
    }

    #[test]
    fn test_item_count_clamped() {
        let state = FlexGridState::default();
        assert_eq!(state.reduce(FlexGridAction::SetItemCount(40)).unwrap().item_count, 12);
        assert_eq!(state.reduce(FlexGridAction::SetItemCount(0)).unwrap().item_count, 1);
        let one = state.reduce(FlexGridAction::SetItemCount(1)).unwrap();
        assert_eq!(one.reduce(FlexGridAction::RemoveItem).unwrap().item_count, 1);
    }

    #[test]
    fn test_reset_only_current_mode() {
        let state = FlexGridState::default()
            .reduce(FlexGridAction::SetFlexGap(32.0))
            .unwrap()
            .reduce(FlexGridAction::SetMode(DisplayMode::Grid))
            .unwrap()
            .reduce(FlexGridAction::SetRows(5))
            .unwrap()
            .reduce(FlexGridAction::AddItem)
            .unwrap()
            .reduce(FlexGridAction::Reset)
            .unwrap();
        assert_eq!(state.grid, GridSettings::default());
        assert_eq!(state.flex.gap, 32.0);
        assert_eq!(state.item_count, DEFAULT_ITEMS);
    }

    #[test]
    fn test_rejections() {
        let state = FlexGridState::default();
        assert!(state.reduce(FlexGridAction::SetColumns(7)).is_err());
        assert!(state.reduce(FlexGridAction::SetRows(0)).is_err());
        assert!(state.reduce(FlexGridAction::SetFlexGap(60.0)).is_err());
    }

    #[test]
    fn test_keyword_parse() {
        assert_eq!(JustifyContent::from_css("space-evenly"), Some(JustifyContent::SpaceEvenly));
        assert_eq!(FlexWrap::from_css("nowrap"), Some(FlexWrap::NoWrap));
        assert_eq!(DisplayMode::from_css("table"), None);
    }
}
