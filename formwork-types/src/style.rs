use serde::{Deserialize, Serialize};

/// How a container positions its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Flexbox layout, configured by [`FlexStyle`].
    #[default]
    #[serde(alias = "Flex")]
    Flex,

    /// CSS grid layout, configured by [`GridStyle`].
    #[serde(alias = "Grid")]
    Grid,

    /// Multi-column layout. Carries no layout declarations of its own.
    #[serde(alias = "Columns")]
    Columns,
}

/// Flexbox settings, consulted only when the layout is [`LayoutType::Flex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlexStyle {
    pub direction: String,
    pub justify_content: String,
    pub align_items: String,
    pub gap: String,
    pub wrap: bool,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            direction: "row".to_string(),
            justify_content: "flex-start".to_string(),
            align_items: "stretch".to_string(),
            gap: "0".to_string(),
            wrap: false,
        }
    }
}

impl FlexStyle {
    /// Create flex settings with the default values (row, flex-start, stretch, no gap).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flex direction (`row`, `column`, `row-reverse`, `column-reverse`).
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    pub fn with_justify_content(mut self, justify: impl Into<String>) -> Self {
        self.justify_content = justify.into();
        self
    }

    pub fn with_align_items(mut self, align: impl Into<String>) -> Self {
        self.align_items = align.into();
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    /// Let items wrap onto multiple lines.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Grid settings, consulted only when the layout is [`LayoutType::Grid`].
///
/// Counts are kept exactly as authored. Explicit track templates take
/// precedence over the counts when the style is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridStyle {
    pub columns: i32,
    pub rows: i32,
    pub gap: String,
    pub template_columns: Option<String>,
    pub template_rows: Option<String>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
            gap: "0".to_string(),
            template_columns: None,
            template_rows: None,
        }
    }
}

impl GridStyle {
    /// Create grid settings with one column, one row and no gap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create grid settings with the given number of equal-width columns.
    pub fn with_columns(mut self, columns: i32) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    /// Set an explicit column track template, e.g. `"200px 1fr"`.
    pub fn with_template_columns(mut self, template: impl Into<String>) -> Self {
        self.template_columns = Some(template.into());
        self
    }

    /// Set an explicit row track template.
    pub fn with_template_rows(mut self, template: impl Into<String>) -> Self {
        self.template_rows = Some(template.into());
        self
    }
}

/// Presentation of a container: layout plus cosmetic properties.
///
/// Both `flex` and `grid` are always present; `layout_type` decides which
/// one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyle {
    pub layout_type: LayoutType,
    pub flex: FlexStyle,
    pub grid: GridStyle,
    pub custom_css: Option<String>,
    pub background_color: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub border: Option<String>,
}

impl ContainerStyle {
    /// Create a flex style with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flex layout style.
    pub fn flex(flex: FlexStyle) -> Self {
        Self {
            layout_type: LayoutType::Flex,
            flex,
            ..Self::default()
        }
    }

    /// Create a grid layout style.
    pub fn grid(grid: GridStyle) -> Self {
        Self {
            layout_type: LayoutType::Grid,
            grid,
            ..Self::default()
        }
    }

    /// Create a multi-column layout style.
    pub fn columns() -> Self {
        Self {
            layout_type: LayoutType::Columns,
            ..Self::default()
        }
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }

    /// Append free-form declarations after the generated ones.
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }
}

/// Presentation of a single field's wrapper element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldStyle {
    /// Extra class names, whitespace separated.
    pub css_class: Option<String>,
    pub width: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub border: Option<String>,
    pub custom_css: Option<String>,
}

impl FieldStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Check whether the style carries nothing to render.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flex_defaults() {
        let flex = FlexStyle::default();
        assert_eq!(flex.direction, "row");
        assert_eq!(flex.justify_content, "flex-start");
        assert_eq!(flex.align_items, "stretch");
        assert_eq!(flex.gap, "0");
        assert!(!flex.wrap);
    }

    #[test]
    fn grid_defaults() {
        let grid = GridStyle::default();
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 1);
        assert_eq!(grid.gap, "0");
        assert!(grid.template_columns.is_none());
    }

    #[test]
    fn partial_style_document_fills_defaults() {
        let style: ContainerStyle =
            serde_json::from_str(r#"{"layoutType":"grid","grid":{"columns":3}}"#).unwrap();
        assert_eq!(style.layout_type, LayoutType::Grid);
        assert_eq!(style.grid.columns, 3);
        assert_eq!(style.grid.rows, 1);
        assert_eq!(style.flex, FlexStyle::default());
    }

    #[test]
    fn style_serializes_camel_case() {
        let style = ContainerStyle::flex(FlexStyle::new().with_justify_content("center"))
            .with_background_color("#fff");
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["layoutType"], "flex");
        assert_eq!(json["flex"]["justifyContent"], "center");
        assert_eq!(json["backgroundColor"], "#fff");
    }

    #[test]
    fn empty_field_style() {
        assert!(FieldStyle::new().is_empty());
        assert!(!FieldStyle::new().with_width("50%").is_empty());
    }
}
