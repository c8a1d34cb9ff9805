//! Style compilation: structured styles to class lists and inline CSS.
//!
//! Declarations are emitted in a fixed order so that identical styles always
//! compile to identical text. Values are passed through as authored.

use formwork::{ContainerStyle, FieldStyle, LayoutType};

/// The class list and inline declarations compiled from a style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledStyle {
    pub classes: Vec<String>,
    pub declarations: Vec<String>,
}

impl CompiledStyle {
    /// Classes joined for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Declarations joined for a `style` attribute.
    pub fn style_attr(&self) -> String {
        self.declarations.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.declarations.is_empty()
    }

    fn class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    fn declare(&mut self, property: &str, value: &str) {
        if !value.is_empty() {
            self.declarations.push(format!("{property}: {value};"));
        }
    }

    fn declare_opt(&mut self, property: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.declare(property, value);
        }
    }

    fn custom(&mut self, css: Option<&str>) {
        if let Some(css) = css.map(str::trim).filter(|css| !css.is_empty()) {
            self.declarations.push(css.to_string());
        }
    }
}

/// Compile a container style.
///
/// Flex layouts get `d-flex flex-{direction}` (plus `flex-wrap`) and
/// justify/align/gap declarations; grid layouts get `grid-container` and a
/// column template. Appearance declarations follow for every layout.
pub fn compile_container_style(style: &ContainerStyle) -> CompiledStyle {
    let mut compiled = CompiledStyle::default();

    match style.layout_type {
        LayoutType::Flex => {
            let flex = &style.flex;
            compiled.class("d-flex");
            if !flex.direction.is_empty() {
                compiled.class(format!("flex-{}", flex.direction));
            }
            if flex.wrap {
                compiled.class("flex-wrap");
            }
            compiled.declare("justify-content", &flex.justify_content);
            compiled.declare("align-items", &flex.align_items);
            compiled.declare("gap", &flex.gap);
        }
        LayoutType::Grid => {
            let grid = &style.grid;
            compiled.class("grid-container");
            match grid.template_columns.as_deref().filter(|t| !t.is_empty()) {
                Some(template) => compiled.declare("grid-template-columns", template),
                None => compiled.declare(
                    "grid-template-columns",
                    &format!("repeat({}, 1fr)", grid.columns),
                ),
            }
            compiled.declare_opt("grid-template-rows", grid.template_rows.as_deref());
            compiled.declare("gap", &grid.gap);
        }
        LayoutType::Columns => {}
    }

    compiled.declare_opt("background-color", style.background_color.as_deref());
    compiled.declare_opt("padding", style.padding.as_deref());
    compiled.declare_opt("margin", style.margin.as_deref());
    compiled.declare_opt("border", style.border.as_deref());
    compiled.custom(style.custom_css.as_deref());

    compiled
}

/// Compile a field style for the field's wrapper element.
pub fn compile_field_style(style: &FieldStyle) -> CompiledStyle {
    let mut compiled = CompiledStyle::default();

    if let Some(classes) = style.css_class.as_deref() {
        for class in classes.split_whitespace() {
            compiled.class(class);
        }
    }

    compiled.declare_opt("width", style.width.as_deref());
    compiled.declare_opt("color", style.color.as_deref());
    compiled.declare_opt("background-color", style.background_color.as_deref());
    compiled.declare_opt("padding", style.padding.as_deref());
    compiled.declare_opt("margin", style.margin.as_deref());
    compiled.declare_opt("border", style.border.as_deref());
    compiled.custom(style.custom_css.as_deref());

    compiled
}
