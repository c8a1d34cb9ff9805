//! HTML form generator implementation.

use std::borrow::Cow;

use formwork::{Container, Field, FieldKind, FieldOption, Form};
use tracing::debug;

use crate::escape::{escape_html, escape_raw_text};
use crate::style::{compile_container_style, compile_field_style};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Whether to include default CSS styling. Only used for full documents.
    pub include_styles: bool,
    /// Whether to escape user-supplied text. When disabled, labels, options,
    /// placeholders and custom CSS/JS are inserted exactly as authored.
    pub escape_text: bool,
    /// Whether to indent nested elements.
    pub indent: bool,
    /// Whether containers use the element of their kind (`section`,
    /// `fieldset`) instead of a plain `div`.
    pub semantic_containers: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            full_document: false,
            include_styles: true,
            escape_text: true,
            indent: true,
            semantic_containers: false,
        }
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Enable or disable escaping of user-supplied text.
    pub fn escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Enable or disable indentation.
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Wrap containers in the element of their kind instead of a `div`.
    pub fn with_semantic_containers(mut self, semantic: bool) -> Self {
        self.semantic_containers = semantic;
        self
    }
}

/// Generate the HTML form fragment for a form with default options.
pub fn to_html(form: &Form) -> String {
    to_html_with_options(form, &HtmlOptions::new())
}

/// Generate HTML for a form with custom options.
pub fn to_html_with_options(form: &Form, options: &HtmlOptions) -> String {
    debug!(
        form = %form.id,
        containers = form.containers.len(),
        full_document = options.full_document,
        "Rendering form"
    );
    Generator { options }.form(form)
}

struct Generator<'a> {
    options: &'a HtmlOptions,
}

impl Generator<'_> {
    fn form(&self, form: &Form) -> String {
        let mut html = String::new();
        let body_level = usize::from(self.options.full_document);

        if self.options.full_document {
            html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
            html.push_str("  <meta charset=\"UTF-8\">\n");
            html.push_str(
                "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            );
            if !form.title.is_empty() {
                html.push_str(&format!("  <title>{}</title>\n", self.text(&form.title)));
            }
            if self.options.include_styles {
                html.push_str(DEFAULT_STYLES);
            }
            html.push_str("</head>\n<body>\n");

            let ind = self.ind(body_level);
            if !form.title.is_empty() {
                html.push_str(&format!(
                    "{ind}<h1 class=\"form-title\">{}</h1>\n",
                    self.text(&form.title)
                ));
            }
            if !form.description.is_empty() {
                html.push_str(&format!(
                    "{ind}<p class=\"form-description\">{}</p>\n",
                    self.text(&form.description)
                ));
            }
        }

        let ind = self.ind(body_level);
        html.push_str(&format!(
            "{ind}<form id=\"form-{}\" class=\"dynamic-form\">\n",
            form.id
        ));
        for container in form.containers() {
            html.push_str(&self.container(container, body_level + 1));
        }
        html.push_str(&format!("{ind}</form>\n"));

        if let Some(css) = form.custom_css.as_deref().filter(|css| !css.is_empty()) {
            html.push_str(&format!("{ind}<style>{}</style>\n", self.raw_text(css)));
        }
        if let Some(js) = form.custom_js.as_deref().filter(|js| !js.is_empty()) {
            html.push_str(&format!("{ind}<script>{}</script>\n", self.raw_text(js)));
        }

        if self.options.full_document {
            html.push_str("</body>\n</html>\n");
        }

        html
    }

    fn container(&self, container: &Container, level: usize) -> String {
        let ind = self.ind(level);
        let element = if self.options.semantic_containers {
            container.kind.element()
        } else {
            "div"
        };
        let style = compile_container_style(&container.style);

        let mut class = String::from("form-container");
        if !style.classes.is_empty() {
            class.push(' ');
            class.push_str(&style.class_attr());
        }

        let mut html = format!("{ind}<{element} class=\"{}\"", self.text(&class));
        if !style.declarations.is_empty() {
            html.push_str(&format!(" style=\"{}\"", self.text(&style.style_attr())));
        }
        html.push_str(">\n");

        for field in container.fields() {
            html.push_str(&self.field(field, level + 1));
        }

        html.push_str(&format!("{ind}</{element}>\n"));
        html
    }

    fn field(&self, field: &Field, level: usize) -> String {
        let ind = self.ind(level);
        let inner = self.ind(level + 1);
        let style = compile_field_style(&field.style);

        let mut class = String::from("form-group mb-3");
        if !style.classes.is_empty() {
            class.push(' ');
            class.push_str(&style.class_attr());
        }

        let mut html = format!(
            "{ind}<div class=\"{}\" data-field-id=\"{}\"",
            self.text(&class),
            field.id
        );
        if !style.declarations.is_empty() {
            html.push_str(&format!(" style=\"{}\"", self.text(&style.style_attr())));
        }
        html.push_str(">\n");

        // The label is emitted for every kind, even when no control follows.
        if !field.label.is_empty() {
            html.push_str(&format!(
                "{inner}<label for=\"{}\" class=\"form-label\">{}</label>\n",
                self.text(&field.name),
                self.text(&field.label)
            ));
        }

        html.push_str(&self.control(field, level + 1));

        if !field.tooltip.is_empty() {
            html.push_str(&format!(
                "{inner}<small class=\"form-text text-muted\">{}</small>\n",
                self.text(&field.tooltip)
            ));
        }

        html.push_str(&format!("{ind}</div>\n"));
        html
    }

    /// The kind-specific control markup. Unknown kinds produce nothing.
    fn control(&self, field: &Field, level: usize) -> String {
        let ind = self.ind(level);
        let name = self.text(&field.name);
        let placeholder = self.text(&field.placeholder);
        let required = if field.is_required { " required" } else { "" };
        let rules = &field.validation;

        match &field.field_type {
            kind @ (FieldKind::Text | FieldKind::Email | FieldKind::Number) => {
                let mut attrs = format!(
                    "type=\"{}\" class=\"form-control\" id=\"{name}\" name=\"{name}\" placeholder=\"{placeholder}\"",
                    kind.tag()
                );
                if let Some(value) = field.default_value.as_deref().filter(|v| !v.is_empty()) {
                    attrs.push_str(&format!(" value=\"{}\"", self.text(value)));
                }
                if kind.is_textual() {
                    if let Some(min) = rules.min_length {
                        attrs.push_str(&format!(" minlength=\"{min}\""));
                    }
                    if let Some(max) = rules.max_length {
                        attrs.push_str(&format!(" maxlength=\"{max}\""));
                    }
                    if let Some(pattern) = rules.pattern.as_deref().filter(|p| !p.is_empty()) {
                        attrs.push_str(&format!(" pattern=\"{}\"", self.text(pattern)));
                    }
                }
                format!("{ind}<input {attrs}{required} />\n")
            }

            FieldKind::Textarea => {
                let mut attrs = format!(
                    "class=\"form-control\" id=\"{name}\" name=\"{name}\" placeholder=\"{placeholder}\""
                );
                if let Some(min) = rules.min_length {
                    attrs.push_str(&format!(" minlength=\"{min}\""));
                }
                if let Some(max) = rules.max_length {
                    attrs.push_str(&format!(" maxlength=\"{max}\""));
                }
                format!("{ind}<textarea {attrs}{required}></textarea>\n")
            }

            FieldKind::Select => {
                let option_ind = self.ind(level + 1);
                let mut html = format!(
                    "{ind}<select class=\"form-select\" id=\"{name}\" name=\"{name}\"{required}>\n"
                );
                for option in &field.options {
                    let selected = if field.is_default(&option.value) {
                        " selected"
                    } else {
                        ""
                    };
                    html.push_str(&format!(
                        "{option_ind}<option value=\"{}\"{selected}>{}</option>\n",
                        self.text(&option.value),
                        self.text(&option.text)
                    ));
                }
                html.push_str(&format!("{ind}</select>\n"));
                html
            }

            // A required checkbox group would force every box to be ticked.
            FieldKind::Checkbox => self.choices(field, "checkbox", "", level),

            FieldKind::Radio => self.choices(field, "radio", required, level),

            FieldKind::Unknown(tag) => {
                debug!(field = %field.name, kind = %tag, "No control for field type");
                String::new()
            }
        }
    }

    fn choices(&self, field: &Field, input_type: &str, required: &str, level: usize) -> String {
        field
            .options
            .iter()
            .map(|option| self.choice(field, option, input_type, required, level))
            .collect()
    }

    fn choice(
        &self,
        field: &Field,
        option: &FieldOption,
        input_type: &str,
        required: &str,
        level: usize,
    ) -> String {
        let ind = self.ind(level);
        let inner = self.ind(level + 1);
        let name = self.text(&field.name);
        let value = self.text(&option.value);
        let choice_id = self.text(&format!("{}_{}", field.name, option.value)).into_owned();
        let checked = if field.is_default(&option.value) {
            " checked"
        } else {
            ""
        };

        let mut html = format!("{ind}<div class=\"form-check\">\n");
        html.push_str(&format!(
            "{inner}<input class=\"form-check-input\" type=\"{input_type}\" id=\"{choice_id}\" name=\"{name}\" value=\"{value}\"{checked}{required} />\n"
        ));
        html.push_str(&format!(
            "{inner}<label class=\"form-check-label\" for=\"{choice_id}\">{}</label>\n",
            self.text(&option.text)
        ));
        html.push_str(&format!("{ind}</div>\n"));
        html
    }

    fn ind(&self, level: usize) -> String {
        if self.options.indent {
            "  ".repeat(level)
        } else {
            String::new()
        }
    }

    fn text<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.options.escape_text {
            escape_html(s)
        } else {
            Cow::Borrowed(s)
        }
    }

    fn raw_text<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.options.escape_text {
            escape_raw_text(s)
        } else {
            Cow::Borrowed(s)
        }
    }
}

/// Default CSS giving the generated class names their meaning.
const DEFAULT_STYLES: &str = r#"  <style>
    .dynamic-form {
      max-width: 720px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }
    .form-container {
      margin: 0.5rem 0;
    }
    .d-flex { display: flex; }
    .flex-row { flex-direction: row; }
    .flex-column { flex-direction: column; }
    .flex-row-reverse { flex-direction: row-reverse; }
    .flex-column-reverse { flex-direction: column-reverse; }
    .flex-wrap { flex-wrap: wrap; }
    .grid-container { display: grid; }
    .mb-3 { margin-bottom: 1rem; }
    .form-label {
      display: block;
      margin-bottom: 0.25rem;
    }
    .form-control, .form-select {
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }
    .form-check {
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }
    .form-text { font-size: 0.875em; }
    .text-muted { color: #6c757d; }
  </style>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use formwork::{Container, ContainerKind, FieldStyle, FieldValidation, Uuid};
    use pretty_assertions::assert_eq;

    fn single_field_form(field: Field) -> Form {
        Form::new("Test").with_id(Uuid::from_u128(1)).with_container(
            Container::block()
                .with_id(Uuid::from_u128(2))
                .with_field(field.with_id(Uuid::from_u128(3))),
        )
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .full_document(true)
            .with_styles(false)
            .escape_text(false)
            .with_indent(false)
            .with_semantic_containers(true);

        assert!(options.full_document);
        assert!(!options.include_styles);
        assert!(!options.escape_text);
        assert!(!options.indent);
        assert!(options.semantic_containers);
        assert!(!HtmlOptions::default().semantic_containers);
    }

    #[test]
    fn renders_text_field() {
        let form = single_field_form(
            Field::new("text", "email", "Email")
                .with_placeholder("you@example.com")
                .required(),
        );

        assert_eq!(
            to_html(&form),
            concat!(
                "<form id=\"form-00000000-0000-0000-0000-000000000001\" class=\"dynamic-form\">\n",
                "  <div class=\"form-container d-flex flex-row\" style=\"justify-content: flex-start; align-items: stretch; gap: 0;\">\n",
                "    <div class=\"form-group mb-3\" data-field-id=\"00000000-0000-0000-0000-000000000003\">\n",
                "      <label for=\"email\" class=\"form-label\">Email</label>\n",
                "      <input type=\"text\" class=\"form-control\" id=\"email\" name=\"email\" placeholder=\"you@example.com\" required />\n",
                "    </div>\n",
                "  </div>\n",
                "</form>\n",
            )
        );
    }

    #[test]
    fn renders_textarea_without_content() {
        let form = single_field_form(
            Field::new("TextArea", "bio", "Bio")
                .with_default_value("ignored")
                .with_validation(FieldValidation::new().with_length(None, Some(200))),
        );
        let html = to_html_with_options(&form, &HtmlOptions::new().with_indent(false));

        assert!(html.contains(
            "<textarea class=\"form-control\" id=\"bio\" name=\"bio\" placeholder=\"\" maxlength=\"200\"></textarea>\n"
        ));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn renders_select_options_in_order() {
        let form = single_field_form(
            Field::new("select", "plan", "Plan")
                .with_option("a", "A")
                .with_option("b", "B")
                .with_default_value("b"),
        );
        let html = to_html(&form);

        assert!(html.contains(concat!(
            "      <select class=\"form-select\" id=\"plan\" name=\"plan\">\n",
            "        <option value=\"a\">A</option>\n",
            "        <option value=\"b\" selected>B</option>\n",
            "      </select>\n",
        )));
    }

    #[test]
    fn checkbox_group_is_never_required() {
        let form = single_field_form(
            Field::new("checkbox", "topics", "Topics")
                .with_option("rust", "Rust")
                .with_option("go", "Go")
                .required(),
        );
        let html = to_html_with_options(&form, &HtmlOptions::new().with_indent(false));

        assert!(html.contains(
            "<input class=\"form-check-input\" type=\"checkbox\" id=\"topics_rust\" name=\"topics\" value=\"rust\" />\n<label class=\"form-check-label\" for=\"topics_rust\">Rust</label>\n"
        ));
        assert!(html.contains("id=\"topics_go\""));
        assert!(!html.contains("required"));
    }

    #[test]
    fn radio_inputs_carry_required() {
        let form = single_field_form(
            Field::new("radio", "size", "Size")
                .with_option("s", "Small")
                .with_option("l", "Large")
                .with_default_value("l")
                .required(),
        );
        let html = to_html_with_options(&form, &HtmlOptions::new().with_indent(false));

        assert_eq!(html.matches(" required />").count(), 2);
        assert!(html.contains("id=\"size_l\" name=\"size\" value=\"l\" checked required />"));
    }

    #[test]
    fn unknown_kind_keeps_label_and_tooltip() {
        let form = single_field_form(
            Field::new("signature", "sig", "Sign here").with_tooltip("Use your mouse"),
        );
        let html = to_html_with_options(&form, &HtmlOptions::new().with_indent(false));

        assert_eq!(
            html.lines().skip(2).take(4).collect::<Vec<_>>(),
            vec![
                "<div class=\"form-group mb-3\" data-field-id=\"00000000-0000-0000-0000-000000000003\">",
                "<label for=\"sig\" class=\"form-label\">Sign here</label>",
                "<small class=\"form-text text-muted\">Use your mouse</small>",
                "</div>",
            ]
        );
    }

    fn kinds_form() -> Form {
        Form::new("Kinds")
            .with_container(Container::new(ContainerKind::Section))
            .with_container(Container::new(ContainerKind::FieldGroup))
    }

    #[test]
    fn containers_render_as_div_by_default() {
        let html = to_html(&kinds_form());

        assert_eq!(html.matches("  <div class=\"form-container d-flex flex-row\"").count(), 2);
        assert_eq!(html.matches("  </div>\n").count(), 2);
        assert!(!html.contains("<section"));
        assert!(!html.contains("<fieldset"));
    }

    #[test]
    fn semantic_containers_use_kind_element() {
        let options = HtmlOptions::new().with_semantic_containers(true);
        let html = to_html_with_options(&kinds_form(), &options);

        assert!(html.contains("  <section class=\"form-container d-flex flex-row\""));
        assert!(html.contains("  </section>\n"));
        assert!(html.contains("  <fieldset class=\"form-container d-flex flex-row\""));
        assert!(html.contains("  </fieldset>\n"));
    }

    #[test]
    fn number_inputs_omit_text_constraints() {
        let form = single_field_form(
            Field::new("number", "qty", "Quantity").with_validation(
                FieldValidation::new()
                    .with_length(Some(1), Some(3))
                    .with_pattern("[0-9]+"),
            ),
        );
        let html = to_html(&form);

        assert!(html.contains(
            "<input type=\"number\" class=\"form-control\" id=\"qty\" name=\"qty\" placeholder=\"\" />\n"
        ));
    }

    #[test]
    fn field_style_on_wrapper() {
        let form = single_field_form(
            Field::new("number", "qty", "Quantity")
                .with_style(FieldStyle::new().with_css_class("narrow").with_width("6rem")),
        );
        let html = to_html(&form);
        assert!(html.contains(
            "<div class=\"form-group mb-3 narrow\" data-field-id=\"00000000-0000-0000-0000-000000000003\" style=\"width: 6rem;\">"
        ));
    }

    #[test]
    fn custom_css_and_js_follow_form() {
        let form = single_field_form(Field::new("text", "a", ""))
            .with_custom_css(".dynamic-form > div { gap: 1rem; }")
            .with_custom_js("console.log('ready');");
        let html = to_html(&form);

        assert!(html.ends_with(concat!(
            "</form>\n",
            "<style>.dynamic-form > div { gap: 1rem; }</style>\n",
            "<script>console.log('ready');</script>\n",
        )));
        assert!(!html.contains("<label"));
    }

    #[test]
    fn escapes_user_text() {
        let form = single_field_form(
            Field::new("text", "q", "Tom & \"Jerry\"")
                .with_placeholder("<none>")
                .with_tooltip("a < b"),
        )
        .with_custom_js("x = '</script>';");
        let html = to_html(&form);

        assert!(html.contains(">Tom &amp; &quot;Jerry&quot;</label>"));
        assert!(html.contains("placeholder=\"&lt;none&gt;\""));
        assert!(html.contains(">a &lt; b</small>"));
        assert!(html.contains("<script>x = '<\\/script>';</script>"));
    }

    #[test]
    fn raw_mode_inserts_text_verbatim() {
        let form = single_field_form(Field::new("text", "q", "<b>Bold</b>"))
            .with_custom_js("x = '</script>';");
        let html = to_html_with_options(&form, &HtmlOptions::new().escape_text(false));

        assert!(html.contains("class=\"form-label\"><b>Bold</b></label>"));
        assert!(html.contains("<script>x = '</script>';</script>"));
    }

    #[test]
    fn full_document_wraps_fragment() {
        let form = single_field_form(Field::new("text", "a", "A"))
            .with_description("Tell us about yourself");
        let html = to_html_with_options(&form, &HtmlOptions::new().full_document(true));

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("  <title>Test</title>\n"));
        assert!(html.contains(".grid-container { display: grid; }"));
        assert!(html.contains("  <h1 class=\"form-title\">Test</h1>\n"));
        assert!(html.contains("  <p class=\"form-description\">Tell us about yourself</p>\n"));
        assert!(html.contains("  <form id=\"form-"));
        assert!(html.contains("    <div class=\"form-container"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn full_document_without_styles() {
        let form = single_field_form(Field::new("text", "a", "A"));
        let html = to_html_with_options(
            &form,
            &HtmlOptions::new().full_document(true).with_styles(false),
        );
        assert!(!html.contains("<style>"));
    }
}
