use formwork::{
    Container, ContainerKind, ContainerStyle, Field, FieldValidation, FlexStyle, Form, Uuid,
};

pub const FORM_ID: Uuid = Uuid::from_u128(0x2000);

/// A contact form: a column of fields with a tooltip, a textarea and a topic select.
pub fn contact_form() -> Form {
    Form::new("Contact us")
        .with_id(FORM_ID)
        .with_container(
            Container::new(ContainerKind::Section)
                .with_id(Uuid::from_u128(0x2001))
                .with_style(
                    ContainerStyle::flex(
                        FlexStyle::new()
                            .with_direction("column")
                            .with_gap("0.75rem"),
                    )
                    .with_padding("1rem")
                    .with_border("1px solid #dee2e6"),
                )
                .with_field(
                    Field::new("text", "name", "Name")
                        .with_id(Uuid::from_u128(0x2002))
                        .with_placeholder("Your name")
                        .required(),
                )
                .with_field(
                    Field::new("email", "email", "Email")
                        .with_id(Uuid::from_u128(0x2003))
                        .with_placeholder("you@example.com")
                        .with_tooltip("We never share your address.")
                        .required(),
                )
                .with_field(
                    Field::new("select", "topic", "Topic")
                        .with_id(Uuid::from_u128(0x2004))
                        .with_option("support", "Support")
                        .with_option("sales", "Sales")
                        .with_option("other", "Something else")
                        .required(),
                )
                .with_field(
                    Field::new("textarea", "message", "Message")
                        .with_id(Uuid::from_u128(0x2005))
                        .with_validation(
                            FieldValidation::new().with_length(Some(10), Some(2000)),
                        )
                        .required(),
                ),
        )
        .with_custom_css(".dynamic-form .form-container { border-radius: 4px; }")
}
