use formwork::{
    Container, ContainerKind, ContainerStyle, Field, FieldStyle, FieldValidation, Form,
    GridStyle, Uuid,
};

pub const FORM_ID: Uuid = Uuid::from_u128(0x3000);

/// Account registration: a two-column grid of account fields and a field
/// group of preferences using radio buttons and checkboxes.
pub fn registration_form() -> Form {
    Form::new("Create an account")
        .with_id(FORM_ID)
        .with_container(
            Container::new(ContainerKind::GenericBlock)
                .with_id(Uuid::from_u128(0x3001))
                .with_style(
                    ContainerStyle::grid(GridStyle::new().with_columns(2).with_gap("1rem"))
                        .with_background_color("#f8f9fa"),
                )
                .with_field(
                    Field::new("text", "username", "Username")
                        .with_id(Uuid::from_u128(0x3002))
                        .with_validation(
                            FieldValidation::new()
                                .with_length(Some(3), Some(16))
                                .with_pattern("[a-z0-9_]+"),
                        )
                        .required(),
                )
                .with_field(
                    Field::new("email", "email", "Email")
                        .with_id(Uuid::from_u128(0x3003))
                        .with_validation(
                            FieldValidation::new()
                                .with_pattern("[^@\\s]+@[^@\\s]+")
                                .with_error_message("Enter a valid e-mail address"),
                        )
                        .required(),
                )
                .with_field(
                    Field::new("number", "age", "Age")
                        .with_id(Uuid::from_u128(0x3004))
                        .with_style(FieldStyle::new().with_width("8rem")),
                ),
        )
        .with_container(
            Container::new(ContainerKind::FieldGroup)
                .with_id(Uuid::from_u128(0x3005))
                .with_style(ContainerStyle::columns().with_margin("1rem 0"))
                .with_field(
                    Field::new("radio", "plan", "Plan")
                        .with_id(Uuid::from_u128(0x3006))
                        .with_option("free", "Free")
                        .with_option("pro", "Pro")
                        .with_default_value("free")
                        .required(),
                )
                .with_field(
                    Field::new("checkbox", "interests", "Interests")
                        .with_id(Uuid::from_u128(0x3007))
                        .with_option("news", "News")
                        .with_option("events", "Events")
                        .with_tooltip("Pick as many as you like."),
                ),
        )
}
