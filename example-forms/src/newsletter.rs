use formwork::{Container, Field, Form, Uuid};

pub const FORM_ID: Uuid = Uuid::from_u128(0x1000);
pub const CONTAINER_ID: Uuid = Uuid::from_u128(0x1001);
pub const EMAIL_FIELD_ID: Uuid = Uuid::from_u128(0x1002);

/// One generic block with one required text field named `email`.
pub fn newsletter_form() -> Form {
    Form::new("Newsletter")
        .with_id(FORM_ID)
        .with_description("Get monthly updates.")
        .with_container(
            Container::block().with_id(CONTAINER_ID).with_field(
                Field::new("text", "email", "Email")
                    .with_id(EMAIL_FIELD_ID)
                    .required(),
            ),
        )
}
