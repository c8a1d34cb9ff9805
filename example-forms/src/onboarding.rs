use formwork::{Container, Field, Form, Step, Uuid};

pub const FORM_ID: Uuid = Uuid::from_u128(0x4000);

fn profile_container() -> Container {
    Container::block()
        .with_id(Uuid::from_u128(0x4001))
        .with_field(
            Field::new("text", "full_name", "Full name")
                .with_id(Uuid::from_u128(0x4002))
                .required(),
        )
}

fn team_container() -> Container {
    Container::block().with_id(Uuid::from_u128(0x4003)).with_field(
        Field::new("select", "team", "Team")
            .with_id(Uuid::from_u128(0x4004))
            .with_option("eng", "Engineering")
            .with_option("ops", "Operations")
            .required(),
    )
}

/// A two-step onboarding form.
///
/// The containers are listed both at the top level and under their steps,
/// so single-page rendering and validation see every field.
pub fn onboarding_form() -> Form {
    Form::new("Onboarding")
        .with_id(FORM_ID)
        .with_container(profile_container())
        .with_container(team_container())
        .with_step(Step::new(2, "Team").with_container(team_container()))
        .with_step(Step::new(1, "Profile").with_container(profile_container()))
}
