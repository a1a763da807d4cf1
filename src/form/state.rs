use super::schema::{Field, FieldErrors, Schema};

/// Values of the profile form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub surname: String,
}

impl ProfileForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Surname => &mut self.surname,
        }
    }
}

/// Form values together with their validation result, which is
/// recomputed on every change.
#[derive(Clone, Debug)]
pub struct FormState {
    schema: &'static Schema,
    values: ProfileForm,
    errors: FieldErrors,
    /// Some field was edited.
    dirty: bool,
}

impl FormState {
    /// New form, validated right away so that invalid initial values
    /// are never considered valid.
    pub fn new(schema: &'static Schema, initial: ProfileForm) -> FormState {
        let mut state = FormState {
            schema,
            values: initial,
            errors: FieldErrors::default(),
            dirty: false,
        };
        state.validate();
        state
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.values.get_mut(field) = value;
        self.dirty = true;
        self.validate();
    }

    fn validate(&mut self) {
        let values = &self.values;
        self.errors = self.schema.validate(|f| values.get(f).to_string());
    }

    /// Values as entered.
    pub fn raw(&self) -> &ProfileForm {
        &self.values
    }

    /// Values trimmed for submission.
    pub fn values(&self) -> ProfileForm {
        ProfileForm {
            name: self.values.name.trim().to_string(),
            surname: self.values.surname.trim().to_string(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error to show under `field`. Nothing is shown until the first
    /// edit, after that errors of all fields are.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.dirty {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
