use once_cell::sync::Lazy;
use regex::Regex;

/// Fields of the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Surname,
}

/// Single check applied to a trimmed field value.
#[derive(Clone, Debug)]
pub enum Rule {
    Required(&'static str),
    MaxLength(usize, &'static str),
    Pattern(Regex, &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required(msg) if value.is_empty() => Some(*msg),
            Rule::MaxLength(max, msg) if value.chars().count() > *max => Some(*msg),
            Rule::Pattern(re, msg) if !re.is_match(value) => Some(*msg),
            _ => None,
        }
    }

    fn is_required(&self) -> bool {
        matches!(self, Rule::Required(_))
    }
}

/// Per-field error messages. No message means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Surname => self.surname.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Surname => &mut self.surname,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none()
    }
}

/// Declarative rule set of a form.
#[derive(Clone, Debug)]
pub struct Schema {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Schema {
        Schema { fields: Vec::new() }
    }

    pub fn field(mut self, field: Field, rules: Vec<Rule>) -> Schema {
        self.fields.push((field, rules));
        self
    }

    /// Error of a single field: the message of the first failing rule.
    ///
    /// Values are trimmed first. An empty value of a field without
    /// [`Rule::Required`] is valid regardless of its other rules.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<String> {
        let value = value.trim();
        let rules = self
            .fields
            .iter()
            .find_map(|(f, rules)| (*f == field).then_some(rules))?;

        if value.is_empty() && !rules.iter().any(Rule::is_required) {
            return None;
        }

        rules
            .iter()
            .find_map(|rule| rule.check(value))
            .map(str::to_string)
    }

    pub fn validate(&self, value_of: impl Fn(Field) -> String) -> FieldErrors {
        let mut errors = FieldErrors::default();

        for (field, _) in &self.fields {
            *errors.slot(*field) = self.validate_field(*field, &value_of(*field));
        }

        errors
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new()
    }
}

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\p{M} '.\-]*$").unwrap());

/// Rules of the profile form. Surname stays optional without further
/// rules, so validity of the form depends on the name only.
pub static PROFILE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            Field::Name,
            vec![
                Rule::Required("Name is required"),
                Rule::MaxLength(50, "Name must be at most 50 characters long"),
                Rule::Pattern(
                    NAME.clone(),
                    "Name may contain only letters, spaces, dots, hyphens and apostrophes",
                ),
            ],
        )
        .field(Field::Surname, vec![])
});
